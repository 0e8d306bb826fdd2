use crate::core::{ConfigProvider, ExitOutcome, Invocation, ProcessRunner, Result};

/// One-shot handoff engine: resolve the invocation from configuration, run
/// it through the process runner, and report how the external program ended.
/// No retry, no timeout, no output capture.
pub struct Launcher<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<ExitOutcome> {
        let invocation = build_invocation(config);

        tracing::info!(
            program = %invocation.program,
            alerter_type = %config.alerter_type(),
            list_id = %config.list_id(),
            "Handing off to external program"
        );

        let outcome = self.runner.run(&invocation).await?;

        if outcome.success() {
            tracing::info!("External program exited cleanly");
        } else {
            match outcome {
                ExitOutcome::Exited(code) => {
                    tracing::warn!(code, "External program exited with failure");
                }
                ExitOutcome::Signaled(signal) => {
                    tracing::warn!(signal, "External program killed by signal");
                }
            }
        }

        Ok(outcome)
    }
}

/// Builds the fixed argument vector the external program expects. The token
/// value is carried here but never logged.
pub fn build_invocation<C: ConfigProvider>(config: &C) -> Invocation {
    Invocation::new(
        config.program(),
        vec![
            "--alerter-type".to_string(),
            config.alerter_type().to_string(),
            "-dt".to_string(),
            config.token().to_string(),
            "--list-id".to_string(),
            config.list_id().to_string(),
        ],
    )
}
