use std::future::Future;

/// How a single fan-out task resolved. `Skipped` covers the
/// not-configured no-op paths and counts as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    Skipped,
}

pub struct TaskOutcome {
    pub name: &'static str,
    pub outcome: Result<DispatchOutcome, anyhow::Error>,
}

/// Settled results of a best-effort fan-out.
///
/// The report never decides the request's success; it only carries the
/// per-task diagnostics that the handlers may attach to the response.
#[derive(Default)]
pub struct FanoutReport {
    outcomes: Vec<TaskOutcome>,
}

impl FanoutReport {
    fn record(&mut self, name: &'static str, outcome: Result<DispatchOutcome, anyhow::Error>) {
        match &outcome {
            Ok(DispatchOutcome::Delivered) => tracing::info!(task = name, "Dispatch task completed."),
            Ok(DispatchOutcome::Skipped) => tracing::info!(task = name, "Dispatch task skipped."),
            Err(error) => {
                tracing::error!(task = name, error = ?error, "Dispatch task failed.")
            }
        }
        self.outcomes.push(TaskOutcome { name, outcome });
    }

    /// One `"<task>: <message>"` entry per failed task, in task order.
    pub fn delivery_errors(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|task| match &task.outcome {
                Err(error) => Some(format!("{}: {}", task.name, error)),
                Ok(_) => None,
            })
            .collect()
    }

    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }
}

/// Run one named dispatch task to completion and report its outcome.
pub async fn settle_one<F>((name, task): (&'static str, F)) -> FanoutReport
where
    F: Future<Output = Result<DispatchOutcome, anyhow::Error>>,
{
    let mut report = FanoutReport::default();
    report.record(name, task.await);
    report
}

/// Run three named dispatch tasks concurrently and wait for all of them
/// to settle. A failure in one task never cancels the others; every task
/// reports its own outcome.
pub async fn settle_three<A, B, C>(
    (first_name, first): (&'static str, A),
    (second_name, second): (&'static str, B),
    (third_name, third): (&'static str, C),
) -> FanoutReport
where
    A: Future<Output = Result<DispatchOutcome, anyhow::Error>>,
    B: Future<Output = Result<DispatchOutcome, anyhow::Error>>,
    C: Future<Output = Result<DispatchOutcome, anyhow::Error>>,
{
    let (first, second, third) = tokio::join!(first, second, third);

    let mut report = FanoutReport::default();
    report.record(first_name, first);
    report.record(second_name, second);
    report.record(third_name, third);
    report
}
