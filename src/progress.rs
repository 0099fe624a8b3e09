// src/progress.rs
/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages that will run.
    fn begin(&mut self, _stages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage (extract, statistics, store, report) completes.
    fn stage_done(&mut self, _stage: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
