// src/gui/progress.rs
use crate::progress::Progress;

/// Collects pipeline progress for the status bar at the bottom of the window.
#[derive(Debug, Default)]
pub struct GuiProgress {
    last_message: Option<String>,
    completed: Vec<String>,
    expected: usize,
}

impl GuiProgress {
    pub fn new() -> Self { Self::default() }

    /// One line: completed stages, or the last message if none completed.
    pub fn into_status(self) -> String {
        match (self.completed.is_empty(), self.last_message) {
            (true, Some(msg)) => msg,
            (true, None) => s!("Idle"),
            (false, _) if self.expected > 0 => {
                format!("{} ({}/{})", self.completed.join(" → "), self.completed.len(), self.expected)
            }
            (false, _) => self.completed.join(" → "),
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, stages: usize) {
        self.expected = stages;
        self.completed.clear();
    }
    fn log(&mut self, msg: &str) {
        self.last_message = Some(s!(msg));
    }
    fn stage_done(&mut self, stage: &str) {
        self.completed.push(s!(stage));
    }
}
