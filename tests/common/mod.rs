// tests/common/mod.rs
//
// Shared helpers for the integration tests.
//
use std::fs;
use std::path::PathBuf;

use color_tally::progress::Progress;

/// Fresh, empty per-test directory under the system temp dir.
pub fn tmp_dir(prefix: &str, name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("color_tally_{}_{}_{}", prefix, name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Progress reporter that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: usize,
    pub lines: Vec<String>,
    pub stages: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, stages: usize) { self.total = stages; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn stage_done(&mut self, stage: &str) { self.stages.push(stage.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}
