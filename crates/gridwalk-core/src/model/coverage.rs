use std::time::Duration;

/// Result of one engine run: distinct points covered and wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub unique: u64,
    pub duration: Duration,
}

impl Coverage {
    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}
