/// Deterministic frame metadata.
///
/// This is the wall-clock timebase for the engine loop. It is intentionally
/// small and pure so update sequences can be recorded and replayed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed wall-clock delta (milliseconds).
    pub dt_ms: f64,
}

impl Frame {
    pub fn new(index: u64, dt_ms: f64) -> Self {
        Self { index, dt_ms }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_ms)
    }

    /// Wall time at the start of the frame (milliseconds).
    pub fn wall_ms(&self) -> f64 {
        self.index as f64 * self.dt_ms
    }
}
