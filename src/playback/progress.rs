/// Simulated playback position in hundredths of a track.
///
/// Integer steps keep 100 ticks of 1% exactly on the end instead of
/// drifting past it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedProgress {
    hundredths: u16,
}

impl SimulatedProgress {
    pub const FULL: u16 = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Moves forward by `step` hundredths, pinned at the end. Returns
    /// whether the end has been reached.
    pub fn advance(&mut self, step: u16) -> bool {
        self.hundredths = self.hundredths.saturating_add(step).min(Self::FULL);
        self.is_complete()
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.hundredths) / f64::from(Self::FULL)
    }

    pub fn percent(&self) -> u16 {
        self.hundredths
    }

    pub fn is_complete(&self) -> bool {
        self.hundredths >= Self::FULL
    }

    pub fn reset(&mut self) {
        self.hundredths = 0;
    }
}
