pub mod progress;
pub mod session;
pub mod state;
pub mod ticker;

pub use progress::SimulatedProgress;
pub use session::Playback;
pub use state::PlaybackState;
pub use ticker::ProgressTicker;
