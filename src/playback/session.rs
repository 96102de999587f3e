use crate::playback::{PlaybackState, SimulatedProgress};

/// Play/pause state machine driving a [`SimulatedProgress`].
///
/// It has no clock of its own; whoever owns it calls [`Playback::tick`]
/// once per period while [`PlaybackState::Playing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    state: PlaybackState,
    progress: SimulatedProgress,
    step: u16,
}

impl Playback {
    pub fn new(step: u16) -> Self {
        Self {
            state: PlaybackState::Paused,
            progress: SimulatedProgress::new(),
            step,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn progress(&self) -> SimulatedProgress {
        self.progress
    }

    pub fn toggle(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Finished => {
                self.progress.reset();
                PlaybackState::Playing
            }
        };
        self.state
    }

    /// Returns `false` when the tick was ignored because nothing is playing.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        if self.progress.advance(self.step) {
            self.state = PlaybackState::Finished;
        }
        true
    }
}
