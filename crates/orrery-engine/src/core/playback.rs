/// Playback state checked by the frame dispatcher before running updates.
///
/// There is no terminal state: the game can be toggled indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Running,
    Stopped,
}

impl PlaybackState {
    pub fn is_running(self) -> bool {
        self == PlaybackState::Running
    }

    /// Flip between running and stopped. Returns the new state.
    pub fn toggle(&mut self) -> PlaybackState {
        *self = match *self {
            PlaybackState::Running => PlaybackState::Stopped,
            PlaybackState::Stopped => PlaybackState::Running,
        };
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(PlaybackState::default().is_running());
    }

    #[test]
    fn toggle_alternates() {
        let mut state = PlaybackState::Running;
        assert_eq!(state.toggle(), PlaybackState::Stopped);
        assert!(!state.is_running());
        assert_eq!(state.toggle(), PlaybackState::Running);
        assert!(state.is_running());
    }
}
