//! Background music toggle.
//!
//! Playback is a capability behind the [`Playback`] trait. Starting is
//! deferred until the first user gesture and a rejected start is ignored:
//! the toggle simply stays in the "not playing" state.

use thiserror::Error;
use tracing::debug;

/// Why a play request did not start audio.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("audio playback is not supported here")]
    Unsupported,
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// A playable media handle.
pub trait Playback: Send {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn set_volume(&mut self, _volume: f32) {}
}

impl<T: Playback + ?Sized> Playback for Box<T> {
    fn play(&mut self) -> Result<(), PlaybackError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }
}

/// Playback for environments without an audio device; every play is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl Playback for Muted {
    fn play(&mut self) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unsupported)
    }

    fn pause(&mut self) {}
}

/// Music state as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Nothing has been attempted yet
    Idle,
    Playing,
    Paused,
}

impl ToggleState {
    /// Glyph shown on the toggle button.
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleState::Playing => "❚❚",
            _ => "♫",
        }
    }
}

pub struct AudioToggle<P: Playback> {
    player: P,
    volume: f32,
    started: bool,
    playing: bool,
}

impl<P: Playback> AudioToggle<P> {
    pub fn new(player: P, volume: f32) -> Self {
        Self {
            player,
            volume,
            started: false,
            playing: false,
        }
    }

    pub fn state(&self) -> ToggleState {
        match (self.started, self.playing) {
            (_, true) => ToggleState::Playing,
            (true, false) => ToggleState::Paused,
            (false, false) => ToggleState::Idle,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// First-gesture hook: starts playback once, ignores later calls.
    pub fn on_gesture(&mut self) -> ToggleState {
        if !self.started {
            self.start();
        }
        self.state()
    }

    /// Toggle button: start if never started, otherwise flip play/pause.
    pub fn toggle(&mut self) -> ToggleState {
        if !self.started {
            self.start();
        } else if self.playing {
            self.player.pause();
            self.playing = false;
        } else {
            self.try_play();
        }
        self.state()
    }

    fn start(&mut self) {
        self.player.set_volume(self.volume);
        if self.try_play() {
            self.started = true;
        }
    }

    fn try_play(&mut self) -> bool {
        match self.player.play() {
            Ok(()) => {
                self.playing = true;
                true
            }
            Err(e) => {
                debug!("Ignoring playback failure: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        plays: usize,
        pauses: usize,
        volume: Option<f32>,
    }

    impl Playback for Recorder {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.plays += 1;
            Ok(())
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = Some(volume);
        }
    }

    #[test]
    fn test_gesture_starts_once() {
        let mut toggle = AudioToggle::new(Recorder::default(), 0.5);
        assert_eq!(toggle.state(), ToggleState::Idle);
        assert_eq!(toggle.on_gesture(), ToggleState::Playing);
        assert_eq!(toggle.on_gesture(), ToggleState::Playing);
        assert_eq!(toggle.player.plays, 1);
        assert_eq!(toggle.player.volume, Some(0.5));
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut toggle = AudioToggle::new(Recorder::default(), 0.5);
        assert_eq!(toggle.toggle(), ToggleState::Playing);
        assert_eq!(toggle.toggle(), ToggleState::Paused);
        assert_eq!(toggle.state().glyph(), "♫");
        assert_eq!(toggle.toggle(), ToggleState::Playing);
        assert_eq!(toggle.state().glyph(), "❚❚");
        assert_eq!(toggle.player.plays, 2);
        assert_eq!(toggle.player.pauses, 1);
    }

    #[test]
    fn test_rejected_play_is_ignored() {
        let mut toggle = AudioToggle::new(Muted, 0.5);
        assert_eq!(toggle.on_gesture(), ToggleState::Idle);
        assert_eq!(toggle.toggle(), ToggleState::Idle);
        assert!(!toggle.is_playing());
    }
}
