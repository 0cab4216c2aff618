//! State for the background-music toggle and its draggable button.
//!
//! The web layer owns the media element; this module decides what should
//! happen to it. Playback is asynchronous in the browser, so a play request is
//! issued first and the outcome is reported back with [`AudioToggle::play_resolved`]
//! or [`AudioToggle::play_rejected`].

use super::constants::{AUDIO_BUTTON_SIZE_PX, AUDIO_VOLUME};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    Muted,
    Playing,
}

impl AudioState {
    pub fn icon_class(self) -> &'static str {
        match self {
            AudioState::Muted => "fas fa-volume-mute",
            AudioState::Playing => "fas fa-volume-up",
        }
    }

    pub fn is_paused(self) -> bool {
        self == AudioState::Muted
    }
}

/// Who asked for playback; decides what a rejection disarms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOrigin {
    Toggle,
    FirstInteraction,
}

/// What the caller should do with the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play(PlayOrigin),
    Pause,
    /// Swallowed: a drag just ended or a play request is still in flight.
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Autoplay {
    #[default]
    Armed,
    Disarmed,
}

#[derive(Clone, Copy, Debug)]
pub struct AudioConfig {
    pub volume: f64,
    pub button_size: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: AUDIO_VOLUME,
            button_size: AUDIO_BUTTON_SIZE_PX,
        }
    }
}

/// Press/move/release tracking that tells a drag apart from a click.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragGesture {
    active: bool,
    moved: bool,
    grab_offset: Vec2,
    gesture: u32,
}

impl DragGesture {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Press at `pointer` on a control whose top-left corner is `origin`.
    pub fn begin(&mut self, pointer: Vec2, origin: Vec2) {
        self.active = true;
        self.moved = false;
        self.grab_offset = pointer - origin;
        self.gesture = self.gesture.wrapping_add(1);
    }

    /// New top-left for the control, clamped so it stays fully inside the viewport.
    pub fn drag_to(&mut self, pointer: Vec2, viewport: Vec2, size: f32) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.moved = true;
        Some(clamp_to_viewport(pointer - self.grab_offset, viewport, size))
    }

    /// Release. Returns the gesture id to expire later when the press moved.
    pub fn end(&mut self) -> Option<u32> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.moved.then_some(self.gesture)
    }

    /// Clear the click guard of `gesture` unless a newer press replaced it.
    pub fn expire(&mut self, gesture: u32) {
        if gesture == self.gesture && !self.active {
            self.moved = false;
        }
    }

    /// Consume the click guard; true means this click ends a drag.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

#[inline]
pub fn clamp_to_viewport(pos: Vec2, viewport: Vec2, size: f32) -> Vec2 {
    let max = (viewport - Vec2::splat(size)).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}

#[derive(Clone, Debug, Default)]
pub struct AudioToggle {
    state: AudioState,
    pending: Option<PlayOrigin>,
    autoplay: Autoplay,
    pub drag: DragGesture,
    pub config: AudioConfig,
}

impl AudioToggle {
    pub fn new(config: AudioConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay == Autoplay::Armed
    }

    pub fn play(&mut self) -> AudioCommand {
        self.request_play(PlayOrigin::Toggle)
    }

    pub fn pause(&mut self) -> AudioCommand {
        if self.state == AudioState::Muted {
            return AudioCommand::Ignore;
        }
        self.state = AudioState::Muted;
        AudioCommand::Pause
    }

    /// Button click. The first click after a moving drag is swallowed.
    pub fn toggle(&mut self) -> AudioCommand {
        if self.drag.take_click_suppression() {
            return AudioCommand::Ignore;
        }
        // an explicit choice wins over the fallback
        self.autoplay = Autoplay::Disarmed;
        match self.state {
            AudioState::Muted => self.play(),
            AudioState::Playing => self.pause(),
        }
    }

    /// Any click or scroll on the page; tries autoplay exactly once.
    pub fn first_interaction(&mut self) -> AudioCommand {
        if self.autoplay != Autoplay::Armed || self.state == AudioState::Playing {
            return AudioCommand::Ignore;
        }
        self.autoplay = Autoplay::Disarmed;
        self.request_play(PlayOrigin::FirstInteraction)
    }

    pub fn drag_to(&mut self, pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
        let size = self.config.button_size;
        self.drag.drag_to(pointer, viewport, size)
    }

    pub fn play_resolved(&mut self, origin: PlayOrigin) {
        if self.pending == Some(origin) {
            self.pending = None;
        }
        self.state = AudioState::Playing;
    }

    pub fn play_rejected(&mut self, origin: PlayOrigin) {
        if self.pending == Some(origin) {
            self.pending = None;
        }
        self.state = AudioState::Muted;
    }

    fn request_play(&mut self, origin: PlayOrigin) -> AudioCommand {
        if self.pending.is_some() || self.state == AudioState::Playing {
            return AudioCommand::Ignore;
        }
        self.pending = Some(origin);
        AudioCommand::Play(origin)
    }
}
