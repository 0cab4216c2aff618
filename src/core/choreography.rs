//! Scroll progress to card and backdrop poses.
//!
//! Everything here is a pure function of the scroll progress, the card index
//! and the viewport size. The web layer calls these on every scroll update and
//! writes the result straight into inline transforms, so scrolling backwards
//! replays the exact same poses in reverse.

use super::constants::*;
use super::ease::{lerp, Ease};
use super::error::{ensure_non_negative, ConfigError};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// How a card decides it has finished its slot and may start the diagonal exit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitGate {
    /// `card_progress == 1.0`; matches the timing the page has always shipped with.
    #[default]
    ExactCompletion,
    /// `card_progress >= 1.0`; tolerant of progress that never lands on 1.0 exactly.
    ReachedCompletion,
}

#[derive(Clone, Debug)]
pub struct ChoreographyConfig {
    pub cards_start: f32,
    pub exit_distance: f32,
    pub exit_falloff: f32,
    pub rotations_deg: Vec<f32>,
    pub exit_gate: ExitGate,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            cards_start: CARDS_START_PROGRESS,
            exit_distance: CARD_EXIT_DISTANCE,
            exit_falloff: CARD_EXIT_FALLOFF,
            rotations_deg: CARD_ROTATIONS_DEG.to_vec(),
            exit_gate: ExitGate::default(),
        }
    }
}

impl ChoreographyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..CARDS_END_PROGRESS).contains(&self.cards_start) {
            return Err(ConfigError::CardsStart(self.cards_start));
        }
        ensure_non_negative("exit distance", self.exit_distance)?;
        ensure_non_negative("exit falloff", self.exit_falloff)?;
        Ok(())
    }
}

/// Instantaneous pose of one card, relative to its resting place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub offset: Vec2,
    pub rotation_deg: f32,
}

impl CardPose {
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) rotate({}deg)",
            self.offset.x, self.offset.y, self.rotation_deg
        )
    }
}

pub struct CardChoreographer {
    config: ChoreographyConfig,
    total_cards: usize,
}

impl CardChoreographer {
    pub fn new(config: ChoreographyConfig, total_cards: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            total_cards,
        })
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    /// Progress remapped onto the card range, or `None` while the backdrop zoom owns the scroll.
    pub fn cards_progress(&self, progress: f32) -> Option<f32> {
        let p = progress.clamp(0.0, 1.0);
        if p < self.config.cards_start {
            return None;
        }
        let range = CARDS_END_PROGRESS - self.config.cards_start;
        Some((p - self.config.cards_start) / range)
    }

    /// Local progress of card `index` through its own slot, clamped to [0, 1].
    pub fn card_progress(&self, progress: f32, index: usize) -> f32 {
        let Some(cards_progress) = self.cards_progress(progress) else {
            return 0.0;
        };
        if self.total_cards == 0 {
            return 0.0;
        }
        // (cards_progress - i/n) / (1/n), kept in this form so the final card lands on 1.0
        (cards_progress * self.total_cards as f32 - index as f32).clamp(0.0, 1.0)
    }

    #[allow(clippy::float_cmp)]
    fn slot_complete(&self, card_progress: f32) -> bool {
        match self.config.exit_gate {
            ExitGate::ExactCompletion => card_progress == 1.0,
            ExitGate::ReachedCompletion => card_progress >= 1.0,
        }
    }

    /// Progress of the diagonal exit, measured from the end of the card's slot to
    /// the end of the whole range. `None` until the slot is complete, and always
    /// `None` for the last card.
    pub fn remaining_progress(&self, progress: f32, index: usize) -> Option<f32> {
        if index + 1 >= self.total_cards {
            return None;
        }
        let cards_progress = self.cards_progress(progress)?;
        if !self.slot_complete(self.card_progress(progress, index)) {
            return None;
        }
        let slot_end = (index + 1) as f32 / self.total_cards as f32;
        let remaining = (cards_progress - slot_end) / (1.0 - slot_end);
        Some(remaining.max(0.0))
    }

    pub fn rotation(&self, index: usize) -> f32 {
        self.config.rotations_deg.get(index).copied().unwrap_or(0.0)
    }

    /// Pose before any card movement: parked one viewport height below rest.
    pub fn initial_pose(&self, index: usize, viewport: Viewport) -> CardPose {
        CardPose {
            offset: Vec2::new(0.0, viewport.height),
            rotation_deg: self.rotation(index),
        }
    }

    pub fn card_pose(&self, progress: f32, index: usize, viewport: Viewport) -> CardPose {
        if self.cards_progress(progress).is_none() {
            return self.initial_pose(index, viewport);
        }
        let card_progress = self.card_progress(progress, index);
        let mut offset = Vec2::new(0.0, viewport.height * (1.0 - card_progress));

        if let Some(remaining) = self.remaining_progress(progress, index) {
            if remaining > 0.0 {
                let multiplier = 1.0 - index as f32 * self.config.exit_falloff;
                offset = -viewport.size() * self.config.exit_distance * multiplier * remaining;
            }
        }

        CardPose {
            offset,
            rotation_deg: self.rotation(index),
        }
    }

    pub fn poses(&self, progress: f32, viewport: Viewport) -> Vec<CardPose> {
        (0..self.total_cards)
            .map(|i| self.card_pose(progress, i, viewport))
            .collect()
    }
}

/// Zoom state of the landing image and the sticky card stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropPose {
    pub landing_scale: f32,
    pub landing_z: f32,
    pub stage_scale: f32,
}

impl BackdropPose {
    pub const IDENTITY: BackdropPose = BackdropPose {
        landing_scale: 1.0,
        landing_z: 0.0,
        stage_scale: 1.0,
    };

    pub fn landing_transform(&self) -> String {
        format!(
            "translate3d(0px, 0px, {:.3}px) scale({:.4})",
            self.landing_z, self.landing_scale
        )
    }

    pub fn stage_transform(&self) -> String {
        format!("scale({:.4})", self.stage_scale)
    }
}

/// Backdrop zoom over the first `ZOOM_UNITS` of the main timeline, then held.
pub fn backdrop_pose(progress: f32) -> BackdropPose {
    let units = progress.clamp(0.0, 1.0) * MAIN_TIMELINE_UNITS;
    let t = Ease::Power1InOut.apply(units / ZOOM_UNITS);
    let from = BackdropPose::IDENTITY;
    BackdropPose {
        landing_scale: lerp(from.landing_scale, LANDING_SCALE_END, t),
        landing_z: lerp(from.landing_z, LANDING_Z_END, t),
        stage_scale: lerp(from.stage_scale, STAGE_SCALE_END, t),
    }
}

/// Scroll distance (px) of the pinned main region for a given viewport.
#[inline]
pub fn main_scroll_span(viewport: Viewport) -> f32 {
    viewport.height * MAIN_SCROLL_VIEWPORTS
}
