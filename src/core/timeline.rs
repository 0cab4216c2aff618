//! Minimal scrubbed timeline for the sticky text crossfade.
//!
//! A [`Timeline`] holds one track per text item. Tweens are placed either at
//! the current end of the timeline or relative to it, and sampling is a pure
//! function of time: a tween starts from whatever pose the earlier tweens of
//! its track produce at its start time, and later tweens win where they overlap.

use super::constants::*;
use super::ease::{lerp, Ease};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPose {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
}

impl TextPose {
    pub const SHOWN: TextPose = TextPose {
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
    };
    pub const WAITING: TextPose = TextPose {
        opacity: 0.0,
        scale: TEXT_HIDDEN_SCALE,
        offset_y: TEXT_ENTER_OFFSET,
    };
    pub const LEFT: TextPose = TextPose {
        opacity: 0.0,
        scale: TEXT_HIDDEN_SCALE,
        offset_y: TEXT_EXIT_OFFSET,
    };

    pub fn lerp(&self, to: &TextPose, t: f32) -> TextPose {
        TextPose {
            opacity: lerp(self.opacity, to.opacity, t),
            scale: lerp(self.scale, to.scale, t),
            offset_y: lerp(self.offset_y, to.offset_y, t),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate(0px, {:.3}px) scale({:.4})",
            self.offset_y, self.scale
        )
    }
}

/// Where a tween lands on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Appended at the current end.
    End,
    /// Offset from the current end; `-0.9` reads as "-=0.9".
    FromEnd(f32),
    /// Absolute time.
    At(f32),
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    start: f32,
    duration: f32,
    ease: Ease,
    from: TextPose,
    to: TextPose,
}

impl Tween {
    #[inline]
    fn end(&self) -> f32 {
        self.start + self.duration
    }

    fn local(&self, time: f32) -> f32 {
        if self.duration <= 0.0 || time >= self.end() {
            return 1.0;
        }
        self.ease.apply((time - self.start) / self.duration)
    }
}

#[derive(Clone, Debug)]
struct Track {
    initial: TextPose,
    tweens: SmallVec<[Tween; 4]>,
}

impl Track {
    // Pose at `time` using only the first `upto` tweens (ordered by start).
    fn eval(&self, time: f32, upto: usize) -> TextPose {
        let mut pose = self.initial;
        for tw in &self.tweens[..upto] {
            if time >= tw.start {
                pose = tw.from.lerp(&tw.to, tw.local(time));
            }
        }
        pose
    }

    fn insert(&mut self, start: f32, duration: f32, ease: Ease, to: TextPose) {
        let at = self.tweens.partition_point(|tw| tw.start <= start);
        self.tweens.insert(
            at,
            Tween {
                start,
                duration,
                ease,
                from: self.initial,
                to,
            },
        );
        // Start values depend on everything placed before, so re-resolve in order.
        for i in 0..self.tweens.len() {
            let from = self.eval(self.tweens[i].start, i);
            self.tweens[i].from = from;
        }
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    tracks: Vec<Track>,
    duration: f32,
    default_duration: f32,
}

impl Timeline {
    pub fn new(initial: Vec<TextPose>, default_duration: f32) -> Self {
        Self {
            tracks: initial
                .into_iter()
                .map(|initial| Track {
                    initial,
                    tweens: SmallVec::new(),
                })
                .collect(),
            duration: 0.0,
            default_duration,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Resolve a placement against the current end; negative times clamp to zero.
    pub fn resolve(&self, position: Position) -> f32 {
        let t = match position {
            Position::End => self.duration,
            Position::FromEnd(delta) => self.duration + delta,
            Position::At(t) => t,
        };
        t.max(0.0)
    }

    /// Tween `target` to `to` with the default duration and linear ease.
    pub fn to(&mut self, target: usize, to: TextPose, position: Position) -> &mut Self {
        let duration = self.default_duration;
        self.to_with(target, to, position, duration, Ease::Linear)
    }

    pub fn to_with(
        &mut self,
        target: usize,
        to: TextPose,
        position: Position,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let start = self.resolve(position);
        let Some(track) = self.tracks.get_mut(target) else {
            log::warn!("[timeline] tween for missing target {}", target);
            return self;
        };
        track.insert(start, duration.max(0.0), ease, to);
        self.duration = self.duration.max(start + duration.max(0.0));
        self
    }

    pub fn sample(&self, target: usize, time: f32) -> Option<TextPose> {
        let track = self.tracks.get(target)?;
        Some(track.eval(time, track.tweens.len()))
    }

    /// Sample every track at `progress` of the whole timeline.
    pub fn sample_progress(&self, progress: f32) -> Vec<TextPose> {
        let time = progress.clamp(0.0, 1.0) * self.duration;
        self.tracks
            .iter()
            .map(|track| track.eval(time, track.tweens.len()))
            .collect()
    }

    /// `(start, end)` of every tween on `target`, in start order.
    pub fn spans(&self, target: usize) -> Vec<(f32, f32)> {
        self.tracks
            .get(target)
            .map(|track| track.tweens.iter().map(|tw| (tw.start, tw.end())).collect())
            .unwrap_or_default()
    }
}

/// Crossfade sequence for `count` sticky text items.
///
/// Item 0 starts shown; every other item waits below. Each item enters while the
/// previous one is still leaving, and the last item stays on screen.
pub fn text_crossfade(count: usize) -> Timeline {
    let initial = (0..count)
        .map(|i| if i == 0 { TextPose::SHOWN } else { TextPose::WAITING })
        .collect();
    let mut tl = Timeline::new(initial, TEXT_TWEEN_UNITS);
    for i in 0..count {
        if i > 0 {
            tl.to(i - 1, TextPose::LEFT, Position::End);
        }
        tl.to(i, TextPose::SHOWN, Position::FromEnd(-TEXT_ENTER_OVERLAP));
        if i + 1 < count {
            tl.to(i, TextPose::LEFT, Position::FromEnd(-TEXT_EXIT_OVERLAP));
        }
    }
    tl
}
