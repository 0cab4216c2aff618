//! Envelope and letter reveal state machine.
//!
//! Every transition returns the class changes to apply to the wrapper and the
//! letter, plus an optional timed completion. Completions carry a generation
//! token so a timer that fires after the state moved on does nothing.

use super::constants::ENVELOPE_TRANSITION_MS;

pub const CLASS_OPEN: &str = "open";
pub const CLASS_SHOW_LETTER: &str = "show-letter";
pub const CLASS_CLOSING_LETTER: &str = "closing-letter";
pub const CLASS_DEACTIVATE: &str = "deactivate-envelope";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeState {
    #[default]
    Closed,
    SealOpen,
    Opening,
    LetterOpen,
    Closing,
}

impl EnvelopeState {
    pub fn is_transitioning(self) -> bool {
        matches!(self, EnvelopeState::Opening | EnvelopeState::Closing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Wrapper,
    Letter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassChange {
    Add(Part, &'static str),
    Remove(Part, &'static str),
}

/// A completion to run after `delay_ms` with the given token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: i32,
    pub token: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub changes: Vec<ClassChange>,
    pub schedule: Option<Scheduled>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.schedule.is_none()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EnvelopeConfig {
    pub transition_ms: i32,
    /// Closing the letter also closes the flap, back to `Closed`.
    pub reseal_on_close: bool,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            transition_ms: ENVELOPE_TRANSITION_MS,
            reseal_on_close: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Envelope {
    state: EnvelopeState,
    generation: u32,
    config: EnvelopeConfig,
}

impl Envelope {
    pub fn new(config: EnvelopeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    pub fn click_seal(&mut self) -> Transition {
        if self.state != EnvelopeState::Closed {
            return Transition::none();
        }
        self.state = EnvelopeState::SealOpen;
        Transition {
            changes: vec![ClassChange::Add(Part::Wrapper, CLASS_OPEN)],
            schedule: None,
        }
    }

    /// Click on the envelope body. `on_seal` is true when the click started on
    /// the seal, which never toggles the letter.
    pub fn click_envelope(&mut self, on_seal: bool) -> Transition {
        if on_seal {
            return Transition::none();
        }
        match self.state {
            EnvelopeState::SealOpen => {
                self.state = EnvelopeState::Opening;
                Transition {
                    changes: vec![ClassChange::Add(Part::Letter, CLASS_SHOW_LETTER)],
                    schedule: Some(self.schedule()),
                }
            }
            EnvelopeState::LetterOpen => {
                self.state = EnvelopeState::Closing;
                Transition {
                    changes: vec![
                        ClassChange::Add(Part::Letter, CLASS_CLOSING_LETTER),
                        ClassChange::Remove(Part::Wrapper, CLASS_DEACTIVATE),
                    ],
                    schedule: Some(self.schedule()),
                }
            }
            EnvelopeState::Closed | EnvelopeState::Opening | EnvelopeState::Closing => {
                Transition::none()
            }
        }
    }

    /// Timer callback for a transition scheduled with `token`.
    pub fn complete(&mut self, token: u32) -> Transition {
        if token != self.generation {
            return Transition::none();
        }
        match self.state {
            EnvelopeState::Opening => {
                self.state = EnvelopeState::LetterOpen;
                Transition {
                    changes: vec![
                        ClassChange::Remove(Part::Letter, CLASS_SHOW_LETTER),
                        ClassChange::Add(Part::Letter, CLASS_OPEN),
                        ClassChange::Add(Part::Wrapper, CLASS_DEACTIVATE),
                    ],
                    schedule: None,
                }
            }
            EnvelopeState::Closing => {
                let mut changes = vec![
                    ClassChange::Remove(Part::Letter, CLASS_CLOSING_LETTER),
                    ClassChange::Remove(Part::Letter, CLASS_OPEN),
                ];
                if self.config.reseal_on_close {
                    changes.push(ClassChange::Remove(Part::Wrapper, CLASS_OPEN));
                    self.state = EnvelopeState::Closed;
                } else {
                    self.state = EnvelopeState::SealOpen;
                }
                Transition {
                    changes,
                    schedule: None,
                }
            }
            _ => Transition::none(),
        }
    }

    fn schedule(&mut self) -> Scheduled {
        self.generation = self.generation.wrapping_add(1);
        Scheduled {
            delay_ms: self.config.transition_ms,
            token: self.generation,
        }
    }
}
