use crate::constants::*;
use crate::core::{AudioCommand, AudioConfig, AudioState, AudioToggle, PlayOrigin};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Elements and state behind the music toggle. Shared by the click, drag and
/// first-interaction handlers.
#[derive(Clone)]
pub struct AudioWiring {
    pub audio: web::HtmlAudioElement,
    pub button: web::HtmlElement,
    pub icon: Option<web::Element>,
    pub toggle: Rc<RefCell<AudioToggle>>,
}

impl AudioWiring {
    pub fn find(document: &web::Document, config: AudioConfig) -> Option<Self> {
        let audio = dom::by_id::<web::HtmlAudioElement>(document, ID_AUDIO)?;
        let button = dom::by_id::<web::HtmlElement>(document, ID_AUDIO_TOGGLE)?;
        let icon = document.get_element_by_id(ID_AUDIO_ICON);
        audio.set_volume(config.volume);
        Some(Self {
            audio,
            button,
            icon,
            toggle: Rc::new(RefCell::new(AudioToggle::new(config))),
        })
    }

    pub fn render(&self, state: AudioState) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(state.icon_class());
        }
        let classes = self.button.class_list();
        _ = match state {
            AudioState::Muted => classes.add_1(CLASS_MUTED),
            AudioState::Playing => classes.remove_1(CLASS_MUTED),
        };
    }

    /// Carry out a command from the toggle state machine.
    pub fn run(&self, command: AudioCommand) {
        match command {
            AudioCommand::Ignore => {}
            AudioCommand::Pause => {
                _ = self.audio.pause();
                self.render(AudioState::Muted);
                log::info!("[audio] paused");
            }
            AudioCommand::Play(origin) => self.start_playback(origin),
        }
    }

    fn start_playback(&self, origin: PlayOrigin) {
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play failed: {:?}", e);
                self.toggle.borrow_mut().play_rejected(origin);
                return;
            }
        };
        let w = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    w.toggle.borrow_mut().play_resolved(origin);
                    w.render(AudioState::Playing);
                    log::info!("[audio] playing ({:?})", origin);
                }
                Err(e) => {
                    w.toggle.borrow_mut().play_rejected(origin);
                    w.render(AudioState::Muted);
                    match origin {
                        PlayOrigin::FirstInteraction => {
                            log::warn!("[audio] autoplay blocked, waiting for the toggle")
                        }
                        PlayOrigin::Toggle => log::warn!("[audio] play failed: {:?}", e),
                    }
                }
            }
        });
    }
}

pub fn wire_audio(document: &web::Document) -> Option<AudioWiring> {
    let Some(w) = AudioWiring::find(document, AudioConfig::default()) else {
        log::warn!("[audio] #{} or #{} missing, music disabled", ID_AUDIO, ID_AUDIO_TOGGLE);
        return None;
    };
    w.render(AudioState::Muted);

    crate::events::wire_drag(&w);

    let click = w.clone();
    dom::on(&w.button, "click", move |ev: web::MouseEvent| {
        let after_drag = click.toggle.borrow().drag.has_moved();
        let command = click.toggle.borrow_mut().toggle();
        if after_drag {
            ev.prevent_default();
        }
        click.run(command);
    });

    for event in ["click", "scroll"] {
        let first = w.clone();
        dom::on(document, event, move |_: web::Event| {
            let command = first.toggle.borrow_mut().first_interaction();
            first.run(command);
        });
    }

    log::info!("[audio] toggle ready");
    Some(w)
}
