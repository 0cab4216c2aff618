//! Scroll-driven letter page.
//!
//! `core` holds the pose math and the small state machines and builds on any
//! target. Everything else is the wasm front-end that wires them to the DOM.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod envelope;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod particles;
#[cfg(target_arch = "wasm32")]
mod scroll;
#[cfg(target_arch = "wasm32")]
mod stage;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{ChoreographyConfig, Scrub};
    use crate::frame::{FrameContext, ScrubbedRegion};
    use crate::stage::{Backdrop, CardStage, TextStage};
    use crate::{audio, dom, envelope, frame, particles, scroll, stage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    fn wire_viewport_resize(document: &web::Document) {
        stage::sync_stage_height(document);
        let Some(window) = web::window() else {
            return;
        };
        let doc = document.clone();
        dom::on(&window, "resize", move |_: web::Event| {
            stage::sync_stage_height(&doc);
            scroll::refresh();
        });
    }

    /// Cards follow the raw progress; backdrop and text follow scrubbed copies.
    fn wire_scroll(document: &web::Document, frame_ctx: &mut FrameContext) -> anyhow::Result<()> {
        scroll::register()?;

        let cards = match CardStage::find(document, ChoreographyConfig::default()) {
            Ok(cards) => {
                cards.park();
                Some(cards)
            }
            Err(e) => {
                log::warn!("[scroll] cards disabled: {:?}", e);
                None
            }
        };
        let backdrop = Backdrop::find(document);
        if cards.is_some() || backdrop.is_some() {
            let raw = scroll::watch(&scroll::Region::main(dom::viewport()), move |p| {
                if let Some(cards) = &cards {
                    cards.apply(p);
                }
            })?;
            if let Some(backdrop) = backdrop {
                backdrop.apply(0.0);
                frame_ctx.backdrop = Some(ScrubbedRegion {
                    raw,
                    scrub: Scrub::default(),
                    target: backdrop,
                });
            }
        }

        if let Some(text) = TextStage::find(document) {
            text.apply(0.0);
            let raw = scroll::watch(&scroll::Region::sticky_text(), |_| {})?;
            frame_ctx.text = Some(ScrubbedRegion {
                raw,
                scrub: Scrub::default(),
                target: text,
            });
        }

        scroll::refresh();
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("letter-web starting");

        let ready = Closure::once_into_js(move || {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        });
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        if document.ready_state() == "loading" {
            document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
        } else if let Some(f) = ready.dyn_ref::<js_sys::Function>() {
            f.call0(&JsValue::NULL)?;
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        wire_viewport_resize(&document);
        _ = audio::wire_audio(&document);
        envelope::wire_envelope(&document);

        match particles::spawn_particles(&document) {
            Ok(n) => log::info!("[particles] spawned {}", n),
            Err(e) => log::warn!("[particles] {:?}", e),
        }

        let lenis = match scroll::start_smooth_scroll() {
            Ok(l) => Some(l),
            Err(e) => {
                log::warn!("[scroll] smooth scrolling disabled: {:?}", e);
                None
            }
        };
        let mut frame_ctx = FrameContext::new(lenis);
        if let Err(e) = wire_scroll(&document, &mut frame_ctx) {
            log::warn!("[scroll] choreography disabled: {:?}", e);
        }

        frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
        Ok(())
    }
}
