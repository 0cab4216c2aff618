use crate::core::Scrub;
use crate::scroll::Lenis;
use crate::stage::{Backdrop, TextStage};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A scrubbed region: raw progress written by its scroll trigger, smoothed here.
pub struct ScrubbedRegion<T> {
    pub raw: Rc<Cell<f32>>,
    pub scrub: Scrub,
    pub target: T,
}

pub struct FrameContext {
    pub lenis: Option<Lenis>,
    pub backdrop: Option<ScrubbedRegion<Backdrop>>,
    pub text: Option<ScrubbedRegion<TextStage>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(lenis: Option<Lenis>) -> Self {
        Self {
            lenis,
            backdrop: None,
            text: None,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self, time_ms: f64) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Lenis fires its scroll event (and so ScrollTrigger.update) from inside raf.
        if let Some(lenis) = &self.lenis {
            lenis.raf(time_ms);
        }

        if let Some(region) = &mut self.backdrop {
            region.scrub.set_target(region.raw.get());
            if region.scrub.step(dt_sec) {
                region.target.apply(region.scrub.value());
            }
        }
        if let Some(region) = &mut self.text {
            region.scrub.set_target(region.raw.get());
            if region.scrub.step(dt_sec) {
                region.target.apply(region.scrub.value());
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(time_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
