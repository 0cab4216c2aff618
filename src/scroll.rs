//! Bindings to the page's smooth-scroll driver (Lenis) and scroll-trigger layer
//! (GSAP ScrollTrigger), plus the two pinned regions the page uses.
//!
//! Every import is declared with `catch` so a missing library surfaces as an
//! `Err` instead of a trap; the caller then disables only the dependent part.

use crate::constants::*;
use crate::core::{main_scroll_span, Viewport};
use js_sys::{Object, Reflect};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    pub type Lenis;

    #[wasm_bindgen(constructor, js_class = "Lenis", catch)]
    fn new() -> Result<Lenis, JsValue>;

    #[wasm_bindgen(method)]
    pub fn raf(this: &Lenis, time_ms: f64);

    #[wasm_bindgen(method)]
    fn on(this: &Lenis, event: &str, callback: &js_sys::Function);

    pub type ScrollTrigger;

    #[wasm_bindgen(static_method_of = ScrollTrigger, js_name = create, catch)]
    fn create(vars: &Object) -> Result<ScrollTrigger, JsValue>;

    #[wasm_bindgen(static_method_of = ScrollTrigger, js_name = update, catch)]
    fn update_all() -> Result<(), JsValue>;

    #[wasm_bindgen(static_method_of = ScrollTrigger, js_name = refresh, catch)]
    fn refresh_all() -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter)]
    fn progress(this: &ScrollTrigger) -> f64;

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin, catch)]
    fn register_plugin(plugin: &JsValue) -> Result<(), JsValue>;
}

/// Register ScrollTrigger with gsap. Fails when either global is missing.
pub fn register() -> anyhow::Result<()> {
    let plugin = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if plugin.is_undefined() {
        anyhow::bail!("ScrollTrigger is not loaded");
    }
    register_plugin(&plugin).map_err(|e| anyhow::anyhow!("gsap.registerPlugin: {:?}", e))
}

pub fn refresh() {
    if let Err(e) = refresh_all() {
        log::warn!("[scroll] refresh failed: {:?}", e);
    }
}

/// Start smooth scrolling and forward its scroll events to ScrollTrigger.
/// The returned driver must be ticked from the frame loop.
pub fn start_smooth_scroll() -> anyhow::Result<Lenis> {
    let lenis = Lenis::new().map_err(|e| anyhow::anyhow!("Lenis: {:?}", e))?;
    let on_scroll = Closure::wrap(Box::new(move || {
        _ = update_all();
    }) as Box<dyn FnMut()>);
    lenis.on("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
    Ok(lenis)
}

/// Pin/span description for one scroll-driven region.
pub struct Region {
    pub trigger: &'static str,
    pub pin: Option<&'static str>,
    pub end: String,
}

impl Region {
    /// The main region: `.wrapper` pinned for ten viewport heights.
    pub fn main(viewport: Viewport) -> Region {
        Region {
            trigger: SEL_WRAPPER,
            pin: None,
            end: format!("+={}px", main_scroll_span(viewport)),
        }
    }

    pub fn sticky_text() -> Region {
        Region {
            trigger: SEL_TEXT_SCROLL,
            pin: Some(SEL_TEXT_PIN),
            end: TEXT_TRIGGER_END.to_string(),
        }
    }
}

fn set(vars: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(vars, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("set {}: {:?}", key, e))
}

/// Create a scroll trigger for `region` that reports raw progress on every update.
///
/// The latest progress is also mirrored into the returned cell so the frame
/// loop can read it without a JS round trip.
pub fn watch(
    region: &Region,
    mut on_update: impl FnMut(f32) + 'static,
) -> anyhow::Result<Rc<Cell<f32>>> {
    let latest = Rc::new(Cell::new(0.0_f32));
    let latest_cb = latest.clone();
    let callback = Closure::wrap(Box::new(move |st: JsValue| {
        let st: ScrollTrigger = st.unchecked_into();
        let p = st.progress() as f32;
        latest_cb.set(p);
        on_update(p);
    }) as Box<dyn FnMut(JsValue)>);

    let vars = Object::new();
    set(&vars, "trigger", &JsValue::from_str(region.trigger))?;
    set(&vars, "start", &JsValue::from_str(TRIGGER_START))?;
    set(&vars, "end", &JsValue::from_str(&region.end))?;
    match region.pin {
        Some(sel) => set(&vars, "pin", &JsValue::from_str(sel))?,
        None => set(&vars, "pin", &JsValue::TRUE)?,
    }
    set(&vars, "pinSpacing", &JsValue::TRUE)?;
    set(&vars, "onUpdate", callback.as_ref())?;

    create(&vars)
        .map_err(|e| anyhow::anyhow!("ScrollTrigger.create({}): {:?}", region.trigger, e))?;
    callback.forget();
    log::info!("[scroll] watching {} until {}", region.trigger, region.end);
    Ok(latest)
}
