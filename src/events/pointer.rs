use crate::audio::AudioWiring;
use crate::core::constants::DRAG_CLICK_GUARD_MS;
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates of a mouse event or the first touch of a touch event.
fn client_point(ev: &web::Event) -> Option<Vec2> {
    // Branch on the event type: `TouchEvent` is not defined in every desktop browser.
    if ev.type_().starts_with("touch") {
        let touch = ev.unchecked_ref::<web::TouchEvent>().touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    } else {
        let m = ev.unchecked_ref::<web::MouseEvent>();
        Some(Vec2::new(m.client_x() as f32, m.client_y() as f32))
    }
}

pub fn wire_drag(w: &AudioWiring) {
    dom::set_style(&w.button, "cursor", "grab");
    for event in ["mousedown", "touchstart"] {
        wire_press(w, event);
    }
    if let Some(document) = dom::window_document() {
        for event in ["mousemove", "touchmove"] {
            wire_move(w, &document, event);
        }
        for event in ["mouseup", "touchend"] {
            wire_release(w, &document, event);
        }
    }
}

fn wire_press(w: &AudioWiring, event: &str) {
    let w = w.clone();
    let target = w.button.clone();
    dom::on_active(&target, event, move |ev: web::Event| {
        ev.prevent_default();
        let Some(pointer) = client_point(&ev) else {
            return;
        };
        let rect = w.button.get_bounding_client_rect();
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        w.toggle.borrow_mut().drag.begin(pointer, origin);
        dom::set_style(&w.button, "transition", "none");
        dom::set_style(&w.button, "cursor", "grabbing");
    });
}

fn wire_move(w: &AudioWiring, document: &web::Document, event: &str) {
    let w = w.clone();
    dom::on_active(document, event, move |ev: web::Event| {
        if !w.toggle.borrow().drag.is_active() {
            return;
        }
        ev.prevent_default();
        let Some(pointer) = client_point(&ev) else {
            return;
        };
        let viewport = dom::viewport().size();
        let Some(pos) = w.toggle.borrow_mut().drag_to(pointer, viewport) else {
            return;
        };
        dom::set_style(&w.button, "left", &format!("{}px", pos.x));
        dom::set_style(&w.button, "top", &format!("{}px", pos.y));
        dom::set_style(&w.button, "right", "auto");
        dom::set_style(&w.button, "bottom", "auto");
    });
}

fn wire_release(w: &AudioWiring, document: &web::Document, event: &str) {
    let w = w.clone();
    dom::on(document, event, move |_: web::Event| {
        if !w.toggle.borrow().drag.is_active() {
            return;
        }
        let moved = w.toggle.borrow_mut().drag.end();
        dom::set_style(&w.button, "transition", "all 0.3s ease");
        dom::set_style(&w.button, "cursor", "grab");
        if let Some(gesture) = moved {
            let toggle = w.toggle.clone();
            dom::set_timeout(DRAG_CLICK_GUARD_MS, move || {
                toggle.borrow_mut().drag.expire(gesture);
            });
        }
    });
}
