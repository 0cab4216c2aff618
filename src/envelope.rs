use crate::constants::*;
use crate::core::{ClassChange, Envelope, EnvelopeConfig, Part, Transition};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct EnvelopeWiring {
    wrapper: web::HtmlElement,
    letter: web::HtmlElement,
    envelope: Rc<RefCell<Envelope>>,
}

impl EnvelopeWiring {
    fn part(&self, part: Part) -> &web::HtmlElement {
        match part {
            Part::Wrapper => &self.wrapper,
            Part::Letter => &self.letter,
        }
    }

    fn apply(&self, transition: Transition) {
        for change in &transition.changes {
            _ = match *change {
                ClassChange::Add(part, class) => self.part(part).class_list().add_1(class),
                ClassChange::Remove(part, class) => self.part(part).class_list().remove_1(class),
            };
        }
        if let Some(scheduled) = transition.schedule {
            let w = self.clone();
            dom::set_timeout(scheduled.delay_ms, move || {
                let done = w.envelope.borrow_mut().complete(scheduled.token);
                w.apply(done);
                log::info!("[envelope] {:?}", w.envelope.borrow().state());
            });
        }
    }
}

fn click_started_on_seal(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(SEL_SEAL).ok().flatten())
        .is_some()
}

pub fn wire_envelope(document: &web::Document) {
    let Some(wrapper) = dom::query(document, SEL_ENVELOPE_WRAPPER) else {
        log::warn!("[envelope] {} missing, envelope disabled", SEL_ENVELOPE_WRAPPER);
        return;
    };
    let (Some(seal), Some(letter), Some(body)) = (
        dom::query_in(&wrapper, SEL_SEAL),
        dom::query_in(&wrapper, SEL_LETTER),
        dom::query_in(&wrapper, SEL_ENVELOPE),
    ) else {
        log::warn!("[envelope] seal, letter or envelope body missing, envelope disabled");
        return;
    };

    let w = EnvelopeWiring {
        wrapper,
        letter,
        envelope: Rc::new(RefCell::new(Envelope::new(EnvelopeConfig::default()))),
    };

    let on_seal = w.clone();
    dom::on(&seal, "click", move |_: web::Event| {
        let t = on_seal.envelope.borrow_mut().click_seal();
        if !t.is_empty() {
            log::info!("[envelope] seal opened");
        }
        on_seal.apply(t);
    });

    let on_body = w.clone();
    dom::on(&body, "click", move |ev: web::Event| {
        let t = on_body
            .envelope
            .borrow_mut()
            .click_envelope(click_started_on_seal(&ev));
        on_body.apply(t);
    });
}
