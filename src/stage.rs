//! DOM side of the scroll choreography: looks up the animated elements and
//! writes the poses computed in `core` into their inline transforms.

use crate::constants::*;
use crate::core::{
    backdrop_pose, text_crossfade, CardChoreographer, ChoreographyConfig, TextPose, Timeline,
};
use crate::dom;
use web_sys as web;

pub struct CardStage {
    cards: Vec<web::HtmlElement>,
    choreographer: CardChoreographer,
}

impl CardStage {
    pub fn find(document: &web::Document, config: ChoreographyConfig) -> anyhow::Result<Self> {
        let cards = dom::query_all(document, SEL_CARD);
        if cards.is_empty() {
            anyhow::bail!("no {} elements", SEL_CARD);
        }
        let choreographer = CardChoreographer::new(config, cards.len())?;
        Ok(Self {
            cards,
            choreographer,
        })
    }

    pub fn park(&self) {
        let viewport = dom::viewport();
        for (i, card) in self.cards.iter().enumerate() {
            let pose = self.choreographer.initial_pose(i, viewport);
            dom::set_transform(card, &pose.css_transform());
        }
    }

    /// Instantaneous poses for the raw progress; no easing, no duration.
    pub fn apply(&self, progress: f32) {
        let viewport = dom::viewport();
        for (card, pose) in self
            .cards
            .iter()
            .zip(self.choreographer.poses(progress, viewport))
        {
            dom::set_transform(card, &pose.css_transform());
        }
    }
}

pub struct Backdrop {
    landing: Option<web::HtmlElement>,
    stage: Option<web::HtmlElement>,
}

impl Backdrop {
    pub fn find(document: &web::Document) -> Option<Self> {
        let landing = dom::query(document, SEL_LANDING);
        let stage = dom::query(document, SEL_STAGE);
        if landing.is_none() && stage.is_none() {
            return None;
        }
        for el in landing.iter().chain(stage.iter()) {
            dom::set_style(el, "transform-origin", "center center");
        }
        Some(Self { landing, stage })
    }

    pub fn apply(&self, progress: f32) {
        let pose = backdrop_pose(progress);
        if let Some(el) = &self.landing {
            dom::set_transform(el, &pose.landing_transform());
        }
        if let Some(el) = &self.stage {
            dom::set_transform(el, &pose.stage_transform());
        }
    }
}

pub struct TextStage {
    items: Vec<web::HtmlElement>,
    timeline: Timeline,
}

impl TextStage {
    pub fn find(document: &web::Document) -> Option<Self> {
        let items = dom::query_all(document, SEL_TEXT_ITEM);
        if items.is_empty() {
            return None;
        }
        let timeline = text_crossfade(items.len());
        Some(Self { items, timeline })
    }

    pub fn apply(&self, progress: f32) {
        for (item, pose) in self
            .items
            .iter()
            .zip(self.timeline.sample_progress(progress))
        {
            apply_text_pose(item, &pose);
        }
    }
}

fn apply_text_pose(el: &web::HtmlElement, pose: &TextPose) {
    dom::set_style(el, "opacity", &format!("{:.4}", pose.opacity));
    dom::set_transform(el, &pose.css_transform());
}

/// Pin the card stage height to `innerHeight` rather than `100vh`.
pub fn sync_stage_height(document: &web::Document) {
    if let Some(stage) = dom::query(document, SEL_STAGE) {
        let height = dom::viewport().height;
        dom::set_style(&stage, "height", &format!("{}px", height));
    }
}
