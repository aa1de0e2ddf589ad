//! DOM side of the presentation layer
//!
//! Scene overlays toggle between `hidden` and `active` classes; styling is
//! left to the page.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::sim::{GameEvent, Scene};

const START_SCREEN_ID: &str = "start-screen";
const PROPOSAL_SCREEN_ID: &str = "proposal-screen";
const CELEBRATION_SCREEN_ID: &str = "celebration-screen";
const LOVE_FILL_ID: &str = "love-fill";
const NO_BUTTON_ID: &str = "no-btn";

/// Handles to the elements the game drives
pub struct Dom {
    start_screen: Option<Element>,
    proposal_screen: Option<Element>,
    celebration_screen: Option<Element>,
    love_fill: Option<HtmlElement>,
    no_button: Option<HtmlElement>,
}

fn lookup(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Element #{} not found, skipping", id);
    }
    el
}

fn lookup_html(document: &Document, id: &str) -> Option<HtmlElement> {
    lookup(document, id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_visible(el: &Element, visible: bool) {
    let classes = el.class_list();
    if visible {
        let _ = classes.remove_1("hidden");
        let _ = classes.add_1("active");
    } else {
        let _ = classes.remove_1("active");
        let _ = classes.add_1("hidden");
    }
}

impl Dom {
    pub fn from_document(document: &Document) -> Self {
        Self {
            start_screen: lookup(document, START_SCREEN_ID),
            proposal_screen: lookup(document, PROPOSAL_SCREEN_ID),
            celebration_screen: lookup(document, CELEBRATION_SCREEN_ID),
            love_fill: lookup_html(document, LOVE_FILL_ID),
            no_button: lookup_html(document, NO_BUTTON_ID),
        }
    }

    /// Show exactly the overlay for `scene` (none while playing)
    pub fn show_scene(&self, scene: Scene) {
        let overlays = [
            (&self.start_screen, Scene::Start),
            (&self.proposal_screen, Scene::Proposal),
            (&self.celebration_screen, Scene::Celebration),
        ];
        for (el, owner) in overlays {
            if let Some(el) = el {
                set_visible(el, owner == scene);
            }
        }
    }

    /// Love meter width
    pub fn set_fill(&self, percent: f32) {
        if let Some(fill) = &self.love_fill {
            let _ = fill
                .style()
                .set_property("width", &format!("{}%", percent.clamp(0.0, 100.0)));
        }
    }

    /// Rendered size of the decline button
    pub fn decline_size(&self) -> Vec2 {
        self.no_button
            .as_ref()
            .map(|btn| Vec2::new(btn.offset_width() as f32, btn.offset_height() as f32))
            .unwrap_or(Vec2::ZERO)
    }

    /// Pin the decline button at a viewport position
    pub fn place_decline(&self, pos: Vec2) {
        if let Some(btn) = &self.no_button {
            let style = btn.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("left", &format!("{}px", pos.x));
            let _ = style.set_property("top", &format!("{}px", pos.y));
        }
    }

    /// Return the decline button to its layout position
    pub fn reset_decline(&self) {
        if let Some(btn) = &self.no_button {
            let style = btn.style();
            for prop in ["position", "left", "top"] {
                let _ = style.remove_property(prop);
            }
        }
    }

    /// Mirror one game event onto the page
    pub fn apply(&self, event: &GameEvent) {
        match event {
            GameEvent::SessionStarted { .. } => self.reset_decline(),
            GameEvent::ScoreChanged { fill_percent, .. } => self.set_fill(*fill_percent),
            GameEvent::SceneChanged(scene) => self.show_scene(*scene),
            GameEvent::DeclineMoved { pos } => self.place_decline(*pos),
            other => log::debug!("{:?}", other),
        }
    }
}
