//! DOM-backed screen panels

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use super::ScreenPanels;
use crate::presenter::ResultTheme;
use crate::sim::Screen;

/// Image layered over every result backdrop
const OVERLAY_SRC: &str = "overlay.png";

pub struct DomPanels {
    loading: HtmlElement,
    main: HtmlElement,
    game: HtmlElement,
    result: HtmlElement,
    loading_bar: HtmlElement,
    rarity_text: HtmlElement,
    overlay: Option<HtmlImageElement>,
}

fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Missing element #{}", id);
    }
    el?.dyn_into::<T>().ok()
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

impl DomPanels {
    /// Look up the page's panels by id
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            loading: element(document, "loading-screen")?,
            main: element(document, "main-screen")?,
            game: element(document, "game-screen")?,
            result: element(document, "result-screen")?,
            loading_bar: element(document, "loading-bar")?,
            rarity_text: element(document, "rarity-text")?,
            overlay: element(document, "overlay-image"),
        })
    }

    fn panel(&self, screen: Screen) -> &HtmlElement {
        match screen {
            Screen::Loading => &self.loading,
            Screen::Main => &self.main,
            Screen::Game => &self.game,
            Screen::Result => &self.result,
        }
    }
}

impl ScreenPanels for DomPanels {
    fn show(&mut self, screen: Screen) {
        for s in Screen::ALL {
            let display = match (s == screen, s) {
                (false, _) => "none",
                (true, Screen::Game) => "block",
                (true, _) => "flex",
            };
            set_style(self.panel(s), "display", display);
        }
    }

    fn set_loading_progress(&mut self, pct: u32) {
        set_style(&self.loading_bar, "width", &format!("{}%", pct.min(100)));
    }

    fn apply_theme(&mut self, theme: &ResultTheme) {
        set_style(&self.result, "animation", &theme.backdrop.css_animation());
        set_style(&self.result, "background", &theme.backdrop.css_background());
        self.rarity_text.set_text_content(Some(theme.label));
        if let Some(img) = &self.overlay {
            img.set_src(OVERLAY_SRC);
        }
    }

    fn clear_animation(&mut self) {
        set_style(&self.result, "animation", "");
    }
}
