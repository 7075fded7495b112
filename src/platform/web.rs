//! Browser platform
//!
//! DOM lookups, `performance.now()`, `requestAnimationFrame` and the score
//! element, wrapped behind the collaborator traits.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Performance, Window};

use super::{Clock, FrameHandle, FrameScheduler, ScoreSink};
use crate::tuning::Tuning;

/// Element IDs the page is expected to provide
pub mod html {
    pub const CANVAS_ID: &str = "gameCanvas";
    pub const SCORE_ID: &str = "score";
    /// Optional `<script type="application/json">` with tuning overrides
    pub const TUNING_ID: &str = "tuning";
    pub const CONTEXT_2D: &str = "2d";
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("Window not found"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No Document found"))
}

pub fn canvas(document: &Document) -> Result<HtmlCanvasElement> {
    document
        .get_element_by_id(html::CANVAS_ID)
        .ok_or_else(|| anyhow!("No canvas element with id '{}'", html::CANVAS_ID))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("Error converting {:?} to HtmlCanvasElement", element))
}

pub fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context(html::CONTEXT_2D)
        .map_err(|js_value| anyhow!("Error getting context: {:?}", js_value))?
        .ok_or_else(|| anyhow!("No 2d context found"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|element| anyhow!("Error converting {:?} to CanvasRenderingContext2d", element))
}

/// Read tuning overrides from the page, falling back to defaults
pub fn load_tuning(document: &Document) -> Tuning {
    let Some(json) = document
        .get_element_by_id(html::TUNING_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("Using default tuning");
        return Tuning::default();
    };

    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning overrides from #{}", html::TUNING_ID);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring invalid tuning: {:#}", e);
            Tuning::default()
        }
    }
}

/// Clock backed by `performance.now()`
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Result<Self> {
        let performance = window
            .performance()
            .ok_or_else(|| anyhow!("Performance API not available"))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}

/// Frame callback invoked by `requestAnimationFrame`
pub type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared slot for the frame callback.
///
/// The callback owns the game loop, which owns this scheduler, so the slot is
/// filled after both exist.
pub type CallbackSlot = Rc<RefCell<Option<FrameCallback>>>;

/// Scheduler over `requestAnimationFrame` / `cancelAnimationFrame`
pub struct RafScheduler {
    window: Window,
    callback: CallbackSlot,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback_slot(&self) -> CallbackSlot {
        self.callback.clone()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| anyhow!("Frame callback not installed"))?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("requestAnimationFrame failed: {:?}", e))?;
        Ok(FrameHandle(id))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}

/// Writes the score line into a DOM element
pub struct DomScoreSink {
    element: Option<Element>,
}

impl DomScoreSink {
    /// A missing element is tolerated; scores are then only logged
    pub fn find(document: &Document) -> Self {
        let element = document.get_element_by_id(html::SCORE_ID);
        if element.is_none() {
            log::warn!("No #{} element, score display disabled", html::SCORE_ID);
        }
        Self { element }
    }
}

impl ScoreSink for DomScoreSink {
    fn show_score(&mut self, text: &str) {
        match &self.element {
            Some(el) => el.set_text_content(Some(text)),
            None => log::debug!("{}", text),
        }
    }
}
