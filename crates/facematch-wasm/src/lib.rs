//! WebAssembly canvas front end for the mystery tile puzzle
//!
//! The page creates a [`FaceMatchGame`] on a canvas, forwards pointer
//! events and window resizes, and calls [`FaceMatchGame::tick`] from
//! `requestAnimationFrame`.

use facematch_core::{
    messages, AdvanceTicket, Attribute, AttemptResult, InputOutcome, MenuAction, PuzzleConfig,
    PuzzleState, RegionId, ValueIndex,
};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

mod assets;
mod input;
mod layout;
mod render;
mod theme;

// WASM tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use layout::ScreenLayout;
pub use theme::Theme;

use assets::ImageStore;
use render::{Painter, Tinter};

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

struct GameInner {
    state: PuzzleState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    tinter: Tinter,
    images: ImageStore,
    theme: Theme,
    layout: ScreenLayout,
    hover: Option<(RegionId, usize)>,
    width: f64,
    height: f64,
    dpr: f64,
    /// Pending auto-advance; dropping it cancels the timer
    advance_timer: Option<Timeout>,
}

impl GameInner {
    fn relayout(&mut self) {
        self.layout = ScreenLayout::compute(self.width, self.height, self.state.display_level());
    }

    fn render(&self) {
        let painter = Painter {
            ctx: &self.ctx,
            tinter: &self.tinter,
            images: &self.images,
            theme: &self.theme,
            layout: &self.layout,
            hover: self.hover,
        };
        if let Err(err) = painter.render(&self.state) {
            gloo::console::warn!("render failed", err);
        }
    }

    /// Load a level by hand; any pending auto-advance is dropped
    fn load_level(&mut self, requested: i64) -> usize {
        self.advance_timer = None;
        let level = self.state.load_level(requested);
        self.relayout();
        gloo::console::log!(format!("level {} loaded", level + 1));
        level
    }
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct FaceMatchGame {
    inner: Rc<RefCell<GameInner>>,
}

#[wasm_bindgen]
impl FaceMatchGame {
    /// Create a new game attached to a canvas element.
    ///
    /// `config_json` optionally overrides the puzzle settings, e.g.
    /// `{"advance_delay_ms": 1500, "start_level": 3}`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<FaceMatchGame, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = match config_json {
            Some(json) => serde_json::from_str::<PuzzleConfig>(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
            None => PuzzleConfig::default(),
        };

        let state = PuzzleState::new(config);
        let layout = ScreenLayout::compute(0.0, 0.0, state.display_level());
        let inner = GameInner {
            state,
            canvas,
            ctx,
            tinter: Tinter::new()?,
            images: ImageStore::load()?,
            theme: Theme::default(),
            layout,
            hover: None,
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
            advance_timer: None,
        };
        gloo::console::log!(format!(
            "loading {} images, level {}",
            inner.images.total(),
            inner.state.display_level()
        ));

        let game = FaceMatchGame {
            inner: Rc::new(RefCell::new(inner)),
        };

        let window_width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let window_height = window.inner_height()?.as_f64().unwrap_or(0.0);
        game.resize(window_width, window_height);
        Ok(game)
    }

    /// Handle a click at canvas coordinates (CSS pixels). Returns whether
    /// anything responded.
    #[wasm_bindgen]
    pub fn handle_click(&self, x: f64, y: f64) -> bool {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let Some(outcome) = input::route_click(&inner.layout, &mut inner.state, x, y) else {
                return false;
            };
            if let Some(line) = input::describe(&outcome) {
                gloo::console::log!(line);
            }
            outcome
        };

        match outcome {
            InputOutcome::Attempt(AttemptResult::Matched {
                advance: Some(ticket),
            }) => self.schedule_advance(ticket),
            InputOutcome::LevelChanged(_) => {
                let mut inner = self.inner.borrow_mut();
                inner.advance_timer = None;
                inner.relayout();
            }
            InputOutcome::FrontEnd(action) => {
                if let Err(err) = run_menu_action(action) {
                    gloo::console::warn!("menu action failed", err);
                }
            }
            _ => {}
        }

        self.inner.borrow().render();
        !matches!(outcome, InputOutcome::Attempt(AttemptResult::Ignored))
    }

    /// Track the pointer for hover feedback. Returns whether the slot under
    /// it reacts, so the page can switch to a pointer cursor.
    #[wasm_bindgen]
    pub fn handle_pointer_move(&self, x: f64, y: f64) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.hover = inner.layout.hit_test(x, y);
        inner
            .hover
            .is_some_and(|(region, slot)| inner.state.is_hoverable(region, slot))
    }

    /// Update animations and redraw (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.state.tick();
        inner.render();
    }

    /// Jump to a level (zero-based; out-of-range values wrap)
    #[wasm_bindgen]
    pub fn load_level(&self, level: i32) -> usize {
        let mut inner = self.inner.borrow_mut();
        let loaded = inner.load_level(i64::from(level));
        inner.render();
        loaded
    }

    /// Pick a value: `attribute` is "shape", "color" or "expression"
    #[wasm_bindgen]
    pub fn select(&self, attribute: &str, value: i32) -> Result<(), JsValue> {
        let attribute =
            Attribute::from_str(attribute).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let value =
            ValueIndex::new(i64::from(value)).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut inner = self.inner.borrow_mut();
        inner.state.player_select(attribute, value);
        inner.render();
        Ok(())
    }

    /// Try the current combination on the question mark.
    /// Returns "ignored", "mismatched", "matched" or "complete".
    #[wasm_bindgen]
    pub fn attempt_target(&self) -> String {
        let result = self.inner.borrow_mut().state.player_attempt_target();
        if let Some(line) = input::describe(&InputOutcome::Attempt(result)) {
            gloo::console::log!(line);
        }

        let label = match result {
            AttemptResult::Ignored => "ignored",
            AttemptResult::Mismatched => "mismatched",
            AttemptResult::Matched { advance: None } => "matched",
            AttemptResult::Matched {
                advance: Some(ticket),
            } => {
                self.schedule_advance(ticket);
                "complete"
            }
        };
        self.inner.borrow().render();
        label.to_string()
    }

    /// Fit the canvas to the window at 16:9 and recompute the layout
    #[wasm_bindgen]
    pub fn resize(&self, window_width: f64, window_height: f64) {
        let mut inner = self.inner.borrow_mut();
        let (width, height) = ScreenLayout::fit_canvas(window_width, window_height);
        inner.width = width;
        inner.height = height;

        // Update dpr in case it changed (e.g., moving to different monitor)
        inner.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr for crisp rendering)
        inner.canvas.set_width((width * inner.dpr) as u32);
        inner.canvas.set_height((height * inner.dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = inner.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = inner.ctx.reset_transform();
        let _ = inner.ctx.scale(inner.dpr, inner.dpr);

        inner.relayout();
        inner.render();
    }

    /// Current state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.inner.borrow().state.to_view()).unwrap_or_default()
    }

    /// The twelve tiles as JS objects
    #[wasm_bindgen]
    pub fn tile_views(&self) -> Result<JsValue, JsValue> {
        let views = self.inner.borrow().state.tile_views();
        serde_wasm_bindgen::to_value(&views).map_err(Into::into)
    }

    /// Zero-based level, the same numbering `load_level` takes
    #[wasm_bindgen]
    pub fn level(&self) -> usize {
        self.inner.borrow().state.level().index()
    }

    /// Level number as shown to the player (1-based)
    #[wasm_bindgen]
    pub fn display_level(&self) -> usize {
        self.inner.borrow().state.display_level()
    }

    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.inner.borrow().state.is_complete()
    }

    /// Whether the try-again marker is showing
    #[wasm_bindgen]
    pub fn try_again(&self) -> bool {
        self.inner.borrow().state.try_again()
    }

    /// Whether every image has finished loading
    #[wasm_bindgen]
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().images.is_ready()
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&self, theme_name: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.theme = Theme::by_name(theme_name);
        inner.render();
    }

    #[wasm_bindgen]
    pub fn get_width(&self) -> f64 {
        self.inner.borrow().width
    }

    #[wasm_bindgen]
    pub fn get_height(&self) -> f64 {
        self.inner.borrow().height
    }
}

impl FaceMatchGame {
    /// Arm the auto-advance timer for a solved level. The ticket goes stale
    /// if another level loads first, in which case firing does nothing.
    fn schedule_advance(&self, ticket: AdvanceTicket) {
        let weak: Weak<RefCell<GameInner>> = Rc::downgrade(&self.inner);
        let millis = u32::try_from(ticket.delay().as_millis()).unwrap_or(u32::MAX);
        let timer = Timeout::new(millis, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            // The fired timer stays in `advance_timer` until the next load
            // replaces it; dropping it here would free this closure.
            if inner.state.fire_advance(ticket) {
                inner.relayout();
                gloo::console::log!(format!("level {} loaded", inner.state.display_level()));
                inner.render();
            } else {
                gloo::console::log!("stale advance ignored");
            }
        });
        self.inner.borrow_mut().advance_timer = Some(timer);
    }
}

/// Menu buttons the page handles itself
fn run_menu_action(action: MenuAction) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    match action {
        MenuAction::Home => window.history()?.back(),
        MenuAction::Help => window.alert_with_message(messages::HELP),
        MenuAction::About => window.open_with_url(messages::CREDITS_URL).map(|_| ()),
        MenuAction::Previous | MenuAction::Next => Ok(()),
    }
}
