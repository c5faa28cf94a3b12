//! Canvas rendering for the puzzle screen

use crate::assets::ImageStore;
use crate::layout::{Placement, Rect, ScreenLayout, HOVER_SCALE};
use crate::theme::Theme;
use facematch_core::{
    assets, messages, ColorFilter, MenuAction, PuzzleState, RegionId, ValueIndex,
    ATTRIBUTE_VALUES, TARGET_TILE, TILE_COUNT,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Offscreen canvas used to tint white shape images
pub struct Tinter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Tinter {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Multiply the image by the filter color, keeping its alpha
    fn tint(
        &self,
        image: &HtmlImageElement,
        filter: &ColorFilter,
        size: f64,
    ) -> Result<&HtmlCanvasElement, JsValue> {
        let px = size.ceil().max(1.0);
        self.canvas.set_width(px as u32);
        self.canvas.set_height(px as u32);
        self.ctx.clear_rect(0.0, 0.0, px, px);
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, px, px)?;
        self.ctx.set_global_composite_operation("multiply")?;
        self.ctx.set_fill_style_str(&filter.as_css());
        self.ctx.fill_rect(0.0, 0.0, px, px);
        self.ctx.set_global_composite_operation("destination-in")?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, px, px)?;
        self.ctx.set_global_composite_operation("source-over")?;
        Ok(&self.canvas)
    }
}

/// What to draw into one tile rectangle
enum Sprite<'a> {
    Image(&'a HtmlImageElement),
    Tinted(&'a HtmlImageElement, ColorFilter),
}

/// Per-frame drawing context
pub struct Painter<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
    pub tinter: &'a Tinter,
    pub images: &'a ImageStore,
    pub theme: &'a Theme,
    pub layout: &'a ScreenLayout,
    /// Slot under the pointer, as a base slot
    pub hover: Option<(RegionId, usize)>,
}

impl Painter<'_> {
    pub fn render(&self, state: &PuzzleState) -> Result<(), JsValue> {
        if !self.images.is_ready() {
            return self.render_loading();
        }

        self.render_background()?;
        for placement in [
            &self.layout.mystery,
            &self.layout.picker,
            &self.layout.preview,
            &self.layout.menu,
        ] {
            self.render_box(placement)?;
        }
        self.render_mystery(state)?;
        self.render_picker(state)?;
        self.render_preview(state)?;
        self.render_menu(state)?;
        self.render_text(state)?;

        if state.is_complete() {
            if let Some(image) = self.images.get(state.success_image()) {
                let rect = self.layout.success_rect(state.celebration_scale());
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image, rect.x, rect.y, rect.w, rect.h,
                )?;
            }
        }
        Ok(())
    }

    fn render_loading(&self) -> Result<(), JsValue> {
        let spot = self.layout.loading_text;
        self.ctx.set_fill_style_str(&self.theme.background.as_css());
        self.ctx
            .fill_rect(0.0, 0.0, self.layout.width, self.layout.height);
        self.ctx.set_fill_style_str(&self.theme.loading_text.as_css());
        self.ctx
            .set_font(&format!("{}px {}", spot.font_px, FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let text = match self.images.loaded() {
            0 => messages::LOADING.to_string(),
            loaded => messages::loading_progress(loaded, self.images.total()),
        };
        self.ctx.fill_text(&text, spot.x, spot.y)
    }

    fn render_background(&self) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&self.theme.background.as_css());
        self.ctx
            .fill_rect(0.0, 0.0, self.layout.width, self.layout.height);
        if let Some(image) = self.images.get(assets::BACKGROUND) {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                0.0,
                0.0,
                self.layout.width,
                self.layout.height,
            )?;
        }
        Ok(())
    }

    /// Translucent rounded box behind a region
    fn render_box(&self, placement: &Placement) -> Result<(), JsValue> {
        let Some(color) = placement.region.color else {
            return Ok(());
        };
        let Rect { x, y, w, h } = placement.box_rect();
        let r = placement.margin.min(w / 2.0).min(h / 2.0);

        self.ctx.save();
        self.ctx.set_global_alpha(self.theme.box_alpha);
        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.arc_to(x + w, y, x + w, y + h, r)?;
        self.ctx.arc_to(x + w, y + h, x, y + h, r)?;
        self.ctx.arc_to(x, y + h, x, y, r)?;
        self.ctx.arc_to(x, y, x + w, y, r)?;
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&self.theme.box_stroke.as_css());
        self.ctx.set_line_width(1.0);
        self.ctx.stroke();
        self.ctx.restore();
        Ok(())
    }

    fn render_mystery(&self, state: &PuzzleState) -> Result<(), JsValue> {
        for index in 0..TILE_COUNT {
            let rect = self.layout.slot_rect(RegionId::Mystery, index);
            let scale = self.hover_scale(state, RegionId::Mystery, index);
            match state.revealed_solution(index) {
                Some(solution) => {
                    if let Some(shape) = self.images.get(assets::shape_key(solution.shape)) {
                        let filter = ColorFilter::for_color(solution.color);
                        self.draw(Sprite::Tinted(shape, filter), rect, scale, 0.0)?;
                    }
                    if let Some(face) = self.images.get(assets::face_key(solution.expression)) {
                        self.draw(Sprite::Image(face), rect, scale, 0.0)?;
                    }
                }
                None => {
                    let rotation = if index == TARGET_TILE {
                        state.wobble_angle()
                    } else {
                        0.0
                    };
                    if let Some(mark) = self.images.get(assets::QUESTION_MARK) {
                        self.draw(Sprite::Image(mark), rect, scale, rotation)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn render_picker(&self, state: &PuzzleState) -> Result<(), JsValue> {
        let circle = self.images.get(assets::SHAPES[0]);
        for value in 0..ATTRIBUTE_VALUES {
            let shape_slot = value;
            let color_slot = ATTRIBUTE_VALUES + value;
            let face_slot = 2 * ATTRIBUTE_VALUES + value;

            if let Some(shape) = self.images.get(assets::SHAPES[value]) {
                let rect = self.layout.slot_rect(RegionId::Picker, shape_slot);
                let scale = self.hover_scale(state, RegionId::Picker, shape_slot);
                self.draw(Sprite::Image(shape), rect, scale, 0.0)?;
            }

            if let Some(circle) = circle {
                let rect = self.layout.slot_rect(RegionId::Picker, color_slot);
                let scale = self.hover_scale(state, RegionId::Picker, color_slot);
                let filter = ColorFilter::for_color(ValueIndex::ALL[value]);
                self.draw(Sprite::Tinted(circle, filter), rect, scale, 0.0)?;

                let rect = self.layout.slot_rect(RegionId::Picker, face_slot);
                let scale = self.hover_scale(state, RegionId::Picker, face_slot);
                self.draw(Sprite::Image(circle), rect, scale, 0.0)?;
                if let Some(face) = self.images.get(assets::FACES[value]) {
                    self.draw(Sprite::Image(face), rect, scale, 0.0)?;
                }
            }
        }
        Ok(())
    }

    fn render_preview(&self, state: &PuzzleState) -> Result<(), JsValue> {
        let preview = state.preview();
        let rect = self.layout.slot_rect(RegionId::Preview, 0);

        if preview.try_again {
            if let Some(image) = self.images.get(assets::TRY_AGAIN) {
                self.draw(Sprite::Image(image), rect, 1.0, 0.0)?;
            }
        } else if let Some(image) = preview
            .shape
            .and_then(|shape| self.images.get(assets::shape_key(shape)))
        {
            let sprite = match preview.color {
                Some(color) => Sprite::Tinted(image, ColorFilter::for_color(color)),
                None => Sprite::Image(image),
            };
            self.draw(sprite, rect, 1.0, 0.0)?;
        }

        if let Some(face) = preview
            .expression
            .and_then(|expression| self.images.get(assets::face_key(expression)))
        {
            self.draw(Sprite::Image(face), rect, 1.0, 0.0)?;
        }
        Ok(())
    }

    fn render_menu(&self, state: &PuzzleState) -> Result<(), JsValue> {
        for (slot, action) in MenuAction::ALL.iter().enumerate() {
            if let Some(image) = self.images.get(action.asset_key()) {
                let rect = self.layout.slot_rect(RegionId::Menu, slot);
                let scale = self.hover_scale(state, RegionId::Menu, slot);
                self.draw(Sprite::Image(image), rect, scale, 0.0)?;
            }
        }
        Ok(())
    }

    fn render_text(&self, state: &PuzzleState) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&self.theme.text.as_css());

        let level = self.layout.level_text;
        self.ctx
            .set_font(&format!("{}px {}", level.font_px, FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(&state.display_level().to_string(), level.x, level.y)?;

        let status = self.layout.status_text;
        self.ctx
            .set_font(&format!("{}px {}", status.font_px, FONT_FAMILY));
        self.ctx.set_text_align("right");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.fill_text(
            &messages::level_status(state.display_level()),
            status.x,
            status.y,
        )
    }

    fn hover_scale(&self, state: &PuzzleState, region: RegionId, slot: usize) -> f64 {
        match self.hover {
            Some(hovered) if hovered == (region, slot) && state.is_hoverable(region, slot) => {
                HOVER_SCALE
            }
            _ => 1.0,
        }
    }

    /// Draw a sprite into `rect`, scaled and rotated (degrees) about its center
    fn draw(
        &self,
        sprite: Sprite<'_>,
        rect: Rect,
        scale: f64,
        rotation: f64,
    ) -> Result<(), JsValue> {
        let (cx, cy) = rect.center();
        let w = rect.w * scale;
        let h = rect.h * scale;

        let tinted = match &sprite {
            Sprite::Tinted(image, filter) => Some(self.tinter.tint(image, filter, w.max(h))?),
            Sprite::Image(_) => None,
        };

        self.ctx.save();
        let result = self.ctx.translate(cx, cy).and_then(|()| {
            if rotation != 0.0 {
                self.ctx.rotate(rotation.to_radians())?;
            }
            match (tinted, &sprite) {
                (Some(canvas), _) => self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
                    canvas,
                    -w / 2.0,
                    -h / 2.0,
                    w,
                    h,
                ),
                (None, Sprite::Image(image) | Sprite::Tinted(image, _)) => self
                    .ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(
                        image,
                        -w / 2.0,
                        -h / 2.0,
                        w,
                        h,
                    ),
            }
        });
        self.ctx.restore();
        result
    }
}
