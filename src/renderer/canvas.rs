//! Browser canvas surface (wasm32 only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;
use crate::sim::{Bounds, Rgb, Rgba};

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size `canvas` to `bounds` and take its 2D context
    pub fn new(canvas: HtmlCanvasElement, bounds: Bounds) -> Result<Self, JsValue> {
        canvas.set_width(bounds.width);
        canvas.set_height(bounds.height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        line_width: f32,
    ) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_line_width(line_width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.stroke();
        Ok(())
    }
}
