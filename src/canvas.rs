use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use singularity_core::{DrawSurface, Hsla};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` over a 2D canvas context. Drawing happens in CSS pixels; the
/// context transform maps them onto the scaled backing store.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    scale: f64,
    size: Vec2,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement, scale: f64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        let mut surface = Self {
            canvas,
            ctx,
            scale,
            size: Vec2::ONE,
        };
        surface.resize();
        Ok(surface)
    }

    /// Adopt a new backing-store scale and resize to it.
    pub fn resize_with_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.resize();
    }

    /// Recompute the backing store from the canvas box.
    fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas, self.scale);
        self.size = Vec2::new(w as f32, h as f32);
        // resizing the canvas resets context state, so restore the transform
        _ = self
            .ctx
            .set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);
    }

    #[inline]
    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    }
}

impl DrawSurface for Canvas2dSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fade(&mut self, alpha: f32) {
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {:.3})", alpha));
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Hsla)]) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("createRadialGradient failed: {:?}", e);
                return;
            }
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, &color.to_css());
        }
        self.circle_path(center, radius);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Hsla) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
