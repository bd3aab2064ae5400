#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use singularity_core::{backing_scale, estimate, BlackHoleEffect, FpsMeter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod probe;

use frame::{FrameContext, RafScheduler, TickSlot};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("singularity-web starting");
    Ok(())
}

struct Mounted {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: TickSlot,
    resize: events::Listener,
}

fn try_mount(canvas_id: &str) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let profile = estimate(&probe::BrowserProbe::new(window.clone()));
    let scale = backing_scale(profile.tier, profile.device_pixel_ratio);
    let surface = canvas::Canvas2dSurface::new(canvas, scale)?;

    let now = instant::now();
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window.clone(), tick.clone());
    let effect = BlackHoleEffect::new(profile, scheduler, rand::random(), now)?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        window: window.clone(),
        document,
        effect,
        surface,
        meter: FpsMeter::new(now),
        monitor_visible: false,
    }));

    // zoom and monitor moves change the pixel ratio and fire resize
    let (resize_ctx, resize_window) = (frame_ctx.clone(), window.clone());
    let resize = events::Listener::attach(window.as_ref(), "resize", move |_| {
        let mut ctx = resize_ctx.borrow_mut();
        let scale = ctx.effect.backing_scale_for(resize_window.device_pixel_ratio());
        ctx.surface.resize_with_scale(scale);
    })?;

    frame::start_loop(frame_ctx.clone(), tick.clone());
    Ok(Mounted {
        frame_ctx,
        tick,
        resize,
    })
}

/// The accretion-disk effect bound to one canvas. Mounting never throws:
/// without a usable 2D context the handle is inert.
#[wasm_bindgen]
pub struct BlackHole {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BlackHole {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> BlackHole {
        match try_mount(canvas_id) {
            Ok(m) => BlackHole { mounted: Some(m) },
            Err(e) => {
                log::warn!("[mount] effect disabled: {:?}", e);
                BlackHole { mounted: None }
            }
        }
    }

    /// Cancel the pending frame, free the tick closure and drop the resize
    /// listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame_ctx.borrow_mut().effect.unmount();
            m.tick.borrow_mut().take();
            m.resize.detach();
        }
    }

    pub fn set_monitor_visible(&mut self, visible: bool) {
        if let Some(m) = &self.mounted {
            m.frame_ctx.borrow_mut().set_monitor_visible(visible);
        }
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn tier(&self) -> Option<String> {
        let m = self.mounted.as_ref()?;
        let tier = m.frame_ctx.borrow().effect.tier();
        Some(tier.name().to_string())
    }

    pub fn device_label(&self) -> Option<String> {
        let m = self.mounted.as_ref()?;
        let label = m.frame_ctx.borrow().effect.profile().label.clone();
        Some(label)
    }

    pub fn quality(&self) -> Option<f32> {
        let m = self.mounted.as_ref()?;
        let q = m.frame_ctx.borrow().effect.quality().scalar();
        Some(q)
    }
}

impl Drop for BlackHole {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Soft glow following the pointer.
#[wasm_bindgen]
pub struct CursorGlow {
    wiring: Option<events::GlowWiring>,
}

#[wasm_bindgen]
impl CursorGlow {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CursorGlow {
        let wiring = dom::window_document().and_then(|d| match events::glow::attach(&d) {
            Ok(w) => Some(w),
            Err(e) => {
                log::warn!("[glow] disabled: {:?}", e);
                None
            }
        });
        CursorGlow { wiring }
    }

    pub fn unmount(&mut self) {
        if let Some(w) = self.wiring.take() {
            w.detach();
        }
    }
}

impl Drop for CursorGlow {
    fn drop(&mut self) {
        self.unmount();
    }
}
