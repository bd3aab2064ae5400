use crate::canvas::Canvas2dSurface;
use crate::dom;
use crate::overlay;
use singularity_core::{BlackHoleEffect, FpsMeter, FrameHandle, FrameScheduler, PerfStats, Tier};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the persistent `requestAnimationFrame` callback. Emptied on
/// unmount, which also breaks the closure -> context -> scheduler cycle.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub effect: BlackHoleEffect<RafScheduler>,
    pub surface: Canvas2dSurface,
    pub meter: FpsMeter,
    pub monitor_visible: bool,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        self.effect.on_frame(now_ms, &mut self.surface);

        if let Some(fps) = self.meter.tick(now_ms) {
            if self.monitor_visible {
                let profile = self.effect.profile();
                let stats = PerfStats {
                    fps,
                    memory_mb: dom::used_heap_mb(&self.window),
                    low_performance: profile.tier == Tier::Low,
                    device_label: profile.label.clone(),
                };
                overlay::update_monitor(&self.document, &stats);
            }
        }
    }

    pub fn set_monitor_visible(&mut self, visible: bool) {
        self.monitor_visible = visible;
        if visible {
            overlay::show_monitor(&self.document);
        } else {
            overlay::hide_monitor(&self.document);
        }
    }
}

/// Install the tick closure and request the first frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, tick: TickSlot) {
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(now_ms);
    }) as Box<dyn FnMut(f64)>));
    frame_ctx.borrow_mut().effect.start();
}
