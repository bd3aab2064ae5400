use crate::constants::{IDLE_CALLBACK_GLOBAL, INTERSECTION_OBSERVER_GLOBAL};
use crate::dom;
use singularity_core::{CapabilityProbe, PlatformSignals};
use web_sys as web;

/// Reads the live browser environment.
pub struct BrowserProbe {
    window: web::Window,
}

impl BrowserProbe {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl CapabilityProbe for BrowserProbe {
    fn signals(&self) -> PlatformSignals {
        let navigator = self.window.navigator();
        let cores = navigator.hardware_concurrency();
        PlatformSignals {
            user_agent: navigator.user_agent().unwrap_or_default(),
            viewport_width: self
                .window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            device_pixel_ratio: self.window.device_pixel_ratio(),
            logical_cores: (cores.is_finite() && cores >= 1.0).then_some(cores as u32),
            has_idle_callback: dom::has_global(&self.window, IDLE_CALLBACK_GLOBAL),
            has_intersection_observer: dom::has_global(&self.window, INTERSECTION_OBSERVER_GLOBAL),
        }
    }
}
