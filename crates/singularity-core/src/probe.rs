//! Coarse device capability estimation.
//!
//! The classification is a best-effort heuristic over platform signals; it
//! picks a tier for the effect and a label for the performance monitor, and
//! makes no promise about the real hardware.

use crate::constants::{HIGH_DPI_THRESHOLD, LOW_CORE_COUNT};
use crate::tier::Tier;

const MOBILE_MARKERS: [&str; 4] = ["iPad", "iPhone", "Android", "Mobile"];

/// Snapshot of the platform signals the estimator reads.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformSignals {
    pub user_agent: String,
    pub viewport_width: f64,
    pub device_pixel_ratio: f64,
    pub logical_cores: Option<u32>,
    pub has_idle_callback: bool,
    pub has_intersection_observer: bool,
}

impl Default for PlatformSignals {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            viewport_width: 1280.0,
            device_pixel_ratio: 1.0,
            logical_cores: None,
            has_idle_callback: true,
            has_intersection_observer: true,
        }
    }
}

/// Source of platform signals. The browser front-end reads the live
/// environment; tests use [`StaticProbe`].
pub trait CapabilityProbe {
    fn signals(&self) -> PlatformSignals;
}

#[derive(Clone, Debug, Default)]
pub struct StaticProbe(pub PlatformSignals);

impl CapabilityProbe for StaticProbe {
    fn signals(&self) -> PlatformSignals {
        self.0.clone()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    pub tier: Tier,
    pub label: String,
    pub viewport_width: f64,
    pub device_pixel_ratio: f64,
}

#[inline]
fn is_intel_mac(ua: &str) -> bool {
    ua.contains("Intel") && ua.contains("Mac OS X")
}

#[inline]
fn is_mobile(ua: &str) -> bool {
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

pub fn is_low_performance(s: &PlatformSignals) -> bool {
    let missing_api = !s.has_idle_callback || !s.has_intersection_observer;
    let high_dpi = s.device_pixel_ratio > HIGH_DPI_THRESHOLD;
    // An unreported (or zero) core count is not treated as a constraint.
    let few_cores = matches!(s.logical_cores, Some(n) if n > 0 && n <= LOW_CORE_COUNT);
    is_intel_mac(&s.user_agent) || is_mobile(&s.user_agent) || missing_api || high_dpi || few_cores
}

pub fn device_label(s: &PlatformSignals) -> String {
    let ua = s.user_agent.as_str();
    // iOS user agents also say "like Mac OS X", so they are matched first
    let device = if is_intel_mac(ua) {
        "Intel MacBook"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS Device"
    } else if ua.contains("Mac OS X") {
        "Apple Silicon Mac"
    } else if ua.contains("Windows") {
        "Windows PC"
    } else if ua.contains("Android") {
        "Android Device"
    } else {
        "Unknown"
    };
    match s.logical_cores {
        Some(n) if n > 0 => format!("{device} ({n} cores)"),
        _ => format!("{device} (Unknown cores)"),
    }
}

/// Evaluate the probe once and derive the profile used for a whole mount.
pub fn estimate<P: CapabilityProbe + ?Sized>(probe: &P) -> DeviceProfile {
    let signals = probe.signals();
    let tier = Tier::from_low_performance(is_low_performance(&signals));
    let label = device_label(&signals);
    log::info!(
        "[probe] tier={} device=\"{}\" width={:.0} dpr={:.2}",
        tier.name(),
        label,
        signals.viewport_width,
        signals.device_pixel_ratio
    );
    DeviceProfile {
        tier,
        label,
        viewport_width: signals.viewport_width,
        device_pixel_ratio: signals.device_pixel_ratio,
    }
}
