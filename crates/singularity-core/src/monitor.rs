use crate::constants::{
    FPS_FAIR_BELOW, FPS_POOR_BELOW, FPS_SAMPLE_INTERVAL_MS, MEMORY_ELEVATED_ABOVE_MB,
    MEMORY_HIGH_ABOVE_MB,
};

/// Counts display frames and reports the rate roughly once per second.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    frames: u32,
    window_start_ms: f64,
    last_fps: Option<u32>,
}

impl FpsMeter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start_ms: now_ms,
            last_fps: None,
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < FPS_SAMPLE_INTERVAL_MS {
            return None;
        }
        let fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        self.last_fps = Some(fps);
        Some(fps)
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpsBand {
    Poor,
    Fair,
    Good,
}

impl FpsBand {
    pub fn of(fps: u32) -> Self {
        if fps < FPS_POOR_BELOW {
            FpsBand::Poor
        } else if fps < FPS_FAIR_BELOW {
            FpsBand::Fair
        } else {
            FpsBand::Good
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FpsBand::Poor => "perf-bad",
            FpsBand::Fair => "perf-warn",
            FpsBand::Good => "perf-ok",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryBand {
    Normal,
    Elevated,
    High,
}

impl MemoryBand {
    pub fn of(mb: u32) -> Self {
        if mb > MEMORY_HIGH_ABOVE_MB {
            MemoryBand::High
        } else if mb > MEMORY_ELEVATED_ABOVE_MB {
            MemoryBand::Elevated
        } else {
            MemoryBand::Normal
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MemoryBand::High => "perf-bad",
            MemoryBand::Elevated => "perf-warn",
            MemoryBand::Normal => "perf-ok",
        }
    }
}

/// One reading for the performance overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfStats {
    pub fps: u32,
    /// Heap in MiB when the host exposes it.
    pub memory_mb: Option<u32>,
    pub low_performance: bool,
    pub device_label: String,
}

impl PerfStats {
    pub fn mode_label(&self) -> &'static str {
        if self.low_performance {
            "Low Performance"
        } else {
            "High Performance"
        }
    }

    pub fn fps_band(&self) -> FpsBand {
        FpsBand::of(self.fps)
    }

    pub fn memory_band(&self) -> Option<MemoryBand> {
        self.memory_mb.filter(|mb| *mb > 0).map(MemoryBand::of)
    }
}
