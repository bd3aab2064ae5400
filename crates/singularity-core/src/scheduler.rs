//! Frame scheduling seam between the effect and its host.
//!
//! A host scheduler is built around a single frame callback (the browser's
//! `requestAnimationFrame` tick, or a test loop); the effect only asks it for
//! the next frame and cancels the outstanding one on teardown.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one more invocation of the host's frame callback.
    /// `None` means the host cannot schedule frames at all.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel(&mut self, handle: FrameHandle);
}

/// Scheduler driven by hand from a fake clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    requested: u32,
    cancelled: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, as if the host fired the callback.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        Some(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Too soon after the last admitted frame.
    Throttled,
    /// Admitted but dropped by the secondary frame-skip throttle.
    Skipped,
    Process,
}

/// Two-stage frame admission: a minimum interval between admitted frames,
/// then only every `skip`-th admitted frame is processed.
#[derive(Clone, Debug)]
pub struct FrameGate {
    interval_ms: f64,
    skip: u32,
    last_frame_ms: f64,
    admitted: u64,
}

impl FrameGate {
    pub fn new(interval_ms: f64, skip: u32, now_ms: f64) -> Self {
        Self {
            interval_ms,
            skip: skip.max(1),
            last_frame_ms: now_ms,
            admitted: 0,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> Admission {
        if now_ms - self.last_frame_ms < self.interval_ms {
            return Admission::Throttled;
        }
        self.last_frame_ms = now_ms;
        self.admitted += 1;
        if self.admitted % self.skip as u64 == 0 {
            Admission::Process
        } else {
            Admission::Skipped
        }
    }

    pub fn admitted(&self) -> u64 {
        self.admitted
    }
}
