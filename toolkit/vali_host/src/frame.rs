//! Animation-frame scheduling wrappers.
//!
//! The toolkit only forwards to whatever frame source the host provides;
//! [`ThreadScheduler`] is the default source for hosts without one, firing
//! callbacks from detached threads after a fixed frame delay.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Callback invoked with the elapsed time in milliseconds since the
/// scheduler was created.
pub type FrameCallback = Box<dyn FnOnce(f64) + Send>;

/// Opaque handle for one scheduled frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// A source of animation frames.
pub trait FrameScheduler: Send + Sync {
    /// Schedule `callback` to run on the next frame.
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Cancel a pending frame request. Returns false when the handle is
    /// unknown or the frame has already fired.
    fn cancel_frame(&self, handle: FrameHandle) -> bool;
}

/// Thread-backed frame source.
///
/// Each request spawns a detached thread that sleeps for the frame delay and
/// then runs the callback unless the request was cancelled. Fire and forget:
/// callback panics stay on their thread.
pub struct ThreadScheduler {
    frame_delay: Duration,
    started: Instant,
    next_handle: AtomicU64,
    pending: Arc<Mutex<FxHashMap<u64, Arc<AtomicBool>>>>,
}

impl ThreadScheduler {
    /// Roughly 60 frames per second.
    pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(16);

    /// Create a scheduler with the default frame delay.
    pub fn new() -> Self {
        ThreadScheduler::with_frame_delay(Self::DEFAULT_FRAME_DELAY)
    }

    /// Create a scheduler with a custom frame delay.
    pub fn with_frame_delay(frame_delay: Duration) -> Self {
        ThreadScheduler {
            frame_delay,
            started: Instant::now(),
            next_handle: AtomicU64::new(1),
            pending: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Number of requests that have not yet fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        ThreadScheduler::new()
    }
}

impl FrameScheduler for ThreadScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let id = self.next_handle.fetch_add(1, Ordering::Relaxed);
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending.lock().insert(id, Arc::clone(&cancelled));

        let delay = self.frame_delay;
        let started = self.started;
        let pending = Arc::clone(&self.pending);
        thread::spawn(move || {
            thread::sleep(delay);
            pending.lock().remove(&id);
            if !cancelled.load(Ordering::Acquire) {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                callback(elapsed_ms);
            }
        });

        FrameHandle(id)
    }

    fn cancel_frame(&self, handle: FrameHandle) -> bool {
        match self.pending.lock().remove(&handle.0) {
            Some(cancelled) => {
                cancelled.store(true, Ordering::Release);
                true
            }
            None => false,
        }
    }
}
