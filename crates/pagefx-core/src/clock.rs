use std::cell::RefCell;
use std::rc::Rc;

/// Callback run once before the next repaint with the frame timestamp (ms).
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// "Run this before the next repaint."
///
/// Scheduling is one-shot; continuous animation comes from [`drive`], which
/// re-schedules for as long as the animation reports [`FrameStatus::Continue`].
/// Hosts may delay or coalesce frames, so consumers derive state from the
/// timestamp rather than from a frame count.
pub trait FrameClock {
    fn schedule(&self, callback: FrameCallback);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Done,
}

/// Lifecycle of a finite animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    Idle,
    Running { start_ms: f64 },
    Done,
}

/// Something advanced once per frame.
pub trait FrameDriven {
    fn frame(&mut self, now_ms: f64) -> FrameStatus;
}

/// Schedule `target` on `clock` and keep it running until it reports `Done`.
pub fn drive<C, T>(clock: C, target: Rc<RefCell<T>>)
where
    C: FrameClock + Clone + 'static,
    T: FrameDriven + ?Sized + 'static,
{
    let next = clock.clone();
    clock.schedule(Box::new(move |now_ms| {
        let status = target.borrow_mut().frame(now_ms);
        if status == FrameStatus::Continue {
            drive(next, target);
        }
    }));
}

/// Deterministic clock: callbacks queue until [`ManualClock::advance_to`].
///
/// Clones share one queue, the same way every component on a page shares
/// the host's repaint cadence.
#[derive(Clone, Default)]
pub struct ManualClock {
    queue: Rc<RefCell<Vec<FrameCallback>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run one frame at `now_ms`. Callbacks scheduled while it runs wait for
    /// the following frame. Returns how many callbacks ran.
    pub fn advance_to(&self, now_ms: f64) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let ran = due.len();
        for callback in due {
            callback(now_ms);
        }
        ran
    }
}

impl FrameClock for ManualClock {
    fn schedule(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push(callback);
    }
}
