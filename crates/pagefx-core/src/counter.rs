use crate::clock::{AnimationState, FrameDriven, FrameStatus};
use crate::math::{ease_out_cubic, saturate};
use crate::sink::TextSink;

/// Coerce a goal attribute to a non-negative integer.
///
/// Missing, empty, non-numeric, negative or non-finite values become 0;
/// fractional values are truncated.
pub fn parse_goal(raw: Option<&str>) -> u64 {
    let Some(text) = raw.map(str::trim) else {
        return 0;
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.floor().min(u64::MAX as f64) as u64,
        _ => 0,
    }
}

/// Value shown `elapsed_ms` into a count-up towards `goal`.
///
/// `floor(goal * ease_out_cubic(t))` while running, snapped to exactly
/// `goal` once `t` reaches 1.
pub fn displayed_value(goal: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    let t = if duration_ms > 0.0 {
        saturate(elapsed_ms / duration_ms)
    } else {
        1.0
    };
    if t >= 1.0 {
        return goal;
    }
    let eased = ease_out_cubic(t);
    ((goal as f64 * eased).floor() as u64).min(goal)
}

/// Count-up display started by a visibility trigger.
///
/// `Idle` until its first frame, which stamps the start time; `Running`
/// re-renders every frame; `Done` once the goal is shown, after which the
/// clock stops driving it. There is no way back to `Idle`.
pub struct EasedCounter<S: TextSink> {
    goal: u64,
    duration_ms: f64,
    state: AnimationState,
    sink: S,
}

impl<S: TextSink> EasedCounter<S> {
    pub fn new(goal: u64, duration_ms: f64, sink: S) -> Self {
        Self {
            goal,
            duration_ms,
            state: AnimationState::Idle,
            sink,
        }
    }

    pub fn goal(&self) -> u64 {
        self.goal
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }
}

impl<S: TextSink> FrameDriven for EasedCounter<S> {
    fn frame(&mut self, now_ms: f64) -> FrameStatus {
        let start_ms = match self.state {
            AnimationState::Done => return FrameStatus::Done,
            AnimationState::Idle => {
                self.state = AnimationState::Running { start_ms: now_ms };
                now_ms
            }
            AnimationState::Running { start_ms } => start_ms,
        };
        let elapsed = (now_ms - start_ms).max(0.0);
        let value = displayed_value(self.goal, elapsed, self.duration_ms);
        self.sink.set_text(&value.to_string());
        if elapsed >= self.duration_ms {
            self.state = AnimationState::Done;
            FrameStatus::Done
        } else {
            FrameStatus::Continue
        }
    }
}
