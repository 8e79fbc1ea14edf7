/// Action run once when its target first becomes visible.
pub type RevealAction<T> = Box<dyn FnOnce(&mut T)>;

struct Watch<T> {
    target: T,
    action: RevealAction<T>,
}

/// One-shot visibility trigger queue.
///
/// Holds `(target, action)` pairs. Each [`poll`](Self::poll) asks the host
/// how much of every pending target is visible; targets at or past the
/// threshold run their action and leave the queue for good, so an element
/// that scrolls out and back in never fires twice.
///
/// Thresholds belong to the instance. Independent instances watch disjoint
/// element sets with their own thresholds.
pub struct VisibilityTrigger<T> {
    threshold: f32,
    pending: Vec<Watch<T>>,
}

/// Tolerance for hosts that report a ratio a hair under the threshold they
/// were asked to fire at.
const THRESHOLD_SLACK: f32 = 1.0e-3;

impl<T> VisibilityTrigger<T> {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            pending: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Targets that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn observe<F>(&mut self, target: T, action: F)
    where
        F: FnOnce(&mut T) + 'static,
    {
        self.pending.push(Watch {
            target,
            action: Box::new(action),
        });
    }

    /// Observe every target with a copy of the same action.
    pub fn observe_all<I, F>(&mut self, targets: I, action: F)
    where
        I: IntoIterator<Item = T>,
        F: Fn(&mut T) + Clone + 'static,
    {
        for target in targets {
            self.observe(target, action.clone());
        }
    }

    /// Whether a visible `fraction` satisfies this trigger.
    pub fn is_met(&self, fraction: f32) -> bool {
        fraction > 0.0 && fraction + THRESHOLD_SLACK >= self.threshold
    }

    /// Fire and release every pending target that is visible enough.
    ///
    /// `fraction_of` reports the visible fraction of a target in [0,1].
    /// Fired targets are handed back so the host can stop observing them.
    pub fn poll<F>(&mut self, mut fraction_of: F) -> Vec<T>
    where
        F: FnMut(&T) -> f32,
    {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            let fraction = fraction_of(&self.pending[i].target);
            if self.is_met(fraction) {
                let Watch { mut target, action } = self.pending.swap_remove(i);
                action(&mut target);
                fired.push(target);
            } else {
                i += 1;
            }
        }
        fired
    }
}
