//! Scroll event sampling.
//!
//! Scroll events arrive at unbounded frequency. A [`Sampler`] decides which
//! of them trigger a section pass; the default admits every event.

#[cfg(test)]
#[path = "sampling_test.rs"]
mod sampling_test;

/// Rule for admitting scroll events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SamplingPolicy {
    /// Admit every event.
    #[default]
    EveryEvent,
    /// Admit at most one event per `min_interval_ms`.
    Throttled { min_interval_ms: f64 },
}

/// Stateful gate applying a [`SamplingPolicy`] to event timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sampler {
    policy: SamplingPolicy,
    last_admitted_ms: Option<f64>,
}

impl Sampler {
    #[must_use]
    pub fn new(policy: SamplingPolicy) -> Self {
        Self { policy, last_admitted_ms: None }
    }

    #[cfg(test)]
    pub(crate) fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Whether the event at `now_ms` should be processed.
    ///
    /// A clock that moves backwards resets the window.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        let admitted = match (self.policy, self.last_admitted_ms) {
            (SamplingPolicy::EveryEvent, _) | (SamplingPolicy::Throttled { .. }, None) => true,
            (SamplingPolicy::Throttled { min_interval_ms }, Some(last)) => {
                now_ms < last || now_ms - last >= min_interval_ms
            }
        };
        if admitted {
            self.last_admitted_ms = Some(now_ms);
        }
        admitted
    }
}
