use crate::options::WaitConfig;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WaitStep {
    Idle,
    Advance(f64),
    Finished,
}

/// Repeating task behind wait mode. Lives exactly as long as the dialog stays visible;
/// the controller drops it on every hide.
#[derive(Debug, Clone)]
pub(crate) struct WaitTask {
    config: WaitConfig,
    started: Option<Instant>,
    steps: u64,
}

impl WaitTask {
    pub(crate) fn new(config: WaitConfig) -> Self {
        Self {
            config,
            started: None,
            steps: 0,
        }
    }

    pub(crate) fn text(&self) -> Option<&str> {
        self.config.text.as_deref()
    }

    /// The first poll anchors the clock.
    pub(crate) fn poll(&mut self, now: Instant) -> WaitStep {
        let Some(started) = self.started else {
            self.started = Some(now);
            return WaitStep::Idle;
        };
        let elapsed = now.saturating_duration_since(started);
        if self
            .config
            .duration
            .is_some_and(|duration| elapsed >= duration)
        {
            return WaitStep::Finished;
        }
        let interval = self.config.interval.as_millis().max(1);
        let due = (elapsed.as_millis() / interval) as u64;
        if due <= self.steps {
            return WaitStep::Idle;
        }
        self.steps = due;
        WaitStep::Advance(segment_value(due, self.config.increment))
    }
}

/// Fill fraction after `step` ticks: the bar grows one segment per tick and wraps.
fn segment_value(step: u64, increment: u32) -> f64 {
    let increment = u64::from(increment.max(1));
    let segment = (step - 1) % increment + 1;
    segment as f64 / increment as f64
}
