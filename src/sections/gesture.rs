//! Keyboard, wheel and touch input reduced to single section steps.

use crate::config::TrackerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput {
    ArrowUp,
    ArrowDown,
    Wheel { delta_y: f64 },
    /// Vertical finger travel, `start_y - end_y`. Positive when swiping up.
    Swipe { delta_y: f64 },
}

impl GestureInput {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(GestureInput::ArrowUp),
            "ArrowDown" => Some(GestureInput::ArrowDown),
            _ => None,
        }
    }
}

/// Drops input below the magnitude thresholds and anything arriving within
/// the cooldown after a step.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureGate {
    cooldown_ms: i64,
    wheel_threshold: f64,
    swipe_threshold: f64,
    last_step_ms: Option<i64>,
}

impl GestureGate {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            cooldown_ms: config.cooldown_ms,
            wheel_threshold: config.wheel_threshold,
            swipe_threshold: config.swipe_threshold_px,
            last_step_ms: None,
        }
    }

    pub fn cooling_down(&self, now_ms: i64) -> bool {
        self.last_step_ms
            .map_or(false, |last| now_ms - last < self.cooldown_ms)
    }

    pub fn direction(&self, input: GestureInput, now_ms: i64) -> Option<StepDirection> {
        if self.cooling_down(now_ms) {
            return None;
        }
        match input {
            GestureInput::ArrowUp => Some(StepDirection::Up),
            GestureInput::ArrowDown => Some(StepDirection::Down),
            GestureInput::Wheel { delta_y } if delta_y.abs() >= self.wheel_threshold => {
                Some(if delta_y > 0.0 { StepDirection::Down } else { StepDirection::Up })
            }
            GestureInput::Swipe { delta_y } if delta_y.abs() >= self.swipe_threshold => {
                Some(if delta_y > 0.0 { StepDirection::Down } else { StepDirection::Up })
            }
            _ => None,
        }
    }

    pub fn mark_step(&mut self, now_ms: i64) {
        self.last_step_ms = Some(now_ms);
    }
}

/// Remembers where a touch began so the end event can become a swipe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    pub fn finish(&mut self, y: f64) -> Option<GestureInput> {
        self.start_y
            .take()
            .map(|start| GestureInput::Swipe { delta_y: start - y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> GestureGate {
        GestureGate::new(&TrackerConfig::default())
    }

    #[test]
    fn small_wheel_and_swipe_are_ignored() {
        let gate = gate();
        assert_eq!(gate.direction(GestureInput::Wheel { delta_y: 4.0 }, 0), None);
        assert_eq!(gate.direction(GestureInput::Swipe { delta_y: -20.0 }, 0), None);
        assert_eq!(
            gate.direction(GestureInput::Wheel { delta_y: -120.0 }, 0),
            Some(StepDirection::Up)
        );
        assert_eq!(
            gate.direction(GestureInput::Swipe { delta_y: 80.0 }, 0),
            Some(StepDirection::Down)
        );
    }

    #[test]
    fn cooldown_blocks_input_after_a_step() {
        let mut gate = gate();
        gate.mark_step(1_000);
        assert_eq!(gate.direction(GestureInput::ArrowDown, 1_500), None);
        assert_eq!(
            gate.direction(GestureInput::ArrowDown, 1_800),
            Some(StepDirection::Down)
        );
    }

    #[test]
    fn swipe_needs_a_start() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.finish(100.0), None);
        swipe.begin(400.0);
        assert_eq!(swipe.finish(300.0), Some(GestureInput::Swipe { delta_y: 100.0 }));
        assert_eq!(swipe.finish(300.0), None);
    }

    #[test]
    fn only_vertical_arrows_are_gestures() {
        assert_eq!(GestureInput::from_key("ArrowUp"), Some(GestureInput::ArrowUp));
        assert_eq!(GestureInput::from_key("ArrowLeft"), None);
    }
}
