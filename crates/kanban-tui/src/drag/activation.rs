//! When does a press become a drag?
//!
//! A mouse press starts dragging once the pointer has travelled
//! `pointer_distance` cells. A touch press starts dragging once it has been
//! held for `touch_delay` without drifting more than `touch_tolerance`; if
//! it drifts further first, the gesture belongs to scrolling and is
//! abandoned. Keyboard pick-up bypasses this entirely.

use kanban_core::DragConfig;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(u16, u16)> for Point {
    fn from((column, row): (u16, u16)) -> Self {
        Self::new(f64::from(column), f64::from(row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Not decided yet.
    Wait,
    Start,
    Abandon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub kind: PointerKind,
    pub origin: Point,
    pub at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationPolicy {
    pub pointer_distance: f64,
    pub touch_delay: Duration,
    pub touch_tolerance: f64,
}

impl Default for ActivationPolicy {
    fn default() -> Self {
        Self::from(&DragConfig::default())
    }
}

impl From<&DragConfig> for ActivationPolicy {
    fn from(config: &DragConfig) -> Self {
        Self {
            pointer_distance: config.pointer_distance,
            touch_delay: config.touch_delay(),
            touch_tolerance: config.touch_tolerance,
        }
    }
}

impl ActivationPolicy {
    /// Decide on a press given the pointer's current position and time.
    pub fn check(&self, press: &Press, position: Point, now: Instant) -> Activation {
        let travelled = press.origin.distance_to(position);
        match press.kind {
            PointerKind::Mouse => {
                if travelled >= self.pointer_distance {
                    Activation::Start
                } else {
                    Activation::Wait
                }
            }
            PointerKind::Touch => {
                if travelled > self.touch_tolerance {
                    Activation::Abandon
                } else if now.saturating_duration_since(press.at) >= self.touch_delay {
                    Activation::Start
                } else {
                    Activation::Wait
                }
            }
        }
    }

    /// Time-only check for a press that has not moved since the last event.
    pub fn check_elapsed(&self, press: &Press, now: Instant) -> Activation {
        match press.kind {
            PointerKind::Mouse => Activation::Wait,
            PointerKind::Touch => {
                if now.saturating_duration_since(press.at) >= self.touch_delay {
                    Activation::Start
                } else {
                    Activation::Wait
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(kind: PointerKind, at: Instant) -> Press {
        Press {
            kind,
            origin: Point::new(10.0, 10.0),
            at,
        }
    }

    #[test]
    fn test_mouse_needs_distance() {
        let policy = ActivationPolicy::default();
        let now = Instant::now();
        let p = press(PointerKind::Mouse, now);

        assert_eq!(policy.check(&p, Point::new(11.0, 10.0), now), Activation::Wait);
        assert_eq!(policy.check(&p, Point::new(12.0, 10.0), now), Activation::Start);
        assert_eq!(
            policy.check_elapsed(&p, now + Duration::from_secs(5)),
            Activation::Wait
        );
    }

    #[test]
    fn test_touch_needs_hold() {
        let policy = ActivationPolicy::default();
        let start = Instant::now();
        let p = press(PointerKind::Touch, start);

        let still = Point::new(12.0, 12.0);
        assert_eq!(policy.check(&p, still, start + Duration::from_millis(100)), Activation::Wait);
        assert_eq!(policy.check(&p, still, start + Duration::from_millis(250)), Activation::Start);
        assert_eq!(
            policy.check_elapsed(&p, start + Duration::from_millis(300)),
            Activation::Start
        );
    }

    #[test]
    fn test_touch_drift_abandons() {
        let policy = ActivationPolicy::default();
        let start = Instant::now();
        let p = press(PointerKind::Touch, start);

        assert_eq!(
            policy.check(&p, Point::new(10.0, 19.0), start + Duration::from_millis(50)),
            Activation::Abandon
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = DragConfig {
            pointer_distance: 4.0,
            touch_delay_ms: 500,
            touch_tolerance: 10.0,
        };
        let policy = ActivationPolicy::from(&config);
        assert_eq!(policy.pointer_distance, 4.0);
        assert_eq!(policy.touch_delay, Duration::from_millis(500));
        assert_eq!(policy.touch_tolerance, 10.0);
    }
}
