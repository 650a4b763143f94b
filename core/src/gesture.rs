use core::time::Duration;
use serde::{Deserialize, Serialize};
pub use web_time::Instant;

use crate::*;

pub const DEFAULT_LONG_PRESS: Duration = Duration::from_secs(2);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// Opens the cell
    Tap,
    /// Toggles the flag on the cell
    LongPress,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureClassifier {
    long_press: Duration,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS)
    }
}

impl GestureClassifier {
    pub const fn new(long_press: Duration) -> Self {
        Self { long_press }
    }

    pub const fn long_press(&self) -> Duration {
        self.long_press
    }

    /// Presses held at least the long-press threshold flag, shorter ones open.
    pub fn classify(&self, held: Duration) -> Gesture {
        if held >= self.long_press {
            Gesture::LongPress
        } else {
            Gesture::Tap
        }
    }
}

/// Follows one press at a time from pointer-down to pointer-up.
#[derive(Clone, Debug, Default)]
pub struct PressTracker {
    classifier: GestureClassifier,
    pressed: Option<(Coord2, Instant)>,
}

impl PressTracker {
    pub fn new(classifier: GestureClassifier) -> Self {
        Self {
            classifier,
            pressed: None,
        }
    }

    pub fn press(&mut self, coords: Coord2) {
        self.press_at(coords, Instant::now());
    }

    pub fn release(&mut self, coords: Coord2) -> Option<Gesture> {
        self.release_at(coords, Instant::now())
    }

    pub fn press_at(&mut self, coords: Coord2, at: Instant) {
        self.pressed = Some((coords, at));
    }

    /// Classifies the press, or cancels it if the pointer left the cell.
    pub fn release_at(&mut self, coords: Coord2, at: Instant) -> Option<Gesture> {
        match self.pressed.take() {
            Some((pressed, since)) if pressed == coords => {
                let gesture = self.classifier.classify(at.saturating_duration_since(since));
                log::trace!("Press on {:?} classified as {:?}", coords, gesture);
                Some(gesture)
            }
            Some((pressed, _)) => {
                log::trace!("Press on {:?} released over {:?}, cancelled", pressed, coords);
                None
            }
            None => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let classifier = GestureClassifier::default();

        assert_eq!(classifier.classify(Duration::from_millis(1999)), Gesture::Tap);
        assert_eq!(classifier.classify(Duration::from_secs(2)), Gesture::LongPress);
    }

    #[test]
    fn tracker_classifies_press_on_same_cell() {
        let mut tracker = PressTracker::new(GestureClassifier::new(Duration::from_millis(500)));
        let start = Instant::now();

        tracker.press_at((1, 1), start);
        assert_eq!(
            tracker.release_at((1, 1), start + Duration::from_millis(100)),
            Some(Gesture::Tap)
        );

        tracker.press_at((1, 1), start);
        assert_eq!(
            tracker.release_at((1, 1), start + Duration::from_millis(700)),
            Some(Gesture::LongPress)
        );
    }

    #[test]
    fn quick_release_on_wall_clock_is_a_tap() {
        let mut tracker = PressTracker::default();

        tracker.press((2, 3));
        assert_eq!(tracker.release((2, 3)), Some(Gesture::Tap));
        assert_eq!(tracker.release((2, 3)), None);
    }

    #[test]
    fn zero_threshold_makes_every_press_long() {
        let mut tracker = PressTracker::new(GestureClassifier::new(Duration::ZERO));

        tracker.press((0, 0));
        assert_eq!(tracker.release((0, 0)), Some(Gesture::LongPress));
    }

    #[test]
    fn cancelled_press_yields_nothing() {
        let mut tracker = PressTracker::default();
        let start = Instant::now();

        tracker.press_at((4, 4), start);
        tracker.cancel();
        assert_eq!(tracker.release_at((4, 4), start + DEFAULT_LONG_PRESS), None);
    }

    #[test]
    fn moving_off_the_cell_cancels() {
        let mut tracker = PressTracker::default();
        let start = Instant::now();

        tracker.press_at((0, 0), start);
        assert_eq!(tracker.release_at((0, 1), start), None);
        assert_eq!(tracker.release_at((0, 0), start), None);
    }
}
