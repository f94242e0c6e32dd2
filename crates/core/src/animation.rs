//! Entrance animation timing. Renderers sample these with the time since a row first appeared.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceEffect {
    FadeInUp,
    SlideInUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    Entering,
    Settling,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub effect: EntranceEffect,
    pub duration: Duration,
}

pub const TASK_ROW_ENTRANCE: Entrance = Entrance::new(EntranceEffect::FadeInUp, 800);
pub const INPUT_ROW_ENTRANCE: Entrance = Entrance::new(EntranceEffect::SlideInUp, 1000);

const ENTERING_UNTIL: f32 = 0.4;

impl Entrance {
    pub const fn new(effect: EntranceEffect, millis: u64) -> Self {
        Self {
            effect,
            duration: Duration::from_millis(millis),
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Cubic ease-out of [`Entrance::progress`].
    pub fn eased(&self, elapsed: Duration) -> f32 {
        let inverse = 1.0 - self.progress(elapsed);
        1.0 - inverse * inverse * inverse
    }

    pub fn phase(&self, elapsed: Duration) -> EntrancePhase {
        let eased = self.eased(elapsed);
        if eased >= 1.0 {
            EntrancePhase::Settled
        } else if eased < ENTERING_UNTIL {
            EntrancePhase::Entering
        } else {
            EntrancePhase::Settling
        }
    }

    /// Remaining slide distance in whole units for `distance` total travel.
    pub fn offset_rows(&self, elapsed: Duration, distance: u16) -> u16 {
        let remaining = (1.0 - self.eased(elapsed)) * f32::from(distance);
        remaining.ceil().clamp(0.0, f32::from(distance)) as u16
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn progress_is_clamped() {
        let entrance = TASK_ROW_ENTRANCE;
        assert_eq!(entrance.progress(Duration::ZERO), 0.0);
        assert_eq!(entrance.progress(Duration::from_millis(400)), 0.5);
        assert_eq!(entrance.progress(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn zero_duration_is_settled_immediately() {
        let entrance = Entrance::new(EntranceEffect::FadeInUp, 0);
        assert_eq!(entrance.phase(Duration::ZERO), EntrancePhase::Settled);
    }

    #[test]
    fn phases_advance_over_time() {
        let entrance = TASK_ROW_ENTRANCE;
        assert_eq!(entrance.phase(Duration::ZERO), EntrancePhase::Entering);
        assert_eq!(
            entrance.phase(Duration::from_millis(400)),
            EntrancePhase::Settling
        );
        assert_eq!(
            entrance.phase(Duration::from_millis(800)),
            EntrancePhase::Settled
        );
    }

    #[test]
    fn slide_offset_shrinks_to_zero() {
        let entrance = INPUT_ROW_ENTRANCE;
        assert_eq!(entrance.offset_rows(Duration::ZERO, 3), 3);
        assert!(entrance.offset_rows(Duration::from_millis(500), 3) < 3);
        assert_eq!(entrance.offset_rows(Duration::from_millis(1000), 3), 0);
        assert!(entrance.is_finished(Duration::from_millis(1000)));
    }
}
