use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::Utc;
use clap::ValueEnum;

use crate::model::TaskId;

/// Source of wall-clock milliseconds used for clock-derived ids.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Millisecond timestamps, bumped past the last issued id on collision
    #[default]
    Clock,
    /// Plain incrementing integers
    Counter,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Clock => "clock",
            IdStrategy::Counter => "counter",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" | "time" => Ok(IdStrategy::Clock),
            "counter" | "seq" => Ok(IdStrategy::Counter),
            other => Err(anyhow!(
                "Unknown id strategy '{}': expected clock|counter",
                other
            )),
        }
    }
}

/// Hands out task ids that are strictly greater than every id issued or observed so far.
pub struct IdAllocator {
    strategy: IdStrategy,
    clock: Box<dyn Clock>,
    last: TaskId,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_clock(strategy, SystemClock)
    }

    pub fn with_clock(strategy: IdStrategy, clock: impl Clock + 'static) -> Self {
        Self {
            strategy,
            clock: Box::new(clock),
            last: 0,
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Record an id that already exists so it is never issued again.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }

    /// Issue the next id, or `None` once the id space above `last` is used up.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let floor = self.last.checked_add(1)?;
        let id = match self.strategy {
            IdStrategy::Clock => self.clock.now_millis().max(floor),
            IdStrategy::Counter => floor,
        };
        self.last = id;
        Some(id)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("strategy", &self.strategy)
            .field("last", &self.last)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Clock pinned to a value the test controls.
    #[derive(Clone, Default)]
    pub(crate) struct ManualClock(pub(crate) Rc<Cell<u64>>);

    impl ManualClock {
        pub(crate) fn at(millis: u64) -> Self {
            Self(Rc::new(Cell::new(millis)))
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            self.0.get()
        }
    }

    #[test]
    fn clock_ids_follow_the_clock() {
        let clock = ManualClock::at(1_000);
        let mut ids = IdAllocator::with_clock(IdStrategy::Clock, clock.clone());

        assert_eq!(ids.next_id(), Some(1_000));
        clock.0.set(1_500);
        assert_eq!(ids.next_id(), Some(1_500));
    }

    #[test]
    fn clock_ids_never_repeat_within_a_tick() {
        let mut ids = IdAllocator::with_clock(IdStrategy::Clock, ManualClock::at(42));

        let issued: Vec<TaskId> = (0..4).filter_map(|_| ids.next_id()).collect();
        assert_eq!(issued, vec![42, 43, 44, 45]);
    }

    #[test]
    fn clock_running_backwards_still_moves_forward() {
        let clock = ManualClock::at(900);
        let mut ids = IdAllocator::with_clock(IdStrategy::Clock, clock.clone());
        assert_eq!(ids.next_id(), Some(900));

        clock.0.set(10);
        assert_eq!(ids.next_id(), Some(901));
    }

    #[test]
    fn observed_ids_raise_the_floor() {
        let mut ids = IdAllocator::with_clock(IdStrategy::Counter, ManualClock::at(0));
        ids.observe(5);
        ids.observe(3);

        assert_eq!(ids.next_id(), Some(6));
        assert_eq!(ids.next_id(), Some(7));
    }

    #[rstest]
    #[case(IdStrategy::Clock)]
    #[case(IdStrategy::Counter)]
    fn exhausted_id_space_issues_nothing(#[case] strategy: IdStrategy) {
        let mut ids = IdAllocator::with_clock(strategy, ManualClock::at(u64::MAX));
        ids.observe(u64::MAX - 1);

        assert_eq!(ids.next_id(), Some(u64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[rstest]
    #[case("clock", IdStrategy::Clock)]
    #[case("Counter", IdStrategy::Counter)]
    #[case("seq", IdStrategy::Counter)]
    fn parses_strategy_names(#[case] raw: &str, #[case] expected: IdStrategy) {
        assert_eq!(raw.parse::<IdStrategy>().expect("parse"), expected);
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = "uuid".parse::<IdStrategy>().unwrap_err();
        assert!(err.to_string().contains("expected clock|counter"));
    }
}
