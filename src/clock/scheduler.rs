//! Refresh cadence and displayed-instant state machine for the clock face.
//!
//! The scheduler never owns a timer itself. [`ClockScheduler::configure`] returns a
//! [`TimerPlan`] and the caller installs it into a [`TimerSlot`], which guarantees the
//! previous timer is torn down before the next one starts.

use chrono::{DateTime, Local, Utc};
use dioxus::logger::tracing::debug;

use super::angles::SecondHandBehavior;
use super::parse::{parse_time_value_at, TimeValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Shows a fixed instant.
    Paused { frozen: DateTime<Utc> },
    /// Samples the system clock on every tick.
    RealTime,
    /// Shows `start` advanced by the wall-clock time elapsed since `activated_at`.
    FromCustomStart {
        start: DateTime<Utc>,
        activated_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulerConfig {
    pub running: bool,
    pub value: Option<TimeValue>,
    pub behavior: SecondHandBehavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPlan {
    pub cadence_ms: u32,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockScheduler {
    config: Option<SchedulerConfig>,
    mode: ClockMode,
    generation: u64,
}

impl Default for ClockScheduler {
    fn default() -> Self {
        Self {
            config: None,
            mode: ClockMode::RealTime,
            generation: 0,
        }
    }
}

impl ClockScheduler {
    pub fn new(config: SchedulerConfig, now: DateTime<Utc>) -> Self {
        let mut scheduler = Self::default();
        scheduler.configure(config, now);
        scheduler
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Applies `config`. Any change starts a new timer generation; the returned plan is
    /// `None` when the clock is paused. Re-applying an identical config keeps the
    /// current mode, including a custom start's activation instant.
    pub fn configure(&mut self, config: SchedulerConfig, now: DateTime<Utc>) -> Option<TimerPlan> {
        if self.config.as_ref() == Some(&config) {
            return self.plan();
        }

        let parsed = parse_time_value_at(config.value.as_ref(), now.with_timezone(&Local));
        self.mode = match (config.running, parsed) {
            (false, Some(value)) => ClockMode::Paused { frozen: value },
            (false, None) => ClockMode::Paused { frozen: now },
            (true, Some(start)) => ClockMode::FromCustomStart {
                start,
                activated_at: now,
            },
            (true, None) => ClockMode::RealTime,
        };
        self.generation += 1;
        self.config = Some(config);

        let plan = self.plan();
        debug!(
            "[scheduler] generation {} -> {:?}, cadence {:?} ms",
            self.generation,
            self.mode,
            plan.map(|p| p.cadence_ms)
        );
        plan
    }

    pub fn plan(&self) -> Option<TimerPlan> {
        let config = self.config.as_ref()?;
        match self.mode {
            ClockMode::Paused { .. } => None,
            ClockMode::RealTime | ClockMode::FromCustomStart { .. } => Some(TimerPlan {
                cadence_ms: config.behavior.cadence_ms(),
                generation: self.generation,
            }),
        }
    }

    pub fn displayed_instant(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.mode {
            ClockMode::Paused { frozen } => frozen,
            ClockMode::RealTime => now,
            ClockMode::FromCustomStart {
                start,
                activated_at,
            } => start + (now - activated_at),
        }
    }
}

/// A cancellable periodic timer.
pub trait TimerHandle {
    fn cancel(self);
}

/// Holds at most one live timer.
#[derive(Debug)]
pub struct TimerSlot<H: TimerHandle> {
    active: Option<(u64, H)>,
}

impl<H: TimerHandle> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: TimerHandle> TimerSlot<H> {
    /// Cancels the current timer, then installs the one built by `start`, if any.
    pub fn replace_with(&mut self, plan: Option<TimerPlan>, start: impl FnOnce(TimerPlan) -> H) {
        self.clear();
        if let Some(plan) = plan {
            debug!(
                "[timer] arming generation {} every {} ms",
                plan.generation, plan.cadence_ms
            );
            self.active = Some((plan.generation, start(plan)));
        }
    }

    pub fn clear(&mut self) {
        if let Some((generation, handle)) = self.active.take() {
            debug!("[timer] tearing down generation {}", generation);
            handle.cancel();
        }
    }

    pub fn generation(&self) -> Option<u64> {
        self.active.as_ref().map(|(generation, _)| *generation)
    }

    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }
}

impl<H: TimerHandle> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl TimerHandle for FakeTimer {
        fn cancel(self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 34, 56).unwrap()
    }

    fn custom_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 5, 10, 0, 0).unwrap()
    }

    fn config(
        running: bool,
        value: Option<TimeValue>,
        behavior: SecondHandBehavior,
    ) -> SchedulerConfig {
        SchedulerConfig {
            running,
            value,
            behavior,
        }
    }

    #[test]
    fn cadence_follows_behavior() {
        for (behavior, cadence) in [
            (SecondHandBehavior::Smooth, 16),
            (SecondHandBehavior::TickHalf, 500),
            (SecondHandBehavior::TickHighFreq, 125),
            (SecondHandBehavior::Tick, 1_000),
        ] {
            let scheduler = ClockScheduler::new(config(true, None, behavior), t0());
            assert_eq!(scheduler.plan().map(|p| p.cadence_ms), Some(cadence));
        }
    }

    #[test]
    fn real_time_samples_now() {
        let scheduler = ClockScheduler::new(config(true, None, SecondHandBehavior::Tick), t0());
        assert_eq!(scheduler.mode(), ClockMode::RealTime);
        let later = t0() + Duration::seconds(90);
        assert_eq!(scheduler.displayed_instant(later), later);
    }

    #[test]
    fn unparsable_value_runs_in_real_time() {
        let value = Some(TimeValue::from("whenever"));
        let scheduler = ClockScheduler::new(config(true, value, SecondHandBehavior::Tick), t0());
        assert_eq!(scheduler.mode(), ClockMode::RealTime);
    }

    #[test]
    fn custom_start_advances_with_wall_clock() {
        let value = Some(TimeValue::from(custom_start()));
        let mut scheduler =
            ClockScheduler::new(config(true, value.clone(), SecondHandBehavior::Smooth), t0());
        assert_eq!(
            scheduler.displayed_instant(t0() + Duration::milliseconds(2_500)),
            custom_start() + Duration::milliseconds(2_500)
        );

        // the same value later on must not restart the elapsed time
        let plan = scheduler.configure(
            config(true, value, SecondHandBehavior::Smooth),
            t0() + Duration::seconds(10),
        );
        assert_eq!(plan.map(|p| p.generation), Some(1));
        assert_eq!(
            scheduler.displayed_instant(t0() + Duration::seconds(20)),
            custom_start() + Duration::seconds(20)
        );
    }

    #[test]
    fn pausing_a_custom_start_freezes_on_the_value() {
        let value = Some(TimeValue::from(custom_start()));
        let mut scheduler =
            ClockScheduler::new(config(true, value.clone(), SecondHandBehavior::Tick), t0());
        let plan = scheduler.configure(
            config(false, value, SecondHandBehavior::Tick),
            t0() + Duration::seconds(30),
        );
        assert_eq!(plan, None);
        for offset in [0, 1, 3_600] {
            assert_eq!(
                scheduler.displayed_instant(t0() + Duration::seconds(offset)),
                custom_start()
            );
        }
    }

    #[test]
    fn pausing_without_value_freezes_at_the_pause_instant() {
        let mut scheduler = ClockScheduler::new(config(true, None, SecondHandBehavior::Tick), t0());
        let paused_at = t0() + Duration::seconds(42);
        scheduler.configure(config(false, None, SecondHandBehavior::Tick), paused_at);
        assert_eq!(scheduler.mode(), ClockMode::Paused { frozen: paused_at });
        assert_eq!(scheduler.displayed_instant(paused_at + Duration::hours(1)), paused_at);
    }

    #[test]
    fn every_change_starts_a_new_generation() {
        let mut scheduler = ClockScheduler::new(config(true, None, SecondHandBehavior::Tick), t0());
        let first = scheduler.plan().unwrap();
        let second = scheduler
            .configure(config(true, None, SecondHandBehavior::Smooth), t0())
            .unwrap();
        assert_eq!(second.cadence_ms, 16);
        assert!(second.generation > first.generation);
    }

    #[test]
    fn slot_keeps_a_single_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let started = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        let mut scheduler = ClockScheduler::new(config(true, None, SecondHandBehavior::Tick), t0());

        let install = |slot: &mut TimerSlot<FakeTimer>, plan: Option<TimerPlan>| {
            slot.replace_with(plan, |_| {
                // the previous timer must already be gone
                assert_eq!(started.get(), cancelled.get());
                started.set(started.get() + 1);
                FakeTimer {
                    cancelled: cancelled.clone(),
                }
            });
        };

        install(&mut slot, scheduler.plan());
        assert_eq!(slot.generation(), Some(1));

        let plan = scheduler.configure(config(true, None, SecondHandBehavior::TickHalf), t0());
        install(&mut slot, plan);
        assert_eq!((started.get(), cancelled.get()), (2, 1));
        assert_eq!(slot.generation(), Some(2));

        let plan = scheduler.configure(config(false, None, SecondHandBehavior::TickHalf), t0());
        install(&mut slot, plan);
        assert!(!slot.is_armed());
        assert_eq!((started.get(), cancelled.get()), (2, 2));
    }

    #[test]
    fn dropping_the_slot_cancels_its_timer() {
        let cancelled = Rc::new(Cell::new(0));
        {
            let mut slot = TimerSlot::default();
            let plan = Some(TimerPlan {
                cadence_ms: 16,
                generation: 1,
            });
            slot.replace_with(plan, |_| FakeTimer {
                cancelled: cancelled.clone(),
            });
        }
        assert_eq!(cancelled.get(), 1);
    }
}
