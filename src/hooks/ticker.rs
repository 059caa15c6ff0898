use dioxus::prelude::*;

use crate::clock::scheduler::{TimerHandle, TimerPlan, TimerSlot};

#[cfg(feature = "web")]
pub type PlatformTimer = gloo_timers::callback::Interval;

#[cfg(feature = "web")]
impl TimerHandle for gloo_timers::callback::Interval {
    fn cancel(self) {
        drop(gloo_timers::callback::Interval::cancel(self));
    }
}

/// Renderers without a browser event loop draw one frame per render and never tick.
#[cfg(not(feature = "web"))]
#[derive(Debug)]
pub struct StaticFrame;

#[cfg(not(feature = "web"))]
pub type PlatformTimer = StaticFrame;

#[cfg(not(feature = "web"))]
impl TimerHandle for StaticFrame {
    fn cancel(self) {}
}

fn start_timer(plan: TimerPlan, on_tick: impl FnMut() + 'static) -> PlatformTimer {
    #[cfg(feature = "web")]
    {
        gloo_timers::callback::Interval::new(plan.cadence_ms, on_tick)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (plan, on_tick);
        StaticFrame
    }
}

/// One periodic timer per component; installing a new one tears down the old one first.
#[derive(Clone, Copy, PartialEq)]
pub struct Ticker {
    slot: Signal<TimerSlot<PlatformTimer>>,
    generation: CopyValue<u64>,
}

impl Ticker {
    pub fn install(mut self, plan: Option<TimerPlan>, on_tick: impl FnMut() + 'static) {
        self.slot
            .write()
            .replace_with(plan, |plan| start_timer(plan, on_tick));
    }

    /// Ticks every `cadence_ms`, or stops ticking when `None`.
    pub fn every(mut self, cadence_ms: Option<u32>, on_tick: impl FnMut() + 'static) {
        let plan = cadence_ms.map(|cadence_ms| {
            *self.generation.write() += 1;
            TimerPlan {
                cadence_ms: cadence_ms.max(1),
                generation: self.generation.cloned(),
            }
        });
        self.install(plan, on_tick);
    }
}

pub fn use_ticker() -> Ticker {
    let slot = use_signal(TimerSlot::<PlatformTimer>::default);
    let generation = use_hook(|| CopyValue::new(0_u64));

    // teardown on unmount
    use_drop(move || {
        let mut slot = slot;
        let timers = slot.try_write();
        if let Ok(mut timers) = timers {
            timers.clear();
        }
    });

    Ticker { slot, generation }
}
