use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::models::StatSpec;

/// A number counting up to a fixed ceiling. Never decreases, never overshoots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCounter {
    value: u32,
    target: u32,
    step: u32,
}

impl StatCounter {
    pub fn new(target: u32, step: u32) -> Self {
        Self {
            value: 0,
            target,
            step: step.max(1),
        }
    }

    /// Advances one tick. Returns `false` once the ceiling is reached.
    pub fn tick(&mut self) -> bool {
        self.value = self.value.saturating_add(self.step).min(self.target);
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// 50000 -> "50K", 2500 -> "2.5K", 500 -> "500".
pub fn compact(value: u32) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let thousands = value as f64 / 1_000.0;
    if value % 1_000 == 0 {
        format!("{}K", value / 1_000)
    } else {
        format!("{:.1}K", thousands)
    }
}

/// Counts from zero to `target` on a repeating timer owned by the calling
/// component. Reaching the ceiling re-runs the effect, whose cleanup drops
/// (cancels) the interval; unmounting does the same.
#[hook]
pub fn use_stat_counter(target: u32, step: u32) -> u32 {
    let value = use_state(|| 0u32);
    let done = *value >= target;

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, step, done)| {
                let interval = (!done).then(|| {
                    let mut counter = StatCounter::new(target, step);
                    Interval::new(config::COUNTER_TICK_MS, move || {
                        counter.tick();
                        value.set(counter.value());
                    })
                });
                move || drop(interval)
            },
            (target, step, done),
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub stat: StatSpec,
}

#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    let value = use_stat_counter(props.stat.target, props.stat.step);

    html! {
        <div class="stat-tile">
            <span class="stat-value">{format!("{}{}", compact(value), props.stat.suffix)}</span>
            <span class="stat-label">{props.stat.label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_ceiling_exactly_and_stays() {
        let mut counter = StatCounter::new(500, 10);
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 49);
        assert_eq!(counter.value(), 500);
        for _ in 0..100 {
            assert!(!counter.tick());
            assert_eq!(counter.value(), 500);
        }
    }

    #[test]
    fn step_that_does_not_divide_target_is_capped() {
        let mut counter = StatCounter::new(98, 5);
        let mut last = 0;
        for _ in 0..50 {
            counter.tick();
            assert!(counter.value() >= last);
            assert!(counter.value() <= 98);
            last = counter.value();
        }
        assert_eq!(counter.value(), 98);
    }

    #[test]
    fn zero_step_still_progresses() {
        let mut counter = StatCounter::new(3, 0);
        counter.tick();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut counter = StatCounter::new(0, 10);
        assert!(counter.is_done());
        assert!(!counter.tick());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn compact_formatting() {
        assert_eq!(compact(500), "500");
        assert_eq!(compact(50_000), "50K");
        assert_eq!(compact(2_500), "2.5K");
        assert_eq!(compact(0), "0");
    }
}
