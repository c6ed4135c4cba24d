use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::Variant;
use crate::components::animated_section::AnimatedSection;
use crate::config;
use crate::data::FEATURES;

/// Index of the card highlighted after `current`, wrapping around.
pub fn next_highlight(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let active = use_state(|| 0usize);
    let paused = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |&paused| {
                let interval = (!paused).then(|| {
                    let mut current = *active;
                    Interval::new(config::FEATURE_ROTATE_MS, move || {
                        current = next_highlight(current, FEATURES.len());
                        active.set(current);
                    })
                });
                move || drop(interval)
            },
            *paused,
        );
    }

    html! {
        <section class="features">
            <AnimatedSection variant={Variant::FadeUp}>
                <h2>{"Everything you need to see a doctor"}</h2>
                <p class="section-subtitle">{"From the first search to the follow-up reminder."}</p>
            </AnimatedSection>
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(i, feature)| {
                    let onmouseenter = {
                        let active = active.clone();
                        let paused = paused.clone();
                        Callback::from(move |_: MouseEvent| {
                            active.set(i);
                            paused.set(true);
                        })
                    };
                    let onmouseleave = {
                        let paused = paused.clone();
                        Callback::from(move |_: MouseEvent| paused.set(false))
                    };
                    html! {
                        <AnimatedSection
                            variant={Variant::named(feature.animation)}
                            delay={0.08 * i as f64}
                        >
                            <div
                                class={classes!("feature-card", (*active == i).then(|| "active"))}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </AnimatedSection>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        assert_eq!(next_highlight(0, 3), 1);
        assert_eq!(next_highlight(2, 3), 0);
        assert_eq!(next_highlight(5, 0), 0);
    }

    #[test]
    fn every_feature_animation_resolves() {
        for feature in FEATURES {
            assert!(feature.animation.parse::<Variant>().is_ok(), "{}", feature.animation);
        }
    }
}
