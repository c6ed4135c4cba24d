//! Transition variants, spring timing and the reveal state machine behind
//! scroll-triggered sections.
//!
//! Everything here is plain data so the timing maths and visibility rules can
//! be tested without a browser. `components::animated_section` wires it to an
//! `IntersectionObserver`.

use std::f64::consts::PI;
use std::str::FromStr;

use log::warn;

use crate::error::UiError;

const DEFAULT_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// A named hidden/visible pose pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    FadeUp,
    SlideLeft,
    SlideRight,
    Scale,
    FadeIn,
    /// Renders children as-is. Unknown names land here.
    Still,
}

impl FromStr for Variant {
    type Err = UiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fadeUp" => Ok(Variant::FadeUp),
            "slideLeft" => Ok(Variant::SlideLeft),
            "slideRight" => Ok(Variant::SlideRight),
            "scale" => Ok(Variant::Scale),
            "fadeIn" => Ok(Variant::FadeIn),
            other => Err(UiError::UnknownVariant(other.to_string())),
        }
    }
}

impl Variant {
    /// Resolves a variant key, falling back to `Still` for typos.
    pub fn named(name: &str) -> Variant {
        name.parse().unwrap_or_else(|err: UiError| {
            warn!("{}, rendering without transition", err);
            Variant::Still
        })
    }

    fn hidden(self) -> Pose {
        match self {
            Variant::FadeUp => Pose { opacity: 0.0, transform: "translateY(40px)" },
            Variant::SlideLeft => Pose { opacity: 0.0, transform: "translateX(-60px)" },
            Variant::SlideRight => Pose { opacity: 0.0, transform: "translateX(60px)" },
            Variant::Scale => Pose { opacity: 0.0, transform: "scale(0.85)" },
            Variant::FadeIn => Pose { opacity: 0.0, transform: "none" },
            Variant::Still => Pose::REST,
        }
    }

    fn visible(self) -> Pose {
        Pose::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    opacity: f64,
    transform: &'static str,
}

impl Pose {
    const REST: Pose = Pose { opacity: 1.0, transform: "none" };
}

/// Damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub damping: f64,
    pub stiffness: f64,
}

impl Spring {
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self { damping, stiffness }
    }

    fn stiffness(&self) -> f64 {
        self.stiffness.max(1.0)
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping.max(0.0) / (2.0 * self.stiffness().sqrt())
    }

    /// Time for the envelope to fall within ~2% of rest.
    pub fn settle_secs(&self) -> f64 {
        let zeta = self.damping_ratio().max(0.05);
        let omega = self.stiffness().sqrt();
        (4.0 / (zeta * omega)).clamp(0.2, 2.0)
    }

    /// Fraction of the travel the spring overshoots its target by.
    pub fn overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            return 0.0;
        }
        (-zeta * PI / (1.0 - zeta * zeta).sqrt()).exp()
    }

    pub fn easing(&self) -> String {
        format!("cubic-bezier(0.34, {:.3}, 0.64, 1)", 1.0 + self.overshoot())
    }
}

/// Timing and variant of one animated section.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    pub variant: Variant,
    pub delay: f64,
    pub duration: f64,
    pub spring: Option<Spring>,
    pub stagger: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            variant: Variant::FadeUp,
            delay: 0.0,
            duration: 0.6,
            spring: None,
            stagger: 0.0,
        }
    }
}

impl Motion {
    pub fn duration_secs(&self) -> f64 {
        match self.spring {
            Some(spring) => spring.settle_secs(),
            None => self.duration.max(0.0),
        }
    }

    pub fn easing(&self) -> String {
        match self.spring {
            Some(spring) => spring.easing(),
            None => DEFAULT_EASING.to_string(),
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay.max(0.0) + self.stagger.max(0.0) * index as f64
    }

    pub fn staggers(&self) -> bool {
        self.stagger > 0.0
    }

    /// Inline style for the element at `index` in the given state.
    pub fn style(&self, visible: bool, index: usize) -> String {
        if self.variant == Variant::Still {
            return String::new();
        }
        let pose = if visible {
            self.variant.visible()
        } else {
            self.variant.hidden()
        };
        let duration = self.duration_secs();
        let easing = self.easing();
        let delay = self.delay_for(index);
        format!(
            "opacity: {}; transform: {}; transition: opacity {:.2}s {} {:.2}s, transform {:.2}s {} {:.2}s; will-change: opacity, transform;",
            pose.opacity, pose.transform, duration, easing, delay, duration, easing, delay
        )
    }
}

/// Whether an intersection report counts as "in view" for `threshold`.
pub fn in_view(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold.clamp(0.0, 1.0)
}

/// Hidden/visible state of one section.
///
/// `observe` returns the new visibility only when it actually changes. A
/// trigger-once reveal settles on its first entry and ignores everything after.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    once: bool,
    visible: bool,
    settled: bool,
}

impl Reveal {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
            settled: false,
        }
    }

    pub fn observe(&mut self, in_view: bool) -> Option<bool> {
        if self.settled || in_view == self.visible {
            return None;
        }
        self.visible = in_view;
        if in_view && self.once {
            self.settled = true;
        }
        Some(in_view)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_variant_keys() {
        assert_eq!("fadeUp".parse::<Variant>(), Ok(Variant::FadeUp));
        assert_eq!("slideLeft".parse::<Variant>(), Ok(Variant::SlideLeft));
        assert_eq!("slideRight".parse::<Variant>(), Ok(Variant::SlideRight));
        assert_eq!("scale".parse::<Variant>(), Ok(Variant::Scale));
        assert_eq!("fadeIn".parse::<Variant>(), Ok(Variant::FadeIn));
    }

    #[test]
    fn unknown_variant_falls_back_to_still() {
        assert_eq!(
            "bounce".parse::<Variant>(),
            Err(UiError::UnknownVariant("bounce".into()))
        );
        assert_eq!(Variant::named("FadeUp"), Variant::Still);
        let motion = Motion {
            variant: Variant::named("nope"),
            ..Motion::default()
        };
        assert!(motion.style(false, 0).is_empty());
    }

    #[test]
    fn hidden_and_visible_styles_differ() {
        let motion = Motion::default();
        let hidden = motion.style(false, 0);
        let shown = motion.style(true, 0);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(40px)"));
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
    }

    #[test]
    fn stagger_offsets_each_child() {
        let motion = Motion {
            delay: 0.2,
            stagger: 0.1,
            ..Motion::default()
        };
        assert!(motion.staggers());
        assert!((motion.delay_for(0) - 0.2).abs() < 1e-9);
        assert!((motion.delay_for(3) - 0.5).abs() < 1e-9);
        assert!(motion.style(true, 3).contains(" 0.50s,"));
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot() {
        let spring = Spring::new(20.0, 100.0);
        assert!((spring.damping_ratio() - 1.0).abs() < 1e-9);
        assert_eq!(spring.overshoot(), 0.0);
        assert!((spring.settle_secs() - 0.4).abs() < 1e-9);
        assert_eq!(spring.easing(), "cubic-bezier(0.34, 1.000, 0.64, 1)");
    }

    #[test]
    fn underdamped_spring_overshoots_and_replaces_duration() {
        let spring = Spring::new(10.0, 100.0);
        let overshoot = spring.overshoot();
        assert!(overshoot > 0.15 && overshoot < 0.18, "{}", overshoot);

        let motion = Motion {
            duration: 5.0,
            spring: Some(spring),
            ..Motion::default()
        };
        assert!((motion.duration_secs() - 0.8).abs() < 1e-9);
        assert!(motion.easing().starts_with("cubic-bezier(0.34, 1.16"));
    }

    #[test]
    fn settle_time_is_clamped() {
        assert_eq!(Spring::new(0.0, 100.0).settle_secs(), 2.0);
        assert_eq!(Spring::new(400.0, 400.0).settle_secs(), 0.2);
    }

    #[test]
    fn in_view_respects_threshold() {
        assert!(in_view(true, 0.3, 0.25));
        assert!(!in_view(true, 0.2, 0.25));
        assert!(!in_view(false, 1.0, 0.0));
        assert!(in_view(true, 0.0, 0.0));
    }

    #[test]
    fn once_reveal_never_reverts() {
        let mut reveal = Reveal::new(true);
        assert_eq!(reveal.observe(false), None);
        assert_eq!(reveal.observe(true), Some(true));
        assert!(reveal.is_settled());
        assert_eq!(reveal.observe(false), None);
        assert_eq!(reveal.observe(true), None);
        assert!(reveal.is_visible());
    }

    #[test]
    fn repeating_reveal_follows_every_crossing() {
        let mut reveal = Reveal::new(false);
        assert_eq!(reveal.observe(true), Some(true));
        assert_eq!(reveal.observe(true), None);
        assert_eq!(reveal.observe(false), Some(false));
        assert_eq!(reveal.observe(true), Some(true));
        assert!(!reveal.is_settled());
    }
}
