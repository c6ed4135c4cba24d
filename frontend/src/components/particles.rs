use rand::seq::SliceRandom;
use rand::Rng;
use yew::prelude::*;

const PALETTE: &[&str] = &["particle-sky", "particle-teal", "particle-violet", "particle-white"];

/// One decorative dot. Positions are viewport percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..8.0),
            duration: rng.gen_range(10.0..30.0),
            delay: rng.gen_range(0.0..5.0),
            opacity: rng.gen_range(0.1..0.6),
            color: PALETTE.choose(rng).copied().unwrap_or(PALETTE[0]),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.x, self.y, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}

pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(&mut *rng)).collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub count: usize,
}

/// Background of floating dots, rolled once when the field mounts.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let particles = use_state(|| generate(props.count, &mut rand::thread_rng()));

    html! {
        <div class="particle-field" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <span class={classes!("particle", p.color)} style={p.style()}></span>
            }) }
            <style>
                {r#"
                    .particle-field {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        border-radius: 50%;
                        animation-name: particleFloat;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                        animation-direction: alternate;
                    }
                    .particle-sky { background: #38bdf8; }
                    .particle-teal { background: #2dd4bf; }
                    .particle-violet { background: #a78bfa; }
                    .particle-white { background: #ffffff; }
                    @keyframes particleFloat {
                        0% { transform: translate(0, 0); }
                        50% { transform: translate(12px, -30px); }
                        100% { transform: translate(-8px, -60px); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(200, &mut rng);
        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((2.0..8.0).contains(&p.size));
            assert!((10.0..30.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((0.1..0.6).contains(&p.opacity));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = generate(10, &mut StdRng::seed_from_u64(42));
        let b = generate(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_field() {
        assert!(generate(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn style_places_particle() {
        let p = Particle {
            x: 12.5,
            y: 40.0,
            size: 4.0,
            duration: 20.0,
            delay: 1.5,
            opacity: 0.3,
            color: PALETTE[0],
        };
        assert_eq!(
            p.style(),
            "left: 12.50%; top: 40.00%; width: 4.0px; height: 4.0px; opacity: 0.30; animation-duration: 20.0s; animation-delay: 1.5s;"
        );
    }
}
