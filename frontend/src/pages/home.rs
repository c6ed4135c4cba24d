use std::collections::HashSet;
use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{Spring, Variant};
use crate::components::animated_section::AnimatedSection;
use crate::components::doctor_card::DoctorCard;
use crate::components::toast::{use_toast, Toaster};
use crate::data::{DOCTORS, SPECIALTIES, STEPS};
use crate::models::Doctor;
use crate::pages::features::Features;
use crate::pages::hero::Hero;
use crate::search::DoctorSearchQuery;
use crate::Route;

const FEATURED: usize = 6;

/// Doctors the visitor saved during this visit. Kept in a reducer so quick
/// successive likes each apply to the latest set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LikedDoctors {
    ids: HashSet<u32>,
}

impl LikedDoctors {
    pub fn contains(&self, id: &u32) -> bool {
        self.ids.contains(id)
    }
}

impl Reducible for LikedDoctors {
    type Action = (u32, bool);

    fn reduce(self: Rc<Self>, (id, liked): Self::Action) -> Rc<Self> {
        if self.ids.contains(&id) == liked {
            return self;
        }
        let mut next = (*self).clone();
        if liked {
            next.ids.insert(id);
        } else {
            next.ids.remove(&id);
        }
        Rc::new(next)
    }
}

/// Like/book handlers shared by every page that lists doctors. The liked set
/// belongs to the page; cards only report changes.
#[hook]
pub fn use_doctor_actions() -> (UseReducerHandle<LikedDoctors>, Callback<(u32, bool)>, Callback<Doctor>) {
    let liked = use_reducer(LikedDoctors::default);
    let toaster = use_toast();
    let navigator = use_navigator().unwrap();

    let on_like = {
        let liked = liked.dispatcher();
        let toaster = toaster.clone();
        Callback::from(move |(id, is_liked): (u32, bool)| {
            if is_liked {
                toaster.success("Saved to your favourites");
            } else {
                toaster.info("Removed from your favourites");
            }
            liked.dispatch((id, is_liked));
        })
    };

    let on_book = book_callback(toaster, navigator);

    (liked, on_like, on_book)
}

fn book_callback(toaster: Toaster, navigator: Navigator) -> Callback<Doctor> {
    Callback::from(move |doctor: Doctor| {
        info!("Booking requested for doctor {}", doctor.id);
        toaster.info(format!("Opening booking for {}...", doctor.name));
        navigator.push(&Route::Booking { id: doctor.id });
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let (liked, on_like, on_book) = use_doctor_actions();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />

            <Features />

            <section class="doctor-gallery">
                <AnimatedSection variant={Variant::SlideLeft}>
                    <h2>{"Meet our top doctors"}</h2>
                    <p class="section-subtitle">{"Highly rated specialists with open slots this week."}</p>
                </AnimatedSection>
                <AnimatedSection
                    class="doctor-grid"
                    variant={Variant::FadeUp}
                    stagger={0.1}
                    spring={Some(Spring::new(22.0, 160.0))}
                >
                    { for DOCTORS.iter().take(FEATURED).map(|doctor| html! {
                        <DoctorCard
                            key={doctor.id}
                            doctor={*doctor}
                            liked={liked.contains(&doctor.id)}
                            on_like={on_like.clone()}
                            on_book={on_book.clone()}
                        />
                    }) }
                </AnimatedSection>
                <div class="section-intro">
                    <Link<Route> to={Route::Doctors} classes="forward-link">
                        <button class="secondary-cta">{"See all doctors"}</button>
                    </Link<Route>>
                </div>
            </section>

            <section class="specialty-strip">
                <AnimatedSection variant={Variant::FadeIn}>
                    <h2>{"Browse by specialty"}</h2>
                </AnimatedSection>
                <AnimatedSection class="specialty-grid" variant={Variant::Scale} stagger={0.06}>
                    { for SPECIALTIES.iter().map(|s| html! {
                        <Link<Route, DoctorSearchQuery>
                            to={Route::Doctors}
                            query={Some(DoctorSearchQuery::for_specialty(s.key))}
                            classes="specialty-tile"
                        >
                            <span class="specialty-icon">{s.icon}</span>
                            <span>{s.label}</span>
                        </Link<Route, DoctorSearchQuery>>
                    }) }
                </AnimatedSection>
            </section>

            <section class="how-it-works">
                <AnimatedSection variant={Variant::FadeUp}>
                    <h2>{"How it works"}</h2>
                </AnimatedSection>
                <AnimatedSection class="steps-grid" variant={Variant::SlideRight} stagger={0.15} once={false}>
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </AnimatedSection>
            </section>

            <footer class="footer-cta">
                <AnimatedSection variant={Variant::Scale} spring={Some(Spring::new(12.0, 140.0))}>
                    <div class="footer-content">
                        <h2>{"Your next appointment is a few taps away"}</h2>
                        <p class="subtitle">{"Join thousands of patients who book smarter."}</p>
                        <Link<Route> to={Route::Doctors} classes="forward-link">
                            <button class="hero-cta">{"Find a doctor"}</button>
                        </Link<Route>>
                        <p class="disclaimer">{"Free for patients. No sign-up needed to browse."}</p>
                    </div>
                </AnimatedSection>
            </footer>
            <style>
                {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #f8fafc;
                    }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        background: linear-gradient(135deg, #0c4a6e 0%, #0e7490 55%, #14b8a6 100%);
                        color: #ffffff;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 960px;
                        width: 100%;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.25rem;
                        line-height: 1.1;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 2.5rem;
                    }
                    .search-box {
                        display: flex;
                        gap: 0.75rem;
                        background: #ffffff;
                        padding: 0.75rem;
                        border-radius: 16px;
                        box-shadow: 0 20px 40px rgba(2, 6, 23, 0.25);
                    }
                    .search-box input {
                        flex: 2;
                        border: none;
                        font-size: 1rem;
                        padding: 0.75rem;
                        outline: none;
                    }
                    .search-box select {
                        flex: 1;
                        border: 1px solid #e2e8f0;
                        border-radius: 10px;
                        padding: 0.5rem;
                    }
                    .chip-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.25rem;
                    }
                    .chip {
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        background: rgba(255, 255, 255, 0.1);
                        color: #ffffff;
                        border-radius: 999px;
                        padding: 0.4rem 0.9rem;
                        cursor: pointer;
                    }
                    .chip.selected {
                        background: #ffffff;
                        color: #0e7490;
                    }
                    .stats-row {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                        margin-top: 3.5rem;
                    }
                    .stat-tile {
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .stat-label {
                        color: rgba(255, 255, 255, 0.75);
                    }
                    .features, .doctor-gallery, .specialty-strip, .how-it-works {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card {
                        background: #ffffff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: left;
                        height: 100%;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease, transform 0.3s ease;
                    }
                    .feature-card.active {
                        border-color: #0ea5e9;
                        box-shadow: 0 16px 32px rgba(14, 165, 233, 0.15);
                        transform: translateY(-4px);
                    }
                    .feature-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .specialty-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .specialty-tile {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1.5rem 1rem;
                        background: #ffffff;
                        border-radius: 16px;
                        color: inherit;
                        text-decoration: none;
                        border: 1px solid #e2e8f0;
                    }
                    .specialty-icon { font-size: 2rem; }
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 2.5rem;
                    }
                    .step-number {
                        display: inline-flex;
                        width: 44px;
                        height: 44px;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: #0ea5e9;
                        color: #ffffff;
                        font-weight: 700;
                    }
                    .footer-cta {
                        padding: 6rem 2rem;
                        background: #0c4a6e;
                        color: #ffffff;
                        text-align: center;
                    }
                    .footer-cta .disclaimer {
                        margin-top: 1.5rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.2rem; }
                        .search-box { flex-direction: column; }
                        .stats-row { grid-template-columns: repeat(2, 1fr); }
                        .steps-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_likes_both_apply() {
        let liked = Rc::new(LikedDoctors::default());
        let liked = liked.reduce((1, true)).reduce((2, true));
        assert!(liked.contains(&1));
        assert!(liked.contains(&2));

        let liked = liked.reduce((1, false));
        assert!(!liked.contains(&1));
        assert!(liked.contains(&2));
    }

    #[test]
    fn repeated_like_keeps_the_same_set() {
        let liked = Rc::new(LikedDoctors::default()).reduce((4, true));
        let again = liked.clone().reduce((4, true));
        assert!(Rc::ptr_eq(&liked, &again));
    }
}
