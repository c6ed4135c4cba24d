use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::Variant;
use crate::components::animated_section::AnimatedSection;
use crate::components::doctor_card::DoctorCard;
use crate::data::{self, DOCTORS};
use crate::pages::home::use_doctor_actions;
use crate::search::{filter_doctors, DoctorSearchQuery};
use crate::Route;

fn describe(query: &DoctorSearchQuery) -> String {
    let mut parts = Vec::new();
    if !query.q.trim().is_empty() {
        parts.push(format!("\"{}\"", query.q.trim()));
    }
    if let Some(specialty) = &query.specialty {
        parts.push(data::specialty_label(specialty).unwrap_or(specialty.as_str()).to_string());
    }
    if let Some(city) = &query.city {
        parts.push(format!("in {}", city));
    }
    if parts.is_empty() {
        "All doctors".to_string()
    } else {
        parts.join(" ")
    }
}

#[function_component(Doctors)]
pub fn doctors() -> Html {
    let location = use_location().unwrap();
    let query = location.query::<DoctorSearchQuery>().unwrap_or_default();
    let (liked, on_like, on_book) = use_doctor_actions();

    let results = filter_doctors(DOCTORS, &query);

    html! {
        <div class="results-page">
            <AnimatedSection variant={Variant::FadeIn}>
                <h1>{describe(&query)}</h1>
                <p class="section-subtitle">
                    { match results.len() {
                        1 => "1 doctor found".to_string(),
                        n => format!("{} doctors found", n),
                    } }
                </p>
            </AnimatedSection>
            {
                if results.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No doctors match your search yet. Try another name, specialty or city."}</p>
                            <Link<Route> to={Route::Home} classes="forward-link">
                                <button class="hero-cta">{"Back to home"}</button>
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <AnimatedSection class="doctor-grid" variant={Variant::FadeUp} stagger={0.08}>
                            { for results.iter().map(|doctor| html! {
                                <DoctorCard
                                    key={doctor.id}
                                    doctor={**doctor}
                                    liked={liked.contains(&doctor.id)}
                                    on_like={on_like.clone()}
                                    on_book={on_book.clone()}
                                />
                            }) }
                        </AnimatedSection>
                    }
                }
            }
            <style>
                {r#"
                    .results-page {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                    }
                    .empty-state {
                        text-align: center;
                        padding: 4rem 0;
                        color: #64748b;
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
    fn describes_active_filters() {
        assert_eq!(describe(&DoctorSearchQuery::default()), "All doctors");
        let query = DoctorSearchQuery {
            q: " skin ".into(),
            city: Some("Pune".into()),
            specialty: Some("dermatology".into()),
        };
        assert_eq!(describe(&query), "\"skin\" Dermatology in Pune");
    }
}
