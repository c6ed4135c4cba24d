use yew::prelude::*;

use crate::models::Doctor;

/// Card styles shared by every page that lists doctors. The hover overlay sits
/// under the like button and lets clicks through.
pub const CARD_STYLES: &str = r#"
    .doctor-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
        gap: 1.75rem;
        margin-bottom: 3rem;
    }
    .doctor-card {
        background: #ffffff;
        border-radius: 20px;
        overflow: hidden;
        text-align: left;
        box-shadow: 0 6px 18px rgba(15, 23, 42, 0.08);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .doctor-card.hovered {
        transform: translateY(-6px);
        box-shadow: 0 18px 36px rgba(15, 23, 42, 0.14);
    }
    .doctor-card.unavailable {
        filter: grayscale(0.6);
    }
    .doctor-photo {
        position: relative;
        height: 220px;
    }
    .doctor-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .like-button {
        position: absolute;
        z-index: 2;
        top: 0.75rem;
        right: 0.75rem;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.9);
        font-size: 1.2rem;
        cursor: pointer;
    }
    .like-button.liked {
        color: #e11d48;
    }
    .availability {
        position: absolute;
        left: 0.75rem;
        bottom: 0.75rem;
        padding: 0.25rem 0.75rem;
        border-radius: 999px;
        font-size: 0.8rem;
        background: #fee2e2;
        color: #b91c1c;
    }
    .availability.open {
        background: #dcfce7;
        color: #15803d;
    }
    .quick-stats {
        position: absolute;
        inset: 0;
        z-index: 1;
        pointer-events: none;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        align-items: center;
        text-align: center;
        background: rgba(12, 74, 110, 0.82);
        color: #ffffff;
        animation: fadeIn 0.25s ease-in-out;
    }
    .quick-stats span {
        display: block;
        font-size: 0.75rem;
        opacity: 0.8;
    }
    .doctor-body {
        padding: 1.25rem 1.5rem 1.5rem;
    }
    .specialization {
        color: #0e7490;
        font-weight: 600;
    }
    .star.full, .star.half { color: #f59e0b; }
    .star.half { opacity: 0.55; }
    .star.empty { color: #cbd5e1; }
    .rating-value { margin-left: 0.4rem; font-weight: 600; }
    .reviews { margin-left: 0.3rem; color: #64748b; font-size: 0.85rem; }
    .doctor-meta {
        list-style: none;
        padding: 0;
        margin: 1rem 0;
        color: #475569;
        line-height: 1.8;
    }
    .badges {
        display: flex;
        flex-wrap: wrap;
        gap: 0.4rem;
        margin-bottom: 1.25rem;
    }
    .badge {
        background: #e0f2fe;
        color: #0369a1;
        border-radius: 999px;
        padding: 0.2rem 0.7rem;
        font-size: 0.75rem;
    }
    .book-button {
        width: 100%;
        background: #0e7490;
        color: #ffffff;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five stars for a 0-5 rating: floor for full stars, a half star when the
/// remainder reaches 0.5.
pub fn stars(rating: f32) -> [Star; 5] {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let full = rating.floor() as usize;
    let half = full < 5 && rating - rating.floor() >= 0.5;
    let mut out = [Star::Empty; 5];
    for (i, star) in out.iter_mut().enumerate() {
        if i < full {
            *star = Star::Full;
        } else if i == full && half {
            *star = Star::Half;
        }
    }
    out
}

/// Hover and like state owned by one card. `liked` starts from the value the
/// parent passed at mount and diverges from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardState {
    pub liked: bool,
    pub hovered: bool,
}

impl CardState {
    pub fn new(liked: bool) -> Self {
        Self {
            liked,
            hovered: false,
        }
    }

    /// Flips `liked` and returns what to report to the parent, or `None` for an
    /// unavailable doctor.
    pub fn toggle_like(&mut self, doctor: &Doctor) -> Option<(u32, bool)> {
        if !doctor.available {
            return None;
        }
        self.liked = !self.liked;
        Some((doctor.id, self.liked))
    }

    pub fn book(&self, doctor: &Doctor) -> Option<Doctor> {
        doctor.available.then_some(*doctor)
    }
}

#[derive(Properties, PartialEq)]
pub struct DoctorCardProps {
    pub doctor: Doctor,
    #[prop_or_default]
    pub liked: bool,
    pub on_like: Callback<(u32, bool)>,
    pub on_book: Callback<Doctor>,
}

#[function_component(DoctorCard)]
pub fn doctor_card(props: &DoctorCardProps) -> Html {
    let state = use_state(|| CardState::new(props.liked));
    let doctor = props.doctor;

    let onmouseenter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(CardState { hovered: true, ..*state }))
    };
    let onmouseleave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(CardState { hovered: false, ..*state }))
    };

    let on_like_click = {
        let state = state.clone();
        let on_like = props.on_like.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *state;
            if let Some(change) = next.toggle_like(&doctor) {
                state.set(next);
                on_like.emit(change);
            }
        })
    };

    let on_book_click = {
        let state = state.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(doctor) = state.book(&doctor) {
                on_book.emit(doctor);
            }
        })
    };

    let card_class = classes!(
        "doctor-card",
        state.hovered.then(|| "hovered"),
        (!doctor.available).then(|| "unavailable"),
    );

    html! {
        <article class={card_class} {onmouseenter} {onmouseleave}>
            <div class="doctor-photo">
                <img src={doctor.image} alt={doctor.name} loading="lazy" />
                <button
                    class={classes!("like-button", state.liked.then(|| "liked"))}
                    aria-label="Save doctor"
                    disabled={!doctor.available}
                    onclick={on_like_click}
                >
                    { if state.liked { "♥" } else { "♡" } }
                </button>
                <span class={classes!("availability", doctor.available.then(|| "open"))}>
                    { if doctor.available { "Available" } else { "Unavailable" } }
                </span>
                {
                    if state.hovered {
                        if let Some(quick) = doctor.quick_stats {
                            html! {
                                <div class="quick-stats">
                                    <div><strong>{quick.patients}</strong><span>{"patients"}</span></div>
                                    <div><strong>{format!("{}%", quick.success_rate)}</strong><span>{"success"}</span></div>
                                    <div><strong>{quick.next_slot}</strong><span>{"next slot"}</span></div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="doctor-body">
                <h3>{doctor.name}</h3>
                <p class="specialization">{doctor.specialization}</p>
                <div class="rating">
                    { for stars(doctor.rating).iter().map(|star| match star {
                        Star::Full => html! { <span class="star full">{"★"}</span> },
                        Star::Half => html! { <span class="star half">{"★"}</span> },
                        Star::Empty => html! { <span class="star empty">{"☆"}</span> },
                    }) }
                    <span class="rating-value">{format!("{:.1}", doctor.rating)}</span>
                    <span class="reviews">{format!("({} reviews)", doctor.reviews)}</span>
                </div>
                <ul class="doctor-meta">
                    <li>{"🩺 "}{doctor.experience}</li>
                    <li>{"📍 "}{doctor.city}</li>
                    <li>{"💳 "}{doctor.fee}</li>
                </ul>
                <div class="badges">
                    { for doctor.badges.iter().map(|badge| html! { <span class="badge">{*badge}</span> }) }
                </div>
                <button class="book-button" disabled={!doctor.available} onclick={on_book_click}>
                    { if doctor.available { "Book appointment" } else { "Not accepting bookings" } }
                </button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DOCTORS;

    fn count(stars: &[Star; 5], kind: Star) -> usize {
        stars.iter().filter(|s| **s == kind).count()
    }

    #[test]
    fn whole_rating_has_no_half_star() {
        let s = stars(4.0);
        assert_eq!(count(&s, Star::Full), 4);
        assert_eq!(count(&s, Star::Half), 0);
        assert_eq!(count(&s, Star::Empty), 1);
    }

    #[test]
    fn half_rating_adds_half_star() {
        assert_eq!(
            stars(4.5),
            [Star::Full, Star::Full, Star::Full, Star::Full, Star::Half]
        );
        assert_eq!(count(&stars(3.7), Star::Half), 1);
        assert_eq!(count(&stars(3.4), Star::Half), 0);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(stars(7.2), [Star::Full; 5]);
        assert_eq!(stars(-1.0), [Star::Empty; 5]);
        assert_eq!(stars(f32::NAN), [Star::Empty; 5]);
        assert_eq!(stars(5.0), [Star::Full; 5]);
    }

    #[test]
    fn like_flips_once_per_toggle() {
        let doctor = DOCTORS[0];
        let mut state = CardState::new(false);
        assert_eq!(state.toggle_like(&doctor), Some((doctor.id, true)));
        assert!(state.liked);
        assert_eq!(state.toggle_like(&doctor), Some((doctor.id, false)));
        assert!(!state.liked);
    }

    #[test]
    fn like_starts_from_caller_snapshot() {
        let doctor = DOCTORS[0];
        let mut state = CardState::new(true);
        assert_eq!(state.toggle_like(&doctor), Some((doctor.id, false)));
    }

    #[test]
    fn unavailable_doctor_is_inert() {
        let doctor = DOCTORS.iter().find(|d| !d.available).copied().unwrap();
        let mut state = CardState::new(false);
        assert_eq!(state.toggle_like(&doctor), None);
        assert!(!state.liked);
        assert_eq!(state.book(&doctor), None);
    }

    #[test]
    fn available_doctor_books_itself() {
        let doctor = DOCTORS[1];
        assert_eq!(CardState::new(false).book(&doctor), Some(doctor));
    }

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css.find(&format!("{selector} {{")).unwrap();
        let body = &css[start..];
        &body[..body.find('}').unwrap()]
    }

    fn z_index(rule: &str) -> i32 {
        rule.lines()
            .find_map(|line| line.trim().strip_prefix("z-index:"))
            .and_then(|v| v.trim().trim_end_matches(';').parse().ok())
            .unwrap_or(0)
    }

    #[test]
    fn quick_stats_overlay_lets_like_clicks_through() {
        let overlay = rule(CARD_STYLES, ".quick-stats");
        let like = rule(CARD_STYLES, ".like-button");
        assert!(overlay.contains("pointer-events: none"));
        assert!(z_index(like) > z_index(overlay));
    }
}
