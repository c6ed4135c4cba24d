use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{Spring, Variant};
use crate::components::animated_section::AnimatedSection;
use crate::components::toast::use_toast;
use crate::data;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub id: u32,
}

/// Confirmation screen for one doctor. Confirming only announces and goes home.
#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toaster = use_toast();

    let Some(doctor) = data::find_doctor(props.id).copied() else {
        return html! {
            <div class="booking-page">
                <h1>{"Doctor not found"}</h1>
                <p>{"This profile may have moved. Try searching again."}</p>
                <Link<Route> to={Route::Doctors} classes="forward-link">
                    <button class="hero-cta">{"Browse doctors"}</button>
                </Link<Route>>
            </div>
        };
    };

    let on_confirm = {
        Callback::from(move |_: MouseEvent| {
            if !doctor.available {
                return;
            }
            info!("Booking confirmed for doctor {}", doctor.id);
            toaster.success(format!("Appointment request sent to {}", doctor.name));
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="booking-page">
            <AnimatedSection variant={Variant::Scale} spring={Some(Spring::new(16.0, 150.0))}>
                <div class="booking-card">
                    <img src={doctor.image} alt={doctor.name} />
                    <div>
                        <h1>{doctor.name}</h1>
                        <p class="specialization">{doctor.specialization}{" · "}{doctor.city}</p>
                        <p>{format!("{} · {} · ★ {:.1} ({} reviews)", doctor.experience, doctor.fee, doctor.rating, doctor.reviews)}</p>
                        {
                            if let Some(quick) = doctor.quick_stats {
                                html! { <p class="next-slot">{"Next available: "}{quick.next_slot}</p> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if doctor.available {
                                html! {
                                    <button class="hero-cta" onclick={on_confirm}>{"Confirm appointment"}</button>
                                }
                            } else {
                                html! {
                                    <p class="unavailable-note">
                                        {"This doctor is not accepting new bookings right now."}
                                    </p>
                                }
                            }
                        }
                    </div>
                </div>
            </AnimatedSection>
            <style>
                {r#"
                    .booking-page {
                        max-width: 900px;
                        margin: 0 auto;
                        padding: 8rem 2rem 4rem;
                    }
                    .booking-card {
                        display: flex;
                        gap: 2rem;
                        background: #ffffff;
                        border-radius: 20px;
                        padding: 2rem;
                        box-shadow: 0 12px 30px rgba(15, 23, 42, 0.1);
                    }
                    .booking-card img {
                        width: 220px;
                        height: 220px;
                        object-fit: cover;
                        border-radius: 16px;
                    }
                    .unavailable-note {
                        color: #b91c1c;
                    }
                    @media (max-width: 768px) {
                        .booking-card { flex-direction: column; }
                    }
                "#}
            </style>
        </div>
    }
}
