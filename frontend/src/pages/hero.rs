use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::animation::{Spring, Variant};
use crate::components::animated_section::AnimatedSection;
use crate::components::particles::ParticleField;
use crate::components::stats::StatTile;
use crate::components::toast::use_toast;
use crate::config;
use crate::data::{CITIES, SPECIALTIES, STATS};
use crate::search::SearchSession;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let query = use_state(String::new);
    let city = use_state(String::new);
    let specialty = use_state(|| None::<&'static str>);
    let searching = use_state(|| false);
    let session = use_mut_ref(SearchSession::default);
    let is_mounted = use_is_mounted();
    let navigator = use_navigator().unwrap();
    let toaster = use_toast();

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onchange = {
        let city = city.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            city.set(select.value());
        })
    };

    let onsubmit = {
        let query = query.clone();
        let city = city.clone();
        let specialty = specialty.clone();
        let searching = searching.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let toaster = toaster.clone();
            let started = session
                .borrow_mut()
                .submit(&query, Some(city.as_str()), *specialty, move |notice| toaster.info(notice));
            let Some(target) = started else {
                return;
            };
            info!("Hero search: {}", target.to_query_string());
            searching.set(true);

            let searching = searching.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SEARCH_DELAY_MS).await;
                let mounted = is_mounted();
                session.borrow_mut().settle(target, mounted, |target| {
                    searching.set(false);
                    if let Err(e) = navigator.push_with_query(&Route::Doctors, &target) {
                        warn!("Failed to open search results: {:?}", e);
                    }
                });
            });
        })
    };

    let specialty_chips = SPECIALTIES.iter().map(|s| {
        let selected = *specialty == Some(s.key);
        let onclick = {
            let specialty = specialty.clone();
            let key = s.key;
            Callback::from(move |_: MouseEvent| {
                specialty.set(if selected { None } else { Some(key) });
            })
        };
        html! {
            <button type="button" class={classes!("chip", selected.then(|| "selected"))} {onclick}>
                <span>{s.icon}</span>{" "}{s.label}
            </button>
        }
    });

    html! {
        <header class="hero">
            <ParticleField count={config::PARTICLE_COUNT} />
            <div class="hero-content">
                <AnimatedSection variant={Variant::FadeUp} spring={Some(Spring::new(18.0, 120.0))}>
                    <h1>{"Book trusted doctors near you"}</h1>
                    <p class="hero-subtitle">
                        {"Compare verified specialists, read honest reviews and reserve a slot in under a minute."}
                    </p>
                </AnimatedSection>

                <AnimatedSection variant={Variant::Scale} delay={0.2}>
                    <form class="search-box" {onsubmit}>
                        <input
                            type="text"
                            placeholder="Search doctors, specialties, clinics..."
                            value={(*query).clone()}
                            {oninput}
                        />
                        <select {onchange}>
                            <option value="" selected={city.is_empty()}>{"All cities"}</option>
                            { for CITIES.iter().map(|c| html! {
                                <option value={*c} selected={city.as_str() == *c}>{*c}</option>
                            }) }
                        </select>
                        <button type="submit" class="hero-cta" disabled={*searching}>
                            { if *searching { "Searching..." } else { "Search" } }
                        </button>
                    </form>
                    <div class="chip-row">
                        { for specialty_chips }
                    </div>
                </AnimatedSection>

                <AnimatedSection class="stats-row" variant={Variant::FadeUp} delay={0.4} stagger={0.12}>
                    { for STATS.iter().map(|stat| html! { <StatTile stat={*stat} /> }) }
                </AnimatedSection>
            </div>
        </header>
    }
}
