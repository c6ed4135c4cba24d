use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod data;
mod error;
mod models;
mod search;
mod components {
    pub mod animated_section;
    pub mod doctor_card;
    pub mod particles;
    pub mod stats;
    pub mod toast;
}
mod pages {
    pub mod booking;
    pub mod doctors;
    pub mod features;
    pub mod hero;
    pub mod home;
}

use components::doctor_card::CARD_STYLES;
use components::toast::ToastProvider;
use pages::{booking::Booking, doctors::Doctors, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/doctors")]
    Doctors,
    #[at("/book/:id")]
    Booking { id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Doctors => {
            info!("Rendering Doctors page");
            html! { <Doctors /> }
        }
        Route::Booking { id } => {
            info!("Rendering Booking page for doctor {}", id);
            html! { <Booking id={id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="results-page not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        <button class="hero-cta">{"Back to home"}</button>
                    </Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = window.clone().map(|window| {
                    Closure::<dyn Fn()>::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 80.0);
                    })
                });

                if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"carebook"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Doctors} classes="nav-cta">
                            {"Find doctors"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </ToastProvider>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #f8fafc;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #ffffff;
                        text-decoration: none;
                    }
                    .top-nav.scrolled .nav-logo, .top-nav.scrolled .nav-link {
                        color: #0c4a6e;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #ffffff;
                        text-decoration: none;
                    }
                    .nav-cta {
                        background: #0ea5e9;
                        color: #ffffff;
                        padding: 0.5rem 1.1rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: currentColor;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; color: #ffffff; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #0c4a6e;
                        }
                    }
                    .hero-cta, .secondary-cta, .book-button {
                        border: none;
                        border-radius: 10px;
                        padding: 0.8rem 1.6rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .hero-cta {
                        background: #0ea5e9;
                        color: #ffffff;
                    }
                    .hero-cta:hover:not(:disabled) {
                        transform: translateY(-2px);
                        box-shadow: 0 10px 20px rgba(14, 165, 233, 0.35);
                    }
                    .hero-cta:disabled, .book-button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .secondary-cta {
                        background: transparent;
                        border: 2px solid #0ea5e9;
                        color: #0ea5e9;
                    }
                    .section-subtitle {
                        color: #64748b;
                        margin-bottom: 3rem;
                    }
                "#}
            </style>
            <style>{CARD_STYLES}</style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
