use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys::Array, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::animation::{in_view, Motion, Reveal, Spring, Variant};
use crate::error::UiError;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub spring: Option<Spring>,
    #[prop_or(0.0)]
    pub stagger: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Keeps the observer and its JS callback alive together. Dropping it stops
/// observation.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_reveal(
    node: &NodeRef,
    threshold: f64,
    once: bool,
    on_change: Callback<bool>,
) -> Result<RevealObserver, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)?;
    let element = node.cast::<Element>().ok_or(UiError::NotMounted)?;

    let reveal = Rc::new(RefCell::new(Reveal::new(once)));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let entering = in_view(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                let mut reveal = reveal.borrow_mut();
                if let Some(visible) = reveal.observe(entering) {
                    on_change.emit(visible);
                }
                if reveal.is_settled() {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Wraps its children and plays `variant` when scrolled into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let threshold = props.threshold;
        let once = props.once;
        use_effect_with_deps(
            move |_| {
                let on_change = {
                    let visible = visible.clone();
                    Callback::from(move |is_visible: bool| visible.set(is_visible))
                };
                let observer = match observe_reveal(&node, threshold, once, on_change) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("Scroll reveal unavailable ({}), showing section", e);
                        visible.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (threshold, once),
        );
    }

    let motion = Motion {
        variant: props.variant,
        delay: props.delay,
        duration: props.duration,
        spring: props.spring,
        stagger: props.stagger,
    };

    if motion.staggers() {
        html! {
            <div ref={node} class={props.class.clone()}>
                { for props.children.iter().enumerate().map(|(i, child)| html! {
                    <div class="reveal-item" style={motion.style(*visible, i)}>
                        { child }
                    </div>
                }) }
            </div>
        }
    } else {
        html! {
            <div ref={node} class={props.class.clone()} style={motion.style(*visible, 0)}>
                { for props.children.iter() }
            </div>
        }
    }
}
