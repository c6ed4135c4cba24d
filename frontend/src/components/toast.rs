use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

pub enum ToastAction {
    Push {
        message: String,
        kind: ToastKind,
        duration_ms: u32,
    },
    Dismiss(u64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let ToastAction::Dismiss(id) = action {
            if !self.toasts.iter().any(|t| t.id == id) {
                return self;
            }
        }
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push {
                message,
                kind,
                duration_ms,
            } => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    message,
                    kind,
                    duration_ms,
                });
                queue.next_id += 1;
                if queue.toasts.len() > MAX_VISIBLE {
                    let overflow = queue.toasts.len() - MAX_VISIBLE;
                    queue.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => queue.toasts.retain(|t| t.id != id),
        }
        Rc::new(queue)
    }
}

/// Handle pages use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerHandle<ToastQueue>);

impl Toaster {
    fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        self.0.dispatch(ToastAction::Push {
            message: message.into(),
            kind,
            duration_ms,
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info, config::TOAST_SHORT_MS);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success, config::TOAST_LONG_MS);
    }

    fn dismiss(&self, id: u64) {
        self.0.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    use_context::<Toaster>().expect("use_toast called outside of ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster(queue.clone());

    html! {
        <ContextProvider<Toaster> context={toaster.clone()}>
            { for props.children.iter() }
            <div class="toast-stack">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} toaster={toaster.clone()} />
                }) }
            </div>
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 1000;
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        min-width: 260px;
                        max-width: 360px;
                        padding: 0.9rem 1.1rem;
                        border-radius: 12px;
                        background: #ffffff;
                        color: #0f172a;
                        box-shadow: 0 12px 30px rgba(15, 23, 42, 0.15);
                        border-left: 4px solid #0ea5e9;
                        animation: toastIn 0.35s cubic-bezier(0.22, 1, 0.36, 1);
                        cursor: pointer;
                    }
                    .toast.success { border-left-color: #10b981; }
                    @keyframes toastIn {
                        from { transform: translateX(40px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    toaster: Toaster,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let toaster = props.toaster.clone();
        let id = props.toast.id;
        let duration = props.toast.duration_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration, move || toaster.dismiss(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let toaster = props.toaster.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| toaster.dismiss(id))
    };

    html! {
        <div class={props.toast.kind.class()} role="status" {onclick}>
            <span>{props.toast.kind.icon()}</span>
            <span>{&props.toast.message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            message: message.to_string(),
            kind: ToastKind::Info,
            duration_ms: 1_000,
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let ids: Vec<u64> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn keeps_only_newest_toasts() {
        let mut queue = Rc::new(ToastQueue::default());
        for message in ["a", "b", "c", "d", "e"] {
            queue = push(queue, message);
        }
        let messages: Vec<&str> = queue.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["c", "d", "e"]);
    }

    #[test]
    fn dismiss_removes_by_id_and_ignores_unknown() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "b");

        let unchanged = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let queue = push(Rc::new(ToastQueue::default()), "a");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        let queue = push(queue, "b");
        assert_eq!(queue.toasts[0].id, 1);
    }
}
