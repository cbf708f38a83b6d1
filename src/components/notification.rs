use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::notifications::{Notification, Notifications, Notifier};

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let notifications = use_reducer(Notifications::default);
    let notifier = Notifier::new(notifications);

    html! {
        <ContextProvider<Notifier> context={notifier.clone()}>
            { for props.children.iter() }
            <Toasts notifier={notifier} />
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastsProps {
    notifier: Notifier,
}

#[function_component(Toasts)]
fn toasts(props: &ToastsProps) -> Html {
    html! {
        <div class="toast-stack">
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        top: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    @keyframes toastIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .toast {
                        min-width: 20rem;
                        max-width: 28rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        color: #fff;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        box-shadow: 0 10px 20px rgba(0,0,0,0.2);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast button {
                        background: none;
                        border: none;
                        color: #fff;
                        margin-left: 0.5rem;
                        cursor: pointer;
                    }
                    .toast-success { background: #22c55e; }
                    .toast-error { background: #ef4444; }
                    .toast-warning { background: #f59e0b; }
                    .toast-info { background: #3b82f6; }
                "#}
            </style>
            { for props.notifier.items().iter().map(|n| html! {
                <Toast key={format!("{:?}", n.id)} notification={n.clone()} notifier={props.notifier.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    notifier: Notifier,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.notification.id;

    {
        let notifier = props.notifier.clone();
        let duration = props.notification.duration_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration, move || notifier.dismiss(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let notifier = props.notifier.clone();
        Callback::from(move |_: MouseEvent| notifier.dismiss(id))
    };

    html! {
        <div class={classes!("toast", props.notification.kind.class())}>
            <p>{&props.notification.message}</p>
            <button {onclick} aria-label="Fechar notificação">{"✕"}</button>
        </div>
    }
}
