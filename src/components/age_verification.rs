use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::age_gate::AgeGate;
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
pub struct AgeVerificationProps {
    pub children: Children,
}

/// Blocks the site behind an 18+ confirmation until the visitor accepts.
#[function_component(AgeVerification)]
pub fn age_verification(props: &AgeVerificationProps) -> Html {
    let gate = use_mut_ref(|| AgeGate::load(BrowserStorage));
    let verified = use_state(|| gate.borrow().is_verified());
    let closing = use_state(|| false);

    let on_confirm = {
        let gate = gate.clone();
        let verified = verified.clone();
        let closing = closing.clone();
        Callback::from(move |_: MouseEvent| {
            gate.borrow_mut().confirm();
            closing.set(true);
            let verified = verified.clone();
            // let the fade-out finish before unmounting the modal
            Timeout::new(300, move || verified.set(true)).forget();
        })
    };

    let content_class = if *verified { "" } else { "age-locked" };

    html! {
        <>
            <style>
                {r#"
                    .age-locked {
                        filter: blur(4px);
                        pointer-events: none;
                        transition: all 0.3s;
                    }
                    .age-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 70;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                        transition: opacity 0.3s;
                    }
                    .age-overlay.closing {
                        opacity: 0;
                    }
                    .age-modal {
                        background: #fff;
                        border-radius: 0.5rem;
                        padding: 2rem;
                        max-width: 28rem;
                        width: 100%;
                        margin: 0 1rem;
                        text-align: center;
                    }
                    .age-modal h1 {
                        font-size: 3.75rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .age-modal button {
                        width: 100%;
                        background: #F42254;
                        color: #fff;
                        border: none;
                        border-radius: 0.375rem;
                        padding: 0.75rem 1.5rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .age-modal button:hover {
                        background: #e01a4b;
                    }
                "#}
            </style>
            {
                if !*verified {
                    html! {
                        <div class={classes!("age-overlay", (*closing).then(|| "closing"))}>
                            <div class="age-modal" role="dialog" aria-modal="true">
                                <h1>{"STEEZ"}</h1>
                                <h2>{"Verificação de Idade"}</h2>
                                <p>{"Para aceder, é necessário ter 18+ anos"}</p>
                                <button onclick={on_confirm}>{"Sim, tenho mais de 18 anos"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class={content_class} aria-hidden={(!*verified).to_string()}>
                { for props.children.iter() }
            </div>
        </>
    }
}
