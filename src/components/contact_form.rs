use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{CONTACT_SEND_DELAY_MS, CONTACT_SUCCESS_MS};
use crate::contact;

/// Contact form. Sending is simulated: after a short delay the form is
/// cleared and a confirmation shows for a few seconds.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let sent = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(e) = contact::validate(&name, &email, &message) {
                error.set(Some(e.to_string()));
                return;
            }
            error.set(None);
            submitting.set(true);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            Timeout::new(CONTACT_SEND_DELAY_MS, move || {
                info!("Contact message sent");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                submitting.set(false);
                sent.set(true);
                Timeout::new(CONTACT_SUCCESS_MS, move || sent.set(false)).forget();
            })
            .forget();
        })
    };

    html! {
        <div class="contact-form">
            <style>
                {r#"
                    .contact-form {
                        max-width: 650px;
                        width: 100%;
                        margin: 1.5rem auto 0;
                        text-align: left;
                    }
                    .contact-form form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        background: #fff;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .contact-row {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .contact-row > div {
                        flex: 1;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        border-color: #F42254;
                        outline: none;
                    }
                    .contact-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                    }
                    .contact-form button {
                        align-self: flex-end;
                        background: #F42254;
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.75rem 2rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .contact-form button:disabled {
                        background: #9ca3af;
                        cursor: wait;
                    }
                    .contact-sent {
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                    .contact-sent strong {
                        color: #15803d;
                    }
                    @media (max-width: 768px) {
                        .contact-row { flex-direction: column; }
                    }
                "#}
            </style>
            {
                if *sent {
                    html! {
                        <div class="contact-sent">
                            <strong>{"✓ Mensagem enviada com sucesso!"}</strong>
                            <p>{"Agradecemos o seu contacto, responderemos em breve."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <form {onsubmit} novalidate={true}>
                            <div class="contact-row">
                                <div>
                                    <label for="contact-name">{"Nome"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        placeholder="Seu nome"
                                        value={(*name).clone()}
                                        oninput={on_name}
                                    />
                                </div>
                                <div>
                                    <label for="contact-email">{"Email"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        placeholder="seu@email.com"
                                        value={(*email).clone()}
                                        oninput={on_email}
                                    />
                                </div>
                            </div>
                            <div>
                                <label for="contact-message">{"Mensagem"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="4"
                                    placeholder="Como podemos ajudar?"
                                    value={(*message).clone()}
                                    oninput={on_message}
                                />
                            </div>
                            {
                                if let Some(error) = &*error {
                                    html! { <p class="contact-error">{error.clone()}</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <button type="submit" disabled={*submitting}>
                                { if *submitting { "A enviar..." } else { "ENVIAR" } }
                            </button>
                        </form>
                    }
                }
            }
        </div>
    }
}
