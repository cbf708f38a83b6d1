use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cart::context::{CartAction, CartContext};
use crate::cart::shipping::{
    format_euros, format_postal_code, is_valid_postal_code, quote_shipping, DEFAULT_SHIPPING_CENTS,
};
use crate::cart::store::{CartItem, PackSize};
use crate::components::header::Header;
use crate::config::{CHECKOUT_THANKS_DELAY_MS, CHECKOUT_THANKS_DURATION_MS};
use crate::notifications::{NotificationKind, Notifier};
use crate::Route;

#[derive(Properties, PartialEq)]
struct CartLineProps {
    item: CartItem,
    cart: CartContext,
    notifier: Option<Notifier>,
}

#[function_component(CartLine)]
fn cart_line(props: &CartLineProps) -> Html {
    let item = &props.item;

    let on_pack = |pack: PackSize| {
        let cart = props.cart.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| {
            cart.dispatch(CartAction::UpdatePackSize {
                id: id.clone(),
                pack_size: pack.cans(),
                unit_price: pack.unit_price(),
            })
        })
    };

    let on_decrement = {
        let cart = props.cart.clone();
        let notifier = props.notifier.clone();
        let id = item.id.clone();
        let quantity = item.quantity;
        Callback::from(move |_: MouseEvent| {
            if quantity > 1 {
                cart.dispatch(CartAction::UpdateQuantity {
                    id: id.clone(),
                    quantity: quantity - 1,
                });
            } else if let Some(notifier) = &notifier {
                notifier.show("Use \"Remover\" para retirar o item", NotificationKind::Warning);
            }
        })
    };

    let on_increment = {
        let cart = props.cart.clone();
        let id = item.id.clone();
        let quantity = item.quantity;
        Callback::from(move |_: MouseEvent| {
            cart.dispatch(CartAction::UpdateQuantity {
                id: id.clone(),
                quantity: quantity + 1,
            })
        })
    };

    let on_remove = {
        let cart = props.cart.clone();
        let notifier = props.notifier.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| {
            cart.dispatch(CartAction::Remove(id.clone()));
            if let Some(notifier) = &notifier {
                notifier.show("Item removido do carrinho", NotificationKind::Error);
            }
        })
    };

    html! {
        <div class="cart-line">
            <img src={item.image.clone()} alt={item.name.clone()} class="cart-line-image" />
            <div class="cart-line-details">
                <h3>{&item.name}</h3>
                <div class="pack-options">
                    { for PackSize::ALL.iter().map(|pack| html! {
                        <button
                            class={classes!("pack-toggle", (item.pack_size == *pack).then(|| "selected"))}
                            onclick={on_pack(*pack)}
                        >
                            {pack.to_string()}
                        </button>
                    }) }
                </div>
                <p class="unit-price">{format!("{}€ por pacote", item.pack_size.unit_price())}</p>
            </div>
            <div class="quantity">
                <button onclick={on_decrement} aria-label="Diminuir quantidade">{"−"}</button>
                <span>{item.quantity}</span>
                <button onclick={on_increment} aria-label="Aumentar quantidade">{"+"}</button>
            </div>
            <button class="remove" onclick={on_remove}>{"Remover"}</button>
        </div>
    }
}

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let cart = use_context::<CartContext>();
    let notifier = use_context::<Notifier>();
    let postal_code = use_state(String::new);
    let shipping_cents = use_state(|| DEFAULT_SHIPPING_CENTS);
    let shipping_quoted = use_state(|| false);

    let Some(cart) = cart else {
        return html! {};
    };

    let on_postal_input = {
        let postal_code = postal_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_postal_code(&input.value());
            input.set_value(&formatted);
            postal_code.set(formatted);
        })
    };

    let on_clear_postal = {
        let postal_code = postal_code.clone();
        let shipping_cents = shipping_cents.clone();
        let shipping_quoted = shipping_quoted.clone();
        Callback::from(move |_: MouseEvent| {
            postal_code.set(String::new());
            shipping_quoted.set(false);
            shipping_cents.set(DEFAULT_SHIPPING_CENTS);
        })
    };

    let on_quote = {
        let postal_code = postal_code.clone();
        let shipping_cents = shipping_cents.clone();
        let shipping_quoted = shipping_quoted.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cost) = quote_shipping(&postal_code) {
                shipping_cents.set(cost);
                shipping_quoted.set(true);
                if let Some(notifier) = &notifier {
                    notifier.show(
                        format!("Portes de envio calculado: {}", format_euros(cost)),
                        NotificationKind::Success,
                    );
                }
            }
        })
    };

    let on_clear = {
        let cart = cart.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            if cart.is_empty() {
                return;
            }
            cart.dispatch(CartAction::Clear);
            if let Some(notifier) = &notifier {
                notifier.show("Carrinho esvaziado", NotificationKind::Info);
            }
        })
    };

    let on_checkout = {
        let cart = cart.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            if cart.is_empty() {
                return;
            }
            info!("Simulated checkout of {} packs, {}€", cart.item_count(), cart.total());
            if let Some(notifier) = &notifier {
                notifier.show("Pedido finalizado com sucesso!", NotificationKind::Success);
                let notifier = notifier.clone();
                Timeout::new(CHECKOUT_THANKS_DELAY_MS, move || {
                    notifier.show_for(
                        "Obrigado pela sua compra!",
                        NotificationKind::Success,
                        Some(CHECKOUT_THANKS_DURATION_MS),
                    );
                })
                .forget();
            }
        })
    };

    let postal_valid = is_valid_postal_code(&postal_code);
    let postal_invalid = !postal_code.is_empty() && !postal_valid;
    let subtotal_cents = cart.total().saturating_mul(100);
    let order_cents = subtotal_cents.saturating_add(*shipping_cents);

    html! {
        <div class="cart-page">
            <Header />
            <div class="cart-content">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Voltar para loja"}
                </Link<Route>>
                <h1>{"CARRINHO"}</h1>

                <div class="cart-grid">
                    <div class="cart-items">
                        <div class="cart-items-header">
                            <span>{"Produto"}</span>
                            <span>{"Quantidade"}</span>
                        </div>
                        {
                            if cart.is_empty() {
                                html! {
                                    <div class="cart-empty">
                                        <p>{"O seu carrinho está vazio"}</p>
                                        <Link<Route> to={Route::Home}>{"Voltar às compras"}</Link<Route>>
                                    </div>
                                }
                            } else {
                                html! {
                                    <>
                                        { for cart.items().iter().map(|item| html! {
                                            <CartLine
                                                key={item.id.clone()}
                                                item={item.clone()}
                                                cart={cart.clone()}
                                                notifier={notifier.clone()}
                                            />
                                        }) }
                                        <button class="clear-cart" onclick={on_clear}>{"Esvaziar carrinho"}</button>
                                    </>
                                }
                            }
                        }
                    </div>

                    <div class="cart-summary">
                        <select>
                            <option>{"Portugal"}</option>
                        </select>
                        <label for="postal-code">{"Código postal (####-###)"}</label>
                        <div class="postal-row">
                            <input
                                id="postal-code"
                                type="text"
                                placeholder="1000-100"
                                class={classes!(postal_invalid.then(|| "invalid"))}
                                value={(*postal_code).clone()}
                                oninput={on_postal_input}
                            />
                            {
                                if postal_code.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <button class="clear-postal" onclick={on_clear_postal} aria-label="Limpar código postal">{"✕"}</button>
                                    }
                                }
                            }
                        </div>
                        {
                            if postal_invalid {
                                html! { <p class="postal-error">{"Por favor, insira um código postal válido no formato ####-###"}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="summary-row">
                            <span>{"Portes de envio"}</span>
                            {
                                if *shipping_quoted {
                                    html! { <span class="quoted">{format_euros(*shipping_cents)}</span> }
                                } else {
                                    html! { <span class="hint">{"Insira o código postal para calcular o envio"}</span> }
                                }
                            }
                        </div>
                        <button class="quote-button" disabled={!postal_valid} onclick={on_quote}>
                            {"CALCULAR PORTES DE ENVIO"}
                        </button>

                        <div class="summary-row">
                            <span>{"Subtotal"}</span>
                            <span>{format_euros(subtotal_cents)}</span>
                        </div>
                        <div class="summary-row">
                            <span>{"Envio"}</span>
                            <span>{format_euros(*shipping_cents)}</span>
                        </div>
                        <div class="summary-items">
                            { for cart.items().iter().map(|item| html! {
                                <div class="summary-row small">
                                    <span>{format!("{}x Pacote {}", item.quantity, item.pack_size)}</span>
                                    <span>{format!("{}€", item.price)}</span>
                                </div>
                            }) }
                        </div>
                        <div class="summary-row total">
                            <span>{"Total:"}</span>
                            <span>{format_euros(order_cents)}</span>
                        </div>
                        <button class="checkout-button" disabled={cart.is_empty()} onclick={on_checkout}>
                            {"FINALIZAR PEDIDO"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .cart-page {
                        min-height: 100vh;
                        background: #fff;
                        padding: 0 1rem 2.5rem;
                    }
                    .cart-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding-top: 5rem;
                    }
                    .cart-content h1 {
                        text-align: center;
                        font-size: 1.875rem;
                        margin-bottom: 2.5rem;
                    }
                    .back-link {
                        color: #4b5563;
                        text-decoration: none;
                    }
                    .cart-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                    }
                    @media (max-width: 1024px) {
                        .cart-grid { grid-template-columns: 1fr; }
                    }
                    .cart-items-header, .summary-row {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.75rem;
                    }
                    .cart-items-header {
                        border-bottom: 1px solid #e5e7eb;
                        padding-bottom: 0.5rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .cart-line {
                        display: grid;
                        grid-template-columns: 4rem 1fr auto auto;
                        gap: 1rem;
                        align-items: center;
                        padding: 1.5rem 0;
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .cart-line-image {
                        height: 6rem;
                        object-fit: contain;
                    }
                    .pack-toggle {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid transparent;
                        background: #f3f4f6;
                        color: #4b5563;
                        margin-right: 0.5rem;
                        cursor: pointer;
                    }
                    .pack-toggle.selected {
                        background: #fce7f3;
                        color: #F42254;
                        border-color: #F42254;
                    }
                    .quantity button, .remove, .clear-postal {
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .remove { color: #ef4444; }
                    .clear-cart {
                        margin-top: 1rem;
                        background: none;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        padding: 0.5rem 1rem;
                        color: #4b5563;
                        cursor: pointer;
                    }
                    .cart-summary {
                        background: #f9fafb;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .postal-row {
                        display: flex;
                    }
                    .postal-row input {
                        flex: 1;
                        padding: 0.5rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                    }
                    .postal-row input.invalid {
                        border-color: #ef4444;
                        background: #fef2f2;
                    }
                    .postal-error { color: #ef4444; font-size: 0.875rem; }
                    .hint { color: #6b7280; font-size: 0.875rem; }
                    .quoted { color: #16a34a; font-weight: 500; }
                    .quote-button {
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #e5e7eb;
                        margin-bottom: 1.5rem;
                    }
                    .quote-button:disabled { color: #9ca3af; cursor: not-allowed; }
                    .summary-row.small { font-size: 0.875rem; color: #4b5563; }
                    .summary-row.total { font-weight: 700; font-size: 1.125rem; }
                    .checkout-button {
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #000;
                        color: #fff;
                        cursor: pointer;
                    }
                    .checkout-button:disabled { background: #9ca3af; cursor: not-allowed; }
                "#}
            </style>
        </div>
    }
}
