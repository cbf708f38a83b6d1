use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::cart::context::CartContext;
use crate::config::SECTIONS;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Highlighted section, if the current page is the home page.
    #[prop_or_default]
    pub active: Option<String>,
    /// Called with a section id. Without it the links jump to `/#id`.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let cart = use_context::<CartContext>();
    let menu_open = use_state(|| false);

    let item_count = cart.map(|c| c.item_count()).unwrap_or(0);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        height: 4rem;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .nav-content {
                        max-width: 72rem;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 800;
                        color: #000;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        padding: 0.5rem;
                        font-weight: 500;
                        color: #868686;
                        text-decoration: none;
                        border-bottom: 2px solid transparent;
                        transition: all 0.3s;
                    }
                    .nav-link.active {
                        color: #F42254;
                        border-bottom-color: #F42254;
                    }
                    .nav-cart {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #000;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .cart-badge {
                        background: #ef4444;
                        color: #fff;
                        font-size: 0.75rem;
                        border-radius: 9999px;
                        min-width: 1.25rem;
                        height: 1.25rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 4px 0;
                        background: #000;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-links { display: none; }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            background: #fff;
                            padding: 1rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"STEEZ"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(id, label)| {
                        let is_active = props.active.as_deref() == Some(*id);
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            let menu_open = menu_open.clone();
                            let id = id.to_string();
                            Callback::from(move |e: MouseEvent| {
                                menu_open.set(false);
                                if let Some(on_navigate) = &on_navigate {
                                    e.prevent_default();
                                    on_navigate.emit(id.clone());
                                }
                            })
                        };
                        html! {
                            <a
                                href={format!("/#{}", id)}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                {onclick}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                </div>
                <Link<Route> to={Route::Cart} classes="nav-cart">
                    {"CARRINHO"}
                    <span class="cart-badge">{item_count}</span>
                </Link<Route>>
            </div>
        </nav>
    }
}
