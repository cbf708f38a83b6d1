use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cart::context::{CartAction, CartContext};
use crate::cart::store::{NewCartItem, PackSize};
use crate::components::can_view::{CanTargetHandle, CanView};
use crate::components::contact_form::ContactForm;
use crate::components::header::Header;
use crate::config::TrackerConfig;
use crate::notifications::{NotificationKind, Notifier};
use crate::sections::gesture::{GestureInput, SwipeTracker};
use crate::sections::monitor::{BrowserSchedule, ScrollMonitor};
use crate::sections::tracker::{SectionTracker, SignalKind, TickOutcome, Viewport};
use crate::sections::viewport;
use crate::Route;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Glue between DOM events and the section tracker. Clones share state.
#[derive(Clone)]
struct Scroller {
    tracker: Rc<RefCell<SectionTracker>>,
    monitor: Rc<RefCell<ScrollMonitor>>,
    container: NodeRef,
}

impl Scroller {
    fn container(&self) -> Option<Element> {
        self.container.cast::<Element>()
    }

    fn snapshot(&self) -> Option<Viewport> {
        let container = self.container()?;
        let sections = self.tracker.borrow().sections().clone();
        viewport::snapshot(&container, &sections)
    }

    fn observe(&self) {
        let snapshot = self.snapshot();
        let moving = {
            let mut tracker = self.tracker.borrow_mut();
            tracker.observe(snapshot.as_ref(), now_ms());
            tracker.in_transition()
        };
        if moving {
            self.ensure_monitor();
        }
    }

    fn scroll_to(&self, id: &str) {
        if let Some(container) = self.container() {
            viewport::scroll_to_section(&container, id);
        }
        self.ensure_monitor();
    }

    fn go_to(&self, id: &str) {
        let moved = self.tracker.borrow_mut().navigate_to(id, now_ms());
        if let Ok(true) = moved {
            self.scroll_to(id);
        }
    }

    fn step(&self, input: GestureInput) {
        let target = self.tracker.borrow_mut().step(input, now_ms());
        if let Some(id) = target {
            self.scroll_to(&id);
        }
    }

    fn ensure_monitor(&self) {
        let this = self.clone();
        self.monitor.borrow_mut().start(move || this.frame());
    }

    fn frame(&self) {
        let snapshot = self.snapshot();
        let outcome = self.tracker.borrow_mut().tick(snapshot.as_ref(), now_ms());
        if outcome == TickOutcome::Settled {
            // The interval cannot drop itself from inside its own callback.
            let this = self.clone();
            Timeout::new(0, move || {
                if !this.tracker.borrow().in_transition() {
                    this.monitor.borrow_mut().stop();
                }
            })
            .forget();
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = TrackerConfig::default();
    let tracker = use_mut_ref(SectionTracker::default);
    let monitor = use_mut_ref({
        let frame_ms = config.frame_interval_ms;
        move || ScrollMonitor::new(BrowserSchedule, frame_ms)
    });
    let container = use_node_ref();
    let swipe = use_mut_ref(SwipeTracker::default);
    let active = use_state_eq(|| crate::config::SECTIONS[0].0.to_string());
    let can_target = use_state(CanTargetHandle::default);

    let scroller = Scroller {
        tracker,
        monitor,
        container: container.clone(),
    };

    {
        let scroller = scroller.clone();
        let active = active.clone();
        let can_target = (*can_target).clone();
        use_effect_with_deps(
            move |_| {
                let subscription = scroller.tracker.borrow_mut().subscribe(move |signal| {
                    if let Some(pose) = signal.configs.get(&signal.section) {
                        can_target.set(*pose, signal.scroll_offset);
                    }
                    if signal.kind == SignalKind::Settled {
                        debug!("Settled on {}", signal.section);
                    }
                    active.set(signal.section.clone());
                });

                let window = window();

                let on_key = {
                    let scroller = scroller.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        let typing = e
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .map_or(false, |el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"));
                        if typing {
                            return;
                        }
                        if let Some(input) = GestureInput::from_key(&e.key()) {
                            e.prevent_default();
                            scroller.step(input);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                };
                let on_resize = {
                    let scroller = scroller.clone();
                    Closure::wrap(Box::new(move || scroller.observe()) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        on_key.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );

                    // Deep links such as /#pink land on their section.
                    let hash = window.location().hash().unwrap_or_default();
                    let id = hash.trim_start_matches('#');
                    if !id.is_empty() {
                        info!("Opening at section {}", id);
                        scroller.go_to(id);
                    }
                }
                scroller.observe();

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }
                    scroller.tracker.borrow_mut().unsubscribe(subscription);
                    scroller.monitor.borrow_mut().stop();
                }
            },
            (),
        );
    }

    let onscroll = {
        let scroller = scroller.clone();
        Callback::from(move |_: Event| scroller.observe())
    };
    let onwheel = {
        let scroller = scroller.clone();
        Callback::from(move |e: WheelEvent| scroller.step(GestureInput::Wheel { delta_y: e.delta_y() }))
    };
    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().begin(f64::from(touch.client_y()));
            }
        })
    };
    let ontouchend = {
        let scroller = scroller.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            let gesture = swipe.borrow_mut().finish(f64::from(touch.client_y()));
            if let Some(gesture) = gesture {
                scroller.step(gesture);
            }
        })
    };
    let on_navigate = {
        let scroller = scroller.clone();
        Callback::from(move |id: String| scroller.go_to(&id))
    };
    let go_down = {
        let scroller = scroller.clone();
        Callback::from(move |_: MouseEvent| scroller.step(GestureInput::ArrowDown))
    };
    let go_shop = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("pink".to_string()))
    };

    html! {
        <>
            <Header active={Some((*active).clone())} on_navigate={on_navigate} />
            <CanView target={(*can_target).clone()} frame_ms={config.frame_interval_ms} />
            <div
                class="snap-container"
                ref={container}
                {onscroll}
                {onwheel}
                {ontouchstart}
                {ontouchend}
            >
                <section id="inicio" class="home-section hero">
                    <p class="tagline">{"ZERO BULLSHIT, DÁ-TE STEEZ"}</p>
                    <h1 class="hero-word">{"PINK"}</h1>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={go_shop}>{"COMPRAR AGORA"}</button>
                        <Link<Route> to={Route::Faq} classes="cta-secondary">
                            {"VER INGREDIENTES"}
                        </Link<Route>>
                    </div>
                    <p class="hero-subtitle">{"Vais surpreender-te com a frescura"}</p>
                    <button class="scroll-indicator" onclick={go_down.clone()} aria-label="Ir para benefícios">{"⌄"}</button>
                </section>

                <section id="beneficios" class="home-section">
                    <h2>{"BENEFÍCIOS"}</h2>
                    <ul class="benefit-list">
                        <li>{"Zero açúcares"}</li>
                        <li>{"Zero glúten"}</li>
                        <li>{"Zero culpa"}</li>
                    </ul>
                    <button class="scroll-indicator" onclick={go_down.clone()} aria-label="Ir para pink">{"⌄"}</button>
                </section>

                <section id="pink" class="home-section">
                    <BuySection />
                </section>

                <section id="sobre" class="home-section">
                    <h2>{"SOBRE NÓS"}</h2>
                    <p class="about-text">
                        {"A STEEZ nasceu para quem quer energia sem excessos. Uma bebida leve, com sabor e atitude, feita para acompanhar o teu ritmo."}
                    </p>
                    <button class="scroll-indicator" onclick={go_down} aria-label="Ir para contacto">{"⌄"}</button>
                </section>

                <section id="contato" class="home-section">
                    <h2>{"FALA CONNOSCO"}</h2>
                    <p>{"Tem uma pergunta ou sugestão? Estamos aqui para ajudar."}</p>
                    <ContactForm />
                    <footer class="home-footer">
                        <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Termos"}</Link<Route>>
                        <Link<Route> to={Route::Privacy}>{"Privacidade"}</Link<Route>>
                    </footer>
                </section>
            </div>
            <style>
                {r#"
                    .snap-container {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        scroll-behavior: smooth;
                    }
                    .home-section {
                        position: relative;
                        height: 100vh;
                        padding-top: 4rem;
                        box-sizing: border-box;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .home-section:nth-child(even) {
                        background: #fff;
                    }
                    .home-section:nth-child(odd) {
                        background: #f3f4f6;
                    }
                    .tagline {
                        font-size: 1.125rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        color: #374151;
                    }
                    .hero-word {
                        font-size: clamp(6rem, 18vw, 16rem);
                        font-weight: 900;
                        color: #F42254;
                        line-height: 1;
                        margin: 1rem 0 3rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                        justify-content: center;
                        z-index: 10;
                    }
                    .cta-primary, .cta-secondary {
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        border-radius: 9999px;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .cta-primary {
                        background: #000;
                        color: #fff;
                        border: none;
                    }
                    .cta-secondary {
                        background: transparent;
                        color: #374151;
                        border: 2px solid #9ca3af;
                    }
                    .hero-subtitle {
                        color: #4b5563;
                        margin-top: 3rem;
                    }
                    .scroll-indicator {
                        margin-top: 1.5rem;
                        font-size: 2rem;
                        color: #ef4444;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 10;
                    }
                    .benefit-list {
                        list-style: none;
                        padding: 0;
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .about-text {
                        max-width: 40rem;
                        font-size: 1.25rem;
                        color: #4b5563;
                    }
                    .home-footer {
                        margin-top: 3rem;
                        display: flex;
                        gap: 1.5rem;
                    }
                    .home-footer a {
                        color: #868686;
                    }
                "#}
            </style>
        </>
    }
}

/// Pack picker for the pink section. Adding goes straight to the cart page.
#[function_component(BuySection)]
fn buy_section() -> Html {
    let pack = use_state(|| PackSize::Six);
    let cart = use_context::<CartContext>();
    let notifier = use_context::<Notifier>();
    let navigator = use_navigator();

    let on_add = {
        let pack = *pack;
        Callback::from(move |_: MouseEvent| {
            if let Some(cart) = &cart {
                cart.dispatch(CartAction::Add(NewCartItem {
                    id: format!("steez-pink-{}", pack.cans()),
                    name: "STEEZ PINK".to_string(),
                    image: "/images/steez-pink-can.png".to_string(),
                    pack_size: pack.cans(),
                    quantity: 1,
                }));
            }
            if let Some(notifier) = &notifier {
                notifier.show("Adicionado ao carrinho", NotificationKind::Success);
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Cart);
            }
        })
    };

    html! {
        <div class="buy-card">
            <h2>{"PINK"}</h2>
            <p class="rating">{"★★★★★ (237 avaliações)"}</p>
            <p>{"Ideal para quem procura uma opção mais leve, sem abdicar do sabor nem do estilo."}</p>
            <p class="buy-label">{"Pacote"}</p>
            <div class="pack-options">
                { for PackSize::ALL.iter().map(|option| {
                    let onclick = {
                        let pack = pack.clone();
                        let option = *option;
                        Callback::from(move |_: MouseEvent| pack.set(option))
                    };
                    html! {
                        <button
                            class={classes!("pack-option", (*pack == *option).then(|| "selected"))}
                            {onclick}
                        >
                            {format!("{:02} latas", option.cans())}
                        </button>
                    }
                }) }
            </div>
            <p class="buy-total">{"Total "}<strong>{format!("{}€", pack.unit_price())}</strong></p>
            <button class="cta-primary" onclick={on_add}>{"ADICIONAR AO CARRINHO"}</button>
            <style>
                {r#"
                    .buy-card {
                        max-width: 32rem;
                        padding: 2rem;
                        z-index: 10;
                        background: rgba(255, 255, 255, 0.85);
                        border-radius: 1rem;
                    }
                    .rating {
                        color: #F42254;
                    }
                    .pack-options {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                        margin: 0.5rem 0 1rem;
                    }
                    .pack-option {
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        border: 2px solid transparent;
                        background: #f3f4f6;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .pack-option.selected {
                        background: #fce7f3;
                        border-color: #ec4899;
                    }
                    .buy-total {
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
        </div>
    }
}
