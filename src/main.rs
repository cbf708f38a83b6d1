use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod storage;
mod age_gate;
mod notifications;
mod contact;
mod cart {
    pub mod store;
    pub mod shipping;
    pub mod context;
}
mod sections {
    pub mod tracker;
    pub mod gesture;
    pub mod pose;
    pub mod monitor;
    pub mod viewport;
}
mod components {
    pub mod notification;
    pub mod age_verification;
    pub mod header;
    pub mod can_view;
    pub mod contact_form;
}
mod pages {
    pub mod home;
    pub mod cart;
    pub mod faq;
    pub mod legal;
    pub mod terms;
    pub mod privacy;
}

use cart::context::CartProvider;
use components::{
    age_verification::AgeVerification,
    notification::NotificationProvider,
};
use pages::{
    home::Home,
    cart::CartPage,
    faq::Faq,
    terms::TermsOfUse,
    privacy::PrivacyPolicy,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/carrinho")]
    Cart,
    #[at("/faq")]
    Faq,
    #[at("/termos")]
    Terms,
    #[at("/privacidade")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Cart => {
            info!("Rendering Cart page");
            html! { <CartPage /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            warn!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CartProvider>
                <NotificationProvider>
                    <AgeVerification>
                        <Switch<Route> render={switch} />
                    </AgeVerification>
                </NotificationProvider>
            </CartProvider>
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
