use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LegalLayoutProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub children: Children,
}

/// Shared frame for the terms and privacy pages.
#[function_component(LegalLayout)]
pub fn legal_layout(props: &LegalLayoutProps) -> Html {
    html! {
        <div class="legal-page">
            <Header />
            <div class="legal-content">
                <h1>{&props.title}</h1>
                <p class="legal-description">{&props.description}</p>
                <section>
                    { for props.children.iter() }
                </section>
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Home}>{"Voltar à loja"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: #fff;
                    padding-top: 4rem;
                }

                .legal-content {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    color: #1f2937;
                }

                .legal-content h1 {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #F42254;
                    margin-bottom: 0.5rem;
                }

                .legal-description {
                    color: #6b7280;
                    margin-bottom: 2.5rem;
                }

                .legal-content h2 {
                    font-size: 1.4rem;
                    margin: 2rem 0 0.75rem;
                }

                .legal-content p, .legal-content li {
                    line-height: 1.6;
                    color: #4b5563;
                }

                .legal-content ul {
                    padding-left: 1.25rem;
                }

                .legal-links {
                    margin-top: 3rem;
                    text-align: center;
                }

                .legal-links a {
                    color: #F42254;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .legal-content {
                        padding: 2rem 1rem;
                    }

                    .legal-content h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
