use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::header::Header;

const FAQ: &[(&str, &str)] = &[
    (
        "O que é Steez?",
        "A Steez foi pensada para quem se preocupa com o corpo mas não abdica da diversão. É baixa em calorias, sem açúcares adicionados.",
    ),
    (
        "Qual é o teor alcoólico da Steez?",
        "A Steez contém 5% de álcool por volume, o que a coloca na mesma categoria de bebidas como cerveja artesanal e hard seltzers.",
    ),
    (
        "A Steez é vegana?",
        "Sim! Todos os nossos produtos são 100% veganos e não contêm ingredientes de origem animal.",
    ),
    (
        "A Steez dá ressaca?",
        "Como qualquer bebida alcoólica, tudo depende da quantidade e do seu corpo. Mas por ser leve e limpa, ajuda a evitar aquele peso no dia seguinte.",
    ),
    (
        "A Steez contém glúten?",
        "Não, a Steez é naturalmente sem glúten, o que a torna adequada para pessoas com intolerância ao glúten ou doença celíaca.",
    ),
    (
        "Fazem envios para todo o país?",
        "Sim, fazemos envios para todo o território continental. Açores e Madeira estarão disponíveis em breve.",
    ),
    (
        "Quero vender Steez no meu espaço. Como faço?",
        "Ótimo! Entre em contacto connosco através do e-mail comercial@steez.com para discutirmos uma parceria.",
    ),
    (
        "A Steez tem validade?",
        "Sim, cada lata tem validade de 12 meses a partir da data de fabricação, que está impressa na parte inferior da lata.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" tabindex="-1" onclick={toggle}>
                <span>{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <Header />
            <section class="faq-hero">
                <h1>{"Perguntas Frequentes"}</h1>
                <p>{"Tudo o que precisas de saber sobre a Steez"}</p>
            </section>

            <section class="faq-section">
                { for FAQ.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </section>

            <style>
                {r#"
                .faq-page {
                    min-height: 100vh;
                    background: #fff;
                    padding-top: 4rem;
                }

                .faq-hero {
                    text-align: center;
                    padding: 4rem 1rem 2rem;
                }

                .faq-hero h1 {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #F42254;
                    margin-bottom: 0.5rem;
                }

                .faq-hero p {
                    color: #4b5563;
                }

                .faq-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 1rem 1rem 4rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    background: #fff;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                    outline: none;
                }

                .faq-question:hover {
                    background: #f9fafb;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #4b5563;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 0 1.5rem 1rem;
                }

                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2rem;
                    }

                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
