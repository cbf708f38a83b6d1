use yew::prelude::*;

use crate::pages::legal::LegalLayout;

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    html! {
        <LegalLayout
            title="Termos de Uso"
            description="Leia atentamente os termos e condições de uso da Steez"
        >
            <h2>{"1. Aceitação dos Termos"}</h2>
            <p>{"Ao acederes e utilizares o site e serviços da Steez, concordas em cumprir e estar vinculado pelos seguintes termos e condições de uso. Se não concordares com algum destes termos, não utilizes o nosso site ou serviços."}</p>

            <h2>{"2. Elegibilidade"}</h2>
            <p>{"Para utilizares os nossos serviços, deves ter pelo menos 18 anos de idade, conforme exigido pela legislação portuguesa para consumo de bebidas alcoólicas. Ao utilizares o nosso site e serviços, confirmas que tens idade legal para consumir bebidas alcoólicas no país em que resides."}</p>

            <h2>{"3. Propriedade Intelectual"}</h2>
            <p>{"Todo o conteúdo presente no site da Steez, incluindo textos, gráficos, logotipos, ícones e imagens, é propriedade da Steez ou dos seus fornecedores de conteúdo e está protegido pelas leis portuguesas, da União Europeia e internacionais de direitos de autor."}</p>

            <h2>{"4. Uso do Site"}</h2>
            <p>{"Concordas em utilizar o nosso site apenas para fins legais e de forma que não infrinja os direitos de terceiros, nem restrinja ou iniba o uso e aproveitamento do site por qualquer terceiro."}</p>

            <h2>{"5. Compras Online"}</h2>
            <p>{"Ao fazeres uma compra através do nosso site, concordas com os termos de venda, incluindo preço, método de pagamento, entrega e políticas de devolução conforme descritas no nosso site no momento da compra."}</p>

            <h2>{"6. Limitação de Responsabilidade"}</h2>
            <p>{"A Steez não será responsável por quaisquer danos diretos, indiretos, incidentais, consequenciais ou punitivos decorrentes do uso ou incapacidade de uso dos nossos serviços ou produtos."}</p>

            <h2>{"7. Alterações nos Termos"}</h2>
            <p>{"Reservamo-nos o direito de modificar estes termos a qualquer momento. As modificações entram em vigor imediatamente após a publicação dos termos actualizados."}</p>

            <h2>{"8. Lei Aplicável e Jurisdição"}</h2>
            <p>{"Estes termos são regidos pelas leis de Portugal e da União Europeia. Qualquer disputa será submetida à jurisdição exclusiva dos tribunais de Lisboa, Portugal."}</p>

            <h2>{"9. Contacto"}</h2>
            <p>{"Se tiveres alguma dúvida sobre estes Termos de Uso, entra em contacto connosco através do e-mail: contacto@steez.com"}</p>
        </LegalLayout>
    }
}
