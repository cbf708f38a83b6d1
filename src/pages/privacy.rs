use yew::prelude::*;

use crate::pages::legal::LegalLayout;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalLayout
            title="Política de Privacidade"
            description="Sabe como recolhemos e usamos as tuas informações pessoais"
        >
            <h2>{"1. Responsável pelo Tratamento"}</h2>
            <p>{"A Steez é responsável pelo tratamento dos dados pessoais recolhidos através deste site, em conformidade com o RGPD."}</p>

            <h2>{"2. Informações que Recolhemos"}</h2>
            <ul>
                <li><strong>{"Dados de Identificação Pessoal: "}</strong>{"Nome, endereço, e-mail, telefone, data de nascimento."}</li>
                <li><strong>{"Dados de Navegação: "}</strong>{"Endereço IP, tipo de navegador, páginas visitadas."}</li>
                <li><strong>{"Dados de Compra: "}</strong>{"Histórico de encomendas, preferências de produtos."}</li>
            </ul>

            <h2>{"3. Como Utilizamos as tuas Informações"}</h2>
            <ul>
                <li>{"Processar e entregar as tuas encomendas"}</li>
                <li>{"Melhorar os nossos produtos e serviços"}</li>
                <li>{"Verificar a idade para cumprir as restrições legais de bebidas alcoólicas"}</li>
                <li>{"Prevenir fraudes e garantir a segurança do site"}</li>
            </ul>

            <h2>{"4. Armazenamento Local"}</h2>
            <p>{"Guardamos no teu navegador o conteúdo do carrinho e a confirmação de idade, para que não tenhas de os repetir em cada visita. Podes apagar estes dados a qualquer momento nas configurações do teu navegador."}</p>

            <h2>{"5. Partilha de Informações"}</h2>
            <p>{"Não vendemos, alugamos ou partilhamos as tuas informações pessoais com terceiros para fins de marketing directo sem o teu consentimento explícito."}</p>

            <h2>{"6. Os Teus Direitos"}</h2>
            <ul>
                <li>{"Aceder aos teus dados pessoais"}</li>
                <li>{"Corrigir dados inexatos ou incompletos"}</li>
                <li>{"Solicitar o apagamento dos teus dados"}</li>
                <li>{"Retirar o consentimento a qualquer momento"}</li>
            </ul>
            <p>{"Tens também o direito de apresentar reclamação à Comissão Nacional de Proteção de Dados (CNPD)."}</p>

            <h2>{"7. Contacto"}</h2>
            <p>{"Para questões de privacidade, contacta-nos através do e-mail: privacidade@steez.com"}</p>
        </LegalLayout>
    }
}
