//! Per-language wording of the consolidation report prompt.
//!
//! The three records share one shape: the same eleven sections in the same
//! order, each written entirely in its own language. Rendering lives in
//! [`super::compose`]; nothing here has behaviour.

use crate::language::LanguageTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Context,
    Objectives,
    Risks,
    UseCases,
    Integrations,
    OpenQuestions,
    Constraints,
    Assumptions,
    NextSteps,
    Observations,
    OperationalData,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 11] = [
        SectionKind::Context,
        SectionKind::Objectives,
        SectionKind::Risks,
        SectionKind::UseCases,
        SectionKind::Integrations,
        SectionKind::OpenQuestions,
        SectionKind::Constraints,
        SectionKind::Assumptions,
        SectionKind::NextSteps,
        SectionKind::Observations,
        SectionKind::OperationalData,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::Context => "📌",
            SectionKind::Objectives => "🌟",
            SectionKind::Risks => "⚠️",
            SectionKind::UseCases => "📦",
            SectionKind::Integrations => "🔗",
            SectionKind::OpenQuestions => "❓",
            SectionKind::Constraints => "🔒",
            SectionKind::Assumptions => "🧩",
            SectionKind::NextSteps => "🔄",
            SectionKind::Observations => "📝",
            SectionKind::OperationalData => "📊",
        }
    }

    /// Sections the model must reproduce in full rather than summarize.
    pub fn keeps_details(self) -> bool {
        matches!(self, SectionKind::Context | SectionKind::Integrations)
    }

    /// Section that must print the missing-information literal for gaps.
    pub fn requires_fallback(self) -> bool {
        self == SectionKind::OperationalData
    }
}

#[derive(Debug)]
pub struct Section {
    pub kind: SectionKind,
    pub title: &'static str,
    pub bulleted: bool,
    pub directives: &'static [&'static str],
}

#[derive(Debug)]
pub struct ReportTemplate {
    pub language_lock: &'static str,
    pub client_heading: &'static str,
    pub sources_intro: &'static str,
    pub discovery_heading: &'static str,
    pub transcript_heading: &'static str,
    pub notes_heading: &'static str,
    pub merge_instruction: &'static str,
    pub bullets_hint: &'static str,
    pub keep_details: &'static str,
    pub fallback_instruction: &'static str,
    pub missing_info: &'static str,
    pub sections: [Section; 11],
}

pub fn template_for(language: LanguageTag) -> &'static ReportTemplate {
    match language {
        LanguageTag::Portuguese => &PORTUGUESE,
        LanguageTag::Spanish => &SPANISH,
        LanguageTag::English => &ENGLISH,
    }
}

pub static PORTUGUESE: ReportTemplate = ReportTemplate {
    language_lock: "🛑 IMPORTANTE: Responda apenas em **português**. Não use outros idiomas.",
    client_heading: "Projeto com o cliente",
    sources_intro: "Abaixo estão os conteúdos de três fontes:",
    discovery_heading: "📂 Insights do discovery técnico",
    transcript_heading: "💬 Insights da transcrição da call",
    notes_heading: "📌 Observações diretas do Solutions Consultant",
    merge_instruction: "Agora, una essas informações em um único relatório estruturado, evitando duplicações e organizando os tópicos com o máximo de clareza e objetividade.",
    bullets_hint: "(em bullets)",
    keep_details: "🚫 **Não resuma**; preserve todos os detalhes disponíveis nas fontes.",
    fallback_instruction: "🔥 Transcreva fielmente; se faltar algo, exiba",
    missing_info: "Informação não fornecida nas fontes.",
    sections: [
        Section {
            kind: SectionKind::Context,
            title: "Contexto do projeto",
            bulleted: false,
            directives: &[
                "Descreva de forma completa e detalhada o modelo de operação atual da empresa.",
                "Inclua informações como: modelo de negócios, número de centros de distribuição, número de vendedores, ticket médio, volume médio de pedidos, processos operacionais atuais, canais de venda (WhatsApp, loja online, televendas), formas de pagamento (boleto antecipado, boleto faturado, PIX, cartão), clusters de clientes, tabelas de preços, regras de promoções (combos, leve X pague Y, descontos progressivos, cupons), condições comerciais, controle de estoque (estoque por CD, disponibilidade restrita), regras de corte (dias/horários), sistemas envolvidos (Mercanet, Infracommerce, SAP, Salesforce, gateways de pagamento, APIs internas) e qualquer outro dado relevante.",
                "📌 Dados quantitativos (nº de pedidos, clientes, SKUs, volumes, ticket médio) devem estar aqui.",
            ],
        },
        Section {
            kind: SectionKind::Objectives,
            title: "Objetivos principais do projeto",
            bulleted: false,
            directives: &[
                "Use bullets com verbos de ação fortes (Digitalizar, Automatizar, Viabilizar, Expandir, Aumentar, Implementar, Reduzir, Integrar).",
                "Relacione cada objetivo a resultados práticos (eficiência, engajamento, automação, expansão).",
                "Sempre que possível, conecte os objetivos às fases do projeto (fase 1 = autosserviço, fase 2 = commerce).",
                "Evite frases genéricas como “melhorar processos”.",
            ],
        },
        Section {
            kind: SectionKind::Risks,
            title: "Riscos e gaps identificados",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::UseCases,
            title: "Casos de uso propostos ou discutidos",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Integrations,
            title: "Integrações mencionadas ou necessárias",
            bulleted: true,
            directives: &[
                "Descreva todos os sistemas (Mercanet, Infracommerce, gateways, ERPs, APIs internas).",
                "Detalhe quais dados devem ser sincronizados ou expostos (catálogo, preços, estoque, status de pedidos, cadastro de clientes, dados de representantes).",
                "Informe métodos de integração (API/REST, CSV, Webhook).",
                "Se houver requisitos de teste, homologação, segurança ou autenticação, inclua-os.",
            ],
        },
        Section {
            kind: SectionKind::OpenQuestions,
            title: "Dúvidas ou pontos pendentes levantados na call",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Constraints,
            title: "Restrições técnicas ou comerciais citadas",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Assumptions,
            title: "Premissas acordadas entre as partes",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::NextSteps,
            title: "Próximos passos mencionados ou sugeridos",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Observations,
            title: "Observações gerais ou insights adicionais relevantes",
            bulleted: false,
            directives: &[],
        },
        Section {
            kind: SectionKind::OperationalData,
            title: "Dados operacionais e regras comerciais identificadas",
            bulleted: false,
            directives: &[
                "Consolide catálogo de produtos, SKUs, tipos de clientes, clusters, tabelas de preços, condições comerciais, regras de promoções, formas de pagamento, métodos de corte, controle de estoque, volumes e ticket médio.",
                "Descreva regras de checkout: limitações de pagamento, pré-requisitos de compra, políticas de crédito, exigências de faturamento ou pagamento antecipado.",
                "✅ **Formato de “painel operacional”** (bullets ou tabela).",
            ],
        },
    ],
};

pub static SPANISH: ReportTemplate = ReportTemplate {
    language_lock: "🛑 IMPORTANTE: Responde solo en **español**. No utilices otros idiomas.",
    client_heading: "Proyecto con el cliente",
    sources_intro: "A continuación se presentan los contenidos de tres fuentes:",
    discovery_heading: "📂 Insights del discovery técnico",
    transcript_heading: "💬 Insights de la transcripción de la llamada",
    notes_heading: "📌 Observaciones directas del Solutions Consultant",
    merge_instruction: "Ahora, une esta información en un único informe estructurado, evitando duplicaciones y organizando los temas con la mayor claridad y objetividad posible.",
    bullets_hint: "(en bullets)",
    keep_details: "🚫 **No resumas**; conserva todos los detalles disponibles en las fuentes.",
    fallback_instruction: "🔥 Transcribe fielmente; si falta algo, muestra",
    missing_info: "Información no proporcionada en las fuentes.",
    sections: [
        Section {
            kind: SectionKind::Context,
            title: "Contexto del proyecto",
            bulleted: false,
            directives: &[
                "Describe en detalle el modelo operativo actual de la empresa.",
                "Incluye: modelo de negocio, número de centros de distribución, número de vendedores, ticket promedio, volumen de pedidos, procesos vigentes, canales de venta (WhatsApp, tienda online, televentas), formas de pago (boleto anticipado, boleto facturado, PIX, tarjeta), grupos de clientes, tablas de precios, reglas de promociones (combos, lleva X paga Y, descuentos progresivos, cupones), condiciones comerciales, control de inventario (por CD, disponibilidad restringida), reglas de corte (días/horarios), sistemas involucrados (Mercanet, Infracommerce, SAP, Salesforce, pasarelas de pago, APIs internas) y cualquier otro dato relevante.",
                "📌 Si hay datos cuantitativos (n.º de pedidos, clientes, SKUs, volúmenes, ticket promedio), inclúyelos aquí.",
            ],
        },
        Section {
            kind: SectionKind::Objectives,
            title: "Objetivos principales del proyecto",
            bulleted: false,
            directives: &[
                "Usa bullets con verbos de acción (Digitalizar, Automatizar, Viabilizar, Expandir, Aumentar, Implementar, Reducir, Integrar).",
                "Relaciona cada objetivo con resultados prácticos (eficiencia, engagement, automatización, expansión).",
                "Siempre que sea posible, conecta los objetivos con las fases del proyecto (fase 1 = autoservicio, fase 2 = commerce).",
                "Evita frases genéricas como “mejorar procesos”.",
            ],
        },
        Section {
            kind: SectionKind::Risks,
            title: "Riesgos y brechas identificadas",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::UseCases,
            title: "Casos de uso propuestos o discutidos",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Integrations,
            title: "Integraciones mencionadas o necesarias",
            bulleted: true,
            directives: &[
                "Describe todos los sistemas (Mercanet, Infracommerce, pasarelas, ERPs, APIs internas).",
                "Detalla qué datos deben sincronizarse o exponerse (catálogo, precios, inventario, estado de pedidos, registro de clientes, datos de representantes).",
                "Indica los métodos de integración (API/REST, CSV, Webhook).",
                "Si hay requisitos de prueba, homologación, seguridad o autenticación, inclúyelos.",
            ],
        },
        Section {
            kind: SectionKind::OpenQuestions,
            title: "Dudas o puntos pendientes planteados en la llamada",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Constraints,
            title: "Restricciones técnicas o comerciales mencionadas",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Assumptions,
            title: "Supuestos acordados entre las partes",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::NextSteps,
            title: "Próximos pasos mencionados o sugeridos",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Observations,
            title: "Observaciones generales o insights adicionales",
            bulleted: false,
            directives: &[],
        },
        Section {
            kind: SectionKind::OperationalData,
            title: "Datos operativos y reglas comerciales identificadas",
            bulleted: false,
            directives: &[
                "Consolida catálogo, SKUs, tipos de clientes, clusters, tablas de precios, condiciones comerciales, reglas de promociones, formas de pago, métodos de corte, control de inventario, volúmenes y ticket promedio.",
                "Describe reglas de checkout: limitaciones de pago, prerrequisitos de compra, políticas de crédito, requisitos de facturación o pago anticipado.",
                "✅ **Formato de “panel operativo”** (bullets o tabla).",
            ],
        },
    ],
};

pub static ENGLISH: ReportTemplate = ReportTemplate {
    language_lock: "🛑 IMPORTANT: Respond only in **English**. Do not use any other language.",
    client_heading: "Project with client",
    sources_intro: "Below are the contents from three sources:",
    discovery_heading: "📂 Insights from the technical discovery",
    transcript_heading: "💬 Insights from the call transcript",
    notes_heading: "📌 Consultant’s direct notes",
    merge_instruction: "Now, merge this information into a single structured report, avoiding duplication and organizing the topics as clearly and objectively as possible.",
    bullets_hint: "(in bullets)",
    keep_details: "🚫 **Do not summarize**; preserve every detail available in the sources.",
    fallback_instruction: "🔥 Transcribe exactly as in the sources; if something is missing, write",
    missing_info: "Information not provided in the sources.",
    sections: [
        Section {
            kind: SectionKind::Context,
            title: "Project context",
            bulleted: false,
            directives: &[
                "Describe in full detail the company’s current operating model.",
                "Include: business model, number of distribution centers, number of sales reps, average ticket, order volume, current processes, sales channels (WhatsApp, online store, telesales), payment methods (boleto antecipado, boleto faturado, PIX, credit card), customer clusters, price tables, promotion rules (combos, buy X pay Y, tiered discounts, coupons), commercial conditions, inventory control (by DC, restricted availability), cut-off rules (days/hours), systems involved (Mercanet, Infracommerce, SAP, Salesforce, payment gateways, internal APIs) and any other relevant data.",
                "📌 If quantitative data exists (order count, customers, SKUs, volumes, average ticket), include it here.",
            ],
        },
        Section {
            kind: SectionKind::Objectives,
            title: "Main objectives of the project",
            bulleted: false,
            directives: &[
                "Use bullets with strong action verbs (Digitize, Automate, Enable, Expand, Increase, Implement, Reduce, Integrate).",
                "Link each objective to practical outcomes (efficiency, engagement, automation, expansion).",
                "When possible, tie objectives to project phases (phase 1 = self-service, phase 2 = commerce).",
                "Avoid generic phrases like “improve processes”.",
            ],
        },
        Section {
            kind: SectionKind::Risks,
            title: "Identified risks and gaps",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::UseCases,
            title: "Proposed or discussed use cases",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Integrations,
            title: "Mentioned or required integrations",
            bulleted: true,
            directives: &[
                "Describe all systems (Mercanet, Infracommerce, gateways, ERPs, internal APIs).",
                "Detail which data must be synchronized or exposed (catalog, prices, inventory, order status, customer records, sales rep data).",
                "State the integration methods (API/REST, CSV, Webhook).",
                "If there are testing, certification, security or authentication requirements, include them.",
            ],
        },
        Section {
            kind: SectionKind::OpenQuestions,
            title: "Open questions or pending issues raised in the call",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Constraints,
            title: "Technical or commercial constraints mentioned",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Assumptions,
            title: "Agreed assumptions between the parties",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::NextSteps,
            title: "Suggested or mentioned next steps",
            bulleted: true,
            directives: &[],
        },
        Section {
            kind: SectionKind::Observations,
            title: "General observations or additional insights",
            bulleted: false,
            directives: &[],
        },
        Section {
            kind: SectionKind::OperationalData,
            title: "Operational data and commercial rules identified",
            bulleted: false,
            directives: &[
                "Consolidate catalog, SKUs, customer types, clusters, price tables, commercial conditions, promotion rules, payment methods, DC cut-off rules, inventory controls, volumes and average ticket.",
                "Describe checkout rules: payment limitations, purchase prerequisites, credit policies, billing or advance payment requirements.",
                "✅ **This must be an “operational panel”** (bullets or table).",
            ],
        },
    ],
};
