//! Static copy shown in each section

pub const PRACTICE_NAME: &str = "Dr. Claudio Fher";
pub const PRACTICE_TAGLINE: &str = "Medicina de Precisão & Bioengenharia";

/// A titled block of copy (pillar, service card, approach step)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// Headline split into its plain and highlighted halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub lead: &'static str,
    pub accent: &'static str,
    pub intro: &'static str,
}

pub const HERO: Headline = Headline {
    lead: "Engenharia a Serviço da Vida.",
    accent: "Medicina para o seu Futuro.",
    intro: "Soluções médicas de vanguarda, projetadas com a precisão da bioengenharia para restaurar sua máxima performance e bem-estar.",
};

pub const HERO_CTA: &str = "Agende uma Avaliação Inovadora";

pub const ABOUT: Headline = Headline {
    lead: "Dr. Claudio Fher:",
    accent: "Médico por vocação, Bioengenheiro por paixão.",
    intro: "Uma jornada única que conecta a empatia da medicina com a precisão da engenharia, criando soluções inovadoras para resolver os problemas mais complexos de saúde e bem-estar.",
};

pub const PILLARS: [Card; 3] = [
    Card {
        title: "Medicina Regenerativa",
        body: "Terapias celulares avançadas para regeneração tecidual e restauração funcional completa.",
    },
    Card {
        title: "Diagnóstico de Precisão",
        body: "Análises computacionais avançadas para diagnósticos mais precisos e tratamentos direcionados.",
    },
    Card {
        title: "Soluções Personalizadas",
        body: "Dispositivos e protocolos únicos, desenvolvidos especificamente para cada paciente.",
    },
];

pub const SERVICES: Headline = Headline {
    lead: "Tratamentos",
    accent: "Projetados para Você",
    intro: "Cada solução é meticulosamente desenvolvida combinando conhecimento médico avançado com tecnologia de bioengenharia de última geração.",
};

pub const SERVICE_CARDS: [Card; 4] = [
    Card {
        title: "Terapia Regenerativa Celular",
        body: "Regeneração tecidual avançada usando células-tronco e fatores de crescimento bioengenheirados.",
    },
    Card {
        title: "Análise Biomecânica Computadorizada",
        body: "Avaliação 3D completa do movimento e função corporal com tecnologia de captura avançada.",
    },
    Card {
        title: "Dispositivos Médicos Sob Medida",
        body: "Próteses e dispositivos personalizados desenvolvidos com modelagem 3D e materiais biocompatíveis.",
    },
    Card {
        title: "Otimização Metabólica com Bio-sensores",
        body: "Monitoramento contínuo e otimização metabólica através de sensores inteligentes e IA.",
    },
];

pub const APPROACH: Headline = Headline {
    lead: "Nossa Abordagem:",
    accent: "Precisa, Preditiva, Personalizada",
    intro: "Um processo metodológico que combina análise científica rigorosa com cuidado humano individualizado.",
};

pub const APPROACH_STEPS: [Card; 4] = [
    Card {
        title: "Análise 360°",
        body: "Diagnóstico profundo utilizando exames avançados, análise biomecânica e avaliação genética personalizada.",
    },
    Card {
        title: "Design da Solução",
        body: "Desenvolvimento de um plano de tratamento único, combinando terapias convencionais e inovações biotecnológicas.",
    },
    Card {
        title: "Implementação e Acompanhamento",
        body: "Execução precisa do protocolo com monitoramento contínuo através de dispositivos inteligentes.",
    },
    Card {
        title: "Otimização Contínua",
        body: "Ajustes precisos baseados em dados reais, garantindo evolução constante e resultados superiores.",
    },
];

pub const TESTIMONIALS_HEADLINE: Headline = Headline {
    lead: "A Engenharia que",
    accent: "Transforma Vidas",
    intro: "Histórias reais de transformação através da medicina de precisão e bioengenharia avançada.",
};

pub const CONTACT: Headline = Headline {
    lead: "Dê o primeiro passo.",
    accent: "Projete sua nova versão.",
    intro: "Inicie sua jornada para uma vida com mais saúde, performance e bem-estar através da medicina de precisão.",
};

pub const FORM_TITLE: &str = "Agende sua Consulta Inicial";
pub const SUBMIT_LABEL: &str = "Enviar e Iniciar minha Jornada";

pub const ADDRESS: [&str; 3] = [
    "Clínica de Bioengenharia Médica",
    "Rua da Inovação, 1000 - Vila Madalena",
    "São Paulo, SP - 05449-000",
];

pub const PHONE: &str = "(11) 3333-4444";
pub const WHATSAPP: &str = "(11) 99999-8888";
pub const EMAIL: &str = "contato@drfher.com.br";
pub const EMAIL_NOTE: &str = "Respondemos em até 24h";

pub const OPENING_HOURS: [&str; 3] = [
    "Segunda a Sexta: 8h às 18h",
    "Sábado: 8h às 12h",
    "Domingo: Emergências",
];

pub const FIRST_CONSULTATION: Card = Card {
    title: "Primeira Consulta",
    body: "Avaliação completa de 90 minutos incluindo análise biomecânica computadorizada.",
};

pub const FOOTER: &str = "© 2025 Dr. Claudio Fher. Todos os direitos reservados.";
