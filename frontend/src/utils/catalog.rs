use serde::Serialize;

use crate::PageId;

pub struct CaseCard {
  pub page: PageId,
  pub icon: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  pub accent: &'static str,
  pub savings: &'static str,
}

pub static CASE_CARDS: [CaseCard; 4] = [
  CaseCard {
    page: PageId::Audit,
    icon: "🌐",
    title: "Auditoría Web Instantánea",
    description: "Análisis completo de SEO, rendimiento y usabilidad en 30 segundos",
    accent: "accent-cyan",
    savings: "€200-500 y días de espera",
  },
  CaseCard {
    page: PageId::Chatbot,
    icon: "💬",
    title: "Chatbot Inteligente 24/7",
    description: "Atención al cliente automatizada que nunca duerme",
    accent: "accent-violet",
    savings: "€2,000-3,000/mes en personal",
  },
  CaseCard {
    page: PageId::Funnel,
    icon: "📈",
    title: "Funnel de Ventas Automatizado",
    description: "Convierte leads en clientes mientras duermes",
    accent: "accent-emerald",
    savings: "3x más conversiones",
  },
  CaseCard {
    page: PageId::Voice,
    icon: "🎙️",
    title: "Clones de Voz e IA",
    description: "Contenido de audio profesional ilimitado sin locutor",
    accent: "accent-pink",
    savings: "€300-500 por locución",
  },
];

/// (value, label)
pub static HOME_STATS: [(&str, &str); 4] = [
  ("500+", "Empresas Automatizadas"),
  ("€2M+", "Ahorrado en Costes"),
  ("24/7", "Disponibilidad"),
  ("95%", "Satisfacción"),
];

pub static HOME_PERKS: [&str; 3] = ["100% Gratis", "Resultados Instantáneos", "Sin Registro"];

pub struct AuditCheck {
  pub label: &'static str,
  pub threshold: u32,
}

pub static AUDIT_CHECKS: [AuditCheck; 4] = [
  AuditCheck { label: "Analizando SEO y meta tags...", threshold: 21 },
  AuditCheck { label: "Midiendo velocidad de carga...", threshold: 41 },
  AuditCheck { label: "Verificando enlaces y errores...", threshold: 61 },
  AuditCheck { label: "Generando recomendaciones...", threshold: 81 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingTier {
  pub plan: &'static str,
  pub price: &'static str,
  pub features: &'static str,
}

pub static PRICING_TIERS: [PricingTier; 3] = [
  PricingTier { plan: "Básico", price: "€299/mes", features: "Chatbot + Email" },
  PricingTier { plan: "Pro", price: "€599/mes", features: "Chatbot + Email + WhatsApp + CRM" },
  PricingTier { plan: "Enterprise", price: "€999/mes", features: "Todo incluido + Personalización" },
];

pub static CALENDAR_SLOTS: [&str; 3] = ["Lunes 15:00", "Martes 10:30", "Miércoles 16:00"];

pub static QUICK_QUESTIONS: [&str; 4] = [
  "¿Cuál es el horario?",
  "¿Cuánto cuesta?",
  "Quiero agendar una cita",
  "¿Tienen servicio a domicilio?",
];

pub const LIVE_CONSULTATIONS_START: u32 = 1_247;

/// (label, shown value, gauge value)
pub static CHAT_STATS: [(&str, &str, f64); 2] = [
  ("Tasa de respuesta", "98%", 98.0),
  ("Satisfacción", "4.8/5", 96.0),
];

pub static CHAT_PERKS: [&str; 3] = ["Respuestas instantáneas", "Nunca pierde un lead", "Aprende de cada conversación"];

pub static INTEGRATIONS: [(&str, &str); 6] = [
  ("✉️", "Email"),
  ("📞", "Teléfono"),
  ("📅", "Calendario"),
  ("📱", "Móvil"),
  ("💬", "Chat"),
  ("📊", "Analítica"),
];

pub struct FunnelStage {
  pub icon: &'static str,
  pub title: &'static str,
  pub accent: &'static str,
}

pub static FUNNEL_STAGES: [FunnelStage; 5] = [
  FunnelStage { icon: "✉️", title: "Captura de Lead", accent: "accent-emerald" },
  FunnelStage { icon: "📤", title: "Email Automático", accent: "accent-cyan" },
  FunnelStage { icon: "📞", title: "WhatsApp Enviado", accent: "accent-violet" },
  FunnelStage { icon: "📊", title: "Añadido a CRM", accent: "accent-pink" },
  FunnelStage { icon: "⏰", title: "Seguimiento Programado", accent: "accent-amber" },
];

pub static FUNNEL_STATS: [(&str, &str); 4] = [
  ("847", "Leads este mes"),
  ("34%", "Tasa conversión"),
  ("2.3min", "Tiempo respuesta"),
  ("€45K", "Ventas generadas"),
];

pub struct VoiceSample {
  pub name: &'static str,
  pub text: &'static str,
  pub duration: &'static str,
}

pub static VOICE_SAMPLES: [VoiceSample; 3] = [
  VoiceSample {
    name: "Mensaje de Bienvenida",
    text: "Bienvenido a iAgents Digital, donde transformamos tu negocio con automatización inteligente.",
    duration: "0:08",
  },
  VoiceSample {
    name: "Respuesta WhatsApp",
    text: "Hola! Gracias por contactarnos. Hemos recibido tu mensaje y te responderemos en breve.",
    duration: "0:06",
  },
  VoiceSample {
    name: "Locución Publicitaria",
    text: "¿Cansado de perder clientes por responder tarde? Con nuestro chatbot IA, nunca más perderás una oportunidad.",
    duration: "0:10",
  },
];

pub static VOICE_TRADITIONAL: [&str; 4] = [
  "€300-500 por locución",
  "2-5 días de entrega",
  "Cambios cuestan extra",
  "Limitado a horarios",
];

pub static VOICE_AI: [&str; 4] = [
  "€0 por locución adicional",
  "Instantáneo (segundos)",
  "Infinitas variaciones gratis",
  "24/7 disponible",
];

pub static VOICE_USE_CASES: [(&str, &str); 4] = [
  ("📞", "Mensajes de voz WhatsApp"),
  ("✉️", "Locuciones para videos"),
  ("💬", "Respuestas automáticas"),
  ("📊", "Podcasts y webinars"),
];

pub struct Service {
  pub id: &'static str,
  pub name: &'static str,
  pub price: &'static str,
  pub discount: Option<&'static str>,
}

pub static SERVICES: [Service; 5] = [
  Service { id: "audit", name: "Auditoría Web", price: "€299", discount: None },
  Service { id: "chatbot", name: "Chatbot 24/7", price: "€599/mes", discount: None },
  Service { id: "funnel", name: "Funnel Completo", price: "€899/mes", discount: None },
  Service { id: "voice", name: "Clone de Voz", price: "€399", discount: None },
  Service { id: "bundle", name: "Pack Completo", price: "€1,499/mes", discount: Some("25% OFF") },
];

pub fn service(id: &str) -> Option<&'static Service> {
  SERVICES.iter().find(|s| s.id == id)
}

impl Service {
  /// option text in the contact form dropdown
  pub fn option_label(&self) -> String {
    match self.discount {
      Some(discount) => format!("{} - {} {}", self.name, self.price, discount),
      None => format!("{} - {}", self.name, self.price),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_demo_page_has_a_card() {
    let pages: Vec<PageId> = CASE_CARDS.iter().map(|c| c.page).collect();
    assert_eq!(pages, vec![PageId::Audit, PageId::Chatbot, PageId::Funnel, PageId::Voice]);
  }

  #[test]
  fn bundle_is_the_only_discounted_service() {
    let discounted: Vec<&str> = SERVICES.iter().filter(|s| s.discount.is_some()).map(|s| s.id).collect();
    assert_eq!(discounted, vec!["bundle"]);
    assert_eq!(service("bundle").map(|s| s.option_label()), Some("Pack Completo - €1,499/mes 25% OFF".to_string()));
    assert_eq!(service("audit").map(|s| s.option_label()), Some("Auditoría Web - €299".to_string()));
    assert!(service("unknown").is_none());
  }

  #[test]
  fn audit_checks_use_run_thresholds() {
    let checks: Vec<u32> = AUDIT_CHECKS.iter().map(|c| c.threshold).collect();
    assert_eq!(checks, crate::utils::engine::AUDIT_RUN.thresholds.to_vec());
  }
}
