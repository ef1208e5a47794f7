use super::forms::LeadForm;

pub const WHATSAPP_STAGE: usize = 2;

/// Detail block revealed under an active funnel stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageDetail {
  Captured { name: String, email: String },
  WelcomeEmail { name: String },
  WhatsApp { name: String },
  CrmRecord { name: String },
  FollowUp,
}

impl StageDetail {
  pub fn headline(&self) -> Option<&'static str> {
    match self {
      StageDetail::WelcomeEmail { .. } => Some("Email de Bienvenida"),
      StageDetail::WhatsApp { .. } => Some("WhatsApp Automático"),
      _ => None,
    }
  }

  pub fn body(&self) -> String {
    match self {
      StageDetail::Captured { name, email } => format!("Lead capturado: {} ({})", name, email),
      StageDetail::WelcomeEmail { name } => format!("Hola {}, gracias por tu interés en automatizar tu negocio...", name),
      StageDetail::WhatsApp { name } => format!("👋 Hola {}! Te hemos enviado información al email. ¿Tienes alguna pregunta?", name),
      StageDetail::CrmRecord { name } => name.clone(),
      StageDetail::FollowUp => "Seguimiento programado para mañana a las 10:00".to_string(),
    }
  }
}

/// The WhatsApp stage has nothing to show without a phone number.
pub fn stage_detail(index: usize, lead: &LeadForm) -> Option<StageDetail> {
  match index {
    0 => Some(StageDetail::Captured { name: lead.name.clone(), email: lead.email.clone() }),
    1 => Some(StageDetail::WelcomeEmail { name: lead.name.clone() }),
    WHATSAPP_STAGE if lead.has_phone() => Some(StageDetail::WhatsApp { name: lead.name.clone() }),
    3 => Some(StageDetail::CrmRecord { name: lead.name.clone() }),
    4 => Some(StageDetail::FollowUp),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::catalog::FUNNEL_STAGES;

  fn ana(phone: &str) -> LeadForm {
    LeadForm { name: "Ana".into(), email: "ana@x.com".into(), phone: phone.into() }
  }

  #[test]
  fn whatsapp_stage_hidden_without_phone() {
    let lead = ana("");
    let revealed: Vec<bool> = (0..FUNNEL_STAGES.len()).map(|i| stage_detail(i, &lead).is_some()).collect();
    assert_eq!(revealed, vec![true, true, false, true, true]);
    assert_eq!(FUNNEL_STAGES[WHATSAPP_STAGE].title, "WhatsApp Enviado");
  }

  #[test]
  fn whatsapp_stage_shown_with_phone() {
    let lead = ana("+34 600 000 000");
    assert_eq!(stage_detail(WHATSAPP_STAGE, &lead), Some(StageDetail::WhatsApp { name: "Ana".into() }));
  }

  #[test]
  fn details_carry_the_lead() {
    let lead = ana("");
    assert_eq!(stage_detail(0, &lead).map(|d| d.body()), Some("Lead capturado: Ana (ana@x.com)".to_string()));
    assert_eq!(stage_detail(1, &lead).and_then(|d| d.headline()), Some("Email de Bienvenida"));
    assert_eq!(stage_detail(9, &lead), None);
  }
}
