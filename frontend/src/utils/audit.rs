use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Error,
  Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
  #[serde(rename = "type")]
  pub severity: Severity,
  pub message: String,
}

/// Canned audit result. The serialized shape is what a real audit service would return.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
  pub seo_score: u32,
  pub mobile_score: u32,
  pub load_time: f64,
  #[serde(rename = "errors")]
  pub findings: Vec<Finding>,
  pub recommendations: Vec<String>,
}

impl AuditReport {
  pub fn canned() -> Self {
    let finding = |severity, message: &str| Finding { severity, message: message.to_string() };
    AuditReport {
      seo_score: 78,
      mobile_score: 85,
      load_time: 2.3,
      findings: vec![
        finding(Severity::Error, "Falta meta descripción en 3 páginas"),
        finding(Severity::Warning, "Imágenes sin atributo ALT: 12"),
        finding(Severity::Error, "Enlaces rotos detectados: 5"),
      ],
      recommendations: vec![
        "Optimizar imágenes (reducir 45% del peso)".to_string(),
        "Implementar caché del navegador".to_string(),
        "Añadir meta descripciones faltantes".to_string(),
        "Mejorar velocidad de servidor (actualmente 1.2s)".to_string(),
      ],
    }
  }
}
