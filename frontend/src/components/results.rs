#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{gauge::CircularProgress, toast::show_toast},
  utils::audit::{AuditReport, Severity},
};

pub const REPORT_TOAST_ID: &str = "report-toast";

#[component]
pub fn AuditResults(report: AuditReport) -> Element {
  rsx! {
    div {
      class: "results",
      div {
        class: "score-grid",
        div {
          class: "card center",
          CircularProgress { value: report.seo_score as f64 }
          h3 { "Puntuación SEO" }
          p { class: "muted", "Necesita mejoras" }
        }
        div {
          class: "card center",
          CircularProgress { value: report.mobile_score as f64 }
          h3 { "Optimización Móvil" }
          p { class: "muted", "Buena optimización" }
        }
        div {
          class: "card center",
          div { class: "big-number gradient-text", "{report.load_time}s" }
          h3 { "Tiempo de Carga" }
          p { class: "muted", "Promedio: 3.5s" }
        }
      },
      div {
        class: "card",
        h3 { class: "card-title", span { class: "text-rose", "⚠" } "Errores Encontrados" }
        for (idx, finding) in report.findings.iter().enumerate() {
          div {
            key: "finding{idx}",
            class: "list-row",
            if finding.severity == Severity::Error {
              span { class: "text-rose", "✕" }
            } else {
              span { class: "text-amber", "⚠" }
            }
            span { "{finding.message}" }
          }
        }
      },
      div {
        class: "card",
        h3 { class: "card-title", span { class: "text-emerald", "✓" } "Recomendaciones Prioritarias" }
        for (idx, recommendation) in report.recommendations.iter().enumerate() {
          div {
            key: "rec{idx}",
            class: "list-row",
            span { class: "badge-number", {(idx + 1).to_string()} }
            span { "{recommendation}" }
          }
        }
      },
      div {
        class: "card card-highlight",
        span { class: "highlight-icon", "⚡" }
        div {
          h3 { "Normalmente esto cuesta €200-500 y tarda días" }
          p { "Con nuestra automatización, lo tienes en 30 segundos. Imagina aplicar esto a todos tus clientes potenciales automáticamente." }
          button {
            class: "button button-primary",
            onclick: move |_evt| show_toast(REPORT_TOAST_ID),
            "✉ Recibir informe completo por email"
          }
        }
      }
    }
  }
}
