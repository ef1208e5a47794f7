use dioxus::prelude::*;

use crate::{
  components::{
    gauge::ProgressBar,
    results::{AuditResults, REPORT_TOAST_ID},
    template::{BackButton, DemoHeader},
    toast::SuccessToast,
  },
  utils::{
    audit::AuditReport,
    catalog::AUDIT_CHECKS,
    engine::AUDIT_RUN,
    forms::{is_present, url_hint},
    hooks::use_scripted_run,
  },
};

#[component]
pub fn AuditDemo(on_back: EventHandler<()>) -> Element {
  static CSS: Asset = asset!("/assets/demo.css");

  let mut url = use_signal(String::new);
  let audit = use_scripted_run("audit", AUDIT_RUN, AuditReport::canned);

  let analyzing = audit.is_running();
  let can_start = !analyzing && is_present(&url.read());
  let progress = audit.progress();
  let hint = url_hint(&url.read());

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "demo-page",
      BackButton { on_back },
      DemoHeader {
        icon: "🌐",
        accent: "accent-cyan",
        title: "Auditoría Web Instantánea",
        subtitle: "Análisis completo de tu sitio web en menos de 30 segundos",
      }
      div {
        class: "card narrow",
        label { class: "form-label", "Introduce la URL de tu sitio web" }
        div {
          class: "input-row",
          input {
            class: "form-input",
            r#type: "url",
            value: "{url}",
            placeholder: "https://ejemplo.com",
            disabled: analyzing,
            oninput: move |evt| url.set(evt.value()),
          }
          button {
            class: "button button-primary",
            disabled: !can_start,
            onclick: move |_evt| {
              if is_present(&url.read()) {
                audit.start();
              }
            },
            if analyzing {
              span { class: "spinner" }
              "Analizando..."
            } else {
              "⚡ Analizar"
            }
          }
        }
        {hint.map(|hint| rsx! { p { class: "field-hint", "{hint}" } })}
      }
      if analyzing {
        div {
          class: "card narrow",
          div {
            class: "progress-header",
            span { class: "muted small", "Analizando tu sitio web..." }
            span { class: "text-cyan mono small", "{progress}%" }
          }
          ProgressBar { value: progress as f64 }
          div {
            class: "checklist",
            for check in AUDIT_CHECKS.iter() {
              div {
                key: "{check.threshold}",
                class: if audit.is_revealed(check.threshold) { "check check-done" } else { "check" },
                "✓ {check.label}"
              }
            }
          }
        }
      }
      {audit.result().map(|report| rsx! { AuditResults { report } })}
      SuccessToast { id: REPORT_TOAST_ID, content: "¡Listo! Te enviaremos el informe completo por email." }
    }
  }
}
