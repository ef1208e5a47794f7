use dioxus::prelude::*;

use crate::{
  components::template::{BackButton, DemoHeader},
  utils::{
    catalog::{FUNNEL_STAGES, FUNNEL_STATS},
    engine::FUNNEL_RUN,
    forms::{email_hint, LeadForm},
    funnel::{stage_detail, StageDetail},
    hooks::use_scripted_run,
  },
};

#[component]
pub fn FunnelDemo(on_back: EventHandler<()>) -> Element {
  static CSS: Asset = asset!("/assets/demo.css");

  let mut lead = use_signal(LeadForm::default);
  let funnel = use_scripted_run("funnel", FUNNEL_RUN, || ());

  let processing = funnel.is_running();
  let can_submit = !processing && lead.read().is_submittable();
  let current = funnel.progress() as usize;
  let hint = email_hint(&lead.read().email);

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "demo-page",
      BackButton { on_back },
      DemoHeader {
        icon: "📈",
        accent: "accent-emerald",
        title: "Funnel de Ventas Automatizado",
        subtitle: "Observa cómo procesamos y nutrimos cada lead automáticamente",
      }
      div {
        class: "demo-grid",
        div {
          class: "column",
          div {
            class: "card",
            h3 { "Paso 1: Captura de Lead" }
            div {
              class: "form-group",
              label { class: "form-label", "Nombre completo" }
              input {
                class: "form-input",
                r#type: "text",
                value: "{lead.read().name}",
                placeholder: "Ej: Juan Pérez",
                disabled: processing,
                oninput: move |evt| lead.write().name = evt.value(),
              }
            }
            div {
              class: "form-group",
              label { class: "form-label", "Email" }
              input {
                class: "form-input",
                r#type: "email",
                value: "{lead.read().email}",
                placeholder: "Ej: juan@empresa.com",
                disabled: processing,
                oninput: move |evt| lead.write().email = evt.value(),
              }
              {hint.map(|hint| rsx! { p { class: "field-hint", "{hint}" } })}
            }
            div {
              class: "form-group",
              label { class: "form-label", "Teléfono (opcional)" }
              input {
                class: "form-input",
                r#type: "tel",
                value: "{lead.read().phone}",
                placeholder: "Ej: +34 600 000 000",
                disabled: processing,
                oninput: move |evt| lead.write().phone = evt.value(),
              }
            }
            button {
              class: "button button-primary wide",
              disabled: !can_submit,
              onclick: move |_evt| {
                if lead.read().is_submittable() {
                  funnel.start();
                }
              },
              if processing {
                span { class: "spinner" }
                "Procesando..."
              } else {
                "📤 Enviar y Ver Magia"
              }
            }
          }
          div {
            class: "card",
            h3 { class: "card-title", "⭐ Estadísticas del Funnel" }
            div {
              class: "mini-stats",
              for (value, label) in FUNNEL_STATS.iter() {
                div {
                  key: "{label}",
                  class: "mini-stat",
                  div { class: "stat-value gradient-text", "{value}" }
                  div { class: "muted small", "{label}" }
                }
              }
            }
          }
        }
        div {
          class: "column",
          for (index, stage) in FUNNEL_STAGES.iter().enumerate() {
            {
              let active = funnel.has_started() && funnel.is_revealed(index as u32);
              let pulsing = processing && index == current;
              let detail = if active { stage_detail(index, &lead.read()) } else { None };
              let icon_class = if pulsing {
                format!("demo-icon small pulse {}", stage.accent)
              } else {
                format!("demo-icon small {}", stage.accent)
              };
              rsx! {
                div {
                  key: "{stage.title}",
                  class: if active { "card stage stage-active" } else { "card stage" },
                  div {
                    class: "stage-head",
                    div {
                      class: icon_class,
                      "{stage.icon}"
                    }
                    h4 { "{stage.title}" }
                    if active {
                      span { class: "text-emerald stage-check", "✓" }
                    }
                  }
                  {detail.map(|detail| rsx! { StageDetailView { detail } })}
                }
              }
            }
          }
          if funnel.is_done() {
            div {
              class: "card card-highlight",
              h3 { "⚡ ¡Proceso Completado!" }
              p { "Todo esto sucedió automáticamente en segundos. Sin intervención humana, sin errores, disponible 24/7." }
              div { class: "bold text-emerald", "3x Más Conversiones" }
              p { class: "muted small", "Los funnels automatizados convierten 3 veces más que procesos manuales" }
            }
          }
        }
      }
    }
  }
}

#[component]
fn StageDetailView(detail: StageDetail) -> Element {
  let body = detail.body();

  rsx! {
    div {
      class: "stage-detail",
      {match &detail {
        StageDetail::CrmRecord { .. } => rsx! {
          div {
            class: "crm-record",
            span { class: "muted", "Nombre:" } span { "{body}" }
            span { class: "muted", "Estado:" } span { class: "text-emerald", "Nuevo Lead" }
            span { class: "muted", "Puntuación:" } span { "⭐⭐⭐" }
          }
        },
        StageDetail::FollowUp => rsx! {
          div { class: "follow-up", span { "⏰" } span { "{body}" } }
        },
        _ => rsx! {
          {detail.headline().map(|headline| rsx! { div { class: "small text-cyan", "{headline}" } })}
          p { class: "small", "{body}" }
        },
      }}
    }
  }
}
