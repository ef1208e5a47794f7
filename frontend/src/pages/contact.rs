use dioxus::{logger::tracing::{error, info}, prelude::*};

use crate::{
  components::{
    template::BackButton,
    toast::{show_toast, ErrorToast, SuccessToast},
  },
  utils::{
    catalog::{service, SERVICES},
    config::WHATSAPP_URL,
    forms::{email_hint, ContactForm},
    links::open_external,
    roi::RoiEstimate,
  },
};

const PROPOSAL_TOAST_ID: &str = "proposal-toast";
const WHATSAPP_TOAST_ID: &str = "whatsapp-toast";

#[component]
pub fn ContactPage(on_back: EventHandler<()>) -> Element {
  static CSS: Asset = asset!("/assets/demo.css");

  let mut form = use_signal(ContactForm::default);
  let roi = use_memo(move || RoiEstimate::from_clients(&form.read().clients));

  let can_submit = form.read().is_submittable();
  let hint = email_hint(&form.read().email);

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "demo-page",
      BackButton { on_back },
      div {
        class: "demo-header",
        h2 {
          "¿Listo para "
          span { class: "gradient-text", "Automatizar tu Negocio" }
          "?"
        }
        p { "Completa el formulario y recibe una propuesta personalizada en 24 horas" }
      }
      div {
        class: "demo-grid",
        div {
          class: "card",
          h3 { "Datos de Contacto" }
          div {
            class: "form-group",
            label { class: "form-label", "Nombre completo *" }
            input {
              class: "form-input",
              r#type: "text",
              value: "{form.read().name}",
              oninput: move |evt| form.write().name = evt.value(),
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", "Email *" }
            input {
              class: "form-input",
              r#type: "email",
              value: "{form.read().email}",
              oninput: move |evt| form.write().email = evt.value(),
            }
            {hint.map(|hint| rsx! { p { class: "field-hint", "{hint}" } })}
          }
          div {
            class: "form-group",
            label { class: "form-label", "Teléfono / WhatsApp" }
            input {
              class: "form-input",
              r#type: "tel",
              value: "{form.read().phone}",
              oninput: move |evt| form.write().phone = evt.value(),
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", "Servicio de Interés" }
            select {
              class: "form-input",
              value: "{form.read().service}",
              onchange: move |evt| form.write().service = evt.value(),
              for item in SERVICES.iter() {
                option {
                  key: "{item.id}",
                  value: "{item.id}",
                  selected: form.read().service == item.id,
                  {item.option_label()}
                }
              }
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", "¿Cuántos clientes atiendes al mes?" }
            input {
              class: "form-input",
              r#type: "number",
              value: "{form.read().clients}",
              placeholder: "Ej: 100",
              oninput: move |evt| form.write().clients = evt.value(),
            }
          }
          button {
            class: "button button-primary wide large",
            disabled: !can_submit,
            onclick: move |_evt| {
              let form = form.read();
              if form.is_submittable() {
                let chosen = service(&form.service).map(|s| s.name).unwrap_or("desconocido");
                info!("proposal requested for {}", chosen);
                show_toast(PROPOSAL_TOAST_ID);
              }
            },
            "✉ Solicitar Propuesta Gratuita"
          }
        }
        div {
          class: "column",
          {roi().map(|estimate| rsx! { RoiPanel { estimate } })}
          div {
            class: "card",
            h3 { "Servicios y Precios" }
            for item in SERVICES.iter() {
              div {
                key: "{item.id}",
                class: if item.discount.is_some() { "price-row price-row-featured" } else { "price-row" },
                div {
                  div { class: "bold", "{item.name}" }
                  {item.discount.map(|discount| rsx! { div { class: "small text-violet bold", "{discount}" } })}
                }
                div { class: "bold text-cyan", "{item.price}" }
              }
            }
          }
          div {
            class: "card card-whatsapp",
            h3 { class: "card-title", span { class: "text-emerald", "📞" } "¿Prefieres hablar directamente?" }
            p { class: "small", "Contáctanos por WhatsApp y resolvemos tus dudas al instante" }
            button {
              class: "button button-whatsapp wide",
              onclick: move |_evt| {
                if let Err(e) = open_external(WHATSAPP_URL) {
                  error!("{}", e);
                  show_toast(WHATSAPP_TOAST_ID);
                }
              },
              "📞 Abrir WhatsApp"
            }
          }
          div {
            class: "card center",
            div { class: "guarantee-icon text-cyan", "✓" }
            h3 { "Garantía de Satisfacción" }
            p { class: "muted small", "Si no estás satisfecho en los primeros 30 días, te devolvemos el 100% de tu inversión" }
          }
        }
      }
      SuccessToast { id: PROPOSAL_TOAST_ID, content: "¡Gracias! Recibirás tu propuesta personalizada en 24 horas." }
      ErrorToast { id: WHATSAPP_TOAST_ID, content: "No se pudo abrir WhatsApp. Inténtalo de nuevo." }
    }
  }
}

#[component]
fn RoiPanel(estimate: RoiEstimate) -> Element {
  let savings = estimate.savings_label();
  let roi = estimate.roi_label();

  rsx! {
    div {
      class: "card card-roi",
      h3 { class: "card-title", span { class: "text-emerald", "📊" } "Tu ROI Estimado" }
      div {
        class: "center",
        div { class: "big-number gradient-text", "{savings}" }
        p { "Ahorrado al año" }
      }
      div {
        class: "roi-rows small",
        div { class: "progress-header", span { class: "muted", "Clientes/mes:" } span { class: "bold", "{estimate.clients}" } }
        div { class: "progress-header", span { class: "muted", "Ahorro/cliente/mes:" } span { class: "bold text-emerald", "€150" } }
        div { class: "progress-header", span { class: "muted", "Inversión estimada:" } span { class: "bold", "€1,499/mes" } }
        div { class: "progress-header roi-total", span { class: "muted", "ROI:" } span { class: "bold text-emerald large", "{roi}" } }
      }
    }
  }
}
