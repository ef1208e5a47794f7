use std::time::Duration;
use dioxus::prelude::*;

use crate::{
  components::{
    gauge::ProgressBar,
    template::{BackButton, DemoHeader},
    toast::{show_toast, SuccessToast},
  },
  utils::{
    catalog::{CHAT_PERKS, CHAT_STATS, INTEGRATIONS, LIVE_CONSULTATIONS_START, QUICK_QUESTIONS},
    chat::{ChatContent, ChatMessage, Role, CHAT_TIMING},
    format::group_thousands,
    hooks::use_conversation,
  },
};

const SLOT_TOAST_ID: &str = "slot-toast";
const LIVE_COUNTER_PERIOD: Duration = Duration::from_secs(5);

/// 0, 1 or 2 more consultations per period, from a uniform sample in [0, 1).
pub fn live_increment(sample: f64) -> u32 {
  (sample.clamp(0.0, 0.999_999) * 3.0).floor() as u32
}

#[component]
pub fn ChatbotDemo(on_back: EventHandler<()>) -> Element {
  static CSS: Asset = asset!("/assets/demo.css");

  let chat = use_conversation(CHAT_TIMING);
  let mut input = use_signal(String::new);
  let mut consultations = use_signal(|| LIVE_CONSULTATIONS_START);

  use_future(move || async move {
    loop {
      async_std::task::sleep(LIVE_COUNTER_PERIOD).await;
      *consultations.write() += live_increment(js_sys::Math::random());
    }
  });

  let mut send = move |text: String| {
    if chat.send(&text) {
      input.set(String::new());
    }
  };

  let conversation = chat.conversation();
  let live = group_thousands(consultations() as i64);

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "demo-page",
      BackButton { on_back },
      DemoHeader {
        icon: "💬",
        accent: "accent-violet",
        title: "Chatbot de Atención 24/7",
        subtitle: "Prueba una conversación real con nuestro asistente IA",
      }
      div {
        class: "demo-grid",
        div {
          class: "card chat-window",
          div {
            class: "chat-header",
            span { class: "demo-icon small accent-violet", "💬" }
            div {
              h3 { "Asistente iAgents" }
              span { class: "online", span { class: "online-dot" } "En línea" }
            }
          }
          div {
            class: "chat-log",
            for message in conversation.messages().iter() {
              ChatBubble { key: "{message.id}", message: message.clone() }
            }
            if chat.is_typing() {
              div {
                class: "bubble bubble-bot typing",
                span { class: "dot" }
                span { class: "dot" }
                span { class: "dot" }
              }
            }
          }
          if conversation.shows_quick_questions() {
            div {
              class: "quick-questions",
              p { class: "muted small", "Preguntas frecuentes:" }
              for question in QUICK_QUESTIONS.iter() {
                button {
                  key: "{question}",
                  class: "chip",
                  onclick: move |_evt| send(question.to_string()),
                  "{question}"
                }
              }
            }
          }
          div {
            class: "input-row",
            input {
              class: "form-input",
              r#type: "text",
              value: "{input}",
              placeholder: "Escribe tu mensaje...",
              oninput: move |evt| input.set(evt.value()),
              onkeypress: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                  send(input());
                }
              },
            }
            button {
              class: "button button-primary",
              onclick: move |_evt| send(input()),
              "➤"
            }
          }
        }
        div {
          class: "sidebar",
          div {
            class: "card",
            h3 { class: "card-title", "📊 Estadísticas en Vivo" }
            div { class: "big-number gradient-text", "{live}" }
            p { class: "muted small", "Consultas atendidas este mes" }
            for (label, shown, gauge) in CHAT_STATS.iter() {
              div {
                key: "{label}",
                class: "stat-row",
                div {
                  class: "progress-header",
                  span { class: "muted small", "{label}" }
                  span { class: "small", "{shown}" }
                }
                ProgressBar { value: *gauge, color: "fill-emerald" }
              }
            }
          }
          div {
            class: "card card-highlight",
            h3 { "⚡ Ahorra €2,000-3,000/mes" }
            p { "Un chatbot trabaja 24/7 sin descansos, vacaciones ni salarios. Atiende múltiples clientes simultáneamente." }
            for perk in CHAT_PERKS.iter() {
              div { key: "{perk}", class: "perk", span { class: "text-emerald", "✓" } span { "{perk}" } }
            }
          }
          div {
            class: "card",
            h3 { "Integraciones Incluidas" }
            div {
              class: "icon-grid",
              for (icon, name) in INTEGRATIONS.iter() {
                div { key: "{name}", class: "icon-tile", title: "{name}", "{icon}" }
              }
            }
          }
        }
      }
      SuccessToast { id: SLOT_TOAST_ID, content: "¡Cita reservada! Te enviaremos la confirmación por email." }
    }
  }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
  let (side, tone) = match message.role {
    Role::User => ("bubble-row bubble-row-user", "bubble bubble-user"),
    Role::Bot => ("bubble-row", "bubble bubble-bot"),
  };

  rsx! {
    div {
      class: side,
      {match message.content {
        ChatContent::Text(text) => rsx! {
          div { class: tone, "{text}" }
        },
        ChatContent::PricingTable(tiers) => rsx! {
          div {
            class: "bubble bubble-bot pricing",
            for tier in tiers.iter() {
              div {
                key: "{tier.plan}",
                class: "pricing-tier",
                div {
                  class: "pricing-head",
                  span { class: "bold", "{tier.plan}" }
                  span { class: "text-cyan", "{tier.price}" }
                }
                p { class: "muted small", "{tier.features}" }
              }
            }
          }
        },
        ChatContent::Calendar(slots) => rsx! {
          div {
            class: "bubble bubble-bot calendar",
            h4 { "📅 Horarios Disponibles" }
            for slot in slots.iter() {
              button {
                key: "{slot}",
                class: "chip",
                onclick: move |_evt| show_toast(SLOT_TOAST_ID),
                "{slot}"
              }
            }
          }
        },
      }}
    }
  }
}
