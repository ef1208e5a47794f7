use dioxus::prelude::*;

use crate::{
  components::template::{BackButton, DemoHeader},
  utils::{
    catalog::{VOICE_AI, VOICE_SAMPLES, VOICE_TRADITIONAL, VOICE_USE_CASES},
    engine::VOICE_PLAYBACK,
    forms::is_present,
    hooks::use_scripted_run,
  },
};

/// What the playback belongs to: one of the canned samples or the visitor's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceSelection {
  Sample(usize),
  Custom,
}

impl Default for VoiceSelection {
  fn default() -> Self {
    VoiceSelection::Sample(0)
  }
}

#[component]
pub fn VoiceDemo(on_back: EventHandler<()>) -> Element {
  static CSS: Asset = asset!("/assets/demo.css");

  let mut selected = use_signal(VoiceSelection::default);
  let mut custom_text = use_signal(String::new);
  let playback = use_scripted_run("voice", VOICE_PLAYBACK, || ());

  let playing = playback.is_running();
  let chars = custom_text.read().chars().count();
  let can_generate = !playing && is_present(&custom_text.read());

  let mut play = move |selection: VoiceSelection| {
    selected.set(selection);
    playback.start();
  };

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "demo-page",
      BackButton { on_back },
      DemoHeader {
        icon: "🎙",
        accent: "accent-rose",
        title: "Clones de Voz e IA",
        subtitle: "Contenido de audio profesional ilimitado sin contratar locutores",
      }
      div {
        class: "demo-grid",
        div {
          class: "column",
          div {
            class: "card",
            h3 { "Ejemplos de Voz IA" }
            for (index, sample) in VOICE_SAMPLES.iter().enumerate() {
              {
                let this = VoiceSelection::Sample(index);
                let is_selected = selected() == this;
                let is_playing = playing && is_selected;
                rsx! {
                  div {
                    key: "{sample.name}",
                    class: if is_selected { "sample sample-selected" } else { "sample" },
                    div {
                      class: "progress-header",
                      span { class: "bold", "{sample.name}" }
                      span { class: "muted small", "{sample.duration}" }
                    }
                    p { class: "muted small", "{sample.text}" }
                    button {
                      class: "button button-voice wide",
                      disabled: is_playing,
                      onclick: move |_evt| play(this),
                      if is_playing {
                        span {
                          class: "wave",
                          span { class: "wave-bar" }
                          span { class: "wave-bar" }
                          span { class: "wave-bar" }
                        }
                        "Reproduciendo..."
                      } else {
                        "▶ Escuchar"
                      }
                    }
                  }
                }
              }
            }
          }
          div {
            class: "card",
            h3 { "Comparativa de Costes" }
            div {
              class: "compare compare-bad",
              div { class: "bold text-rose", "✕ Locutor Tradicional" }
              for line in VOICE_TRADITIONAL.iter() {
                div { key: "{line}", class: "small", "• {line}" }
              }
            }
            div {
              class: "compare compare-good",
              div { class: "bold text-emerald", "✓ Con IA (iAgents)" }
              for line in VOICE_AI.iter() {
                div { key: "{line}", class: "small", "• {line}" }
              }
            }
          }
        }
        div {
          class: "column",
          div {
            class: "card",
            h3 { "Genera Tu Propia Voz" }
            label { class: "form-label", "Escribe tu mensaje" }
            textarea {
              class: "form-input textarea",
              value: "{custom_text}",
              placeholder: "Ej: Hola, bienvenido a mi negocio. Estamos aquí para ayudarte con...",
              oninput: move |evt| custom_text.set(evt.value()),
            }
            div { class: "muted small", "{chars} caracteres" }
            button {
              class: "button button-voice wide",
              disabled: !can_generate,
              onclick: move |_evt| {
                if is_present(&custom_text.read()) {
                  play(VoiceSelection::Custom);
                }
              },
              if playing && selected() == VoiceSelection::Custom {
                span { class: "spinner" }
                "Generando..."
              } else {
                "🎙 Generar Audio con IA"
              }
            }
          }
          div {
            class: "card",
            h3 { "Casos de Uso" }
            for (icon, text) in VOICE_USE_CASES.iter() {
              div {
                key: "{text}",
                class: "list-row",
                span { class: "text-rose", "{icon}" }
                span { class: "small", "{text}" }
              }
            }
          }
          div {
            class: "card card-highlight",
            span { class: "highlight-icon", "⚡" }
            div {
              h3 { "Contenido Ilimitado" }
              p { "Crea miles de variaciones sin coste adicional. Ideal para A/B testing, personalización masiva y contenido multiidioma." }
              div {
                class: "inset",
                div { class: "big-number text-rose", "ROI: 15x" }
                p { class: "muted small", "Retorno promedio en el primer año" }
              }
            }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_sample_starts_selected() {
    assert_eq!(VoiceSelection::default(), VoiceSelection::Sample(0));
    assert_ne!(VoiceSelection::Sample(0), VoiceSelection::Custom);
  }
}
