use dioxus::prelude::*;

use crate::{
  utils::{catalog::{CASE_CARDS, HOME_PERKS, HOME_STATS}, config::BRAND},
  PageId,
};

#[component]
pub fn Home(on_select: EventHandler<PageId>) -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  let mut mounted = use_signal(|| false);
  use_effect(move || mounted.set(true));

  let reveal = if mounted() { "reveal reveal-visible" } else { "reveal" };

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class: "hero {reveal}",
        div { class: "brand-pill", span { "{BRAND}" } }
        h1 {
          class: "gradient-text",
          "Experimenta el Poder de"
          br {}
          "la Automatización"
        },
        p {
          "Prueba casos reales de automatización en vivo. Sin compromiso, sin esperas."
          br {}
          span { class: "text-cyan", "Descubre cómo la IA puede transformar tu negocio." }
        },
        div {
          class: "perks",
          for perk in HOME_PERKS.iter() {
            div {
              key: "{perk}",
              class: "perk",
              span { class: "text-emerald", "✓" }
              span { "{perk}" }
            }
          }
        }
      },
      section {
        class: "cases",
        for (index, card) in CASE_CARDS.iter().enumerate() {
          div {
            key: "{card.title}",
            class: "case-card {reveal}",
            style: format!("transition-delay: {}ms", index * 100),
            onclick: move |_evt| on_select.call(card.page),
            div { class: "case-icon {card.accent}", "{card.icon}" }
            h3 { class: "case-title", "{card.title}" }
            p { class: "muted", "{card.description}" }
            div { class: "savings-badge", "⚡ Ahorra: {card.savings}" }
            div { class: "case-cta", "Probar ahora →" }
          }
        }
      },
      section {
        class: "stats",
        for (value, label) in HOME_STATS.iter() {
          div {
            key: "{label}",
            class: "stat-card",
            div { class: "stat-value gradient-text", "{value}" }
            div { class: "muted small", "{label}" }
          }
        }
      }
    }
  }
}
