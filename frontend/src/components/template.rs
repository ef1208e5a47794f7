#![allow(non_snake_case)]

use dioxus::{logger::tracing::error, prelude::*};
use crate::utils::{config::{BRAND, CONTACT_EMAIL, WHATSAPP_URL}, links::{mailto, open_external}};

#[component]
pub fn Template(show_cta: bool, on_contact: EventHandler<()>, children: Element) -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "site",
      Backdrop { }
      main {
        class: "site-content",
        {children}
      }
      Footer { }
      if show_cta {
        button {
          class: "floating-cta",
          onclick: move |_evt| on_contact.call(()),
          span {"⚡"}
          "¿Listo para automatizar?"
        }
      }
    }
  }
}

#[component]
fn Backdrop() -> Element {
  rsx! {
    div {
      class: "backdrop",
      div { class: "glow glow-cyan" }
      div { class: "glow glow-violet" }
      div { class: "glow glow-emerald" }
    }
  }
}

#[component]
pub fn BackButton(on_back: EventHandler<()>) -> Element {
  rsx! {
    button {
      class: "back-button",
      onclick: move |_evt| on_back.call(()),
      span {"‹"}
      "Volver al inicio"
    }
  }
}

#[component]
pub fn DemoHeader(icon: &'static str, accent: &'static str, title: &'static str, subtitle: &'static str) -> Element {
  rsx! {
    div {
      class: "demo-header",
      div { class: "demo-icon {accent}", "{icon}" }
      h2 { "{title}" }
      p { "{subtitle}" }
    }
  }
}

#[component]
fn Footer() -> Element {
  let mail_link = mailto("Quiero automatizar mi negocio");

  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2025 {BRAND}" }
        },
        div {
          class: "social-links",
          a {
            href: "{mail_link}",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
            span { class: "social-text", "{CONTACT_EMAIL}" }
          }
          button {
            class: "social-link",
            title: "WhatsApp",
            onclick: move |_evt| {
              if let Err(e) = open_external(WHATSAPP_URL) {
                error!("{}", e);
              }
            },
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"
              }
            }
          }
        }
      }
    }
  }
}
