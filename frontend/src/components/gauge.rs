#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::utils::gauge::{fill_percent, ring_label, RingGeometry};

const RING_GRADIENT_ID: &str = "ring-gradient";

#[component]
pub fn ProgressBar(
  value: f64,
  #[props(default = 100.0)] max: f64,
  #[props(default = "fill-gradient")] color: &'static str,
) -> Element {
  let width = fill_percent(value, max);

  rsx! {
    div {
      class: "progress-track",
      div {
        class: "progress-fill {color}",
        style: "width: {width}%",
      }
    }
  }
}

#[component]
pub fn CircularProgress(
  value: f64,
  #[props(default = 100.0)] max: f64,
  #[props(default = 120.0)] size: f64,
  #[props(default = 8.0)] stroke_width: f64,
) -> Element {
  let ring = RingGeometry::new(size, stroke_width);
  let center = ring.center();
  let offset = ring.dash_offset(value, max);
  let label = ring_label(value, max);

  rsx! {
    div {
      class: "ring",
      svg {
        width: "{size}",
        height: "{size}",
        class: "ring-svg",
        circle {
          cx: "{center}",
          cy: "{center}",
          r: "{ring.radius}",
          stroke: "currentcolor",
          stroke_width: "{stroke_width}",
          fill: "none",
          class: "ring-track",
        }
        circle {
          cx: "{center}",
          cy: "{center}",
          r: "{ring.radius}",
          stroke: "url(#{RING_GRADIENT_ID})",
          stroke_width: "{stroke_width}",
          fill: "none",
          stroke_dasharray: "{ring.circumference}",
          stroke_dashoffset: "{offset}",
          stroke_linecap: "round",
          class: "ring-arc",
        }
        defs {
          linearGradient {
            id: RING_GRADIENT_ID,
            x1: "0%",
            y1: "0%",
            x2: "100%",
            y2: "100%",
            stop { offset: "0%", stop_color: "#06b6d4" }
            stop { offset: "100%", stop_color: "#8b5cf6" }
          }
        }
      }
      div { class: "ring-label gradient-text", "{label}" }
    }
  }
}
