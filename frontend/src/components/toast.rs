#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn SuccessToast(id: &'static str, content: &'static str) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-success",
      "{content}"
    }
  }
}

#[component]
pub fn ErrorToast(id: &'static str, content: &'static str) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-error",
      "{content}"
    }
  }
}

/// Flashes the toast with `id` for two seconds.
pub fn show_toast(id: &str) {
  document::eval(&format!(r#"
    var x = document.getElementById("{id}");
    if (x) {{
      x.classList.add("show");
      setTimeout(function(){{x.classList.remove("show");}}, 2000);
    }}
    "#));
}
