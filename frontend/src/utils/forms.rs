//! Form records and their checks.
//!
//! Triggers are gated on presence only. The plausibility checks drive the
//! soft hints under the inputs and never block a submit.

use url::Url;

pub fn is_present(value: &str) -> bool {
  !value.is_empty()
}

pub fn looks_like_email(value: &str) -> bool {
  let value = value.trim();
  match value.split_once('@') {
    Some((local, domain)) => {
      !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
    },
    None => false,
  }
}

/// Bare domains like `ejemplo.com` are read as https.
pub fn looks_like_url(value: &str) -> bool {
  let value = value.trim();
  let parsed = if value.contains("://") {
    Url::parse(value)
  } else {
    Url::parse(&format!("https://{}", value))
  };
  match parsed {
    Ok(url) => {
      matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some_and(|host| host.contains('.') && !host.starts_with('.') && !host.ends_with('.'))
    },
    Err(_) => false,
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
  pub name: String,
  pub email: String,
  pub phone: String,
}

impl LeadForm {
  pub fn is_submittable(&self) -> bool {
    is_present(&self.name) && is_present(&self.email)
  }

  pub fn has_phone(&self) -> bool {
    is_present(&self.phone)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
  pub name: String,
  pub email: String,
  pub phone: String,
  pub service: String,
  pub clients: String,
}

impl Default for ContactForm {
  fn default() -> Self {
    ContactForm {
      name: String::new(),
      email: String::new(),
      phone: String::new(),
      service: "audit".to_string(),
      clients: String::new(),
    }
  }
}

impl ContactForm {
  pub fn is_submittable(&self) -> bool {
    is_present(&self.name) && is_present(&self.email)
  }
}

/// hint shown under an email input, `None` when there is nothing to say
pub fn email_hint(value: &str) -> Option<&'static str> {
  (is_present(value) && !looks_like_email(value)).then_some("Este email no parece válido, revísalo antes de continuar.")
}

pub fn url_hint(value: &str) -> Option<&'static str> {
  (is_present(value) && !looks_like_url(value)).then_some("Esta URL no parece válida, prueba con https://tudominio.com")
}
