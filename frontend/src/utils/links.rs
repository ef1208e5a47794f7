use super::{config::CONTACT_EMAIL, error::AppError};

/// Opens `url` in a new tab.
pub fn open_external(url: &str) -> Result<(), AppError> {
  let window = web_sys::window().ok_or_else(|| AppError::WindowUnavailable("no global window".to_string()))?;
  window
    .open_with_url_and_target(url, "_blank")
    .map_err(|e| AppError::OpenLinkFailed(format!("{:?}", e)))?;
  Ok(())
}

pub fn mailto(subject: &str) -> String {
  format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mailto_encodes_subject() {
    let link = mailto("Informe de auditoría");
    assert!(link.starts_with(&format!("mailto:{}?subject=", CONTACT_EMAIL)));
    assert!(link.ends_with("Informe%20de%20auditor%C3%ADa"));
  }

  #[test]
  fn mailto_subject_cannot_break_the_query() {
    let link = mailto("¿Precio? 50% & más");
    assert!(link.ends_with("subject=%C2%BFPrecio%3F%2050%25%20%26%20m%C3%A1s"));
  }
}
