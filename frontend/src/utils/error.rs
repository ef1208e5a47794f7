use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  WindowUnavailable(String),
  OpenLinkFailed(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::WindowUnavailable(msg) => write!(f, "Browser window unavailable: {}", msg),
      AppError::OpenLinkFailed(msg) => write!(f, "Failed to open link: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_failure() {
    let err = AppError::OpenLinkFailed("popup blocked".to_string());
    assert_eq!(err.to_string(), "Failed to open link: popup blocked");
  }
}
