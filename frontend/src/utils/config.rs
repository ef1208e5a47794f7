//! Site settings baked in at compile time by `build.rs` (see `.env.example`).

pub const WHATSAPP_URL: &str = env!("WHATSAPP_URL");
pub const CONTACT_EMAIL: &str = env!("CONTACT_EMAIL");
/// slug of the landing page, unknown values land on home
pub const START_PAGE: &str = env!("START_PAGE");

pub const BRAND: &str = "iAgents Digital";
