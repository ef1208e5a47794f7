use dotenvy::dotenv;

const DEFAULTS: [(&str, &str); 3] = [
  ("WHATSAPP_URL", "https://wa.me/34600000000"),
  ("CONTACT_EMAIL", "hola@iagents.digital"),
  // page shown on load, one of home/audit/chatbot/funnel/voice/contact
  ("START_PAGE", "home"),
];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // the .env file is optional, every key has a fallback
  if dotenv().is_err() {
    println!("cargo::warning=no .env file found, using default site settings");
  }

  for (key, default) in DEFAULTS {
    println!("cargo::rerun-if-env-changed={}", key);
    match std::env::var(key) {
      Ok(value) if !value.trim().is_empty() => println!("cargo::rustc-env={}={}", key, value),
      _ => println!("cargo::rustc-env={}={}", key, default),
    }
  }
}
