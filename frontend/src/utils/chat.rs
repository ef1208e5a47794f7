use std::time::Duration;
use futures::{stream, Stream};
use serde::Serialize;
use uuid::Uuid;

use super::catalog::{PricingTier, CALENDAR_SLOTS, PRICING_TIERS};

pub const GREETING: &str = "¡Hola! 👋 Soy tu asistente virtual. ¿En qué puedo ayudarte hoy?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ChatContent {
  Text(String),
  PricingTable(&'static [PricingTier]),
  Calendar(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
  pub id: Uuid,
  pub role: Role,
  pub content: ChatContent,
}

impl ChatMessage {
  fn new(role: Role, content: ChatContent) -> Self {
    ChatMessage { id: Uuid::new_v4(), role, content }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
  Pricing,
  Calendar,
}

impl FollowUp {
  pub fn content(self) -> ChatContent {
    match self {
      FollowUp::Pricing => ChatContent::PricingTable(&PRICING_TIERS),
      FollowUp::Calendar => ChatContent::Calendar(&CALENDAR_SLOTS),
    }
  }
}

/// One row of the reply table: any keyword found in the lowercased input selects it.
#[derive(Debug, PartialEq)]
pub struct ChatRule {
  pub name: &'static str,
  pub keywords: &'static [&'static str],
  pub reply: &'static str,
  pub follow_up: Option<FollowUp>,
}

impl ChatRule {
  pub fn matches(&self, lowered: &str) -> bool {
    self.keywords.iter().any(|keyword| lowered.contains(keyword))
  }
}

/// Evaluated top to bottom, first match wins.
pub static CHAT_RULES: [ChatRule; 3] = [
  ChatRule {
    name: "schedule",
    keywords: &["horario"],
    reply: "Nuestro horario es de lunes a viernes de 9:00 a 18:00. ¿Te gustaría que te envíe un recordatorio antes de tu visita?",
    follow_up: None,
  },
  ChatRule {
    name: "pricing",
    keywords: &["precio", "cuesta"],
    reply: "Tenemos varios planes disponibles. ¿Te muestro nuestra tabla de precios?",
    follow_up: Some(FollowUp::Pricing),
  },
  ChatRule {
    name: "booking",
    keywords: &["cita", "agendar"],
    reply: "¡Perfecto! Voy a mostrarte nuestro calendario disponible.",
    follow_up: Some(FollowUp::Calendar),
  },
];

pub static FALLBACK_RULE: ChatRule = ChatRule {
  name: "fallback",
  keywords: &[],
  reply: "Entiendo. Déjame conectarte con un agente que pueda ayudarte mejor con eso. Mientras tanto, ¿hay algo más en lo que pueda asistirte?",
  follow_up: None,
};

pub fn match_rule(text: &str) -> &'static ChatRule {
  let lowered = text.to_lowercase();
  CHAT_RULES.iter().find(|rule| rule.matches(&lowered)).unwrap_or(&FALLBACK_RULE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatTiming {
  pub reply: Duration,
  pub follow_up: Duration,
}

pub const CHAT_TIMING: ChatTiming = ChatTiming {
  reply: Duration::from_millis(1_500),
  follow_up: Duration::from_millis(1_500),
};

/// Bot messages for one user message: the text reply after `timing.reply`,
/// then the rule's structured block after another `timing.follow_up`.
pub fn reply_stream(rule: &'static ChatRule, timing: ChatTiming) -> impl Stream<Item = ChatContent> {
  stream::unfold(Some(false), move |stage| async move {
    match stage? {
      false => {
        async_std::task::sleep(timing.reply).await;
        let next = rule.follow_up.map(|_| true);
        Some((ChatContent::Text(rule.reply.to_string()), next))
      },
      true => {
        async_std::task::sleep(timing.follow_up).await;
        let follow_up = rule.follow_up?;
        Some((follow_up.content(), None))
      }
    }
  })
}

/// Append-only log of the chatbot page.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
  messages: Vec<ChatMessage>,
}

impl Conversation {
  pub fn with_greeting() -> Self {
    Conversation { messages: vec![ChatMessage::new(Role::Bot, ChatContent::Text(GREETING.to_string()))] }
  }

  pub fn push_user(&mut self, text: &str) {
    self.messages.push(ChatMessage::new(Role::User, ChatContent::Text(text.to_string())));
  }

  pub fn push_bot(&mut self, content: ChatContent) {
    self.messages.push(ChatMessage::new(Role::Bot, content));
  }

  pub fn messages(&self) -> &[ChatMessage] {
    &self.messages
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  /// quick questions are offered until the visitor says something
  pub fn shows_quick_questions(&self) -> bool {
    self.len() == 1
  }
}
