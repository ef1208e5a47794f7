#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::Template;
use utils::config::START_PAGE;
use dioxus::{logger::tracing::info, prelude::*};
use pages::{
    audit::AuditDemo, chatbot::ChatbotDemo, contact::ContactPage, funnel::FunnelDemo, home::Home,
    voice::VoiceDemo,
};

/// Pages of the showcase. Only one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageId {
    #[default]
    Home,
    Audit,
    Chatbot,
    Funnel,
    Voice,
    Contact,
}

impl PageId {
    /// Unknown slugs land on the home page.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "audit" => PageId::Audit,
            "chatbot" => PageId::Chatbot,
            "funnel" => PageId::Funnel,
            "voice" => PageId::Voice,
            "contact" => PageId::Contact,
            _ => PageId::Home,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Audit => "audit",
            PageId::Chatbot => "chatbot",
            PageId::Funnel => "funnel",
            PageId::Voice => "voice",
            PageId::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageRouter {
    current: PageId,
}

impl PageRouter {
    pub fn starting_at(slug: &str) -> Self {
        PageRouter { current: PageId::from_slug(slug) }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn navigate(&mut self, page: PageId) {
        self.current = page;
    }

    pub fn go_home(&mut self) {
        self.navigate(PageId::Home);
    }

    pub fn shows_contact_cta(&self) -> bool {
        self.current != PageId::Contact
    }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    let mut router = use_signal(|| PageRouter::starting_at(START_PAGE));

    let navigate = use_callback(move |page: PageId| {
        info!("navigating to {}", page.slug());
        router.write().navigate(page);
    });
    let go_home = use_callback(move |_: ()| navigate.call(PageId::Home));
    let to_contact = use_callback(move |_: ()| navigate.call(PageId::Contact));

    let current = router.read().current();
    let show_cta = router.read().shows_contact_cta();

    rsx! {
        Template {
            show_cta,
            on_contact: to_contact,
            {match current {
                PageId::Home => rsx! { Home { on_select: navigate } },
                PageId::Audit => rsx! { AuditDemo { on_back: go_home } },
                PageId::Chatbot => rsx! { ChatbotDemo { on_back: go_home } },
                PageId::Funnel => rsx! { FunnelDemo { on_back: go_home } },
                PageId::Voice => rsx! { VoiceDemo { on_back: go_home } },
                PageId::Contact => rsx! { ContactPage { on_back: go_home } },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_map_back_to_pages() {
        for page in [PageId::Home, PageId::Audit, PageId::Chatbot, PageId::Funnel, PageId::Voice, PageId::Contact] {
            assert_eq!(PageId::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn unknown_slug_falls_back_home() {
        assert_eq!(PageId::from_slug("pricing"), PageId::Home);
        assert_eq!(PageId::from_slug(""), PageId::Home);
    }

    #[test]
    fn navigate_then_home() {
        let mut router = PageRouter::default();
        assert_eq!(router.current(), PageId::Home);
        router.navigate(PageId::Funnel);
        assert_eq!(router.current(), PageId::Funnel);
        router.go_home();
        assert_eq!(router.current(), PageId::Home);
    }

    #[test]
    fn configured_start_page_is_honoured() {
        assert_eq!(PageRouter::starting_at("voice").current(), PageId::Voice);
        assert_eq!(PageRouter::starting_at("nowhere").current(), PageId::Home);
        assert_eq!(PageRouter::starting_at(START_PAGE).current(), PageId::from_slug(START_PAGE));
    }

    #[test]
    fn stylesheets_resolve_from_the_crate_root() {
        let sources = [
            include_str!("components/template.rs"),
            include_str!("pages/home.rs"),
            include_str!("pages/audit.rs"),
            include_str!("pages/chatbot.rs"),
            include_str!("pages/funnel.rs"),
            include_str!("pages/voice.rs"),
            include_str!("pages/contact.rs"),
        ];
        for source in sources {
            for (_, rest) in source.match_indices("asset!(\"").map(|(at, m)| source.split_at(at + m.len())) {
                assert!(rest.starts_with("/assets/"), "asset path must start at the crate root: {}", &rest[..rest.find('"').unwrap_or(rest.len())]);
            }
        }
    }

    #[test]
    fn contact_cta_hidden_on_contact() {
        let mut router = PageRouter::default();
        assert!(router.shows_contact_cta());
        router.navigate(PageId::Contact);
        assert!(!router.shows_contact_cta());
    }
}
