pub mod audit;
pub mod chatbot;
pub mod contact;
pub mod funnel;
pub mod home;
pub mod voice;
