pub mod audit;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod forms;
pub mod funnel;
pub mod gauge;
pub mod hooks;
pub mod links;
pub mod roi;
