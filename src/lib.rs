pub mod api;
pub mod composer;
pub mod config;
pub mod cost;
pub mod error;
pub mod keyboard;
pub mod layouts;
pub mod vocabulary;
