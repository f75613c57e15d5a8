//! Chat relay - forwards chat messages to hosted LLM inference endpoints.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
