//! Plain and TLS application servers

pub mod http;
pub mod https;
