#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form relay: validates website contact submissions and forwards
//! them to a chat bot API.

pub mod domain;
pub mod infrastructure;
