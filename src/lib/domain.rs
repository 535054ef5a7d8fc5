//! Domain layer

pub mod contact;
