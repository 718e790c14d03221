//! Direct DNS Infrastructure Layer
pub mod clients;
pub mod dns;
