//! Relay DNS Infrastructure Layer
pub mod dns;
pub mod records;
