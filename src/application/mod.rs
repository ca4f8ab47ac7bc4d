/// Brime client implementing every service interface
pub mod client;
/// Client configuration
pub mod config;
/// Service interfaces, one per resource
pub mod interfaces;
