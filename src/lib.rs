/// REST client for the registrations service
pub mod client;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Registration form state and lifecycle
pub mod form;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
