// MailTriage - core/mod.rs
//
// Core business logic layer: model, validation, request mapping and the
// pure result projection.
// Dependencies: standard library and serde only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod format;
pub mod model;
pub mod render;
pub mod request;
pub mod samples;
pub mod validate;
