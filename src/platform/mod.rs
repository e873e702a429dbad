// MailTriage - platform/mod.rs
//
// Platform abstraction layer: config directories, filesystem metadata,
// HTTP transport.
// Dependencies: core model types, directories, reqwest.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
pub mod http;
