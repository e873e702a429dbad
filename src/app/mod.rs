// MailTriage - app/mod.rs
//
// Application layer: form state, command dispatch, submission lifecycle,
// error presenter.
// Dependencies: core layer, platform transport/fs.
// Must NOT depend on: ui.

pub mod banner;
pub mod controller;
pub mod state;
pub mod submit;
