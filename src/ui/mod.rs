// MailTriage - ui/mod.rs
//
// UI layer: presentation only. Panels read `FormState` and emit
// `Command`s; the text panel edits the email text in place.
// Dependencies: app (state, commands), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O (the native file dialog aside).

pub mod panels;
pub mod shortcuts;
pub mod theme;
