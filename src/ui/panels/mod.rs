// MailTriage - ui/panels/mod.rs

pub mod error_banner;
pub mod file_input;
pub mod results;
pub mod submit_bar;
pub mod tabs;
pub mod text_input;
