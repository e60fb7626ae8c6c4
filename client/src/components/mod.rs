//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page_shell` wraps every gated route; the widget components (`books`,
//! `links`, `notes`, `date_time`) are what the shell renders once the session
//! is authenticated.

pub mod books;
pub mod date_time;
pub mod links;
pub mod nav_bar;
pub mod notes;
pub mod page_shell;
