//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod books;
pub mod collection;
pub mod email_auth;
pub mod housekeeping;
pub mod links;
pub mod notes;
pub mod session;
