//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is the only app-wide state; widgets keep their collection
//! data in local resources scoped to the widget.

pub mod auth;
