//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each gated page binds one static `PageMeta` to one widget through
//! `GatedPage`; the sign-in page is the only route outside the gate.


pub mod auth;
pub mod books;
pub mod date_time;
pub mod home;
pub mod links;
pub mod notes;

use crate::components::page_shell::PageMeta;

pub const HOME: PageMeta = PageMeta {
    path: "/",
    title: "Home",
    subtitle: "Everything on your board at a glance.",
};

pub const BOOKS: PageMeta = PageMeta {
    path: "/books",
    title: "Books",
    subtitle: "What you are reading and what is next.",
};

pub const LINKS: PageMeta = PageMeta {
    path: "/links",
    title: "Links",
    subtitle: "Bookmarks worth coming back to.",
};

pub const NOTES: PageMeta = PageMeta {
    path: "/notes",
    title: "Notes",
    subtitle: "Quick thoughts, kept in one place.",
};

pub const DATE_TIME: PageMeta = PageMeta {
    path: "/datetime",
    title: "Date & Time",
    subtitle: "The local clock.",
};

/// Gated pages in navigation order.
pub const NAV_PAGES: [PageMeta; 5] = [HOME, BOOKS, LINKS, NOTES, DATE_TIME];
