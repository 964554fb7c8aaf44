//! Shared UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and notice signals from Leptos context; pages
//! wrap their content in `Protected`, which renders the header around it.
//! `NoticeBanner` is mounted once at the root so notices raised during a
//! session teardown are still visible on the login view.

pub mod layout;
pub mod notice_banner;
pub mod protected;
