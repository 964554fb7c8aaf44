//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notice`, and one module per
//! management view) so components depend on small focused models. Each page
//! keeps its draft/form logic here, where it can be tested without a DOM.

pub mod clos;
pub mod courses;
pub mod faculty;
pub mod forms;
pub mod notice;
pub mod session;
