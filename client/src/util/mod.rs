//! Utility helpers shared across console modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`confirm`, `notify`, reading
//! multi-selects) and pure form/display logic from page and component code
//! so the latter stays testable without a DOM.

pub mod confirm;
pub mod display;
pub mod mutation;
pub mod notify;
pub mod requests;
pub mod select;
