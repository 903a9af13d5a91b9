//! Client-side state models for the console.
//!
//! DESIGN
//! ======
//! State is split per panel (`words`, `combinations`, `options`) plus the
//! console chrome (`ui`, `notice`). Each model is a plain struct owned by
//! the component that mounts it and wrapped in an `RwSignal` there; nothing
//! is provided through global context.

pub mod combinations;
pub mod notice;
pub mod options;
pub mod ui;
pub mod words;
