//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `console` is the only route. It owns every state signal and hands them to
//! the two panels, which orchestrate their loads and mutations and delegate
//! rendering to `components`.

pub mod combinations;
pub mod console;
pub(crate) mod option_loader;
pub mod words;
