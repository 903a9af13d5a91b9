//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render tables, forms and console chrome. They receive the
//! state signals and callbacks they need as props from the owning page.

pub mod batch_form;
pub mod combination_form;
pub mod combination_table;
pub mod notice_stack;
pub mod option_list;
pub mod tab_bar;
pub mod word_form;
pub mod word_table;
