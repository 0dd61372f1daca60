//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and chrome shared by the wizard pages and
//! the dashboard. They receive values and callbacks as props rather than
//! reading page state from context.

pub mod pager;
pub mod rating_inputs;
pub mod wizard_progress;
