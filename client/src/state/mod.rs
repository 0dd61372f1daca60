//! View-model state for the wizard steps and the dashboard.
//!
//! DESIGN
//! ======
//! Each screen owns one plain struct updated through an action enum, so every
//! transition can be exercised without a renderer. Pages hold these inside
//! `RwSignal`s and only translate DOM events into actions.

pub mod diagnosis;
pub mod patients;
pub mod rating;
pub mod suggested_tests;
pub mod summary;
pub mod wizard;
