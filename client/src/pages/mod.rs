//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates widgets to
//! `components`. Wizard pages read their input from the shared
//! `WizardHandoff` once, at mount.

pub mod dashboard;
pub mod diagnosis;
pub mod summary;
