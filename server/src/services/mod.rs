//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and storage so route handlers can stay
//! focused on protocol translation and status mapping.

pub mod evaluation;
pub mod patient;
