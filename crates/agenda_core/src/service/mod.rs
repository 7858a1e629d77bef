//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into load/save/reset use cases.
//! - Keep front-ends decoupled from storage details.

pub mod state_store;
