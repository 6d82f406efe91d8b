//! Traveler domain model and fixed task template.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one traveler-centric shape shared by store, derivation and view.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - A traveler's checklist is a materialized template copy, never partial.

pub mod template;
pub mod traveler;
