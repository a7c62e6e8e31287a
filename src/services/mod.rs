//! Planning services
//!
//! This module contains the computational pieces of navigation: planar
//! geometry, the swept-path collision test, and the course-correction
//! search with its tick-scoped reservation ledger.

pub mod collision;
pub mod geometry;
pub mod navigation;
