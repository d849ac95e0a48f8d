//! API Routes
//!
//! Handler functions for all endpoints, grouped by concern.

pub mod charts;
pub mod classify;
pub mod health;
pub mod overview;
pub mod page;
pub mod tokenize;
