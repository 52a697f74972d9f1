//! API Routes
//!
//! Route handlers organized by functionality.

pub mod callback;
pub mod charts;
pub mod dataset;
pub mod health;
pub mod page;
