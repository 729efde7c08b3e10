//! Store types for UI state management
//!
//! These hold the view state shared between pages and the pure view
//! components. Pages own the signals; components receive cloned values.

pub mod browse;
pub mod catalog;

pub use browse::*;
pub use catalog::*;
