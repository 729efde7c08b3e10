//! folio-ui - Shared UI types and components for folio
//!
//! Contains display types, stores, the browse pipeline, and pure view
//! components used by the web app.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
