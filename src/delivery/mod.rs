//! Delivery module - the HTTP surface.
//!
//! The browser flow (`/` and `/notice`) answers with HTML pages; the JSON
//! API lives under `/api`.

pub mod handlers;
pub mod models;
pub mod page;

pub use handlers::{api_config, config};
