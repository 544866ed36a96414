//! Game catalog browser core.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Loader    │────►│   Registry   │     │  UiEvents    │
//! │  (one fetch) │     │  (controls)  │     │ (dispatcher) │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!        │                                         ▼
//!        ▼                                  ┌──────────────┐
//! ┌──────────────┐     evaluate()           │   Commands   │
//! │   Catalog    │─────────────────────────►│  (surface)   │
//! │ (write-once) │                          └──────────────┘
//! └──────────────┘
//! ```
//!
//! The collection is loaded exactly once and never mutated. Every user
//! interaction is a [`session::UiEvent`] reduced into [`session::UiCommand`]s
//! for a [`render::Surface`] boundary.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod logging;
pub mod overlay;
pub mod query;
pub mod registry;
pub mod render;
pub mod session;
