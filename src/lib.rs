//! Sales Explorer Library
//!
//! Query engine and HTTP surface over a read-only retail sales dataset.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`dataset`**: Loads the CSV source once, normalizes every row into a typed
//!   `Record` and precomputes the `FacetIndex` that drives the filter options.
//! - **`query`**: The search, filter, sort and pagination stages and the pipeline
//!   that composes them. Pure, read-only and safe to run concurrently.
//! - **`api`**: Axum handlers and router exposing the engine over HTTP.
//! - **`config`**: Startup configuration from flags and environment.

pub mod api;
pub mod config;
pub mod dataset;
pub mod query;
