//! HTTP API Module
//!
//! Thin axum layer over the query engine.
//!
//! ## Endpoints
//! - `GET /api/sales`: Search, filter, sort and paginate the dataset.
//! - `GET /api/filters/options`: The precomputed facet index.
//! - `GET /health`: Liveness probe.
//!
//! Request-shape validation (page and limit) happens here, before the engine runs.
//!
//! ## Submodules
//! - **`types`**: Query parameters and JSON response envelopes.
//! - **`handlers`**: Request handlers and parameter conversion.
//! - **`routes`**: Router and middleware assembly.

pub mod handlers;
pub mod routes;
pub mod types;

#[cfg(test)]
mod tests;
