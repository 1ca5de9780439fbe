//! Dataset Module
//!
//! Owns the read-only record set that every query runs against.
//!
//! ## Lifecycle
//! 1. **Load**: The CSV source is read once into raw string-keyed rows.
//! 2. **Normalize**: Each raw row becomes a fully populated `Record`.
//! 3. **Index**: A single pass over the records produces the `FacetIndex`.
//! 4. **Publish**: The finished `Dataset` is handed out behind an `Arc` and never mutated again.
//!
//! ## Submodules
//! - **`types`**: `Record`, `FacetIndex` and the load error type.
//! - **`normalizer`**: Raw row to `Record` conversion with lenient defaults.
//! - **`facets`**: Distinct-value and range index used to populate filter options.
//! - **`loader`**: CSV ingestion and the one-time guarded build (`SharedDataset`).

pub mod facets;
pub mod loader;
pub mod normalizer;
pub mod types;
