//! Query Module
//!
//! The read-only query engine over the published `Dataset`.
//!
//! ## Pipeline
//! Every request runs the same fixed sequence of stages:
//! 1. **Search**: Literal, case-insensitive substring match on customer name or phone.
//! 2. **Filter**: AND across criteria, OR within a multi-select criterion.
//! 3. **Sort**: Stable ordering by date, quantity or customer name.
//! 4. **Paginate**: Always runs, so every response is bounded.
//!
//! Stages borrow records from the dataset and never mutate it; only the final
//! page is cloned out.
//!
//! ## Submodules
//! - **`types`**: Query specification and page metadata.
//! - **`dates`**: Calendar date parsing shared by filter and sort.
//! - **`search`**, **`filter`**, **`sort`**, **`pagination`**: The individual stages.
//! - **`pipeline`**: Composition of the stages and the facet accessor.

pub mod dates;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod search;
pub mod sort;
pub mod types;
