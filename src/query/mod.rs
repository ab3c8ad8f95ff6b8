//! Filter and search over the catalog.
//!
//! - `filter_services`: reduce services by audience category
//! - `search`: free-text lookup over department names and service titles
//!
//! Both are pure functions of their inputs and are recomputed on every call.

pub mod filter;
pub mod search;

pub use filter::{ServiceFilter, filter_services};
pub use search::search;
