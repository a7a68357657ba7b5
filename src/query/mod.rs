//! JSON query engine.
//!
//! Selects object elements from an array inside a parsed document:
//! - `navigator` - array path resolution through object keys
//! - `predicate` - filter operators and cross-type equality
//! - `engine` - orchestration, AND-combination and truncation

pub mod engine;
pub mod navigator;
pub mod predicate;

pub use engine::*;
pub use navigator::*;
pub use predicate::*;
