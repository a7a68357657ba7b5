//! Storage module.
//!
//! File system collaborators consumed by the tools:
//! - `paths` - path validation and normalization
//! - `reader` - whole-file reads
//! - `writer` - atomic temp-file-plus-rename writes
//! - `verifier` - size and line statistics
//! - `memory` - in-memory implementation of all three traits

pub mod memory;
pub mod paths;
pub mod reader;
pub mod verifier;
pub mod writer;

pub use memory::*;
pub use paths::*;
pub use reader::*;
pub use verifier::*;
pub use writer::*;
