// crates/shared-kernel/src/value_objects/mod.rs
pub mod delimiters;
pub mod sum;

pub use delimiters::DelimiterSet;
pub use sum::Sum;
