//! Theme for CardGen.

mod styles;

pub use styles::GLOBAL_STYLES;
