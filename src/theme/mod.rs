//! Theme for the CapFlow client.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
