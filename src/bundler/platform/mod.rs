//! Provider-specific box builders.

pub mod virtualbox;
