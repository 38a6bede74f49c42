//! Configuration for box bundling.
//!
//! [`BoxConfig`] is decoded from generic settings bags handed over by the
//! host pipeline; [`SettingsBuilder`] assembles one programmatically.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use self::core::{BoxConfig, DEFAULT_COMPRESSION_LEVEL};
