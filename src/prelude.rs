//! Commonly used error and logging items, glob-imported throughout the codebase.

pub use color_eyre::eyre::{bail, ensure, eyre, WrapErr};
pub use color_eyre::{Help, Report, Result};

pub use tracing::{debug, error, info, warn};
