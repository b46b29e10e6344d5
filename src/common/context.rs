use std::sync::Arc;

use clap::Parser;

use super::{Arguments, Config};
use crate::prelude::*;

/// Type alias for an atomically-refcounted instance of [`InnerContext`].
pub type Context = Arc<InnerContext>;

/// Inner representation of global program context.
#[derive(Debug)]
pub struct InnerContext {
    pub args: Arguments,
    pub config: Config,
}

impl InnerContext {
    pub fn init() -> Result<Context> {
        let args = Arguments::parse();
        let config = Config::load(args.config.as_deref())?;

        let ctx = InnerContext { args, config };

        Ok(Arc::new(ctx))
    }
}
