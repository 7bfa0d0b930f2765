use std::sync::Arc;

use crate::cmd::async_runtime;
use crate::engine::MaskingEngine;
use crate::startup::connect_to_store;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Text to mask.
    text: String,
}

/// Masks a single string against the configured store and prints the result.
pub fn run(args: Args) -> anyhow::Result<()> {
    let runtime = async_runtime()?;

    runtime.block_on(async move {
        let store_settings = &crate::config::settings().store;
        let store = connect_to_store(store_settings).await?;
        let engine = MaskingEngine::with_ttl(Arc::clone(&store), store_settings.default_ttl());
        let (masked, _) = engine.mask_text(&args.text).await?;
        println!("{masked}");
        Ok(())
    })
}
