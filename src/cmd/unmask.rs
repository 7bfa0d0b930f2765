use crate::cmd::async_runtime;
use crate::engine::UnmaskingEngine;
use crate::startup::connect_to_store;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Text to unmask.
    text: String,
}

/// Unmasks a single string against the configured store and prints the result.
pub fn run(args: Args) -> anyhow::Result<()> {
    let runtime = async_runtime()?;

    runtime.block_on(async move {
        let store = connect_to_store(&crate::config::settings().store).await?;
        let engine = UnmaskingEngine::new(store);
        let restored = engine.unmask_text(&args.text).await?;
        println!("{restored}");
        Ok(())
    })
}
