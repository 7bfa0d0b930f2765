//! CLI commands (C11), dispatched from `main.rs` via `clap`'s derive API.

pub mod mask;
pub mod serve;
pub mod unmask;

use tokio::runtime::Runtime;

/// Builds the single-threaded-by-default Tokio runtime each CLI command
/// drives its async work from.
pub fn async_runtime() -> anyhow::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
