use std::net::TcpListener;

use crate::cmd::async_runtime;
use crate::config;
use crate::context::AppContext;
use crate::startup;

#[derive(clap::Args, Debug)]
pub struct Args;

/// Runs the proxy server until it receives a shutdown signal.
pub fn run(_args: Args) -> anyhow::Result<()> {
    let runtime = async_runtime()?;
    let listener = TcpListener::bind(config::settings().application.address())?;

    runtime.block_on(serve(listener))
}

async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let settings = config::settings();
    let store = startup::connect_to_store(&settings.store).await?;
    let upstream = startup::connect_upstream(&settings.upstream)?;
    let ctx = AppContext::new(store, upstream, settings.store.default_ttl());

    let app = startup::app(ctx).await;
    startup::run(listener, app).await
}
