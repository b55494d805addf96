use basin_api::AppState;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `bsn serve`: run the JSON API over this invocation's store until
/// interrupted.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let mut server = ctx.config.server.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let state = AppState::new(ctx.store.clone());
    tracing::info!(addr = %server.bind_addr(), "starting basin API server");
    basin_api::server::serve(state, &server.bind_addr()).await?;
    Ok(())
}
