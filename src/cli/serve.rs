use crate::cli::commands::ServeArgs;
use crate::errors::GatewayError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), GatewayError> {
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    let addr = listener.local_addr()?;

    println!("Mock Gateway listening on http://{}:{}", args.host, addr.port());
    info!(%addr, "Mock gateway ready");

    api::serve(listener).await
}
