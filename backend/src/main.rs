use backend::{
    config::Config,
    error::AppError,
    server::{serve, shutdown_signal},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;
    let addr = cfg.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    serve(listener, &cfg, shutdown_signal()).await
}
