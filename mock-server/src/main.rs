use anyhow::Context;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = std::env::var("PORT").ok();
    let addr = mock_server::listen_addr(port.as_deref()).context("PORT is not a valid port")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    println!("serving /hi /missing /moved /slow /large on http://{addr}");
    mock_server::run(listener).await?;
    Ok(())
}
