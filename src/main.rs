use tinyweb::config::Config;
use tinyweb::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match Config::from_args(std::env::args()) {
        Ok(cfg) => cfg,
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(1);
        }
    };

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
