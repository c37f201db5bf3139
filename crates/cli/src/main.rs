use clap::Parser;
use relay_dns_domain::{CliOverrides, DEFAULT_CONFIG_PATH};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "relay-dns")]
#[command(version)]
#[command(about = "Relay DNS - local records with upstream forwarding")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Listen address
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Local records file
    #[arg(short = 'r', long, value_name = "FILE")]
    records: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        listen: cli.listen.clone(),
        records_file: cli.records.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(&cli.config, cli_overrides.clone())?;

    bootstrap::init_logging(&config);

    info!("Starting Relay DNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = %cli.config,
        listen = %config.server.listen,
        port = config.server.port,
        records_file = %config.server.records_file,
        upstreams = config.upstreams.len(),
        "Configuration loaded"
    );

    let records = di::RecordServices::new(&config);
    records.load_initial().await;

    let dns = di::DnsServices::new(&config, records.store.clone()).await?;

    let shutdown = CancellationToken::new();
    let job_handles = di::build_jobs(&cli.config, cli_overrides, &config, &records, &dns)
        .with_shutdown_token(shutdown.clone())
        .start();

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            info!("Shutdown signal received");
            shutdown.cancel();
        }
    });

    let bind_addr: SocketAddr = config.server.bind_address().parse()?;
    let served =
        server::start_dns_server(bind_addr, dns.server_handler.clone(), shutdown.clone()).await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    served?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
