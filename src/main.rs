use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grader_gateway::{api, config::GatewayConfig};

#[derive(Parser)]
#[command(name = "grader")]
#[command(about = "LLM exam grading gateway")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the grading gateway server
    Serve {
        /// Port for the HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "grader_gateway=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let port = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => 3000,
    };

    let config = GatewayConfig::from_env()?;
    tracing::info!(model = %config.model, "starting grading gateway on port {}", port);

    let state = api::AppState::new(config);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("grading gateway listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
