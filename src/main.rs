//! Page shell server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │                   PAGE SHELL                     │
//!                        │                                                  │
//!   GET {api}/{name}     │  ┌──────────┐    ┌──────────┐                    │
//!   ─────────────────────┼─▶│   http   │───▶│   api    │──▶ {"name": ...}   │
//!                        │  │  server  │    └──────────┘                    │
//!   GET /, /login, ...   │  │          │    ┌──────────┐    ┌────────────┐  │
//!   ─────────────────────┼─▶│          │───▶│  render  │───▶│  routing   │  │
//!                        │  └──────────┘    │ renderer │    │ mode table │  │
//!                        │                  └────┬─────┘    └────────────┘  │
//!                        │                       ▼                          │
//!                        │        ┌───────────────────────────────┐         │
//!                        │        │ shell: navbar + outlet page   │         │
//!                        │        │ client shell | per request |  │         │
//!                        │        │ prerender store               │         │
//!                        │        └───────────────────────────────┘         │
//!                        │                                                  │
//!                        │  config · observability · lifecycle · security   │
//!                        └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use page_shell::config::{load_or_default, ShellConfig};
use page_shell::lifecycle::{bootstrap, signals::wait_for_signal, Shutdown};
use page_shell::observability::init_logging;
use page_shell::render::{write_prerendered, PageRenderer};

#[derive(Parser)]
#[command(name = "page-shell")]
#[command(about = "Page shell server with per-route render modes", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Write every prerendered page to disk
    Prerender {
        #[arg(short, long, default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Print the render-mode table and client routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.observability);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::Prerender { out_dir } => {
            let renderer = PageRenderer::from_config(&config.render)?;
            let files = write_prerendered(&renderer, &out_dir)?;
            for file in files {
                println!("{}", file.display());
            }
        }
        Commands::Routes => print_routes(&config)?,
    }

    Ok(())
}

async fn serve(config: ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("page-shell v{} starting", env!("CARGO_PKG_VERSION"));

    let server = bootstrap(config)?;
    let config = server.config();
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        api_mount_path = %config.api.mount_path,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_routes(config: &ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = PageRenderer::from_config(&config.render)?;

    println!("Render table:");
    for route in renderer.table().routes() {
        println!("  {:<20} {}", route.pattern.to_string(), route.render_mode);
    }

    println!("Client routes:");
    for route in renderer.routes().iter() {
        let path = format!("/{}", route.path());
        println!(
            "  {:<20} {:<10} {}",
            path,
            renderer.mode_for(&path).as_str(),
            if route.is_lazy() { "lazy" } else { "eager" }
        );
    }

    let mount = if config.api.is_root() { "" } else { config.api.mount_path.as_str() };
    println!("API: GET {}/{{name}}", mount);
    Ok(())
}
