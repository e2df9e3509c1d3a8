//! ZimEdu Web Server
//!
//! HTTP API for the ZimEdu app.

use clap::Parser;
use zimedu_web::server::ZimEduServerBuilder;
use zimedu_web::{init_logging, WebConfig};

/// ZimEdu Web Server - cloud resource endpoint and catalog API
#[derive(Parser)]
#[command(name = "zimedu-web")]
#[command(about = "HTTP API for ZimEdu")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Application configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!(
            "zimedu_web={level},zimedu_applications={level},tower_http=debug",
            level = args.log_level
        ),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Environment first, command line wins
    let mut config = WebConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.dev_mode |= args.dev;
    if args.config.is_some() {
        config.config_file = args.config;
    }

    println!("🚀 Starting ZimEdu Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);
    println!("🔧 Development mode: {}", config.dev_mode);
    if let Some(path) = &config.config_file {
        println!("📝 Config: {}", path);
    }

    let mut builder = ZimEduServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .dev_mode(config.dev_mode);
    if let Some(path) = config.config_file.clone() {
        builder = builder.config_file(path);
    }

    let server = match builder.build().await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }

    println!("✅ Server shut down gracefully");
}
