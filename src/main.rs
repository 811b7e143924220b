// src/main.rs - Desktop entry point

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hemline::config::StorefrontConfig;
use hemline::error::Result;
use hemline::ui::App;

#[derive(Parser)]
#[command(
    name = "hemline",
    version = hemline::VERSION,
    about = "A fashion storefront client",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the storefront
    Run,
    /// Validate configuration
    ValidateConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::ValidateConfig { config }) => {
            validate_config(config.clone().or(cli.config))
        }
        Some(Commands::Run) | None => run_application(&cli),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<StorefrontConfig> {
    match path {
        Some(path) => StorefrontConfig::from_file(path),
        None => Ok(StorefrontConfig::from_env()),
    }
}

fn run_application(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_ref())?;

    if cli.debug {
        config.logging.filter = "debug".to_string();
    } else if cli.verbose {
        config.logging.filter = "info".to_string();
    }

    // Keep the guard alive until the window closes, or buffered log lines drop.
    let _guard = hemline::logging::init(&config.logging)?;

    tracing::info!("Starting Hemline v{}", hemline::VERSION);

    let issues = config.validate();
    for issue in &issues {
        tracing::warn!(field = %issue.field, "Config issue: {}", issue.message);
    }

    use dioxus::desktop::{tao::dpi::LogicalSize, Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Hemline")
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(1200.0, 800.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(App);

    Ok(())
}

fn validate_config(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config = load_config(config_path.as_ref())?;
    let issues = config.validate();

    if issues.is_empty() {
        println!("✅ Configuration is valid");
        println!("   API base: {}", config.api.base_url);
        Ok(())
    } else {
        for issue in &issues {
            println!("❌ {}: {}", issue.field, issue.message);
        }
        process::exit(1);
    }
}
