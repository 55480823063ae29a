use clap::{Parser, Subcommand};
use extest::commands;
use extest::config::{ConfigLoader, ExtestConfig};
use extest::detect;
use extest_locators::{Version, VersionedLocatorStore, builtin_store};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "extest", version, about = "Version-aware VS Code workbench locators")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./extest.yaml, then ~/.extest/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// VS Code version to target (detected from code_path when omitted)
    #[arg(short = 'c', long, global = true)]
    code_version: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the versions the built-in locator tables know about
    Versions,
    /// Print the resolved locator table as JSON
    Resolve {
        /// Only print this component
        #[arg(long)]
        component: Option<String>,
    },
    /// Print a single locator
    Get {
        component: String,
        field: String,
        /// Argument for parameterized locators
        #[arg(long)]
        arg: Option<String>,
    },
    /// Launch VS Code through WebDriver and read the title and status bar
    Probe {
        /// WebDriver URL (overrides config)
        #[arg(long)]
        webdriver_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output.
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let mut config: ExtestConfig = match &args.config {
        Some(path) => ConfigLoader::load(path).await?,
        None => ConfigLoader::load_default().await?,
    };
    let store = builtin_store()?;

    let flag = args.code_version.as_deref();
    let output = match args.command {
        Command::Versions => commands::versions(store),
        Command::Resolve { component } => {
            let version = target_version(flag, &config, store).await?;
            commands::resolve(store, version, component.as_deref())?
        }
        Command::Get {
            component,
            field,
            arg,
        } => {
            let version = target_version(flag, &config, store).await?;
            commands::get(store, version, &component, &field, arg.as_deref())?
        }
        Command::Probe { webdriver_url } => {
            if let Some(url) = webdriver_url {
                config.webdriver_url = url;
            }
            let version = target_version(flag, &config, store).await?;
            commands::probe(&config, version).await?
        }
    };

    println!("{}", output);
    Ok(())
}

async fn target_version(
    flag: Option<&str>,
    config: &ExtestConfig,
    store: &VersionedLocatorStore,
) -> anyhow::Result<Version> {
    let (version, source) = detect::select_version(flag, config, store).await?;
    info!("Using locators for VS Code {} ({})", version, source);
    Ok(version)
}
