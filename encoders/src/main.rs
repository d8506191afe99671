use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use encoders::{
    commands::{contact::ContactCommand, page},
    environment::Environment,
};
use encoders_config::DEFAULT_CONFIG_PATH;
use encoders_utils::encoders_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = encoders_config::load(&cli.config).context("Failed to load config")?;

    if let Command::CheckConfig { verbose } = cli.command {
        verbose.then(|| println!("{config:#?}"));
        Environment::new(config).context("Invalid site content")?;
        return Ok(());
    }

    let environment = Environment::new(config).context("Invalid site content")?;

    match cli.command {
        Command::Page { route } => page::show(&environment, &route)?,
        Command::Contact { command } => command.invoke(&environment).await?,
        Command::CheckConfig { .. } | Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = encoders_version())]
struct Cli {
    /// Configuration files to load, later files override earlier ones
    #[arg(
        long,
        global = true,
        env = "ENCODERS_CONFIG",
        value_delimiter = ':',
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a page of the site
    #[command(aliases(["p", "show"]))]
    Page {
        /// The route of the page, e.g. `/about`
        #[arg(default_value = "/")]
        route: String,
    },
    /// Use the contact form
    #[command(aliases(["c"]))]
    Contact {
        #[command(subcommand)]
        command: ContactCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
