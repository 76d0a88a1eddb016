use std::path::{Path, PathBuf};

mod analyse;
mod enclosures;
mod species;
mod terminal;

use analyse::Analyse;
use clap::ArgAction;
use enclosures::Enclosures;
use species::SpeciesList;
use tracing::instrument;
use zoo::{Matcher, ZooConfig};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// A TOML file describing the species catalog and enclosure inventory.
    ///
    /// The built-in reference zoo is used when this is not given.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.command.run(self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries results, so diagnostics go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Find the enclosures that can house a group of animals
    Analyse(Analyse),

    /// List the enclosures and who lives in them
    Enclosures(Enclosures),

    /// List the species the zoo can house
    Species(SpeciesList),

    /// Write the reference zoo to a configuration file
    Init(Init),
}

impl Command {
    fn run(self, config: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Analyse(command) => command.run(&load_matcher(config)?)?,
            Self::Enclosures(command) => command.run(&load_matcher(config)?)?,
            Self::Species(command) => command.run(&load_matcher(config)?)?,
            Self::Init(command) => command.run()?,
        }
        Ok(())
    }
}

fn load_matcher(config: Option<&Path>) -> anyhow::Result<Matcher> {
    let Some(path) = config else {
        tracing::debug!("Using the built-in reference zoo");
        return Ok(Matcher::default());
    };

    let config = ZooConfig::load(path)?;
    Ok(Matcher::from(config))
}

/// The output format of listing commands.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Where to write the configuration file
    #[arg(default_value = "zoo.toml")]
    path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    force: bool,
}

impl Init {
    #[instrument]
    fn run(self) -> anyhow::Result<()> {
        use terminal::Paint;

        if self.path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            );
        }

        ZooConfig::default().save(&self.path)?;

        println!(
            "{}",
            format!("Wrote reference zoo to {}", self.path.display()).accepted()
        );
        println!("{}", "Edit it, then pass it with --config.".muted());
        Ok(())
    }
}
