use clap::Parser;
use serde_json::json;
use tracing::instrument;
use zoo::Matcher;

use super::{terminal::Paint, OutputFormat};

#[derive(Debug, Parser, Default)]
pub struct SpeciesList {
    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl SpeciesList {
    #[instrument(level = "debug", skip(matcher))]
    pub fn run(self, matcher: &Matcher) -> anyhow::Result<()> {
        let catalog = matcher.catalog();

        match self.output {
            OutputFormat::Json => {
                let species: Vec<_> = catalog
                    .iter()
                    .map(|(species, profile)| {
                        json!({
                            "species": species,
                            "size": profile.size,
                            "biomes": profile.biomes,
                            "carnivore": profile.carnivore,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&species)?);
            }
            OutputFormat::Text => {
                println!("{:<12} {:<6} {:<18} Diet", "Species", "Size", "Biomes");
                println!("{}", "─".repeat(46).muted());
                for (species, profile) in catalog.iter() {
                    let biomes = profile
                        .biomes
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    let diet = if profile.carnivore {
                        "carnivore".rejected()
                    } else {
                        "herbivore".accepted()
                    };
                    println!(
                        "{:<12} {:<6} {biomes:<18} {diet}",
                        species.id(),
                        profile.size
                    );
                }
            }
        }
        Ok(())
    }
}
