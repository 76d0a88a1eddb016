use clap::Parser;
use serde_json::json;
use tracing::instrument;
use zoo::{matcher::occupied_space, Enclosure, Matcher, SpeciesCatalog};

use super::{
    terminal::{is_narrow, Paint},
    OutputFormat,
};

#[derive(Debug, Parser, Default)]
pub struct Enclosures {
    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,
}

impl Enclosures {
    #[instrument(level = "debug", skip(matcher))]
    pub fn run(self, matcher: &Matcher) -> anyhow::Result<()> {
        let catalog = matcher.catalog();

        match self.output {
            OutputFormat::Json => {
                let enclosures: Vec<_> = matcher
                    .inventory()
                    .iter()
                    .map(|enclosure| {
                        json!({
                            "number": enclosure.number,
                            "biomes": enclosure.biomes,
                            "capacity": enclosure.capacity,
                            "used": space_in_use(enclosure, catalog),
                            "occupants": enclosure.occupants,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&enclosures)?);
            }
            OutputFormat::Text => Self::output_table(matcher),
        }
        Ok(())
    }

    fn output_table(matcher: &Matcher) {
        let catalog = matcher.catalog();
        let narrow = is_narrow();

        if !narrow {
            println!("{:<8} {:<16} {:<8} Occupants", "Number", "Biomes", "Used");
            println!("{}", "─".repeat(48).muted());
        }

        for enclosure in matcher.inventory() {
            let biomes = enclosure
                .biomes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let used = format!("{}/{}", space_in_use(enclosure, catalog), enclosure.capacity);
            let occupants = if enclosure.is_empty() {
                "empty".muted()
            } else {
                enclosure
                    .occupants
                    .iter()
                    .map(|o| format!("{} × {}", o.count, o.species))
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            if narrow {
                println!("Recinto {} ({biomes}) {used}: {occupants}", enclosure.number);
            } else {
                println!("{:<8} {biomes:<16} {used:<8} {occupants}", enclosure.number);
            }
        }
    }
}

/// Space the current residents take up, counting the overhead for mixed
/// species.
fn space_in_use(enclosure: &Enclosure, catalog: &SpeciesCatalog) -> u64 {
    enclosure
        .occupants
        .first()
        .map_or(0, |resident| occupied_space(enclosure, resident.species, catalog))
}
