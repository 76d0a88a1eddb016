use clap::Parser;
use tracing::instrument;
use zoo::{Assessment, Matcher, Verdict};

use super::{
    terminal::{is_narrow, Paint},
    OutputFormat,
};

#[derive(Debug, Parser)]
pub struct Analyse {
    /// The species to house (e.g. MACACO, LEAO). Case-insensitive.
    species: String,

    /// How many animals to house
    #[arg(allow_hyphen_values = true)]
    count: String,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Show the verdict for every enclosure, not just the viable ones
    #[arg(long)]
    explain: bool,
}

impl Analyse {
    #[instrument(level = "debug", skip(matcher))]
    pub fn run(self, matcher: &Matcher) -> anyhow::Result<()> {
        // CLI boundary: species ids are upper case
        let species = self.species.trim().to_uppercase();
        let query = matcher.query(&species, self.count.trim())?;

        if self.explain {
            let assessments = matcher.assess(query)?;
            match self.output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&assessments)?);
                }
                OutputFormat::Text => Self::output_explained(&assessments),
            }
            return Ok(());
        }

        let matches = matcher.matches(query)?;
        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
            OutputFormat::Text => {
                for found in &matches {
                    println!("{found}");
                }
            }
        }
        Ok(())
    }

    fn output_explained(assessments: &[Assessment]) {
        let narrow = is_narrow();

        for assessment in assessments {
            let header = format!("Recinto {}", assessment.enclosure);
            let usage = format!("{}/{}", assessment.occupied, assessment.capacity);

            let verdict = match assessment.verdict {
                Verdict::Accepted { free_space } => {
                    format!("✅ espaço livre: {free_space}").accepted()
                }
                Verdict::Rejected { reason } => format!("✗ {reason}").rejected(),
            };

            if narrow {
                println!("{header}: {verdict}");
            } else {
                println!("{header:<12} {} {verdict}", format!("{usage:<8}").muted());
            }
        }
    }
}
