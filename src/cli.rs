use crate::batch::BreakdownField;
use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "leadscore",
    version,
    about = "Score survey leads into hot/warm/lukewarm/cold tiers"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a lead export and print the batch report
    Score(ScoreCommand),
    /// Show how each question contributed to one lead's score
    Explain(ExplainCommand),
    /// Inspect scoring configurations
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// CSV or JSON export, or a directory of them
    pub leads: PathBuf,
    /// Settings file holding `lead_scoring_config`
    #[arg(long)]
    pub settings: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Field to break the tiers down by (repeatable)
    #[arg(long = "group-by", value_enum)]
    pub group_by: Vec<GroupBy>,
    /// Write the scored leads as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExplainCommand {
    pub leads: PathBuf,
    /// 1-based position of the lead in the export
    #[arg(long)]
    pub row: usize,
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective scoring configuration as JSON
    Show(ConfigShowCommand),
    /// Check a scoring configuration file
    Validate(ConfigValidateCommand),
}

#[derive(Args)]
pub struct ConfigShowCommand {
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigValidateCommand {
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GroupBy {
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmContent,
    UtmTerm,
    SocialNetwork,
    Region,
}

impl From<GroupBy> for BreakdownField {
    fn from(group: GroupBy) -> Self {
        match group {
            GroupBy::UtmSource => BreakdownField::UtmSource,
            GroupBy::UtmMedium => BreakdownField::UtmMedium,
            GroupBy::UtmCampaign => BreakdownField::UtmCampaign,
            GroupBy::UtmContent => BreakdownField::UtmContent,
            GroupBy::UtmTerm => BreakdownField::UtmTerm,
            GroupBy::SocialNetwork => BreakdownField::SocialNetwork,
            GroupBy::Region => BreakdownField::Region,
        }
    }
}
