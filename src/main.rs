use clap::Parser;
use leadscore::batch::{BatchScorer, BreakdownField};
use leadscore::cli::{self, Cli, Commands, ConfigCommand};
use leadscore::error::LeadScoreError;
use leadscore::report::{self, export};
use leadscore::scoring::ScoringEngine;
use leadscore::store::{
    load_scoring_config, FileSettingsStore, MemorySettingsStore, SettingsStore,
};
use leadscore::types::config::AppConfig;
use leadscore::types::scoring::ScoringConfig;
use leadscore::{config, ingest, telemetry};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, LeadScoreError> {
    let cli = Cli::parse();
    let layered = config::load_config(&std::env::current_dir()?)?;
    let level = telemetry::resolve_level(cli.verbose, cli.quiet, &layered.config.telemetry);
    telemetry::init(&level)?;
    for layer in &layered.layers {
        tracing::debug!(path = %layer.display(), "applied config layer");
    }
    let app_config = layered.config;

    match cli.command {
        Commands::Score(cmd) => score(cmd, &app_config),
        Commands::Explain(cmd) => {
            let leads = ingest::load_leads(&cmd.leads)?;
            let lead = cmd
                .row
                .checked_sub(1)
                .and_then(|index| leads.get(index))
                .ok_or_else(|| {
                    LeadScoreError::InvalidInput(format!(
                        "row {} is out of range; {} has {} lead(s)",
                        cmd.row,
                        cmd.leads.display(),
                        leads.len()
                    ))
                })?;

            let store = settings_store(cmd.settings.as_deref(), &app_config);
            let loaded = load_scoring_config(store.as_ref());
            let result = ScoringEngine::new(&loaded.config).score(lead);
            println!("{}", report::md::explanation_to_markdown(cmd.row, &result));

            if lead.is_surveyed() {
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("warning: row {} has no survey answers; batch scoring skips it", cmd.row);
                Ok(exit_code::WARNINGS)
            }
        }
        Commands::Config(ConfigCommand::Show(cmd)) => {
            let store = settings_store(cmd.settings.as_deref(), &app_config);
            let loaded = load_scoring_config(store.as_ref());
            tracing::info!(source = ?loaded.source, "effective scoring config");
            println!("{}", serde_json::to_string_pretty(&loaded.config)?);
            Ok(exit_code::SUCCESS)
        }
        Commands::Config(ConfigCommand::Validate(cmd)) => {
            if !cmd.file.exists() {
                return Err(LeadScoreError::PathNotFound(cmd.file.display().to_string()));
            }
            let text = std::fs::read_to_string(&cmd.file)?;
            let config = match serde_json::from_str::<ScoringConfig>(&text) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("invalid: {err}");
                    return Ok(exit_code::INVALID);
                }
            };

            let warnings = config.warnings();
            if warnings.is_empty() {
                println!("ok: {}", cmd.file.display());
                return Ok(exit_code::SUCCESS);
            }
            for warning in &warnings {
                println!("warning: {warning}");
            }
            Ok(exit_code::WARNINGS)
        }
    }
}

fn score(cmd: cli::ScoreCommand, app_config: &AppConfig) -> Result<i32, LeadScoreError> {
    let leads = ingest::load_leads(&cmd.leads)?;
    let store = settings_store(cmd.settings.as_deref(), app_config);
    let fields = if cmd.group_by.is_empty() {
        app_config.breakdown_fields()
    } else {
        cmd.group_by.iter().copied().map(BreakdownField::from).collect()
    };

    let run = BatchScorer::new(store.as_ref()).run(&leads, &fields);
    let config_warnings = run.loaded.config.warnings();

    if let Some(path) = &cmd.export {
        let file = File::create(path)?;
        export::write_scored_csv(BufWriter::new(file), &run.summary.scored)?;
        tracing::info!(path = %path.display(), leads = run.summary.scored.len(), "exported scored leads");
    }

    let batch_report = report::build_report(run)?;
    let format = cmd
        .format
        .map(Into::into)
        .unwrap_or_else(|| app_config.output_format());
    println!("{}", report::render(&batch_report, format)?);

    for warning in &config_warnings {
        eprintln!("warning: scoring config: {warning}");
    }
    if batch_report.surveyed_leads == 0 {
        eprintln!("warning: no surveyed leads in {}", cmd.leads.display());
    }

    if batch_report.surveyed_leads == 0 || !config_warnings.is_empty() {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn settings_store(flag: Option<&Path>, app_config: &AppConfig) -> Box<dyn SettingsStore> {
    match flag
        .map(Path::to_path_buf)
        .or_else(|| app_config.store.settings_file.clone())
    {
        Some(path) => Box::new(FileSettingsStore::new(path)),
        None => Box::new(MemorySettingsStore::default()),
    }
}

fn exit_code_for(err: &LeadScoreError) -> i32 {
    match err {
        LeadScoreError::PathNotFound(_)
        | LeadScoreError::InvalidInput(_)
        | LeadScoreError::ConfigParse(_)
        | LeadScoreError::Toml(_)
        | LeadScoreError::Json(_)
        | LeadScoreError::Csv(_) => exit_code::INVALID,
        LeadScoreError::Io(_) | LeadScoreError::Telemetry(_) => exit_code::RUNTIME_FAILURE,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
