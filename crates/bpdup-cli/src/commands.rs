use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use bpdup_ingest::{load_ignore_words, write_example_input};
use bpdup_match::{ScoreBreakdown, classify, normalize_bounded, score_breakdown};
use bpdup_model::{ConfidenceLevel, EmptyNamePolicy, IgnoreWordSet};
use bpdup_report::ExportFormat;
use tracing::{info, info_span};

use bpdup_cli::pipeline::{CheckOutput, ExportTargets, export_check, match_file};
use bpdup_cli::settings::{Settings, load_settings};

use crate::cli::{CheckArgs, EmptyNamesArg, ExampleArgs, ExportFormatArg, NameArgs, ScoreArgs};
use crate::progress::{comparison_bar, update_from};

/// Everything `check` produced, for printing.
pub struct CheckResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub summary_output: Option<PathBuf>,
    pub check: CheckOutput,
}

/// Result of `score`.
pub struct ScoreResult {
    pub first: String,
    pub second: String,
    pub breakdown: ScoreBreakdown,
    pub confidence: ConfidenceLevel,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut settings = base_settings(&args.names)?;
    if let Some(min_score) = args.min_score {
        settings.minimum_score = min_score;
    }
    if let Some(top_n) = args.top_n {
        settings.top_n = top_n;
    }
    if let Some(empty_names) = args.empty_names {
        settings.empty_names = match empty_names {
            EmptyNamesArg::Exclude => EmptyNamePolicy::Exclude,
            EmptyNamesArg::Compare => EmptyNamePolicy::Compare,
        };
    }

    let mut config = settings
        .to_match_config()
        .context("invalid match settings")?
        .with_parallel(!args.sequential);
    extend_from_file(&mut config.ignore_words, args.names.ignore_words_file.as_deref())?;

    let bar = comparison_bar();
    let check = match_file(&args.input, config, update_from(bar.clone()));
    bar.finish_and_clear();
    let check = check?;

    let targets = ExportTargets {
        output: args.output.clone(),
        format: export_format(args.format),
        summary_output: args.summary_output.clone(),
    };
    export_check(
        &check,
        settings.top_n,
        &targets,
        chrono::Local::now().naive_local(),
    )?;

    info!(
        pairs = check.outcome.pairs.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "check complete"
    );

    Ok(CheckResult {
        input: args.input.clone(),
        output: args.output.clone(),
        summary_output: args.summary_output.clone(),
        check,
    })
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let settings = base_settings(&args.names)?;
    let mut config = settings
        .to_match_config()
        .context("invalid match settings")?;
    extend_from_file(&mut config.ignore_words, args.names.ignore_words_file.as_deref())?;

    let first = normalize_bounded(&args.first, &config.ignore_words, config.max_name_chars);
    let second = normalize_bounded(&args.second, &config.ignore_words, config.max_name_chars);
    let breakdown = score_breakdown(&first, &second);

    Ok(ScoreResult {
        confidence: classify(breakdown.combined),
        first,
        second,
        breakdown,
    })
}

pub fn run_example(args: &ExampleArgs) -> Result<()> {
    write_example_input(&args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    println!("Example input written to {}", args.output.display());
    Ok(())
}

pub fn run_settings() -> Result<()> {
    print!("{}", Settings::default().to_toml()?);
    Ok(())
}

/// Settings from `--config` (or defaults) with the name options applied.
fn base_settings(args: &NameArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    if args.no_default_ignore_words {
        settings.use_default_ignore_words = false;
    }
    settings
        .ignore_words
        .extend(args.ignore_words.iter().cloned());
    Ok(settings)
}

fn extend_from_file(words: &mut IgnoreWordSet, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let extra = load_ignore_words(path)
            .with_context(|| format!("load ignore words {}", path.display()))?;
        words.extend(extra.iter());
    }
    Ok(())
}

fn export_format(arg: ExportFormatArg) -> ExportFormat {
    match arg {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Ranked => ExportFormat::RankedCsv,
        ExportFormatArg::Json => ExportFormat::Json,
    }
}
