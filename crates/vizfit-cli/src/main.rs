//! vizfit command-line interface.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use vizfit_cli::commands::{load_catalog, run_charts, run_classify, run_profile};
use vizfit_cli::logging::{LogConfig, LogFormat, init_logging};
use vizfit_ingest::MergeMode;

mod cli;
mod summary;

use crate::cli::{ChartsArgs, Cli, ClassifyArgs, Command, InputArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_charts, print_classification, print_json, print_profile};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Classify(args) => classify(args),
        Command::Profile(args) => profile(&args.input),
        Command::Charts(args) => charts(args),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn classify(args: &ClassifyArgs) -> anyhow::Result<()> {
    let (catalog, _) = load_catalog(args.catalog.catalog.as_deref())?;
    let report = run_classify(
        &args.input.source,
        merge_mode(&args.input),
        catalog,
        args.explain,
    )?;
    if args.json {
        print_json(&report)
    } else {
        print_classification(&report);
        Ok(())
    }
}

fn profile(args: &InputArgs) -> anyhow::Result<()> {
    let report = run_profile(&args.source, merge_mode(args))?;
    print_profile(&report);
    Ok(())
}

fn charts(args: &ChartsArgs) -> anyhow::Result<()> {
    let (catalog, origin) = load_catalog(args.catalog.catalog.as_deref())?;
    print_charts(&run_charts(catalog, &origin));
    Ok(())
}

fn merge_mode(args: &InputArgs) -> MergeMode {
    if args.merge {
        MergeMode::SharedKeys
    } else {
        MergeMode::MajorityKeyset
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
