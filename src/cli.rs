//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::log_submission_adapter::LogSubmissionAdapter;
use crate::adapters::text_view;
use crate::domain::action::{self, parse_script, Action};
use crate::domain::config_validation::{validate_dashboard_config, validate_settings_config};
use crate::domain::error::DashboardError;
use crate::domain::pager::ITEMS_PER_PAGE;
use crate::domain::reference_data::ReferenceData;
use crate::domain::session::{replay, Session};
use crate::domain::settings::{
    TradingSettings, DEFAULT_INVESTMENT_PER_TRADE, DEFAULT_STOP_LOSS_PCT, DEFAULT_TAKE_PROFIT_PCT,
    DEFAULT_TRADES_PER_DAY,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::reference_port::ReferencePort;

#[derive(Parser, Debug)]
#[command(name = "tradeboard", about = "Trading dashboard and earnings selection")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dashboard, optionally scoped to a date
    Show {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_parser = action::parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = action::parse_date)]
        today: Option<NaiveDate>,
    },
    /// Apply a script of user actions and print the resulting dashboard
    Replay {
        #[arg(short, long)]
        script: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, value_parser = action::parse_date)]
        today: Option<NaiveDate>,
    },
    /// Validate a configuration file and its reference data
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let result = match cli.command {
        Command::Show {
            config,
            date,
            today,
        } => run_show(config.as_ref(), date, today),
        Command::Replay {
            script,
            config,
            today,
        } => run_replay(&script, config.as_ref(), today),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs the global logger: stderr always, plus a file when requested.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<(), DashboardError> {
    let level = level_for(verbose);
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        loggers.push(WriteLogger::new(level, Config::default(), File::create(path)?));
    }
    CombinedLogger::init(loggers).map_err(|e| DashboardError::Io(io::Error::other(e.to_string())))
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, DashboardError> {
    match path {
        Some(p) => {
            eprintln!("Loading config from {}", p.display());
            FileConfigAdapter::from_file(p)
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

pub fn build_settings(config: &dyn ConfigPort) -> Result<TradingSettings, DashboardError> {
    validate_settings_config(config)?;
    let trades_per_day = config.get_int("trading", "trades_per_day", DEFAULT_TRADES_PER_DAY as i64);
    Ok(TradingSettings {
        stop_loss_pct: config.get_double("trading", "stop_loss", DEFAULT_STOP_LOSS_PCT),
        take_profit_pct: config.get_double("trading", "take_profit", DEFAULT_TAKE_PROFIT_PCT),
        investment_per_trade: config.get_double(
            "trading",
            "investment_per_trade",
            DEFAULT_INVESTMENT_PER_TRADE,
        ),
        trades_per_day: usize::try_from(trades_per_day).map_err(|_| DashboardError::ConfigInvalid {
            section: "trading".into(),
            key: "trades_per_day".into(),
            reason: "trades_per_day must be non-negative".into(),
        })?,
    })
}

pub fn build_page_size(config: &dyn ConfigPort) -> Result<usize, DashboardError> {
    validate_dashboard_config(config)?;
    let size = config.get_int("dashboard", "page_size", ITEMS_PER_PAGE as i64);
    Ok(usize::try_from(size).unwrap_or(ITEMS_PER_PAGE))
}

/// Reference day for the historical windows: CLI override, then config,
/// then the local clock.
pub fn resolve_today(
    today_override: Option<NaiveDate>,
    config: &dyn ConfigPort,
) -> Result<NaiveDate, DashboardError> {
    if let Some(day) = today_override {
        return Ok(day);
    }
    match config.get_date("dashboard", "today") {
        Some(Ok(day)) => Ok(day),
        Some(Err(reason)) => Err(DashboardError::ConfigInvalid {
            section: "dashboard".into(),
            key: "today".into(),
            reason,
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn load_reference(config: &dyn ConfigPort) -> Result<ReferenceData, DashboardError> {
    let operations = config.get_string("dashboard", "operations").map(PathBuf::from);
    let companies = config.get_string("dashboard", "companies").map(PathBuf::from);
    if let Some(p) = &operations {
        eprintln!("Loading operations from {}", p.display());
    }
    if let Some(p) = &companies {
        eprintln!("Loading companies from {}", p.display());
    }
    CsvAdapter::new(operations, companies).load()
}

/// Everything a session needs, resolved from config and CLI flags.
pub struct Setup {
    pub reference: ReferenceData,
    pub settings: TradingSettings,
    pub page_size: usize,
    pub today: NaiveDate,
}

impl Setup {
    pub fn session(&self) -> Session<'_> {
        Session::new(&self.reference, self.settings.clone(), self.today)
            .with_page_size(self.page_size)
    }
}

pub fn prepare(
    config_path: Option<&PathBuf>,
    today_override: Option<NaiveDate>,
) -> Result<Setup, DashboardError> {
    let config = load_config(config_path)?;
    let settings = build_settings(&config)?;
    let page_size = build_page_size(&config)?;
    let today = resolve_today(today_override, &config)?;
    let reference = load_reference(&config)?;
    Ok(Setup {
        reference,
        settings,
        page_size,
        today,
    })
}

fn run_show(
    config_path: Option<&PathBuf>,
    date: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> Result<(), DashboardError> {
    let setup = prepare(config_path, today)?;
    let mut session = setup.session();
    if date.is_some() {
        session = session.apply(Action::SetDate(date)).session;
    }
    print!("{}", text_view::render(&session.view()));
    Ok(())
}

/// Replays `script` against a fresh session, writing submissions to `out`.
/// Returns the rendered final dashboard.
pub fn replay_script<W: io::Write>(
    setup: &Setup,
    script: &str,
    out: W,
) -> Result<String, DashboardError> {
    let actions = parse_script(script)?;
    eprintln!("Replaying {} actions", actions.len());
    let mut sink = LogSubmissionAdapter::new(out);
    let session = replay(setup.session(), actions, &mut sink)?;
    eprintln!("{} submissions", sink.count());
    Ok(text_view::render(&session.view()))
}

fn run_replay(
    script_path: &Path,
    config_path: Option<&PathBuf>,
    today: Option<NaiveDate>,
) -> Result<(), DashboardError> {
    let setup = prepare(config_path, today)?;
    eprintln!("Loading script from {}", script_path.display());
    let script = fs::read_to_string(script_path)?;
    let rendered = replay_script(&setup, &script, io::stdout().lock())?;
    print!("{rendered}");
    Ok(())
}

fn run_validate(config_path: &PathBuf) -> Result<(), DashboardError> {
    let setup = prepare(Some(config_path), None)?;
    eprintln!(
        "Reference data: {} operations, {} companies",
        setup.reference.operations().len(),
        setup.reference.companies().len()
    );
    eprintln!(
        "Settings: stop_loss={} take_profit={} investment_per_trade={} trades_per_day={}",
        setup.settings.stop_loss_pct,
        setup.settings.take_profit_pct,
        setup.settings.investment_per_trade,
        setup.settings.trades_per_day
    );
    eprintln!("\nConfiguration is valid.");
    Ok(())
}
