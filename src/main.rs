use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use league_history::{
    check_league, db, export_league, DirectorySource, ExportFormat, LeagueConfig, LeagueData,
};

/// Historical league statistics from raw season exports
#[derive(Parser)]
#[command(name = "league-history")]
#[command(about = "Derive standings, records and superlatives from raw league exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the seasons come from and how to read them
#[derive(Args)]
struct Source {
    /// Directory holding one <year>.json per season
    #[arg(short, long)]
    input: PathBuf,

    /// League configuration JSON (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Derive every collection and write it to the output directory
    Derive {
        #[command(flatten)]
        source: Source,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Also write the league into this SQLite file
        #[arg(long)]
        sqlite: Option<PathBuf>,
    },
    /// Superlatives of one season
    Superlatives {
        #[command(flatten)]
        source: Source,

        #[arg(short, long)]
        year: u16,
    },
    /// All-time superlatives
    HallOfFame {
        #[command(flatten)]
        source: Source,
    },
    /// Week-by-week cumulative record of every team in one season
    Performance {
        #[command(flatten)]
        source: Source,

        #[arg(short, long)]
        season: u16,
    },
    /// Integrity report; exits non-zero on critical issues
    Check {
        #[command(flatten)]
        source: Source,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Derive {
            source,
            output,
            format,
            sqlite,
        } => run_derive(&source, &output, format.into(), sqlite),
        Commands::Superlatives { source, year } => {
            let data = load(&source)?;
            print_json(&data.superlatives(year)?)
        }
        Commands::HallOfFame { source } => {
            let data = load(&source)?;
            print_json(&data.hall_of_fame()?)
        }
        Commands::Performance { source, season } => {
            let data = load(&source)?;
            print_json(&data.season_performance(season))
        }
        Commands::Check { source } => run_check(&source),
    }
}

fn load(source: &Source) -> Result<LeagueData> {
    let config = LeagueConfig::load(source.config.as_deref())?;
    let data = LeagueData::load(&DirectorySource::new(&source.input), &config)
        .with_context(|| format!("Failed to load seasons from {:?}", source.input))?;
    Ok(data)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_derive(source: &Source, output: &Path, format: ExportFormat, sqlite: Option<PathBuf>) -> Result<()> {
    println!("🏈 League History - derive");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n📂 Loading seasons from {:?}...", source.input);
    let data = load(source)?;
    println!("✓ {} seasons, {} owners", data.years.len(), data.owners.len());

    println!("\n💾 Writing {} collections...", format.extension());
    let manifest = export_league(&data, output, format)?;
    for entry in &manifest.files {
        println!("✓ {:<24} {:>6} rows", entry.file, entry.rows);
    }

    if let Some(path) = sqlite {
        println!("\n🗄️  Writing SQLite database {:?}...", path);
        let mut conn = db::open_database(&path)?;
        db::write_league(&mut conn, &data)?;
        println!("✓ {} standings, {} matchups", data.standings.len(), data.matchups.len());
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Export complete: {:?}", output);
    Ok(())
}

fn run_check(source: &Source) -> Result<()> {
    let data = load(source)?;
    let report = check_league(&data);

    for issue in &report.issues {
        let year = issue.year.map(|y| y.to_string()).unwrap_or_else(|| "all".to_string());
        println!("{:?} [{}] {}: {}", issue.severity, issue.rule_name, year, issue.issue);
    }
    println!("{}", report.summary());

    if report.has_critical_issues() {
        eprintln!("❌ Critical data quality issues found");
        std::process::exit(1);
    }
    Ok(())
}
