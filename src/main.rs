use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use paper_lookup::config::{
    default_config_path, find_config_file, load_config, load_env_config, Config, ConfigFile,
};
use paper_lookup::models::{Field, SearchQuery, SearchStrategy};
use paper_lookup::search::{lookup, normalize, LookupConfig, LookupOutcome};
use paper_lookup::utils::{is_terminal, load_records, render_plain, render_table, terminal_width};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paper Lookup - Search a bibliographic dataset by title, author, or year
#[derive(Parser, Debug)]
#[command(name = "paper-lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search a bibliographic dataset by title, author, or year", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset file (CSV with a header line, or a JSON array of rows); overrides `[data] path`
    #[arg(long, short, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search records by one field
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Field to search: title, author, year, or link
        #[arg(long, short, default_value_t = Field::Title)]
        field: Field,

        /// Lookup strategy: linear or binary (default: from config, else linear)
        #[arg(long, short)]
        strategy: Option<SearchStrategy>,
    },

    /// Show how an author name is normalized for matching
    #[command(alias = "n")]
    Normalize {
        /// Raw author name, e.g. "Smith, John (MIT)"
        name: String,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write (default: the per-user config path)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => load_env_config().context("failed to read PAPER_LOOKUP_* environment settings")?,
    };

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("paper_lookup={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    match cli.command {
        Commands::Search {
            query,
            field,
            strategy,
        } => {
            let data_path = cli
                .data
                .or_else(|| config.data.path.clone())
                .context("no dataset given; pass --data or set `path` under [data] in the config file")?;

            let records = load_records(&data_path, &config.data.columns)?;
            let strategy = strategy.unwrap_or(config.search.strategy);

            let lookup_config = LookupConfig::new(strategy, &records);
            let query = SearchQuery::new(field, query);
            let outcome = lookup(&records, &lookup_config, &query);

            output_records(&outcome, cli.output, cli.quiet)?;
        }

        Commands::Normalize { name } => {
            println!("{}", normalize(&name));
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", ConfigFile::new(config).to_toml()?);
            }
            ConfigAction::Init { path, force } => {
                let path = path
                    .or_else(default_config_path)
                    .context("could not determine a config directory; pass --path")?;

                if path.exists() && !force {
                    anyhow::bail!(
                        "{} already exists; pass --force to overwrite",
                        path.display()
                    );
                }

                ConfigFile::new(Config::default()).save(&path)?;
                if !cli.quiet {
                    println!("Wrote default configuration to {}", path.display());
                }
            }
        },
    }

    Ok(())
}

fn output_records(outcome: &LookupOutcome<'_>, format: OutputFormat, quiet: bool) -> Result<()> {
    let tty = is_terminal();
    let actual_format = if format == OutputFormat::Auto {
        if tty {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    if actual_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
        return Ok(());
    }

    if outcome.is_empty() {
        if !quiet {
            if tty {
                println!("{}", "No matches found.".yellow());
            } else {
                println!("No matches found.");
            }
        }
        return Ok(());
    }

    if !quiet {
        let header = format!("Found {} papers:", outcome.len());
        if tty {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }
    }

    match actual_format {
        OutputFormat::Table => println!("{}", render_table(&outcome.records, terminal_width())),
        OutputFormat::Plain => print!("{}", render_plain(&outcome.records)),
        OutputFormat::Json | OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_version() {
        let cli = Cli::try_parse_from(["paper-lookup", "--version"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_search_defaults() {
        let cli = Cli::parse_from(["paper-lookup", "search", "banana"]);
        assert_eq!(cli.output, OutputFormat::Auto);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        match &cli.command {
            Commands::Search {
                query,
                field,
                strategy,
            } => {
                assert_eq!(query, "banana");
                assert_eq!(*field, Field::Title);
                assert_eq!(*strategy, None);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_with_options() {
        let cli = Cli::parse_from([
            "paper-lookup",
            "-vv",
            "s",
            "Jane Doe",
            "--field",
            "author",
            "--strategy",
            "binary",
            "--data",
            "papers.json",
            "-o",
            "plain",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data, Some(PathBuf::from("papers.json")));
        assert_eq!(cli.output, OutputFormat::Plain);
        match &cli.command {
            Commands::Search {
                query,
                field,
                strategy,
            } => {
                assert_eq!(query, "Jane Doe");
                assert_eq!(*field, Field::Author);
                assert_eq!(*strategy, Some(SearchStrategy::Binary));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_normalize_command() {
        let cli = Cli::parse_from(["paper-lookup", "n", "Smith, John (MIT)"]);
        match &cli.command {
            Commands::Normalize { name } => assert_eq!(normalize(name), "John Smith"),
            _ => panic!("Expected Normalize command"),
        }
    }

    #[test]
    fn test_cli_config_init() {
        let cli = Cli::parse_from(["paper-lookup", "config", "init", "--path", "/tmp/x.toml", "--force"]);
        match &cli.command {
            Commands::Config {
                action: ConfigAction::Init { path, force },
            } => {
                assert_eq!(path.as_deref(), Some(std::path::Path::new("/tmp/x.toml")));
                assert!(*force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_config_flag() {
        let cli = Cli::parse_from([
            "paper-lookup",
            "--config",
            "/path/to/config.toml",
            "config",
            "show",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_cli_field_aliases() {
        let cli = Cli::parse_from(["paper-lookup", "search", "x", "-f", "URL", "-s", "Linear"]);
        match &cli.command {
            Commands::Search { field, strategy, .. } => {
                assert_eq!(*field, Field::Link);
                assert_eq!(*strategy, Some(SearchStrategy::Linear));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        let cli = Cli::try_parse_from(["paper-lookup", "search", "x", "--strategy", "hash"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_field() {
        let cli = Cli::try_parse_from(["paper-lookup", "search", "x", "--field", "abstract"]);
        assert!(cli.is_err());
    }
}
