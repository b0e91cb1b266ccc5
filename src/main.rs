//! c2pa-explorer: browse the C2PA conformance datasets from the terminal.
//!
//! Runs the interactive explorer by default; the listing subcommands print
//! the same filtered views as tables or JSON.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use c2pa_explorer::{
    cli::{self, ListOutput},
    config::{load_or_default, AppConfig, CONFIG_FILE_NAME},
    filter::{CertificateFilter, ProductFilter, ProductSortKey},
    model::DatasetKind,
    reports::ReportFormat,
    tui,
};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "c2pa-explorer")]
#[command(version)]
#[command(about = "Explore the C2PA conforming-products list and trust lists", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred

EXAMPLES:
    # Interactive explorer
    c2pa-explorer

    # Validators from one vendor, oldest conformance first
    c2pa-explorer products --type Validator --vendor Acme --sort conformance-date-asc

    # Trust-list certificates as JSON
    c2pa-explorer trust-list -o json

    # Use a downloaded copy of the products list
    c2pa-explorer --products-source ./conforming-products-list.json products")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    sources: SourceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Dataset location and fetch overrides (URL or local path).
#[derive(Args)]
struct SourceArgs {
    /// Conforming-products list location
    #[arg(long, global = true, env = "C2PA_EXPLORER_PRODUCTS")]
    products_source: Option<String>,

    /// Trust list location
    #[arg(long, global = true, env = "C2PA_EXPLORER_TRUST_LIST")]
    trust_list_source: Option<String>,

    /// TSA trust list location
    #[arg(long, global = true, env = "C2PA_EXPLORER_TSA_TRUST_LIST")]
    tsa_trust_list_source: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

impl SourceArgs {
    fn apply(self, config: &mut AppConfig) {
        for (kind, location) in [
            (DatasetKind::Products, self.products_source),
            (DatasetKind::TrustList, self.trust_list_source),
            (DatasetKind::TsaTrustList, self.tsa_trust_list_source),
        ] {
            if let Some(location) = location {
                config.sources.set(kind, location);
            }
        }
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
    }
}

/// Output options shared by the listing commands
#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,
}

impl OutputArgs {
    fn into_list_output(self, quiet: bool) -> ListOutput {
        ListOutput {
            format: self.output,
            file: self.output_file,
            no_color: self.no_color,
            quiet,
        }
    }
}

/// Arguments for the `products` subcommand
#[derive(Args)]
struct ProductsArgs {
    /// Only products from this vendor (exact match)
    #[arg(long)]
    vendor: Option<String>,

    /// Only this product type (Generator or Validator)
    #[arg(long = "type")]
    product_type: Option<String>,

    /// Only this assurance level, e.g. "Level 2"
    #[arg(long)]
    assurance: Option<String>,

    /// Media types to match (any of), e.g. image,video
    #[arg(long, value_delimiter = ',')]
    media: Vec<String>,

    /// File formats to match (any of); requires --media
    #[arg(long = "file-format", value_delimiter = ',', requires = "media")]
    formats: Vec<String>,

    /// Case-insensitive search across product, vendor, unit and record id
    #[arg(short, long)]
    search: Option<String>,

    /// Sort order
    #[arg(long, default_value_t = ProductSortKey::default())]
    sort: ProductSortKey,

    #[command(flatten)]
    output: OutputArgs,
}

impl ProductsArgs {
    fn filter(&self) -> ProductFilter {
        let mut filter = ProductFilter::sorted_by(self.sort);
        filter.vendor = self.vendor.clone().unwrap_or_default();
        filter.product_type = self.product_type.clone().unwrap_or_default();
        filter.assurance_level = self.assurance.clone().unwrap_or_default();
        filter.search = self.search.clone().unwrap_or_default();
        filter.set_media_types(self.media.iter().cloned());
        filter.set_formats(self.formats.iter().cloned());
        filter
    }
}

/// Arguments for the certificate listing subcommands
#[derive(Args)]
struct CertificateArgs {
    /// Only certificates of this organization (exact match)
    #[arg(long)]
    organization: Option<String>,

    /// Case-insensitive search across common name and subject
    #[arg(short, long)]
    search: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl CertificateArgs {
    fn filter(&self) -> CertificateFilter {
        CertificateFilter {
            organization: self.organization.clone().unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive explorer (default)
    Explore,

    /// List conforming products
    Products(ProductsArgs),

    /// List certificates of the C2PA trust list
    TrustList(CertificateArgs),

    /// List certificates of the C2PA TSA trust list
    TsaTrustList(CertificateArgs),

    /// Show, initialize or describe the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file + flags)
    Show,
    /// Print the JSON schema of the config file
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write an example config file
    Init {
        /// Target path
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(cli::exit_codes::ERROR);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(tui::LogWriter::new),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
    cli.sources.apply(&mut config);
    let quiet = cli.quiet;

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => cli::run_explore(&config),

        Commands::Products(args) => {
            let store = cli::build_store(&config)?;
            let filter = args.filter();
            cli::run_products(&store, &filter, &args.output.into_list_output(quiet))
        }

        Commands::TrustList(args) => {
            let store = cli::build_store(&config)?;
            let filter = args.filter();
            cli::run_certificates(
                &store,
                DatasetKind::TrustList,
                &filter,
                &args.output.into_list_output(quiet),
            )
        }

        Commands::TsaTrustList(args) => {
            let store = cli::build_store(&config)?;
            let filter = args.filter();
            cli::run_certificates(
                &store,
                DatasetKind::TsaTrustList,
                &filter,
                &args.output.into_list_output(quiet),
            )
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(&config, loaded_from.as_deref()),
            ConfigAction::Schema { output } => cli::run_config_schema(output),
            ConfigAction::Init { path, force } => cli::run_config_init(&path, force),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "c2pa-explorer", &mut io::stdout());
            io::stdout().flush()?;
            Ok(cli::exit_codes::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_explore() {
        let cli = Cli::try_parse_from(["c2pa-explorer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_products_args_build_filter() {
        let cli = Cli::try_parse_from([
            "c2pa-explorer",
            "products",
            "--vendor",
            "Acme",
            "--media",
            "image,video",
            "--file-format",
            "png",
            "--sort",
            "creationDateAsc",
        ])
        .unwrap();
        let Some(Commands::Products(args)) = cli.command else {
            panic!("expected products command");
        };
        let filter = args.filter();
        assert_eq!(filter.vendor, "Acme");
        assert_eq!(filter.media_types().len(), 2);
        assert!(filter.formats().contains("png"));
        assert_eq!(filter.sort, ProductSortKey::CreationDateAsc);
    }

    #[test]
    fn test_formats_require_media() {
        assert!(Cli::try_parse_from(["c2pa-explorer", "products", "--file-format", "png"]).is_err());
    }

    #[test]
    fn test_source_overrides_apply() {
        let cli = Cli::try_parse_from([
            "c2pa-explorer",
            "--trust-list-source",
            "./trust.pem",
            "--timeout",
            "5",
            "trust-list",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.sources.apply(&mut config);
        assert_eq!(config.sources.trust_list, "./trust.pem");
        assert_eq!(config.fetch.timeout_secs, 5);
    }
}
