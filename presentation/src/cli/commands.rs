//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Full,
    /// JSON output
    Json,
}

/// Catalog collections reachable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CatalogCollection {
    Hotels,
    Flights,
    Fleet,
    Guides,
    Enroute,
    Amenities,
    Banks,
    Currencies,
    Taxes,
    Billing,
    Divisions,
    Markets,
    Requirements,
    Contacts,
    Profiles,
    Tariffs,
}

/// CLI arguments for tourdesk
#[derive(Parser, Debug)]
#[command(name = "tourdesk")]
#[command(author, version, about = "Travel back-office console - costing, catalog, and AI drafting")]
#[command(long_about = r#"
tourdesk is the back-office console of a travel agency: master-data catalog,
quotation costing, and AI-assisted itinerary drafting.

The costing cascade applies markup, then the management (ISO) fee, then GST,
each stage on top of the previous one, rounding to two decimals per stage.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tourdesk.toml     Project-level config
3. ~/.config/tourdesk/config.toml   Global config

Examples:
  tourdesk cost --hotel 1000 --transport 200 --markup 15 --iso 2 --gst 5
  tourdesk catalog hotels
  tourdesk itinerary "Udaipur" --nights 4 --interest heritage
  tourdesk lead "Family of four, asked about November availability"
  tourdesk console
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full", global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a cost sheet directly from cost buckets and rates
    Cost {
        #[arg(long, default_value_t = 0.0)]
        hotel: f64,
        #[arg(long, default_value_t = 0.0)]
        transport: f64,
        #[arg(long, default_value_t = 0.0)]
        flight: f64,
        #[arg(long, default_value_t = 0.0)]
        guide: f64,
        #[arg(long, default_value_t = 0.0)]
        activity: f64,
        #[arg(long, default_value_t = 0.0)]
        monument: f64,
        #[arg(long, default_value_t = 0.0)]
        meal: f64,
        #[arg(long, default_value_t = 0.0)]
        misc: f64,
        #[arg(long, default_value_t = 0.0)]
        escort: f64,
        #[arg(long, default_value_t = 0.0)]
        enroute: f64,
        #[arg(long, default_value_t = 0.0)]
        permit: f64,
        /// Markup percentage (defaults to the configured agency rate)
        #[arg(long)]
        markup: Option<f64>,
        /// ISO (management fee) percentage
        #[arg(long)]
        iso: Option<f64>,
        /// GST percentage
        #[arg(long)]
        gst: Option<f64>,
        /// Adult pax count for the per-person figure
        #[arg(long, default_value_t = 1)]
        adults: u32,
    },

    /// List a master-data collection
    Catalog {
        #[arg(value_enum)]
        collection: CatalogCollection,
    },

    /// Generate a day-wise itinerary through the AI endpoint
    Itinerary {
        /// Destination to plan for
        destination: String,
        /// Number of nights
        #[arg(short, long, default_value_t = 3)]
        nights: u32,
        /// Traveller interest (can be specified multiple times)
        #[arg(short, long, value_name = "INTEREST")]
        interest: Vec<String>,
    },

    /// Analyze free-text lead notes through the AI endpoint
    Lead {
        /// The notes to analyze
        notes: String,
    },

    /// Start the interactive admin console
    Console,

    /// Show configuration file locations and exit
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cost_command() {
        let cli = Cli::parse_from([
            "tourdesk", "cost", "--hotel", "1000", "--transport", "200", "--markup", "15",
        ]);
        match cli.command {
            Command::Cost {
                hotel,
                transport,
                markup,
                adults,
                ..
            } => {
                assert_eq!(hotel, 1000.0);
                assert_eq!(transport, 200.0);
                assert_eq!(markup, Some(15.0));
                assert_eq!(adults, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_itinerary_with_interests() {
        let cli = Cli::parse_from([
            "tourdesk",
            "itinerary",
            "Udaipur",
            "--nights",
            "4",
            "-i",
            "heritage",
            "-i",
            "food",
        ]);
        match cli.command {
            Command::Itinerary {
                destination,
                nights,
                interest,
            } => {
                assert_eq!(destination, "Udaipur");
                assert_eq!(nights, 4);
                assert_eq!(interest, vec!["heritage", "food"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tourdesk", "catalog", "hotels", "-vv", "--quiet"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
