//! CLI entrypoint for tourdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tourdesk_application::{
    AnalyzeLeadInput, AnalyzeLeadUseCase, EntityStore, GenerateItineraryInput,
    GenerateItineraryUseCase,
};
use tourdesk_domain::{CatalogEntry, CostInputs, CostSheet, RateParams};
use tourdesk_infrastructure::{
    AiEndpointConfig, ConfigLoader, FileConfig, HttpAiGateway, InMemoryStore, seed,
};
use tourdesk_presentation::{
    AdminConsole, CatalogCollection, Cli, Command, ConsoleFormatter, OutputFormat,
    ProgressReporter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting tourdesk");

    // Load configuration (figment merge) unless disabled
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let defaults = config.agency.to_defaults();

    match cli.command {
        Command::Cost {
            hotel,
            transport,
            flight,
            guide,
            activity,
            monument,
            meal,
            misc,
            escort,
            enroute,
            permit,
            markup,
            iso,
            gst,
            adults,
        } => {
            let inputs = CostInputs {
                hotel,
                transport,
                flight,
                guide,
                activity,
                monument,
                meal,
                misc,
                escort,
                enroute,
                permit,
            };
            let rates = RateParams::new(
                markup.unwrap_or(defaults.markup_percentage),
                iso.unwrap_or(defaults.iso_commission),
                gst.unwrap_or(defaults.gst_percentage),
            );
            let sheet = CostSheet::compute(inputs, rates);

            let output = match cli.output {
                OutputFormat::Full => ConsoleFormatter::format_sheet(&sheet, adults),
                OutputFormat::Json => ConsoleFormatter::format_json(&sheet),
            };
            println!("{}", output);
        }

        Command::Catalog { collection } => {
            print_collection(collection, cli.output).await?;
        }

        Command::Itinerary {
            destination,
            nights,
            interest,
        } => {
            let gateway = build_gateway(&config)?;
            let use_case = GenerateItineraryUseCase::new(gateway);

            let mut input = GenerateItineraryInput::new(destination, nights);
            for i in interest {
                input = input.with_interest(i);
            }

            let result = if cli.quiet {
                use_case.execute(input).await
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(input, &progress).await
            };

            match result {
                Ok(itinerary) => {
                    let output = match cli.output {
                        OutputFormat::Full => ConsoleFormatter::format_itinerary(&itinerary),
                        OutputFormat::Json => ConsoleFormatter::format_json(&itinerary),
                    };
                    println!("{}", output);
                }
                Err(e) => bail!("itinerary generation failed: {}", e),
            }
        }

        Command::Lead { notes } => {
            let gateway = build_gateway(&config)?;
            let use_case = AnalyzeLeadUseCase::new(gateway);
            let input = AnalyzeLeadInput::new(notes);

            // Infallible past this point: failures collapse into the
            // neutral fallback analysis.
            let analysis = if cli.quiet {
                use_case.execute(input).await
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(input, &progress).await
            };

            let output = match cli.output {
                OutputFormat::Full => ConsoleFormatter::format_lead(&analysis),
                OutputFormat::Json => ConsoleFormatter::format_json(&analysis),
            };
            println!("{}", output);
        }

        Command::Console => {
            let gateway = if config.ai.endpoint.trim().is_empty() {
                None
            } else {
                Some(build_gateway(&config)?)
            };

            let mut console = AdminConsole::new(gateway, defaults)
                .with_progress(config.console.show_progress && !cli.quiet);
            if let Some(ref path) = config.console.history_file {
                console = console.with_history_path(PathBuf::from(path));
            }

            console.run().await?;
        }

        Command::ShowConfig => {
            ConfigLoader::print_config_sources();
        }
    }

    Ok(())
}

/// Build the HTTP AI gateway from the loaded configuration.
fn build_gateway(config: &FileConfig) -> Result<Arc<HttpAiGateway>> {
    if config.ai.endpoint.trim().is_empty() {
        bail!("AI endpoint not configured; set [ai] endpoint in tourdesk.toml");
    }

    let mut endpoint_config = AiEndpointConfig::new(&config.ai.endpoint, &config.ai.model);
    if let Some(ref key) = config.ai.api_key {
        endpoint_config = endpoint_config.with_api_key(key);
    }

    Ok(Arc::new(HttpAiGateway::new(endpoint_config)?))
}

/// List one seeded master-data collection.
async fn print_collection(collection: CatalogCollection, output: OutputFormat) -> Result<()> {
    match collection {
        CatalogCollection::Hotels => print_entries(seed::hotels(), output).await,
        CatalogCollection::Flights => print_entries(seed::flights(), output).await,
        CatalogCollection::Fleet => print_entries(seed::fleet(), output).await,
        CatalogCollection::Guides => print_entries(seed::guides(), output).await,
        CatalogCollection::Enroute => print_entries(seed::enroute_services(), output).await,
        CatalogCollection::Amenities => print_entries(seed::amenities(), output).await,
        CatalogCollection::Banks => print_entries(seed::banks(), output).await,
        CatalogCollection::Currencies => print_entries(seed::currencies(), output).await,
        CatalogCollection::Taxes => print_entries(seed::tax_rates(), output).await,
        CatalogCollection::Billing => print_entries(seed::billing_instructions(), output).await,
        CatalogCollection::Divisions => print_entries(seed::divisions(), output).await,
        CatalogCollection::Markets => print_entries(seed::market_types(), output).await,
        CatalogCollection::Requirements => print_entries(seed::requirements(), output).await,
        CatalogCollection::Contacts => print_entries(seed::emergency_contacts(), output).await,
        CatalogCollection::Profiles => print_entries(seed::profiles(), output).await,
        CatalogCollection::Tariffs => print_tariffs(output).await,
    }
}

/// Tariffs carry a rate and validity window instead of a display name, so
/// they get their own listing.
async fn print_tariffs(output: OutputFormat) -> Result<()> {
    let mut tariffs = seed::tariffs().list().await?;
    tariffs.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));

    match output {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&tariffs)),
        OutputFormat::Full => {
            println!("{} entries", tariffs.len());
            for tariff in &tariffs {
                println!(
                    "  {:<16} {:<16} {:>10.2}  {} to {}",
                    tariff.id.as_str(),
                    tariff.service_id.as_str(),
                    tariff.rate,
                    tariff.valid_from,
                    tariff.valid_to
                );
            }
        }
    }
    Ok(())
}

async fn print_entries<T>(store: InMemoryStore<T>, output: OutputFormat) -> Result<()>
where
    T: CatalogEntry + Clone + Send + Sync + Serialize,
{
    let mut entries = store.list().await?;
    entries.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));

    match output {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&entries)),
        OutputFormat::Full => {
            println!("{} entries", entries.len());
            for entry in &entries {
                println!("  {:<16} {}", entry.id().as_str(), entry.name());
            }
        }
    }
    Ok(())
}
