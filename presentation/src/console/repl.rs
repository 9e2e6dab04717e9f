//! REPL (Read-Eval-Print Loop) for the interactive admin console

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tourdesk_application::{
    AgencyDefaults, AiGateway, AnalyzeLeadInput, AnalyzeLeadUseCase, GenerateItineraryInput,
    GenerateItineraryUseCase, price_quotation,
};
use tourdesk_domain::{PaxCounts, Quotation, ServiceLine, ServiceType};

/// Interactive admin console.
///
/// Holds one working quotation in memory. Nothing is persisted; the
/// quotation is lost when the session ends.
pub struct AdminConsole<G: AiGateway + 'static> {
    gateway: Option<Arc<G>>,
    defaults: AgencyDefaults,
    show_progress: bool,
    history_path: Option<PathBuf>,
    quotation: Option<Quotation>,
}

impl<G: AiGateway + 'static> AdminConsole<G> {
    pub fn new(gateway: Option<Arc<G>>, defaults: AgencyDefaults) -> Self {
        Self {
            gateway,
            defaults,
            show_progress: true,
            history_path: dirs::data_dir().map(|p| p.join("tourdesk").join("history.txt")),
            quotation: None,
        }
    }

    /// Set whether to show progress spinners
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file
    pub fn with_history_path(mut self, path: PathBuf) -> Self {
        self.history_path = Some(path);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("tourdesk> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.handle_line(line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Tourdesk - Admin Console              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Default rates: markup {}%, ISO {}%, GST {}%",
            self.defaults.markup_percentage,
            self.defaults.iso_commission,
            self.defaults.gst_percentage
        );
        if self.gateway.is_none() {
            println!(
                "{}",
                "AI endpoint not configured; itinerary and lead commands are disabled".yellow()
            );
        }
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  quote new <id> <client>          - Start a working quotation");
        println!("  add <day> <type> <cost> <desc>   - Add a service line");
        println!("  rates <markup> <iso> <gst>       - Set rate percentages");
        println!("  pax <adults> [children] [infants] - Set traveller counts");
        println!("  list                             - Show the working quotation");
        println!("  cost                             - Compute the cost sheet");
        println!("  itinerary <destination> [nights] - Generate a day-wise itinerary");
        println!("  lead <notes>                     - Analyze lead notes");
        println!("  help                             - Show this help");
        println!("  quit                             - Exit the console");
        println!();
    }

    /// Handle one input line. Returns true if the console should exit.
    async fn handle_line(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" | "exit" | "q" => {
                println!("Bye!");
                return true;
            }
            "help" | "h" | "?" => Self::print_help(),
            "quote" => self.cmd_quote(&rest),
            "add" => self.cmd_add(&rest),
            "rates" => self.cmd_rates(&rest),
            "pax" => self.cmd_pax(&rest),
            "list" => self.cmd_list(),
            "cost" => self.cmd_cost(),
            "itinerary" => self.cmd_itinerary(&rest).await,
            "lead" => self.cmd_lead(line).await,
            _ => {
                println!("Unknown command: {}", command);
                println!("Type help for available commands");
            }
        }
        false
    }

    fn cmd_quote(&mut self, args: &[&str]) {
        match args {
            ["new", id, client @ ..] if !client.is_empty() => {
                let quotation = Quotation::new(*id, client.join(" "))
                    .with_rates(self.defaults.rate_params());
                println!(
                    "Started quotation {} for {}",
                    quotation.id, quotation.client_name
                );
                self.quotation = Some(quotation);
            }
            _ => println!("Usage: quote new <id> <client name>"),
        }
    }

    fn cmd_add(&mut self, args: &[&str]) {
        let Some(quotation) = self.quotation.as_mut() else {
            println!("No working quotation. Start one with: quote new <id> <client>");
            return;
        };

        if args.len() < 3 {
            println!("Usage: add <day> <type> <cost> [description]");
            return;
        }

        let (Ok(day), Ok(cost)) = (args[0].parse::<u32>(), args[2].parse::<f64>()) else {
            println!("Day must be a whole number and cost a number");
            return;
        };
        // Lenient parse: unrecognized types land in the misc bucket
        let service_type: ServiceType = args[1].parse().unwrap_or(ServiceType::Other);
        let description = args[3..].join(" ");

        quotation.add_line(ServiceLine::new(day, service_type, description, cost));
        println!(
            "Added {} on day {} at {:.2} ({} lines total)",
            service_type,
            day,
            cost,
            quotation.lines.len()
        );
    }

    fn cmd_rates(&mut self, args: &[&str]) {
        let Some(quotation) = self.quotation.as_mut() else {
            println!("No working quotation. Start one with: quote new <id> <client>");
            return;
        };

        let parsed: Vec<f64> = args.iter().filter_map(|a| a.parse().ok()).collect();
        if parsed.len() != 3 {
            println!("Usage: rates <markup%> <iso%> <gst%>");
            return;
        }

        quotation.rates.markup_percentage = parsed[0];
        quotation.rates.iso_commission = parsed[1];
        quotation.rates.gst_percentage = parsed[2];
        println!(
            "Rates set: markup {}%, ISO {}%, GST {}%",
            parsed[0], parsed[1], parsed[2]
        );
    }

    fn cmd_pax(&mut self, args: &[&str]) {
        let Some(quotation) = self.quotation.as_mut() else {
            println!("No working quotation. Start one with: quote new <id> <client>");
            return;
        };

        let parsed: Vec<u32> = args.iter().filter_map(|a| a.parse().ok()).collect();
        let (Some(&adults), children, infants) =
            (parsed.first(), parsed.get(1).copied(), parsed.get(2).copied())
        else {
            println!("Usage: pax <adults> [children] [infants]");
            return;
        };

        quotation.pax = PaxCounts::new(adults, children.unwrap_or(0), infants.unwrap_or(0));
        println!(
            "Pax set: {} adults, {} children, {} infants",
            quotation.pax.adults, quotation.pax.children, quotation.pax.infants
        );
    }

    fn cmd_list(&self) {
        let Some(quotation) = self.quotation.as_ref() else {
            println!("No working quotation. Start one with: quote new <id> <client>");
            return;
        };

        println!();
        println!(
            "{} {} ({}, {})",
            "Quotation".cyan().bold(),
            quotation.id,
            quotation.client_name,
            quotation.status
        );
        if quotation.lines.is_empty() {
            println!("  (no service lines yet)");
        }
        for line in &quotation.lines {
            println!(
                "  Day {:<3} {:<12} {:>10.2}  {}",
                line.day, line.service_type, line.cost, line.description
            );
        }
        println!();
    }

    fn cmd_cost(&self) {
        let Some(quotation) = self.quotation.as_ref() else {
            println!("No working quotation. Start one with: quote new <id> <client>");
            return;
        };

        match price_quotation(quotation.clone()) {
            Ok(priced) => println!("{}", ConsoleFormatter::format_priced(&priced)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    async fn cmd_itinerary(&self, args: &[&str]) {
        let Some(gateway) = self.gateway.clone() else {
            println!("AI endpoint not configured");
            return;
        };
        let Some((destination, nights)) = itinerary_args(args) else {
            println!("Usage: itinerary <destination> [nights]");
            return;
        };

        let use_case = GenerateItineraryUseCase::new(gateway);
        let input = GenerateItineraryInput::new(destination, nights);

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await
        } else {
            use_case.execute(input).await
        };

        match result {
            Ok(itinerary) => println!("{}", ConsoleFormatter::format_itinerary(&itinerary)),
            Err(e) => eprintln!("{} {}", "Itinerary generation failed:".red(), e),
        }
    }

    async fn cmd_lead(&self, line: &str) {
        let Some(gateway) = self.gateway.clone() else {
            println!("AI endpoint not configured");
            return;
        };
        let notes = line.strip_prefix("lead").unwrap_or(line).trim();
        if notes.is_empty() {
            println!("Usage: lead <notes>");
            return;
        }

        let use_case = AnalyzeLeadUseCase::new(gateway);
        let input = AnalyzeLeadInput::new(notes);

        let analysis = if self.show_progress {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await
        } else {
            use_case.execute(input).await
        };

        println!("{}", ConsoleFormatter::format_lead(&analysis));
    }
}

/// Split itinerary arguments into a destination and a night count.
///
/// Destinations can span several words, so only a trailing numeric token
/// counts as the night count; without one, three nights are assumed.
fn itinerary_args(args: &[&str]) -> Option<(String, u32)> {
    let (nights, words) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() => match last.parse() {
            Ok(n) => (n, rest),
            Err(_) => (3, args),
        },
        _ => (3, args),
    };

    if words.is_empty() {
        return None;
    }
    Some((words.join(" "), nights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_args_single_word() {
        assert_eq!(
            itinerary_args(&["Udaipur"]),
            Some(("Udaipur".to_string(), 3))
        );
    }

    #[test]
    fn test_itinerary_args_multi_word_destination() {
        assert_eq!(
            itinerary_args(&["New", "Delhi", "4"]),
            Some(("New Delhi".to_string(), 4))
        );
        assert_eq!(
            itinerary_args(&["New", "Delhi"]),
            Some(("New Delhi".to_string(), 3))
        );
    }

    #[test]
    fn test_itinerary_args_trailing_nights() {
        assert_eq!(
            itinerary_args(&["Jaipur", "2"]),
            Some(("Jaipur".to_string(), 2))
        );
    }

    #[test]
    fn test_itinerary_args_empty() {
        assert_eq!(itinerary_args(&[]), None);
    }
}
