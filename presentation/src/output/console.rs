//! Console output formatter for back-office results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use tourdesk_application::PricedQuotation;
use tourdesk_domain::{CostSheet, GeneratedItinerary, LeadAnalysis, Sentiment};

/// Formats costing and AI results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a bare cost sheet with its cascade figures
    pub fn format_sheet(sheet: &CostSheet, adults: u32) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Cost Sheet"));
        output.push('\n');

        // Non-zero input buckets
        output.push_str(&Self::section_header("Service Costs"));
        for (category, cost) in sheet.inputs.categories() {
            if cost > 0.0 {
                output.push_str(&format!("  {:<12} {:>12.2}\n", category, cost));
            }
        }

        output.push_str(&Self::section_header("Computation"));
        output.push_str(&Self::money_line("Total land cost", sheet.total_land_cost));
        output.push_str(&Self::money_line(
            &format!("Markup ({}%)", sheet.rates.markup_percentage),
            sheet.markup_amount,
        ));
        output.push_str(&Self::money_line(
            &format!("ISO fee ({}%)", sheet.rates.iso_commission),
            sheet.iso_amount,
        ));
        output.push_str(&Self::money_line("Total cost", sheet.total_cost));
        output.push_str(&Self::money_line(
            &format!("{} ({}%)", sheet.rates.gst_type, sheet.rates.gst_percentage),
            sheet.gst_amount,
        ));

        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Final sale price:".green().bold(),
            format!("{:.2}", sheet.final_sale_price).green().bold()
        ));
        if adults > 0 {
            output.push_str(&format!(
                "{} {:.2} ({} adults)\n",
                "Per person:".cyan().bold(),
                sheet.per_person_cost(adults),
                adults
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a priced quotation: header, itemized preview, cascade summary
    pub fn format_priced(priced: &PricedQuotation) -> String {
        let quotation = &priced.quotation;
        let mut output = String::new();

        output.push_str(&Self::header("Quotation Cost Sheet"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n",
            "Client:".cyan().bold(),
            quotation.client_name,
            quotation.id
        ));
        output.push_str(&format!(
            "{} {} adults, {} children, {} infants\n",
            "Pax:".cyan().bold(),
            quotation.pax.adults,
            quotation.pax.children,
            quotation.pax.infants
        ));
        if let Some(nights) = quotation.nights() {
            output.push_str(&format!("{} {}\n", "Nights:".cyan().bold(), nights));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            quotation.status
        ));

        // Itemized preview with row-level markup
        if !priced.preview.rows.is_empty() {
            output.push_str(&Self::section_header("Itemized Preview"));
            output.push_str(&format!(
                "  {:<12} {:>12} {:>12} {:>12}\n",
                "Category".bold(),
                "Cost".bold(),
                "Markup".bold(),
                "Total".bold()
            ));
            for row in &priced.preview.rows {
                output.push_str(&format!(
                    "  {:<12} {:>12.2} {:>12.2} {:>12.2}\n",
                    row.category, row.base_cost, row.markup_amount, row.marked_up_total
                ));
            }
            output.push_str(&format!(
                "  {:<12} {:>38.2}\n",
                "Grand total".bold(),
                priced.preview.grand_total
            ));
        }

        let sheet = &priced.sheet;
        output.push_str(&Self::section_header("Cascade"));
        output.push_str(&Self::money_line("Total land cost", sheet.total_land_cost));
        output.push_str(&Self::money_line(
            &format!("Markup ({}%)", sheet.rates.markup_percentage),
            sheet.markup_amount,
        ));
        output.push_str(&Self::money_line(
            &format!("ISO fee ({}%)", sheet.rates.iso_commission),
            sheet.iso_amount,
        ));
        output.push_str(&Self::money_line(
            &format!("{} ({}%)", sheet.rates.gst_type, sheet.rates.gst_percentage),
            sheet.gst_amount,
        ));

        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Final sale price:".green().bold(),
            format!("{:.2}", sheet.final_sale_price).green().bold()
        ));
        output.push_str(&format!(
            "{} {:.2}\n",
            "Per person:".cyan().bold(),
            priced.per_person_cost
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format a generated itinerary day by day
    pub fn format_itinerary(itinerary: &GeneratedItinerary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&itinerary.title));
        output.push('\n');

        for day in &itinerary.days {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── Day {}: {} ──", day.day, day.title).yellow().bold(),
                day.description
            ));
            for activity in &day.activities {
                output.push_str(&format!("  * {}\n", activity));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a lead analysis
    pub fn format_lead(analysis: &LeadAnalysis) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Lead Analysis"));
        output.push('\n');

        let sentiment = match analysis.sentiment {
            Sentiment::Positive => analysis.sentiment.to_string().green().bold(),
            Sentiment::Neutral => analysis.sentiment.to_string().yellow().bold(),
            Sentiment::Negative => analysis.sentiment.to_string().red().bold(),
        };
        output.push_str(&format!("{} {}\n\n", "Sentiment:".cyan().bold(), sentiment));
        output.push_str(&format!(
            "{}\n{}\n",
            "Summary:".cyan().bold(),
            analysis.summary
        ));

        if !analysis.follow_ups.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggested Follow-ups:".cyan().bold()));
            for item in &analysis.follow_ups {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn money_line(label: &str, amount: f64) -> String {
        format!("  {:<22} {:>12.2}\n", label, amount)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_sheet(&self, sheet: &CostSheet, adults: u32) -> String {
        Self::format_sheet(sheet, adults)
    }

    fn format_priced(&self, priced: &PricedQuotation) -> String {
        Self::format_priced(priced)
    }

    fn format_itinerary(&self, itinerary: &GeneratedItinerary) -> String {
        Self::format_itinerary(itinerary)
    }

    fn format_lead(&self, analysis: &LeadAnalysis) -> String {
        Self::format_lead(analysis)
    }
}
