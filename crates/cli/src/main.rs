mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use stock_dashboard_core::StockDashboard;

use commands::{parse, Command, HELP};

/// Compare stock performance across Brazil, the USA and Europe.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding IBOV.csv, NASDAQ.csv and EURONEXT.csv
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut dashboard = StockDashboard::new(cli.data_dir)?;

    println!("{}", "Global Stock Dashboard".bold());
    println!(
        "{} stocks available across {} region(s), prices via {}. Type 'help' for commands.",
        dashboard.catalog().len(),
        dashboard
            .region_states()
            .iter()
            .filter(|(_, enabled)| *enabled)
            .count(),
        dashboard.provider_name()
    );

    let stdin = io::stdin();
    loop {
        print!("dashboard> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse(&line) {
            Err(msg) if msg.is_empty() => continue,
            Err(msg) => println!("{}", msg.yellow()),
            Ok(command) => {
                if !execute(&mut dashboard, command).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Run one command against the session. Returns false to quit.
async fn execute(dashboard: &mut StockDashboard, command: Command) -> Result<bool> {
    match command {
        Command::Help => println!("{HELP}"),

        Command::Regions => {
            for (region, enabled) in dashboard.region_states() {
                let mark = if enabled { "x" } else { " " };
                println!("[{mark}] {region}");
            }
        }

        Command::Region { region, enabled } => {
            dashboard.set_region_enabled(region, enabled);
            println!(
                "{region} {}; {} stocks available",
                if enabled { "enabled" } else { "disabled" },
                dashboard.catalog().len()
            );
        }

        Command::Stocks { filter } => {
            let needle = filter.as_deref().unwrap_or("").to_lowercase();
            let labels: Vec<&str> = dashboard
                .available_labels()
                .into_iter()
                .filter(|l| needle.is_empty() || l.to_lowercase().contains(&needle))
                .collect();

            const LIMIT: usize = 30;
            for label in labels.iter().take(LIMIT) {
                println!("{label}");
            }
            if labels.len() > LIMIT {
                println!("... and {} more (narrow with 'stocks <filter>')", labels.len() - LIMIT);
            } else if labels.is_empty() {
                println!("no stocks match");
            }
        }

        Command::Add(query) => match find_label(dashboard, &query) {
            Some(label) => {
                dashboard.select_label(&label)?;
                println!("selected {label}");
            }
            None => println!("{}", format!("no stock matches '{query}'").yellow()),
        },

        Command::Remove(query) => {
            let label = find_label(dashboard, &query);
            match label {
                Some(label) if dashboard.deselect_label(&label) => {
                    println!("removed {label}");
                }
                _ => println!("{}", format!("'{query}' is not selected").yellow()),
            }
        }

        Command::Selected => {
            if dashboard.selected_labels().is_empty() {
                println!("nothing selected");
            }
            for label in dashboard.selected_labels() {
                println!("{label}");
            }
        }

        Command::Range { start, end } => match dashboard.set_date_range(start, end) {
            Ok(()) => println!("range set to {}", dashboard.date_range()),
            Err(e) => println!("{}", e.to_string().yellow()),
        },

        Command::Capital(amount) => match dashboard.set_starting_capital(amount) {
            Ok(()) => println!(
                "starting capital set to {}",
                render::format_thousands(amount)
            ),
            Err(e) => println!("{}", e.to_string().yellow()),
        },

        Command::Show => match dashboard.render().await {
            Ok(view) => render::print_view(&view),
            Err(e) => println!("{}", e.to_string().yellow()),
        },

        Command::Chart(path) => match dashboard.render().await {
            Ok(view) => {
                if let Some(requested) = &view.fallback_from {
                    println!(
                        "{}",
                        format!(
                            "Showing all available data (no data found for {} to {})",
                            requested.start, requested.end
                        )
                        .yellow()
                    );
                }
                let path = PathBuf::from(path);
                match render::draw_chart(&path, &view.chart) {
                    Ok(()) => println!("chart written to {}", path.display()),
                    Err(e) => println!("{}", format!("could not render chart: {e}").yellow()),
                }
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        },

        Command::Json => match dashboard.render_json().await {
            Ok(json) => println!("{json}"),
            Err(e) => println!("{}", e.to_string().yellow()),
        },

        Command::Quit => return Ok(false),
    }

    Ok(true)
}

/// Resolve a user query to a catalog label: exact label match first,
/// then case-insensitive canonical symbol match.
fn find_label(dashboard: &StockDashboard, query: &str) -> Option<String> {
    let catalog = dashboard.catalog();
    if catalog.contains_label(query) {
        return Some(query.to_string());
    }
    catalog
        .entries()
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(query))
        .map(|e| e.label.clone())
}
