use anyhow::{bail, Result};
use crossterm::style::Stylize;
use plotters::prelude::*;
use std::path::Path;

use stock_dashboard_core::models::chart::ChartSeries;
use stock_dashboard_core::models::performance::{PerformanceReport, TickerReturn, Tone};
use stock_dashboard_core::models::view::DashboardView;

/// Print the fallback warning (if any) and the performance section.
pub fn print_view(view: &DashboardView) {
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
    print_performance(&view.performance);
}

fn print_performance(report: &PerformanceReport) {
    println!("{}", "Asset Performance".bold());

    for asset in &report.assets {
        match asset.result {
            TickerReturn::Computed(r) => {
                print_toned(&format!("{}: {:.1}%", asset.label, r * 100.0), asset.result.tone());
            }
            TickerReturn::Insufficient => println!("{}: Insufficient data", asset.symbol),
            TickerReturn::Invalid => println!("{}: Invalid price data", asset.symbol),
        }
    }

    println!();
    print_toned(
        &format!(
            "Portfolio performance (equal-weighted): {:.1}%",
            report.portfolio_return * 100.0
        ),
        Tone::of(report.portfolio_return),
    );
    if let Some(value) = report.projected_value {
        println!("Final portfolio value: {}", format_thousands(value));
    }
}

fn print_toned(text: &str, tone: Tone) {
    match tone {
        Tone::Positive => println!("{}", text.green()),
        Tone::Negative => println!("{}", text.red()),
        Tone::Neutral => println!("{text}"),
    }
}

/// Format with thousands separators and two decimals, e.g. 1,234.56.
pub fn format_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac)
}

/// Render the price lines to a PNG file.
pub fn draw_chart(path: &Path, series: &[ChartSeries]) -> Result<()> {
    let points: Vec<_> = series.iter().flat_map(|s| s.points.iter()).collect();
    if points.is_empty() {
        bail!("nothing to draw: every selected series is empty");
    }

    let min_date = points.iter().map(|p| p.date).min().unwrap();
    let max_date = points.iter().map(|p| p.date).max().unwrap();
    let span_days = (max_date - min_date).num_days().max(1) as f64;

    let mut min_close = f64::INFINITY;
    let mut max_close = f64::NEG_INFINITY;
    for p in &points {
        min_close = min_close.min(p.close);
        max_close = max_close.max(p.close);
    }
    if min_close == max_close {
        // Flat series still need a non-degenerate axis.
        min_close -= 1.0;
        max_close += 1.0;
    }

    let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price Evolution", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..span_days, min_close..max_close)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| {
            (min_date + chrono::Duration::days(*x as i64)).to_string()
        })
        .y_desc("Close")
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.points
                    .iter()
                    .map(|p| ((p.date - min_date).num_days() as f64, p.close)),
                &color,
            ))?
            .label(s.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
