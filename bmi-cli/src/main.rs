//! BMI command-line front end
//!
//! Presentation layer over `bmi-core`: parses arguments, runs the engine,
//! renders the result as text or JSON, and optionally routes the report
//! through a stdout exporter (the share-sheet stand-in).

use bmi_core::prelude::*;
use bmi_core::Exporter;
use clap::Parser;
use serde_json::json;

#[derive(Parser)]
#[command(name = "bmi", version)]
#[command(about = "Compute Body Mass Index from weight and height", long_about = None)]
struct Cli {
    /// Weight value (e.g., "70" or "154")
    weight: String,

    /// Height value (e.g., "1.75" or "70")
    height: String,

    /// Weight unit: kg or lb
    #[arg(short = 'w', long, default_value = "kg")]
    weight_unit: WeightUnit,

    /// Height unit: m, cm, or in
    #[arg(short = 'H', long, default_value = "m")]
    height_unit: HeightUnit,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the shareable report
    #[arg(long)]
    share: bool,
}

/// Share adapter that writes the report to stdout
struct StdoutExporter;

impl Exporter for StdoutExporter {
    fn share(&self, text: &str) {
        println!("{}", text);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::debug!(
        weight = %cli.weight,
        height = %cli.height,
        weight_unit = %cli.weight_unit,
        height_unit = %cli.height_unit,
        "bmi-cli v{}",
        env!("CARGO_PKG_VERSION")
    );

    let input = BmiInput::new(
        cli.weight,
        cli.height,
        cli.weight_unit,
        cli.height_unit,
    );
    let result = calculate(&input);

    if cli.share {
        bmi_core::share_report(&input, &result, &StdoutExporter);
        return;
    }

    if cli.json {
        let payload = json!({
            "input": input,
            "result": result,
            "color": result.category.color(),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        return;
    }

    if result.is_valid() {
        println!("BMI: {:.2}", result.bmi);
        println!("Category: {}", result.category);
    } else {
        println!("Invalid input: weight and height must be decimal numbers, height > 0");
    }
}
