use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use packed::{Format, Width};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tuplepack_tools::{
    band_report, decode_stream, encode_values, parse_hex, BandReport, DecodeReport, EncodeReport,
};

#[derive(Parser)]
#[command(
    name = "tuplepack-tools",
    version,
    about = "Encode, decode and explain packed integers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode integers back to back and print their bytes.
    Encode {
        #[command(flatten)]
        layout: Layout,
        /// Values to encode.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode a hex string holding consecutive encodings.
    Decode {
        #[command(flatten)]
        layout: Layout,
        /// Encoded bytes as hex; whitespace and a `0x` prefix are ignored.
        hex: String,
    },
    /// Print the value range covered by each encoded length.
    Bands {
        #[command(flatten)]
        layout: Layout,
    },
}

#[derive(Args)]
struct Layout {
    /// Byte layout.
    #[arg(long, value_enum, default_value_t = FormatArg::Packed)]
    format: FormatArg,
    /// Integer width.
    #[arg(long, value_enum, default_value_t = WidthArg::Long)]
    width: WidthArg,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Packed,
    Sorted,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Packed => Self::Packed,
            FormatArg::Sorted => Self::Sorted,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WidthArg {
    Int,
    Long,
}

impl From<WidthArg> for Width {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::Int => Self::Int,
            WidthArg::Long => Self::Long,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Encode { layout, values } => {
            let report = encode_values(layout.format.into(), layout.width.into(), &values)?;
            if layout.json {
                print_json(&report)?;
            } else {
                print_encode_report(&report);
            }
        }
        Command::Decode { layout, hex } => {
            let bytes = parse_hex(&hex)?;
            let report = decode_stream(layout.format.into(), layout.width.into(), &bytes)?;
            if layout.json {
                print_json(&report)?;
            } else {
                print_decode_report(&report);
            }
        }
        Command::Bands { layout } => {
            let report = band_report(layout.format.into(), layout.width.into());
            if layout.json {
                print_json(&report)?;
            } else {
                print_band_report(&report);
            }
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` overrides `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize json")?;
    println!("{json}");
    Ok(())
}

fn print_encode_report(report: &EncodeReport) {
    println!("format: {} width: {}", report.format, report.width);
    for value in &report.values {
        println!("{:>20}  {:<18}  {} bytes", value.value, value.hex, value.len);
    }
    println!("total: {} bytes", report.total_len);
    println!("hex: {}", report.hex);
}

fn print_decode_report(report: &DecodeReport) {
    println!("format: {} width: {}", report.format, report.width);
    for value in &report.values {
        println!(
            "@{:<4} {:<18}  {:>20}",
            value.offset, value.hex, value.value
        );
    }
    println!(
        "{} values in {} bytes",
        report.values.len(),
        report.total_len
    );
}

fn print_band_report(report: &BandReport) {
    println!("format: {} width: {}", report.format, report.width);
    for band in &report.bands {
        println!(
            "{:>20} ..= {:<20}  {} bytes",
            band.lower, band.upper, band.len
        );
    }
}
