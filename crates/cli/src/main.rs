#![deny(unsafe_code)]
//! CLI binary for mscolor RGB <=> HSV conversion.
//!
//! Subcommands:
//! - `rgb <R> <G> <B>` : convert RGB channels to HSV
//! - `hsv <H> <S> <V>` : convert HSV components to RGB
//! - `policies` : print the available range policies
//!
//! Set `RUST_LOG=debug` to see hue normalization and clamping decisions.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::debug;
use mscolor_core::{Color, RangePolicy};
use std::process;

#[derive(Parser)]
#[command(name = "mscolor", about = "RGB <=> HSV color converter")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert red, green, blue (0-255) to HSV.
    Rgb {
        r: u8,
        g: u8,
        b: u8,

        /// Alpha channel, carried through unchanged.
        #[arg(short, long, default_value_t = 255)]
        alpha: u8,
    },
    /// Convert hue (degrees), saturation and value (0-1) to RGB.
    Hsv {
        /// Hue in whole degrees; any integer, wrapped into [0, 360).
        #[arg(allow_negative_numbers = true)]
        h: i32,

        #[arg(allow_negative_numbers = true)]
        s: f64,

        #[arg(allow_negative_numbers = true)]
        v: f64,

        /// Alpha channel, carried through unchanged.
        #[arg(short, long, default_value_t = 255)]
        alpha: u8,

        /// Out-of-range handling (strict, clamp, passthrough).
        #[arg(short, long, default_value = "clamp")]
        policy: String,
    },
    /// List available range policies.
    Policies,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let color = match cli.command {
        Command::Policies => {
            let names = RangePolicy::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "policies": names,
                    "default": RangePolicy::default(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Policies:");
                for &name in names {
                    let marker = if name == RangePolicy::default().name() {
                        " (default)"
                    } else {
                        ""
                    };
                    println!("  {name}{marker}");
                }
            }
            return Ok(());
        }
        Command::Rgb { r, g, b, alpha } => {
            debug!("converting rgb({r}, {g}, {b}) alpha {alpha}");
            Color::from_argb(alpha, r, g, b)
        }
        Command::Hsv {
            h,
            s,
            v,
            alpha,
            policy,
        } => {
            let policy = RangePolicy::from_name(&policy)?;
            debug!("converting hsv({h}, {s}, {v}) alpha {alpha} under {policy}");
            Color::from_ahsv_with(alpha, h, s, v, policy)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&color)?);
    } else {
        println!("{}", describe(&color));
    }
    Ok(())
}

/// One-line human-readable summary of both representations.
fn describe(color: &Color) -> String {
    format!(
        "{color}  rgb({}, {}, {})  hsv({}, {:.3}, {:.3})  alpha {}",
        color.r(),
        color.g(),
        color.b(),
        color.h(),
        color.s(),
        color.v(),
        color.a()
    )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
