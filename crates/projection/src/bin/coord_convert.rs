//! Command-line front end for the coordinate conversions.
//!
//! Prints each result as JSON on stdout. Logs go to stderr.
//!
//! Usage:
//!   coord-convert mercator --pixel-x 10 --pixel-y 20 --origin-x 0 --origin-y 0 --pixel-scale 2
//!   coord-convert sum --payload '{"originLat":10,"originLng":20,"robotLat":1,"robotLng":-2}'
//!   coord-convert sum --origin 10,20 --robot 1,-2
//!   coord-convert translate --x 10 --y 5 --origin 0,0 --lat-per-pixel 0.001 --lng-per-pixel 0.002
//!   coord-convert translate --pixel 10,5 --origin 0,0 --meters-per-pixel 11.13
//!
//! NaN and infinite components are printed as the strings "NaN", "inf"
//! and "-inf".

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use projection::{
    pixel_to_web_mercator, sum_robot_global_coordinate, DiagnosticsConfig, GeoOrigin, GeoPoint,
    PixelCoordinate, PixelToLatLngTranslator, RobotOffsetPayload, ScaleFactors,
    SINE_PROBE_DIRECTIVE,
};
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "coord-convert")]
#[command(about = "Convert between pixel, Web Mercator and lat/lng coordinates")]
struct Args {
    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Log the sine probe diagnostic during translation (also COORD_SINE_PROBE)
    #[arg(long, global = true)]
    sine_probe: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pixel to Web Mercator meters
    #[command(allow_negative_numbers = true)]
    Mercator {
        #[arg(long)]
        pixel_x: f64,
        #[arg(long)]
        pixel_y: f64,
        #[arg(long)]
        origin_x: f64,
        #[arg(long)]
        origin_y: f64,
        /// Meters per pixel
        #[arg(long)]
        pixel_scale: f64,
    },

    /// Add a robot-relative offset to a global origin
    Sum {
        /// JSON payload with originLat, originLng, robotLat, robotLng
        #[arg(long, conflicts_with_all = ["origin", "robot"])]
        payload: Option<String>,
        /// Origin as "lat,lng"
        #[arg(long, allow_hyphen_values = true, requires = "robot")]
        origin: Option<GeoPoint>,
        /// Robot offset as "lat,lng"
        #[arg(long, allow_hyphen_values = true, requires = "origin")]
        robot: Option<GeoPoint>,
    },

    /// Pixel to lat/lng with per-axis degree factors
    #[command(allow_negative_numbers = true)]
    Translate {
        #[arg(long, requires = "y")]
        x: Option<f64>,
        #[arg(long, requires = "x")]
        y: Option<f64>,
        /// Pixel as "x,y", instead of --x and --y
        #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["x", "y"])]
        pixel: Option<PixelCoordinate>,
        /// Origin as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        origin: GeoPoint,
        #[arg(long, requires = "lng_per_pixel")]
        lat_per_pixel: Option<f64>,
        #[arg(long, requires = "lat_per_pixel")]
        lng_per_pixel: Option<f64>,
        /// Derive the degree factors from a ground resolution instead
        #[arg(long, conflicts_with_all = ["lat_per_pixel", "lng_per_pixel"])]
        meters_per_pixel: Option<f64>,
    },
}

fn run(command: Command, diagnostics: DiagnosticsConfig) -> Result<Value> {
    let value = match command {
        Command::Mercator {
            pixel_x,
            pixel_y,
            origin_x,
            origin_y,
            pixel_scale,
        } => serde_json::to_value(pixel_to_web_mercator(
            pixel_x,
            pixel_y,
            origin_x,
            origin_y,
            pixel_scale,
        ))?,

        Command::Sum {
            payload,
            origin,
            robot,
        } => {
            let payload = match (payload, origin, robot) {
                (Some(json), _, _) => RobotOffsetPayload::from_json(&json)?,
                (None, Some(origin), Some(robot)) => RobotOffsetPayload::new(origin, robot),
                _ => bail!("sum needs either --payload or both --origin and --robot"),
            };
            serde_json::to_value(sum_robot_global_coordinate(&payload))?
        }

        Command::Translate {
            x,
            y,
            pixel,
            origin,
            lat_per_pixel,
            lng_per_pixel,
            meters_per_pixel,
        } => {
            let pixel = match (pixel, x, y) {
                (Some(pixel), _, _) => pixel,
                (None, Some(x), Some(y)) => PixelCoordinate::new(x, y),
                _ => bail!("translate needs --pixel, or both --x and --y"),
            };
            let scale = match (lat_per_pixel, lng_per_pixel, meters_per_pixel) {
                (Some(lat), Some(lng), None) => ScaleFactors::per_axis(lat, lng),
                (None, None, Some(meters)) => {
                    ScaleFactors::from_ground_resolution(meters, origin.lat)
                }
                _ => bail!(
                    "translate needs --lat-per-pixel and --lng-per-pixel, or --meters-per-pixel"
                ),
            };
            debug!(?scale, "Resolved scale factors");

            let translator = PixelToLatLngTranslator::with_scale(GeoOrigin::from(origin), scale)
                .with_diagnostics(diagnostics);
            serde_json::to_value(translator.translate(pixel))?
        }
    };

    Ok(value)
}

/// Log filter from RUST_LOG or `log_level`, opened up for the sine probe
/// when it is enabled.
fn build_filter(log_level: &str, sine_probe: bool) -> Result<EnvFilter> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    if sine_probe {
        Ok(filter.add_directive(SINE_PROBE_DIRECTIVE.parse()?))
    } else {
        Ok(filter)
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Bad values are reported once logging is up
    let env_config = DiagnosticsConfig::try_from_env();
    let mut diagnostics = env_config.as_ref().copied().unwrap_or_default();
    if args.sine_probe {
        diagnostics = diagnostics.with_sine_probe(true);
    }

    let filter = build_filter(&args.log_level, diagnostics.sine_probe)?;
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    if let Err(e) = &env_config {
        warn!(error = %e, "Ignoring invalid diagnostics setting");
    }
    info!(command = ?args.command, "Converting");

    let value = run(args.command, diagnostics)?;
    println!("{}", value);

    Ok(())
}
