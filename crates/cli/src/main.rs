//! SpectraMine CLI - Mineral prospecting from multispectral imagery

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use spectramine_algorithms::classification::{classify, ClassificationResult};
use spectramine_algorithms::imagery::{
    detection_mask, scan_minerals_with_indices, MineralScan, SpectralBands,
    S2_REFLECTANCE_SCALE,
};
use spectramine_algorithms::mineral::Mineral;
use spectramine_algorithms::point_query::{evaluate_value, query_point, PointValue, ScanParams};
use spectramine_algorithms::registry::{MiningRegistry, MiningSite};
use spectramine_algorithms::state::{AnalysisEvent, AnalysisState, ScanSnapshot};
use spectramine_algorithms::summary::{analysis_area_km2, summarize};
use spectramine_core::io::{read_geotiff, write_geotiff, GeoTiffOptions};
use spectramine_core::{GeoPoint, Raster};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "spectramine")]
#[command(author, version, about = "Mineral prospecting from Sentinel-2 imagery", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file replacing the built-in mining-site registry
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a location from its coverage percentage
    Classify {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Mineral: iron, aluminum, copper, limestone, manganese
        #[arg(short, long, default_value = "iron")]
        mineral: String,
        /// Percentage of the analysis area above the detection threshold
        #[arg(short, long)]
        coverage: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Grade a single index value
    Point {
        /// Index value at the point
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Mineral: iron, aluminum, copper, limestone, manganese
        #[arg(short, long, default_value = "iron")]
        mineral: String,
        // The four coordinates are all-or-none
        /// Scan centre latitude
        #[arg(long, allow_negative_numbers = true, requires_all = ["center_lon", "lat", "lon"])]
        center_lat: Option<f64>,
        /// Scan centre longitude
        #[arg(long, allow_negative_numbers = true, requires_all = ["center_lat", "lat", "lon"])]
        center_lon: Option<f64>,
        /// Point latitude
        #[arg(long, allow_negative_numbers = true, requires_all = ["center_lat", "center_lon", "lon"])]
        lat: Option<f64>,
        /// Point longitude
        #[arg(long, allow_negative_numbers = true, requires_all = ["center_lat", "center_lon", "lat"])]
        lon: Option<f64>,
        /// Mean index value of the analysis area
        #[arg(long)]
        area_mean: Option<f64>,
    },
    /// Browse the mining-site registry
    Sites {
        #[command(subcommand)]
        action: SitesCommands,
    },
    /// Scan Sentinel-2 band GeoTIFFs for all minerals
    Scan {
        /// Scan centre latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Scan centre longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Red band (B4)
        #[arg(long)]
        red: PathBuf,
        /// Green band (B3)
        #[arg(long)]
        green: PathBuf,
        /// Blue band (B2)
        #[arg(long)]
        blue: PathBuf,
        /// Near-infrared band (B8)
        #[arg(long)]
        nir: PathBuf,
        /// SWIR1 band (B11)
        #[arg(long)]
        swir1: PathBuf,
        /// SWIR2 band (B12)
        #[arg(long)]
        swir2: PathBuf,
        /// Mineral to classify
        #[arg(short, long, default_value = "iron")]
        mineral: String,
        /// Digital numbers per unit reflectance (1 for reflectance input)
        #[arg(long, default_value_t = S2_REFLECTANCE_SCALE)]
        scale: f64,
        /// Directory for per-mineral detection mask GeoTIFFs
        #[arg(long)]
        mask_dir: Option<PathBuf>,
        /// Display name of the location
        #[arg(long, default_value = "")]
        address: String,
    },
}

#[derive(Subcommand)]
enum SitesCommands {
    /// List sites, optionally filtered
    List {
        /// Only sites compatible with this mineral
        #[arg(short, long)]
        mineral: Option<String>,
        /// Only sites in this country
        #[arg(short, long)]
        country: Option<String>,
        /// Only sites with exactly this mineral type
        #[arg(short = 't', long = "type")]
        mineral_type: Option<String>,
    },
    /// List countries with registered sites
    Countries,
    /// Site counts per mineral type
    Stats,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn load_registry(path: Option<&Path>) -> Result<Cow<'static, MiningRegistry>> {
    match path {
        Some(path) => {
            let registry = MiningRegistry::from_json_file(path)
                .with_context(|| format!("Failed to load registry {}", path.display()))?;
            info!("Registry: {} sites from {}", registry.len(), path.display());
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(MiningRegistry::builtin())),
    }
}

fn geo_point(lat: f64, lon: f64) -> Result<GeoPoint> {
    GeoPoint::new(lat, lon).context("Invalid coordinates")
}

fn read_band(path: &Path, name: &str) -> Result<Raster<f64>> {
    let pb = spinner(&format!("Reading {}...", name));
    let raster: Raster<f64> = read_geotiff(path)
        .with_context(|| format!("Failed to read {} band {}", name, path.display()))?;
    pb.finish_and_clear();
    info!("{}: {} x {}", name, raster.cols(), raster.rows());
    Ok(raster)
}

fn write_mask(raster: &Raster<f64>, path: &Path) -> Result<()> {
    let pb = spinner("Writing mask...");
    write_geotiff(raster, path, Some(GeoTiffOptions { geographic: true }))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    pb.finish_and_clear();
    Ok(())
}

fn print_classification(result: &ClassificationResult, mineral: Mineral) {
    println!("Classification: {} ({})", result.label, result.kind.as_str());
    if result.nearby_matches.is_empty() {
        println!("  No registered {} site within 15 km", mineral.display_name());
    } else {
        println!("  {} registered site(s) within 15 km:", result.nearby_matches.len());
        for site in &result.nearby_matches {
            println!(
                "    {} ({}, {}) - {:.2} km",
                site.name, site.country, site.mineral_type, site.distance_km
            );
        }
    }
    if let (Some(name), Some(d)) = (&result.nearest_site_name, result.nearest_distance_km) {
        println!("  Nearest {} site: {} ({:.1} km)", mineral.display_name(), name, d);
    }
}

fn print_point_value(v: &PointValue, mineral: Mineral) {
    println!("Index value: {:.3} (threshold {})", v.value, v.threshold);
    if v.strength.is_detection() {
        println!("Strength: {} {}", v.strength.label(), mineral.display_name());
        if let Some(pct) = v.relative_strength {
            println!("Relative strength: {:.1}% above threshold", pct);
        }
    } else {
        println!("Status: No detection ({})", v.strength.label());
    }
    println!("vs area average: {:+.2}", v.deviation_from_mean);
    println!("Interest: {}", v.interest.label());
}

fn print_scan(scans: &[MineralScan]) {
    println!(
        "{:<12} {:>9} {:>7} {:>7} {:>7} {:>15} {:>15} {:>11}",
        "mineral", "coverage", "mean", "p10", "p90", "display range", "grade", "confidence"
    );
    for scan in scans {
        let r = &scan.reading;
        let summary = summarize(r.mineral, r.coverage, ScanParams::default());
        let (lo, hi) = r.display_range();
        let fmt = |v: Option<f64>| v.map_or("-".to_string(), |v| format!("{:.3}", v));
        println!(
            "{:<12} {:>8.1}% {:>7} {:>7} {:>7} {:>15} {:>15} {:>10.0}%",
            format!("{} {}", r.mineral.symbol(), r.mineral.display_name()),
            r.coverage,
            fmt(r.stats.map(|s| s.mean)),
            fmt(r.stats.map(|s| s.p10)),
            fmt(r.stats.map(|s| s.p90)),
            format!("{:.2}..{:.2}", lo, hi),
            summary.grade.label(),
            summary.confidence * 100.0,
        );
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        // ── Classify ─────────────────────────────────────────────────
        Commands::Classify {
            lat,
            lon,
            mineral,
            coverage,
            json,
        } => {
            let registry = load_registry(cli.registry.as_deref())?;
            let point = geo_point(lat, lon)?;
            let mineral = Mineral::from_key_or_default(&mineral);
            if !coverage.is_finite() || coverage < 0.0 {
                anyhow::bail!("Coverage must be a non-negative percentage, got {}", coverage);
            }

            let result = classify(point, coverage, mineral, &registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Location: {}", point);
                println!(
                    "{} {} coverage: {:.1}%",
                    mineral.symbol(),
                    mineral.display_name(),
                    coverage
                );
                print_classification(&result, mineral);
            }
        }

        // ── Point ────────────────────────────────────────────────────
        Commands::Point {
            value,
            mineral,
            center_lat,
            center_lon,
            lat,
            lon,
            area_mean,
        } => {
            let mineral = Mineral::from_key_or_default(&mineral);
            match (center_lat, center_lon, lat, lon) {
                (Some(clat), Some(clon), Some(lat), Some(lon)) => {
                    let center = geo_point(clat, clon)?;
                    let point = geo_point(lat, lon)?;
                    let reading = query_point(
                        center,
                        point,
                        Some(value),
                        mineral,
                        area_mean,
                        ScanParams::default(),
                    );
                    println!("Distance from centre: {:.2} km", reading.distance_km);
                    match &reading.reading {
                        Some(v) => {
                            println!("Within analysis radius (10 km)");
                            print_point_value(v, mineral);
                        }
                        None => {
                            println!("Outside analysis radius");
                            println!(
                                "{} index data only available within 10 km.",
                                mineral.display_name()
                            );
                        }
                    }
                }
                _ => print_point_value(&evaluate_value(value, mineral, area_mean), mineral),
            }
        }

        // ── Sites ────────────────────────────────────────────────────
        Commands::Sites { action } => {
            let registry = load_registry(cli.registry.as_deref())?;
            match action {
                SitesCommands::List {
                    mineral,
                    country,
                    mineral_type,
                } => {
                    let mineral = mineral.map(|m| Mineral::from_key_or_default(&m));
                    let sites: Vec<&MiningSite> =
                        match (country.as_deref(), mineral_type.as_deref()) {
                            (Some(c), Some(t)) => registry
                                .by_country(c)
                                .filter(|s| s.mineral_type == t)
                                .collect(),
                            (Some(c), None) => registry.by_country(c).collect(),
                            (None, Some(t)) => registry.by_type(t).collect(),
                            (None, None) => registry.sites().iter().collect(),
                        };
                    let mut count = 0;
                    for site in sites
                        .into_iter()
                        .filter(|s| mineral.map_or(true, |m| m.is_compatible(&s.mineral_type)))
                    {
                        println!(
                            "{:<45} {:>9.4} {:>10.4}  {:<20} {}",
                            site.name,
                            site.location.lat,
                            site.location.lon,
                            site.country,
                            site.mineral_type
                        );
                        count += 1;
                    }
                    println!("\n{} of {} sites", count, registry.len());
                }
                SitesCommands::Countries => {
                    for country in registry.countries() {
                        println!("{}", country);
                    }
                }
                SitesCommands::Stats => {
                    for (mineral_type, count) in registry.type_counts() {
                        println!("{:<20} {:>4}", mineral_type, count);
                    }
                    println!("{:<20} {:>4}", "Total", registry.len());
                }
            }
        }

        // ── Scan ─────────────────────────────────────────────────────
        Commands::Scan {
            lat,
            lon,
            red,
            green,
            blue,
            nir,
            swir1,
            swir2,
            mineral,
            scale,
            mask_dir,
            address,
        } => {
            let registry = load_registry(cli.registry.as_deref())?;
            let location = geo_point(lat, lon)?;
            let mineral = Mineral::from_key_or_default(&mineral);

            let bands = SpectralBands::from_digital_numbers(
                &read_band(&red, "B4")?,
                &read_band(&green, "B3")?,
                &read_band(&blue, "B2")?,
                &read_band(&nir, "B8")?,
                &read_band(&swir1, "B11")?,
                &read_band(&swir2, "B12")?,
                scale,
            )
            .context("Failed to assemble bands")?;

            let (rows, cols) = bands.shape();
            let (min_x, min_y, max_x, max_y) = bands.red.transform().bounds(cols, rows);
            info!(
                "Bands: {}x{}, extent [{:.4}, {:.4}] - [{:.4}, {:.4}]",
                cols, rows, min_x, min_y, max_x, max_y
            );
            if location.lon < min_x
                || location.lon > max_x
                || location.lat < min_y
                || location.lat > max_y
            {
                warn!("Location {} lies outside the band extent", location);
            }

            let start = Instant::now();
            let pb = spinner("Computing mineral indices...");
            let scans = scan_minerals_with_indices(&bands).context("Failed to scan bands")?;
            pb.finish_and_clear();
            let elapsed = start.elapsed();

            println!("Location: {} {}", location, address);
            println!(
                "Analysis area: {:.0} km² (10 km radius)\n",
                analysis_area_km2(ScanParams::default())
            );
            print_scan(&scans);

            if let Some(dir) = &mask_dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                for scan in &scans {
                    let m = scan.reading.mineral;
                    let mask = detection_mask(&scan.index, m.profile().detection_threshold)
                        .context("Failed to build detection mask")?;
                    let path = dir.join(format!("{}_mask.tif", m.key()));
                    write_mask(&mask, &path)?;
                    info!("{} mask saved to: {}", m.display_name(), path.display());
                }
            }

            let snapshot = ScanSnapshot {
                location,
                address,
                image_count: 1,
                readings: scans.into_iter().map(|s| s.reading).collect(),
            };
            let state = AnalysisState::new(mineral)
                .reduce(AnalysisEvent::ScanCompleted(snapshot), &registry);

            println!();
            if let Some(reading) = state.current_reading() {
                println!(
                    "{} index {}: {:.1}% coverage",
                    mineral.display_name(),
                    mineral.formula(),
                    reading.coverage
                );
            }
            if let Some(result) = state.classification() {
                print_classification(result, mineral);
            }
            println!("  Processing time: {:.2?}", elapsed);
        }
    }

    Ok(())
}
