use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use kundali_analysis::{analyze_aspects, analyze_dasha, analyze_yogas, build_report};
use kundali_base::{
    Chart, ChartInput, Graha, Rashi, SignDignity, build_divisional_chart, cast_chart, dignity_of,
    house_of, is_combust_in, nakshatra_from_longitude, sign_of,
};
use kundali_config::KundaliConfig;
use kundali_core::TableProvider;
use kundali_time::BirthInput;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic chart analysis CLI")]
struct Cli {
    /// TOML config file (default: $KUNDALI_CONFIG, then ./kundali.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// House of a longitude, counted in 30-degree arcs from the ascendant degree
    House {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
    },
    /// Cast a chart from an ephemeris table and birth details
    Cast {
        /// Ephemeris table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
        /// UTC offset (+05:30, UTC-04:00, Z)
        #[arg(long, default_value = "Z")]
        tz: String,
        /// Latitude in degrees
        #[arg(long, default_value = "0")]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "0")]
        lon: f64,
    },
    /// Divisional chart from a positions file
    Varga {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
        /// Division factor (1, 2, 3, 4, 7, 9, 10, 12, 16, 20, 24, 30, 60)
        #[arg(long, default_value = "9")]
        d: u16,
    },
    /// Dignity and combustion of every graha
    Dignity {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
    },
    /// Graha drishti between planets and onto houses
    Aspects {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
    },
    /// Detect all yoga families
    Yogas {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
    },
    /// Vimshottari dasha analysis at an age
    Dasha {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
        /// Age in years
        #[arg(long)]
        age: f64,
    },
    /// Full synthesized report
    Report {
        /// Positions file (JSON)
        #[arg(long)]
        chart: PathBuf,
        /// Age in years
        #[arg(long)]
        age: f64,
    },
    /// Julian Day (UT) of a local birth time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
        /// UTC offset (+05:30, UTC-04:00, Z)
        #[arg(long, default_value = "Z")]
        tz: String,
        /// Latitude in degrees
        #[arg(long, default_value = "0")]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "0")]
        lon: f64,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DignityRow {
    graha: Graha,
    rashi: Rashi,
    house: u8,
    dignity: SignDignity,
    retrograde: bool,
    combust: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&Path>) -> KundaliConfig {
    let loaded = match path {
        Some(p) => KundaliConfig::load(p),
        None => KundaliConfig::discover(),
    };
    loaded.unwrap_or_else(|e| fail(format!("Failed to load config: {e}")))
}

fn parse_chart(text: &str) -> Result<Chart, String> {
    let input: ChartInput = serde_json::from_str(text).map_err(|e| e.to_string())?;
    input.to_chart().map_err(|e| e.to_string())
}

fn load_chart(path: &Path) -> Chart {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())));
    let chart = parse_chart(&text)
        .unwrap_or_else(|e| fail(format!("Invalid chart file {}: {e}", path.display())));
    log::debug!(
        "loaded chart from {} ({} rising)",
        path.display(),
        chart.ascendant().rashi.name()
    );
    chart
}

fn birth_input(date: &str, time: &str, tz: &str, lat: f64, lon: f64) -> BirthInput {
    BirthInput {
        date_of_birth: date.to_string(),
        time_of_birth: time.to_string(),
        latitude: lat,
        longitude: lon,
        timezone: tz.to_string(),
    }
}

fn cast_from_table(table_json: &str, input: &BirthInput) -> Result<Chart, String> {
    let provider = TableProvider::from_json_str(table_json).map_err(|e| e.to_string())?;
    let moment = input.to_moment().map_err(|e| e.to_string())?;
    cast_chart(&provider, &moment).map_err(|e| e.to_string())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to render JSON: {e}")),
    }
}

fn dignity_rows(chart: &Chart, combustion_orb: Option<f64>) -> Vec<DignityRow> {
    chart
        .placements()
        .iter()
        .map(|p| DignityRow {
            graha: p.graha,
            rashi: p.rashi,
            house: p.house,
            dignity: dignity_of(p.graha, p.rashi),
            retrograde: chart.is_retrograde(p.graha),
            combust: is_combust_in(chart, p.graha, combustion_orb),
        })
        .collect()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = || load_config(cli.config.as_deref());

    match &cli.command {
        Commands::Rashi { lon } => {
            let pos = sign_of(*lon).unwrap_or_else(|e| fail(e));
            let dms = pos.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                pos.rashi.name(),
                pos.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                pos.degree_in_sign
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(*lon).unwrap_or_else(|e| fail(e));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.number,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::House { lon, asc } => {
            let house = house_of(*lon, *asc).unwrap_or_else(|e| fail(e));
            println!("House {house}");
        }

        Commands::Cast {
            table,
            date,
            time,
            tz,
            lat,
            lon,
        } => {
            let text = std::fs::read_to_string(table)
                .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", table.display())));
            let input = birth_input(date, time, tz, *lat, *lon);
            let chart = cast_from_table(&text, &input)
                .unwrap_or_else(|e| fail(format!("Cast failed: {e}")));
            print_json(&chart);
        }

        Commands::Varga { chart, d } => {
            let chart = load_chart(chart);
            let varga = build_divisional_chart(&chart, *d).unwrap_or_else(|e| fail(e));
            print_json(&varga);
        }

        Commands::Dignity { chart } => {
            let chart = load_chart(chart);
            print_json(&dignity_rows(&chart, config().yoga.combustion_orb));
        }

        Commands::Aspects { chart } => {
            let chart = load_chart(chart);
            print_json(&analyze_aspects(&chart).unwrap_or_else(|e| fail(e)));
        }

        Commands::Yogas { chart } => {
            let chart = load_chart(chart);
            print_json(&analyze_yogas(&chart, &config().yoga));
        }

        Commands::Dasha { chart, age } => {
            let chart = load_chart(chart);
            let analysis = analyze_dasha(&chart, *age, &config().dasha).unwrap_or_else(|e| fail(e));
            print_json(&analysis);
        }

        Commands::Report { chart, age } => {
            let chart = load_chart(chart);
            let report = build_report(&chart, *age, &config().report_config())
                .unwrap_or_else(|e| fail(format!("Report failed: {e}")));
            print_json(&report);
        }

        Commands::Jd {
            date,
            time,
            tz,
            lat,
            lon,
        } => {
            let input = birth_input(date, time, tz, *lat, *lon);
            let moment = input.to_moment().unwrap_or_else(|e| fail(e));
            println!("JD {:.6} (UT) - {}", moment.jd_ut, moment.utc);
        }
    }
}
