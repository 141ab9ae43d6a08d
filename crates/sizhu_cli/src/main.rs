use clap::{Parser, Subcommand, ValueEnum};
use sizhu_base::{Stem, ten_god};
use sizhu_engine::{BirthInput, Chart, Coordinates, Gender, compute_chart};
use sizhu_time::{correct_solar_time, unapplied};

#[derive(Parser)]
#[command(name = "sizhu", about = "Four-pillars chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full natal chart
    Chart {
        /// Local civil timestamp (YYYY-MM-DDThh:mm:ss, wall clock at birth)
        #[arg(long)]
        born: String,
        /// Gender
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// IANA timezone id, e.g. Asia/Shanghai
        #[arg(long)]
        tz: Option<String>,
        /// Latitude in degrees (north positive)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Longitude in degrees (east positive)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive the four pillars only (no solar correction)
    Pillars {
        /// Local civil timestamp (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        born: String,
    },
    /// Correct a civil timestamp to true solar time
    SolarTime {
        /// Local civil timestamp (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        born: String,
        /// IANA timezone id
        #[arg(long)]
        tz: Option<String>,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Build one pillar from raw cycle indices and classify its hidden stems
    Pillar {
        /// Stem index (0-9, Jia=0)
        stem: u8,
        /// Branch index (0-11, Zi=0)
        branch: u8,
        /// Day-master stem index (0-9)
        day_master: u8,
    },
    /// Classify a stem against a day master (indices 0-9, Jia=0)
    TenGod {
        /// Day-master stem index
        day_master: u8,
        /// Other stem index
        other: u8,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Chart { born, gender, tz, lat, lon, json } => {
            let coordinates = match (lat, lon) {
                (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
                _ => None,
            };
            let input = BirthInput {
                gender: gender.into(),
                local_civil_timestamp: born,
                timezone_id: tz,
                coordinates,
            };
            match compute_chart(&input) {
                Ok(chart) => {
                    if json {
                        match serde_json::to_string_pretty(&chart) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("Error: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        print_chart(&chart);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Pillars { born } => match sizhu_time::parse_civil(&born) {
            Ok(ts) => {
                let fp = sizhu_engine::derive_four_pillars(ts);
                for (name, p) in [
                    ("Year", &fp.year),
                    ("Month", &fp.month),
                    ("Day", &fp.day),
                    ("Hour", &fp.hour),
                ] {
                    println!("{name:>5}: {} ({}{})", p.label(), p.stem.chinese(), p.branch.chinese());
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::SolarTime { born, tz, lon } => {
            let result = match (tz.as_deref(), lon) {
                (Some(tz), Some(lon)) => correct_solar_time(&born, Some(tz), lon),
                _ => unapplied(&born),
            };
            match result {
                Ok(r) => {
                    println!("corrected: {}", r.corrected);
                    println!("longitude correction: {:+.2} min", r.longitude_correction_minutes);
                    println!("equation of time:     {:+.2} min", r.equation_of_time_minutes);
                    println!("applied: {}", r.applied);
                    if let Some(w) = r.warning {
                        println!("warning: {w}");
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Pillar { stem, branch, day_master } => {
            let Some(dm) = Stem::from_index(day_master) else {
                eprintln!("Error: day-master index must be 0-9");
                std::process::exit(1);
            };
            match sizhu_engine::Pillar::from_indices(stem, branch, dm) {
                Ok(p) => {
                    println!("{} ({}{})", p.label(), p.stem.chinese(), p.branch.chinese());
                    for h in &p.hidden {
                        println!("  hidden: {} {} ({:?})", h.stem.name(), h.ten_god.name(), h.weight);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::TenGod { day_master, other } => {
            match (Stem::from_index(day_master), Stem::from_index(other)) {
                (Some(dm), Some(ot)) => {
                    let god = ten_god(dm, ot);
                    println!("{} vs {}: {} ({})", dm.name(), ot.name(), god.name(), god.pinyin());
                }
                _ => {
                    eprintln!("Error: stem indices must be 0-9");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_chart(chart: &Chart) {
    let fp = &chart.four_pillars;
    println!("Four pillars (day master {}):", fp.day_master().name());
    for (name, p) in [
        ("Year", &fp.year),
        ("Month", &fp.month),
        ("Day", &fp.day),
        ("Hour", &fp.hour),
    ] {
        let hidden: Vec<String> = p
            .hidden
            .iter()
            .map(|h| format!("{} {}", h.stem.name(), h.ten_god.name()))
            .collect();
        println!("{name:>5}: {:<10} hidden: {}", p.label(), hidden.join(", "));
    }
    println!("\nLuck pillars ({:?}):", chart.luck_direction);
    for lp in &chart.luck_pillars {
        println!(
            "  {}. age {:>3}-{:<3} {}",
            lp.index,
            lp.start_age,
            lp.end_age,
            lp.pillar.label()
        );
    }
    if !chart.interactions.is_empty() {
        println!("\nInteractions:");
        for e in &chart.interactions {
            println!("  {}", e.description);
        }
    }
    if !chart.markers.is_empty() {
        println!("\nMarkers:");
        for m in &chart.markers {
            println!("  {}", m.description);
        }
    }
    let st = &chart.solar_time;
    println!(
        "\nSolar time: {} (applied: {}, lon {:+.1} min, eot {:+.1} min)",
        st.corrected, st.applied, st.longitude_correction_minutes, st.equation_of_time_minutes
    );
    if let Some(w) = &st.warning {
        println!("  warning: {w}");
    }
}
