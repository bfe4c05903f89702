use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use coptic_time::{CopticDate, GregorianDate};
use katameros_data::DatasetConfig;
use katameros_rs::Katameros;
use log::debug;

#[derive(Parser)]
#[command(name = "katameros", about = "Coptic liturgical calendar CLI")]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Gregorian date to the Coptic calendar
    ToCoptic {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a Coptic date to the Gregorian calendar
    ToGregorian {
        /// Coptic year (Anno Martyrum)
        year: i32,
        /// Coptic month (1-13)
        month: u32,
        /// Coptic day (1-30, Nasie 1-6)
        day: u32,
    },
    /// Gregorian date of Coptic Easter (Pascha) for a year
    Easter {
        /// Gregorian year
        year: i32,
    },
    /// Liturgical season a date falls in
    Season {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// All liturgical seasons of a year
    Seasons {
        /// Gregorian year
        year: i32,
        /// Only list fasting periods
        #[arg(long)]
        fasting: bool,
    },
    /// Easter-anchored moveable feasts of a year
    Feasts {
        /// Gregorian year
        year: i32,
    },
    /// Whether a date falls in a fasting period
    Fasting {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// Scripture readings for a date
    Readings {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
        /// Directory holding the JSON datasets
        #[arg(long)]
        data: PathBuf,
        /// Emit resolved readings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search synaxarium commemorations by name
    Search {
        /// Free-text query
        query: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
        /// Directory holding the JSON datasets
        #[arg(long)]
        data: PathBuf,
    },
    /// Synaxarium commemorations for a date
    Synaxarium {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
        /// Directory holding the JSON datasets
        #[arg(long)]
        data: PathBuf,
    },
    /// Fixed celebrations for a date
    Celebrations {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
        /// Directory holding the JSON datasets
        #[arg(long)]
        data: PathBuf,
    },
}

fn parse_gregorian(s: &str) -> Result<GregorianDate, String> {
    let mut parts = s.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("invalid date `{s}`; expected YYYY-MM-DD"));
    };
    let year: i32 = y.parse().map_err(|_| format!("invalid year in `{s}`"))?;
    let month: u32 = m.parse().map_err(|_| format!("invalid month in `{s}`"))?;
    let day: u32 = d.parse().map_err(|_| format!("invalid day in `{s}`"))?;
    GregorianDate::new(year, month, day).map_err(|e| e.to_string())
}

fn require_date(s: &str) -> GregorianDate {
    match parse_gregorian(s) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn dataset_config(dir: &Path) -> DatasetConfig {
    DatasetConfig {
        day_readings_path: dir.join("dayReadings.json"),
        readings_path: dir.join("uniqueReadings.json"),
        bible_path: dir.join("bible.json"),
        celebrations_path: dir.join("nonMoveableCelebrations.json"),
        synaxarium_path: dir.join("synaxarium.json"),
        strict_validation: true,
    }
}

fn load_engine(dir: &Path) -> Katameros {
    match Katameros::load(&dataset_config(dir)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load datasets: {e}");
            std::process::exit(1);
        }
    }
}

fn print_readings(bundle: &katameros_rs::ReadingsBundle) {
    let sections: [(&str, &Option<Vec<katameros_rs::Reading>>); 9] = [
        ("Vespers Psalm", &bundle.vespers_psalm),
        ("Vespers Gospel", &bundle.vespers_gospel),
        ("Matins Psalm", &bundle.matins_psalm),
        ("Matins Gospel", &bundle.matins_gospel),
        ("Pauline", &bundle.pauline),
        ("Catholic", &bundle.catholic),
        ("Acts", &bundle.acts),
        ("Liturgy Psalm", &bundle.liturgy_psalm),
        ("Liturgy Gospel", &bundle.liturgy_gospel),
    ];
    for (label, readings) in sections {
        println!("{label}:");
        match readings {
            None => println!("  (none)"),
            Some(readings) => {
                for reading in readings {
                    for chapter in &reading.chapters {
                        let first = chapter.verses.first().map(|v| v.num).unwrap_or(0);
                        let last = chapter.verses.last().map(|v| v.num).unwrap_or(0);
                        println!(
                            "  {} {}:{}-{} ({} verses)",
                            reading.book_name,
                            chapter.chapter,
                            first,
                            last,
                            chapter.verses.len()
                        );
                    }
                }
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // The handle must stay alive for the process lifetime.
    let _logger = match flexi_logger::Logger::try_with_str(&cli.log_level)
        .and_then(|logger| logger.start())
    {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::ToCoptic { date } => {
            let greg = require_date(&date);
            match katameros_rs::to_coptic(greg) {
                Ok(coptic) => println!("{coptic}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::ToGregorian { year, month, day } => match CopticDate::new(year, month, day) {
            Ok(coptic) => println!("{}", katameros_rs::to_gregorian(coptic)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Easter { year } => {
            println!("{}", katameros_rs::easter_date(year));
        }

        Commands::Season { date } => {
            let greg = require_date(&date);
            match coptic_liturgy::liturgical_season_for_date(greg) {
                Some(season) => {
                    println!(
                        "{} ({} - {}){}",
                        season.name.display_name(),
                        season.start,
                        season.end,
                        if season.fasting { " [fasting]" } else { "" }
                    );
                }
                None => println!("Ordinary Time"),
            }
        }

        Commands::Seasons { year, fasting } => {
            let windows = if fasting {
                coptic_liturgy::fasting_periods_for_year(year)
            } else {
                coptic_liturgy::season_calendar_for_year(year)
            };
            for window in windows {
                println!(
                    "{:<20} {} - {}{}",
                    window.name.display_name(),
                    window.start,
                    window.end,
                    if window.fasting { " [fasting]" } else { "" }
                );
            }
        }

        Commands::Feasts { year } => {
            for feast in coptic_liturgy::moveable_feasts_for_year(year) {
                println!("{:<28} {}", feast.name, feast.date);
            }
        }

        Commands::Fasting { date } => {
            let greg = require_date(&date);
            if coptic_liturgy::is_in_fasting_period(greg) {
                println!("fasting");
            } else {
                println!("not fasting");
                std::process::exit(2);
            }
        }

        Commands::Readings { date, data, json } => {
            let greg = require_date(&date);
            let engine = load_engine(&data);
            debug!("resolving readings for {greg}");
            match engine.resolve_readings_for_date(greg) {
                Ok(bundle) if json => match serde_json::to_string_pretty(&bundle) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("Failed to serialize readings: {e}");
                        std::process::exit(1);
                    }
                },
                Ok(bundle) => print_readings(&bundle),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Search { query, limit, data } => {
            let engine = load_engine(&data);
            let hits = engine.search_synaxarium(&query, limit);
            if hits.is_empty() {
                println!("no matches");
            }
            for hit in hits {
                println!("{:<12} {}", hit.key, hit.name);
            }
        }

        Commands::Synaxarium { date, data } => {
            let greg = require_date(&date);
            let engine = load_engine(&data);
            match engine.synaxarium_for_date(greg) {
                Ok(entries) => {
                    if entries.is_empty() {
                        println!("no commemorations");
                    }
                    for entry in entries {
                        match &entry.name {
                            Some(name) => println!("{name}"),
                            None => println!("(unnamed entry)"),
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Celebrations { date, data } => {
            let greg = require_date(&date);
            let engine = load_engine(&data);
            match engine.celebrations_for_date(greg) {
                Ok(celebrations) => {
                    if celebrations.is_empty() {
                        println!("no celebrations");
                    }
                    for celebration in celebrations {
                        println!("{:<16} {}", celebration.kind, celebration.name);
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_gregorian;

    #[test]
    fn parses_iso_dates() {
        let d = parse_gregorian("2025-04-20").unwrap();
        assert_eq!((d.year, d.month, d.day), (2025, 4, 20));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_gregorian("2025-04").is_err());
        assert!(parse_gregorian("not-a-date").is_err());
        assert!(parse_gregorian("2025-02-30").is_err());
    }
}
