use std::collections::BTreeSet;
use std::env;
use std::process::exit;
use anyhow::{anyhow, Result};
use chrono::Local;
use log::info;
use crate::config::load_config;
use crate::logging::setup_logger;
use crate::manager_kma::Kma;

mod base_time;
mod config;
mod display;
mod errors;
mod forecast;
mod locations;
mod logging;
mod manager_kma;
mod models;

struct Args {
    config_path: String,
    location: Option<String>,
    day: i64,
    list_locations: bool,
    raw: bool,
    base_date: Option<String>,
    base_time: Option<String>,
    nx: Option<u32>,
    ny: Option<u32>,
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: vilagefcst <config> [--location NAME] [--day 0|1|2] \
                       [--list-locations] [--raw] [--base-date YYYYMMDD] \
                       [--base-time HHMM] [--nx N] [--ny N]");
            exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Parses command line arguments, the first positional being the path to
/// the configuration file
fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: String::new(),
        location: None,
        day: 0,
        list_locations: false,
        raw: false,
        base_date: None,
        base_time: None,
        nx: None,
        ny: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--location" => {
                args.location = Some(iter.next().ok_or("--location requires a name")?);
            }
            "--day" => {
                let day = iter.next().ok_or("--day requires a value")?;
                args.day = day.parse().map_err(|_| format!("invalid day offset: {}", day))?;
            }
            "--list-locations" => args.list_locations = true,
            "--raw" => args.raw = true,
            "--base-date" => {
                args.base_date = Some(iter.next().ok_or("--base-date requires a value")?);
            }
            "--base-time" => {
                args.base_time = Some(iter.next().ok_or("--base-time requires a value")?);
            }
            "--nx" => {
                let nx = iter.next().ok_or("--nx requires a value")?;
                args.nx = Some(nx.parse().map_err(|_| format!("invalid nx: {}", nx))?);
            }
            "--ny" => {
                let ny = iter.next().ok_or("--ny requires a value")?;
                args.ny = Some(ny.parse().map_err(|_| format!("invalid ny: {}", ny))?);
            }
            other if args.config_path.is_empty() && !other.starts_with("--") => {
                args.config_path = other.to_string();
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    if args.config_path.is_empty() {
        return Err("missing configuration file path".to_string());
    }
    if !(0..=2).contains(&args.day) {
        return Err(format!("day offset must be 0, 1 or 2, got {}", args.day));
    }

    Ok(args)
}

fn run(args: Args) -> Result<()> {
    if args.list_locations {
        for group in locations::LOCATION_GROUPS.iter() {
            println!("{}", group.group);
            for location in group.locations {
                println!("    {} (nx {}, ny {})", location.name, location.nx, location.ny);
            }
        }
        return Ok(());
    }

    let config = load_config(&args.config_path).map_err(|e| anyhow!("{}", e))?;
    setup_logger(&config.general).map_err(|e| anyhow!("{}", e))?;

    info!("vilagefcst version: {}", env!("CARGO_PKG_VERSION"));

    let name = args.location.as_deref().unwrap_or(&config.kma.default_location);
    let location = locations::find(name)
        .ok_or_else(|| anyhow!("unknown location: {}", name))?;

    let kma = Kma::new(config.kma.service_key, config.kma.num_of_rows.unwrap_or(1000));

    let now = Local::now();
    let mut base = base_time::base_params(now);

    if args.raw {
        // probe mode takes any explicit request parameters as-is
        if let Some(base_date) = args.base_date {
            base.base_date = base_date;
        }
        if let Some(base_time) = args.base_time {
            base.base_time = base_time;
        }
        let nx = args.nx.unwrap_or(location.nx);
        let ny = args.ny.unwrap_or(location.ny);

        let (header, records) = kma.probe(&base, nx, ny).map_err(|e| anyhow!("{}", e))?;
        println!("base_date: {}, base_time: {}, nx: {}, ny: {}",
                 base.base_date, base.base_time, nx, ny);
        println!("resultCode: {}, resultMsg: {}", header.result_code, header.result_msg);
        println!("records: {}", records.len());

        let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
        for category in categories {
            println!("    {} ({})", display::category_name(category), category);
        }
        return Ok(());
    }

    let records = kma.get_forecast(&base, location.nx, location.ny)
        .map_err(|e| anyhow!("failed to fetch weather data: {}", e))?;
    info!("received {} forecast records for {}", records.len(), location.name);

    let slots = forecast::group_records(&records);
    let target_date = base_time::offset_date(now, args.day);
    let day_slots = forecast::filter_by_date(slots, &target_date);

    if day_slots.is_empty() {
        if args.day > 0 {
            println!("Weather data for {} is not provided yet.",
                     display::day_label(args.day).to_lowercase());
        } else {
            println!("No weather data available.");
        }
        return Ok(());
    }

    println!("{}", display::banner(location.name, args.day, &target_date));
    println!();
    print!("{}", display::render_cards(&day_slots));
    println!();
    print!("{}", display::render_temp_chart(&day_slots));
    println!();
    print!("{}", display::render_pop_chart(&day_slots));

    Ok(())
}
