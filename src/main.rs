//! Command line front end printing schedule views as JSON.
//!
//! ```text
//! salon-schedule today [YYYY-MM-DD]
//! salon-schedule calendar [YYYY-MM]
//! salon-schedule clients [search]
//! salon-schedule client <id>
//! ```

use std::env;
use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use dotenvy::dotenv;
use serde::Serialize;

use salon_schedule::clock::{Clock, SystemClock};
use salon_schedule::domain::types::ClientId;
use salon_schedule::models::config::AppConfig;
use salon_schedule::repository::InMemoryRepository;
use salon_schedule::services::{ServiceError, calendar, client, schedule};

const USAGE: &str = "usage: salon-schedule <today [YYYY-MM-DD] | calendar [YYYY-MM] | clients [search] | client <id>>";

fn print_json<T: Serialize>(value: &T) -> Result<(), ServiceError> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| ServiceError::Internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

fn parse_month(raw: &str) -> Result<(i32, u32), ServiceError> {
    let invalid = || ServiceError::Form(format!("expected YYYY-MM, got {raw}"));
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    Ok((
        year.parse().map_err(|_| invalid())?,
        month.parse().map_err(|_| invalid())?,
    ))
}

fn dispatch(
    args: &[String],
    repo: &InMemoryRepository,
    clock: &SystemClock,
    config: &AppConfig,
) -> Result<(), ServiceError> {
    let command = args.first().map(String::as_str).unwrap_or("today");
    let argument = args.get(1).map(String::as_str);

    match command {
        "today" => {
            let date = argument
                .map(|raw| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .map_err(|_| ServiceError::Form(format!("expected YYYY-MM-DD, got {raw}")))
                })
                .transpose()?;
            print_json(&schedule::load_day_schedule(repo, clock, date)?)
        }
        "calendar" => {
            let (year, month) = match argument {
                Some(raw) => parse_month(raw)?,
                None => {
                    let today = clock.today();
                    (today.year(), today.month())
                }
            };
            print_json(&calendar::load_calendar_month(repo, clock, year, month)?)
        }
        "clients" => print_json(&client::load_client_list(
            repo,
            clock,
            argument.map(str::to_string),
        )?),
        "client" => {
            let id = argument
                .ok_or_else(|| ServiceError::Form(USAGE.to_string()))?
                .parse::<ClientId>()?;
            print_json(&client::load_client_details(
                repo,
                clock,
                id,
                config.history_limit,
            )?)
        }
        _ => Err(ServiceError::Form(USAGE.to_string())),
    }
}

fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match AppConfig::load(&app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = if config.seed_fixtures {
        match InMemoryRepository::seeded() {
            Ok(repo) => repo,
            Err(err) => {
                log::error!("Error loading fixtures: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        InMemoryRepository::new()
    };

    let args: Vec<String> = env::args().skip(1).collect();
    match dispatch(&args, &repo, &SystemClock, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
