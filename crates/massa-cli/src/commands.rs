//! Command handlers

use std::path::PathBuf;

use chrono::NaiveDate;

use massa_app::{Config, LedgerService, RecordApplication, RegisterLoad};
use massa_domain::repository::{ApplicationRepository, LoadRepository};
use massa_domain::service::report::{check_applications, generate_application_report};
use massa_infra::persistence::{CsvApplicationRepository, CsvLoadRepository};
use massa_types::{Error, MassUnit, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_history, output_outcome, output_status, output_status_list};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::RegisterLoad {
            reference,
            mass,
            unit,
            material,
            date,
        } => cmd_register_load(
            &cli,
            &config,
            reference.clone(),
            *mass,
            *unit,
            material.clone(),
            date.as_deref(),
        ),

        Commands::Apply {
            load,
            length,
            width,
            street,
            mass,
            unit,
            all_remaining,
            temperature,
            notes,
            date,
        } => {
            let params = RecordApplication {
                load: load.clone(),
                street: street.clone(),
                length_m: *length,
                width_m: *width,
                applied_mass: *mass,
                unit: *unit,
                apply_all_remaining: *all_remaining,
                temperature_c: *temperature,
                notes: notes.clone(),
                applied_at: parse_date(date.as_deref())?,
            };
            cmd_apply(&config, params, output_format)
        }

        Commands::Status { load } => cmd_status(&config, load.as_deref(), output_format),

        Commands::History { load, limit } => {
            cmd_history(&config, load.as_deref(), *limit, output_format)
        }

        Commands::Check {
            loads,
            applications,
            load,
            unit,
        } => cmd_check(
            &cli,
            loads.clone(),
            applications.clone(),
            load.as_deref(),
            *unit,
        ),

        Commands::Config {
            show,
            set_output,
            set_data_dir,
            reset,
        } => cmd_config(*show, *set_output, set_data_dir.clone(), *reset),
    }
}

fn open_service(config: &Config) -> Result<LedgerService> {
    LedgerService::open(config.data_dir()?)
}

#[allow(clippy::too_many_arguments)]
fn cmd_register_load(
    cli: &Cli,
    config: &Config,
    reference: String,
    mass: f64,
    unit: Option<MassUnit>,
    material: Option<String>,
    date: Option<&str>,
) -> Result<()> {
    let mut service = open_service(config)?;
    let load = service.register_load(RegisterLoad {
        delivery_ref: reference,
        total_mass: mass,
        unit,
        material,
        delivered_at: parse_date(date)?,
    })?;

    if cli.verbose {
        eprintln!("Stored load {} in {}", load.id, config.data_dir()?.display());
    }
    println!(
        "Registered load {} with {:.3}t",
        load.delivery_ref, load.total_mass_t
    );
    Ok(())
}

fn cmd_apply(
    config: &Config,
    params: RecordApplication,
    output_format: OutputFormat,
) -> Result<()> {
    let mut service = open_service(config)?;
    let outcome = service.record_application(params)?;
    output_outcome(output_format, &outcome)
}

fn cmd_status(config: &Config, load: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    match load {
        Some(key) => {
            let status = service.load_status(key)?;
            output_status(output_format, &status)
        }
        None => {
            let statuses = service.all_statuses();
            output_status_list(output_format, &statuses)
        }
    }
}

fn cmd_history(
    config: &Config,
    load: Option<&str>,
    limit: usize,
    output_format: OutputFormat,
) -> Result<()> {
    let service = open_service(config)?;
    let mut records = service.history(load)?;
    if records.len() > limit {
        records = records.split_off(records.len() - limit);
    }
    output_history(output_format, &records)
}

fn cmd_check(
    cli: &Cli,
    loads_csv: PathBuf,
    applications_csv: PathBuf,
    load_filter: Option<&str>,
    unit: Option<MassUnit>,
) -> Result<()> {
    let load_repo = CsvLoadRepository::new(loads_csv, unit)?;
    let loads = load_repo.find_all()?;
    let app_repo = CsvApplicationRepository::new(applications_csv, &loads, unit)?;

    let records = match load_filter {
        Some(delivery_ref) => {
            let load = load_repo
                .find_by_ref(delivery_ref)?
                .ok_or_else(|| Error::LoadNotFound(delivery_ref.to_string()))?;
            app_repo.find_by_load(&load.id)?
        }
        None => app_repo.find_all()?,
    };

    if cli.verbose {
        eprintln!(
            "Checking {} records against {} loads",
            records.len(),
            loads.len()
        );
    }

    let results = check_applications(&records, &loads);
    let report = generate_application_report(&results);
    println!("{}", report);
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

fn parse_date(s: Option<&str>) -> Result<Option<NaiveDate>> {
    let s = match s {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Ok(None),
    };
    let formats = ["%Y-%m-%d", "%d/%m/%Y"];
    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(Some(date));
        }
    }
    Err(Error::InvalidDate(s.to_string()))
}
