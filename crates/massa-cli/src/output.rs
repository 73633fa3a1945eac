//! Output formatting module

use massa_app::{ApplicationOutcome, LoadStatus};
use massa_domain::model::ApplicationRecord;
use massa_domain::service::thickness::status_text;
use massa_domain::service::unit::format_mass;
use massa_types::{OutputFormat, Result};

pub fn output_outcome(output_format: OutputFormat, outcome: &ApplicationOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nApplication Recorded");
        println!("====================");
        println!("Sequence:        {}", outcome.record.sequence);
        if let Some(ref street) = outcome.record.street {
            println!("Street:          {}", street);
        }
        if let Some(a) = outcome.record.area_m2 {
            println!("Area:            {:.2} m²", a);
        }
        println!(
            "Applied mass:    {}",
            format_mass(outcome.record.applied_mass_t, 3)
        );
        if let Some(t) = outcome.record.thickness_cm {
            println!("Thickness:       {:.2} cm", t);
        }
        println!("Status:          {}", status_text(outcome.thickness.status));
        if outcome.record.applied_all_remaining {
            println!("Mode:            apply all remaining");
        }
        println!();
        println!("Remaining:       {}", format_mass(outcome.remaining_t, 3));
        println!(
            "Progress:        {:.1}% applied{}",
            outcome.progress.percent_applied,
            if outcome.progress.is_complete {
                " (load complete)"
            } else {
                ""
            }
        );
    }

    Ok(())
}

pub fn output_status(output_format: OutputFormat, status: &LoadStatus) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(status)?;
        println!("{}", content);
    } else {
        println!("\nLoad {}", status.load.delivery_ref);
        println!("====================");
        if let Some(ref material) = status.load.material {
            println!("Material:        {}", material);
        }
        if let Some(date) = status.load.delivered_at {
            println!("Delivered:       {}", date);
        }
        println!("Total:           {}", format_mass(status.load.total_mass_t, 3));
        println!("Applied:         {}", format_mass(status.progress.applied_t, 3));
        println!("Remaining:       {}", format_mass(status.progress.remaining_t, 3));
        println!(
            "Progress:        {:.1}%{}",
            status.progress.percent_applied,
            if status.progress.is_complete {
                " (complete)"
            } else {
                ""
            }
        );
        println!("Passes:          {}", status.records.len());
    }

    Ok(())
}

pub fn output_status_list(output_format: OutputFormat, statuses: &[LoadStatus]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(statuses)?;
        println!("{}", content);
        return Ok(());
    }

    if statuses.is_empty() {
        println!("No loads registered.");
        return Ok(());
    }

    println!(
        "{:<16} {:>10} {:>10} {:>10} {:>8} {:>7}",
        "Reference", "Total", "Applied", "Remaining", "Percent", "Passes"
    );
    println!("{}", "-".repeat(68));
    for status in statuses {
        println!(
            "{:<16} {:>9.3}t {:>9.3}t {:>9.3}t {:>7.1}% {:>7}",
            status.load.delivery_ref,
            status.load.total_mass_t,
            status.progress.applied_t,
            status.progress.remaining_t,
            status.progress.percent_applied,
            status.records.len()
        );
    }

    Ok(())
}

pub fn output_history(output_format: OutputFormat, records: &[ApplicationRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(records)?;
        println!("{}", content);
        return Ok(());
    }

    if records.is_empty() {
        println!("No application records.");
        return Ok(());
    }

    println!(
        "{:<5} {:<20} {:>8} {:>10} {:>10} {:<12}",
        "Seq", "Street", "Area", "Mass", "Thickness", "Date"
    );
    println!("{}", "-".repeat(72));
    for record in records {
        println!(
            "{:<5} {:<20} {:>6.1}m² {:>9.3}t {:>8.2}cm {:<12}",
            record.sequence,
            record.street.as_deref().unwrap_or("-"),
            record.area_m2.unwrap_or(0.0),
            record.applied_mass_t,
            record.thickness_cm.unwrap_or(0.0),
            record
                .applied_at
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    Ok(())
}
