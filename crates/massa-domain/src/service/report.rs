//! Application checking service
//!
//! Cross-checks application records against their loads: thickness band
//! compliance and cumulative mass against the delivered total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{ApplicationRecord, Load};
use crate::service::calculation::round_mass;
use crate::service::thickness::{check, ThicknessCheck, ThicknessStatus};

/// Result of checking a single application record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCheckResult {
    pub record: ApplicationRecord,
    pub load: Option<Load>,
    pub thickness: ThicknessCheck,
    /// Cumulative applied mass up to and including this record exceeded the
    /// load's delivered total
    pub over_applied: bool,
    pub excess_t: Option<f64>,
}

pub fn check_applications(
    records: &[ApplicationRecord],
    loads: &[Load],
) -> Vec<ApplicationCheckResult> {
    let by_id: HashMap<&str, &Load> = loads.iter().map(|l| (l.id.as_str(), l)).collect();
    let mut cumulative: HashMap<&str, f64> = HashMap::new();

    let mut sorted: Vec<&ApplicationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| (a.load_id.as_str(), a.sequence).cmp(&(b.load_id.as_str(), b.sequence)));

    sorted
        .into_iter()
        .map(|record| {
            let load = by_id.get(record.load_id.as_str()).copied();
            let total = cumulative.entry(record.load_id.as_str()).or_insert(0.0);
            *total += record.applied_mass_t;

            let (over_applied, excess_t) = match load {
                Some(l) => {
                    // storage precision, so float noise in the running sum
                    // does not flag a fully consumed load
                    let excess = round_mass(*total - l.total_mass_t);
                    (excess > 0.0, if excess > 0.0 { Some(excess) } else { None })
                }
                None => (false, None),
            };

            ApplicationCheckResult {
                record: record.clone(),
                load: load.cloned(),
                thickness: check(record.thickness_cm.unwrap_or(0.0)),
                over_applied,
                excess_t,
            }
        })
        .collect()
}

pub fn generate_application_report(results: &[ApplicationCheckResult]) -> String {
    let total = results.len();
    let unmatched_count = results.iter().filter(|r| r.load.is_none()).count();
    let matched_count = total - unmatched_count;
    let out_of_standard_count = results
        .iter()
        .filter(|r| r.thickness.status == Some(ThicknessStatus::Error))
        .count();
    let over_applied_count = results.iter().filter(|r| r.over_applied).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("        Relatório de Aplicação de Massa            \n");
    report.push_str("        Mass Application Check Report              \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Resumo / Summary]\n");
    report.push_str(&format!("  Total de registros / Total records:    {}\n", total));
    report.push_str(&format!("  Cargas localizadas / Matched loads:    {}\n", matched_count));
    report.push_str(&format!("  Cargas não localizadas / Unmatched:    {}\n", unmatched_count));
    report.push_str(&format!(
        "  Fora do padrão / Out of standard:      {}\n",
        out_of_standard_count
    ));
    report.push_str(&format!(
        "  Massa excedida / Over-applied:         {}\n",
        over_applied_count
    ));
    if matched_count > 0 {
        let rate = (out_of_standard_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Taxa fora do padrão / Deviation rate:  {:.1}%\n", rate));
    }
    report.push('\n');

    if out_of_standard_count > 0 {
        report.push_str("[Espessura fora do padrão / Out-of-standard Thickness]\n");
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<20} {:>8} {:>10} {:>18}\n",
            "Seq", "Rua / Street", "Área", "Espessura", "Situação"
        ));
        report.push_str("-".repeat(72).as_str());
        report.push('\n');
        for result in results
            .iter()
            .filter(|r| r.thickness.status == Some(ThicknessStatus::Error))
        {
            report.push_str(&format!(
                "{:<12} {:<20} {:>6.1}m² {:>8.2}cm {:>18}\n",
                result.record.sequence,
                truncate_str(result.record.street.as_deref().unwrap_or("-"), 19),
                result.record.area_m2.unwrap_or(0.0),
                result.record.thickness_cm.unwrap_or(0.0),
                if result.record.thickness_cm.unwrap_or(0.0) < 3.5 {
                    "muito fina"
                } else {
                    "muito espessa"
                }
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[Todas as espessuras dentro do padrão]\n");
        report.push_str("All thicknesses are within the 3.5-5.0cm standard.\n\n");
    }

    if over_applied_count > 0 {
        report.push_str("[Massa aplicada excede a carga / Over-applied Loads]\n");
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<16} {:>6} {:>10} {:>10} {:>10}\n",
            "Carga / Load", "Seq", "Aplicada", "Total", "Excesso"
        ));
        report.push_str("-".repeat(60).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| r.over_applied) {
            let load = result.load.as_ref();
            report.push_str(&format!(
                "{:<16} {:>6} {:>9.3}t {:>9.3}t {:>+9.3}t\n",
                truncate_str(
                    load.map(|l| l.delivery_ref.as_str()).unwrap_or("-"),
                    15
                ),
                result.record.sequence,
                result.record.applied_mass_t,
                load.map(|l| l.total_mass_t).unwrap_or(0.0),
                result.excess_t.unwrap_or(0.0)
            ));
        }
        report.push('\n');
    }

    if unmatched_count > 0 {
        report.push_str("[Cargas não localizadas / Unmatched Loads]\n");
        report.push_str("-".repeat(48).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| r.load.is_none()) {
            report.push_str(&format!(
                "{:<20} seq {:<4} {:>9.3}t\n",
                truncate_str(&result.record.load_id, 19),
                result.record.sequence,
                result.record.applied_mass_t
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(id: &str, total: f64) -> Load {
        let mut load = Load::new(format!("CR-{}", id), total).unwrap();
        load.id = id.to_string();
        load
    }

    fn record(load_id: &str, sequence: u32, mass: f64, thickness: Option<f64>) -> ApplicationRecord {
        let mut record = ApplicationRecord::new(load_id.to_string(), sequence, mass);
        record.thickness_cm = thickness;
        record.street = Some("Rua das Flores".to_string());
        record.area_m2 = Some(20.0);
        record
    }

    #[test]
    fn test_within_standard_no_flags() {
        let loads = vec![load("l1", 30.0)];
        let records = vec![record("l1", 1, 2.4, Some(5.0))];
        let results = check_applications(&records, &loads);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].thickness.status, Some(ThicknessStatus::Success));
        assert!(!results[0].over_applied);
    }

    #[test]
    fn test_out_of_standard_thickness() {
        let loads = vec![load("l1", 30.0)];
        let records = vec![record("l1", 1, 2.4, Some(12.5))];
        let results = check_applications(&records, &loads);
        assert_eq!(results[0].thickness.status, Some(ThicknessStatus::Error));
    }

    #[test]
    fn test_over_applied_detection() {
        let loads = vec![load("l1", 5.0)];
        let records = vec![
            record("l1", 1, 3.0, Some(4.0)),
            record("l1", 2, 3.0, Some(4.0)),
        ];
        let results = check_applications(&records, &loads);
        assert!(!results[0].over_applied);
        assert!(results[1].over_applied);
        assert!((results[1].excess_t.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fully_consumed_load_not_flagged() {
        // 0.1 + 0.2 sums to 0.30000000000000004 in floats; at storage
        // precision the load is exactly consumed, not over-applied
        let loads = vec![load("l1", 0.3)];
        let records = vec![
            record("l1", 1, 0.1, Some(4.0)),
            record("l1", 2, 0.2, Some(4.0)),
        ];
        let results = check_applications(&records, &loads);
        assert!(!results[1].over_applied);
        assert!(results[1].excess_t.is_none());
    }

    #[test]
    fn test_unmatched_load() {
        let records = vec![record("missing", 1, 2.4, Some(5.0))];
        let results = check_applications(&records, &[]);
        assert!(results[0].load.is_none());
        assert!(!results[0].over_applied);
    }

    #[test]
    fn test_generate_report() {
        let loads = vec![load("l1", 5.0)];
        let records = vec![
            record("l1", 1, 3.0, Some(2.0)),
            record("l1", 2, 3.0, Some(4.0)),
        ];
        let results = check_applications(&records, &loads);
        let report = generate_application_report(&results);
        assert!(report.contains("Relatório de Aplicação de Massa"));
        assert!(report.contains("muito fina"));
        assert!(report.contains("Massa excedida / Over-applied:         1"));
    }
}
