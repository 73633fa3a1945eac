//! Thickness classification against the LYTEC application standard
//!
//! The acceptable band for applied CBUQ depth is 3.5cm to 5.0cm inclusive.
//! The bounds are a fixed engineering standard, not a runtime parameter.

use serde::{Deserialize, Serialize};

pub const THICKNESS_MIN_CM: f64 = 3.5;
pub const THICKNESS_MAX_CM: f64 = 5.0;

/// Classification outcome for a computed thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThicknessStatus {
    /// Within the 3.5-5.0cm band
    Success,
    /// Outside the band (too thin or too thick)
    Error,
}

/// Full check result, with the sub-reason kept for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThicknessCheck {
    pub status: Option<ThicknessStatus>,
    pub within_standard: bool,
    /// Bilingual description ("Dentro do padrão / Within standard", ...)
    pub description: String,
}

/// Classify a thickness value in cm. `None` means "not computed".
pub fn classify(thickness_cm: f64) -> Option<ThicknessStatus> {
    if thickness_cm <= 0.0 {
        return None;
    }
    if (THICKNESS_MIN_CM..=THICKNESS_MAX_CM).contains(&thickness_cm) {
        Some(ThicknessStatus::Success)
    } else {
        Some(ThicknessStatus::Error)
    }
}

/// Classify with the too-thin / too-thick sub-reason.
pub fn check(thickness_cm: f64) -> ThicknessCheck {
    match classify(thickness_cm) {
        None => ThicknessCheck {
            status: None,
            within_standard: false,
            description: "Não calculado / Not computed".to_string(),
        },
        Some(ThicknessStatus::Success) => ThicknessCheck {
            status: Some(ThicknessStatus::Success),
            within_standard: true,
            description: "Dentro do padrão / Within standard".to_string(),
        },
        Some(ThicknessStatus::Error) => {
            let description = if thickness_cm < THICKNESS_MIN_CM {
                "Fora do padrão (muito fina) / Out of standard (too thin)"
            } else {
                "Fora do padrão (muito espessa) / Out of standard (too thick)"
            };
            ThicknessCheck {
                status: Some(ThicknessStatus::Error),
                within_standard: false,
                description: description.to_string(),
            }
        }
    }
}

/// Short bilingual label for a status.
pub fn status_text(status: Option<ThicknessStatus>) -> &'static str {
    match status {
        Some(ThicknessStatus::Success) => "Dentro do padrão / Within standard",
        Some(ThicknessStatus::Error) => "Fora do padrão / Out of standard",
        None => "Não calculado / Not computed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds_inclusive() {
        assert_eq!(classify(3.5), Some(ThicknessStatus::Success));
        assert_eq!(classify(5.0), Some(ThicknessStatus::Success));
        assert_eq!(classify(4.2), Some(ThicknessStatus::Success));
    }

    #[test]
    fn test_out_of_band() {
        assert_eq!(classify(3.49), Some(ThicknessStatus::Error));
        assert_eq!(classify(5.01), Some(ThicknessStatus::Error));
        assert_eq!(classify(12.5), Some(ThicknessStatus::Error));
    }

    #[test]
    fn test_not_computed() {
        assert_eq!(classify(0.0), None);
        assert_eq!(classify(-1.0), None);
    }

    #[test]
    fn test_check_sub_reason() {
        let thin = check(2.0);
        assert_eq!(thin.status, Some(ThicknessStatus::Error));
        assert!(!thin.within_standard);
        assert!(thin.description.contains("muito fina"));

        let thick = check(7.0);
        assert!(thick.description.contains("muito espessa"));

        let ok = check(4.0);
        assert!(ok.within_standard);
    }

    #[test]
    fn test_check_agrees_with_classify() {
        for cm in [-1.0, 0.0, 3.49, 3.5, 4.2, 5.0, 5.01, 125.0] {
            assert_eq!(check(cm).status, classify(cm));
        }
    }

    #[test]
    fn test_status_text() {
        assert!(status_text(Some(ThicknessStatus::Success)).contains("Dentro"));
        assert!(status_text(None).contains("Não calculado"));
    }
}
