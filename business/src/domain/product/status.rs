use chrono::NaiveDate;
use serde::Serialize;

use super::expiry_date::calendar_days_until;

/// Expiry risk levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryLevel {
    /// More than a week left.
    Safe,
    /// Expires today or within the next seven days.
    Near,
    /// Expiry day is in the past.
    Expired,
    /// The expiry date could not be read.
    Invalid,
}

impl std::fmt::Display for ExpiryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryLevel::Safe => write!(f, "safe"),
            ExpiryLevel::Near => write!(f, "near"),
            ExpiryLevel::Expired => write!(f, "expired"),
            ExpiryLevel::Invalid => write!(f, "invalid"),
        }
    }
}

/// Classification of a single expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryStatus {
    pub level: ExpiryLevel,
    pub label: String,
    pub days: Option<i64>,
}

pub const NEAR_EXPIRY_DAYS: i64 = 7;

/// Classifies an expiry date relative to `today`.
///
/// Business rules:
/// - Unreadable date -> Invalid, no day count
/// - Past expiry day -> Expired
/// - 0..=7 days left -> Near
/// - 8+ days left -> Safe
pub fn classify(exp_date: &str, today: NaiveDate) -> ExpiryStatus {
    let Some(days) = calendar_days_until(exp_date, today) else {
        return ExpiryStatus {
            level: ExpiryLevel::Invalid,
            label: "Invalid".to_string(),
            days: None,
        };
    };

    if days < 0 {
        return ExpiryStatus {
            level: ExpiryLevel::Expired,
            label: "Expired".to_string(),
            days: Some(days),
        };
    }

    if days <= NEAR_EXPIRY_DAYS {
        return ExpiryStatus {
            level: ExpiryLevel::Near,
            label: format!("Near Expiry ({}d)", days),
            days: Some(days),
        };
    }

    ExpiryStatus {
        level: ExpiryLevel::Safe,
        label: format!("Safe ({}d)", days),
        days: Some(days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn in_days(days: i64) -> String {
        (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    #[test]
    fn should_mark_unparseable_dates_as_invalid() {
        let status = classify("not-a-date", today());

        assert_eq!(status.level, ExpiryLevel::Invalid);
        assert_eq!(status.label, "Invalid");
        assert_eq!(status.days, None);
    }

    #[test]
    fn should_treat_today_as_near_expiry() {
        let status = classify(&in_days(0), today());

        assert_eq!(status.level, ExpiryLevel::Near);
        assert_eq!(status.days, Some(0));
        assert_eq!(status.label, "Near Expiry (0d)");
    }

    #[test]
    fn should_keep_seventh_day_near_and_eighth_day_safe() {
        let seventh = classify(&in_days(7), today());
        assert_eq!(seventh.level, ExpiryLevel::Near);
        assert_eq!(seventh.label, "Near Expiry (7d)");

        let eighth = classify(&in_days(8), today());
        assert_eq!(eighth.level, ExpiryLevel::Safe);
        assert_eq!(eighth.label, "Safe (8d)");
    }

    #[test]
    fn should_mark_yesterday_as_expired() {
        let status = classify(&in_days(-1), today());

        assert_eq!(status.level, ExpiryLevel::Expired);
        assert_eq!(status.label, "Expired");
        assert_eq!(status.days, Some(-1));
    }

    #[test]
    fn should_ignore_time_of_day_in_input() {
        let late = format!("{}T23:45:00", in_days(3));
        assert_eq!(classify(&late, today()).days, Some(3));
    }

    #[test]
    fn should_display_levels_in_snake_case() {
        assert_eq!(ExpiryLevel::Near.to_string(), "near");
        assert_eq!(
            serde_json::to_string(&ExpiryLevel::Expired).unwrap(),
            "\"expired\""
        );
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(offset in -4000i64..4000, input in "\\PC{0,24}") {
            let date = in_days(offset);
            prop_assert_eq!(classify(&date, today()), classify(&date, today()));
            prop_assert_eq!(classify(&input, today()), classify(&input, today()));
        }

        #[test]
        fn valid_dates_always_report_their_offset(offset in -4000i64..4000) {
            let status = classify(&in_days(offset), today());
            prop_assert_eq!(status.days, Some(offset));
            prop_assert_ne!(status.level, ExpiryLevel::Invalid);
        }
    }
}
