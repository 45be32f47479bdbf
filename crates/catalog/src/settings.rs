//! Key/value system settings.
//!
//! The only setting the catalog knows about today is the booking policy,
//! stored under `booking_settings` as a JSON object.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reservation rules applied to every accommodation and activity booking.
///
/// Serialized with camelCase keys, which is the shape consumers of the
/// `system_settings.value` column read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSettings {
    pub max_advance_booking_days: u32,
    pub min_advance_booking_hours: u32,
    pub cancellation_deadline_hours: u32,
    /// Local time, `HH:MM`.
    pub default_check_in_time: String,
    /// Local time, `HH:MM`.
    pub default_check_out_time: String,
    pub allow_same_day_booking: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SystemSetting {
    pub id: Uuid,
    pub key: String,
    #[sqlx(json)]
    pub value: BookingSettings,
    pub description: String,
    pub is_active: bool,
}

impl SystemSetting {
    pub fn new(key: String, value: BookingSettings, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
            value,
            description,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_settings_use_camel_case_keys() {
        let settings = BookingSettings {
            max_advance_booking_days: 365,
            min_advance_booking_hours: 24,
            cancellation_deadline_hours: 48,
            default_check_in_time: "14:00".to_string(),
            default_check_out_time: "11:00".to_string(),
            allow_same_day_booking: false,
        };

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({
                "maxAdvanceBookingDays": 365,
                "minAdvanceBookingHours": 24,
                "cancellationDeadlineHours": 48,
                "defaultCheckInTime": "14:00",
                "defaultCheckOutTime": "11:00",
                "allowSameDayBooking": false
            })
        );
    }

    #[test]
    fn test_booking_settings_reject_missing_fields() {
        let partial = json!({ "maxAdvanceBookingDays": 30 });
        assert!(serde_json::from_value::<BookingSettings>(partial).is_err());
    }
}
