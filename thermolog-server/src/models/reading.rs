//! Temperature reading types
//!
//! `TemperatureReading` is the persisted row, `TemperatureReadingPayload`
//! is what the device posts, and `NewReading` is the resolved insert.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Persisted reading, as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub id: i32,
    pub temp_co: f64,
    pub temp_room: f64,
    pub timestamp: Option<i64>,
}

/// Inbound reading posted by a device
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReadingPayload {
    pub temp_co: f64,
    pub temp_room: f64,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl TemperatureReadingPayload {
    /// Decode a request body.
    ///
    /// Unknown fields are ignored. `tempCo` and `tempRoom` are required
    /// numbers; `timestamp` is an optional integer.
    ///
    /// # Example
    /// ```
    /// use thermolog_server::models::TemperatureReadingPayload;
    ///
    /// let payload = TemperatureReadingPayload::parse(br#"{"tempCo":25.5,"tempRoom":22.0}"#).unwrap();
    /// assert_eq!(payload.timestamp, None);
    /// assert!(TemperatureReadingPayload::parse(br#"{"tempCo":25.5}"#).is_err());
    /// ```
    pub fn parse(body: &[u8]) -> Result<Self, ValidationError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Resolve into an insertable reading, stamping `now` when the device
    /// sent no timestamp.
    pub fn resolve(self, now: i64) -> NewReading {
        NewReading {
            temp_co: self.temp_co,
            temp_room: self.temp_room,
            timestamp: self.timestamp.unwrap_or(now),
        }
    }
}

/// Reading ready for insertion; every column is populated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReading {
    pub temp_co: f64,
    pub temp_room: f64,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let payload = TemperatureReadingPayload::parse(
            br#"{"tempCo": 25.5, "tempRoom": 22.0, "timestamp": 1761388101}"#,
        )
        .unwrap();

        assert_eq!(payload.temp_co, 25.5);
        assert_eq!(payload.temp_room, 22.0);
        assert_eq!(payload.timestamp, Some(1761388101));
    }

    #[test]
    fn ignores_unknown_fields() {
        let payload =
            TemperatureReadingPayload::parse(br#"{"tempCo": 1, "tempRoom": 2, "sensor": "esp"}"#)
                .unwrap();
        assert_eq!(payload.temp_co, 1.0);
        assert_eq!(payload.timestamp, None);
    }

    #[test]
    fn null_timestamp_is_absent() {
        let payload =
            TemperatureReadingPayload::parse(br#"{"tempCo": 1, "tempRoom": 2, "timestamp": null}"#)
                .unwrap();
        assert_eq!(payload.timestamp, None);
    }

    #[test]
    fn rejects_bad_bodies() {
        for body in [
            &b"not json"[..],
            br#"{"tempRoom": 22.0}"#,
            br#"{"tempCo": 25.5}"#,
            br#"{"tempCo": "hot", "tempRoom": 22.0}"#,
            br#"{"tempCo": null, "tempRoom": 22.0}"#,
            br#"{"tempCo": 1, "tempRoom": 2, "timestamp": 1.5}"#,
            b"",
        ] {
            assert!(
                TemperatureReadingPayload::parse(body).is_err(),
                "accepted {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn resolve_keeps_given_timestamp() {
        let payload = TemperatureReadingPayload {
            temp_co: 1.0,
            temp_room: 2.0,
            timestamp: Some(42),
        };
        assert_eq!(payload.resolve(1_000).timestamp, 42);
    }

    #[test]
    fn resolve_defaults_missing_timestamp() {
        let payload = TemperatureReadingPayload {
            temp_co: 1.0,
            temp_room: 2.0,
            timestamp: None,
        };
        assert_eq!(payload.resolve(1_000).timestamp, 1_000);
    }

    #[test]
    fn serializes_camel_case_with_null_timestamp() {
        let reading = TemperatureReading {
            id: 7,
            temp_co: 25.5,
            temp_room: 22.0,
            timestamp: None,
        };
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "tempCo": 25.5, "tempRoom": 22.0, "timestamp": null})
        );
    }
}
