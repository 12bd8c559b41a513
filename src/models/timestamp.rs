//! Course timestamps travel as `yyyy-MM-ddTHH:mm:ss` with no offset and no
//! fractional seconds.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current local time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "crate::models::timestamp", default)]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_serializes_without_fraction() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 250)
            .unwrap();
        let json = serde_json::to_string(&Stamped { at: Some(at) }).unwrap();
        assert_eq!(json, r#"{"at":"2024-01-01T10:00:00"}"#);
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(parsed.at, None);
        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.at, None);
    }

    #[test]
    fn test_rejects_other_formats() {
        let parsed = serde_json::from_str::<Stamped>(r#"{"at":"01/01/2024 10:00"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(now().nanosecond(), 0);
    }
}
