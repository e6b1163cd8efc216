//! `YYYY-MM-DD` wire format for date fields, via `#[serde(with = ...)]`.

use serde::{Deserialize, Deserializer, Serializer};
use time::{macros::format_description, Date};

pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = date
        .format(format_description!("[year]-[month]-[day]"))
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Date::parse(&raw, format_description!("[year]-[month]-[day]"))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::{macros::date, Date};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: Date,
    }

    #[test]
    fn serializes_as_year_month_day() {
        let json = serde_json::to_string(&Wrapper {
            value: date!(1991 - 02 - 03),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":"1991-02-03"}"#);
    }

    #[test]
    fn parses_year_month_day() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"value":"1991-02-03"}"#).unwrap();
        assert_eq!(wrapper.value, date!(1991 - 02 - 03));
    }

    #[test]
    fn rejects_other_date_shapes() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"03/02/1991"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"1991-2-3"}"#).is_err());
    }
}
