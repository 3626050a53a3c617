//! Deserialization helpers for Reddit's loosely typed JSON.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value.
///
/// Reddit sends `null` for many fields that are usually strings, numbers or
/// booleans. Combined with `#[serde(default)]` this makes a field tolerate
/// both absence and `null`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "super::null_default")]
        name: String,
        #[serde(deserialize_with = "super::null_default")]
        count: i64,
    }

    #[test]
    fn null_becomes_default() {
        let sample: Sample = serde_json::from_str(r#"{"name": null, "count": null}"#).unwrap();
        assert_eq!(sample.name, "");
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn values_pass_through() {
        let sample: Sample = serde_json::from_str(r#"{"name": "rust", "count": 3}"#).unwrap();
        assert_eq!(sample.name, "rust");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn wrong_type_still_fails() {
        assert!(serde_json::from_str::<Sample>(r#"{"count": "three"}"#).is_err());
    }
}
