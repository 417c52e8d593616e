//! Custom serde helpers for the Amap API, which encodes numbers as strings.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, de::Error};

/// Deserialize an integer from its decimal string representation.
pub mod u64_from_text {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = Cow::<'de, str>::deserialize(deserializer)?;
        text.parse()
            .map_err(|_| D::Error::custom(format!("invalid number `{text}`")))
    }
}

/// Deserialize an optional integer, treating an empty string as absent.
///
/// Amap omits the field, sends `""`, or even sends `[]` when there is no value.
pub mod option_u64_from_text {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Other(_)) => Ok(None),
            Some(Raw::Text(text)) if text.is_empty() => Ok(None),
            Some(Raw::Text(text)) => text
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid number `{text}`"))),
        }
    }
}

/// Deserialize a string, mapping anything else to the empty string.
///
/// Amap sends `[]` instead of an absent or empty `address`.
pub mod lenient_text {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Text(text)) => Ok(text),
            _ => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::prelude::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(with = "super::u64_from_text")]
        distance: u64,

        #[serde(default, with = "super::option_u64_from_text")]
        traffic_lights: Option<u64>,
    }

    #[test]
    fn number_from_text_ok() -> Result {
        let wrapper: Wrapper = serde_json::from_str(r#"{"distance": "12345"}"#)?;
        assert_eq!(wrapper.distance, 12345);
        assert_eq!(wrapper.traffic_lights, None);
        Ok(())
    }

    #[test]
    fn empty_text_is_none() -> Result {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"distance": "1", "traffic_lights": ""}"#)?;
        assert_eq!(wrapper.traffic_lights, None);
        Ok(())
    }

    #[test]
    fn empty_array_is_none() -> Result {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"distance": "1", "traffic_lights": []}"#)?;
        assert_eq!(wrapper.traffic_lights, None);
        Ok(())
    }
}
