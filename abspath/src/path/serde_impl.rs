//! Serde support, enabled by the `serde` feature.
//!
//! An [`AbsolutePath`] serializes as a string. Deserializing validates the
//! string with [`AbsolutePath::new`], so relative input is rejected.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::fmt;

use crate::path::types::AbsolutePath;

impl Serialize for AbsolutePath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self
            .as_path()
            .to_str()
            .ok_or_else(|| ser::Error::custom("path is not valid UTF-8"))?;
        serializer.serialize_str(s)
    }
}

struct AbsolutePathVisitor;

impl Visitor<'_> for AbsolutePathVisitor {
    type Value = AbsolutePath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an absolute path string")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        AbsolutePath::new(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for AbsolutePath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AbsolutePathVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq)]
    struct Settings {
        cache_dir: AbsolutePath,
    }

    #[test]
    #[cfg(unix)]
    fn test_serialize_as_string() {
        let path = AbsolutePath::new("/var/cache/app").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/var/cache/app\"");
    }

    #[test]
    #[cfg(unix)]
    fn test_deserialize_cleans_path() {
        let settings: Settings =
            serde_json::from_str(r#"{"cache_dir": "/var//cache/./app/"}"#).unwrap();
        assert_eq!(settings.cache_dir, "/var/cache/app");
    }

    #[test]
    fn test_deserialize_rejects_relative() {
        let err = serde_json::from_str::<Settings>(r#"{"cache_dir": "cache/app"}"#).unwrap_err();
        assert!(err.to_string().contains("not an absolute path"));
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            cache_dir: AbsolutePath::current_dir().unwrap(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
    }
}
