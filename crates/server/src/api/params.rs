//! Query parameters shared by the JSON search endpoint and the HTML search form.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// `?name=&id=&genre=` as submitted by clients and the search form.
///
/// An empty `id=` (what an untouched form field sends) counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
