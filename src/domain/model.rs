use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Partner ids arrive as either numbers or strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartnerId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnerId::Number(n) => write!(f, "{}", n),
            PartnerId::Text(s) => f.write_str(s),
        }
    }
}

/// A discount-offering business, as returned by the partners API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub discount: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Partner {
    /// Logo reference, if one is present and non-empty.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }

    /// Glyph shown in place of a missing logo: the first character of the name.
    pub fn fallback_glyph(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Free-text fields sent as `null` read as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses the body of the "get partners" call: a bare list, or a list
/// wrapped under `partners` / `data`.
///
/// The shape is picked before the records are decoded, so a bad record
/// reports its own error.
pub fn parse_partners(body: &[u8]) -> serde_json::Result<Vec<Partner>> {
    match serde_json::from_slice::<serde_json::Value>(body)? {
        list @ serde_json::Value::Array(_) => serde_json::from_value(list),
        serde_json::Value::Object(mut object) => {
            match object.remove("partners").or_else(|| object.remove("data")) {
                Some(list) => serde_json::from_value(list),
                None => Err(serde_json::Error::custom(
                    "expected a partner list or an object with `partners` or `data`",
                )),
            }
        }
        other => Err(serde_json::Error::custom(format!(
            "expected a partner list, found {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryBucket {
    All,
    Healthcare,
    Shopping,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub bucket: CategoryBucket,
    pub name: &'static str,
    pub count: usize,
    pub color: &'static str,
}
