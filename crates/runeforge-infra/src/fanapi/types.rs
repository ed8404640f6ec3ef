//! Wire types for the Elden Ring fan API.
//!
//! Every list endpoint wraps its records in `{"success", "count", "data"}`.
//! Class stats are string-encoded numbers; weapon amounts are numbers but
//! occasionally null or strings, so both are read leniently.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use std::collections::BTreeMap;

use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::{AttributeAmount, ScalingRelation, Weapon};

/// Response envelope for list endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn default_success() -> bool {
    true
}

/// A catalog payload: either the API envelope or a bare list of records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiPayload<T> {
    Envelope(ApiEnvelope<T>),
    List(Vec<T>),
}

/// Decode a list payload into its records.
pub fn parse_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, CatalogError> {
    let payload: ApiPayload<T> = serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::Decode(format!("invalid catalog payload: {e}")))?;

    match payload {
        ApiPayload::Envelope(envelope) if !envelope.success => Err(CatalogError::Decode(
            "catalog reported success = false".to_string(),
        )),
        ApiPayload::Envelope(envelope) => {
            if let Some(count) = envelope.count {
                tracing::debug!(count, received = envelope.data.len(), "Decoded catalog envelope");
            }
            Ok(envelope.data)
        }
        ApiPayload::List(records) => Ok(records),
    }
}

/// A class record from `/classes`.
#[derive(Debug, Deserialize)]
pub struct ApiClass {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_stat_map")]
    pub stats: BTreeMap<String, String>,
}

impl From<ApiClass> for ClassEntry {
    fn from(class: ApiClass) -> Self {
        ClassEntry {
            name: class.name,
            description: class.description,
            stats: class.stats,
        }
    }
}

/// A weapon record from `/weapons`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWeapon {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attack: Vec<ApiAmount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defence: Vec<ApiAmount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_attributes: Vec<ApiAmount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scales_with: Vec<ApiScaling>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAmount {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ApiScaling {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scaling: String,
}

impl From<ApiWeapon> for Weapon {
    fn from(weapon: ApiWeapon) -> Self {
        let amounts = |list: Vec<ApiAmount>| {
            list.into_iter()
                .map(|a| AttributeAmount {
                    name: a.name,
                    amount: a.amount,
                })
                .collect()
        };

        Weapon {
            name: weapon.name,
            description: weapon.description,
            category: weapon.category,
            attack: amounts(weapon.attack),
            defence: amounts(weapon.defence),
            required_attributes: amounts(weapon.required_attributes),
            scales_with: weapon
                .scales_with
                .into_iter()
                .map(|s| ScalingRelation {
                    stat: s.name,
                    grade: s.scaling,
                })
                .collect(),
        }
    }
}

/// A JSON scalar that should be a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Stat maps keep values as text; the profile builder does the coercion.
fn lenient_stat_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<Scalar>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.map(Scalar::into_text).unwrap_or_default()))
        .collect())
}

/// Numbers pass through unchanged and numeric strings parse. Null or any
/// other text is absent.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Scalar::Int(n)) => Some(n as f64),
        Some(Scalar::Float(n)) => Some(n),
        Some(Scalar::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        None => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
