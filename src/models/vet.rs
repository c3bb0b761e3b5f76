use serde::{Deserialize, Serialize};

/// A veterinary clinic as returned by the nearby lookup.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct VetRecord {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: f64,
    pub total_ratings: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
