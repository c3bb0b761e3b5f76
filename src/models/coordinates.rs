use serde::Serialize;
use crate::errors::{Result, VetsError};

/// A latitude/longitude pair, checked to be finite and within geographic range.
#[derive(Clone, Copy, Serialize, Debug, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(VetsError::InvalidCoordinates { latitude, longitude });
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `lat` and `lng` query parameters, in that order.
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("lat".to_string(), self.latitude.to_string()),
            ("lng".to_string(), self.longitude.to_string()),
        ]
    }
}
