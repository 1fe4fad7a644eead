//! Fixed-position sensor model.

use serde::{Deserialize, Serialize};

/// A fixed sensor site with a circular detection footprint.
///
/// All sites in the default field share one range, but the type carries a
/// per-site range so mixed fields stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "lon")]
    pub lon_deg: f64,
    #[serde(rename = "lat")]
    pub lat_deg: f64,
    pub range_km: f64,
}

impl Sensor {
    pub fn new(lon_deg: f64, lat_deg: f64, range_km: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            range_km,
        }
    }
}
