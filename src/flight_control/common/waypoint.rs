use std::fmt::{Display, Formatter};

/// A geographic point in degrees latitude/longitude with an altitude in feet.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Waypoint {
    lat: f64,
    lon: f64,
    alt: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lon: f64, alt: f64) -> Self { Self { lat, lon, alt } }

    pub fn lat(&self) -> f64 { self.lat }
    pub fn lon(&self) -> f64 { self.lon }
    pub fn alt(&self) -> f64 { self.alt }

    /// Returns a copy shifted by the given latitude/longitude offsets, keeping the altitude.
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon, self.alt)
    }

    /// Returns a copy at the given altitude.
    pub fn at_alt(&self, alt: f64) -> Self { Self::new(self.lat, self.lon, alt) }

    /// Flat-earth bearing from `self` to `other` in degrees, normalized to `[0, 360)`.
    ///
    /// The bearing is `atan2(Δlon, Δlat)`, so due north is 0° and due east is 90°.
    pub fn bearing_to(&self, other: &Waypoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        normalize_heading(d_lon.atan2(d_lat).to_degrees())
    }
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.0}ft]", self.lat, self.lon, self.alt)
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_heading(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
