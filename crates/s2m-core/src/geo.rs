//! Geographic coordinate type and great-circle distance.
//!
//! Link lengths in the MatPlanWDM document are whole kilometres computed with
//! the plain haversine formula on a spherical Earth.  Planning tools compare
//! these numbers against each other, so the formula is fixed: `asin` of the
//! square root, not the `atan2` variant and not an ellipsoidal model.

/// Mean Earth radius used for every link length, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Haversine great-circle distance in kilometres.
///
/// All four arguments are decimal degrees.  Identical points give exactly
/// `0.0`; antipodal points give half the circumference.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let start_lat = lat1.to_radians();
    let end_lat = lat2.to_radians();
    let d_lat = end_lat - start_lat;
    let d_lon = lon2.to_radians() - lon1.to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + start_lat.cos() * end_lat.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in kilometres.  See [`haversine_km`].
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// Distance truncated toward zero, as written into `linkLengthInKm`.
    #[inline]
    pub fn whole_km_to(self, other: GeoPoint) -> u32 {
        self.distance_km(other) as u32
    }
}
