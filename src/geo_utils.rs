//! Geographic utilities: great-circle distance.
//!
//! Distances use the haversine formula on a sphere of radius 6371 km. The
//! spherical approximation is accurate to well under 0.5% over trail-scale
//! distances, and the exact formula (radius included) is kept stable so
//! results stay reproducible across versions.

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two lat/lng points in kilometers.
///
/// # Example
/// ```
/// use trail_pacer::geo_utils::haversine_km;
///
/// // London to Paris, roughly 344 km
/// let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
/// assert!((d - 344.0).abs() < 2.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
