//! Geographic coordinate type and placement/distance primitives.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Interaction gating compares
//! haversine distances against thresholds at sub-metre resolution; `f32`
//! bottoms out around a metre at city latitudes, so double precision it is.
//!
//! One Earth radius constant serves both directions of the math: the
//! forward metre→degree offset used for placement and the inverse haversine
//! used for distance.  A point placed `r` metres out therefore also
//! measures `r` metres back, up to the small-offset approximation error
//! (sub-centimetre at gameplay radii).

use crate::SessionRng;

/// Mean Earth radius in metres, shared by [`GeoPoint::offset`] and
/// [`GeoPoint::distance_m`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Lower clamp for `cos(latitude)` in the forward offset.  Keeps the
/// longitude scale factor finite at the poles; placement within ~1 m of a
/// pole produces finite but meaningless longitudes.  Gameplay there is an
/// accepted limitation, not a supported case.
const MIN_COS_LAT: f64 = 1e-6;

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Invariant: `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]` for all points
/// produced by upstream position fixes.  Points derived via
/// [`offset`](GeoPoint::offset) at extreme latitudes may leave the
/// longitude range; see `MIN_COS_LAT`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, zero iff both points are identical, and monotone in
    /// angular separation.  Total for all finite inputs.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` iff `other` lies within `threshold_m` metres (inclusive).
    ///
    /// The inclusive comparison is load-bearing: a target at exactly the
    /// threshold distance is interactable.
    #[inline]
    pub fn is_within(self, other: GeoPoint, threshold_m: f64) -> bool {
        self.distance_m(other) <= threshold_m
    }

    /// Initial bearing from `self` toward `other`, radians clockwise from
    /// north in `(-π, π]`.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        y.atan2(x)
    }

    /// The point `distance_m` metres from `self` along `bearing_rad`
    /// (radians clockwise from north).
    ///
    /// Planar small-offset model: metres convert to latitude degrees via
    /// [`EARTH_RADIUS_M`], and the longitude component is stretched by
    /// `1 / cos(lat)` to correct for meridian convergence.  Accurate to
    /// well under 1 % at the sub-kilometre offsets used for placement.
    pub fn offset(self, bearing_rad: f64, distance_m: f64) -> GeoPoint {
        let dist_deg = (distance_m / EARTH_RADIUS_M).to_degrees();

        let lat_offset = dist_deg * bearing_rad.cos();
        let cos_lat = self.lat.to_radians().cos().max(MIN_COS_LAT);
        let lon_offset = dist_deg * bearing_rad.sin() / cos_lat;

        GeoPoint::new(self.lat + lat_offset, self.lon + lon_offset)
    }

    /// A random point whose distance from `self` is at most `radius_m`,
    /// uniformly distributed by area over the disc.
    ///
    /// The radial sample is `sqrt(u) · radius_m` — without the square root
    /// points would cluster toward the centre.
    #[inline]
    pub fn random_within(self, radius_m: f64, rng: &mut SessionRng) -> GeoPoint {
        self.random_in_band(0.0, radius_m, rng)
    }

    /// A random point whose distance from `self` lies in `[min_m, max_m]`,
    /// uniformly distributed by area over the annulus.
    ///
    /// Caller contract: `0 <= min_m <= max_m`, both finite.
    pub fn random_in_band(self, min_m: f64, max_m: f64, rng: &mut SessionRng) -> GeoPoint {
        debug_assert!(min_m >= 0.0 && min_m <= max_m && max_m.is_finite());
        if max_m <= 0.0 {
            return self;
        }

        let bearing = rng.gen_range(0.0..std::f64::consts::TAU);

        // Area-uniform radial sample over the annulus: interpolate u over
        // [k², 1] in squared-radius space, then take the square root.
        let k = min_m / max_m;
        let u: f64 = rng.random();
        let r = max_m * (k * k + u * (1.0 - k * k)).sqrt();

        self.offset(bearing, r)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── UserLocation ──────────────────────────────────────────────────────────────

/// A positioning fix: where the player is and how sure the device is.
///
/// Produced by the platform's positioning layer, consumed by the session.
/// "No fix yet" is represented upstream as absence (`Option<UserLocation>`),
/// never as a sentinel value here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserLocation {
    pub point: GeoPoint,
    /// Reported GPS accuracy radius in metres.
    pub accuracy_m: f64,
}

impl UserLocation {
    #[inline]
    pub fn new(lat: f64, lon: f64, accuracy_m: f64) -> Self {
        Self { point: GeoPoint::new(lat, lon), accuracy_m }
    }
}

impl std::fmt::Display for UserLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ±{:.0} m", self.point, self.accuracy_m)
    }
}
