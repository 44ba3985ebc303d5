// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A geographic position: longitude and latitude in degrees, WGS84 implied.
///
/// Longitude grows eastward, latitude northward. The type performs no
/// wrapping or clamping; callers that need antimeridian handling do it at a
/// higher layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude in degrees.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns the point as a `[lng, lat]` pair.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

/// A named waypoint record as produced by routing layers.
///
/// Only [`longitude`](Self::longitude) and [`latitude`](Self::latitude)
/// participate in viewport fitting; the pin fields ride along so hosts can
/// pass their waypoint lists in unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Optional label shown on the waypoint's pin.
    pub pin_label: Option<String>,
    /// Whether the host should render a pin for this waypoint.
    pub show_pin: bool,
}

impl Waypoint {
    /// Creates a waypoint with no pin label and the pin shown.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            pin_label: None,
            show_pin: true,
        }
    }

    /// The waypoint's position as a [`GeoPoint`].
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

impl From<&Waypoint> for GeoPoint {
    fn from(waypoint: &Waypoint) -> Self {
        waypoint.position()
    }
}
