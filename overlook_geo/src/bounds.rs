// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::point::GeoPoint;

/// An axis-aligned geographic box, kept as its south-west and north-east
/// corners.
///
/// The box is the component-wise extrema of whatever points produced it.
/// A box built from a single point, or from collinear points, has zero area
/// on one or both axes; that is a valid state, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    sw: GeoPoint,
    ne: GeoPoint,
}

impl GeoBounds {
    /// Creates a box from two corners, normalizing so that `sw` holds the
    /// minima and `ne` the maxima on both axes.
    #[must_use]
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            sw: GeoPoint::new(a.lng.min(b.lng), a.lat.min(b.lat)),
            ne: GeoPoint::new(a.lng.max(b.lng), a.lat.max(b.lat)),
        }
    }

    /// Reduces an iterator of points to their component-wise extrema.
    ///
    /// Returns `None` for an empty iterator.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self { sw: first, ne: first };
        for p in points {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grows the box to include `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.sw.lng = self.sw.lng.min(p.lng);
        self.sw.lat = self.sw.lat.min(p.lat);
        self.ne.lng = self.ne.lng.max(p.lng);
        self.ne.lat = self.ne.lat.max(p.lat);
    }

    /// The south-west (minimum) corner.
    #[must_use]
    pub const fn south_west(&self) -> GeoPoint {
        self.sw
    }

    /// The north-east (maximum) corner.
    #[must_use]
    pub const fn north_east(&self) -> GeoPoint {
        self.ne
    }

    /// The north-west corner.
    #[must_use]
    pub const fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.sw.lng, self.ne.lat)
    }

    /// The south-east corner.
    #[must_use]
    pub const fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.ne.lng, self.sw.lat)
    }

    /// Minimum longitude in degrees.
    #[must_use]
    pub const fn min_lng(&self) -> f64 {
        self.sw.lng
    }

    /// Maximum longitude in degrees.
    #[must_use]
    pub const fn max_lng(&self) -> f64 {
        self.ne.lng
    }

    /// Minimum latitude in degrees.
    #[must_use]
    pub const fn min_lat(&self) -> f64 {
        self.sw.lat
    }

    /// Maximum latitude in degrees.
    #[must_use]
    pub const fn max_lat(&self) -> f64 {
        self.ne.lat
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.ne.lng - self.sw.lng
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ne.lat - self.sw.lat
    }

    /// The box's midpoint.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.sw.lng + self.ne.lng) * 0.5,
            (self.sw.lat + self.ne.lat) * 0.5,
        )
    }

    /// Whether `p` lies inside the box (boundary inclusive).
    #[must_use]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lng >= self.sw.lng && p.lng <= self.ne.lng && p.lat >= self.sw.lat && p.lat <= self.ne.lat
    }
}
