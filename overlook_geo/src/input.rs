// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged point-list input and the validated point set.

use alloc::vec::Vec;
use core::fmt;

use crate::point::{GeoPoint, Waypoint};

/// Error returned when a point list holds fewer than two points.
///
/// A bounding box needs at least two points to be meaningful; everything in
/// the fitting engine assumes this invariant, so it is enforced once, at the
/// API boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooFewPoints {
    /// How many points were supplied.
    pub got: usize,
}

impl fmt::Display for TooFewPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at least 2 points are required to build a bounding box, got {}",
            self.got
        )
    }
}

impl core::error::Error for TooFewPoints {}

/// Point-list input in one of the three accepted shapes.
///
/// The shape is carried by the variant, not sniffed from element contents,
/// so a mixed-shape list cannot be expressed. All variants normalize to an
/// order-preserving sequence of [`GeoPoint`]s of the same length.
#[derive(Clone, Debug, PartialEq)]
pub enum PointInput {
    /// Raw `[lng, lat]` pairs.
    LngLat(Vec<[f64; 2]>),
    /// Coordinate objects.
    Points(Vec<GeoPoint>),
    /// Named waypoint records.
    Waypoints(Vec<Waypoint>),
}

impl PointInput {
    /// Number of points in the list, regardless of shape.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::LngLat(v) => v.len(),
            Self::Points(v) => v.len(),
            Self::Waypoints(v) => v.len(),
        }
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the input into a same-length, order-preserving sequence of
    /// canonical points.
    #[must_use]
    pub fn normalize(self) -> Vec<GeoPoint> {
        match self {
            Self::LngLat(v) => v.into_iter().map(GeoPoint::from).collect(),
            Self::Points(v) => v,
            Self::Waypoints(v) => v.iter().map(Waypoint::position).collect(),
        }
    }
}

impl From<Vec<[f64; 2]>> for PointInput {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::LngLat(points)
    }
}

impl From<&[[f64; 2]]> for PointInput {
    fn from(points: &[[f64; 2]]) -> Self {
        Self::LngLat(points.to_vec())
    }
}

impl From<Vec<GeoPoint>> for PointInput {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::Points(points)
    }
}

impl From<&[GeoPoint]> for PointInput {
    fn from(points: &[GeoPoint]) -> Self {
        Self::Points(points.to_vec())
    }
}

impl From<Vec<Waypoint>> for PointInput {
    fn from(points: Vec<Waypoint>) -> Self {
        Self::Waypoints(points)
    }
}

impl From<&[Waypoint]> for PointInput {
    fn from(points: &[Waypoint]) -> Self {
        Self::Waypoints(points.to_vec())
    }
}

impl<const N: usize> From<[[f64; 2]; N]> for PointInput {
    fn from(points: [[f64; 2]; N]) -> Self {
        Self::LngLat(points.to_vec())
    }
}

impl<const N: usize> From<[GeoPoint; N]> for PointInput {
    fn from(points: [GeoPoint; N]) -> Self {
        Self::Points(points.to_vec())
    }
}

/// A validated, canonical point sequence: at least two points, in caller
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<GeoPoint>,
}

impl PointSet {
    /// Normalizes `input` and validates that it holds at least two points.
    pub fn new(input: impl Into<PointInput>) -> Result<Self, TooFewPoints> {
        let points = input.into().normalize();
        if points.len() < 2 {
            return Err(TooFewPoints { got: points.len() });
        }
        Ok(Self { points })
    }

    /// The canonical points, in input order.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points in the set (always ≥ 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API completeness alongside [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces the stored points with a new validated sequence.
    ///
    /// On error the stored points are left unchanged.
    pub fn replace(&mut self, input: impl Into<PointInput>) -> Result<(), TooFewPoints> {
        let replacement = Self::new(input)?;
        *self = replacement;
        Ok(())
    }
}
