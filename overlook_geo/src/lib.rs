// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Geo: geographic primitives for viewport fitting.
//!
//! This crate provides the small, plain data types the rest of the Overlook
//! workspace builds on:
//!
//! - [`GeoPoint`]: a longitude/latitude pair in degrees (WGS84 implied).
//! - [`GeoBounds`]: an axis-aligned geographic box kept as its south-west and
//!   north-east corners.
//! - [`Waypoint`]: a named waypoint record as produced by routing layers.
//! - [`PointInput`] / [`PointSet`]: tagged point-list input resolved at the
//!   API boundary, validated to contain at least two points.
//!
//! It deliberately knows nothing about cameras, screens, or projections.
//! Screen-space types live in `overlook_camera` (which uses `kurbo` for
//! pixel coordinates); the fitting engine lives in `overlook_fit`.
//!
//! ## Quick start
//!
//! ```rust
//! use overlook_geo::{GeoBounds, GeoPoint, PointSet};
//!
//! // Raw `[lng, lat]` pairs are one of three accepted input shapes.
//! let set = PointSet::new(vec![[-3.19, 55.95], [-3.18, 55.96]]).unwrap();
//!
//! let bounds = GeoBounds::from_points(set.points().iter().copied()).unwrap();
//! assert_eq!(bounds.min_lng(), -3.19);
//! assert_eq!(bounds.max_lat(), 55.96);
//!
//! // Fewer than two points is rejected up front.
//! assert!(PointSet::new(vec![GeoPoint::new(0.0, 0.0)]).is_err());
//! ```
//!
//! ## Input shapes
//!
//! The original problem this workspace solves accepted raw pairs, opaque
//! camera-library coordinate objects, or waypoint records, and sniffed the
//! shape from the first element at runtime, which silently mis-normalized
//! mixed lists. [`PointInput`] replaces that with an explicit tagged enum:
//! the shape is chosen by the caller's types, and mixed lists cannot be
//! expressed at all.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod input;
mod point;

pub use bounds::GeoBounds;
pub use input::{PointInput, PointSet, TooFewPoints};
pub use point::{GeoPoint, Waypoint};
