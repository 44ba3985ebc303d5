// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Mercator: an animated Web Mercator camera.
//!
//! This crate is the host-side counterpart to the fitting engine: a complete
//! implementation of the `overlook_camera` contract with a real perspective
//! projection. It provides:
//!
//! - **Projection** ([`Projector`]): Web Mercator to screen and back, exact
//!   under any pitch and bearing.
//! - **An animated camera** ([`MercatorCamera`]): eased transitions driven
//!   by explicit [`tick`]/[`settle`] calls, move-end events queued for the
//!   host to forward, a native bounds fit, and a line-overlay registry.
//!
//! It exists to integration-test and demonstrate the fitting engine, and as
//! a worked example for binding a production map camera.
//!
//! ## Quick Start
//!
//! ```rust
//! use overlook_camera::{CameraEvent, EaseTo, MapCamera};
//! use overlook_geo::GeoPoint;
//! use overlook_mercator::{CameraParams, MercatorCamera};
//!
//! let mut camera = MercatorCamera::new(CameraParams::default());
//! let id = camera.ease_to(&EaseTo {
//!     center: Some(GeoPoint::new(-3.188, 55.953)),
//!     zoom: Some(12.0),
//!     ..EaseTo::default()
//! });
//!
//! // Drive time forward; the camera announces when the transition ends.
//! camera.tick(0.25);
//! camera.tick(0.25);
//! assert_eq!(camera.drain_events(), vec![CameraEvent::MoveEnd(id)]);
//! assert_eq!(camera.zoom(), 12.0);
//! ```
//!
//! [`tick`]: MercatorCamera::tick
//! [`settle`]: MercatorCamera::settle

mod camera;
mod projection;

pub use camera::{CameraParams, MAX_PITCH, MercatorCamera};
pub use projection::{MAX_LATITUDE, Projector, TILE_SIZE};
