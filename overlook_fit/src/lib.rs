// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Fit: viewport fitting for tilted and rotated map cameras.
//!
//! Interactive map cameras ship a "fit bounds" primitive that frames a
//! geographic rectangle, but it measures that rectangle as if the camera
//! were pointing straight down. Under pitch or bearing the on-screen
//! footprint of the same points is a different, larger shape, and the
//! native fit quietly under-zooms. This crate measures the footprint where
//! it actually lives, in screen space, and drives the camera until the
//! points fit the padded viewport. It models fitting as:
//!
//! - **A camera contract** ([`MapCamera`], defined in `overlook_camera`):
//!   the projection, state, and transition surface the engine needs from a
//!   host camera.
//! - **Point sets** ([`ViewFitter::new`] accepts `[lng, lat]` pairs,
//!   [`GeoPoint`]s, or waypoints): what gets framed.
//! - **Measurement** ([`BoundingBox`], [`ScreenBox`], [`GeoBox`]): the
//!   axis-aligned screen rectangle of the projected points, with its
//!   corners carried back to geography.
//! - **Planning** ([`FitPlan`], [`FitOptions`]): padding, target pitch,
//!   effective viewport, and centering offset, all resolved up front so a
//!   doomed fit fails before the camera moves.
//! - **A host-driven sequence** ([`ViewFitter::fit_screen`],
//!   [`ViewFitter::on_move_end`]): center, scale, then under pitch refine
//!   the zoom one camera transition at a time, with generation tokens
//!   ([`FitGeneration`]) so superseded fits are ignored rather than
//!   resumed.
//!
//! ## Quick Start
//!
//! On an untilted camera, fitting delegates to the camera's own bounds
//! primitive:
//!
//! ```rust
//! use overlook_fit::{FitOptions, ViewFitter};
//! use overlook_mercator::{CameraParams, MercatorCamera};
//!
//! let mut camera = MercatorCamera::new(CameraParams::default());
//! let mut fitter = ViewFitter::new(vec![[-3.19, 55.95], [-3.18, 55.96]])?;
//!
//! // Frame the points with 20 px of padding on every edge.
//! fitter.fit_aligned(&mut camera, None, &FitOptions::padded(20.0))?;
//! # Ok::<(), overlook_fit::FitError>(())
//! ```
//!
//! ## Screen-Space Fitting
//!
//! [`ViewFitter::fit_screen`] is the path that stays correct under pitch
//! and bearing. It is asynchronous by construction: the engine starts one
//! camera transition and suspends, and the host forwards every camera
//! move-end notification to [`ViewFitter::on_move_end`], which advances the
//! sequence, reports [`FitProgress::Done`] when the fit settles, or answers
//! [`FitProgress::Ignored`] for notifications that belong to a superseded
//! fit or to user-initiated moves. See [`ViewFitter`] for a worked host
//! loop.
//!
//! Refinement is bounded: a fit ends in at most [`MAX_REFINE_STEPS`] zoom
//! nudges and reports which way it ended via [`FitOutcome`].
//!
//! ## Diagnostics
//!
//! The `_with_trace` call variants ([`ViewFitter::fit_screen_with_trace`],
//! [`ViewFitter::on_move_end_with_trace`]) report lifecycle events to a
//! [`FitTrace`]. [`FitRecorder`] is a ready-made recording implementation
//! for tests and debugging, and [`ViewFitter::active_fit`] exposes a
//! snapshot of the in-flight fit.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The zoom arithmetic needs
//! `log2`, so either the `std` feature (on by default) or the `libm`
//! feature must be enabled.
//!
//! ## Features
//!
//! - `std` (enabled by default): float math via the standard library.
//! - `libm`: float math via the [`libm`] crate, for `no_std` targets.
//!
//! [`MapCamera`]: overlook_camera::MapCamera
//! [`GeoPoint`]: overlook_geo::GeoPoint
//! [`libm`]: https://crates.io/crates/libm

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("overlook_fit requires either the `std` or `libm` feature");

mod boxes;
mod error;
mod fitter;
mod plan;
mod progress;
mod trace;

#[cfg(test)]
mod testutil;

pub use boxes::{BoundingBox, GeoBox, ScreenBox};
pub use error::{DegenerateGeometry, FitError};
pub use fitter::{
    BOUNDS_LAYER_ID, BOUNDS_SOURCE_ID, MAX_REFINE_STEPS, REFINE_ZOOM_STEP, ViewFitter,
};
pub use plan::{FitOptions, FitPlan};
pub use progress::{FitDebugInfo, FitGeneration, FitOutcome, FitPhase, FitProgress};
pub use trace::{FitEvent, FitRecorder, FitTrace};
