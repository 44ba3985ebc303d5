// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera capability traits for Overlook.
//!
//! This crate defines the seam between the fitting engine in
//! `overlook_fit` and whatever actually renders the map. The engine never
//! owns a camera; it borrows one through [`MapCamera`] for the duration of a
//! single call, reads the projection state it needs, and requests transitions.
//!
//! The contract is host driven. [`MapCamera::ease_to`] does not block until
//! the transition finishes; it returns a [`TransitionId`] immediately and the
//! host later reports completion by forwarding a move-end notification
//! (tagged with that same id) back to whoever asked. Everything the engine
//! does between those two moments is pure computation on the camera state it
//! can observe through this trait.
//!
//! Screen space is measured in logical pixels with the origin at the top-left
//! corner of the container and `y` growing downward. Geographic positions use
//! [`GeoPoint`] (longitude, latitude in degrees).
//!
//! # Quick start
//!
//! ```
//! use overlook_camera::{EaseTo, PaddingInput};
//! use overlook_geo::GeoPoint;
//!
//! // Request a recentering move. Unset fields keep their current value.
//! let ease = EaseTo {
//!     center: Some(GeoPoint::new(11.3, 44.5)),
//!     pitch: Some(40.0),
//!     ..EaseTo::default()
//! };
//! assert!(ease.zoom.is_none());
//!
//! // Padding accepts a single value for all edges or a per-edge struct.
//! let padding = PaddingInput::from(24.0).resolve();
//! assert_eq!(padding.left, 24.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ease;
mod overlay;
mod padding;

pub use ease::{CameraEvent, EaseTo, TransitionId};
pub use overlay::{CameraError, OverlayStyle};
pub use padding::{Padding, PaddingInput};

use kurbo::{Point, Size};
use overlook_geo::{GeoBounds, GeoPoint};

/// Options forwarded to the camera's own [`fit_bounds`] implementation.
///
/// The padding here is always fully resolved; callers that accept a
/// [`PaddingInput`] convert it (and fill in the camera's current padding when
/// none was given) before reaching this type.
///
/// [`fit_bounds`]: MapCamera::fit_bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitBoundsOptions {
    /// Space to leave free around the fitted bounds, in logical pixels.
    pub padding: Padding,
}

/// The camera capabilities the fitting engine requires of its host.
///
/// Implementations are expected to be interactive map cameras, but anything
/// that can project geographic positions to screen pixels and run eased
/// transitions qualifies. `overlook_mercator` provides a headless reference
/// implementation used throughout the test suites.
///
/// # Transition lifecycle
///
/// [`ease_to`] and [`fit_bounds`] start a transition and return (or record)
/// a fresh [`TransitionId`]. When a transition finishes, the camera must
/// surface a move-end notification carrying that id, and the host forwards
/// it to the code that requested the move. [`stop`] interrupts the in-flight
/// transition, freezing the camera where it is, and still emits the move-end
/// notification for the interrupted id; listeners that have moved on
/// recognize the stale id and ignore it.
///
/// [`ease_to`]: MapCamera::ease_to
/// [`fit_bounds`]: MapCamera::fit_bounds
/// [`stop`]: MapCamera::stop
pub trait MapCamera {
    /// Projects a geographic position to container-relative screen pixels.
    fn project(&self, point: GeoPoint) -> Point;

    /// Maps a container-relative screen position back to geography.
    ///
    /// This is the inverse of [`project`] for on-screen points under the
    /// current camera state: `unproject(project(p))` returns `p` up to
    /// floating-point error.
    ///
    /// [`project`]: MapCamera::project
    fn unproject(&self, point: Point) -> GeoPoint;

    /// The current zoom level.
    fn zoom(&self) -> f64;

    /// The current pitch in degrees. `0.0` looks straight down.
    fn pitch(&self) -> f64;

    /// The current padding reserved around the container edges.
    fn padding(&self) -> Padding;

    /// The size of the map container in logical pixels.
    fn container_size(&self) -> Size;

    /// Interrupts any in-flight transition, freezing the camera in place.
    ///
    /// The interrupted transition still reports move-end with its own id.
    fn stop(&mut self);

    /// Starts an eased transition toward the given camera state.
    ///
    /// Returns the id that will tag the transition's move-end notification.
    fn ease_to(&mut self, ease: &EaseTo) -> TransitionId;

    /// Fits the camera to the given bounds using its native fitting logic.
    ///
    /// This is the camera's own, pitch-unaware fit; the engine calls it for
    /// axis-aligned fits and builds on top of it for everything else.
    fn fit_bounds(&mut self, bounds: &GeoBounds, options: &FitBoundsOptions);

    /// Registers a line source holding the given ring of positions.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DuplicateOverlayId`] if a source with this id
    /// already exists.
    fn add_line_source(&mut self, id: &str, ring: &[GeoPoint]) -> Result<(), CameraError>;

    /// Adds a line layer drawing the named source with the given style.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DuplicateOverlayId`] if a layer with this id
    /// already exists, or [`CameraError::MissingOverlaySource`] if the named
    /// source has not been registered.
    fn add_line_layer(
        &mut self,
        id: &str,
        source: &str,
        style: &OverlayStyle,
    ) -> Result<(), CameraError>;
}
