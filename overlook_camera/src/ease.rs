// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased transitions and their completion notifications.

use kurbo::Vec2;
use overlook_geo::GeoPoint;

/// Identifies one camera transition from start to move-end.
///
/// Every call to [`MapCamera::ease_to`] returns a fresh id, and the move-end
/// notification for that transition carries the same id. Code waiting on a
/// specific transition compares ids and ignores notifications that belong to
/// an older, superseded move.
///
/// [`MapCamera::ease_to`]: crate::MapCamera::ease_to
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TransitionId(pub u64);

/// Target state for an eased camera transition.
///
/// Every field is optional; unset fields keep their current value. The
/// default value requests no change at all, which cameras are free to treat
/// as an immediately-completing no-op move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EaseTo {
    /// Geographic position to move the padded center to.
    pub center: Option<GeoPoint>,
    /// Target zoom level.
    pub zoom: Option<f64>,
    /// Target pitch in degrees.
    pub pitch: Option<f64>,
    /// Target bearing in degrees.
    pub bearing: Option<f64>,
    /// Screen-space offset of the center from the container center, in
    /// logical pixels. Positive `x` shifts the center right, positive `y`
    /// shifts it down.
    pub offset: Option<Vec2>,
    /// Transition duration in seconds. Cameras fall back to their own
    /// default when unset.
    pub duration: Option<f64>,
}

impl EaseTo {
    /// A transition that only moves the center.
    #[must_use]
    pub fn center(center: GeoPoint) -> Self {
        Self {
            center: Some(center),
            ..Self::default()
        }
    }

    /// A transition that only changes the zoom level.
    #[must_use]
    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Self::default()
        }
    }
}

/// A notification surfaced by a camera once a transition settles.
///
/// Hosts poll or receive these from their camera and forward them to the
/// code that started the transition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CameraEvent {
    /// The transition with the given id has finished (or was interrupted).
    MoveEnd(TransitionId),
}
