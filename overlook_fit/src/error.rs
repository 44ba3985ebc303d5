// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine error types.

use core::fmt;

use overlook_camera::CameraError;
use overlook_geo::TooFewPoints;

/// A numeric degeneracy that makes the fit arithmetic meaningless.
///
/// The fitting procedure divides by the padded viewport extents and by the
/// measured screen extents of the point set. When those collapse to zero (or
/// are not finite to begin with), the derived zoom would be non-finite and
/// would poison the camera state, so the fit reports the degeneracy instead
/// of easing to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DegenerateGeometry {
    /// The container minus padding had no usable area.
    ///
    /// Detected while planning, before the camera is touched.
    EmptyViewport {
        /// Container width minus horizontal padding, in pixels.
        effective_width: f64,
        /// Container height minus vertical padding, in pixels.
        effective_height: f64,
    },
    /// The aspect comparison chose a non-finite or non-positive scale.
    ///
    /// Happens when the measured screen box has zero extent on the chosen
    /// axis. The camera keeps the state it had when the degeneracy was
    /// detected.
    UnusableScale {
        /// The scale factor that was chosen.
        scale: f64,
    },
    /// Re-projecting the box's bottom edge produced a non-finite span.
    ///
    /// Only reachable mid-refinement, when the camera was mutated externally
    /// into a state the box no longer projects under. The camera keeps its
    /// current state.
    UnusableSpan {
        /// The measured horizontal span, in pixels.
        span: f64,
    },
}

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport {
                effective_width,
                effective_height,
            } => write!(
                f,
                "padded viewport has no usable area ({effective_width}x{effective_height} px)"
            ),
            Self::UnusableScale { scale } => {
                write!(f, "fit scale {scale} is not a positive finite number")
            }
            Self::UnusableSpan { span } => {
                write!(f, "projected bottom-edge span {span} is not finite")
            }
        }
    }
}

impl core::error::Error for DegenerateGeometry {}

/// Errors reported by the fitting engine.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    /// Fewer than two points were supplied.
    TooFewPoints(TooFewPoints),
    /// The viewport or the measured bounds degenerated to zero area.
    DegenerateGeometry(DegenerateGeometry),
    /// The camera rejected a request (currently: overlay registration).
    Camera(CameraError),
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints(e) => e.fmt(f),
            Self::DegenerateGeometry(e) => e.fmt(f),
            Self::Camera(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for FitError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::TooFewPoints(e) => Some(e),
            Self::DegenerateGeometry(e) => Some(e),
            Self::Camera(e) => Some(e),
        }
    }
}

impl From<TooFewPoints> for FitError {
    fn from(e: TooFewPoints) -> Self {
        Self::TooFewPoints(e)
    }
}

impl From<DegenerateGeometry> for FitError {
    fn from(e: DegenerateGeometry) -> Self {
        Self::DegenerateGeometry(e)
    }
}

impl From<CameraError> for FitError {
    fn from(e: CameraError) -> Self {
        Self::Camera(e)
    }
}
