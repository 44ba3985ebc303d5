// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit planning: everything derived from one look at the camera.

use kurbo::{Size, Vec2};
use overlook_camera::{MapCamera, Padding, PaddingInput};
use overlook_geo::GeoPoint;

use crate::{BoundingBox, DegenerateGeometry, FitError};

/// Options accepted by the fitting entry points.
///
/// Unset fields fall back to the camera's current state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitOptions {
    /// Space to keep free around the fitted points. Defaults to the
    /// camera's current padding.
    pub padding: Option<PaddingInput>,
    /// Pitch to ease to during the screen-space fit. Defaults to the
    /// camera's current pitch. Ignored by the axis-aligned path.
    pub pitch: Option<f64>,
}

impl FitOptions {
    /// Options with uniform padding on every edge.
    #[must_use]
    pub fn padded(padding: f64) -> Self {
        Self {
            padding: Some(PaddingInput::Uniform(padding)),
            pitch: None,
        }
    }
}

/// Everything a screen-space fit derives from one look at the camera.
///
/// Computed before any camera mutation and held fixed for the whole fit:
/// later phases deliberately re-measure only through the stored geographic
/// corners, never by re-planning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPlan {
    pub(crate) bounds: BoundingBox,
    pub(crate) padding: Padding,
    pub(crate) pitch: f64,
    pub(crate) effective: Size,
    pub(crate) offset: Vec2,
}

impl FitPlan {
    /// Measures the point set and derives the fit quantities.
    ///
    /// Only reads from the camera; the caller decides when to start
    /// mutating it.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::DegenerateGeometry`] when the container minus
    /// padding has non-finite or non-positive extent on either axis, and
    /// [`FitError::TooFewPoints`] for fewer than two points.
    pub fn compute<C: MapCamera>(
        camera: &C,
        points: &[GeoPoint],
        options: &FitOptions,
    ) -> Result<Self, FitError> {
        let bounds = match BoundingBox::measure(camera, points) {
            Some(bounds) if points.len() >= 2 => bounds,
            _ => {
                return Err(overlook_geo::TooFewPoints { got: points.len() }.into());
            }
        };
        let padding = options
            .padding
            .map_or_else(|| camera.padding(), PaddingInput::resolve);
        let pitch = options.pitch.unwrap_or_else(|| camera.pitch());

        let container = camera.container_size();
        let effective = Size::new(
            container.width - padding.horizontal(),
            container.height - padding.vertical(),
        );
        if !effective.width.is_finite()
            || !effective.height.is_finite()
            || effective.width <= 0.0
            || effective.height <= 0.0
        {
            return Err(DegenerateGeometry::EmptyViewport {
                effective_width: effective.width,
                effective_height: effective.height,
            }
            .into());
        }

        let offset = Vec2::new(
            padding.right - padding.left,
            padding.bottom - padding.top,
        );

        Ok(Self {
            bounds,
            padding,
            pitch,
            effective,
            offset,
        })
    }

    /// The footprint measured when the plan was computed.
    #[must_use]
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// The resolved per-edge padding.
    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// The pitch the fit eases to.
    #[must_use]
    pub const fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Container size minus padding, per axis.
    #[must_use]
    pub const fn effective_size(&self) -> Size {
        self.effective
    }

    /// Screen-space offset passed to the centering transition.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The geographic point the fit centers on.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.bounds.geo.bounds.center()
    }

    /// Padded viewport width over height.
    #[must_use]
    pub fn viewport_aspect(&self) -> f64 {
        self.effective.width / self.effective.height
    }

    /// Measured box width over height.
    #[must_use]
    pub fn bounds_aspect(&self) -> f64 {
        self.bounds.screen.width() / self.bounds.screen.height()
    }

    /// The zoom scale that fits the box to the more constrained axis.
    ///
    /// When the viewport is proportionally wider than the box, height is the
    /// constraint; otherwise width is. A degenerate box can make this zero,
    /// infinite, or NaN; the fit sequence checks before easing.
    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.viewport_aspect() > self.bounds_aspect() {
            self.effective.height / self.bounds.screen.height()
        } else {
            self.effective.width / self.bounds.screen.width()
        }
    }
}
