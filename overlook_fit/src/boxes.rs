// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space and geographic bounding boxes.

use kurbo::{Point, Rect};
use overlook_camera::MapCamera;
use overlook_geo::{GeoBounds, GeoPoint};

/// An axis-aligned rectangle in screen space, in logical pixels.
///
/// Built from the min/max projected x/y of a point set. Under nonzero
/// bearing the projected point cloud is rotated, so this is its axis-aligned
/// hull, not a rotated minimum bounding rectangle. The rectangle is
/// normalized by construction: width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBox {
    rect: Rect,
}

impl ScreenBox {
    /// Wraps a rectangle, normalizing it so extents are nonnegative.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect: rect.abs() }
    }

    /// The underlying rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// The corner with minimal x and y.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.rect.x0, self.rect.y0)
    }

    /// The corner with maximal x and minimal y.
    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.rect.x1, self.rect.y0)
    }

    /// The corner with minimal x and maximal y.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.rect.x0, self.rect.y1)
    }

    /// The corner with maximal x and y.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.rect.x1, self.rect.y1)
    }

    /// The centroid of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Horizontal extent in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Vertical extent in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// The [`ScreenBox`] corners carried back into geographic space.
///
/// `bounds` is built from the bottom-left/top-right diagonal pair only. With
/// the camera tilted or rotated the four unprojected corners no longer form
/// an axis-aligned geographic rectangle, so the diagonal bounds are an
/// approximation of the true footprint: good enough to recover a center,
/// not guaranteed to tightly contain every input point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBox {
    /// Unprojected top-left corner.
    pub top_left: GeoPoint,
    /// Unprojected top-right corner.
    pub top_right: GeoPoint,
    /// Unprojected bottom-right corner.
    pub bottom_right: GeoPoint,
    /// Unprojected bottom-left corner.
    pub bottom_left: GeoPoint,
    /// Geographic bounds spanned by the bottom-left/top-right diagonal.
    pub bounds: GeoBounds,
}

impl GeoBox {
    /// Builds the box from its four corners.
    #[must_use]
    pub fn from_corners(
        top_left: GeoPoint,
        top_right: GeoPoint,
        bottom_right: GeoPoint,
        bottom_left: GeoPoint,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            bounds: GeoBounds::new(bottom_left, top_right),
        }
    }
}

/// A point set's footprint measured in both spaces at one camera state.
///
/// Returned by [`ViewFitter::screen_bounds`]; stale as soon as the camera
/// moves.
///
/// [`ViewFitter::screen_bounds`]: crate::ViewFitter::screen_bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// The axis-aligned screen-space rectangle.
    pub screen: ScreenBox,
    /// Its corners unprojected back to geography.
    pub geo: GeoBox,
}

impl BoundingBox {
    /// Measures the footprint of `points` under the camera's current state.
    ///
    /// Projects every point, folds the screen extrema into a [`ScreenBox`],
    /// and unprojects its corners. Returns `None` for an empty slice.
    #[must_use]
    pub fn measure<C: MapCamera>(camera: &C, points: &[GeoPoint]) -> Option<Self> {
        let mut iter = points.iter();
        let first = camera.project(*iter.next()?);
        let mut rect = Rect::from_points(first, first);
        for point in iter {
            rect = rect.union_pt(camera.project(*point));
        }
        let screen = ScreenBox::from_rect(rect);
        let geo = GeoBox::from_corners(
            camera.unproject(screen.top_left()),
            camera.unproject(screen.top_right()),
            camera.unproject(screen.bottom_right()),
            camera.unproject(screen.bottom_left()),
        );
        Some(Self { screen, geo })
    }
}
