// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web Mercator projection with bearing rotation and pitch perspective.

use std::f64::consts::PI;

use glam::DVec2;
use kurbo::{Point, Size, Vec2};
use overlook_geo::GeoPoint;

/// Logical tile size; the world is `TILE_SIZE * 2^zoom` pixels wide.
pub const TILE_SIZE: f64 = 512.0;

/// Latitude limit of the square Web Mercator world, in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Projects between geography and screen space for one camera pose.
///
/// The pipeline is Web Mercator to world pixels, a rotation by the bearing,
/// then a perspective foreshortening for the pitch, with the pose's center
/// pinned to the middle of the container. Screen y grows downward and the
/// bottom half of a pitched viewport is the near, magnified half. The
/// inverse is exact, not iterative.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    center_world: DVec2,
    world_size: f64,
    half: DVec2,
    bearing_rad: f64,
    cos_pitch: f64,
    sin_pitch: f64,
    /// Eye-to-screen distance, in pixels.
    distance: f64,
}

impl Projector {
    /// A projector for the given camera pose.
    ///
    /// `pitch` and `bearing` are in degrees, `fov` is the vertical field of
    /// view in radians.
    #[must_use]
    pub fn new(
        center: GeoPoint,
        zoom: f64,
        pitch: f64,
        bearing: f64,
        size: Size,
        fov: f64,
    ) -> Self {
        let world_size = TILE_SIZE * zoom.exp2();
        let pitch_rad = pitch.to_radians();
        Self {
            center_world: world(center, world_size),
            world_size,
            half: DVec2::new(size.width / 2.0, size.height / 2.0),
            bearing_rad: bearing.to_radians(),
            cos_pitch: pitch_rad.cos(),
            sin_pitch: pitch_rad.sin(),
            distance: (size.height / 2.0) / (fov / 2.0).tan(),
        }
    }

    /// Screen position of a geographic point.
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> Point {
        let delta = world(point, self.world_size) - self.center_world;
        let r = DVec2::from_angle(-self.bearing_rad).rotate(delta);
        let scale = self.distance / (self.distance - r.y * self.sin_pitch);
        Point::new(
            self.half.x + scale * r.x,
            self.half.y + scale * r.y * self.cos_pitch,
        )
    }

    /// Geographic position of a screen point.
    ///
    /// Exact inverse of [`project`] for points below the horizon line.
    ///
    /// [`project`]: Projector::project
    #[must_use]
    pub fn unproject(&self, point: Point) -> GeoPoint {
        let u = DVec2::new(point.x - self.half.x, point.y - self.half.y);
        lng_lat(
            self.center_world + self.screen_delta_to_world(u),
            self.world_size,
        )
    }

    /// The camera center that puts `target` at the container center plus
    /// `offset`, keeping this projector's zoom, pitch, and bearing.
    #[must_use]
    pub fn center_for_offset(&self, target: GeoPoint, offset: Vec2) -> GeoPoint {
        let u = DVec2::new(offset.x, offset.y);
        lng_lat(
            world(target, self.world_size) - self.screen_delta_to_world(u),
            self.world_size,
        )
    }

    /// World-pixel displacement that lands `u` pixels from the screen center.
    fn screen_delta_to_world(&self, u: DVec2) -> DVec2 {
        let ry = u.y * self.distance / (self.distance * self.cos_pitch + u.y * self.sin_pitch);
        let scale = self.distance / (self.distance - ry * self.sin_pitch);
        DVec2::from_angle(self.bearing_rad).rotate(DVec2::new(u.x / scale, ry))
    }
}

/// Normalized Mercator position of a geographic point, both axes in
/// `0.0..=1.0` with y growing southward.
pub(crate) fn mercator(point: GeoPoint) -> DVec2 {
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    DVec2::new(
        (180.0 + point.lng) / 360.0,
        (180.0 - (180.0 / PI) * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) / 360.0,
    )
}

/// World-pixel position of a geographic point.
fn world(point: GeoPoint, world_size: f64) -> DVec2 {
    mercator(point) * world_size
}

/// Geographic position of a world-pixel point.
fn lng_lat(world: DVec2, world_size: f64) -> GeoPoint {
    let normalized = world / world_size;
    GeoPoint::new(
        normalized.x * 360.0 - 180.0,
        360.0 / PI * (180.0 - normalized.y * 360.0).to_radians().exp().atan() - 90.0,
    )
}
