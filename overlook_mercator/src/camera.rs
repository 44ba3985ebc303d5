// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An animated Web Mercator camera implementing [`MapCamera`].

use std::mem;

use hashbrown::HashMap;
use kurbo::{Point, Size, Vec2};
use overlook_camera::{
    CameraError, CameraEvent, EaseTo, FitBoundsOptions, MapCamera, OverlayStyle, Padding,
    TransitionId,
};
use overlook_geo::{GeoBounds, GeoPoint};

use crate::projection::{Projector, TILE_SIZE, mercator};

/// Pitch ceiling in degrees.
pub const MAX_PITCH: f64 = 60.0;

/// Initial state and fixed parameters for a [`MercatorCamera`].
#[derive(Clone, Copy, Debug)]
pub struct CameraParams {
    /// Initial center.
    pub center: GeoPoint,
    /// Initial zoom level.
    pub zoom: f64,
    /// Initial pitch in degrees, clamped to `0.0..=MAX_PITCH`.
    pub pitch: f64,
    /// Initial bearing in degrees.
    pub bearing: f64,
    /// Initial edge padding.
    pub padding: Padding,
    /// Container size in logical pixels.
    pub size: Size,
    /// Vertical field of view in radians.
    pub fov: f64,
    /// Transition duration in seconds, used when an ease does not name one.
    pub duration: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            zoom: 1.0,
            pitch: 0.0,
            bearing: 0.0,
            padding: Padding::default(),
            size: Size::new(800.0, 600.0),
            fov: 0.6435011087932844,
            duration: 0.5,
        }
    }
}

/// The animated subset of camera state.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    center: GeoPoint,
    zoom: f64,
    pitch: f64,
    bearing: f64,
}

impl Pose {
    /// Component-wise interpolation, linear in lng/lat.
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            center: GeoPoint::new(
                self.center.lng + (other.center.lng - self.center.lng) * t,
                self.center.lat + (other.center.lat - self.center.lat) * t,
            ),
            zoom: self.zoom + (other.zoom - self.zoom) * t,
            pitch: self.pitch + (other.pitch - self.pitch) * t,
            bearing: self.bearing + (other.bearing - self.bearing) * t,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    from: Pose,
    to: Pose,
    elapsed: f64,
    duration: f64,
    id: TransitionId,
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// An animated Web Mercator camera.
///
/// This is a complete host-side counterpart to the fitting engine: it
/// projects through [`Projector`], animates [`ease_to`] requests with a
/// cubic ease-out, queues a [`CameraEvent::MoveEnd`] whenever a transition
/// ends for any reason, and keeps a line-overlay registry. The host drives
/// time explicitly through [`tick`] or [`settle`] and forwards the queued
/// events wherever they need to go.
///
/// [`ease_to`]: MapCamera::ease_to
/// [`tick`]: MercatorCamera::tick
/// [`settle`]: MercatorCamera::settle
#[derive(Clone, Debug)]
pub struct MercatorCamera {
    pose: Pose,
    padding: Padding,
    size: Size,
    fov: f64,
    default_duration: f64,
    next_id: u64,
    transition: Option<Transition>,
    events: Vec<CameraEvent>,
    fit_requests: Vec<(GeoBounds, FitBoundsOptions)>,
    sources: HashMap<String, Vec<GeoPoint>>,
    layers: HashMap<String, (String, OverlayStyle)>,
}

impl MercatorCamera {
    /// A camera in the given initial state, idle.
    #[must_use]
    pub fn new(params: CameraParams) -> Self {
        Self {
            pose: Pose {
                center: params.center,
                zoom: params.zoom,
                pitch: params.pitch.clamp(0.0, MAX_PITCH),
                bearing: params.bearing,
            },
            padding: params.padding,
            size: params.size,
            fov: params.fov,
            default_duration: params.duration,
            next_id: 0,
            transition: None,
            events: Vec::new(),
            fit_requests: Vec::new(),
            sources: HashMap::new(),
            layers: HashMap::new(),
        }
    }

    fn projector(&self) -> Projector {
        Projector::new(
            self.pose.center,
            self.pose.zoom,
            self.pose.pitch,
            self.pose.bearing,
            self.size,
            self.fov,
        )
    }

    fn fresh_id(&mut self) -> TransitionId {
        self.next_id += 1;
        TransitionId(self.next_id)
    }

    /// Ends the in-flight transition, if any, announcing its move-end.
    fn interrupt(&mut self) {
        if let Some(transition) = self.transition.take() {
            self.events.push(CameraEvent::MoveEnd(transition.id));
        }
    }

    /// The current center.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.pose.center
    }

    /// The current bearing in degrees.
    #[must_use]
    pub fn bearing(&self) -> f64 {
        self.pose.bearing
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.transition.is_some()
    }

    /// Jumps the bearing. Any in-flight transition is dropped without a
    /// move-end; meant for setup, not for driving fits.
    pub fn set_bearing(&mut self, bearing: f64) {
        self.transition = None;
        self.pose.bearing = bearing;
    }

    /// Jumps the pitch, clamped to `0.0..=MAX_PITCH`. Any in-flight
    /// transition is dropped without a move-end.
    pub fn set_pitch(&mut self, pitch: f64) {
        self.transition = None;
        self.pose.pitch = pitch.clamp(0.0, MAX_PITCH);
    }

    /// Jumps the camera center. Any in-flight transition is dropped without
    /// a move-end.
    pub fn set_center(&mut self, center: GeoPoint) {
        self.transition = None;
        self.pose.center = center;
    }

    /// Jumps the zoom level. Any in-flight transition is dropped without a
    /// move-end.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.transition = None;
        self.pose.zoom = zoom;
    }

    /// Replaces the edge padding.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Advances the in-flight transition by `dt` seconds.
    ///
    /// Interpolates the pose with a cubic ease-out and, once the duration
    /// elapses, snaps to the target exactly, completes the transition, and
    /// queues its move-end.
    pub fn tick(&mut self, dt: f64) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += dt;
        // A zero duration yields t = 1.0 here: inf for nonzero elapsed, and
        // f64::min maps the 0/0 NaN to the 1.0 operand.
        let t = (transition.elapsed / transition.duration).min(1.0);
        if t >= 1.0 {
            let Transition { to, id, .. } = *transition;
            self.pose = to;
            self.transition = None;
            self.events.push(CameraEvent::MoveEnd(id));
        } else {
            self.pose = transition.from.lerp(&transition.to, ease_out_cubic(t));
        }
    }

    /// Completes the in-flight transition immediately, if any.
    pub fn settle(&mut self) {
        if let Some(transition) = self.transition.take() {
            self.pose = transition.to;
            self.events.push(CameraEvent::MoveEnd(transition.id));
        }
    }

    /// Takes the queued camera events.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        mem::take(&mut self.events)
    }

    /// Every native-fit request received, oldest first.
    #[must_use]
    pub fn fit_requests(&self) -> &[(GeoBounds, FitBoundsOptions)] {
        &self.fit_requests
    }

    /// The ring registered under a source id.
    #[must_use]
    pub fn source(&self, id: &str) -> Option<&[GeoPoint]> {
        self.sources.get(id).map(Vec::as_slice)
    }

    /// The source id a layer draws from.
    #[must_use]
    pub fn layer_source(&self, id: &str) -> Option<&str> {
        self.layers.get(id).map(|(source, _)| source.as_str())
    }
}

impl MapCamera for MercatorCamera {
    fn project(&self, point: GeoPoint) -> Point {
        self.projector().project(point)
    }

    fn unproject(&self, point: Point) -> GeoPoint {
        self.projector().unproject(point)
    }

    fn zoom(&self) -> f64 {
        self.pose.zoom
    }

    fn pitch(&self) -> f64 {
        self.pose.pitch
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn container_size(&self) -> Size {
        self.size
    }

    fn stop(&mut self) {
        // The pose already holds the last interpolated state, so taking the
        // transition freezes the camera where it is.
        self.interrupt();
    }

    fn ease_to(&mut self, ease: &EaseTo) -> TransitionId {
        self.interrupt();
        let mut to = self.pose;
        if let Some(zoom) = ease.zoom {
            to.zoom = zoom;
        }
        if let Some(pitch) = ease.pitch {
            to.pitch = pitch.clamp(0.0, MAX_PITCH);
        }
        if let Some(bearing) = ease.bearing {
            to.bearing = bearing;
        }
        if let Some(center) = ease.center {
            to.center = center;
        }
        if let Some(offset) = ease.offset {
            // Solve under the target pose so the requested center lands at
            // the container center plus the offset once the ease completes.
            let target = ease.center.unwrap_or(self.pose.center);
            let projector =
                Projector::new(target, to.zoom, to.pitch, to.bearing, self.size, self.fov);
            to.center = projector.center_for_offset(target, offset);
        }
        let id = self.fresh_id();
        self.transition = Some(Transition {
            from: self.pose,
            to,
            elapsed: 0.0,
            duration: ease.duration.unwrap_or(self.default_duration),
            id,
        });
        id
    }

    fn fit_bounds(&mut self, bounds: &GeoBounds, options: &FitBoundsOptions) {
        self.interrupt();
        self.fit_requests.push((*bounds, *options));

        let avail = Size::new(
            self.size.width - options.padding.horizontal(),
            self.size.height - options.padding.vertical(),
        );
        let sw = mercator(bounds.south_west());
        let ne = mercator(bounds.north_east());
        // Mercator y grows southward, so the south-west corner has the
        // larger y.
        let zoom = f64::min(
            avail.width / (TILE_SIZE * (ne.x - sw.x)),
            avail.height / (TILE_SIZE * (sw.y - ne.y)),
        )
        .log2();
        if zoom.is_finite() {
            self.pose.zoom = zoom;
        }

        // Center the box in the padded region: its midpoint is shifted from
        // the container center by half the padding imbalance.
        let offset = Vec2::new(
            (options.padding.left - options.padding.right) / 2.0,
            (options.padding.top - options.padding.bottom) / 2.0,
        );
        self.pose.center = self.projector().center_for_offset(bounds.center(), offset);

        let id = self.fresh_id();
        self.events.push(CameraEvent::MoveEnd(id));
    }

    fn add_line_source(&mut self, id: &str, ring: &[GeoPoint]) -> Result<(), CameraError> {
        if self.sources.contains_key(id) {
            return Err(CameraError::DuplicateOverlayId { id: id.into() });
        }
        self.sources.insert(id.into(), ring.to_vec());
        Ok(())
    }

    fn add_line_layer(
        &mut self,
        id: &str,
        source: &str,
        style: &OverlayStyle,
    ) -> Result<(), CameraError> {
        if self.layers.contains_key(id) {
            return Err(CameraError::DuplicateOverlayId { id: id.into() });
        }
        if !self.sources.contains_key(source) {
            return Err(CameraError::MissingOverlaySource {
                source: source.into(),
            });
        }
        self.layers.insert(id.into(), (source.into(), *style));
        Ok(())
    }
}
