// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic in-memory camera for unit tests.

extern crate std;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size};
use overlook_camera::{
    CameraError, EaseTo, FitBoundsOptions, MapCamera, OverlayStyle, Padding, TransitionId,
};
use overlook_geo::{GeoBounds, GeoPoint};

/// Extra pixels per degree added for each degree of pitch.
///
/// A perspective camera stretches the near half of the viewport when
/// pitched. This linear stand-in keeps the one property the refinement loop
/// needs, the projected span grows with pitch and shrinks with zoom, without
/// any trigonometry.
pub(crate) const PITCH_GAIN: f64 = 2.0;

/// A flat camera that projects linearly around its center.
///
/// The projection runs at `2^zoom + PITCH_GAIN * pitch` pixels per degree.
/// Transitions queue one at a time; [`finish`] applies the queued target and
/// returns its id, standing in for a host animation loop reaching move-end.
/// Every mutating call is recorded so tests can assert on the exact request
/// sequence.
///
/// [`finish`]: FakeCamera::finish
#[derive(Clone, Debug)]
pub(crate) struct FakeCamera {
    pub(crate) center: GeoPoint,
    pub(crate) zoom: f64,
    pub(crate) pitch: f64,
    pub(crate) padding: Padding,
    pub(crate) size: Size,
    next_id: u64,
    pending: Option<(TransitionId, EaseTo)>,
    pub(crate) stops: usize,
    pub(crate) interrupted: Vec<TransitionId>,
    pub(crate) eases: Vec<EaseTo>,
    pub(crate) fits: Vec<(GeoBounds, FitBoundsOptions)>,
    pub(crate) sources: Vec<(String, Vec<GeoPoint>)>,
    pub(crate) layers: Vec<(String, String, OverlayStyle)>,
}

impl FakeCamera {
    /// An 800x600 camera at the given center and zoom, level and unpadded.
    pub(crate) fn centered(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            pitch: 0.0,
            padding: Padding::default(),
            size: Size::new(800.0, 600.0),
            next_id: 0,
            pending: None,
            stops: 0,
            interrupted: Vec::new(),
            eases: Vec::new(),
            fits: Vec::new(),
            sources: Vec::new(),
            layers: Vec::new(),
        }
    }

    fn pixels_per_degree(&self) -> f64 {
        self.zoom.exp2() + PITCH_GAIN * self.pitch
    }

    /// The id of the queued transition, if one is in flight.
    pub(crate) fn pending_id(&self) -> Option<TransitionId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Applies the queued transition and returns its id.
    ///
    /// Offset and bearing are accepted but not modeled.
    pub(crate) fn finish(&mut self) -> Option<TransitionId> {
        let (id, ease) = self.pending.take()?;
        if let Some(center) = ease.center {
            self.center = center;
        }
        if let Some(zoom) = ease.zoom {
            self.zoom = zoom;
        }
        if let Some(pitch) = ease.pitch {
            self.pitch = pitch;
        }
        Some(id)
    }
}

impl MapCamera for FakeCamera {
    fn project(&self, point: GeoPoint) -> Point {
        let ppd = self.pixels_per_degree();
        Point::new(
            self.size.width / 2.0 + (point.lng - self.center.lng) * ppd,
            self.size.height / 2.0 + (self.center.lat - point.lat) * ppd,
        )
    }

    fn unproject(&self, point: Point) -> GeoPoint {
        let ppd = self.pixels_per_degree();
        GeoPoint::new(
            self.center.lng + (point.x - self.size.width / 2.0) / ppd,
            self.center.lat - (point.y - self.size.height / 2.0) / ppd,
        )
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn pitch(&self) -> f64 {
        self.pitch
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn container_size(&self) -> Size {
        self.size
    }

    fn stop(&mut self) {
        self.stops += 1;
        if let Some((id, _)) = self.pending.take() {
            self.interrupted.push(id);
        }
    }

    fn ease_to(&mut self, ease: &EaseTo) -> TransitionId {
        self.next_id += 1;
        let id = TransitionId(self.next_id);
        self.eases.push(*ease);
        self.pending = Some((id, *ease));
        id
    }

    fn fit_bounds(&mut self, bounds: &GeoBounds, options: &FitBoundsOptions) {
        self.fits.push((*bounds, *options));
    }

    fn add_line_source(&mut self, id: &str, ring: &[GeoPoint]) -> Result<(), CameraError> {
        if self.sources.iter().any(|(existing, _)| existing == id) {
            return Err(CameraError::DuplicateOverlayId { id: id.to_string() });
        }
        self.sources.push((id.to_string(), ring.to_vec()));
        Ok(())
    }

    fn add_line_layer(
        &mut self,
        id: &str,
        source: &str,
        style: &OverlayStyle,
    ) -> Result<(), CameraError> {
        if self.layers.iter().any(|(existing, _, _)| existing == id) {
            return Err(CameraError::DuplicateOverlayId { id: id.to_string() });
        }
        if !self.sources.iter().any(|(existing, _)| existing == source) {
            return Err(CameraError::MissingOverlaySource {
                source: source.to_string(),
            });
        }
        self.layers.push((id.to_string(), source.to_string(), *style));
        Ok(())
    }
}
