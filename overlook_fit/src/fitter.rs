// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport fitter and its move-end driven fit sequence.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use overlook_camera::{
    EaseTo, FitBoundsOptions, MapCamera, OverlayStyle, PaddingInput, TransitionId,
};
use overlook_geo::{GeoBounds, GeoPoint, PointInput, PointSet, TooFewPoints};

use crate::trace::NoTrace;
use crate::{
    BoundingBox, DegenerateGeometry, FitDebugInfo, FitError, FitGeneration, FitOptions,
    FitOutcome, FitPhase, FitPlan, FitProgress, FitTrace,
};

/// Zoom decrement applied by each refinement nudge.
pub const REFINE_ZOOM_STEP: f64 = 0.1;

/// Upper bound on refinement nudges per fit.
///
/// Refinement monotonically shrinks the projected span, but with an extreme
/// pitch the shrink per nudge can be tiny; the bound turns a pathological
/// input into a reported [`FitOutcome::MaxStepsReached`] instead of an
/// endless transition chain.
pub const MAX_REFINE_STEPS: u32 = 50;

/// Source id registered for the debug bounds overlay.
pub const BOUNDS_SOURCE_ID: &str = "bounds-box";

/// Layer id registered for the debug bounds overlay.
pub const BOUNDS_LAYER_ID: &str = "bounds-box-line";

#[cfg(feature = "std")]
#[inline]
fn log2(x: f64) -> f64 {
    x.log2()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn log2(x: f64) -> f64 {
    libm::log2(x)
}

/// The fit currently in flight: plan plus resume point.
#[derive(Clone, Copy, Debug)]
struct ActiveFit {
    generation: FitGeneration,
    plan: FitPlan,
    phase: FitPhase,
    awaiting: TransitionId,
}

/// A queued debug overlay, applied at the next [`ViewFitter::flush_overlays`].
#[derive(Clone, Copy, Debug)]
struct PendingOverlay {
    corners: [GeoPoint; 4],
    style: OverlayStyle,
}

/// Frames a camera so a set of geographic points is fully visible.
///
/// Construct one with at least two points, then use either fitting path:
///
/// - [`fit_aligned`]: delegates to the camera's native geographic fit.
///   Cheap, exact only while the camera is untilted and unrotated.
/// - [`fit_screen`]: measures the points in screen space, centers, scales,
///   and (under pitch) iteratively refines the zoom. This is the path that
///   stays correct when the camera is pitched or rotated.
///
/// The screen-space path runs as a host-driven sequence: the engine starts
/// one camera transition at a time and suspends. Whenever the camera
/// reports a move-end, the host forwards it to [`on_move_end`], which either
/// advances the sequence or reports [`FitProgress::Ignored`] for
/// notifications that belong to a superseded fit.
///
/// # Example
///
/// ```
/// use overlook_fit::{FitOptions, FitProgress, ViewFitter};
/// use overlook_mercator::{CameraParams, MercatorCamera};
/// use overlook_camera::CameraEvent;
///
/// let mut camera = MercatorCamera::new(CameraParams::default());
/// let mut fitter = ViewFitter::new(vec![[-3.19, 55.95], [-3.18, 55.96]])?;
///
/// let generation = fitter.fit_screen(&mut camera, None, &FitOptions::padded(20.0))?;
///
/// // Host loop: let the camera settle, then forward its notifications.
/// let done = loop {
///     camera.settle();
///     let mut done = None;
///     for event in camera.drain_events() {
///         let CameraEvent::MoveEnd(id) = event;
///         if let FitProgress::Done(outcome) = fitter.on_move_end(&mut camera, id)? {
///             done = Some(outcome);
///         }
///     }
///     if let Some(outcome) = done {
///         break outcome;
///     }
/// };
/// # let _ = (generation, done);
/// # Ok::<(), overlook_fit::FitError>(())
/// ```
///
/// [`fit_aligned`]: ViewFitter::fit_aligned
/// [`fit_screen`]: ViewFitter::fit_screen
/// [`on_move_end`]: ViewFitter::on_move_end
#[derive(Clone, Debug)]
pub struct ViewFitter {
    points: PointSet,
    debug: bool,
    last_generation: u64,
    active: Option<ActiveFit>,
    overlays: Vec<PendingOverlay>,
}

impl ViewFitter {
    /// Creates a fitter over the given points.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] for fewer than two points.
    pub fn new(points: impl Into<PointInput>) -> Result<Self, FitError> {
        Ok(Self {
            points: PointSet::new(points)?,
            debug: false,
            last_generation: 0,
            active: None,
            overlays: Vec::new(),
        })
    }

    /// Enables or disables the debug bounds overlay on the aligned path.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Whether the debug bounds overlay is enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The stored points, normalized.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        self.points.points()
    }

    /// Replaces the stored points.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] for fewer than two points; the
    /// stored points are kept unchanged in that case.
    pub fn set_points(&mut self, points: impl Into<PointInput>) -> Result<(), FitError> {
        self.points.replace(points)?;
        Ok(())
    }

    /// A diagnostics snapshot of the in-flight fit, if any.
    #[must_use]
    pub fn active_fit(&self) -> Option<FitDebugInfo> {
        self.active.as_ref().map(|active| FitDebugInfo {
            generation: active.generation,
            phase: active.phase,
            awaiting: active.awaiting,
            pitch: active.plan.pitch(),
            effective_size: active.plan.effective_size(),
            offset: active.plan.offset(),
            viewport_aspect: active.plan.viewport_aspect(),
            bounds_aspect: active.plan.bounds_aspect(),
        })
    }

    /// Resolves an optional points override without storing it.
    fn resolve(&self, points: Option<PointInput>) -> Result<Cow<'_, [GeoPoint]>, FitError> {
        match points {
            Some(input) => {
                let got = input.len();
                if got < 2 {
                    return Err(TooFewPoints { got }.into());
                }
                Ok(Cow::Owned(input.normalize()))
            }
            None => Ok(Cow::Borrowed(self.points.points())),
        }
    }

    /// Component-wise geographic extrema of the points.
    ///
    /// Never queries the camera; the result is the exact min/max box of the
    /// input longitudes and latitudes, meaningful as a viewport footprint
    /// only while bearing and pitch are zero. `points` overrides the stored
    /// set for this call without replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] if an override has fewer than two
    /// points.
    pub fn aligned_bounds(&self, points: Option<PointInput>) -> Result<GeoBounds, FitError> {
        let points = self.resolve(points)?;
        let got = points.len();
        GeoBounds::from_points(points.iter().copied())
            .ok_or_else(|| TooFewPoints { got }.into())
    }

    /// Fits the camera to the aligned bounds via its native fit primitive.
    ///
    /// Halts any in-flight camera animation first. When a points override is
    /// given it replaces the stored set. Padding defaults to the camera's
    /// current padding. With the debug overlay enabled, the box outline is
    /// queued for [`flush_overlays`].
    ///
    /// This path assumes bearing = pitch = 0; on a tilted or rotated camera
    /// the native fit measures the wrong footprint and under-zooms. Use
    /// [`fit_screen`] there.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] if an override has fewer than two
    /// points (the stored set is kept and the camera is not touched).
    ///
    /// [`flush_overlays`]: ViewFitter::flush_overlays
    /// [`fit_screen`]: ViewFitter::fit_screen
    pub fn fit_aligned<C: MapCamera>(
        &mut self,
        camera: &mut C,
        points: Option<PointInput>,
        options: &FitOptions,
    ) -> Result<(), FitError> {
        if let Some(input) = points {
            self.points.replace(input)?;
        }
        let bounds = self.aligned_bounds(None)?;
        let padding = options
            .padding
            .map_or_else(|| camera.padding(), PaddingInput::resolve);
        if self.debug {
            self.draw_bounds([
                bounds.north_east(),
                bounds.north_west(),
                bounds.south_west(),
                bounds.south_east(),
            ]);
        }
        camera.stop();
        camera.fit_bounds(&bounds, &FitBoundsOptions { padding });
        Ok(())
    }

    /// Measures the points' footprint at the camera's current state.
    ///
    /// Returns the axis-aligned screen rectangle of the projected points
    /// together with its corners carried back to geography. `points`
    /// overrides the stored set for this call without replacing it. The
    /// result is stale as soon as the camera moves.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] if an override has fewer than two
    /// points.
    pub fn screen_bounds<C: MapCamera>(
        &self,
        camera: &C,
        points: Option<PointInput>,
    ) -> Result<BoundingBox, FitError> {
        let points = self.resolve(points)?;
        let got = points.len();
        BoundingBox::measure(camera, &points).ok_or_else(|| TooFewPoints { got }.into())
    }

    /// Starts the screen-space fit sequence.
    ///
    /// Plans the fit from the camera's current state, halts any in-flight
    /// animation, and starts the centering transition. The fit then advances
    /// one transition at a time through [`on_move_end`]. A fit that was
    /// already in flight is superseded: its outstanding notifications will
    /// be answered with [`FitProgress::Ignored`].
    ///
    /// Returns the new fit's generation token.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::TooFewPoints`] if a points override has fewer
    /// than two points, and [`FitError::DegenerateGeometry`] if the padded
    /// viewport has no usable area. Both are detected before the camera is
    /// touched; an in-flight fit stays active in that case.
    ///
    /// [`on_move_end`]: ViewFitter::on_move_end
    pub fn fit_screen<C: MapCamera>(
        &mut self,
        camera: &mut C,
        points: Option<PointInput>,
        options: &FitOptions,
    ) -> Result<FitGeneration, FitError> {
        self.fit_screen_with_trace(camera, points, options, &mut NoTrace)
    }

    /// [`fit_screen`], reporting lifecycle events to `trace`.
    ///
    /// # Errors
    ///
    /// As [`fit_screen`].
    ///
    /// [`fit_screen`]: ViewFitter::fit_screen
    pub fn fit_screen_with_trace<C: MapCamera, T: FitTrace>(
        &mut self,
        camera: &mut C,
        points: Option<PointInput>,
        options: &FitOptions,
        trace: &mut T,
    ) -> Result<FitGeneration, FitError> {
        if let Some(input) = points {
            self.points.replace(input)?;
        }
        let plan = FitPlan::compute(camera, self.points.points(), options)?;

        self.last_generation += 1;
        let generation = FitGeneration(self.last_generation);
        trace.planned(generation, &plan);

        // Supersede whatever the camera was doing, a previous fit's
        // transition included. The interrupted transition's move-end still
        // arrives, carrying an id this fit is not waiting on.
        camera.stop();
        let awaiting = camera.ease_to(&EaseTo {
            center: Some(plan.center()),
            pitch: Some(plan.pitch()),
            offset: Some(plan.offset()),
            ..EaseTo::default()
        });
        trace.transition(generation, FitPhase::Centering, awaiting);
        self.active = Some(ActiveFit {
            generation,
            plan,
            phase: FitPhase::Centering,
            awaiting,
        });
        Ok(generation)
    }

    /// Advances the fit sequence with a camera move-end notification.
    ///
    /// The host calls this for every move-end its camera raises. A
    /// notification whose [`TransitionId`] is not the one the active fit is
    /// waiting on (a superseded fit's transition, say, or a user-initiated
    /// move) is answered with [`FitProgress::Ignored`] and has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::DegenerateGeometry`] when the measured box makes
    /// the zoom arithmetic meaningless. The fit is abandoned and the camera
    /// is left in its last valid state.
    pub fn on_move_end<C: MapCamera>(
        &mut self,
        camera: &mut C,
        transition: TransitionId,
    ) -> Result<FitProgress, FitError> {
        self.on_move_end_with_trace(camera, transition, &mut NoTrace)
    }

    /// [`on_move_end`], reporting lifecycle events to `trace`.
    ///
    /// # Errors
    ///
    /// As [`on_move_end`].
    ///
    /// [`on_move_end`]: ViewFitter::on_move_end
    pub fn on_move_end_with_trace<C: MapCamera, T: FitTrace>(
        &mut self,
        camera: &mut C,
        transition: TransitionId,
        trace: &mut T,
    ) -> Result<FitProgress, FitError> {
        let Some(mut active) = self.active.take() else {
            trace.ignored(transition);
            return Ok(FitProgress::Ignored);
        };
        if active.awaiting != transition {
            self.active = Some(active);
            trace.ignored(transition);
            return Ok(FitProgress::Ignored);
        }
        let generation = active.generation;

        match active.phase {
            FitPhase::Centering => {
                // Scale to the more constrained axis, measured at plan time.
                let scale = active.plan.scale();
                if !scale.is_finite() || scale <= 0.0 {
                    let error = FitError::from(DegenerateGeometry::UnusableScale { scale });
                    trace.aborted(generation, &error);
                    return Err(error);
                }
                let zoom = camera.zoom() + log2(scale);
                let awaiting = camera.ease_to(&EaseTo::zoom(zoom));
                active.phase = FitPhase::Scaling;
                active.awaiting = awaiting;
                trace.transition(generation, FitPhase::Scaling, awaiting);
                self.active = Some(active);
                Ok(FitProgress::Scaling)
            }
            // Pitch is the sole source of the scaling approximation's
            // residual error; an unpitched fit is done after scaling.
            FitPhase::Scaling if active.plan.pitch() == 0.0 => {
                let outcome = FitOutcome::Converged { refine_steps: 0 };
                trace.finished(generation, outcome);
                Ok(FitProgress::Done(outcome))
            }
            FitPhase::Scaling | FitPhase::Refining { .. } => {
                let step = match active.phase {
                    FitPhase::Refining { step } => step,
                    _ => 0,
                };
                // Re-project the box's bottom edge at the now-current state.
                let left = camera.project(active.plan.bounds().geo.bottom_left);
                let right = camera.project(active.plan.bounds().geo.bottom_right);
                let span = right.x - left.x;
                if !span.is_finite() {
                    let error = FitError::from(DegenerateGeometry::UnusableSpan { span });
                    trace.aborted(generation, &error);
                    return Err(error);
                }
                if span <= active.plan.effective_size().width {
                    let outcome = FitOutcome::Converged { refine_steps: step };
                    trace.finished(generation, outcome);
                    return Ok(FitProgress::Done(outcome));
                }
                if step >= MAX_REFINE_STEPS {
                    let outcome = FitOutcome::MaxStepsReached { refine_steps: step };
                    trace.finished(generation, outcome);
                    return Ok(FitProgress::Done(outcome));
                }
                let awaiting = camera.ease_to(&EaseTo::zoom(camera.zoom() - REFINE_ZOOM_STEP));
                let step = step + 1;
                active.phase = FitPhase::Refining { step };
                active.awaiting = awaiting;
                trace.transition(generation, FitPhase::Refining { step }, awaiting);
                self.active = Some(active);
                Ok(FitProgress::Refining { step })
            }
        }
    }

    /// Queues the bounding polygon for drawing as a debug overlay.
    ///
    /// The ring is closed automatically. Nothing touches the camera until
    /// [`flush_overlays`] is called.
    ///
    /// [`flush_overlays`]: ViewFitter::flush_overlays
    pub fn draw_bounds(&mut self, corners: [GeoPoint; 4]) {
        self.overlays.push(PendingOverlay {
            corners,
            style: OverlayStyle::default(),
        });
    }

    /// Applies queued debug overlays to the camera.
    ///
    /// Requests are applied oldest first; each registers a line source under
    /// [`BOUNDS_SOURCE_ID`] and a layer under [`BOUNDS_LAYER_ID`]. Returns
    /// how many requests were applied.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Camera`] when the camera rejects a registration
    /// (typically [`CameraError::DuplicateOverlayId`] from flushing twice).
    /// The failed request is discarded; requests queued after it stay
    /// queued.
    ///
    /// [`CameraError::DuplicateOverlayId`]: overlook_camera::CameraError::DuplicateOverlayId
    pub fn flush_overlays<C: MapCamera>(&mut self, camera: &mut C) -> Result<usize, FitError> {
        let mut applied = 0;
        while !self.overlays.is_empty() {
            let pending = self.overlays.remove(0);
            let [a, b, c, d] = pending.corners;
            let ring = [a, b, c, d, a];
            camera.add_line_source(BOUNDS_SOURCE_ID, &ring)?;
            camera.add_line_layer(BOUNDS_LAYER_ID, BOUNDS_SOURCE_ID, &pending.style)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// How many debug overlays are queued.
    #[must_use]
    pub fn pending_overlays(&self) -> usize {
        self.overlays.len()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::testutil::FakeCamera;
    use crate::{FitEvent, FitRecorder};
    use alloc::vec;
    use overlook_camera::{CameraError, Padding};

    fn edinburgh_pair() -> Vec<[f64; 2]> {
        vec![[-3.19, 55.95], [-3.18, 55.96]]
    }

    #[test]
    fn aligned_bounds_are_exact_extrema() {
        let fitter = ViewFitter::new(vec![
            [-3.19, 55.95],
            [-3.18, 55.96],
            [-3.21, 55.94],
            [-3.17, 55.97],
        ])
        .unwrap();
        let bounds = fitter.aligned_bounds(None).unwrap();
        assert_eq!(bounds.min_lng(), -3.21);
        assert_eq!(bounds.max_lng(), -3.17);
        assert_eq!(bounds.min_lat(), 55.94);
        assert_eq!(bounds.max_lat(), 55.97);
    }

    #[test]
    fn fit_aligned_invokes_the_native_fit() {
        let mut camera = FakeCamera::centered(GeoPoint::new(-3.0, 55.0), 9.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        fitter
            .fit_aligned(&mut camera, None, &FitOptions::padded(20.0))
            .unwrap();

        assert_eq!(camera.stops, 1);
        let (bounds, options) = &camera.fits[0];
        assert_eq!(bounds.min_lng(), -3.19);
        assert_eq!(bounds.max_lng(), -3.18);
        assert_eq!(bounds.min_lat(), 55.95);
        assert_eq!(bounds.max_lat(), 55.96);
        assert_eq!(options.padding, Padding::uniform(20.0));
    }

    #[test]
    fn fit_aligned_defaults_to_camera_padding() {
        let mut camera = FakeCamera::centered(GeoPoint::new(-3.0, 55.0), 9.0);
        camera.padding = Padding::new(10.0, 0.0, 0.0, 30.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        fitter
            .fit_aligned(&mut camera, None, &FitOptions::default())
            .unwrap();
        assert_eq!(camera.fits[0].1.padding, Padding::new(10.0, 0.0, 0.0, 30.0));
    }

    #[test]
    fn unpitched_fit_centers_then_scales_then_finishes() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(vec![[-0.5, -0.25], [0.5, 0.25]]).unwrap();
        let mut recorder = FitRecorder::new();

        let generation = fitter
            .fit_screen_with_trace(&mut camera, None, &FitOptions::default(), &mut recorder)
            .unwrap();
        assert_eq!(generation, FitGeneration(1));
        assert_eq!(camera.stops, 1);
        assert_eq!(
            fitter.active_fit().map(|info| info.phase),
            Some(FitPhase::Centering)
        );

        // Centering: the camera eases to the box center at the target pitch.
        let centering = camera.finish().unwrap();
        let progress = fitter
            .on_move_end_with_trace(&mut camera, centering, &mut recorder)
            .unwrap();
        assert_eq!(progress, FitProgress::Scaling);
        assert_eq!(camera.center, GeoPoint::new(0.0, 0.0));

        // Scaling: box is 256x128 px at zoom 8, the 800x600 viewport is
        // proportionally narrower, so width constrains: scale = 800/256.
        let scaling = camera.finish().unwrap();
        let progress = fitter
            .on_move_end_with_trace(&mut camera, scaling, &mut recorder)
            .unwrap();
        assert_eq!(
            progress,
            FitProgress::Done(FitOutcome::Converged { refine_steps: 0 })
        );
        let expected_zoom = 8.0 + (800.0_f64 / 256.0).log2();
        assert!((camera.zoom - expected_zoom).abs() < 1e-9);
        assert!(fitter.active_fit().is_none());

        // A late notification for the finished fit is ignored.
        assert_eq!(
            fitter.on_move_end(&mut camera, scaling).unwrap(),
            FitProgress::Ignored
        );

        assert_eq!(
            recorder.events(),
            &[
                FitEvent::Planned { generation },
                FitEvent::Transition {
                    generation,
                    phase: FitPhase::Centering,
                    awaiting: centering,
                },
                FitEvent::Transition {
                    generation,
                    phase: FitPhase::Scaling,
                    awaiting: scaling,
                },
                FitEvent::Finished {
                    generation,
                    outcome: FitOutcome::Converged { refine_steps: 0 },
                },
            ]
        );
    }

    #[test]
    fn pitched_fit_refines_until_the_bottom_edge_fits() {
        // The fake camera widens its projection under pitch, so the scaling
        // phase (measured unpitched) overshoots and refinement kicks in.
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 11.0);
        let mut fitter = ViewFitter::new(vec![[-0.25, -0.05], [0.25, 0.05]]).unwrap();
        let options = FitOptions {
            padding: None,
            pitch: Some(30.0),
        };

        fitter.fit_screen(&mut camera, None, &options).unwrap();
        let centering = camera.finish().unwrap();
        assert_eq!(
            fitter.on_move_end(&mut camera, centering).unwrap(),
            FitProgress::Scaling
        );
        assert_eq!(camera.pitch, 30.0);

        let scaling = camera.finish().unwrap();
        assert_eq!(
            fitter.on_move_end(&mut camera, scaling).unwrap(),
            FitProgress::Refining { step: 1 }
        );

        let refine = camera.finish().unwrap();
        assert_eq!(
            fitter.on_move_end(&mut camera, refine).unwrap(),
            FitProgress::Done(FitOutcome::Converged { refine_steps: 1 })
        );

        // One 0.1 nudge below the aspect-derived zoom.
        let expected_zoom = 11.0 + (800.0_f64 / 1024.0).log2() - REFINE_ZOOM_STEP;
        assert!((camera.zoom - expected_zoom).abs() < 1e-9);

        // The bottom edge now fits the viewport.
        let left = camera.project(GeoPoint::new(-0.25, -0.05));
        let right = camera.project(GeoPoint::new(0.25, -0.05));
        assert!(right.x - left.x <= 800.0);
    }

    #[test]
    fn refinement_stops_at_the_step_bound() {
        // Pitch adds a flat 120 px/deg to the fake projection, so this
        // 10 degree span never fits 800 px however far the zoom drops.
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 11.0);
        let mut fitter = ViewFitter::new(vec![[-5.0, -0.05], [5.0, 0.05]]).unwrap();
        let options = FitOptions {
            padding: None,
            pitch: Some(60.0),
        };

        fitter.fit_screen(&mut camera, None, &options).unwrap();
        let mut outcome = None;
        for _ in 0..200 {
            let id = camera.finish().unwrap();
            if let FitProgress::Done(done) = fitter.on_move_end(&mut camera, id).unwrap() {
                outcome = Some(done);
                break;
            }
        }

        assert_eq!(
            outcome,
            Some(FitOutcome::MaxStepsReached {
                refine_steps: MAX_REFINE_STEPS
            })
        );
        assert!(fitter.active_fit().is_none());
        // Centering, scaling, then one ease per refinement step.
        assert_eq!(camera.eases.len(), 52);
        // Every nudge was applied before the bound cut the sequence off.
        let scaled_zoom = 11.0 + (800.0_f64 / 20480.0).log2();
        let floor = scaled_zoom - f64::from(MAX_REFINE_STEPS) * REFINE_ZOOM_STEP;
        assert!((camera.zoom - floor).abs() < 1e-9);
    }

    #[test]
    fn a_new_fit_supersedes_the_old_generation() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(vec![[-0.5, -0.25], [0.5, 0.25]]).unwrap();
        let mut recorder = FitRecorder::new();

        let first = fitter
            .fit_screen(&mut camera, None, &FitOptions::default())
            .unwrap();
        let stale = camera.pending_id().unwrap();

        // Second fit interrupts the first mid-centering.
        let second = fitter
            .fit_screen(&mut camera, None, &FitOptions::default())
            .unwrap();
        assert!(second > first);
        assert_eq!(camera.interrupted, vec![stale]);

        // The interrupted transition's move-end is answered with Ignored.
        assert_eq!(
            fitter
                .on_move_end_with_trace(&mut camera, stale, &mut recorder)
                .unwrap(),
            FitProgress::Ignored
        );
        assert_eq!(recorder.events(), &[FitEvent::Ignored { transition: stale }]);

        // The second fit still runs to completion.
        let centering = camera.finish().unwrap();
        assert_eq!(
            fitter.on_move_end(&mut camera, centering).unwrap(),
            FitProgress::Scaling
        );
        let scaling = camera.finish().unwrap();
        assert_eq!(
            fitter.on_move_end(&mut camera, scaling).unwrap(),
            FitProgress::Done(FitOutcome::Converged { refine_steps: 0 })
        );
    }

    #[test]
    fn move_end_without_an_active_fit_is_ignored() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        assert_eq!(
            fitter
                .on_move_end(&mut camera, overlook_camera::TransitionId(41))
                .unwrap(),
            FitProgress::Ignored
        );
    }

    #[test]
    fn coincident_points_abort_with_a_degenerate_scale() {
        let mut camera = FakeCamera::centered(GeoPoint::new(5.0, 5.0), 8.0);
        let mut fitter = ViewFitter::new(vec![[5.0, 5.0], [5.0, 5.0]]).unwrap();
        let mut recorder = FitRecorder::new();

        let generation = fitter
            .fit_screen_with_trace(&mut camera, None, &FitOptions::default(), &mut recorder)
            .unwrap();
        let zoom_before = camera.zoom;

        let centering = camera.finish().unwrap();
        let error = fitter
            .on_move_end_with_trace(&mut camera, centering, &mut recorder)
            .unwrap_err();
        assert!(matches!(
            error,
            FitError::DegenerateGeometry(DegenerateGeometry::UnusableScale { .. })
        ));
        // The camera keeps its last valid state and the fit is abandoned.
        assert_eq!(camera.zoom, zoom_before);
        assert!(fitter.active_fit().is_none());
        assert_eq!(
            recorder.events().last(),
            Some(&FitEvent::Aborted { generation })
        );
    }

    #[test]
    fn planning_failures_leave_the_camera_untouched() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();

        let error = fitter
            .fit_screen(&mut camera, None, &FitOptions::padded(400.0))
            .unwrap_err();
        assert!(matches!(
            error,
            FitError::DegenerateGeometry(DegenerateGeometry::EmptyViewport { .. })
        ));
        assert_eq!(camera.stops, 0);
        assert!(camera.eases.is_empty());
        assert!(fitter.active_fit().is_none());
    }

    #[test]
    fn a_points_override_replaces_the_stored_set() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        fitter
            .fit_screen(
                &mut camera,
                Some(vec![[10.0, 10.0], [11.0, 11.0]].into()),
                &FitOptions::default(),
            )
            .unwrap();
        let bounds = fitter.aligned_bounds(None).unwrap();
        assert_eq!(bounds.min_lng(), 10.0);
        assert_eq!(bounds.max_lng(), 11.0);
    }

    #[test]
    fn a_short_override_is_rejected_and_keeps_the_stored_set() {
        let mut camera = FakeCamera::centered(GeoPoint::new(0.0, 0.0), 8.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        let error = fitter
            .fit_screen(
                &mut camera,
                Some(vec![[10.0, 10.0]].into()),
                &FitOptions::default(),
            )
            .unwrap_err();
        assert_eq!(error, FitError::TooFewPoints(TooFewPoints { got: 1 }));
        assert_eq!(fitter.points().len(), 2);
        assert!(camera.eases.is_empty());
    }

    #[test]
    fn debug_overlay_is_queued_and_flushed_once() {
        let mut camera = FakeCamera::centered(GeoPoint::new(-3.0, 55.0), 9.0);
        let mut fitter = ViewFitter::new(edinburgh_pair()).unwrap();
        fitter.set_debug(true);

        fitter
            .fit_aligned(&mut camera, None, &FitOptions::default())
            .unwrap();
        assert_eq!(fitter.pending_overlays(), 1);
        assert!(camera.sources.is_empty());

        assert_eq!(fitter.flush_overlays(&mut camera).unwrap(), 1);
        assert_eq!(fitter.pending_overlays(), 0);
        let (source_id, ring) = &camera.sources[0];
        assert_eq!(source_id, BOUNDS_SOURCE_ID);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        let (layer_id, layer_source, _style) = &camera.layers[0];
        assert_eq!(layer_id, BOUNDS_LAYER_ID);
        assert_eq!(layer_source, BOUNDS_SOURCE_ID);

        // Flushing a second overlay collides with the registered ids.
        fitter
            .fit_aligned(&mut camera, None, &FitOptions::default())
            .unwrap();
        let error = fitter.flush_overlays(&mut camera).unwrap_err();
        assert!(matches!(
            error,
            FitError::Camera(CameraError::DuplicateOverlayId { .. })
        ));
    }
}
