// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests driving the fitting engine against the Web Mercator
//! camera.
//!
//! These exercise the full host loop: start a fit, settle one camera
//! transition at a time, and forward every move-end back into the engine.

use overlook_camera::{CameraEvent, MapCamera, Padding, PaddingInput};
use overlook_fit::{BOUNDS_SOURCE_ID, FitOptions, FitOutcome, FitProgress, ViewFitter};
use overlook_geo::GeoPoint;
use overlook_mercator::{CameraParams, MercatorCamera};

fn harbor_points() -> Vec<[f64; 2]> {
    vec![
        [-3.19, 55.95],
        [-3.18, 55.96],
        [-3.21, 55.94],
        [-3.17, 55.97],
    ]
}

fn camera_at(center: GeoPoint, zoom: f64) -> MercatorCamera {
    MercatorCamera::new(CameraParams {
        center,
        zoom,
        ..CameraParams::default()
    })
}

/// Settles transitions and forwards move-ends until the fit reports done.
fn drive(fitter: &mut ViewFitter, camera: &mut MercatorCamera) -> FitOutcome {
    for _ in 0..200 {
        camera.settle();
        for event in camera.drain_events() {
            let CameraEvent::MoveEnd(id) = event;
            if let FitProgress::Done(outcome) = fitter.on_move_end(camera, id).unwrap() {
                return outcome;
            }
        }
    }
    panic!("fit did not finish within 200 transitions");
}

#[test]
fn screen_fit_converges_for_a_range_of_pitches() {
    for pitch in [0.0, 15.0, 30.0, 45.0] {
        let mut camera = camera_at(GeoPoint::new(-3.2, 55.9), 9.0);
        let mut fitter = ViewFitter::new(harbor_points()).unwrap();
        let options = FitOptions {
            padding: Some(PaddingInput::Uniform(24.0)),
            pitch: Some(pitch),
        };

        // The plan measures at the pre-fit state; keep its box so the
        // convergence criterion can be re-checked afterwards.
        let before = fitter.screen_bounds(&camera, None).unwrap();

        fitter.fit_screen(&mut camera, None, &options).unwrap();
        let outcome = drive(&mut fitter, &mut camera);

        let FitOutcome::Converged { refine_steps } = outcome else {
            panic!("pitch {pitch}: fit hit the refinement bound");
        };
        assert_eq!(camera.pitch(), pitch, "pitch {pitch}");
        if pitch == 0.0 {
            assert_eq!(refine_steps, 0, "level fits scale in one step");
        }

        // The box's near edge fits the padded width.
        let left = camera.project(before.geo.bottom_left);
        let right = camera.project(before.geo.bottom_right);
        let span = right.x - left.x;
        assert!(
            span <= 800.0 - 48.0 + 1e-9,
            "pitch {pitch}: span {span} overflows the padded width"
        );
    }
}

#[test]
fn wide_boxes_need_refinement_under_pitch() {
    let mut camera = camera_at(GeoPoint::new(-3.2, 55.95), 9.0);
    // Much wider than tall, so scaling fills the padded width exactly and
    // the pitched near edge starts out overflowing.
    let mut fitter = ViewFitter::new(vec![[-3.4, 55.94], [-3.0, 55.96]]).unwrap();
    let options = FitOptions {
        padding: Some(PaddingInput::Uniform(24.0)),
        pitch: Some(50.0),
    };

    let before = fitter.screen_bounds(&camera, None).unwrap();
    fitter.fit_screen(&mut camera, None, &options).unwrap();
    let outcome = drive(&mut fitter, &mut camera);

    let FitOutcome::Converged { refine_steps } = outcome else {
        panic!("fit hit the refinement bound");
    };
    assert!(refine_steps >= 1, "expected at least one zoom nudge");

    let left = camera.project(before.geo.bottom_left);
    let right = camera.project(before.geo.bottom_right);
    assert!(right.x - left.x <= 752.0 + 1e-9);
}

#[test]
fn rotation_is_measured_in_screen_space() {
    let mut camera = camera_at(GeoPoint::new(-3.2, 55.9), 9.0);
    camera.set_bearing(90.0);
    let mut fitter = ViewFitter::new(harbor_points()).unwrap();
    let options = FitOptions::padded(40.0);

    fitter.fit_screen(&mut camera, None, &options).unwrap();
    let outcome = drive(&mut fitter, &mut camera);
    assert!(matches!(outcome, FitOutcome::Converged { .. }));
    assert_eq!(camera.bearing(), 90.0);

    // Every point lands inside the padded viewport despite the rotation.
    for point in fitter.points() {
        let screen = camera.project(*point);
        assert!(
            screen.x >= 40.0 - 0.5 && screen.x <= 760.0 + 0.5,
            "{point:?} at {screen:?}"
        );
        assert!(
            screen.y >= 40.0 - 0.5 && screen.y <= 560.0 + 0.5,
            "{point:?} at {screen:?}"
        );
    }
}

#[test]
fn asymmetric_padding_offsets_the_box_center() {
    let mut camera = camera_at(GeoPoint::new(-3.2, 55.9), 9.0);
    let mut fitter = ViewFitter::new(harbor_points()).unwrap();
    let options = FitOptions {
        padding: Some(PaddingInput::PerEdge(Padding::new(0.0, 100.0, 0.0, 0.0))),
        pitch: None,
    };

    let before = fitter.screen_bounds(&camera, None).unwrap();
    let target_center = before.geo.bounds.center();

    fitter.fit_screen(&mut camera, None, &options).unwrap();
    let info = fitter.active_fit().unwrap();
    assert_eq!(info.effective_size.width, 700.0);
    assert_eq!(info.effective_size.height, 600.0);
    assert_eq!(info.offset.x, 100.0);
    assert_eq!(info.offset.y, 0.0);

    // After the centering transition the box center sits at the container
    // center displaced by the padding imbalance.
    camera.settle();
    let screen = camera.project(target_center);
    assert!((screen.x - 500.0).abs() < 1e-6);
    assert!((screen.y - 300.0).abs() < 1e-6);

    let events = camera.drain_events();
    assert_eq!(events.len(), 1);
    let CameraEvent::MoveEnd(id) = events[0];
    assert_eq!(
        fitter.on_move_end(&mut camera, id).unwrap(),
        FitProgress::Scaling
    );
    let outcome = drive(&mut fitter, &mut camera);
    assert!(matches!(outcome, FitOutcome::Converged { .. }));
}

#[test]
fn a_second_fit_supersedes_the_first() {
    let mut camera = camera_at(GeoPoint::new(-3.2, 55.9), 9.0);
    let mut fitter = ViewFitter::new(harbor_points()).unwrap();

    let first = fitter
        .fit_screen(&mut camera, None, &FitOptions::padded(10.0))
        .unwrap();
    // Interrupt mid-centering with a second fit; the camera announces the
    // stopped transition's move-end.
    let second = fitter
        .fit_screen(&mut camera, None, &FitOptions::padded(30.0))
        .unwrap();
    assert!(second > first);

    camera.settle();
    let events = camera.drain_events();
    assert_eq!(events.len(), 2);

    // Oldest first: the superseded centering, then the new fit's centering.
    let CameraEvent::MoveEnd(stale) = events[0];
    assert_eq!(
        fitter.on_move_end(&mut camera, stale).unwrap(),
        FitProgress::Ignored
    );
    let CameraEvent::MoveEnd(current) = events[1];
    assert_eq!(
        fitter.on_move_end(&mut camera, current).unwrap(),
        FitProgress::Scaling
    );

    let outcome = drive(&mut fitter, &mut camera);
    assert!(matches!(outcome, FitOutcome::Converged { .. }));
}

#[test]
fn user_moves_between_fits_are_ignored() {
    let mut camera = camera_at(GeoPoint::new(-3.2, 55.9), 9.0);
    let mut fitter = ViewFitter::new(harbor_points()).unwrap();

    fitter
        .fit_screen(&mut camera, None, &FitOptions::padded(10.0))
        .unwrap();
    let outcome = drive(&mut fitter, &mut camera);
    assert!(matches!(outcome, FitOutcome::Converged { .. }));

    // A host-initiated move after completion does not resurrect the fit.
    let id = camera.ease_to(&overlook_camera::EaseTo::zoom(3.0));
    camera.settle();
    assert_eq!(
        fitter.on_move_end(&mut camera, id).unwrap(),
        FitProgress::Ignored
    );
}

#[test]
fn aligned_path_reaches_the_native_fit() {
    let mut camera = camera_at(GeoPoint::new(0.0, 0.0), 2.0);
    let mut fitter = ViewFitter::new(vec![[-3.19, 55.95], [-3.18, 55.96]]).unwrap();
    fitter.set_debug(true);

    fitter
        .fit_aligned(&mut camera, None, &FitOptions::padded(20.0))
        .unwrap();

    let (bounds, options) = &camera.fit_requests()[0];
    assert_eq!(bounds.min_lng(), -3.19);
    assert_eq!(bounds.max_lng(), -3.18);
    assert_eq!(bounds.min_lat(), 55.95);
    assert_eq!(bounds.max_lat(), 55.96);
    assert_eq!(options.padding, Padding::uniform(20.0));
    assert!(camera.zoom() > 2.0);

    // The debug outline reaches the camera on flush, as a closed ring
    // starting at the north-east corner.
    fitter.flush_overlays(&mut camera).unwrap();
    let ring = camera.source(BOUNDS_SOURCE_ID).unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], GeoPoint::new(-3.18, 55.96));
    assert_eq!(ring[4], ring[0]);
}
