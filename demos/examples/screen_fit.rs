// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pitched screen-space fit, end to end.
//!
//! Plans a fit over a small harbor point set, then drives the Web Mercator
//! camera one transition at a time until the engine reports convergence.
//! Set `RUST_LOG=debug` to see every transition.
//!
//! Run:
//! - `cargo run -p overlook_demos --example screen_fit`

use overlook_camera::{MapCamera, PaddingInput};
use overlook_demos::{TracingTrace, drive_to_outcome, init_tracing};
use overlook_fit::{FitOptions, ViewFitter};
use overlook_geo::GeoPoint;
use overlook_mercator::{CameraParams, MercatorCamera};

fn main() {
    init_tracing();

    let mut camera = MercatorCamera::new(CameraParams {
        center: GeoPoint::new(-3.2, 55.9),
        zoom: 9.0,
        ..CameraParams::default()
    });
    let mut fitter = ViewFitter::new(vec![
        [-3.19, 55.95],
        [-3.18, 55.96],
        [-3.21, 55.94],
        [-3.17, 55.97],
    ])
    .expect("at least two points");

    let options = FitOptions {
        padding: Some(PaddingInput::Uniform(24.0)),
        pitch: Some(45.0),
    };
    let mut trace = TracingTrace;
    fitter
        .fit_screen_with_trace(&mut camera, None, &options, &mut trace)
        .expect("fit plans cleanly");
    let outcome = drive_to_outcome(&mut fitter, &mut camera, &mut trace).expect("fit completes");

    println!("outcome: {outcome:?}");
    println!(
        "camera: center ({:.5}, {:.5}), zoom {:.4}, pitch {:.1}",
        camera.center().lng,
        camera.center().lat,
        camera.zoom(),
        camera.pitch()
    );
    for point in fitter.points() {
        let screen = camera.project(*point);
        println!(
            "  ({:.4}, {:.4}) -> ({:.1}, {:.1}) px",
            point.lng, point.lat, screen.x, screen.y
        );
    }
}
