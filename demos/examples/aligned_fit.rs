// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aligned-bounds fit with the debug overlay.
//!
//! Uses the camera's native geographic fit (valid on an untilted camera)
//! and flushes the queued bounds outline into the camera's overlay
//! registry.
//!
//! Run:
//! - `cargo run -p overlook_demos --example aligned_fit`

use overlook_camera::MapCamera;
use overlook_demos::init_tracing;
use overlook_fit::{BOUNDS_SOURCE_ID, FitOptions, ViewFitter};
use overlook_mercator::{CameraParams, MercatorCamera};

fn main() {
    init_tracing();

    let mut camera = MercatorCamera::new(CameraParams::default());
    let mut fitter =
        ViewFitter::new(vec![[-3.19, 55.95], [-3.18, 55.96]]).expect("at least two points");
    fitter.set_debug(true);

    fitter
        .fit_aligned(&mut camera, None, &FitOptions::padded(20.0))
        .expect("stored points are valid");
    println!(
        "camera after native fit: center ({:.5}, {:.5}), zoom {:.4}",
        camera.center().lng,
        camera.center().lat,
        camera.zoom()
    );

    let applied = fitter
        .flush_overlays(&mut camera)
        .expect("overlay ids are fresh");
    println!("overlays applied: {applied}");
    let ring = camera.source(BOUNDS_SOURCE_ID).expect("ring registered");
    for corner in ring {
        println!("  ring point ({:.4}, {:.4})", corner.lng, corner.lat);
    }
}
