// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared harness for the Overlook demo binaries: a `tracing`-backed fit
//! trace and a loop that drives the Web Mercator camera to an outcome.

use overlook_camera::{CameraEvent, TransitionId};
use overlook_fit::{
    FitError, FitGeneration, FitOutcome, FitPhase, FitPlan, FitProgress, FitTrace, ViewFitter,
};
use overlook_mercator::MercatorCamera;

/// A [`FitTrace`] that forwards fit lifecycle events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

impl FitTrace for TracingTrace {
    fn planned(&mut self, generation: FitGeneration, plan: &FitPlan) {
        tracing::info!(
            generation = generation.0,
            effective_width = plan.effective_size().width,
            effective_height = plan.effective_size().height,
            pitch = plan.pitch(),
            "fit planned"
        );
    }

    fn transition(&mut self, generation: FitGeneration, phase: FitPhase, awaiting: TransitionId) {
        tracing::debug!(
            generation = generation.0,
            ?phase,
            awaiting = awaiting.0,
            "transition started"
        );
    }

    fn ignored(&mut self, transition: TransitionId) {
        tracing::debug!(transition = transition.0, "move-end ignored");
    }

    fn finished(&mut self, generation: FitGeneration, outcome: FitOutcome) {
        tracing::info!(generation = generation.0, ?outcome, "fit finished");
    }

    fn aborted(&mut self, generation: FitGeneration, error: &FitError) {
        tracing::warn!(generation = generation.0, %error, "fit aborted");
    }
}

/// Installs a stderr `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Settles camera transitions and forwards move-ends until the fit reports
/// an outcome.
///
/// # Errors
///
/// Propagates any [`FitError`] the engine reports mid-sequence.
///
/// # Panics
///
/// Panics if the fit has not finished after 200 transitions, which means
/// the camera and the fitter lost track of each other.
pub fn drive_to_outcome(
    fitter: &mut ViewFitter,
    camera: &mut MercatorCamera,
    trace: &mut impl FitTrace,
) -> Result<FitOutcome, FitError> {
    for _ in 0..200 {
        camera.settle();
        for event in camera.drain_events() {
            let CameraEvent::MoveEnd(id) = event;
            if let FitProgress::Done(outcome) = fitter.on_move_end_with_trace(camera, id, trace)? {
                return Ok(outcome);
            }
        }
    }
    panic!("fit did not finish within 200 transitions");
}
