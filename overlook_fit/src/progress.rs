// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit lifecycle reporting.

use kurbo::{Size, Vec2};
use overlook_camera::TransitionId;

/// Identifies one fit from request to completion.
///
/// Each call to [`ViewFitter::fit_screen`] starts a new generation and
/// supersedes the previous one; notifications that belong to a superseded
/// generation are answered with [`FitProgress::Ignored`].
///
/// [`ViewFitter::fit_screen`]: crate::ViewFitter::fit_screen
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FitGeneration(pub u64);

/// Which transition of the fit sequence is currently in flight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FitPhase {
    /// Easing to the target center, pitch, and offset.
    Centering,
    /// Easing to the aspect-derived zoom.
    Scaling,
    /// Nudging zoom outward; `step` counts started nudges.
    Refining {
        /// 1-based count of refinement transitions started so far.
        step: u32,
    },
}

/// How a completed fit ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FitOutcome {
    /// The box fits the padded viewport.
    Converged {
        /// How many refinement nudges were needed.
        refine_steps: u32,
    },
    /// The refinement bound was reached with the box still overflowing.
    MaxStepsReached {
        /// How many refinement nudges ran (the bound).
        refine_steps: u32,
    },
}

/// What the engine did with one move-end notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FitProgress {
    /// The notification did not belong to the active fit; nothing happened.
    ///
    /// Raised for superseded generations, for transitions the engine is not
    /// waiting on (such as the move-end a camera emits when `stop`
    /// interrupts it), and when no fit is active at all.
    Ignored,
    /// Centering completed; the scaling transition is now in flight.
    Scaling,
    /// A refinement transition is now in flight.
    Refining {
        /// 1-based count of refinement transitions started so far.
        step: u32,
    },
    /// The fit completed and the engine is idle again.
    Done(FitOutcome),
}

/// A snapshot of the in-flight fit, for diagnostics.
///
/// Returned by [`ViewFitter::active_fit`]; values are frozen at planning
/// time except for `phase` and `awaiting`.
///
/// [`ViewFitter::active_fit`]: crate::ViewFitter::active_fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitDebugInfo {
    /// The fit's generation token.
    pub generation: FitGeneration,
    /// The phase currently in flight.
    pub phase: FitPhase,
    /// The transition whose move-end the engine is waiting for.
    pub awaiting: TransitionId,
    /// The pitch the fit eases to.
    pub pitch: f64,
    /// Container size minus padding.
    pub effective_size: Size,
    /// Offset passed to the centering transition.
    pub offset: Vec2,
    /// Padded viewport width over height.
    pub viewport_aspect: f64,
    /// Measured box width over height.
    pub bounds_aspect: f64,
}
