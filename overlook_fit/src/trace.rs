// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for the fit sequence.
//!
//! The engine does not log. Hosts that want to see what a fit is doing pass
//! a [`FitTrace`] to the `_with_trace` entry points and render the callbacks
//! however they like (the workspace demos feed them to `tracing`). For tests
//! and ad-hoc inspection, [`FitRecorder`] keeps the callbacks as a plain
//! event list.

use alloc::vec::Vec;

use overlook_camera::TransitionId;

use crate::{FitError, FitGeneration, FitOutcome, FitPhase, FitPlan};

/// A callback sink for fit lifecycle events.
///
/// Implementations must not touch the camera; they observe.
pub trait FitTrace {
    /// A plan was computed for a new fit generation.
    fn planned(&mut self, generation: FitGeneration, plan: &FitPlan);

    /// A transition was started and the engine now awaits its move-end.
    fn transition(&mut self, generation: FitGeneration, phase: FitPhase, awaiting: TransitionId);

    /// A move-end notification did not belong to the active fit.
    fn ignored(&mut self, transition: TransitionId);

    /// The active fit completed.
    fn finished(&mut self, generation: FitGeneration, outcome: FitOutcome);

    /// The active fit aborted with an error.
    fn aborted(&mut self, generation: FitGeneration, error: &FitError);
}

/// A trace that discards every event, for the untraced entry points.
pub(crate) struct NoTrace;

impl FitTrace for NoTrace {
    fn planned(&mut self, _generation: FitGeneration, _plan: &FitPlan) {}
    fn transition(&mut self, _generation: FitGeneration, _phase: FitPhase, _awaiting: TransitionId) {
    }
    fn ignored(&mut self, _transition: TransitionId) {}
    fn finished(&mut self, _generation: FitGeneration, _outcome: FitOutcome) {}
    fn aborted(&mut self, _generation: FitGeneration, _error: &FitError) {}
}

/// One recorded fit lifecycle event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FitEvent {
    /// A plan was computed.
    Planned {
        /// The new fit's generation.
        generation: FitGeneration,
    },
    /// A transition was started.
    Transition {
        /// The fit's generation.
        generation: FitGeneration,
        /// The phase now in flight.
        phase: FitPhase,
        /// The awaited transition.
        awaiting: TransitionId,
    },
    /// A notification was ignored.
    Ignored {
        /// The transition the notification carried.
        transition: TransitionId,
    },
    /// The fit completed.
    Finished {
        /// The fit's generation.
        generation: FitGeneration,
        /// How it ended.
        outcome: FitOutcome,
    },
    /// The fit aborted with an error.
    Aborted {
        /// The fit's generation.
        generation: FitGeneration,
    },
}

/// Records fit events as a flat list.
#[derive(Clone, Debug, Default)]
pub struct FitRecorder {
    events: Vec<FitEvent>,
}

impl FitRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[FitEvent] {
        &self.events
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FitTrace for FitRecorder {
    fn planned(&mut self, generation: FitGeneration, _plan: &FitPlan) {
        self.events.push(FitEvent::Planned { generation });
    }

    fn transition(&mut self, generation: FitGeneration, phase: FitPhase, awaiting: TransitionId) {
        self.events.push(FitEvent::Transition {
            generation,
            phase,
            awaiting,
        });
    }

    fn ignored(&mut self, transition: TransitionId) {
        self.events.push(FitEvent::Ignored { transition });
    }

    fn finished(&mut self, generation: FitGeneration, outcome: FitOutcome) {
        self.events.push(FitEvent::Finished { generation, outcome });
    }

    fn aborted(&mut self, generation: FitGeneration, _error: &FitError) {
        self.events.push(FitEvent::Aborted { generation });
    }
}
