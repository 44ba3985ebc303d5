// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug overlay styling and camera-side errors.

use alloc::string::String;
use core::fmt;

use kurbo::{Cap, Join};
use peniko::Color;

/// Stroke style for a debug overlay line layer.
///
/// The default matches the fitting engine's bounds outline: an opaque red
/// stroke, four pixels wide, with round joins and caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f64,
    /// How segment joins are drawn.
    pub join: Join,
    /// How line ends are drawn.
    pub cap: Cap,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0xff, 0x00, 0x00),
            width: 4.0,
            join: Join::Round,
            cap: Cap::Round,
        }
    }
}

/// Errors reported by a camera when registering overlays.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CameraError {
    /// A source or layer with this id is already registered.
    DuplicateOverlayId {
        /// The id that was registered twice.
        id: String,
    },
    /// A layer referenced a source id that has not been registered.
    MissingOverlaySource {
        /// The source id the layer asked for.
        source: String,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateOverlayId { id } => {
                write!(f, "overlay id {id:?} is already registered")
            }
            Self::MissingOverlaySource { source } => {
                write!(f, "overlay source {source:?} has not been registered")
            }
        }
    }
}

impl core::error::Error for CameraError {}
