// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container edge padding.

/// Space reserved around the edges of the map container, in logical pixels.
///
/// Padded fits keep their content out of this band, so a host can overlay UI
/// chrome along an edge without covering the fitted geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Padding along the top edge.
    pub top: f64,
    /// Padding along the right edge.
    pub right: f64,
    /// Padding along the bottom edge.
    pub bottom: f64,
    /// Padding along the left edge.
    pub left: f64,
}

impl Padding {
    /// Padding with the given value on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Padding with per-edge values, in CSS order.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The total padding along the horizontal axis.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// The total padding along the vertical axis.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Padding as callers provide it: one value for every edge, or per edge.
///
/// This mirrors how interactive map APIs accept padding and collapses to a
/// plain [`Padding`] via [`resolve`].
///
/// [`resolve`]: PaddingInput::resolve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddingInput {
    /// The same padding on all four edges.
    Uniform(f64),
    /// Separate padding per edge.
    PerEdge(Padding),
}

impl PaddingInput {
    /// Expands this input into per-edge padding.
    #[must_use]
    pub fn resolve(self) -> Padding {
        match self {
            Self::Uniform(value) => Padding::uniform(value),
            Self::PerEdge(padding) => padding,
        }
    }
}

impl From<f64> for PaddingInput {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Padding> for PaddingInput {
    fn from(padding: Padding) -> Self {
        Self::PerEdge(padding)
    }
}
