// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A rectangular region in 2d space.

use derive_builder::Builder;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::QuadtreeError;

/// An axis-aligned rectangle, defined by its center and half-extents.
///
/// Lightweight, should be passed by value.
///
/// **NB:** `contains` uses closed intervals (a point on the boundary is
/// inside); `intersects` uses strict inequalities (two rectangles that only
/// touch edges do not intersect). This asymmetry is load-bearing: placement
/// predicates typically test `contains` while subtree pruning uses
/// `intersects`, and the two must disagree at the boundary for that pruning
/// to be safe.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Rectangle {
    cx: f64,
    cy: f64,
    hw: f64,
    hh: f64,
}

impl RectangleBuilder {
    fn validate(&self) -> Result<(), String> {
        for coord in [self.cx, self.cy, self.hw, self.hh].into_iter().flatten() {
            if !coord.is_finite() {
                return Err("Rectangle fields must be finite.".to_string());
            }
        }
        if let Some(hw) = self.hw {
            if hw < 0.0 {
                return Err("Rectangle half-width may not be negative.".to_string());
            }
        }
        if let Some(hh) = self.hh {
            if hh < 0.0 {
                return Err("Rectangle half-height may not be negative.".to_string());
            }
        }
        Ok(())
    }
}

impl Rectangle {
    /// Builds a rectangle centered at `(cx, cy)` with half-extents `(hw, hh)`.
    pub fn new(cx: f64, cy: f64, hw: f64, hh: f64) -> Result<Self, QuadtreeError> {
        RectangleBuilder::default()
            .cx(cx)
            .cy(cy)
            .hw(hw)
            .hh(hh)
            .build()
            .map_err(QuadtreeError::InvalidRectangle)
    }

    /// Builds a rectangle from a top-left origin and a full width/height.
    pub(crate) fn from_origin(
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, QuadtreeError> {
        Self::new(
            origin_x + width / 2.0,
            origin_y + height / 2.0,
            width / 2.0,
            height / 2.0,
        )
    }

    pub fn cx(&self) -> f64 {
        self.cx
    }

    pub fn cy(&self) -> f64 {
        self.cy
    }

    pub fn hw(&self) -> f64 {
        self.hw
    }

    pub fn hh(&self) -> f64 {
        self.hh
    }

    /// Whether the closed box contains `(x, y)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.cx - self.hw..=self.cx + self.hw).contains(&x)
            && (self.cy - self.hh..=self.cy + self.hh).contains(&y)
    }

    /// Whether this rectangle and `other` overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        (self.cx - other.cx).abs() < self.hw + other.hw
            && (self.cy - other.cy).abs() < self.hh + other.hh
    }

    /// The four child quadrants, in fixed NW, NE, SW, SE order.
    ///
    /// +y is south (screen convention, per the reference this crate is
    /// modeled on): NW is the small-x/small-y quadrant, SE is the
    /// large-x/large-y quadrant.
    pub(crate) fn quadrants(&self) -> [Rectangle; 4] {
        let hw = self.hw / 2.0;
        let hh = self.hh / 2.0;
        [
            Rectangle {
                cx: self.cx - hw,
                cy: self.cy - hh,
                hw,
                hh,
            }, // NW
            Rectangle {
                cx: self.cx + hw,
                cy: self.cy - hh,
                hw,
                hh,
            }, // NE
            Rectangle {
                cx: self.cx - hw,
                cy: self.cy + hh,
                hw,
                hh,
            }, // SW
            Rectangle {
                cx: self.cx + hw,
                cy: self.cy + hh,
                hw,
                hh,
            }, // SE
        ]
    }
}
