//! Marker geometry.
//!
//! Markers are stored as percentages of the map image. The overlay positions
//! each dot relative to the image centre, so percentages are converted to a
//! centred pixel offset, shifted by the marker radius so the dot's centre
//! (not its corner) sits on the point.

use serde::{Deserialize, Serialize};

use crate::content::{LocationId, MapImage, Marker};

/// Marker converted into a centred pixel offset on the map image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelLocation {
    pub x: f64,
    pub y: f64,
    pub location_id: LocationId,
}

/// Axis-aligned bounding box over a set of pixel locations.
///
/// An empty set yields [`BoundingLimits::EMPTY`], which is degenerate
/// (`min_x > max_x`). Check [`BoundingLimits::is_bounded`] before using spans.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingLimits {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingLimits {
    /// Identity element of the min/max reduction.
    pub const EMPTY: BoundingLimits = BoundingLimits {
        min_x: 100.0,
        max_x: 0.0,
        min_y: 100.0,
        max_y: 0.0,
    };

    /// Limits of a single point.
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow the box to include a point.
    pub fn include(&self, x: f64, y: f64) -> Self {
        Self {
            min_x: self.min_x.min(x),
            max_x: self.max_x.max(x),
            min_y: self.min_y.min(y),
            max_y: self.max_y.max(y),
        }
    }

    /// True when the box contains at least one point on both axes.
    pub fn is_bounded(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn span_y(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Centre of the box, `(min + span / 2)` per axis.
    pub fn centroid(&self) -> (f64, f64) {
        (
            self.min_x + self.span_x() / 2.0,
            self.min_y + self.span_y() / 2.0,
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Convert one marker into a centred pixel offset.
///
/// `x = (percent_x / 100) * width - width / 2 - radius`, same for `y`.
pub fn to_pixel_location(marker: &Marker, image: &MapImage, marker_radius: f64) -> PixelLocation {
    PixelLocation {
        x: (marker.percent_x / 100.0) * image.width - image.width / 2.0 - marker_radius,
        y: (marker.percent_y / 100.0) * image.height - image.height / 2.0 - marker_radius,
        location_id: marker.location_id,
    }
}

/// Convert all markers, preserving order.
pub fn to_pixel_locations(
    markers: &[Marker],
    image: &MapImage,
    marker_radius: f64,
) -> Vec<PixelLocation> {
    markers
        .iter()
        .map(|m| to_pixel_location(m, image, marker_radius))
        .collect()
}

/// Bounding box of a set of pixel locations.
///
/// The reduction starts from the first location so the result is tight;
/// an empty set short-circuits to the degenerate [`BoundingLimits::EMPTY`].
pub fn compute_limits(locations: &[PixelLocation]) -> BoundingLimits {
    let Some((first, rest)) = locations.split_first() else {
        return BoundingLimits::EMPTY;
    };

    rest.iter()
        .fold(BoundingLimits::point(first.x, first.y), |limits, p| {
            limits.include(p.x, p.y)
        })
}
