//! Letterbox fitting of the map into the viewport.
//!
//! The map container keeps the intrinsic size of the background image; this
//! module computes the scale and translation that place it inside the
//! viewport. Wide viewports show the whole image. Narrow viewports zoom to
//! the marker region (plus a margin) and recentre on its centroid.
//!
//! The transform only affects presentation. Nothing here mutates model data.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::geometry::BoundingLimits;

/// Measured viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Returns `None` until both dimensions are finite and positive
    /// (before the first layout measurement).
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }
}

/// Responsive breakpoint class of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width < threshold {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    /// Which region the viewport should show at this breakpoint.
    pub fn policy(&self) -> FitPolicy {
        match self {
            Breakpoint::Narrow => FitPolicy::MarkerRegion,
            Breakpoint::Wide => FitPolicy::WholeImage,
        }
    }
}

/// Region of the map that must fit inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitPolicy {
    /// The entire intrinsic image rectangle
    WholeImage,
    /// The marker bounding box plus a fixed margin
    MarkerRegion,
}

/// Rectangle to fit, with its centroid as a percentage of the image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitTarget {
    pub width: f64,
    pub height: f64,
    pub centroid_x_percent: f64,
    pub centroid_y_percent: f64,
}

impl FitTarget {
    /// The whole image, centred.
    pub fn whole_image(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            centroid_x_percent: 50.0,
            centroid_y_percent: 50.0,
        }
    }

    /// Resolve the target for a policy.
    ///
    /// Degenerate limits (no markers) or a zero-sized region fall back to the
    /// whole image regardless of policy.
    pub fn resolve(
        policy: FitPolicy,
        image_width: f64,
        image_height: f64,
        limits: &BoundingLimits,
        margin: f64,
    ) -> Self {
        if policy == FitPolicy::WholeImage || !limits.is_bounded() {
            return Self::whole_image(image_width, image_height);
        }

        let width = limits.span_x() + margin;
        let height = limits.span_y() + margin;
        if width <= 0.0 || height <= 0.0 {
            return Self::whole_image(image_width, image_height);
        }

        // Limits are offsets from the image centre.
        let (cx, cy) = limits.centroid();
        Self {
            width,
            height,
            centroid_x_percent: 50.0 + cx / image_width * 100.0,
            centroid_y_percent: 50.0 + cy / image_height * 100.0,
        }
    }
}

/// Scale plus translation applied to the map container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LetterboxTransform {
    pub scale: f64,
    /// Horizontal shift in percent of the container width
    pub translate_x_percent: f64,
    /// Vertical shift in percent of the container height
    pub translate_y_percent: f64,
    /// Vertical shift in pixels that moves the fitted centre from half the
    /// scaled container height to half the viewport height. Negative when
    /// the scaled container is taller than the viewport.
    pub translate_y_pixels: f64,
}

impl LetterboxTransform {
    /// No-op transform used before the viewport is measured.
    pub const IDENTITY: LetterboxTransform = LetterboxTransform {
        scale: 1.0,
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
        translate_y_pixels: 0.0,
    };

    /// CSS `transform` value for a container anchored at its top centre
    /// (`left: 50%; top: 0; transform-origin: 50% 0`).
    pub fn to_css(&self) -> String {
        format!(
            "translate(-50%, 0) translate({}%, {}%) translateY({}px) scale({})",
            self.translate_x_percent, self.translate_y_percent, self.translate_y_pixels, self.scale
        )
    }

    /// Where an image point lands on screen under [`Self::to_css`], as
    /// `(x from the viewport's horizontal centre, y from its top)`.
    pub fn project(
        &self,
        image_width: f64,
        image_height: f64,
        x_percent: f64,
        y_percent: f64,
    ) -> (f64, f64) {
        let x = self.scale * (x_percent - 50.0) / 100.0 * image_width
            + self.translate_x_percent / 100.0 * image_width;
        let y = self.scale * y_percent / 100.0 * image_height
            + self.translate_y_percent / 100.0 * image_height
            + self.translate_y_pixels;
        (x, y)
    }
}

impl Default for LetterboxTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Fits the map container into the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    /// Width below which the marker region policy applies
    pub breakpoint: f64,
    /// Margin added around the marker region, in image pixels
    pub margin: f64,
}

impl Letterbox {
    pub fn new(breakpoint: f64, margin: f64) -> Self {
        Self { breakpoint, margin }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.narrow_breakpoint, config.fit_margin)
    }

    /// Breakpoint class for a viewport width.
    pub fn breakpoint_for(&self, viewport: ViewportSize) -> Breakpoint {
        Breakpoint::for_width(viewport.width, self.breakpoint)
    }

    /// Compute the transform using the breakpoint-selected policy.
    pub fn fit(
        &self,
        image_width: f64,
        image_height: f64,
        limits: &BoundingLimits,
        viewport: Option<ViewportSize>,
    ) -> LetterboxTransform {
        let Some(viewport) = viewport else {
            return LetterboxTransform::IDENTITY;
        };
        let policy = self.breakpoint_for(viewport).policy();
        self.fit_with_policy(policy, image_width, image_height, limits, Some(viewport))
    }

    /// Compute the transform for an explicit policy.
    pub fn fit_with_policy(
        &self,
        policy: FitPolicy,
        image_width: f64,
        image_height: f64,
        limits: &BoundingLimits,
        viewport: Option<ViewportSize>,
    ) -> LetterboxTransform {
        let Some(viewport) = viewport else {
            return LetterboxTransform::IDENTITY;
        };
        if !(image_width > 0.0 && image_height > 0.0) {
            return LetterboxTransform::IDENTITY;
        }

        let target = FitTarget::resolve(policy, image_width, image_height, limits, self.margin);
        let scale = fit_scale(target.width, target.height, viewport);

        // The container hangs from the top edge, so percentages alone put
        // the centroid at half the scaled height.
        let translate_y_pixels = (viewport.height - image_height * scale) / 2.0;

        LetterboxTransform {
            scale,
            translate_x_percent: (50.0 - target.centroid_x_percent) * scale,
            translate_y_percent: (50.0 - target.centroid_y_percent) * scale,
            translate_y_pixels,
        }
    }
}

/// Largest scale at which a `width x height` rectangle fits the viewport
/// without distortion.
pub fn fit_scale(width: f64, height: f64, viewport: ViewportSize) -> f64 {
    (viewport.width / width).min(viewport.height / height)
}
