//! Map configuration.
//!
//! Holds the constants that shape how markers are placed and how the map is
//! fitted into the viewport. Both the UI and the pure layout helpers read
//! from the same value so they can never disagree.

/// Configuration for the temples map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    /// Radius of a marker dot in image pixels.
    /// Pixel locations are offset by this so the dot is centred on its point.
    pub marker_radius: f64,
    /// Viewports narrower than this (in CSS pixels) fit the marker region
    /// instead of the whole image.
    pub narrow_breakpoint: f64,
    /// Extra room (in image pixels) added around the marker region when
    /// fitting on narrow viewports.
    pub fit_margin: f64,
    /// Marker colour used when the legend is hidden or a location has no state.
    pub neutral_color: &'static str,
    /// Route base under which the map registers its detail path (`base/:id`).
    pub base_path: &'static str,
}

/// Canonical map configuration.
pub static MAP_CONFIG: MapConfig = MapConfig {
    marker_radius: 20.0,
    narrow_breakpoint: 960.0,
    fit_margin: 48.0,
    neutral_color: "#000000",
    base_path: "/temples",
};

/// Get the active map configuration.
pub fn map_config() -> &'static MapConfig {
    &MAP_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_config_returns_canonical_value() {
        assert_eq!(map_config(), &MAP_CONFIG);
    }

    #[test]
    fn map_config_values() {
        assert_eq!(MAP_CONFIG.marker_radius, 20.0);
        assert_eq!(MAP_CONFIG.fit_margin, 48.0);
        assert!(MAP_CONFIG.narrow_breakpoint > 0.0);
        assert!(MAP_CONFIG.base_path.starts_with('/'));
    }
}
