//! Shared render policy for the list and map views.
//!
//! Both views derive what they draw from the same functions here, so for any
//! location they always agree on its visual class, number and visibility.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::content::{Location, LocationId};
use crate::geometry::PixelLocation;
use crate::interaction::InteractionState;

/// Visual state of a location, identical in both views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualClass {
    ActiveDefault,
    ActiveHovered,
    /// Filtered out: shown dimmed and inert
    Inactive,
}

impl VisualClass {
    /// CSS class name for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            VisualClass::ActiveDefault => "active",
            VisualClass::ActiveHovered => "active hovered",
            VisualClass::Inactive => "inactive",
        }
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self, VisualClass::Inactive)
    }
}

/// Visual class of a location under the current state.
///
/// A hovered or focused location that no longer passes the filters is
/// `Inactive`.
pub fn classify(location: &Location, state: &InteractionState) -> VisualClass {
    if !state.is_active(location) {
        return VisualClass::Inactive;
    }
    let id = Some(location.id);
    if state.hovered_id == id || state.focused_id == id {
        VisualClass::ActiveHovered
    } else {
        VisualClass::ActiveDefault
    }
}

/// 1-based display number: the location's position in content order.
pub fn number_of(locations: &[Location], id: LocationId) -> Option<usize> {
    locations.iter().position(|l| l.id == id).map(|i| i + 1)
}

/// Marker fill colour. The legend switches from neutral to state colours.
pub fn marker_color<'a>(location: &'a Location, state: &InteractionState, config: &'a MapConfig) -> &'a str {
    if state.show_legend {
        location
            .state_color
            .as_deref()
            .unwrap_or(config.neutral_color)
    } else {
        config.neutral_color
    }
}

/// One dot on the map overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerItem {
    pub location: Location,
    pub pixel: PixelLocation,
    pub number: usize,
    pub class: VisualClass,
    pub color: String,
    pub show_number: bool,
    pub popover_open: bool,
}

/// Dots to draw, in marker order.
///
/// Markers without a matching location are skipped. While a location is
/// focused only its own marker is drawn, regardless of filters.
pub fn map_overlay(
    locations: &[Location],
    pixels: &[PixelLocation],
    state: &InteractionState,
    config: &MapConfig,
) -> Vec<MarkerItem> {
    pixels
        .iter()
        .filter(|p| state.focused_id.map_or(true, |f| f == p.location_id))
        .filter_map(|p| {
            let number = number_of(locations, p.location_id)?;
            let location = &locations[number - 1];
            Some(MarkerItem {
                location: location.clone(),
                pixel: *p,
                number,
                class: classify(location, state),
                color: marker_color(location, state, config).to_string(),
                show_number: state.show_numbers,
                popover_open: state.popover_id == Some(location.id),
            })
        })
        .collect()
}

/// One row of the location index.
#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub location: Location,
    pub number: usize,
    pub class: VisualClass,
    pub show_number: bool,
    /// Thumbnail, present only when images are switched on
    pub image_url: Option<String>,
}

/// What the list shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListContent {
    /// Every location, in content order
    Index(Vec<ListItem>),
    /// The focused location's own detail content
    Detail(ListItem),
}

/// List content under the current state.
pub fn list_content(locations: &[Location], state: &InteractionState) -> ListContent {
    let item = |(i, location): (usize, &Location)| ListItem {
        location: location.clone(),
        number: i + 1,
        class: classify(location, state),
        show_number: state.show_numbers,
        image_url: location
            .image_url
            .clone()
            .filter(|_| state.show_images),
    };

    if let Some(focused) = state.focused_id {
        if let Some(found) = locations.iter().enumerate().find(|(_, l)| l.id == focused) {
            return ListContent::Detail(item(found));
        }
    }

    ListContent::Index(locations.iter().enumerate().map(item).collect())
}
