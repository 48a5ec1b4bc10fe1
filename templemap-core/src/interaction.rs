//! Interaction state shared by the list and map views.
//!
//! One `InteractionState` lives per mounted map view. The hosting view is its
//! only mutator: UI events and route changes are turned into
//! [`InteractionEvent`]s and applied here, and both views render from the
//! result. Every transition is total.

use serde::{Deserialize, Serialize};

use crate::content::{Location, LocationId};
use crate::filter::{is_active, FilterSelection};

/// Ephemeral UI-session state of the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub hovered_id: Option<LocationId>,
    /// Location selected through navigation (`base/:id`)
    pub focused_id: Option<LocationId>,
    pub show_numbers: bool,
    pub show_images: bool,
    pub show_legend: bool,
    pub filters: FilterSelection,
    /// Expandable controls panel
    pub panel_open: bool,
    /// Location whose info popover is open
    pub popover_id: Option<LocationId>,
}

/// Everything that can change the interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    Hover(LocationId),
    Unhover,
    /// Route-derived focus target changed
    Navigate(Option<LocationId>),
    ToggleNumbers,
    ToggleImages,
    ToggleLegend,
    TogglePanel,
    SetPanelOpen(bool),
    ToggleFilter(String),
    ClearFilters,
    OpenPopover(LocationId),
    ClosePopover,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Returns true if the state changed.
    pub fn apply(&mut self, event: InteractionEvent, locations: &[Location]) -> bool {
        let before = self.clone();
        match event {
            InteractionEvent::Hover(id) => {
                if let Some(location) = locations.iter().find(|l| l.id == id) {
                    self.hover(location);
                }
            }
            InteractionEvent::Unhover => self.unhover(),
            InteractionEvent::Navigate(focus) => self.navigate(focus),
            InteractionEvent::ToggleNumbers => self.show_numbers = !self.show_numbers,
            InteractionEvent::ToggleImages => self.show_images = !self.show_images,
            InteractionEvent::ToggleLegend => self.show_legend = !self.show_legend,
            InteractionEvent::TogglePanel => self.set_panel_open(!self.panel_open),
            InteractionEvent::SetPanelOpen(open) => self.set_panel_open(open),
            InteractionEvent::ToggleFilter(tag) => {
                self.filters.toggle(&tag);
            }
            InteractionEvent::ClearFilters => self.filters.clear(),
            InteractionEvent::OpenPopover(id) => {
                if let Some(location) = locations.iter().find(|l| l.id == id) {
                    self.open_popover(location);
                }
            }
            InteractionEvent::ClosePopover => self.popover_id = None,
        }
        *self != before
    }

    /// Whether a location passes the current filters.
    pub fn is_active(&self, location: &Location) -> bool {
        is_active(&location.tags, &self.filters)
    }

    /// Hover a location. Inactive locations are inert.
    pub fn hover(&mut self, location: &Location) {
        if self.is_active(location) {
            self.hovered_id = Some(location.id);
        }
    }

    pub fn unhover(&mut self) {
        self.hovered_id = None;
    }

    /// Follow a route change. A new focus target clears hover and closes
    /// the panel with its popover; navigating back to the index clears focus.
    pub fn navigate(&mut self, focus: Option<LocationId>) {
        if self.focused_id == focus {
            return;
        }
        self.focused_id = focus;
        self.hovered_id = None;
        self.set_panel_open(false);
    }

    /// Closing the panel always closes the popover.
    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
        if !open {
            self.popover_id = None;
        }
    }

    pub fn open_popover(&mut self, location: &Location) {
        if self.is_active(location) {
            self.popover_id = Some(location.id);
        }
    }

    /// Hovered id, ignoring a location that became inactive under the
    /// current filters.
    pub fn effective_hover(&self, locations: &[Location]) -> Option<LocationId> {
        self.hovered_id.filter(|id| {
            locations
                .iter()
                .find(|l| l.id == *id)
                .is_some_and(|l| self.is_active(l))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: u64, tags: &[&str]) -> Location {
        Location {
            id: LocationId(id),
            name: format!("loc-{id}"),
            title: format!("Location {id}"),
            path: format!("/temples/loc-{id}/"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            state_color: None,
            image_url: None,
            body_html: None,
        }
    }

    fn locations() -> Vec<Location> {
        vec![
            location(1, &["A", "B"]),
            location(2, &["A"]),
            location(3, &["B"]),
        ]
    }

    #[test]
    fn defaults_are_all_off() {
        let state = InteractionState::new();
        assert_eq!(state.hovered_id, None);
        assert_eq!(state.focused_id, None);
        assert!(!state.show_numbers && !state.show_images && !state.show_legend);
        assert!(state.filters.is_empty());
        assert!(!state.panel_open);
        assert_eq!(state.popover_id, None);
    }

    #[test]
    fn hover_and_unhover_active_location() {
        let locs = locations();
        let mut state = InteractionState::new();

        assert!(state.apply(InteractionEvent::Hover(LocationId(2)), &locs));
        assert_eq!(state.hovered_id, Some(LocationId(2)));

        assert!(state.apply(InteractionEvent::Unhover, &locs));
        assert_eq!(state.hovered_id, None);
    }

    #[test]
    fn hover_on_inactive_location_is_noop() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::ToggleFilter("B".into()), &locs);
        state.apply(InteractionEvent::Hover(LocationId(3)), &locs);

        // location 2 lacks "B"
        assert!(!state.apply(InteractionEvent::Hover(LocationId(2)), &locs));
        assert_eq!(state.hovered_id, Some(LocationId(3)));
    }

    #[test]
    fn hover_on_unknown_location_is_noop() {
        let locs = locations();
        let mut state = InteractionState::new();
        assert!(!state.apply(InteractionEvent::Hover(LocationId(99)), &locs));
    }

    #[test]
    fn navigation_sets_focus_and_clears_hover_and_popover() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::Hover(LocationId(1)), &locs);
        state.apply(InteractionEvent::SetPanelOpen(true), &locs);
        state.apply(InteractionEvent::OpenPopover(LocationId(1)), &locs);

        state.apply(InteractionEvent::Navigate(Some(LocationId(2))), &locs);

        assert_eq!(state.focused_id, Some(LocationId(2)));
        assert_eq!(state.hovered_id, None);
        assert_eq!(state.popover_id, None);
        assert!(!state.panel_open);
    }

    #[test]
    fn navigating_back_clears_focus() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::Navigate(Some(LocationId(2))), &locs);
        state.apply(InteractionEvent::Navigate(None), &locs);
        assert_eq!(state.focused_id, None);
    }

    #[test]
    fn navigating_to_same_focus_keeps_hover() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::Navigate(Some(LocationId(2))), &locs);
        state.apply(InteractionEvent::Hover(LocationId(1)), &locs);

        assert!(!state.apply(InteractionEvent::Navigate(Some(LocationId(2))), &locs));
        assert_eq!(state.hovered_id, Some(LocationId(1)));
    }

    #[test]
    fn toggles_are_independent() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::ToggleNumbers, &locs);
        assert!(state.show_numbers && !state.show_images && !state.show_legend);
        state.apply(InteractionEvent::ToggleLegend, &locs);
        assert!(state.show_numbers && !state.show_images && state.show_legend);
        state.apply(InteractionEvent::ToggleImages, &locs);
        state.apply(InteractionEvent::ToggleNumbers, &locs);
        assert!(!state.show_numbers && state.show_images && state.show_legend);
    }

    #[test]
    fn closing_panel_closes_popover() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::TogglePanel, &locs);
        state.apply(InteractionEvent::OpenPopover(LocationId(3)), &locs);
        assert_eq!(state.popover_id, Some(LocationId(3)));

        state.apply(InteractionEvent::TogglePanel, &locs);
        assert!(!state.panel_open);
        assert_eq!(state.popover_id, None);
    }

    #[test]
    fn popover_requires_active_location() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::ToggleFilter("A".into()), &locs);
        state.apply(InteractionEvent::OpenPopover(LocationId(3)), &locs);
        assert_eq!(state.popover_id, None);
        state.apply(InteractionEvent::ClosePopover, &locs);
        assert_eq!(state.popover_id, None);
    }

    #[test]
    fn filter_change_keeps_hover_but_makes_it_inert() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::Hover(LocationId(2)), &locs);
        state.apply(InteractionEvent::Navigate(Some(LocationId(2))), &locs);
        state.apply(InteractionEvent::Hover(LocationId(2)), &locs);
        state.apply(InteractionEvent::ToggleFilter("B".into()), &locs);

        assert_eq!(state.hovered_id, Some(LocationId(2)));
        assert_eq!(state.focused_id, Some(LocationId(2)));
        assert_eq!(state.effective_hover(&locs), None);

        state.apply(InteractionEvent::ClearFilters, &locs);
        assert_eq!(state.effective_hover(&locs), Some(LocationId(2)));
    }

    #[test]
    fn leaving_an_inert_marker_still_clears_hover() {
        let locs = locations();
        let mut state = InteractionState::new();
        state.apply(InteractionEvent::Hover(LocationId(2)), &locs);
        state.apply(InteractionEvent::ToggleFilter("B".into()), &locs);
        assert_eq!(state.effective_hover(&locs), None);

        // The pointer leaves while the location is filtered out.
        assert!(state.apply(InteractionEvent::Unhover, &locs));
        assert_eq!(state.hovered_id, None);

        state.apply(InteractionEvent::ClearFilters, &locs);
        assert_eq!(state.effective_hover(&locs), None);
    }
}
