//! Content model.
//!
//! `PageNode` mirrors the JSON returned by the content API. Decoding is
//! lenient: every field defaults when absent and unknown fields are ignored,
//! because the content source evolves independently of this app.
//!
//! `TemplesPage` is the map subsystem's view of a node: image, markers,
//! locations and the filter/legend vocabularies, in content order.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::template::Template;

/// Identifier of a content node (and therefore of a Location).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Wire format
// =============================================================================

/// A node of the content page tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNode {
    pub id: u64,
    /// Route key and anchor id
    pub name: String,
    pub title: String,
    pub path: String,
    /// Template tag used for render dispatch
    pub template: String,
    /// Site title (home node only)
    pub text_name: Option<String>,
    pub text_description: Option<RawText>,
    pub text_editor: Option<FormattedText>,
    #[serde(deserialize_with = "bool_or_int")]
    pub checkbox_navigation: bool,
    pub image_logo: Vec<ImageField>,
    pub image_map: Vec<ImageField>,
    pub image_main: Vec<ImageField>,
    pub markers_map: Vec<MarkerField>,
    pub repeater_keywords: Vec<KeywordField>,
    pub repeater_states: Vec<StateField>,
    pub tags: Vec<String>,
    pub select_state: Option<String>,
    pub children: Vec<PageNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawText {
    pub raw: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattedText {
    pub formatted: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageField {
    pub origin: ImageOrigin,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOrigin {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "httpUrl")]
    pub http_url: String,
    pub description: String,
}

/// Marker position as percentages of the map image, pointing at a child page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerField {
    pub x: f64,
    pub y: f64,
    pub page: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordField {
    pub tags: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateField {
    pub color: String,
    pub label: String,
}

/// Checkbox fields come back as `true`/`false` or `1`/`0` depending on the
/// content backend version.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
        Flag::Null(()) => false,
    })
}

impl PageNode {
    /// Parse the node's template tag.
    pub fn template(&self) -> Template {
        Template::parse(&self.template)
    }

    /// Rich-text HTML body, if any.
    pub fn body_html(&self) -> Option<&str> {
        self.text_editor
            .as_ref()
            .map(|t| t.formatted.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Description split into display lines.
    pub fn description_lines(&self) -> Vec<&str> {
        self.text_description
            .as_ref()
            .map(|d| d.raw.split('\n').collect())
            .unwrap_or_default()
    }
}

impl ImageField {
    pub fn url(&self) -> &str {
        &self.origin.http_url
    }

    pub fn alt(&self) -> &str {
        &self.origin.description
    }
}

// =============================================================================
// Domain model
// =============================================================================

/// Background image of the map. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapImage {
    pub width: f64,
    pub height: f64,
    pub url: String,
}

/// A point on the map image in percent (0-100) of its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub percent_x: f64,
    pub percent_y: f64,
    pub location_id: LocationId,
}

/// A navigable entry shown in both the list and the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Route key matched against the `:id` path segment
    pub name: String,
    pub title: String,
    pub path: String,
    /// Filter keywords in content order. Duplicates are kept as received.
    pub tags: Vec<String>,
    /// Legend colour resolved from the location's state
    pub state_color: Option<String>,
    pub image_url: Option<String>,
    /// Detail content shown inline when the location is focused
    pub body_html: Option<String>,
}

/// One legend row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

/// Everything the map subsystem needs from a `temples` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplesPage {
    pub image: Option<MapImage>,
    pub markers: Vec<Marker>,
    pub locations: Vec<Location>,
    /// Filter vocabulary, deduplicated, in content order
    pub keywords: Vec<String>,
    pub legend: Vec<LegendEntry>,
}

impl TemplesPage {
    /// Build the map model from a node fetched with its children inline.
    pub fn from_node(node: &PageNode) -> Self {
        let image = node.image_map.first().map(|img| MapImage {
            width: img.origin.width,
            height: img.origin.height,
            url: img.origin.http_url.clone(),
        });

        let markers = node
            .markers_map
            .iter()
            .map(|m| Marker {
                percent_x: m.x,
                percent_y: m.y,
                location_id: LocationId(m.page),
            })
            .collect();

        let legend: Vec<LegendEntry> = node
            .repeater_states
            .iter()
            .map(|s| LegendEntry {
                color: s.color.clone(),
                label: s.label.clone(),
            })
            .collect();

        let locations = node
            .children
            .iter()
            .map(|child| Location {
                id: LocationId(child.id),
                name: child.name.clone(),
                title: child.title.clone(),
                path: child.path.clone(),
                tags: child.tags.clone(),
                state_color: child.select_state.as_ref().and_then(|state| {
                    legend
                        .iter()
                        .find(|entry| &entry.label == state)
                        .map(|entry| entry.color.clone())
                }),
                image_url: child.image_main.first().map(|img| img.url().to_string()),
                body_html: child.body_html().map(str::to_string),
            })
            .collect();

        let mut keywords: Vec<String> = Vec::new();
        for tag in node
            .repeater_keywords
            .iter()
            .flat_map(|k| k.tags.split(','))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            if !keywords.iter().any(|k| k == tag) {
                keywords.push(tag.to_string());
            }
        }

        Self {
            image,
            markers,
            locations,
            keywords,
            legend,
        }
    }

    /// Look up a location by id.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLES_JSON: &str = r##"{
        "id": 7,
        "name": "temples",
        "title": "Temples",
        "path": "/temples/",
        "template": "temples",
        "image_map": [{"origin": {"width": 800, "height": 600, "httpUrl": "/map.jpg", "description": "map"}}],
        "markers_map": [{"x": 10, "y": 10, "page": 11}, {"x": 90, "y": 90, "page": 12}],
        "repeater_keywords": [{"tags": "Ruin, Active"}, {"tags": "Ruin"}],
        "repeater_states": [{"color": "#ff0000", "label": "ruined"}],
        "children": [
            {"id": 11, "name": "karnak", "title": "Karnak", "path": "/temples/karnak/",
             "template": "temple", "tags": ["Ruin"], "select_state": "ruined",
             "text_editor": {"formatted": "<p>Karnak</p>"}},
            {"id": 12, "name": "luxor", "title": "Luxor", "path": "/temples/luxor/",
             "template": "temple", "tags": [], "unexpected": 3}
        ]
    }"##;

    fn temples_node() -> PageNode {
        serde_json::from_str(TEMPLES_JSON).unwrap()
    }

    #[test]
    fn missing_fields_default() {
        let node: PageNode = serde_json::from_str("{}").unwrap();
        assert_eq!(node.id, 0);
        assert!(node.children.is_empty());
        assert!(!node.checkbox_navigation);
        assert_eq!(node.template(), Template::Unknown(String::new()));
    }

    #[test]
    fn checkbox_accepts_integers() {
        let node: PageNode = serde_json::from_str(r#"{"checkbox_navigation": 1}"#).unwrap();
        assert!(node.checkbox_navigation);
        let node: PageNode = serde_json::from_str(r#"{"checkbox_navigation": 0}"#).unwrap();
        assert!(!node.checkbox_navigation);
        let node: PageNode = serde_json::from_str(r#"{"checkbox_navigation": null}"#).unwrap();
        assert!(!node.checkbox_navigation);
    }

    #[test]
    fn description_lines_split_on_newline() {
        let node: PageNode =
            serde_json::from_str(r#"{"text_description": {"raw": "one\ntwo"}}"#).unwrap();
        assert_eq!(node.description_lines(), vec!["one", "two"]);
    }

    #[test]
    fn from_node_keeps_content_order() {
        let page = TemplesPage::from_node(&temples_node());

        assert_eq!(page.locations.len(), 2);
        assert_eq!(page.locations[0].name, "karnak");
        assert_eq!(page.locations[1].name, "luxor");
        assert_eq!(page.markers[0].location_id, LocationId(11));
        assert_eq!(page.markers[1].percent_x, 90.0);
    }

    #[test]
    fn from_node_reads_map_image() {
        let page = TemplesPage::from_node(&temples_node());
        let image = page.image.unwrap();
        assert_eq!(image.width, 800.0);
        assert_eq!(image.height, 600.0);
        assert_eq!(image.url, "/map.jpg");
    }

    #[test]
    fn from_node_resolves_state_colour_from_legend() {
        let page = TemplesPage::from_node(&temples_node());
        assert_eq!(page.locations[0].state_color.as_deref(), Some("#ff0000"));
        assert_eq!(page.locations[1].state_color, None);
    }

    #[test]
    fn from_node_flattens_and_dedups_keywords() {
        let page = TemplesPage::from_node(&temples_node());
        assert_eq!(page.keywords, vec!["Ruin", "Active"]);
    }

    #[test]
    fn from_node_copies_detail_content() {
        let page = TemplesPage::from_node(&temples_node());
        assert_eq!(
            page.location(LocationId(11)).unwrap().body_html.as_deref(),
            Some("<p>Karnak</p>")
        );
        assert_eq!(page.location(LocationId(12)).unwrap().body_html, None);
    }

    #[test]
    fn from_node_without_map_image() {
        let page = TemplesPage::from_node(&PageNode::default());
        assert!(page.image.is_none());
        assert!(page.markers.is_empty());
    }
}
