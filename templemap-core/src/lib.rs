pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod geometry;
pub mod interaction;
pub mod letterbox;
pub mod routing;
pub mod template;
pub mod views;

pub use config::{map_config, MapConfig, MAP_CONFIG};
pub use contact::{ContactField, ContactForm, ContactSubmission, SubmitResponse, ValidationError};
pub use content::{
    ImageField, LegendEntry, Location, LocationId, MapImage, Marker, PageNode, TemplesPage,
};
pub use filter::{is_active, FilterSelection};
pub use geometry::{compute_limits, to_pixel_location, to_pixel_locations, BoundingLimits, PixelLocation};
pub use interaction::{InteractionEvent, InteractionState};
pub use letterbox::{
    fit_scale, Breakpoint, FitPolicy, FitTarget, Letterbox, LetterboxTransform, ViewportSize,
};
pub use routing::{detail_key, detail_path, focus_from_path, normalize, same_route, Route};
pub use template::Template;
pub use views::{
    classify, list_content, map_overlay, marker_color, number_of, ListContent, ListItem,
    MarkerItem, VisualClass,
};
