pub mod collapsible_section;
pub mod contact;
pub mod control_bar;
pub mod home;
pub mod link;
pub mod list_view;
pub mod map_view;
pub mod nav;
pub mod page_view;
pub mod switch;
pub mod temples;

pub use collapsible_section::CollapsibleSection;
pub use contact::Contact;
pub use control_bar::ControlBar;
pub use home::Home;
pub use link::Link;
pub use list_view::ListView;
pub use map_view::MapView;
pub use nav::{Footer, Logo, Nav, SubNav};
pub use page_view::PageView;
pub use switch::Switch;
pub use temples::Temples;
