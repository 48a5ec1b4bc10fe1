mod page_data;
mod route;
mod viewport;

pub use page_data::use_page;
pub use route::{provide_router, use_router, Router};
pub use viewport::use_viewport_size;
