// templemap-ui/src/hooks/page_data.rs
use leptos::*;
use templemap_core::PageNode;

use crate::api;

/// Fetch a content node once, on mount.
///
/// The signal stays `None` while the request is pending and after a failure;
/// views render nothing until data is present.
pub fn use_page(path: String) -> ReadSignal<Option<PageNode>> {
    let (page, set_page) = create_signal(None::<PageNode>);

    spawn_local(async move {
        log::info!("Loading content {}", path);
        match api::read(&path).await {
            Ok(node) => {
                // The view may have been unmounted meanwhile.
                let _ = set_page.try_set(Some(node));
            }
            Err(e) => log::warn!("Failed to load content {}: {}", path, e),
        }
    });

    page
}
