// templemap-ui/src/hooks/route.rs
//!
//! Browser routing on top of the History API.
//! The current app path (deployment base stripped, normalised) is exposed as a
//! signal. `popstate` keeps it in sync with back/forward navigation.

use leptos::*;
use templemap_core::routing::{is_within, normalize, same_route, strip_base, with_base};
use wasm_bindgen::JsValue;

use crate::config::base_path;

/// Router handle shared through context.
#[derive(Clone, Copy, Debug)]
pub struct Router {
    /// Current app path, e.g. `/temples/karnak`
    pub path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl Router {
    /// Navigate to an app path, adding a history entry.
    pub fn navigate(&self, path: &str) {
        self.change(path, false);
    }

    /// Navigate without adding a history entry.
    pub fn replace(&self, path: &str) {
        self.change(path, true);
    }

    /// Whether the current path is `path` or lies below it.
    pub fn is_active(&self, path: &str) -> bool {
        self.path.with(|current| is_within(current, path))
    }

    /// Whether the current path is exactly `path`.
    pub fn is_current(&self, path: &str) -> bool {
        self.path.with(|current| same_route(current, path))
    }

    fn change(&self, path: &str, replace: bool) {
        let path = normalize(path);
        if self.path.get_untracked() == path {
            return;
        }

        if let Some(window) = web_sys::window() {
            let url = with_base(&path, base_path());
            if let Ok(history) = window.history() {
                let result = if replace {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
                } else {
                    history.push_state_with_url(&JsValue::NULL, "", Some(&url))
                };
                if let Err(e) = result {
                    log::warn!("Failed to update history: {:?}", e);
                }
            }
            if !replace {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }

        log::debug!("Navigate to {}", path);
        self.set_path.set(path);
    }
}

/// App path of the current browser location.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| strip_base(&p, base_path()))
        .unwrap_or_else(|| "/".to_string())
}

/// Create the router and provide it to descendants.
pub fn provide_router() -> Router {
    let (path, set_path) = create_signal(current_path());

    let _ = leptos_use::use_event_listener(leptos_use::use_window(), ev::popstate, move |_| {
        set_path.set(current_path());
    });

    let router = Router { path, set_path };
    provide_context(router);
    router
}

/// Router provided by an ancestor.
pub fn use_router() -> Router {
    expect_context::<Router>()
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn navigate_updates_signal_and_history() {
        let runtime = create_runtime();
        let router = provide_router();

        router.navigate("/temples/karnak/");

        assert_eq!(router.path.get_untracked(), "/temples/karnak");
        let pathname = web_sys::window().unwrap().location().pathname().unwrap();
        assert!(pathname.ends_with("/temples/karnak"));
        assert!(router.is_active("/temples"));
        assert!(!router.is_current("/temples"));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn popstate_resyncs_path() {
        let runtime = create_runtime();
        let router = provide_router();
        TimeoutFuture::new(10).await;

        let window = web_sys::window().unwrap();
        let url = with_base("/contact", base_path());
        window
            .history()
            .unwrap()
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
            .unwrap();
        let event = web_sys::PopStateEvent::new("popstate").unwrap();
        let _ = window.dispatch_event(&event);

        TimeoutFuture::new(10).await;
        assert_eq!(router.path.get_untracked(), "/contact");

        runtime.dispose();
    }
}
