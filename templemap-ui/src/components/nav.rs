//! Site chrome: top navigation, logo, footer spacer and in-page sub-navigation.

use leptos::*;
use templemap_core::{ImageField, PageNode};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::components::Link;
use crate::config::SECTION_SCROLL_OFFSET;
use crate::hooks::use_viewport_size;

/// Top-level navigation built from the root node's children.
#[component]
pub fn Nav(pages: Vec<PageNode>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 right-0 z-20 p-4">
            <ul class="flex gap-6 text-sm tracking-widest">
                {pages.into_iter().map(|page| view! {
                    <li>
                        <Link
                            href=page.path.clone()
                            class="hover:text-orange-600 transition-colors"
                            active_class="text-orange-600"
                        >
                            {page.title.to_uppercase()}
                        </Link>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}

/// Small logo linking back home.
#[component]
pub fn Logo(image: Option<ImageField>) -> impl IntoView {
    image.map(|image| view! {
        <Link href="/" class="fixed top-0 left-0 z-20 p-4 block">
            <img class="h-12 w-auto" src=image.url().to_string() alt=image.alt().to_string() />
        </Link>
    })
}

/// Spacer that lets the last section scroll up to the sub-navigation.
#[component]
pub fn Footer() -> impl IntoView {
    let viewport = use_viewport_size();
    let height = move || {
        viewport
            .get()
            .map(|v| (v.height - SECTION_SCROLL_OFFSET).max(0.0))
            .unwrap_or(0.0)
    };

    view! { <footer style=move || format!("height: {}px;", height()) /> }
}

/// Sticky section links for a multi-section page.
///
/// Highlights the section currently under the navigation bar and scrolls
/// smoothly to a section on click.
#[component]
pub fn SubNav(
    /// Section anchors as `(id, title)`
    sections: Vec<(String, String)>,
) -> impl IntoView {
    let ids = store_value(sections.iter().map(|(id, _)| id.clone()).collect::<Vec<_>>());
    let (current, set_current) = create_signal(None::<String>);

    let _ = leptos_use::use_event_listener(leptos_use::use_window(), ev::scroll, move |_| {
        let next = ids.with_value(|ids| section_in_view(ids));
        if current.get_untracked() != next {
            set_current.set(next);
        }
    });

    view! {
        <nav class="sticky top-0 z-10 bg-white py-4">
            <ul class="flex justify-center gap-6 text-xs uppercase tracking-widest">
                {sections.into_iter().map(|(id, title)| {
                    let active_id = id.clone();
                    let is_current = move || current.with(|c| c.as_deref() == Some(active_id.as_str()));
                    view! {
                        <li>
                            <a
                                href=format!("#{id}")
                                class=move || if is_current() { "text-orange-600" } else { "hover:text-orange-600" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(&id);
                                }
                            >
                                {title}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

fn section_rect(id: &str) -> Option<web_sys::DomRect> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect())
}

fn section_top(id: &str) -> Option<f64> {
    section_rect(id).map(|rect| rect.top())
}

/// Section currently under the navigation bar, if any.
fn section_in_view(ids: &[String]) -> Option<String> {
    let edges = ids
        .iter()
        .filter_map(|id| section_rect(id).map(|rect| (id.clone(), rect.top(), rect.bottom())))
        .collect::<Vec<_>>();
    section_covering(&edges, SECTION_SCROLL_OFFSET)
}

/// First section spanning `offset`. Sections entirely above or below it
/// never match, so the highlight clears once the last one has scrolled past.
fn section_covering(edges: &[(String, f64, f64)], offset: f64) -> Option<String> {
    edges
        .iter()
        .find(|(_, top, bottom)| *top < offset && *bottom > offset)
        .map(|(id, _, _)| id.clone())
}

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(top) = section_top(id) else {
        log::debug!("No section #{}", id);
        return;
    };
    let y = window.scroll_y().unwrap_or(0.0) + top - SECTION_SCROLL_OFFSET;

    let options = ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    // Keep the fragment in the address bar without a jump.
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("#{id}")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(scrolled: f64) -> Vec<(String, f64, f64)> {
        // Three 500px sections starting at the top of the document.
        ["intro", "history", "visit"]
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 500.0 - scrolled;
                (id.to_string(), top, top + 500.0)
            })
            .collect()
    }

    #[test]
    fn nothing_highlighted_before_first_section_reaches_bar() {
        assert_eq!(section_covering(&edges(-200.0), SECTION_SCROLL_OFFSET), None);
    }

    #[test]
    fn section_under_bar_is_highlighted() {
        assert_eq!(
            section_covering(&edges(700.0), SECTION_SCROLL_OFFSET).as_deref(),
            Some("history")
        );
    }

    #[test]
    fn highlight_clears_after_last_section_scrolls_past() {
        let offset = SECTION_SCROLL_OFFSET;
        assert_eq!(section_covering(&edges(1200.0), offset).as_deref(), Some("visit"));
        assert_eq!(section_covering(&edges(1500.0 + offset), offset), None);
    }
}
