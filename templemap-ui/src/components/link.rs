//! Internal link that navigates through the router instead of reloading.

use leptos::*;
use templemap_core::routing::with_base;

use crate::config::base_path;
use crate::hooks::use_router;

#[component]
pub fn Link(
    /// App path to navigate to
    #[prop(into)]
    href: String,
    /// Classes always applied
    #[prop(optional, into)]
    class: String,
    /// Extra class applied while the current path is at or below `href`
    #[prop(optional, into)]
    active_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = store_value(href.clone());

    let base_class = class;
    let class = move || match &active_class {
        Some(active) if target.with_value(|t| router.is_active(t)) => {
            format!("{base_class} {active}")
        }
        _ => base_class.clone(),
    };

    view! {
        <a
            href=with_base(&href, base_path())
            class=class
            on:click=move |ev| {
                // Let modified clicks open new tabs
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                target.with_value(|t| router.navigate(t));
            }
        >
            {children()}
        </a>
    }
}
