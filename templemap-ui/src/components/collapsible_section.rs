//! Collapsible panel with a chevron toggle.

use leptos::*;

/// Collapsible section whose open state is owned by the caller.
#[component]
pub fn CollapsibleSection(
    /// Accessible label of the toggle button
    #[prop(into)]
    title: String,
    /// Expanded state
    #[prop(into)]
    expanded: Signal<bool>,
    /// Called when the toggle is clicked
    on_toggle: Callback<()>,
    /// Child content
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200">
            <div class="flex justify-end py-4">
                <button
                    class="p-2 hover:bg-transparent"
                    title=title
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| on_toggle.call(())
                >
                    <span class=move || format!(
                        "block transition-transform duration-150 {}",
                        if expanded.get() { "rotate-180" } else { "rotate-0" }
                    )>
                        <ChevronDownIcon />
                    </span>
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="border-t border-gray-200 p-4 flex flex-wrap justify-end gap-4 transition-opacity duration-1000">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChevronDownIcon() -> impl IntoView {
    view! {
        <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="m6 9 6 6 6-6"/>
        </svg>
    }
}
