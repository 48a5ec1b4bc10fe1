use leptos::*;

/// Labelled on/off switch.
#[component]
pub fn Switch(
    /// Current state
    #[prop(into)]
    active: Signal<bool>,
    #[prop(into)]
    label: String,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="flex items-center gap-2 text-sm uppercase tracking-wider"
            role="switch"
            aria-checked=move || active.get().to_string()
            on:click=move |_| on_click.call(())
        >
            <span>{label}</span>
            <span class=move || format!(
                "relative inline-block w-8 h-4 rounded-full transition-colors {}",
                if active.get() { "bg-orange-600" } else { "bg-gray-300" }
            )>
                <span class=move || format!(
                    "absolute top-0.5 w-3 h-3 rounded-full bg-white transition-all {}",
                    if active.get() { "left-4" } else { "left-0.5" }
                ) />
            </span>
        </button>
    }
}
