// templemap-ui/src/components/control_bar.rs
use crate::components::{CollapsibleSection, Switch};
use leptos::*;
use rust_i18n::t;
use templemap_core::{InteractionEvent, InteractionState, LegendEntry};

/// Sticky bar with the expandable map controls: display switches, tag
/// filters and the state legend.
#[component]
pub fn ControlBar(
    #[prop(into)] state: Signal<InteractionState>,
    /// Filter vocabulary
    keywords: Vec<String>,
    legend: Vec<LegendEntry>,
    dispatch: Callback<InteractionEvent>,
) -> impl IntoView {
    let panel_open = Signal::derive(move || state.with(|s| s.panel_open));
    let show_numbers = Signal::derive(move || state.with(|s| s.show_numbers));
    let show_images = Signal::derive(move || state.with(|s| s.show_images));
    let show_legend = Signal::derive(move || state.with(|s| s.show_legend));

    let keywords = store_value(keywords);
    let legend = store_value(legend);

    view! {
        <div class="sticky top-0 bg-white z-10">
            <CollapsibleSection
                title=t!("controls.options").to_string()
                expanded=panel_open
                on_toggle=Callback::new(move |_| dispatch.call(InteractionEvent::TogglePanel))
            >
                <Switch
                    label=t!("controls.numbers").to_string()
                    active=show_numbers
                    on_click=Callback::new(move |_| dispatch.call(InteractionEvent::ToggleNumbers))
                />
                <Switch
                    label=t!("controls.images").to_string()
                    active=show_images
                    on_click=Callback::new(move |_| dispatch.call(InteractionEvent::ToggleImages))
                />
                <Switch
                    label=t!("controls.legend").to_string()
                    active=show_legend
                    on_click=Callback::new(move |_| dispatch.call(InteractionEvent::ToggleLegend))
                />

                <div class="w-full flex flex-wrap justify-end gap-2">
                    {keywords.get_value().into_iter().map(|tag| {
                        let selected_tag = tag.clone();
                        let click_tag = tag.clone();
                        let selected = move || state.with(|s| s.filters.contains(&selected_tag));
                        view! {
                            <button
                                class=move || format!(
                                    "px-2 py-1 text-xs uppercase border rounded-full transition-colors {}",
                                    if selected() { "border-orange-600 text-orange-600" } else { "border-gray-300" }
                                )
                                on:click=move |_| dispatch.call(InteractionEvent::ToggleFilter(click_tag.clone()))
                            >
                                {tag}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || show_legend.get()>
                    <ul class="w-full flex flex-wrap justify-end gap-4 text-xs">
                        {legend.get_value().into_iter().map(|entry| view! {
                            <li class="flex items-center gap-1">
                                <span
                                    class="inline-block w-3 h-3 rounded-full"
                                    style=format!("background-color: {};", entry.color)
                                />
                                {entry.label}
                            </li>
                        }).collect_view()}
                    </ul>
                </Show>
            </CollapsibleSection>
        </div>
    }
}
