//! Map image with the marker overlay.
//!
//! Pure function of its inputs: the dots, the letterbox transform and the
//! image. Interactions are reported through `dispatch`.

use leptos::*;
use rust_i18n::t;
use templemap_core::{
    detail_path, map_config, InteractionEvent, LetterboxTransform, LocationId, MapImage,
    MarkerItem, VisualClass,
};

use crate::components::Link;

/// Identity of a dot across state changes. A location may own several markers.
type MarkerKey = (LocationId, u64, u64);

fn marker_key(item: &MarkerItem) -> MarkerKey {
    (item.location.id, item.pixel.x.to_bits(), item.pixel.y.to_bits())
}

fn state_class(class: VisualClass) -> &'static str {
    match class {
        VisualClass::ActiveDefault => "cursor-pointer",
        VisualClass::ActiveHovered => "cursor-pointer scale-125 z-10",
        VisualClass::Inactive => "opacity-30",
    }
}

#[component]
pub fn MapView(
    image: MapImage,
    #[prop(into)] items: Signal<Vec<MarkerItem>>,
    #[prop(into)] transform: Signal<LetterboxTransform>,
    /// Route of the map page, used for detail links
    base: String,
    dispatch: Callback<InteractionEvent>,
) -> impl IntoView {
    let base = store_value(base);
    let MapImage { width, height, url } = image;
    let container_style = move || {
        format!(
            "left: 50%; top: 0; width: {}px; height: {}px; transform-origin: 50% 0; transform: {};",
            width,
            height,
            transform.get().to_css()
        )
    };

    view! {
        <div class="relative w-full h-full overflow-hidden">
            <div class="absolute transition-transform duration-500" style=container_style>
                <img class="block w-full h-full select-none" src=url alt="" draggable="false" />
                <For
                    each=move || items.get()
                    key=marker_key
                    children=move |item| view! {
                        <MarkerDot initial=item items=items base=base.get_value() dispatch=dispatch />
                    }
                />
            </div>
        </div>
    }
}

/// One dot. Position and identity are fixed; class, colour, number and
/// popover follow the overlay signal so the node survives hover changes.
#[component]
fn MarkerDot(
    initial: MarkerItem,
    items: Signal<Vec<MarkerItem>>,
    base: String,
    dispatch: Callback<InteractionEvent>,
) -> impl IntoView {
    let key = marker_key(&initial);
    let id = initial.location.id;
    let number = initial.number;
    let title = initial.location.title.clone();
    let href = detail_path(&base, &initial.location);
    let diameter = map_config().marker_radius * 2.0;
    let position = format!(
        "left: calc(50% + {}px); top: calc(50% + {}px); width: {diameter}px; height: {diameter}px;",
        initial.pixel.x, initial.pixel.y
    );

    let current = create_memo(move |_| {
        items
            .with(|all| all.iter().find(|i| marker_key(i) == key).cloned())
            .unwrap_or_else(|| initial.clone())
    });
    let interactive = move || current.with_untracked(|i| i.class.is_interactive());

    let popover = move || {
        current.with(|i| i.popover_open).then(|| {
            view! {
                <div
                    class="absolute left-1/2 bottom-full mb-2 -translate-x-1/2 w-48 bg-white text-black shadow-lg p-3 text-left"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-1 right-2 text-gray-500"
                        title=t!("map.close").to_string()
                        on:click=move |_| dispatch.call(InteractionEvent::ClosePopover)
                    >
                        "×"
                    </button>
                    <p class="text-xs uppercase tracking-wider mb-2">{title.clone()}</p>
                    <Link href=href.clone() class="text-xs text-orange-600 uppercase">
                        {t!("map.more").to_string()}
                    </Link>
                </div>
            }
        })
    };

    view! {
        <div
            class=move || current.with(|i| format!(
                "{} absolute rounded-full flex items-center justify-center text-white text-xs transition-transform {}",
                i.class.css_class(),
                state_class(i.class)
            ))
            style=move || current.with(|i| format!("{position} background-color: {};", i.color))
            on:mouseenter=move |_| {
                if interactive() {
                    dispatch.call(InteractionEvent::Hover(id));
                }
            }
            on:mouseleave=move |_| dispatch.call(InteractionEvent::Unhover)
            on:click=move |_| {
                if interactive() {
                    dispatch.call(InteractionEvent::OpenPopover(id));
                }
            }
        >
            {move || current.with(|i| i.show_number).then_some(number)}
            {popover}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use templemap_core::{Location, PixelLocation};

    fn marker(id: u64, x: f64, y: f64, class: VisualClass) -> MarkerItem {
        MarkerItem {
            location: Location {
                id: LocationId(id),
                name: format!("loc-{id}"),
                title: format!("Location {id}"),
                path: format!("/temples/loc-{id}/"),
                tags: Vec::new(),
                state_color: None,
                image_url: None,
                body_html: None,
            },
            pixel: PixelLocation { x, y, location_id: LocationId(id) },
            number: id as usize,
            class,
            color: "#000".into(),
            show_number: false,
            popover_open: false,
        }
    }

    #[test]
    fn dot_identity_survives_hover() {
        let idle = marker(1, 10.0, -20.0, VisualClass::ActiveDefault);
        let hovered = MarkerItem {
            class: VisualClass::ActiveHovered,
            popover_open: true,
            ..idle.clone()
        };
        assert_eq!(marker_key(&idle), marker_key(&hovered));
    }

    #[test]
    fn markers_sharing_a_location_stay_distinct() {
        let a = marker(1, 10.0, -20.0, VisualClass::ActiveDefault);
        let b = marker(1, 30.0, -20.0, VisualClass::ActiveDefault);
        assert_ne!(marker_key(&a), marker_key(&b));
    }
}
