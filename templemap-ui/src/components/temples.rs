//! The map page: owns the interaction state and feeds both views.

use leptos::*;
use templemap_core::{
    compute_limits, focus_from_path, list_content, map_config, map_overlay, normalize,
    to_pixel_locations, InteractionEvent, InteractionState, Letterbox, LetterboxTransform,
    TemplesPage,
};

use crate::components::{ControlBar, ListView, MapView};
use crate::config::with_children;
use crate::hooks::{use_page, use_router, use_viewport_size};

/// Map page mounted at `path`. Renders nothing until its content has loaded.
#[component]
pub fn Temples(path: String) -> impl IntoView {
    let node = use_page(with_children(&path));
    let page = create_memo(move |_| node.with(|n| n.as_ref().map(TemplesPage::from_node)));

    let base = if normalize(&path) == "/" {
        map_config().base_path.to_string()
    } else {
        normalize(&path)
    };

    move || {
        page.get()
            .map(|page| view! { <TemplesMap page=page base=base.clone() /> })
    }
}

#[component]
fn TemplesMap(page: TemplesPage, base: String) -> impl IntoView {
    let config = map_config();
    let router = use_router();
    let viewport = use_viewport_size();

    let state = create_rw_signal(InteractionState::new());
    let locations = store_value(page.locations.clone());

    let dispatch = Callback::new(move |event: InteractionEvent| {
        let mut next = state.get_untracked();
        if locations.with_value(|locations| next.apply(event, locations)) {
            state.set(next);
        }
    });

    // The route decides which location, if any, is focused.
    let focus_base = base.clone();
    create_effect(move |_| {
        let focus = router
            .path
            .with(|path| locations.with_value(|l| focus_from_path(path, &focus_base, l)));
        dispatch.call(InteractionEvent::Navigate(focus));
    });

    let image = page.image.clone();
    let markers = page.markers.clone();
    let pixels = create_memo(move |_| {
        image
            .as_ref()
            .map(|image| to_pixel_locations(&markers, image, config.marker_radius))
            .unwrap_or_default()
    });
    let limits = create_memo(move |_| pixels.with(|p| compute_limits(p)));

    let letterbox = Letterbox::from_config(config);
    let image_size = page.image.as_ref().map(|i| (i.width, i.height));
    let transform = create_memo(move |_| match image_size {
        Some((width, height)) => letterbox.fit(width, height, &limits.get(), viewport.get()),
        None => LetterboxTransform::IDENTITY,
    });

    let overlay = create_memo(move |_| {
        state.with(|s| pixels.with(|p| locations.with_value(|l| map_overlay(l, p, s, config))))
    });
    let list = create_memo(move |_| state.with(|s| locations.with_value(|l| list_content(l, s))));

    view! {
        <div class="relative">
            <ControlBar
                state=state
                keywords=page.keywords.clone()
                legend=page.legend.clone()
                dispatch=dispatch
            />
            {page.image.clone().map(|image| view! {
                <div class="h-screen w-full">
                    <MapView
                        image=image
                        items=overlay
                        transform=transform
                        base=base.clone()
                        dispatch=dispatch
                    />
                </div>
            })}
            <ListView content=list base=base.clone() dispatch=dispatch />
        </div>
    }
}
