use leptos::*;
use rust_i18n::t;
use templemap_core::{detail_path, InteractionEvent, ListContent, ListItem, LocationId, VisualClass};

use crate::components::Link;

type RowKey = (LocationId, usize);

fn row_key(item: &ListItem) -> RowKey {
    (item.location.id, item.number)
}

/// Location index, or the focused location's own content.
#[component]
pub fn ListView(
    #[prop(into)] content: Signal<ListContent>,
    /// Route of the map page
    base: String,
    dispatch: Callback<InteractionEvent>,
) -> impl IntoView {
    let base = store_value(base);

    let rows = create_memo(move |_| {
        content.with(|c| match c {
            ListContent::Index(items) => items.clone(),
            ListContent::Detail(_) => Vec::new(),
        })
    });
    let detail = create_memo(move |_| {
        content.with(|c| match c {
            ListContent::Detail(item) => Some(item.clone()),
            ListContent::Index(_) => None,
        })
    });
    let rows_signal = Signal::from(rows);

    view! {
        <Show
            when=move || detail.with(Option::is_none)
            fallback=move || detail.get().map(|item| view! { <Detail item=item base=base.get_value() /> })
        >
            <ol class="flex flex-col divide-y divide-gray-200">
                <For
                    each=move || rows.get()
                    key=row_key
                    children=move |item| view! {
                        <ListRow initial=item rows=rows_signal base=base.get_value() dispatch=dispatch />
                    }
                />
            </ol>
        </Show>
    }
}

#[component]
fn Detail(item: ListItem, base: String) -> impl IntoView {
    view! {
        <article class="px-4 py-8">
            <Link href=base class="text-xs uppercase tracking-widest hover:text-orange-600">
                {t!("list.back").to_string()}
            </Link>
            <h2 class="mt-6 mb-4 text-xl uppercase tracking-widest">
                {item.show_number.then(|| format!("{}. ", item.number))}
                {item.location.title.clone()}
            </h2>
            {item.image_url.clone().map(|url| view! { <img class="w-full mb-6" src=url alt="" /> })}
            {item.location.body_html.clone().map(|html| view! { <div class="prose" inner_html=html /> })}
        </article>
    }
}

#[component]
fn ListRow(
    initial: ListItem,
    rows: Signal<Vec<ListItem>>,
    base: String,
    dispatch: Callback<InteractionEvent>,
) -> impl IntoView {
    let key = row_key(&initial);
    let id = initial.location.id;
    let number = initial.number;
    let title = initial.location.title.clone();
    let plain_title = title.clone();
    let href = detail_path(&base, &initial.location);
    let dot_style = initial
        .location
        .state_color
        .as_ref()
        .map(|c| format!("background-color: {c};"));

    let current = create_memo(move |_| {
        rows.with(|all| all.iter().find(|i| row_key(i) == key).cloned())
            .unwrap_or_else(|| initial.clone())
    });
    let interactive = Signal::derive(move || current.with(|i| i.class.is_interactive()));

    let state_class = move || match current.with(|i| i.class) {
        VisualClass::ActiveDefault => "",
        VisualClass::ActiveHovered => "text-orange-600",
        VisualClass::Inactive => "opacity-30",
    };

    view! {
        <li
            class=move || format!(
                "{} flex items-center gap-4 px-4 py-3 transition-colors {}",
                current.with(|i| i.class.css_class()),
                state_class()
            )
            on:mouseenter=move |_| {
                if interactive.get_untracked() {
                    dispatch.call(InteractionEvent::Hover(id));
                }
            }
            on:mouseleave=move |_| dispatch.call(InteractionEvent::Unhover)
        >
            {move || current.with(|i| i.show_number).then(|| view! {
                <span class="w-6 text-right text-xs tabular-nums">{number}</span>
            })}
            {move || current.with(|i| i.image_url.clone()).map(|url| view! {
                <img class="w-16 h-16 object-cover" src=url alt="" />
            })}
            <span class="inline-block w-2 h-2 rounded-full" style=dot_style />
            <span class="uppercase tracking-wider text-sm">
                <Show
                    when=move || interactive.get()
                    fallback=move || view! { <span>{plain_title.clone()}</span> }
                >
                    {
                        let title = title.clone();
                        view! { <Link href=href.clone()>{title}</Link> }
                    }
                </Show>
            </span>
        </li>
    }
}
