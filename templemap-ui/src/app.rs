use crate::components::{Footer, Home, Logo, Nav, PageView};
use crate::config::{with_children, HOME_PATH};
use crate::hooks::{provide_router, use_page};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use templemap_core::routing::{is_within, same_route};
use templemap_core::{PageNode, Template};

/// What the content area shows for the current path.
#[derive(Clone, Debug, PartialEq)]
enum Outlet {
    Home(PageNode),
    Page(PageNode),
    NotFound,
}

/// Top-level page for `path`. Map pages also own the routes below them.
fn match_page(pages: &[PageNode], path: &str) -> Option<PageNode> {
    pages
        .iter()
        .find(|page| {
            same_route(&page.path, path)
                || (page.template() == Template::Temples && is_within(path, &page.path))
        })
        .cloned()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // ========== Routing and site content ==========
    let router = provide_router();
    let home = use_page(with_children(HOME_PATH));

    let outlet = create_memo(move |_| {
        let path = router.path.get();
        home.with(|home| {
            home.as_ref().map(|home| {
                if same_route(&path, "/") {
                    Outlet::Home(home.clone())
                } else {
                    match_page(&home.children, &path).map_or(Outlet::NotFound, Outlet::Page)
                }
            })
        })
    });

    // Unknown routes fall back to the home page.
    create_effect(move |_| {
        if outlet.with(|o| matches!(o, Some(Outlet::NotFound))) {
            log::info!("No page at {}, redirecting home", router.path.get_untracked());
            router.replace("/");
        }
    });

    let title = move || {
        home.with(|h| {
            h.as_ref()
                .and_then(|h| h.text_name.clone())
                .unwrap_or_default()
        })
    };
    let off_home = move || outlet.with(|o| matches!(o, Some(Outlet::Page(_))));

    // ========== Layout ==========
    view! {
        <Title text=title />
        <div class="min-h-screen font-sans text-black bg-white">
            {move || home.get().map(|home| {
                let logo = home.image_logo.first().cloned();
                view! {
                    <Show when=off_home>
                        <Logo image=logo.clone() />
                    </Show>
                    <Nav pages=home.children />
                }
            })}

            <main>
                {move || match outlet.get() {
                    Some(Outlet::Home(home)) => view! { <Home home=home /> }.into_view(),
                    Some(Outlet::Page(page)) => view! { <PageView page=page /> }.into_view(),
                    Some(Outlet::NotFound) | None => ().into_view(),
                }}
            </main>

            <Show when=off_home>
                <Footer />
            </Show>
        </div>
    }
}
