//! Renderers for the content templates.

use leptos::*;
use templemap_core::{PageNode, Template};

use crate::components::{Contact, SubNav, Temples};
use crate::config::with_children;
use crate::hooks::use_page;

/// Top-level page, dispatched on the template of its navigation entry.
#[component]
pub fn PageView(page: PageNode) -> impl IntoView {
    match page.template() {
        Template::Multiple => view! { <MultiplePage path=page.path.clone() /> }.into_view(),
        Template::Page => view! { <RichPage path=page.path.clone() /> }.into_view(),
        Template::Contact => view! { <Contact /> }.into_view(),
        Template::Temples => view! { <Temples path=page.path.clone() /> }.into_view(),
        Template::Temple => view! { <TemplePage path=page.path.clone() /> }.into_view(),
        Template::Unknown(tag) => {
            log::debug!("No renderer for template '{}' at {}", tag, page.path);
            ().into_view()
        }
    }
}

/// Children rendered one after the other as anchored sections.
#[component]
fn MultiplePage(path: String) -> impl IntoView {
    let node = use_page(with_children(&path));

    move || {
        node.get().map(|node| {
            let sections: Vec<(String, String)> = node
                .children
                .iter()
                .map(|child| (child.name.clone(), child.title.clone()))
                .collect();

            view! {
                <div>
                    {node.checkbox_navigation.then(|| view! { <SubNav sections=sections /> })}
                    {node.children.into_iter().map(|child| view! {
                        <section id=child.name.clone() class="py-16">
                            {section_content(child)}
                        </section>
                    }).collect_view()}
                </div>
            }
        })
    }
}

/// Content of an inline section. The child node is already loaded.
fn section_content(child: PageNode) -> View {
    match child.template() {
        Template::Multiple => view! { <MultiplePage path=child.path.clone() /> }.into_view(),
        Template::Page => rich_text(child.body_html()),
        Template::Contact => view! { <Contact /> }.into_view(),
        Template::Temples => view! { <Temples path=child.path.clone() /> }.into_view(),
        Template::Temple => view! { <TempleDetail node=child /> }.into_view(),
        Template::Unknown(tag) => {
            log::debug!("No renderer for template '{}' at {}", tag, child.path);
            ().into_view()
        }
    }
}

#[component]
fn RichPage(path: String) -> impl IntoView {
    let node = use_page(path);
    move || node.with(|n| n.as_ref().map(|n| rich_text(n.body_html())))
}

#[component]
fn TemplePage(path: String) -> impl IntoView {
    let node = use_page(path);
    move || node.get().map(|node| view! { <TempleDetail node=node /> })
}

/// A single location's own page: main image and body text.
#[component]
fn TempleDetail(node: PageNode) -> impl IntoView {
    let image = node.image_main.first().cloned();
    view! {
        <article class="max-w-3xl mx-auto px-4">
            <h1 class="text-2xl uppercase tracking-widest mb-8">{node.title.clone()}</h1>
            {image.map(|image| view! {
                <img class="w-full mb-8" src=image.url().to_string() alt=image.alt().to_string() />
            })}
            {rich_text(node.body_html())}
        </article>
    }
}

fn rich_text(html: Option<&str>) -> View {
    match html {
        Some(html) => {
            let html = html.to_string();
            view! { <div class="prose max-w-3xl mx-auto px-4" inner_html=html /> }.into_view()
        }
        None => ().into_view(),
    }
}
