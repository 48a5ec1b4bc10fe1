use leptos::*;
use templemap_core::PageNode;

/// Landing page: large logo and the site description, one line per row.
#[component]
pub fn Home(home: PageNode) -> impl IntoView {
    let logo = home.image_logo.get(1).cloned();
    let lines: Vec<String> = home
        .description_lines()
        .into_iter()
        .map(str::to_string)
        .collect();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-8 px-4">
            {logo.map(|image| view! {
                <img class="w-full max-w-md" src=image.url().to_string() alt=image.alt().to_string() />
            })}
            <div class="text-center text-sm tracking-widest uppercase">
                {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            </div>
        </div>
    }
}
