// templemap-ui/src/hooks/viewport.rs
use leptos::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};
use templemap_core::ViewportSize;

/// Reactive viewport size. `None` until the window has been measured.
pub fn use_viewport_size() -> Signal<Option<ViewportSize>> {
    let UseWindowSizeReturn { width, height } = use_window_size();
    Signal::derive(move || ViewportSize::measured(width.get(), height.get()))
}
