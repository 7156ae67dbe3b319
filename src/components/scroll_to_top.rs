use crate::utils::scroll::{self, SectionId};
use dioxus::prelude::*;

const VISIBLE_AFTER: f64 = 300.0;

/// Floating button that appears once the page is scrolled past the hero and
/// jumps back to the document origin.
#[component]
pub fn ScrollToTop() -> Element {
    let scroll_position = scroll::use_scroll_position();

    rsx! {
        if scroll_position() > VISIBLE_AFTER {
            button {
                class: "fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full bg-primary-500 hover:bg-primary-600 text-white shadow-lg shadow-primary-500/30 transition-colors",
                aria_label: "Scroll to top",
                onclick: move |_| scroll::scroll_to(SectionId::Home),
                "↑"
            }
        }
    }
}
