use dioxus::prelude::*;

/// Centered section heading: plain lead, accented tail word, underline bar
/// and a one-line blurb. Shared by every content section.
#[component]
pub fn SectionHeading(lead: String, accent: String, blurb: String) -> Element {
    rsx! {
        div {
            class: "text-center mb-16",
            h2 {
                class: "text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4 font-heading",
                "{lead} "
                span { class: "text-primary-500", "{accent}" }
            }
            div { class: "w-20 h-1.5 bg-primary-500 mx-auto rounded-full mb-6" }
            p {
                class: "max-w-2xl mx-auto text-gray-700 dark:text-gray-300",
                "{blurb}"
            }
        }
    }
}
