use crate::utils::scroll::SectionId;
use dioxus::prelude::*;

struct SocialLink {
    label: &'static str,
    glyph: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", glyph: "GH", url: "https://github.com" },
    SocialLink { label: "LinkedIn", glyph: "in", url: "https://linkedin.com" },
    SocialLink { label: "Twitter", glyph: "X", url: "https://twitter.com" },
    SocialLink { label: "Instagram", glyph: "IG", url: "https://instagram.com" },
];

#[component]
pub fn Footer(on_navigate: EventHandler<SectionId>) -> Element {
    rsx! {
        footer {
            class: "bg-gray-900 dark:bg-dark-900 text-white py-12",
            div {
                class: "container mx-auto px-4 md:px-6",
                div {
                    class: "flex flex-col md:flex-row justify-between items-center gap-8",
                    div {
                        h2 {
                            class: "text-2xl font-bold bg-gradient-to-r from-primary-500 to-primary-700 bg-clip-text text-transparent",
                            "PORTFOLIO"
                        }
                        p {
                            class: "text-gray-400 mt-2 max-w-sm",
                            "Building modern, responsive websites that help businesses grow."
                        }
                    }
                    nav {
                        class: "flex flex-wrap justify-center gap-6",
                        {SectionId::ALL.iter().map(|&section| {
                            let anchor = section.anchor();
                            rsx! {
                                button {
                                    key: "{anchor}",
                                    class: "text-gray-400 hover:text-primary-400 transition-colors",
                                    onclick: move |_| on_navigate.call(section),
                                    {section.label()}
                                }
                            }
                        })}
                    }
                    div {
                        class: "flex space-x-4",
                        {SOCIAL_LINKS.iter().map(|link| rsx! {
                            a {
                                key: "{link.label}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: "{link.label}",
                                class: "w-10 h-10 rounded-full bg-gray-800 dark:bg-dark-700 flex items-center justify-center text-gray-300 hover:bg-primary-500 hover:text-white transition-colors",
                                {link.glyph}
                            }
                        })}
                    }
                }
                div {
                    class: "border-t border-gray-800 mt-10 pt-6 text-center text-gray-500 text-sm",
                    "© 2025 Portfolio. All rights reserved."
                }
            }
        }
    }
}
