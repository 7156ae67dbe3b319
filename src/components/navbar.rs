use crate::utils::scroll::{self, SectionId};
use crate::utils::{theme_state, ThemeMode};
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Links shown in the header; the blog section is reachable from the footer
/// and by scrolling.
const NAV_SECTIONS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Portfolio,
    SectionId::Testimonials,
    SectionId::Contact,
];

#[component]
pub fn Navbar(on_navigate: EventHandler<SectionId>) -> Element {
    let mut theme = use_context::<Signal<ThemeMode>>();
    let mut menu_open = use_signal(|| false);
    let scroll_position = scroll::use_scroll_position();

    let scrolled = scroll_position() > 10.0;

    let mut navigate = move |section: SectionId| {
        on_navigate.call(section);
        menu_open.set(false);
    };

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
        theme_state::persist(next);
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if scrolled {
                    "fixed w-full z-50 transition-all duration-300 bg-white/90 dark:bg-dark-800/90 backdrop-blur-md py-3 shadow-md"
                } else {
                    "fixed w-full z-50 transition-all duration-300 bg-transparent py-5"
                },
                div {
                    class: "container mx-auto px-4 md:px-6",
                    div {
                        class: "flex justify-between items-center",
                        h1 {
                            class: "text-2xl font-bold bg-gradient-to-r from-primary-500 to-primary-700 bg-clip-text text-transparent",
                            "PORTFOLIO"
                        }

                        div {
                            class: "hidden md:flex space-x-8 items-center",
                            {NAV_SECTIONS.iter().map(|&section| {
                                let anchor = section.anchor();
                                rsx! {
                                    button {
                                        key: "{anchor}",
                                        class: "text-gray-700 dark:text-gray-300 hover:text-primary-500 dark:hover:text-primary-400 transition-colors",
                                        onclick: move |_| navigate(section),
                                        {section.label()}
                                    }
                                }
                            })}
                            button {
                                class: "p-2 rounded-full bg-gray-100 dark:bg-dark-700 hover:bg-gray-200 dark:hover:bg-dark-600 transition-colors",
                                aria_label: "Toggle theme",
                                onclick: toggle_theme,
                                if theme().is_dark() {
                                    "🌞"
                                } else {
                                    "🌙"
                                }
                            }
                        }

                        div {
                            class: "md:hidden flex items-center space-x-4",
                            button {
                                class: "p-2 rounded-full bg-gray-100 dark:bg-dark-700",
                                aria_label: "Toggle theme",
                                onclick: toggle_theme,
                                if theme().is_dark() {
                                    "🌞"
                                } else {
                                    "🌙"
                                }
                            }
                            button {
                                class: "text-gray-700 dark:text-gray-300 focus:outline-none",
                                aria_label: "Toggle menu",
                                onclick: move |_| menu_open.set(!menu_open()),
                                if menu_open() {
                                    "✕"
                                } else {
                                    "☰"
                                }
                            }
                        }
                    }
                }

                if menu_open() {
                    div {
                        class: "md:hidden bg-white dark:bg-dark-800 shadow-lg",
                        div {
                            class: "container mx-auto px-4 py-4 flex flex-col space-y-4",
                            {NAV_SECTIONS.iter().map(|&section| {
                                let anchor = section.anchor();
                                rsx! {
                                    button {
                                        key: "{anchor}",
                                        class: "py-2 px-4 text-left text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-dark-700 rounded-md transition-colors",
                                        onclick: move |_| navigate(section),
                                        {section.label()}
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
