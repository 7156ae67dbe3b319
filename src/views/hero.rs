use crate::utils::scroll::SectionId;
use dioxus::prelude::*;

const PORTRAIT_URL: &str =
    "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=800";

#[component]
pub fn Hero(on_explore: EventHandler<()>) -> Element {
    rsx! {
        section {
            id: SectionId::Home.anchor(),
            class: "min-h-screen relative flex items-center overflow-hidden",
            div {
                class: "absolute inset-0 -z-10",
                div { class: "absolute top-1/4 left-1/4 w-96 h-96 bg-primary-400/10 dark:bg-primary-500/10 rounded-full blur-3xl animate-slow-spin" }
                div { class: "absolute bottom-1/3 right-1/3 w-64 h-64 bg-purple-400/10 dark:bg-purple-500/10 rounded-full blur-3xl animate-float" }
            }

            div {
                class: "container mx-auto px-4 md:px-6 py-16 md:py-32 relative z-10",
                div {
                    class: "flex flex-col lg:flex-row items-center",
                    div {
                        class: "w-full lg:w-1/2 mb-12 lg:mb-0",
                        div {
                            class: "max-w-xl",
                            p {
                                class: "text-primary-500 dark:text-primary-400 font-medium mb-4 tracking-wide",
                                "WELCOME TO MY PORTFOLIO"
                            }
                            h1 {
                                class: "text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 dark:text-white mb-6 font-heading leading-tight",
                                "Creative Web Developer & UI Designer"
                            }
                            p {
                                class: "text-lg text-gray-700 dark:text-gray-300 mb-8 leading-relaxed",
                                "Turning ideas into digital reality with clean design and flawless execution. I create modern, responsive websites that help businesses grow."
                            }
                            div {
                                class: "flex flex-wrap gap-4",
                                button {
                                    class: "px-6 py-3 bg-primary-500 hover:bg-primary-600 text-white rounded-lg font-medium transition-colors shadow-lg shadow-primary-500/20 flex items-center",
                                    onclick: move |_| on_explore.call(()),
                                    "View My Work ↓"
                                }
                                a {
                                    href: "#contact",
                                    class: "px-6 py-3 border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-dark-800 text-gray-700 dark:text-gray-300 rounded-lg font-medium transition-colors",
                                    "Contact Me"
                                }
                            }
                        }
                    }
                    div {
                        class: "w-full lg:w-1/2 flex justify-center lg:justify-end",
                        div {
                            class: "relative",
                            div { class: "w-64 h-64 md:w-80 md:h-80 bg-primary-500/20 dark:bg-primary-500/10 rounded-full absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 -z-10" }
                            img {
                                src: PORTRAIT_URL,
                                alt: "Portrait",
                                class: "w-64 h-64 md:w-80 md:h-80 object-cover rounded-full border-4 border-white dark:border-dark-800 shadow-xl",
                            }
                            div {
                                class: "absolute -bottom-4 -right-4 bg-white dark:bg-dark-800 px-4 py-2 rounded-lg shadow-lg",
                                p {
                                    class: "text-primary-500 dark:text-primary-400 font-bold",
                                    "5+ Years Experience"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
