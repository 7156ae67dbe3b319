use dioxus::prelude::*;
use portfolio_site::components::{Footer, Navbar, ScrollToTop};
use portfolio_site::utils::scroll::{self, SectionId};
use portfolio_site::utils::theme_state;
use portfolio_site::views::{About, Blog, Contact, Hero, Portfolio, Testimonials};

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(theme_state::initial);
    use_context_provider(|| theme);

    rsx! {
        div {
            class: if theme().is_dark() {
                "dark min-h-screen bg-white dark:bg-dark-800 text-gray-900 dark:text-white"
            } else {
                "min-h-screen bg-white dark:bg-dark-800 text-gray-900 dark:text-white"
            },
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }

            Navbar { on_navigate: move |section| scroll::scroll_to(section) }
            main {
                Hero { on_explore: move |_| scroll::scroll_to(SectionId::Portfolio) }
                About {}
                Portfolio {}
                Testimonials {}
                Blog {}
                Contact {}
            }
            Footer { on_navigate: move |section| scroll::scroll_to(section) }
            ScrollToTop {}
        }
    }
}
