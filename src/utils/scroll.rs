use dioxus::prelude::*;

/// Height of the fixed navbar; scroll destinations back off by this much so
/// section headings are not hidden underneath it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Logical name of one vertically stacked region of the page. Each section
/// component mounts with `anchor()` as its element id, so the navigator can
/// resolve the target lazily at click time instead of holding references
/// across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Portfolio,
    Testimonials,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Portfolio,
        Self::Testimonials,
        Self::Blog,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Testimonials => "testimonials",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Testimonials => "Testimonials",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

/// Absolute destination for a target whose bounding rect starts at
/// `rect_top` (viewport-relative) while the page is scrolled to
/// `scroll_offset`.
pub fn destination(rect_top: f64, scroll_offset: f64) -> f64 {
    rect_top + scroll_offset - HEADER_OFFSET
}

/// Smooth-scrolls the viewport to `section`. `Home` always goes to the
/// document origin. A target that is not mounted yet is skipped without
/// surfacing an error; a call issued mid-animation simply retargets the
/// browser's own scroll animation.
pub fn scroll_to(section: SectionId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if section == SectionId::Home {
            animate_to(&window, 0.0);
            return;
        }
        let Some(target) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(section.anchor()))
        else {
            log::debug!("scroll target '{}' is not mounted", section.anchor());
            return;
        };
        let offset = window.page_y_offset().unwrap_or(0.0);
        let top = destination(target.get_bounding_client_rect().top(), offset);
        animate_to(&window, top);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = section;
}

#[cfg(target_arch = "wasm32")]
fn animate_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Vertical scroll offset of the window, updated from a passive scroll
/// listener. Drives the navbar backdrop and the scroll-to-top button.
pub fn use_scroll_position() -> Signal<f64> {
    let mut position = use_signal(|| 0.0);

    use_future(move || async move {
        let mut updates = document::eval(
            r#"
            dioxus.send(window.scrollY);
            window.addEventListener(
                "scroll",
                () => dioxus.send(window.scrollY),
                { passive: true },
            );
            "#,
        );
        while let Ok(offset) = updates.recv::<f64>().await {
            position.set(offset);
        }
    });

    position
}
