mod footer;
mod navbar;
mod scroll_to_top;
mod section_heading;

pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll_to_top::ScrollToTop;
pub use section_heading::SectionHeading;
