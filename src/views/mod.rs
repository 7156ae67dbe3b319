mod about;
mod blog;
mod contact;
mod hero;
mod portfolio;
mod testimonials;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use testimonials::Testimonials;

pub use blog::BlogPost;
pub use portfolio::{categories, filter_by_category, Project, ALL_CATEGORIES};
pub use testimonials::{next_index, prev_index, Testimonial};
