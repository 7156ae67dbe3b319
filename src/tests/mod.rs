pub mod common;

mod contact;
mod navigation;
mod portfolio;
mod testimonials;
mod theme;
