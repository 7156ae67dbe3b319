pub mod components;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

pub use crate::utils::*;
