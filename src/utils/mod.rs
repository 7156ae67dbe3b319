pub mod contact_form;
pub mod scroll;
pub mod theme_state;

pub use contact_form::{ContactForm, FieldErrors, SubmitStatus};
pub use scroll::SectionId;
pub use theme_state::ThemeMode;
