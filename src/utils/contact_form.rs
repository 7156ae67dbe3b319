use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// How long the simulated backend takes to acknowledge a message.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation messages. `None` means the field is acceptable;
/// values are shown inline under the matching input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Client-side validation: name, email and message are required (whitespace
/// does not count), and the email must look like an address. Subject is
/// optional. Never clears or rewrites field values.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !EMAIL_SHAPE.is_match(form.email.trim()) {
        errors.email = Some("Email is invalid".to_string());
    }

    if form.message.trim().is_empty() {
        errors.message = Some("Message is required".to_string());
    }

    errors
}

/// Acknowledgement shown in the confirmation dialog once a message goes out.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub title: String,
    pub detail: String,
}

/// Transport-level submission failure. The simulated backend never produces
/// one; the variant exists so a real transport can slot in behind
/// [`send_message`] without changing the caller's contract.
#[derive(Debug)]
pub enum SendError {
    Transport(String),
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SendError::Transport(msg) => write!(f, "Transport Error: {}", msg),
        }
    }
}

/// Submission state the contact view renders from.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(Receipt),
}

/// Delivers a validated message. Today this is a fixed-delay simulation that
/// always succeeds; callers must still handle the error arm.
pub async fn send_message(form: ContactForm) -> Result<Receipt, SendError> {
    let payload = serde_json::to_string(&form)
        .map_err(|e| SendError::Transport(e.to_string()))?;
    log::info!(
        "sending contact message from {} ({} bytes)",
        form.email,
        payload.len()
    );
    sleep_ms(SUBMIT_DELAY_MS).await;
    Ok(Receipt {
        title: "Message Sent!".to_string(),
        detail: "Thank you for reaching out. I will get back to you soon!".to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
}
