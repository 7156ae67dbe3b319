use crate::utils::contact_form::{send_message, validate, ContactForm, FieldErrors};

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Engine".to_string(),
        message: "I have a project in mind.".to_string(),
    }
}

#[test]
fn test_empty_form_yields_three_errors() {
    let errors = validate(&ContactForm::default());
    assert_eq!(errors.count(), 3);
    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.message.is_some());
    assert!(!errors.is_clean());
}

#[test]
fn test_whitespace_only_fields_are_empty() {
    let form = ContactForm {
        name: "   ".to_string(),
        email: "\t".to_string(),
        message: "\n".to_string(),
        ..ContactForm::default()
    };
    assert_eq!(validate(&form).count(), 3);
}

#[test]
fn test_email_without_tld_is_rejected() {
    let form = ContactForm {
        email: "foo@bar".to_string(),
        ..filled_form()
    };
    let errors = validate(&form);
    assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
    assert_eq!(errors.count(), 1);
}

#[test]
fn test_minimal_valid_email_passes() {
    let form = ContactForm {
        email: "a@b.co".to_string(),
        ..filled_form()
    };
    assert!(validate(&form).is_clean());
}

#[test]
fn test_email_with_spaces_is_rejected() {
    let form = ContactForm {
        email: "a b@c.co".to_string(),
        ..filled_form()
    };
    assert!(validate(&form).email.is_some());
}

#[test]
fn test_subject_is_optional() {
    let form = ContactForm {
        subject: String::new(),
        ..filled_form()
    };
    assert!(validate(&form).is_clean());
}

#[test]
fn test_valid_form_is_clean() {
    assert_eq!(validate(&filled_form()), FieldErrors::default());
}

#[test]
fn test_send_message_acknowledges() {
    crate::tests::common::setup();
    let receipt = futures::executor::block_on(send_message(filled_form()))
        .expect("simulated submission always succeeds");
    assert_eq!(receipt.title, "Message Sent!");
}
