use crate::components::SectionHeading;
use crate::utils::contact_form::{self, ContactForm, FieldErrors, SubmitStatus};
use crate::utils::scroll::SectionId;
use dioxus::events::FormData;
use dioxus::prelude::*;

struct ContactChannel {
    glyph: &'static str,
    title: &'static str,
    details: &'static str,
    link: &'static str,
}

const CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        glyph: "📞",
        title: "Phone",
        details: "+1 (555) 123-4567",
        link: "tel:+15551234567",
    },
    ContactChannel {
        glyph: "✉",
        title: "Email",
        details: "contact@yourportfolio.com",
        link: "mailto:contact@yourportfolio.com",
    },
    ContactChannel {
        glyph: "📍",
        title: "Location",
        details: "San Francisco, CA",
        link: "https://maps.google.com",
    },
];

fn input_class(error: bool) -> &'static str {
    if error {
        "w-full px-4 py-3 rounded-lg border border-red-500 focus:border-red-500 bg-white dark:bg-dark-700 text-gray-800 dark:text-white outline-none transition-colors"
    } else {
        "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-dark-600 focus:border-primary-500 dark:focus:border-primary-500 bg-white dark:bg-dark-700 text-gray-800 dark:text-white outline-none transition-colors"
    }
}

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut status = use_signal(SubmitStatus::default);
    let mut revealed = use_signal(|| false);

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let report = contact_form::validate(&form.read());
        if !report.is_clean() {
            errors.set(report);
            return;
        }
        errors.set(FieldErrors::default());
        status.set(SubmitStatus::Sending);
        let outgoing = form.peek().clone();
        spawn(async move {
            match contact_form::send_message(outgoing).await {
                Ok(receipt) => {
                    form.set(ContactForm::default());
                    status.set(SubmitStatus::Sent(receipt));
                }
                Err(e) => {
                    log::error!("contact submission failed: {}", e);
                    status.set(SubmitStatus::Idle);
                }
            }
        });
    };

    let sending = *status.read() == SubmitStatus::Sending;
    let current = form.read().clone();

    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: if revealed() {
                "py-20 bg-white dark:bg-dark-800 reveal is-visible"
            } else {
                "py-20 bg-white dark:bg-dark-800 reveal"
            },
            onvisible: move |evt| {
                if !revealed() && evt.data().is_intersecting().unwrap_or(false) {
                    revealed.set(true);
                }
            },
            div {
                class: "container mx-auto px-4 md:px-6",
                SectionHeading {
                    lead: "Get In",
                    accent: "Touch",
                    blurb: "Have a project in mind or want to collaborate? Feel free to reach out and I'll get back to you soon.",
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto mb-16",
                    {CHANNELS.iter().map(|channel| rsx! {
                        a {
                            key: "{channel.title}",
                            href: "{channel.link}",
                            class: "bg-gray-50 dark:bg-dark-700 rounded-lg p-6 flex flex-col items-center text-center hover:shadow-md transition-shadow group",
                            div {
                                class: "w-16 h-16 rounded-full flex items-center justify-center bg-primary-500/10 text-primary-500 text-2xl mb-4 group-hover:bg-primary-500 group-hover:text-white transition-colors",
                                "{channel.glyph}"
                            }
                            h3 { class: "text-xl font-bold text-gray-900 dark:text-white mb-2", "{channel.title}" }
                            p { class: "text-gray-600 dark:text-gray-300", "{channel.details}" }
                        }
                    })}
                }

                div {
                    class: "max-w-3xl mx-auto",
                    h3 { class: "text-2xl font-bold text-gray-900 dark:text-white mb-6", "Send Me a Message" }
                    form {
                        onsubmit: submit,
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 gap-6 mb-6",
                            div {
                                label {
                                    r#for: "name",
                                    class: "block text-gray-700 dark:text-gray-300 font-medium mb-2",
                                    "Your Name"
                                }
                                input {
                                    id: "name",
                                    name: "name",
                                    r#type: "text",
                                    placeholder: "John Doe",
                                    value: "{current.name}",
                                    class: input_class(errors.read().name.is_some()),
                                    oninput: move |evt| {
                                        form.write().name = evt.value();
                                        errors.write().name = None;
                                    },
                                }
                                if let Some(message) = errors.read().name.clone() {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    r#for: "email",
                                    class: "block text-gray-700 dark:text-gray-300 font-medium mb-2",
                                    "Your Email"
                                }
                                input {
                                    id: "email",
                                    name: "email",
                                    r#type: "email",
                                    placeholder: "john@example.com",
                                    value: "{current.email}",
                                    class: input_class(errors.read().email.is_some()),
                                    oninput: move |evt| {
                                        form.write().email = evt.value();
                                        errors.write().email = None;
                                    },
                                }
                                if let Some(message) = errors.read().email.clone() {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                        }
                        div {
                            class: "mb-6",
                            label {
                                r#for: "subject",
                                class: "block text-gray-700 dark:text-gray-300 font-medium mb-2",
                                "Subject (Optional)"
                            }
                            input {
                                id: "subject",
                                name: "subject",
                                r#type: "text",
                                placeholder: "Project Inquiry",
                                value: "{current.subject}",
                                class: input_class(false),
                                oninput: move |evt| form.write().subject = evt.value(),
                            }
                        }
                        div {
                            class: "mb-6",
                            label {
                                r#for: "message",
                                class: "block text-gray-700 dark:text-gray-300 font-medium mb-2",
                                "Your Message"
                            }
                            textarea {
                                id: "message",
                                name: "message",
                                rows: "5",
                                placeholder: "Hello, I would like to talk about...",
                                value: "{current.message}",
                                class: input_class(errors.read().message.is_some()),
                                oninput: move |evt| {
                                    form.write().message = evt.value();
                                    errors.write().message = None;
                                },
                            }
                            if let Some(message) = errors.read().message.clone() {
                                p { class: "text-red-500 text-sm mt-1", "{message}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: sending,
                            class: if sending {
                                "px-6 py-3 bg-primary-500 text-white rounded-lg font-medium opacity-50 cursor-not-allowed flex items-center"
                            } else {
                                "px-6 py-3 bg-primary-500 hover:bg-primary-600 text-white rounded-lg font-medium transition-colors shadow-lg shadow-primary-500/20 flex items-center"
                            },
                            if sending { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }

            if let SubmitStatus::Sent(receipt) = status() {
                div {
                    class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4",
                    div {
                        class: "bg-white dark:bg-dark-800 rounded-lg max-w-md w-full p-8 text-center",
                        div { class: "text-5xl mb-4", "✅" }
                        h3 {
                            class: "text-2xl font-bold text-gray-900 dark:text-white mb-2",
                            "{receipt.title}"
                        }
                        p { class: "text-gray-600 dark:text-gray-300 mb-6", "{receipt.detail}" }
                        button {
                            class: "px-6 py-2.5 bg-primary-500 hover:bg-primary-600 text-white rounded-lg font-medium transition-colors",
                            onclick: move |_| status.set(SubmitStatus::Idle),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
