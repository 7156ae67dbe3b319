use crate::components::SectionHeading;
use crate::utils::scroll::SectionId;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub text: String,
}

impl Testimonial {
    fn new(id: u32, name: &str, role: &str, company: &str, image: &str, text: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            image: image.to_string(),
            text: text.to_string(),
        }
    }

    pub fn sample_data() -> Vec<Self> {
        vec![
            Testimonial::new(
                1,
                "Sarah Johnson",
                "Marketing Director",
                "Digital Edge",
                "https://images.pexels.com/photos/3763188/pexels-photo-3763188.jpeg?auto=compress&cs=tinysrgb&w=200",
                "Working with this developer was an incredible experience. They delivered a website that exceeded our expectations in terms of design and functionality. Their attention to detail and commitment to our project made all the difference.",
            ),
            Testimonial::new(
                2,
                "Michael Thompson",
                "CEO",
                "Tech Innovate",
                "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=200",
                "We hired this developer to redesign our corporate website, and the results were outstanding. They understood our brand vision perfectly and translated it into a modern, functional site that has significantly improved our online presence.",
            ),
            Testimonial::new(
                3,
                "Emily Chen",
                "Product Manager",
                "CreativeLabs",
                "https://images.pexels.com/photos/3776932/pexels-photo-3776932.jpeg?auto=compress&cs=tinysrgb&w=200",
                "The developer showed exceptional skill in both design and development. They created a product that was not only visually stunning but also performed flawlessly. Their communication throughout the project was exemplary.",
            ),
            Testimonial::new(
                4,
                "David Rodriguez",
                "Founder",
                "Startup Venture",
                "https://images.pexels.com/photos/874158/pexels-photo-874158.jpeg?auto=compress&cs=tinysrgb&w=200",
                "As a startup founder, finding the right developer was crucial. They delivered a pixel-perfect implementation of our vision while suggesting valuable improvements we hadn't considered. Highly recommend!",
            ),
        ]
    }
}

/// Next carousel slot, wrapping from the last index back to 0.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Previous carousel slot, wrapping from 0 to the last index.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[component]
pub fn Testimonials() -> Element {
    let entries = use_signal(Testimonial::sample_data);
    let mut active_index = use_signal(|| 0usize);
    let mut revealed = use_signal(|| false);

    let count = entries.read().len();

    rsx! {
        section {
            id: SectionId::Testimonials.anchor(),
            class: if revealed() {
                "py-20 bg-gray-50 dark:bg-dark-900 reveal is-visible"
            } else {
                "py-20 bg-gray-50 dark:bg-dark-900 reveal"
            },
            onvisible: move |evt| {
                if !revealed() && evt.data().is_intersecting().unwrap_or(false) {
                    revealed.set(true);
                }
            },
            div {
                class: "container mx-auto px-4 md:px-6",
                SectionHeading {
                    lead: "Client",
                    accent: "Testimonials",
                    blurb: "See what my clients have to say about my work and collaboration experience.",
                }

                div {
                    class: "max-w-5xl mx-auto",
                    {entries.read().get(active_index()).map(|entry| rsx! {
                        div {
                            class: "bg-white dark:bg-dark-800 rounded-2xl shadow-xl p-6 md:p-10 relative",
                            span {
                                class: "text-primary-500/20 text-6xl font-serif absolute top-6 left-6",
                                "\u{201C}"
                            }
                            div {
                                class: "flex flex-col md:flex-row items-center gap-8",
                                div {
                                    class: "md:w-1/3 flex flex-col items-center",
                                    img {
                                        src: "{entry.image}",
                                        alt: "{entry.name}",
                                        class: "w-24 h-24 rounded-full object-cover border-4 border-primary-500/20",
                                    }
                                    div {
                                        class: "text-center mt-4",
                                        h4 {
                                            class: "font-bold text-gray-900 dark:text-white text-lg",
                                            "{entry.name}"
                                        }
                                        p {
                                            class: "text-primary-500 dark:text-primary-400 font-medium",
                                            "{entry.role}"
                                        }
                                        p {
                                            class: "text-gray-600 dark:text-gray-400 text-sm",
                                            "{entry.company}"
                                        }
                                    }
                                }
                                div {
                                    class: "md:w-2/3",
                                    blockquote {
                                        class: "text-gray-700 dark:text-gray-300 text-lg italic leading-relaxed",
                                        "\"{entry.text}\""
                                    }
                                }
                            }
                        }
                    })}

                    div {
                        class: "flex justify-center gap-4 mt-8",
                        button {
                            class: "p-2 rounded-full bg-white dark:bg-dark-800 shadow-md text-gray-700 dark:text-gray-300 hover:bg-primary-500 hover:text-white transition-colors",
                            aria_label: "Previous testimonial",
                            onclick: move |_| {
                                let current = active_index();
                                active_index.set(prev_index(current, count));
                            },
                            "‹"
                        }
                        div {
                            class: "flex space-x-2 items-center",
                            {(0..count).map(|index| {
                                let slot = index + 1;
                                rsx! {
                                    button {
                                        key: "{index}",
                                        class: if active_index() == index {
                                            "w-3 h-3 rounded-full bg-primary-500"
                                        } else {
                                            "w-3 h-3 rounded-full bg-gray-300 dark:bg-dark-600"
                                        },
                                        aria_label: "Go to testimonial {slot}",
                                        onclick: move |_| active_index.set(index),
                                    }
                                }
                            })}
                        }
                        button {
                            class: "p-2 rounded-full bg-white dark:bg-dark-800 shadow-md text-gray-700 dark:text-gray-300 hover:bg-primary-500 hover:text-white transition-colors",
                            aria_label: "Next testimonial",
                            onclick: move |_| {
                                let current = active_index();
                                active_index.set(next_index(current, count));
                            },
                            "›"
                        }
                    }
                }
            }
        }
    }
}
