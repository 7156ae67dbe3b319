use crate::components::SectionHeading;
use crate::utils::scroll::SectionId;
use chrono::NaiveDate;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub author: String,
    pub category: String,
    pub image: String,
    pub slug: String,
}

impl BlogPost {
    pub fn sample_data() -> Vec<Self> {
        vec![
            BlogPost {
                id: 1,
                title: "The Future of Web Development: Trends to Watch".to_string(),
                excerpt: "Explore the emerging technologies and methodologies that are shaping the future of web development.".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap_or_default(),
                author: "Your Name".to_string(),
                category: "Development".to_string(),
                image: "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                slug: "future-web-development".to_string(),
            },
            BlogPost {
                id: 2,
                title: "Designing for Accessibility: Best Practices".to_string(),
                excerpt: "Learn how to create inclusive web experiences that work for everyone, regardless of abilities.".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 5, 28).unwrap_or_default(),
                author: "Your Name".to_string(),
                category: "Design".to_string(),
                image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                slug: "accessibility-best-practices".to_string(),
            },
            BlogPost {
                id: 3,
                title: "How to Optimize Website Performance".to_string(),
                excerpt: "Practical tips and techniques to improve website speed and overall performance.".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap_or_default(),
                author: "Your Name".to_string(),
                category: "Performance".to_string(),
                image: "https://images.pexels.com/photos/1181373/pexels-photo-1181373.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                slug: "optimize-website-performance".to_string(),
            },
        ]
    }

    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[component]
pub fn Blog() -> Element {
    let posts = use_signal(BlogPost::sample_data);
    let mut revealed = use_signal(|| false);

    rsx! {
        section {
            id: SectionId::Blog.anchor(),
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
                    lead: "Latest",
                    accent: "Articles",
                    blurb: "Insights, thoughts, and knowledge sharing on web development, design, and technology.",
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto",
                    {posts.read().iter().map(|post| {
                        let display_date = post.display_date();
                        rsx! {
                            article {
                                key: "{post.id}",
                                class: "bg-white dark:bg-dark-800 rounded-lg overflow-hidden shadow-md hover:shadow-lg transition-shadow h-full flex flex-col",
                                div {
                                    class: "relative overflow-hidden h-48",
                                    img {
                                        src: "{post.image}",
                                        alt: "{post.title}",
                                        class: "w-full h-full object-cover transition-transform duration-500 hover:scale-110",
                                    }
                                    div {
                                        class: "absolute top-4 left-4",
                                        span {
                                            class: "px-3 py-1 bg-primary-500 text-white text-xs rounded-full font-medium",
                                            "{post.category}"
                                        }
                                    }
                                }
                                div {
                                    class: "p-6 flex-grow flex flex-col",
                                    div {
                                        class: "flex items-center text-gray-500 dark:text-gray-400 text-sm mb-4",
                                        span { class: "mr-4", "📅 {display_date}" }
                                        span { "✍ {post.author}" }
                                    }
                                    h3 {
                                        class: "text-xl font-bold text-gray-900 dark:text-white mb-3 hover:text-primary-500 dark:hover:text-primary-400 transition-colors",
                                        a { href: "#{post.slug}", "{post.title}" }
                                    }
                                    p {
                                        class: "text-gray-600 dark:text-gray-300 mb-4 flex-grow",
                                        "{post.excerpt}"
                                    }
                                    a {
                                        href: "#{post.slug}",
                                        class: "text-primary-500 dark:text-primary-400 font-medium inline-flex items-center hover:underline mt-auto",
                                        "Read More →"
                                    }
                                }
                            }
                        }
                    })}
                }

                div {
                    class: "text-center mt-12",
                    a {
                        href: "#blog",
                        class: "px-6 py-3 border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-dark-800 text-gray-700 dark:text-gray-300 rounded-lg font-medium transition-colors inline-flex items-center",
                        "View All Articles →"
                    }
                }
            }
        }
    }
}
