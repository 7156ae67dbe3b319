use crate::components::SectionHeading;
use crate::utils::scroll::SectionId;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Filter value showing the whole gallery.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub demo_link: String,
    pub github_link: String,
}

impl Project {
    fn new(
        id: u32,
        title: &str,
        category: &str,
        image: &str,
        description: &str,
        technologies: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            category: category.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            demo_link: "https://example.com".to_string(),
            github_link: "https://github.com".to_string(),
        }
    }

    pub fn sample_data() -> Vec<Self> {
        vec![
            Project::new(
                1,
                "E-Commerce Website",
                "Web Development",
                "https://images.pexels.com/photos/5632402/pexels-photo-5632402.jpeg?auto=compress&cs=tinysrgb&w=800",
                "A full-featured e-commerce platform with product catalog, shopping cart, and payment integration.",
                &["React", "Node.js", "MongoDB", "Stripe"],
            ),
            Project::new(
                2,
                "Travel Blog",
                "Web Design",
                "https://images.pexels.com/photos/3601425/pexels-photo-3601425.jpeg?auto=compress&cs=tinysrgb&w=800",
                "A responsive blog for travel enthusiasts, featuring a modern design and content management system.",
                &["Next.js", "Tailwind CSS", "Sanity.io"],
            ),
            Project::new(
                3,
                "Task Management App",
                "Mobile App",
                "https://images.pexels.com/photos/3182834/pexels-photo-3182834.jpeg?auto=compress&cs=tinysrgb&w=800",
                "A productivity app for managing tasks, projects, and deadlines with team collaboration features.",
                &["React Native", "Firebase", "Redux"],
            ),
            Project::new(
                4,
                "Portfolio Website",
                "Web Design",
                "https://images.pexels.com/photos/5082579/pexels-photo-5082579.jpeg?auto=compress&cs=tinysrgb&w=800",
                "A creative portfolio website for a photographer showcasing their work with a stunning gallery.",
                &["HTML", "CSS", "JavaScript", "GSAP"],
            ),
            Project::new(
                5,
                "Weather Dashboard",
                "Web Development",
                "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800",
                "An interactive weather application providing real-time forecasts and historical data.",
                &["Vue.js", "Chart.js", "Weather API"],
            ),
            Project::new(
                6,
                "Fitness Tracker",
                "Mobile App",
                "https://images.pexels.com/photos/4498362/pexels-photo-4498362.jpeg?auto=compress&cs=tinysrgb&w=800",
                "A mobile app for tracking workouts, nutrition, and fitness goals with progress visualization.",
                &["Flutter", "Firebase", "Google Fit API"],
            ),
        ]
    }
}

/// Filter buttons: `All` first, then the distinct categories in
/// first-appearance order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !out.contains(&project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

/// Projects whose category exactly equals `category`; `All` passes everything.
pub fn filter_by_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

#[component]
pub fn Portfolio() -> Element {
    let projects = use_signal(Project::sample_data);
    let mut active_category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut active_project = use_signal(|| None::<Project>);
    let mut revealed = use_signal(|| false);

    rsx! {
        section {
            id: SectionId::Portfolio.anchor(),
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
                    lead: "My",
                    accent: "Portfolio",
                    blurb: "Check out some of my recent projects. Each one is unique and built with attention to detail.",
                }

                div {
                    class: "flex flex-wrap justify-center gap-4 mb-12",
                    {categories(&projects.read()).into_iter().map(|category| {
                        let selected = *active_category.read() == category;
                        let value = category.clone();
                        rsx! {
                            button {
                                key: "{category}",
                                class: if selected {
                                    "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-primary-500 text-white"
                                } else {
                                    "px-4 py-2 rounded-full text-sm font-medium transition-colors bg-gray-100 dark:bg-dark-700 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-dark-600"
                                },
                                onclick: move |_| active_category.set(value.clone()),
                                "{category}"
                            }
                        }
                    })}
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    {filter_by_category(&projects.read(), &active_category.read())
                        .into_iter()
                        .cloned()
                        .map(|project| {
                            let detail = project.clone();
                            rsx! {
                                div {
                                    key: "{project.id}",
                                    class: "bg-white dark:bg-dark-700 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow group",
                                    div {
                                        class: "relative overflow-hidden",
                                        img {
                                            src: "{project.image}",
                                            alt: "{project.title}",
                                            class: "w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110",
                                        }
                                    }
                                    div {
                                        class: "p-6",
                                        span {
                                            class: "text-xs font-semibold text-primary-500 dark:text-primary-400 tracking-wider uppercase",
                                            "{project.category}"
                                        }
                                        h3 {
                                            class: "text-xl font-bold text-gray-900 dark:text-white mt-2 mb-3",
                                            "{project.title}"
                                        }
                                        p {
                                            class: "text-gray-600 dark:text-gray-300 text-sm mb-4 line-clamp-2",
                                            "{project.description}"
                                        }
                                        div {
                                            class: "flex flex-wrap gap-2 mb-4",
                                            {project.technologies.iter().map(|tech| rsx! {
                                                span {
                                                    key: "{tech}",
                                                    class: "px-2 py-1 bg-gray-100 dark:bg-dark-600 text-gray-700 dark:text-gray-300 rounded text-xs",
                                                    "{tech}"
                                                }
                                            })}
                                        }
                                        button {
                                            class: "text-primary-500 dark:text-primary-400 font-medium text-sm hover:underline",
                                            onclick: move |_| active_project.set(Some(detail.clone())),
                                            "View Details"
                                        }
                                    }
                                }
                            }
                        })}
                }
            }

            if let Some(project) = active_project() {
                div {
                    class: "fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4",
                    div {
                        class: "bg-white dark:bg-dark-800 rounded-lg max-w-3xl w-full max-h-[90vh] overflow-auto",
                        div {
                            class: "relative h-64 sm:h-80",
                            img {
                                src: "{project.image}",
                                alt: "{project.title}",
                                class: "w-full h-full object-cover",
                            }
                            button {
                                class: "absolute top-4 right-4 bg-white/80 dark:bg-dark-900/80 p-2 rounded-full text-gray-700 dark:text-white hover:bg-white dark:hover:bg-dark-900",
                                onclick: move |_| active_project.set(None),
                                "✕"
                            }
                        }
                        div {
                            class: "p-6",
                            h3 { class: "text-2xl font-bold text-gray-900 dark:text-white", "{project.title}" }
                            span {
                                class: "text-sm font-medium text-primary-500 dark:text-primary-400",
                                "{project.category}"
                            }
                            p { class: "text-gray-700 dark:text-gray-300 my-6", "{project.description}" }
                            div {
                                class: "mb-6",
                                h4 {
                                    class: "text-lg font-semibold text-gray-900 dark:text-white mb-3",
                                    "Technologies Used"
                                }
                                div {
                                    class: "flex flex-wrap gap-2",
                                    {project.technologies.iter().map(|tech| rsx! {
                                        span {
                                            key: "{tech}",
                                            class: "px-3 py-1 bg-gray-100 dark:bg-dark-700 text-gray-700 dark:text-gray-300 rounded-full text-sm",
                                            "{tech}"
                                        }
                                    })}
                                }
                            }
                            div {
                                class: "flex space-x-4",
                                a {
                                    href: "{project.demo_link}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "px-6 py-2.5 bg-primary-500 hover:bg-primary-600 text-white rounded-lg font-medium transition-colors shadow-md inline-flex items-center",
                                    "Live Demo"
                                }
                                a {
                                    href: "{project.github_link}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "px-6 py-2.5 border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-dark-700 text-gray-700 dark:text-gray-300 rounded-lg font-medium transition-colors inline-flex items-center",
                                    "View Code"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
