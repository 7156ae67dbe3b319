use crate::components::SectionHeading;
use crate::utils::scroll::SectionId;
use dioxus::prelude::*;

struct Skill {
    name: &'static str,
    percentage: u8,
}

const SKILLS: [Skill; 6] = [
    Skill { name: "HTML/CSS", percentage: 95 },
    Skill { name: "JavaScript", percentage: 90 },
    Skill { name: "React.js", percentage: 85 },
    Skill { name: "UI/UX Design", percentage: 80 },
    Skill { name: "Node.js", percentage: 75 },
    Skill { name: "TypeScript", percentage: 85 },
];

struct Service {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        glyph: "</>",
        title: "Web Development",
        description: "Building responsive and performant websites with modern technologies.",
    },
    Service {
        glyph: "🎨",
        title: "UI/UX Design",
        description: "Creating beautiful and intuitive user interfaces with a focus on user experience.",
    },
    Service {
        glyph: "📈",
        title: "SEO Optimization",
        description: "Improving website visibility on search engines to drive more traffic.",
    },
    Service {
        glyph: "🗂",
        title: "Consulting",
        description: "Providing expert advice on digital transformation and web strategies.",
    },
];

struct Experience {
    period: &'static str,
    role: &'static str,
    company: &'static str,
    description: &'static str,
}

const EXPERIENCE: [Experience; 3] = [
    Experience {
        period: "2022 - Present",
        role: "Senior Frontend Developer",
        company: "Tech Solutions Inc.",
        description: "Lead developer for client projects, focusing on React, TypeScript, and Next.js applications.",
    },
    Experience {
        period: "2019 - 2022",
        role: "UI/UX Designer & Developer",
        company: "Creative Agency",
        description: "Created responsive websites and web applications for various clients using modern technologies.",
    },
    Experience {
        period: "2018 - 2019",
        role: "Junior Web Developer",
        company: "Startup Hub",
        description: "Developed and maintained client websites, focusing on frontend technologies.",
    },
];

#[component]
pub fn About() -> Element {
    let mut revealed = use_signal(|| false);

    rsx! {
        section {
            id: SectionId::About.anchor(),
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
                    lead: "About",
                    accent: "Me",
                    blurb: "I'm a passionate web developer and designer with a strong background in creating modern and functional websites.",
                }

                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-12 mb-20",
                    div {
                        h3 { class: "text-2xl font-bold text-gray-900 dark:text-white mb-6", "Who I Am" }
                        p {
                            class: "text-gray-700 dark:text-gray-300 mb-4 leading-relaxed",
                            "I'm a creative web developer with over 5 years of experience designing and building digital products. I specialize in creating beautiful, functional websites that help businesses achieve their goals."
                        }
                        p {
                            class: "text-gray-700 dark:text-gray-300 mb-6 leading-relaxed",
                            "My approach combines clean aesthetics with solid functionality. I believe that a great website should not only look good but also provide an intuitive and seamless user experience."
                        }

                        h3 { class: "text-2xl font-bold text-gray-900 dark:text-white mb-6", "Experience" }
                        div {
                            class: "space-y-6",
                            {EXPERIENCE.iter().map(|item| rsx! {
                                div {
                                    key: "{item.period}",
                                    class: "border-l-2 border-primary-500 pl-4 py-1",
                                    span {
                                        class: "text-sm font-medium text-primary-500 dark:text-primary-400 block mb-1",
                                        "{item.period}"
                                    }
                                    h4 { class: "text-lg font-bold text-gray-900 dark:text-white", "{item.role}" }
                                    p { class: "text-gray-700 dark:text-gray-400 mb-1", "{item.company}" }
                                    p { class: "text-gray-600 dark:text-gray-300 text-sm", "{item.description}" }
                                }
                            })}
                        }
                    }

                    div {
                        h3 { class: "text-2xl font-bold text-gray-900 dark:text-white mb-6", "My Skills" }
                        div {
                            class: "space-y-5",
                            {SKILLS.iter().map(|skill| rsx! {
                                div {
                                    key: "{skill.name}",
                                    class: "mb-4",
                                    div {
                                        class: "flex justify-between mb-2",
                                        span { class: "font-medium text-gray-800 dark:text-gray-200", "{skill.name}" }
                                        span { class: "text-primary-500 dark:text-primary-400", "{skill.percentage}%" }
                                    }
                                    div {
                                        class: "w-full h-2 bg-gray-200 dark:bg-dark-700 rounded-full overflow-hidden",
                                        div {
                                            class: "h-full bg-primary-500 rounded-full skill-bar",
                                            style: if revealed() { "width: {skill.percentage}%" } else { "width: 0" },
                                        }
                                    }
                                }
                            })}
                        }

                        h3 { class: "text-2xl font-bold text-gray-900 dark:text-white mt-12 mb-6", "Services I Offer" }
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                            {SERVICES.iter().map(|service| rsx! {
                                div {
                                    key: "{service.title}",
                                    class: "p-6 bg-white dark:bg-dark-800 rounded-lg shadow-md hover:shadow-lg transition-shadow group",
                                    div {
                                        class: "text-primary-500 dark:text-primary-400 text-3xl mb-4 group-hover:scale-110 transition-transform",
                                        "{service.glyph}"
                                    }
                                    h4 { class: "text-lg font-bold text-gray-900 dark:text-white mb-2", "{service.title}" }
                                    p { class: "text-gray-600 dark:text-gray-300 text-sm", "{service.description}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
