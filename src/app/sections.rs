use leptos::prelude::*;

use crate::config::{build_year, SiteConfig, SITE_CONFIG};
use crate::effects::{stagger_delay, HoverEffect};

use super::links::{ExternalLink, LoggedImage};
use super::motion::{Hover, Reveal};

#[component]
fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! { <h2 class="section-title text-3xl font-bold text-center mb-12">{text}</h2> }
}

#[component]
pub fn About() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    view! {
        <section id="about" class="py-20">
            <div class="mx-auto max-w-6xl px-4">
                <SectionTitle text="About Me" />
                <Reveal class="about-content flex flex-col md:flex-row gap-8 items-center">
                    {config
                        .owner
                        .avatar
                        .clone()
                        .map(|src| {
                            view! {
                                <LoggedImage
                                    src=src
                                    alt=config.owner.name.clone()
                                    class="w-48 h-48 rounded-full object-cover shadow-lg"
                                />
                            }
                        })}
                    <div class="space-y-4 text-lg leading-relaxed">
                        {config
                            .about
                            .iter()
                            .map(|p| view! { <p>{p.clone()}</p> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    view! {
        <section id="skills" class="py-20 bg-surface">
            <div class="mx-auto max-w-6xl px-4">
                <SectionTitle text="Skills" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {config
                        .skills
                        .iter()
                        .map(|category| {
                            view! {
                                <Reveal class="skill-category p-6 rounded-lg shadow">
                                    <h3 class="text-xl font-semibold mb-4">
                                        {category.name.clone()}
                                    </h3>
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <Hover
                                                    effect=HoverEffect::Skill
                                                    class="skill-item py-2 px-3 mb-2 rounded"
                                                >
                                                    {skill.clone()}
                                                </Hover>
                                            }
                                        })
                                        .collect_view()}
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    view! {
        <section id="projects" class="py-20">
            <div class="mx-auto max-w-6xl px-4">
                <SectionTitle text="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {config
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    class="project-card h-full rounded-lg shadow overflow-hidden"
                                    hover=HoverEffect::Project
                                    delay=stagger_delay(i)
                                >
                                    {project
                                        .image
                                        .clone()
                                        .map(|src| {
                                            view! {
                                                <LoggedImage
                                                    src=src
                                                    alt=project.title.clone()
                                                    class="w-full h-48 object-cover"
                                                />
                                            }
                                        })}
                                    <div class="p-6">
                                        <h3 class="text-xl font-semibold mb-2">
                                            {project.title.clone()}
                                        </h3>
                                        <p class="mb-4">{project.description.clone()}</p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="rounded-md px-2 py-1 text-sm bg-tag">
                                                            {tag.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        {project
                                            .url
                                            .clone()
                                            .map(|url| {
                                                view! {
                                                    <ExternalLink href=url class="btn btn-outline">
                                                        <i class="fab fa-github mr-2" />
                                                        "View Code"
                                                    </ExternalLink>
                                                }
                                            })}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    let year = build_year().map(|y| format!("© {y} ")).unwrap_or_default();
    view! {
        <footer class="py-8 text-center text-sm text-muted">
            <p>{year} {config.owner.name.clone()}". All rights reserved."</p>
            <div class="flex justify-center gap-4 mt-2">
                {config
                    .contact
                    .links
                    .iter()
                    .map(|link| {
                        view! { <ExternalLink href=link.url.clone()>{link.label.clone()}</ExternalLink> }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
