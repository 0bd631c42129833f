use std::time::Duration;

use leptos::{html, prelude::*};

use crate::{
    content::{featured_projects, other_projects, Icon, Project, ACHIEVEMENTS, GITHUB},
    nav::Section,
    reveal::{RevealEffect, TriggerBand},
};

use super::{
    icon::Glyph,
    reveal::{reveal_class, use_reveal_scope},
};

const PROJECT_STAGGER: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardLayout {
    Featured,
    Compact,
}

#[component]
pub fn Projects() -> impl IntoView {
    let scope = use_reveal_scope();
    let section_ref = NodeRef::<html::Section>::new();
    let header_ref = NodeRef::<html::Div>::new();
    let cards_revealed = scope.region(section_ref, TriggerBand::TOP_80);
    let title_revealed = scope.region(header_ref, TriggerBand::TOP_90);
    let title_style = RevealEffect::fade_up(50.0).style();

    // the cascade runs across both grids in page order
    let featured = featured_projects().collect::<Vec<_>>();
    let offset = featured.len();
    let card = move |index: usize, project: &'static Project, layout: CardLayout| {
        let style = RevealEffect::fade_up(100.0)
            .staggered(index, PROJECT_STAGGER)
            .style();
        view! { <ProjectCard project layout revealed=cards_revealed style /> }
    };

    view! {
        <section id=Section::Projects.id() node_ref=section_ref class="py-20 bg-black text-white">
            <div class="max-w-7xl mx-auto px-6">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class=move || reveal_class("text-5xl md:text-6xl font-bold mb-6", title_revealed.get())
                        style=title_style.clone()
                    >
                        "Featured Projects"
                    </h2>
                    <p
                        class=move || reveal_class("text-xl text-gray-300 max-w-3xl mx-auto", title_revealed.get())
                        style=title_style.clone()
                    >
                        "A showcase of my recent work spanning full-stack development, blockchain technology, and machine learning applications."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mb-16">
                    {featured
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| card(i, p, CardLayout::Featured))
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-16">
                    {other_projects()
                        .enumerate()
                        .map(|(i, p)| card(offset + i, p, CardLayout::Compact))
                        .collect_view()}
                </div>
                <div class="bg-gray-900 rounded-lg p-8">
                    <h3 class="text-3xl font-bold mb-8 text-center">"Key Achievements"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {ACHIEVEMENTS
                            .iter()
                            .map(|a| {
                                view! {
                                    <div class="text-center p-6 bg-gray-800 rounded-lg">
                                        <div class="flex justify-center mb-4">
                                            <Glyph icon=a.icon class=a.accent />
                                        </div>
                                        <h4 class="text-lg font-semibold mb-2">{a.title}</h4>
                                        <p class="text-gray-400 text-sm">{a.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="text-center mt-16">
                    <a
                        href=GITHUB
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-white text-black px-8 py-4 rounded-full text-lg font-medium hover:bg-gray-200 transition-all duration-300 transform hover:scale-105 inline-flex items-center space-x-2"
                    >
                        <Glyph icon=Icon::Github />
                        <span>"View All Projects on GitHub"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    layout: CardLayout,
    revealed: ReadSignal<bool>,
    style: String,
) -> impl IntoView {
    let featured = layout == CardLayout::Featured;
    let (image_height, title_size, body_size) = if featured {
        ("h-64", "text-2xl", "")
    } else {
        ("h-48", "text-xl", "text-sm")
    };
    // compact cards only link to the source repository
    let live_link = if featured { project.link } else { None };

    view! {
        <div
            class=move || reveal_class(
                "project-item group relative overflow-hidden rounded-lg bg-gray-900 hover:bg-gray-800",
                revealed.get(),
            )
            style=style
        >
            {project
                .award
                .filter(|_| featured)
                .map(|award| {
                    view! {
                        <div class="absolute top-4 left-4 z-10 bg-yellow-400 text-black px-3 py-1 rounded-full text-sm font-medium">
                            "🏆 " {award}
                        </div>
                    }
                })}
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class=format!(
                        "w-full {image_height} object-cover group-hover:scale-110 transition-transform duration-500",
                    )
                />
                <div class="absolute inset-0 bg-black bg-opacity-40 group-hover:bg-opacity-60 transition-all duration-300"></div>
                <div class="absolute top-4 right-4 flex space-x-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    {live_link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("{} live demo", project.title)
                                    class="p-2 bg-white text-black rounded-full hover:bg-gray-200 transition-colors duration-300"
                                >
                                    <Glyph icon=Icon::ExternalLink />
                                </a>
                            }
                        })}
                    <a
                        href=project.source
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=format!("{} source code", project.title)
                        class="p-2 bg-white text-black rounded-full hover:bg-gray-200 transition-colors duration-300"
                    >
                        <Glyph icon=Icon::Github />
                    </a>
                </div>
            </div>
            <div class="p-6">
                <span class="text-sm text-gray-400 uppercase tracking-wide">{project.category}</span>
                <h3 class=format!(
                    "{title_size} font-semibold mt-2 mb-3 group-hover:text-blue-400 transition-colors duration-300",
                )>{project.title}</h3>
                <p class=format!("text-gray-300 {body_size} leading-relaxed mb-4")>
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-gray-800 text-gray-300 text-xs rounded group-hover:bg-gray-700 transition-colors duration-300">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
