use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use crate::{
    content::{ExperienceEntry, Icon, TimelineSide, EXPERIENCES},
    nav::{Section, SectionScroller},
    reveal::{parallax_shift, RevealEffect, TriggerBand},
};

use super::{
    icon::Glyph,
    reveal::{bounds_of, reveal_class, use_reveal_scope, DocumentScroller, RevealScope},
};

const PARALLAX_PERCENT: f64 = -30.0;

#[component]
pub fn Experience() -> impl IntoView {
    let scope = use_reveal_scope();
    let section_ref = NodeRef::<html::Section>::new();
    let timeline_ref = NodeRef::<html::Div>::new();
    let title_revealed = scope.region(section_ref, TriggerBand::TOP_85);
    let line_revealed = scope.region(timeline_ref, TriggerBand::TOP_80);

    let (_, scroll_y) = use_window_scroll();
    let parallax = move || {
        scroll_y.track();
        let shift = section_ref
            .get_untracked()
            .map(|el| {
                let height = window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or_default();
                parallax_shift(bounds_of(&el), height, PARALLAX_PERCENT)
            })
            .unwrap_or_default();
        format!("transform: translateY({shift}%);")
    };

    let title_style = RevealEffect::fade_up(100.0)
        .lasting(Duration::from_millis(1200))
        .style();

    view! {
        <section
            id=Section::Experience.id()
            node_ref=section_ref
            class="py-20 bg-gray-50 relative overflow-hidden"
        >
            <div class="experience-bg absolute inset-0 opacity-5" style=parallax>
                <div class="absolute top-20 left-10 w-32 h-32 bg-black rounded-full"></div>
                <div class="absolute bottom-20 right-10 w-24 h-24 bg-gray-800 rounded-full"></div>
            </div>
            <div class="max-w-7xl mx-auto px-6 relative z-10">
                <div class="text-center mb-16">
                    <h2
                        class=move || reveal_class("text-5xl md:text-6xl font-bold mb-6", title_revealed.get())
                        style=title_style.clone()
                    >
                        "Professional Experience"
                    </h2>
                    <p
                        class=move || reveal_class("text-xl text-gray-600 max-w-3xl mx-auto", title_revealed.get())
                        style=title_style.clone()
                    >
                        "Building expertise through hands-on experience in machine learning, software development, and collaborative problem-solving."
                    </p>
                </div>
                <div node_ref=timeline_ref class="relative">
                    <div
                        class="timeline-line absolute left-1/2 -translate-x-1/2 w-1 bg-black h-full hidden lg:block origin-top transition-transform duration-[1500ms] ease-out"
                        style=move || {
                            format!("transform: scaleY({});", if line_revealed.get() { 1 } else { 0 })
                        }
                    ></div>
                    <div class="space-y-12">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! { <ExperienceCard entry=*entry index=index scope=scope /> }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="text-center mt-16">
                    <div class="bg-white p-8 rounded-lg shadow-sm max-w-2xl mx-auto">
                        <h3 class="text-2xl font-semibold mb-4">"Ready for New Opportunities"</h3>
                        <p class="text-gray-600 mb-6">
                            "I'm actively seeking internship and full-time positions where I can contribute my technical skills and continue growing as a software developer."
                        </p>
                        <button
                            on:click=move |_| {
                                DocumentScroller.scroll_to(Section::Contact.id());
                            }
                            class="bg-black text-white px-8 py-3 rounded-full font-medium hover:bg-gray-800 transition-all duration-300 transform hover:scale-105 inline-flex items-center space-x-2"
                        >
                            <span>"Let's Connect"</span>
                            <Glyph icon=Icon::ExternalLink />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry, index: usize, scope: RevealScope) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = scope.region(card_ref, TriggerBand::TOP_85);
    let side = TimelineSide::for_index(index);
    let (row, align, justify, pad) = match side {
        TimelineSide::Left => ("lg:flex-row", "lg:text-right", "lg:justify-end", "lg:pr-8"),
        TimelineSide::Right => ("lg:flex-row-reverse", "lg:text-left", "lg:justify-start", "lg:pl-8"),
    };
    let card_style = RevealEffect::slide_x(f64::from(side.entry_offset()))
        .scale_from(0.8)
        .style();
    let dot_style = RevealEffect::pop().style();

    view! {
        <div
            node_ref=card_ref
            class=move || {
                reveal_class(
                    &format!("experience-card group relative flex items-center flex-col lg:space-x-8 {row}"),
                    revealed.get(),
                )
            }
            style=card_style
        >
            <div class="absolute left-1/2 -translate-x-1/2 z-10 hidden lg:block">
                <div
                    class=move || {
                        reveal_class(
                            "timeline-dot w-4 h-4 bg-black rounded-full border-4 border-white shadow-lg",
                            revealed.get(),
                        )
                    }
                    style=dot_style
                ></div>
            </div>
            <div class=format!("w-full lg:w-5/12 {align} {pad}")>
                <div class="bg-white p-8 rounded-lg shadow-lg transition-all duration-300 hover:shadow-xl group-hover:-translate-y-1 group-hover:scale-[1.02]">
                    <div class="flex items-center space-x-2 mb-2">
                        <span class="experience-icon text-black transition-transform duration-700 group-hover:rotate-[360deg]">
                            <Glyph icon=entry.icon class="text-2xl" />
                        </span>
                        <span class="text-sm text-gray-500 uppercase tracking-wide font-medium">
                            {entry.employment_type}
                        </span>
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-1">{entry.title}</h3>
                    <h4 class="text-xl font-semibold text-gray-700 mb-2">{entry.employer}</h4>
                    <div class=format!(
                        "flex items-center space-x-4 mb-4 text-gray-600 justify-start {justify}",
                    )>
                        <div class="flex items-center space-x-1">
                            <Glyph icon=Icon::Calendar />
                            <span class="text-sm">{entry.duration}</span>
                        </div>
                        <div class="flex items-center space-x-1">
                            <Glyph icon=Icon::MapPin />
                            <span class="text-sm">{entry.location}</span>
                        </div>
                    </div>
                    <p class="text-gray-600 leading-relaxed mb-6">{entry.description}</p>
                    <div class="mb-6">
                        <h5 class="font-semibold text-gray-800 mb-3 flex items-center">
                            <Glyph icon=Icon::TrendingUp class="mr-2" />
                            "Key Achievements"
                        </h5>
                        <ul class=format!("space-y-2 {align}")>
                            {entry
                                .achievements
                                .iter()
                                .map(|a| {
                                    view! {
                                        <li class="text-gray-600 text-sm flex items-start">
                                            <span class="w-2 h-2 bg-black rounded-full mt-2 mr-3 flex-shrink-0"></span>
                                            <span>{*a}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class=format!("flex flex-wrap gap-2 justify-start {justify}")>
                        {entry
                            .skills
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-100 text-gray-700 text-xs rounded-full hover:bg-black hover:text-white transition-colors duration-300">
                                        {*s}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="w-full lg:w-5/12 hidden lg:block"></div>
        </div>
    }
}
