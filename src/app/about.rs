use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::{
    content::{
        Icon, StatCounter, ABOUT_PARAGRAPHS, CORE_SKILLS, RECENT_ACHIEVEMENT,
        RECENT_ACHIEVEMENT_DETAIL, STATS,
    },
    counter::FrameClock,
    nav::{Section, SectionScroller},
    reveal::{RevealEffect, TriggerBand, STAGGER_STEP},
};

use super::{
    icon::Glyph,
    reveal::{reveal_class, use_reveal_scope, DocumentScroller},
};

#[component]
pub fn About() -> impl IntoView {
    let scope = use_reveal_scope();
    let section_ref = NodeRef::<html::Section>::new();
    let stats_ref = NodeRef::<html::Div>::new();
    let content_revealed = scope.region(section_ref, TriggerBand::TOP_80);
    let stats_revealed = scope.region(stats_ref, TriggerBand::TOP_80);

    let block = move |index: usize| {
        let style = RevealEffect::fade_up(100.0)
            .staggered(index, STAGGER_STEP)
            .style();
        (
            move || reveal_class("about-content", content_revealed.get()),
            style,
        )
    };
    let (intro_class, intro_style) = block(0);
    let (skills_class, skills_style) = block(1);
    let (stats_class, stats_style) = block(2);

    view! {
        <section id=Section::About.id() node_ref=section_ref class="py-20 bg-black text-white">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <div class=intro_class style=intro_style>
                            <h2 class="text-5xl md:text-6xl font-bold mb-6">"About Me"</h2>
                            <p class="text-xl text-gray-300 leading-relaxed mb-6">
                                {ABOUT_PARAGRAPHS[0]}
                            </p>
                            <p class="text-lg text-gray-400 leading-relaxed">
                                {ABOUT_PARAGRAPHS[1]}
                            </p>
                        </div>
                        <div class=skills_class style=skills_style>
                            <h3 class="text-2xl font-semibold mb-4">"Core Expertise"</h3>
                            <div class="space-y-4">
                                {CORE_SKILLS
                                    .iter()
                                    .map(|item| {
                                        let width = item.bar_width();
                                        view! {
                                            <div class="skill-bar">
                                                <div class="flex justify-between mb-2 text-gray-300">
                                                    <span>{item.name}</span>
                                                    <span>{format!("{}%", item.level)}</span>
                                                </div>
                                                <div class="w-full bg-gray-800 rounded-full h-2">
                                                    <div
                                                        class="bg-white h-2 rounded-full transition-all duration-1000 ease-out"
                                                        style=move || {
                                                            let w = if content_revealed.get() { width.as_str() } else { "0%" };
                                                            format!("width: {w};")
                                                        }
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div node_ref=stats_ref class=stats_class style=stats_style>
                        <div class="grid grid-cols-2 gap-8">
                            {STATS
                                .iter()
                                .map(|stat| view! { <StatCard stat=*stat revealed=stats_revealed /> })
                                .collect_view()}
                        </div>
                        <RecentAchievement />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: StatCounter, revealed: ReadSignal<bool>) -> impl IntoView {
    let tween = stat.tween();
    let (progress, set_progress) = signal(0.0_f64);
    let clock = StoredValue::new(FrameClock::default());

    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let forward = revealed.get_untracked();
            let Some(delta) = clock.try_update_value(|c| c.tick(args.timestamp)) else {
                return;
            };
            set_progress.update(|p| *p = tween.advance(*p, delta, forward));
        },
        UseRafFnOptions::default().immediate(false),
    );

    // run frames only while the counter is moving toward its endpoint
    let resume = raf.resume.clone();
    Effect::new(move |_| {
        revealed.track();
        clock.update_value(FrameClock::reset);
        resume();
    });
    let pause = raf.pause.clone();
    Effect::new(move |_| {
        if tween.is_settled(progress.get(), revealed.get_untracked()) {
            pause();
        }
    });

    view! {
        <div class="text-center p-6 bg-gray-900 rounded-lg">
            <div class="flex justify-center mb-3 text-white">
                <Glyph icon=stat.icon class="text-2xl" />
            </div>
            <div class="text-3xl md:text-4xl font-bold mb-2 tabular-nums">
                {move || stat.render(tween.value_at(progress.get()))}
            </div>
            <p class="text-gray-400 text-sm uppercase tracking-wide">{stat.label}</p>
        </div>
    }
}

#[component]
fn RecentAchievement() -> impl IntoView {
    view! {
        <div class="mt-12 p-8 bg-gray-900 rounded-lg">
            <h3 class="text-2xl font-semibold mb-4">"Recent Achievement"</h3>
            <div class="flex items-center space-x-4 mb-4">
                <Glyph icon=Icon::Trophy class=RECENT_ACHIEVEMENT.accent />
                <div>
                    <p class="text-lg font-semibold">{RECENT_ACHIEVEMENT.title}</p>
                    <p class="text-gray-300">{RECENT_ACHIEVEMENT_DETAIL}</p>
                </div>
            </div>
            <p class="text-gray-300 mb-6">{RECENT_ACHIEVEMENT.description}</p>
            <button
                on:click=move |_| {
                    DocumentScroller.scroll_to(Section::Contact.id());
                }
                class="bg-white text-black px-6 py-3 rounded-full font-medium hover:bg-gray-200 transition-all duration-300 transform hover:scale-105"
            >
                "Let's Connect"
            </button>
        </div>
    }
}
