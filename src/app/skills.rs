use std::time::Duration;

use leptos::{html, prelude::*};

use crate::{
    content::{SERVICES, TOOLBOX},
    nav::Section,
    reveal::{RevealEffect, TriggerBand, STAGGER_STEP},
};

use super::{
    icon::Glyph,
    reveal::{reveal_class, use_reveal_scope},
};

#[component]
pub fn Skills() -> impl IntoView {
    let scope = use_reveal_scope();
    let section_ref = NodeRef::<html::Section>::new();
    let header_ref = NodeRef::<html::Div>::new();
    let items_revealed = scope.region(section_ref, TriggerBand::TOP_80);
    let title_revealed = scope.region(header_ref, TriggerBand::TOP_90);
    let title_style = RevealEffect::fade_up(50.0).style();

    view! {
        <section id=Section::Skills.id() node_ref=section_ref class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-6">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class=move || reveal_class("text-5xl md:text-6xl font-bold mb-6", title_revealed.get())
                        style=title_style.clone()
                    >
                        "Technical Skills"
                    </h2>
                    <p
                        class=move || reveal_class("text-xl text-gray-600 max-w-3xl mx-auto", title_revealed.get())
                        style=title_style.clone()
                    >
                        "A comprehensive skill set developed through academic coursework, personal projects, and hands-on experience in competitive programming and hackathons."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let style = RevealEffect::fade_up(80.0)
                                .lasting(Duration::from_millis(800))
                                .staggered(index, STAGGER_STEP)
                                .style();
                            view! {
                                <div
                                    class=move || reveal_class(
                                        "skill-item group bg-white p-8 rounded-lg shadow-sm hover:shadow-lg",
                                        items_revealed.get(),
                                    )
                                    style=style
                                >
                                    <div class="flex items-start justify-between mb-6">
                                        <span class="text-black group-hover:text-blue-600 transition-colors duration-300">
                                            <Glyph icon=service.icon class="text-4xl" />
                                        </span>
                                        <span class="text-4xl font-bold text-gray-200 group-hover:text-gray-400 transition-colors duration-300">
                                            {service.ordinal}
                                        </span>
                                    </div>
                                    <h3 class="text-2xl font-semibold mb-4 group-hover:text-blue-600 transition-colors duration-300">
                                        {service.title}
                                    </h3>
                                    <p class="text-gray-600 leading-relaxed mb-6">{service.description}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {service
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-3 py-1 bg-gray-100 text-gray-700 text-sm rounded-full group-hover:bg-blue-50 group-hover:text-blue-700 transition-colors duration-300">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-16">
                    <div class="bg-white p-8 rounded-lg shadow-sm max-w-4xl mx-auto">
                        <h3 class="text-2xl font-semibold mb-4">"Programming Languages & Tools"</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                            {TOOLBOX
                                .iter()
                                .map(|group| {
                                    view! {
                                        <div class="p-4">
                                            <h4 class="font-semibold text-gray-800 mb-2">{group.title}</h4>
                                            <p class="text-sm text-gray-600">{group.items.join(", ")}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
