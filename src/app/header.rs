use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::{
    content::{Icon, TAGLINE},
    nav::{is_scrolled, NavOutcome, NavState, Section},
};

use super::{icon::Glyph, reveal::DocumentScroller};

#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    let go_to = move |section: Section| {
        let outcome = nav
            .try_update(|n| n.navigate(&DocumentScroller, section.id()))
            .unwrap_or(NavOutcome::Missing);
        if outcome == NavOutcome::Missing {
            log::debug!("no element for section '{section}'");
        }
    };

    let nav_button = move |section: Section, class: &'static str| {
        view! {
            <button on:click=move |_| go_to(section) class=class>
                {section.label()}
            </button>
        }
    };

    view! {
        <header class=move || {
            format!(
                "header header-enter fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled.get() {
                    "bg-white/90 backdrop-blur-md shadow-sm"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <div class="text-lg font-medium">
                    <span class="text-gray-500">{TAGLINE}</span>
                </div>
                <nav class="hidden md:flex space-x-8">
                    {Section::NAV
                        .into_iter()
                        .map(|s| {
                            nav_button(
                                s,
                                "text-gray-600 hover:text-black transition-colors duration-300",
                            )
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden relative z-50 w-10 h-10 flex items-center justify-center rounded-full"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle)
                >
                    {move || {
                        if nav.get().menu_open {
                            Either::Left(view! { <Glyph icon=Icon::X class="text-2xl text-white" /> })
                        } else {
                            Either::Right(view! { <Glyph icon=Icon::Menu class="text-2xl" /> })
                        }
                    }}
                    <span class="sr-only">"Menu"</span>
                </button>
            </div>
        </header>
        <div class=move || {
            format!(
                "mobile-menu fixed top-0 right-0 w-full h-screen bg-black text-white z-40 transform transition-transform duration-500 ease-out {}",
                nav.get().panel().class(),
            )
        }>
            <div class="flex flex-col justify-center items-center h-full space-y-8 text-2xl">
                {Section::NAV
                    .into_iter()
                    .map(|s| nav_button(s, "hover:text-gray-300 transition-colors duration-300"))
                    .collect_view()}
            </div>
        </div>
    }
}
