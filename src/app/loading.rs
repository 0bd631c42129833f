use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    content::OWNER,
    splash::{Splash, SplashPhase, SplashTimeline},
};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let timeline = SplashTimeline::default();
    let splash = RwSignal::new(Splash::default());

    // each timer fires at a phase boundary; the timeline names the phase
    let advance_to = move |elapsed: Duration| {
        let phase = timeline.phase_at(elapsed);
        splash.update(|s| {
            s.advance(phase);
        });
        phase
    };

    // both timers are stopped if the owner is disposed first
    let UseTimeoutFnReturn {
        start: start_exit, ..
    } = use_timeout_fn(
        move |_: ()| {
            advance_to(timeline.dwell);
        },
        timeline.dwell.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_gone, ..
    } = use_timeout_fn(
        move |_: ()| {
            if advance_to(timeline.total()) == SplashPhase::Gone {
                log::debug!("loading splash dismissed");
            }
        },
        timeline.total().as_millis() as f64,
    );

    Effect::new(move |_| {
        untrack(|| {
            start_exit(());
            start_gone(());
        })
    });

    view! {
        <Show when=move || splash.get().is_visible()>
            <div
                class=move || {
                    let exiting = splash.get().phase() >= SplashPhase::Exiting;
                    format!(
                        "loading-screen fixed inset-0 z-[100] flex items-center justify-center bg-black text-white {}",
                        if exiting { "-translate-y-full" } else { "translate-y-0" },
                    )
                }
                style=format!("transition: transform {}ms cubic-bezier(0.77, 0, 0.175, 1);", timeline.exit.as_millis())
            >
                <div
                    class="loading-text text-4xl md:text-6xl font-bold tracking-widest"
                    style=format!("animation-duration: {}ms;", timeline.entrance.as_millis())
                >
                    {OWNER.to_uppercase()}
                </div>
            </div>
        </Show>
    }
}
