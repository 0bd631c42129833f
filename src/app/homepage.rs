use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, experience::Experience, header::Header,
    loading::LoadingScreen, projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <LoadingScreen />
        <Header />
        <main class="overflow-x-hidden">
            <About />
            <Experience />
            <Skills />
            <Projects />
            <Contact />
        </main>
    }
}
