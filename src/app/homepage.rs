use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::bento::BentoGrid;
use super::contact::Contact;
use super::experience::ExperienceTimeline;
use super::hero::Hero;
use super::loading::use_loading;
use super::projects::ProjectsGallery;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    let loading = use_loading();

    view! {
        <Title text="Portfolio" />
        <Hero />
        <div class="section-divider my-8 sm:my-12 md:my-16"></div>
        <BentoGrid />
        <div class="section-divider my-12 sm:my-16 md:my-20"></div>
        <About />
        <ExperienceTimeline />
        <div class="section-divider my-8 sm:my-12 md:my-16"></div>
        <Skills />
        <ProjectsGallery />
        <Contact />
        <footer class="py-16 text-center text-xs text-white/40">
            <p>"© 2025 Nishant. All rights reserved."</p>
            <button
                class="mt-4 underline hover:text-white/70 transition-colors"
                on:click=move |_| loading.start_initial_loading()
            >
                "Replay intro"
            </button>
        </footer>
    }
}
