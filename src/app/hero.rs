use leptos::prelude::*;

use super::loading::use_loading;

/// Landing section. The hero artwork is the heaviest asset on the page, so
/// its load event doubles as the "model loaded" signal for the orchestrator.
#[component]
pub fn Hero() -> impl IntoView {
    let loading = use_loading();

    view! {
        <section id="hero" class="relative flex flex-col justify-center items-center min-h-screen px-6">
            <img
                class="hero-model absolute inset-0 w-full h-full object-cover opacity-40 pointer-events-none"
                src="/images/hero-model.webp"
                alt=""
                on:load=move |_| loading.set_model_loaded(true)
                on:error=move |_| loading.set_model_loaded(true)
            />
            <div class="relative z-10 text-center">
                <p class="text-sm md:text-base tracking-[0.3em] text-orange-400 mb-4">
                    "FULL STACK DEVELOPER & CREATIVE TECHNOLOGIST"
                </p>
                <h1 class="text-5xl md:text-7xl lg:text-8xl font-light leading-tight">
                    "Hi, I'm " <span class="text-orange-300">"Nishant"</span>
                </h1>
                <p class="mt-6 text-base md:text-lg text-white/60 max-w-xl mx-auto">
                    "I build immersive web experiences where engineering meets design."
                </p>
                <div class="mt-10 flex justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-md bg-orange-400/20 hover:bg-orange-400/30 text-orange-300 border border-orange-400/30 transition-colors"
                    >
                        "See my work"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md border border-white/20 hover:border-white/40 transition-colors"
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 text-white/40 text-sm animate-bounce">
                "scroll"
            </div>
        </section>
    }
}
