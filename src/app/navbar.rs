use leptos::prelude::*;
use leptos_router::components::A;

use super::loading::use_loading;
use super::theme::use_theme;

const SECTIONS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#experience-section", "Experience"),
    ("#projects", "Work"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let loading = use_loading();

    view! {
        <nav
            class="fixed top-0 inset-x-0 z-30 backdrop-blur-md bg-black/30 border-b border-white/10 transition-opacity duration-500"
            // Stay out of sight until the initial loading experience is done.
            class=("opacity-0", move || loading.is_initial_loading())
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between">
                <A href="/" attr:class="text-lg font-bold tracking-wide">
                    <span class="text-orange-400">"N"</span>
                    "ISHANT"
                </A>
                <div class="hidden md:flex items-center gap-6 text-sm text-white/70">
                    {SECTIONS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="hover:text-white transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    {move || {
                        loading
                            .is_route_loading()
                            .then(|| {
                                view! {
                                    <span class="w-3 h-3 rounded-full border border-orange-400 border-t-transparent animate-spin"></span>
                                }
                            })
                    }}
                    <button
                        class="text-lg px-2 py-1 rounded-md border border-white/10 hover:border-white/30 transition-colors"
                        aria-label="Toggle color theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.is_dark() { "☀" } else { "🌙" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
