use leptos::prelude::*;

const SKILL_GROUPS: [(&str, &str); 4] = [
    (
        "Frontend",
        "TypeScript, JavaScript, React, Leptos, WebAssembly, HTML, CSS, Tailwind",
    ),
    (
        "Backend",
        "Rust, Go, Python, SQL, PostgreSQL, Redis, Axum, REST APIs",
    ),
    (
        "Creative",
        "Blender, Three.js, GSAP-style animation, UI/UX, video editing",
    ),
    (
        "Tooling",
        "Git, Docker, CI/CD, Linux, performance profiling",
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-20">
            <div class="max-w-5xl mx-auto px-6">
                <h2 class="text-3xl md:text-4xl font-light mb-12 text-center">
                    "Skills " <span class="text-orange-400">"&"</span> " Tools"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(group, items)| {
                            view! {
                                <div class="rounded-lg border border-white/10 bg-white/5 p-6">
                                    <h3 class="text-lg font-medium text-orange-300 mb-3">
                                        {*group}
                                    </h3>
                                    <p class="text-sm text-white/60 leading-relaxed">{*items}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
