use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative py-28">
            <div class="max-w-5xl mx-auto px-6 md:px-10">
                <h2 class="text-3xl md:text-4xl font-bold mb-8">"About Me"</h2>
                <p class="text-lg leading-relaxed max-w-3xl text-white/70">
                    "I am a multi-disciplinary creator blending engineering and design to craft immersive, performant web experiences. From "
                    <span class="font-medium text-white">"frontend"</span>
                    " micro-interactions and visually rich "
                    <span class="font-medium text-white">"3D interfaces"</span>
                    " to scalable " <span class="font-medium text-white">"backend architecture"</span>
                    ", I enjoy owning the full stack. My creative background in "
                    <span class="font-medium text-white">"UI/UX"</span> " and "
                    <span class="font-medium text-white">"graphic design"</span>
                    " helps me ship cohesive, branded experiences."
                </p>
            </div>
        </section>
    }
}
