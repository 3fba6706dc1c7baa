use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="relative py-24">
            <div class="max-w-2xl mx-auto px-6 text-center">
                <h2 class="text-3xl md:text-4xl font-light mb-8">"Let's Connect"</h2>
                <div class="bg-white/5 p-6 rounded-lg border border-white/10">
                    <p class="text-lg mb-4 text-orange-300 font-medium">
                        "Open to collaboration and interesting conversations"
                    </p>
                    <p class="mb-4 text-white/70">
                        "Whether you want to discuss an engineering challenge, explore a collaboration, or share an exciting opportunity, I'd love to hear from you."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-6">
                        <button
                            class="bg-orange-400/20 hover:bg-orange-400/30 text-orange-300 px-6 py-3 rounded-md font-medium transition-all duration-200 border border-orange-400/30"
                            onclick="navigator.clipboard.writeText('hello@nishant.dev').then(() => alert('📋 Email copied: hello@nishant.dev'))"
                        >
                            "📧 hello@nishant.dev"
                        </button>
                        <div class="flex gap-3">
                            <a
                                href="https://github.com/nishant"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-white hover:text-white/80 text-2xl"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://linkedin.com/in/nishant"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue-400 hover:text-blue-300 text-2xl"
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
