use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::effects::{fill_progress, item_entered, reveal, RevealPolicy};

struct ExperienceItem {
    position: &'static str,
    company: &'static str,
    year: &'static str,
    description: &'static str,
}

const EXPERIENCE: [ExperienceItem; 3] = [
    ExperienceItem {
        position: "Senior web developer",
        company: "Blue Cube Digital",
        year: "2017",
        description: "Developed and managed web projects, including frontend/backend, CMS dashboards, and responsive, accessible web pages with PHP, MySQL, and JavaScript.",
    },
    ExperienceItem {
        position: "Associate Solution Leader",
        company: "Brane Enterprises",
        year: "2020",
        description: "Built web features, product prototypes, and reusable components/microservices, implemented UI improvements and 3D UI interface compatible with Typescript.",
    },
    ExperienceItem {
        position: "Freelance & Upskilling",
        company: "Freelance",
        year: "NOW",
        description: "During this period, I worked as a freelancer for various clients, providing 3D and web services, while actively upskilling also in multiple areas increasing my Techstack.",
    },
];

fn window_height() -> f64 {
    window()
        .inner_height()
        .expect("should be able to get window height")
        .as_f64()
        .expect("window height should be a number")
}

/// Career timeline. The vertical line fills in proportion to scroll progress
/// through the section, a spark rides the fill head, and items fade in as
/// they cross the trigger line (and back out again when scrolled above it).
#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let item_refs: Vec<NodeRef<html::Div>> =
        (0..EXPERIENCE.len()).map(|_| NodeRef::new()).collect();

    let fill = RwSignal::new(0.0f64);
    let shown = RwSignal::new([false; 3]);

    let on_scroll = {
        let item_refs = item_refs.clone();
        move || {
            let viewport_h = window_height();
            let scroll_y = window().scroll_y().unwrap_or(0.0);

            if let Some(section) = section_ref.get_untracked() {
                let top = section.offset_top() as f64;
                let height = section.offset_height() as f64;
                fill.set(fill_progress(scroll_y, viewport_h, top, height));
            }

            for (i, item_ref) in item_refs.iter().enumerate() {
                if let Some(item) = item_ref.get_untracked() {
                    let entered = item_entered(item.get_bounding_client_rect().top(), viewport_h);
                    let was = shown.get_untracked()[i];
                    let next = reveal(entered, was, RevealPolicy::Reverse);
                    if next != was {
                        shown.update(|s| s[i] = next);
                    }
                }
            }
        }
    };

    Effect::new({
        let on_scroll = on_scroll.clone();
        move |_| on_scroll()
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());

    view! {
        <section
            node_ref=section_ref
            id="experience-section"
            class="relative w-full py-8 sm:py-12 md:py-20 px-3 sm:px-4 mt-8 md:mt-16 mb-4 md:mb-12"
        >
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-12 md:mb-20">
                    <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-6xl font-light leading-tight">
                        <span class="text-white">"My career"</span>
                        " "
                        <span class="text-orange-400 font-light">"&"</span>
                        <br />
                        <span class="text-orange-300">"experience"</span>
                    </h2>
                </div>

                <div class="relative">
                    // Timeline fill, growing with scroll progress.
                    <div
                        class="absolute left-6 md:left-1/2 md:-translate-x-1/2 w-[2px] bg-gradient-to-b from-orange-400 to-transparent"
                        style=("height", move || format!("{:.1}%", fill.get() * 100.0))
                    ></div>

                    // Spark riding the head of the fill.
                    <div
                        class="timeline-spark absolute left-[23px] md:left-1/2 md:-translate-x-1/2 w-3 h-3 z-10 rounded-full"
                        style=("top", move || format!("{:.1}%", fill.get() * 100.0))
                    ></div>

                    <div class="relative md:pb-20">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let item_ref = item_refs[i];
                                let alternating = if i % 2 == 0 {
                                    "md:text-right md:pr-[calc(50%+40px)]"
                                } else {
                                    "md:text-left md:pl-[calc(50%+40px)]"
                                };
                                view! {
                                    <div
                                        node_ref=item_ref
                                        class=move || {
                                            let visibility = if shown.get()[i] {
                                                "opacity-100 translate-y-0"
                                            } else {
                                                "opacity-0 translate-y-5"
                                            };
                                            format!(
                                                "mb-12 md:mb-28 relative pl-12 md:pl-0 transition-all duration-500 {alternating} {visibility}",
                                            )
                                        }
                                    >
                                        // Timeline dot, mobile only.
                                        <div class="absolute left-[15px] top-4 md:hidden w-4 h-4 rounded-full bg-orange-400 border-2 border-white z-10"></div>
                                        <div class="w-full">
                                            <div class="flex justify-between items-baseline mb-4 md:mb-6">
                                                <div class="text-3xl md:text-5xl text-orange-300 font-light">
                                                    {item.year}
                                                </div>
                                                <div>
                                                    <h3 class="text-xl md:text-3xl text-white font-light mb-2">
                                                        {item.position}
                                                    </h3>
                                                    <h4 class="text-base md:text-xl text-orange-400 font-light">
                                                        {item.company}
                                                    </h4>
                                                </div>
                                            </div>
                                            <p class="text-gray-300 text-sm md:text-base">
                                                {item.description}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
