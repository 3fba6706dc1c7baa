use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::{use_event_listener, use_window};

use crate::sequencer::{Debounce, GalleryBinding};
use crate::viewport::{
    compute_scroll_distance, translate_for, ViewportClass, ORIENTATION_SETTLE_MS,
    RESIZE_DEBOUNCE_MS,
};

struct Project {
    number: &'static str,
    title: &'static str,
    category: &'static str,
    tools: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 5] = [
    Project {
        number: "01",
        title: "Fendi",
        category: "3D Modeling",
        tools: "Blender, Substance Painter, Low poly modeling",
        image: "/images/project1.jpg",
    },
    Project {
        number: "02",
        title: "Executive Spaces",
        category: "Web design and development",
        tools: "Javascript, Scrollmagic, PHP, Blog admin",
        image: "/images/project2.jpg",
    },
    Project {
        number: "03",
        title: "Games Catalog",
        category: "Web Application",
        tools: "React, Typescript, Express",
        image: "/images/project3.jpg",
    },
    Project {
        number: "04",
        title: "Portfolio Website",
        category: "Web Development",
        tools: "Leptos, Rust, Tailwind CSS",
        image: "/images/project4.jpg",
    },
    Project {
        number: "05",
        title: "Mobile App",
        category: "Mobile Development",
        tools: "React Native, Firebase",
        image: "/images/project5.jpg",
    },
];

fn window_width() -> f64 {
    window()
        .inner_width()
        .expect("should be able to get window width")
        .as_f64()
        .expect("window width should be a number")
}

/// Horizontally-pinned project gallery. The section pins while forward
/// scroll translates the card track left; the binding is rebuilt from
/// scratch whenever the viewport class or layout changes.
#[component]
pub fn ProjectsGallery() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let container_ref = NodeRef::<html::Div>::new();
    let track_ref = NodeRef::<html::Div>::new();

    // Viewport class + width, refreshed by the debounced handlers below.
    let viewport = RwSignal::new((ViewportClass::Desktop, 0.0f64));
    // Extra section height that provides the pinned scroll room.
    let pin_distance = RwSignal::new(0.0f64);

    let measure_viewport = move || {
        let width = window_width();
        let next = (ViewportClass::classify(width), width);
        if viewport.get_untracked() != next {
            viewport.set(next);
        }
    };

    // Initial measurement happens client-side only.
    Effect::new(move |_| measure_viewport());

    let debounce = StoredValue::new_local(Debounce::new());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);
    let schedule = move |delay_ms: u64| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let generation = debounce.with_value(|d| d.arm());
        let handle = set_timeout_with_handle(
            move || {
                if debounce.with_value(|d| d.is_current(generation)) {
                    measure_viewport();
                }
            },
            Duration::from_millis(delay_ms),
        )
        .ok();
        pending.set_value(handle);
    };

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        schedule(RESIZE_DEBOUNCE_MS);
    });
    // Orientation changes report stale dimensions briefly.
    let _ = use_event_listener(use_window(), ev::orientationchange, move |_| {
        schedule(ORIENTATION_SETTLE_MS);
    });

    // Rebuild the scroll binding whenever viewport class or layout changes.
    // The previous binding is always torn down before the new one installs.
    let binding = StoredValue::new_local(GalleryBinding::new());
    Effect::new(move |_| {
        let (class, width) = viewport.get();
        binding.update_value(|b| b.teardown());
        pin_distance.set(0.0);

        let (Some(section), Some(container), Some(track)) =
            (section_ref.get(), container_ref.get(), track_ref.get())
        else {
            return;
        };
        let content_width = track.scroll_width() as f64;
        let container_width = container.client_width() as f64;
        // Unmeasurable layout: skip this cycle rather than animate nonsense.
        if content_width <= 0.0 || container_width <= 0.0 {
            return;
        }
        let Some(seq) = compute_scroll_distance(class, width, content_width, container_width)
        else {
            return;
        };

        let track_el = track.clone();
        let section_el = section.clone();
        let stop = use_event_listener(use_window(), ev::scroll, move |_| {
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            let offset = scroll_y - section_el.offset_top() as f64;
            let x = translate_for(offset, &seq);
            let _ = track_el.set_attribute("style", &format!("transform: translateX({x}px);"));
        });

        let track_el = track.clone();
        binding.update_value(|b| {
            b.bind(
                seq,
                Box::new(move || {
                    stop();
                    let _ = track_el.set_attribute("style", "");
                }),
            )
        });
        pin_distance.set(seq.scroll_distance);
    });

    on_cleanup(move || {
        binding.update_value(|b| b.teardown());
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let section_class = move || {
        let (class, _) = viewport.get();
        match class {
            ViewportClass::Mobile => "projects-section mobile mobile-scroll-helper",
            ViewportClass::Tablet => "projects-section tablet",
            ViewportClass::Desktop => "projects-section",
        }
    };

    view! {
        <section
            node_ref=section_ref
            id="projects"
            class=section_class
            style=("min-height", move || format!("calc(100vh + {}px)", pin_distance.get()))
        >
            <div class="sticky top-0 h-screen overflow-hidden flex items-center">
                <div node_ref=container_ref class="project-container section-container w-full">
                    <h2 class="section-heading text-3xl md:text-5xl font-light mb-8">
                        "My " <span class="text-orange-400">"Work"</span>
                    </h2>
                    <div node_ref=track_ref class="project-flex flex gap-8 will-change-transform">
                        {PROJECTS.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
                        <div class="project-box view-all-box flex items-center justify-center">
                            <A href="/projects" attr:class="view-all-link text-xl">
                                <div class="flex items-center gap-2">
                                    <h3>"View All Projects"</h3>
                                    <span class="arrow-icon">"→"</span>
                                </div>
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-box flex-shrink-0 w-80 md:w-96 rounded-lg border border-white/10 bg-white/5 p-6">
            <div class="project-header flex items-baseline gap-4 mb-4">
                <div class="project-number text-4xl font-light text-orange-400">
                    {project.number}
                </div>
                <div class="project-title">
                    <h3 class="text-xl font-medium">{project.title}</h3>
                    <p class="text-sm text-white/60">{project.category}</p>
                </div>
            </div>
            <div class="project-info mb-4">
                <h4 class="text-sm font-medium text-white/80">"Tools and features"</h4>
                <p class="text-sm text-white/60">{project.tools}</p>
            </div>
            <div class="project-image rounded-md overflow-hidden">
                <img src=project.image alt=project.title loading="lazy" />
            </div>
        </div>
    }
}

/// Flat grid of every project, linked from the gallery's last card.
#[component]
pub fn AllProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="max-w-6xl mx-auto px-6 py-24">
            <h1 class="text-3xl md:text-5xl font-light mb-12">
                "All " <span class="text-orange-400">"Projects"</span>
            </h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS.iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </div>
    }
}
