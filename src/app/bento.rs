use leptos::{html, prelude::*};

use crate::effects::{
    card_glow, magnetism, tilt, CardRect, GlowVars, GLOW_COLOR, PARTICLE_COUNT, SPOTLIGHT_RADIUS,
};
use crate::viewport::ViewportClass;

struct BentoCard {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    class: &'static str,
}

const CARDS: [BentoCard; 5] = [
    BentoCard {
        title: "About Me",
        description: "Full stack developer passionate about creating innovative digital experiences",
        icon: "👤",
        class: "bento-card--about",
    },
    BentoCard {
        title: "Top Skills",
        description: "Rust, TypeScript, UI/UX, Three.js, WebAssembly",
        icon: "⌨",
        class: "bento-card--skills",
    },
    BentoCard {
        title: "Featured Projects",
        description: "Showcase of my best creative work and developments",
        icon: "↗",
        class: "bento-card--projects",
    },
    BentoCard {
        title: "Experience",
        description: "3+ years in full-stack development and creative design",
        icon: "💼",
        class: "bento-card--experience",
    },
    BentoCard {
        title: "Achievements",
        description: "Awards, certifications and recognitions",
        icon: "🏆",
        class: "bento-card--achievements",
    },
];

fn inline_style(vars: GlowVars, rotate: (f64, f64), shift: (f64, f64)) -> String {
    let (rotate_x, rotate_y) = rotate;
    let (shift_x, shift_y) = shift;
    format!(
        "--glow-x: {:.1}%; --glow-y: {:.1}%; --glow-intensity: {:.2}; --glow-radius: {:.0}px; \
         --glow-color: {GLOW_COLOR}; \
         transform: perspective(1000px) translate({shift_x:.1}px, {shift_y:.1}px) \
         rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg);",
        vars.x_pct, vars.y_pct, vars.intensity, vars.radius,
    )
}

/// Bento grid of glow cards. Pointer position maps to glow/tilt descriptors
/// through the pure functions in `effects`; this component only applies the
/// resulting style string.
#[component]
pub fn BentoGrid() -> impl IntoView {
    view! {
        <section id="bento" class="relative py-16">
            <div class="max-w-5xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-4 bento-grid">
                {CARDS.iter().map(|card| view! { <ParticleCard card=card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ParticleCard(card: &'static BentoCard) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let style = RwSignal::new(String::new());
    let hovered = RwSignal::new(false);

    let rect_of = move || {
        card_ref.get_untracked().map(|el| {
            let rect = el.get_bounding_client_rect();
            CardRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        })
    };

    // Decorative hover effects are skipped on touch-sized viewports.
    let animations_enabled = move || {
        window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(|w| !ViewportClass::classify(w).is_mobile())
            .unwrap_or(false)
    };

    let on_move = move |ev: leptos::ev::PointerEvent| {
        if !animations_enabled() {
            return;
        }
        let Some(rect) = rect_of() else { return };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let (ox, oy) = (x - rect.left, y - rect.top);
        let vars = card_glow(x, y, rect, SPOTLIGHT_RADIUS);
        let rotate = tilt(ox, oy, rect.width, rect.height);
        let shift = magnetism(ox, oy, rect.width, rect.height);
        style.set(inline_style(vars, rotate, shift));
    };

    view! {
        <div
            node_ref=card_ref
            class=format!(
                "bento-card {} relative overflow-hidden rounded-xl border border-white/10 bg-white/5 p-6 transition-transform",
                card.class,
            )
            style=move || style.get()
            on:pointerenter=move |_| hovered.set(true)
            on:pointerleave=move |_| {
                hovered.set(false);
                style.set(String::new());
            }
            on:pointermove=on_move
        >
            {(0..PARTICLE_COUNT)
                .map(|i| {
                    // Deterministic scatter; CSS animates the drift.
                    let left = (i * 37 + 13) % 90 + 5;
                    let top = (i * 53 + 29) % 90 + 5;
                    let delay = i as f64 * 0.1;
                    view! {
                        <span
                            class="particle pointer-events-none"
                            class=("particle--active", move || hovered.get())
                            style=format!(
                                "left: {left}%; top: {top}%; animation-delay: {delay:.1}s;",
                            )
                        ></span>
                    }
                })
                .collect_view()}
            <div class="relative z-10 flex flex-col h-full">
                <div class="flex items-center gap-2 mb-4">
                    <span class="text-xl">{card.icon}</span>
                    <h3 class="text-lg font-medium">{card.title}</h3>
                </div>
                <p class="text-sm text-white/60">{card.description}</p>
            </div>
        </div>
    }
}
