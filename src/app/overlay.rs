use std::time::Duration;

use leptos::{either::*, prelude::*};
use leptos_router::hooks::use_location;

use crate::loading::{OverlayKind, RETRO_HOLD_MS, RETRO_TEXT_MS, RETRO_TICK_MS, RETRO_TICK_STEP};

use super::loading::use_loading;

/// How long the route-transition overlay stays up.
const ROUTE_OVERLAY_MS: u64 = 600;

const STATUS_LINES: [&str; 6] = [
    "INITIALIZING...",
    "LOADING ASSETS...",
    "PREPARING 3D MODELS...",
    "OPTIMIZING PERFORMANCE...",
    "ALMOST READY...",
    "WELCOME BACK!",
];

/// Renders the page underneath and stacks the active loading overlay on top.
/// Children always render so heavy page assets start loading immediately.
#[component]
pub fn LoadingGate(children: Children) -> impl IntoView {
    let loading = use_loading();

    // Navigating to another route brings up the lightweight overlay.
    Effect::watch(
        move || use_location().pathname.get(),
        move |_, prev, _| {
            if prev.is_some() {
                loading.start_route_loading();
            }
        },
        false,
    );

    view! {
        {children()}
        {move || {
            loading
                .active_overlay()
                .map(|overlay| match overlay {
                    OverlayKind::Intro => EitherOf3::A(view! { <IntroOverlay /> }),
                    OverlayKind::Retro => EitherOf3::B(view! { <RetroOverlay /> }),
                    OverlayKind::Route => EitherOf3::C(view! { <RouteOverlay /> }),
                })
        }}
    }
}

/// First-visit experience: full-screen intro video. Ending (or skipping, or
/// failing to play) marks the video complete; the orchestrator takes it from
/// there.
#[component]
fn IntroOverlay() -> impl IntoView {
    let loading = use_loading();

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black">
            <video
                class="w-full h-full object-cover"
                src="/videos/intro.mp4"
                autoplay=true
                muted=true
                playsinline=true
                on:ended=move |_| loading.set_video_complete(true)
                on:error=move |_| loading.set_video_complete(true)
            ></video>
            <button
                class="absolute bottom-8 right-8 px-4 py-2 text-sm text-white/70 hover:text-white border border-white/30 rounded-md transition-colors"
                on:click=move |_| loading.set_video_complete(true)
            >
                "Skip intro"
            </button>
            <p class="absolute bottom-8 left-8 text-xs tracking-widest text-white/50">
                {move || {
                    if loading.is_model_loaded() { "ASSETS READY" } else { "LOADING ASSETS..." }
                }}
            </p>
        </div>
    }
}

/// Fast acknowledgment for returning visitors: a retro progress bar that
/// fills on a fixed clock, then hands control back to the orchestrator.
#[component]
fn RetroOverlay() -> impl IntoView {
    let loading = use_loading();
    let progress = RwSignal::new(0u32);
    let status = RwSignal::new(0usize);

    let tick = StoredValue::new_local(None::<IntervalHandle>);
    let text = StoredValue::new_local(None::<IntervalHandle>);
    let hold = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                let p = progress.get_untracked();
                if p >= 100 {
                    if let Some(h) = tick.get_value() {
                        h.clear();
                    }
                    let done = set_timeout_with_handle(
                        move || loading.finish_initial_loading(),
                        Duration::from_millis(RETRO_HOLD_MS),
                    )
                    .ok();
                    hold.set_value(done);
                } else {
                    progress.set(p + RETRO_TICK_STEP);
                }
            },
            Duration::from_millis(RETRO_TICK_MS),
        )
        .ok();
        tick.set_value(handle);

        let handle = set_interval_with_handle(
            move || status.update(|i| *i = (*i + 1) % STATUS_LINES.len()),
            Duration::from_millis(RETRO_TEXT_MS),
        )
        .ok();
        text.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(h) = tick.get_value() {
            h.clear();
        }
        if let Some(h) = text.get_value() {
            h.clear();
        }
        if let Some(h) = hold.get_value() {
            h.clear();
        }
    });

    let pct = move || progress.get().min(100);

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black font-mono">
            <div class="retro-grid absolute inset-0 opacity-20"></div>
            <div class="relative z-10 text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-8 text-cyan-400 retro-text">
                    "NISHANT.EXE"
                </h1>
                <div class="w-80 h-4 mx-auto mb-6 border-2 border-cyan-400 relative overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-cyan-400 to-blue-500"
                        style=("width", move || format!("{}%", pct()))
                    ></div>
                    <div class="absolute inset-0 flex items-center justify-center text-black font-bold text-sm">
                        {move || format!("{}%", pct())}
                    </div>
                </div>
                <p class="text-lg tracking-wider text-cyan-400">
                    {move || STATUS_LINES[status.get() % STATUS_LINES.len()]}
                </p>
                <div class="mt-8 flex justify-center space-x-2">
                    {(0..5u32)
                        .map(|i| {
                            view! {
                                <div
                                    class="w-3 h-3 border border-cyan-400"
                                    class=("bg-cyan-400", move || progress.get() > i * 20)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="scanlines absolute inset-0 pointer-events-none"></div>
        </div>
    }
}

/// Route-transition overlay: fixed duration, then finishes itself.
#[component]
fn RouteOverlay() -> impl IntoView {
    let loading = use_loading();
    let done = StoredValue::new_local(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let handle = set_timeout_with_handle(
            move || loading.finish_route_loading(),
            Duration::from_millis(ROUTE_OVERLAY_MS),
        )
        .ok();
        done.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(h) = done.get_value() {
            h.clear();
        }
    });

    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/80 backdrop-blur-sm">
            <div class="w-10 h-10 rounded-full border-2 border-cyan-400 border-t-transparent animate-spin"></div>
        </div>
    }
}
