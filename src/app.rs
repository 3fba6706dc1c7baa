mod about;
mod bento;
mod contact;
mod experience;
mod hero;
mod homepage;
mod loading;
mod navbar;
mod overlay;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;
use loading::provide_loading;
use navbar::Navbar;
use overlay::LoadingGate;
use projects::AllProjectsPage;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Full stack developer & creative technologist portfolio."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_loading();
    let theme = provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Nishant - {title}") />

        <Router>
            <div class=move || format!("app-shell {}", theme.class())>
                <LoadingGate>
                    <Navbar />
                    <main class="relative w-full min-h-screen overflow-x-hidden">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/projects") view=AllProjectsPage />
                        </Routes>
                    </main>
                </LoadingGate>
            </div>
        </Router>
    }
}
