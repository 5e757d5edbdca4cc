mod footer;
mod header;
mod homepage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::color_mode::ColorMode;
use crate::site::SITE;
use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The single owned color-mode container; the toggle writes it, the page
    // root and the toggle icon read it. Session-scoped, never persisted.
    let mode = RwSignal::new(ColorMode::default());
    provide_context(mode);

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", SITE.title) />
        <Meta name="description" content=SITE.description.clone() />

        <Router>
            <div class=move || {
                format!("flex flex-col min-h-screen bg-background text-foreground {}", mode.get().css_class())
            }>
                <Header />
                <main class="flex flex-col flex-grow mx-auto w-full max-w-4xl px-4 pt-16 pb-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
