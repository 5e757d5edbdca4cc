use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="w-full px-8 py-4">
            <div class="mx-auto max-w-4xl flex items-center justify-between">
                <p class="font-bold">
                    <a href="mailto:sanmartinjulien@gmail.com" class="hover:text-teal">
                        "Julien Sanmartin | sanmartinjulien@gmail.com"
                    </a>
                    {format!(" © {year}")}
                </p>
                <div class="flex items-center gap-2">
                    <span>"Built with"</span>
                    <a
                        href="https://leptos.dev/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="font-bold hover:text-teal"
                        aria-label="Leptos"
                    >
                        "Leptos"
                    </a>
                    <a
                        href="https://www.netlify.com/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="font-bold hover:text-teal"
                        aria-label="Netlify"
                    >
                        "Netlify"
                    </a>
                </div>
            </div>
        </footer>
    }
}
