use leptos::prelude::*;

use crate::color_mode::ColorMode;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="w-full px-8 py-6">
            <div class="mx-auto max-w-4xl">
                <div class="flex items-center justify-between">
                    <h1 class="text-4xl font-bold text-teal">"Julien Sanmartin"</h1>
                    <ColorModeToggle />
                </div>
                <div class="flex items-center mt-2">
                    <p class="text-2xl font-bold">"Software Engineer"</p>
                    <nav class="flex items-center gap-4 ml-8">
                        <SocialLink
                            href="https://github.com/juliensanmartin"
                            label="Github"
                            icon="devicon-github-plain"
                        />
                        <SocialLink
                            href="https://www.linkedin.com/in/julien-sanmartin-aa84bb29/"
                            label="LinkedIn"
                            icon="devicon-linkedin-plain"
                        />
                        <SocialLink
                            href="https://medium.com/@aldouille"
                            label="Medium"
                            icon="devicon-medium-plain"
                        />
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-3xl hover:text-teal"
            aria-label=label
        >
            <i class=icon></i>
        </a>
    }
}

#[component]
fn ColorModeToggle() -> impl IntoView {
    let mode = expect_context::<RwSignal<ColorMode>>();
    view! {
        <button
            class="text-2xl p-2 rounded-full hover:bg-brightBlack/30"
            aria-label="Toggle color mode"
            on:click=move |_| mode.update(|m| *m = m.toggle())
        >
            {move || mode.get().icon()}
        </button>
    }
}
