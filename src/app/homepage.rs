use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::experience::years_of_experience;

const VALUES: [&str; 5] = [
    "Giving users a first class experience",
    "Producing clean code and improving codebase in each commit",
    "Learning new things",
    "Working in agile teams",
    "Mentoring junior developers",
];

struct TechLink {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const TECH_LINKS: [TechLink; 8] = [
    TechLink {
        href: "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
        label: "JavaScript",
        icon: "devicon-javascript-plain",
    },
    TechLink {
        href: "https://reactjs.org/",
        label: "React.js",
        icon: "devicon-react-original",
    },
    TechLink {
        href: "https://www.typescriptlang.org/",
        label: "TypeScript",
        icon: "devicon-typescript-plain",
    },
    TechLink {
        href: "https://nextjs.org/",
        label: "Next.js",
        icon: "devicon-nextjs-plain",
    },
    TechLink {
        href: "https://graphql.org/",
        label: "GraphQL",
        icon: "devicon-graphql-plain",
    },
    TechLink {
        href: "https://aws.amazon.com/",
        label: "AWS",
        icon: "devicon-amazonwebservices-plain-wordmark",
    },
    TechLink {
        href: "https://jamstack.org/",
        label: "JAMStack",
        icon: "devicon-html5-plain",
    },
    TechLink {
        href: "https://www.docker.com/",
        label: "Docker",
        icon: "devicon-docker-plain",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    // One clock read per render keeps the output a pure function of it
    let years = years_of_experience(Utc::now());

    view! {
        <Title text="Software Engineer" />
        <section class="text-xl mb-20">
            <p>
                "Hello! I'm a Software Engineer in Vancouver, Canada. In the last "
                {years.to_string()}
                " years I have been building products and platforms across a wide range of sectors like Video Streaming, Industry 4.0, Business Intelligence and Analytics. I strive for:"
            </p>
            <ul class="list-disc ml-8 mt-4">
                {VALUES.iter().map(|v| view! { <li>{*v}</li> }).collect_view()}
            </ul>
        </section>
        <section class="flex items-center justify-between text-xl">
            {TECH_LINKS
                .iter()
                .map(|t| {
                    view! {
                        <a
                            href=t.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-4xl hover:text-teal"
                            aria-label=t.label
                        >
                            <i class=t.icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}
