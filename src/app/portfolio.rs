use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{Hero, PageContent, Project, Service, SocialLink};

use super::contact_form::ContactForm;
use super::motion::{self, MotionStyles};

// rfc3339 timestamp emitted by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

/// The whole single-page site, rendered from one `PageContent` variant.
#[component]
pub fn PortfolioPage(content: &'static PageContent) -> impl IntoView {
    view! {
        <Title text=content.title />
        <div class="relative min-h-screen bg-gradient-to-b from-white to-muted overflow-hidden">
            {content.animated_backdrop.then(|| view! { <Backdrop /> })}
            <HeroSection hero=&content.hero />
            <ServicesSection services=content.services />
            <ProjectsSection projects=content.projects />
            <ContactSection content=content />
            <SiteFooter content=content />
        </div>
        <MotionStyles />
    }
}

#[component]
fn HeroSection(hero: &'static Hero) -> impl IntoView {
    let seq = motion::stagger(4);
    view! {
        <section class="container mx-auto px-6 pt-32 pb-24">
            <div class="max-w-4xl mx-auto text-center">
                <div class="mb-6 fade-in-up" style=seq[0].style()>
                    <span class="text-sm font-medium text-primary/60">{hero.tagline}</span>
                </div>
                <h1
                    class="text-4xl md:text-6xl font-bold mb-6 text-gradient leading-tight fade-in-up"
                    style=seq[1].style()
                >
                    {hero.heading}
                </h1>
                <p class="text-lg text-primary/80 mb-8 fade-in-up" style=seq[2].style()>
                    {hero.subheading}
                </p>
                <div class="fade-in-up" style=seq[3].style()>
                    <a
                        href=hero.cta_href
                        class="inline-flex items-center px-6 py-3 bg-primary text-white rounded-lg hover:bg-primary/90 transition-colors"
                    >
                        {hero.cta_label}
                        <ArrowRight />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection(services: &'static [Service]) -> impl IntoView {
    view! {
        <section class="py-24 bg-muted">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {services
                        .iter()
                        .zip(motion::stagger(services.len()))
                        .map(|(service, entry)| {
                            view! {
                                <div class="glass-card p-8 rounded-2xl fade-in-up" style=entry.style()>
                                    <IconGlyph path=service.icon class="h-10 w-10 text-primary mb-4" />
                                    <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
                                    <p class="text-primary/60">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let seq = motion::stagger(2);
    view! {
        <section id="work" class="py-24">
            <div class="container mx-auto px-6">
                <div class="max-w-2xl mx-auto mb-16 text-center">
                    <h2
                        class="text-3xl md:text-4xl font-bold mb-4 fade-in-up"
                        style=seq[0].style()
                    >
                        "Featured Projects"
                    </h2>
                    <p class="text-primary/60 fade-in-up" style=seq[1].style()>
                        "A selection of my recent work in web development and animation"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {projects
                        .iter()
                        .zip(motion::stagger(projects.len()))
                        .map(|(project, entry)| {
                            view! { <ProjectCard project=project entry=entry /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, entry: motion::FadeIn) -> impl IntoView {
    view! {
        <div
            class="group relative overflow-hidden rounded-2xl fade-in-up hover:-translate-y-1 transition-transform duration-300"
            style=entry.style()
        >
            {match project.thumbnail {
                Some(src) => {
                    Either::Left(
                        view! {
                            <img
                                src=src
                                alt=project.title
                                class="aspect-video w-full object-cover rounded-2xl"
                            />
                        },
                    )
                }
                None => {
                    Either::Right(view! { <div class="aspect-video bg-muted rounded-2xl"></div> })
                }
            }}
            <div class="absolute inset-0 bg-primary/80 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                <div class="text-white text-center p-6 transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                    <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                    <p class="text-white/80 mb-4">{project.category}</p>
                    <a
                        href=project.url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center text-sm font-medium text-white hover:text-accent transition-colors"
                    >
                        "View Project"
                        <ArrowRight />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactSection(content: &'static PageContent) -> impl IntoView {
    view! {
        <section class="py-24 bg-muted">
            <div class="container mx-auto px-6">
                <div class="max-w-xl mx-auto text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Let's Work Together"</h2>
                    <p class="text-primary/60 mb-8">
                        "Have a project in mind? I'd love to help bring it to life."
                    </p>
                    {if content.contact_form {
                        Either::Left(view! { <ContactForm /> })
                    } else {
                        Either::Right(
                            view! {
                                <a
                                    href=format!("mailto:{}", content.contact_email)
                                    class="inline-flex items-center px-6 py-3 bg-primary text-white rounded-lg hover:bg-primary/90 transition-colors"
                                >
                                    "Get in Touch"
                                    <ArrowRight />
                                </a>
                            },
                        )
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SiteFooter(content: &'static PageContent) -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-primary/10">
            <div class="container mx-auto px-6 flex flex-col sm:flex-row items-center justify-between gap-4">
                <span class="text-sm text-primary/60">
                    "© " {&BUILD_TIME[..4]} " Mira Khlein. All rights reserved."
                </span>
                <SocialLinks socials=content.socials />
                <nav class="flex items-center gap-3 text-sm text-primary/50">
                    <A href="/v1" attr:class="hover:text-primary transition-colors">"v1"</A>
                    <A href="/v2" attr:class="hover:text-primary transition-colors">"v2"</A>
                    <A href="/" attr:class="hover:text-primary transition-colors">"current"</A>
                </nav>
            </div>
        </footer>
    }
}

#[component]
fn SocialLinks(socials: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="flex gap-3">
            {socials
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-primary/60 hover:text-primary text-2xl transition-colors"
                            aria-label=social.label
                        >
                            <i class=social.icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

// Decorative drifting gradient blobs behind the live page.
#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
            <div class="backdrop-blob absolute top-1/4 left-1/4 w-96 h-96 bg-accent/20 rounded-full blur-3xl"></div>
            <div class="backdrop-blob-slow absolute bottom-1/4 right-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl"></div>
        </div>
    }
}

#[component]
fn ArrowRight() -> impl IntoView {
    view! {
        <svg
            class="ml-2 h-4 w-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M5 12h14m-7-7 7 7-7 7" />
        </svg>
    }
}

#[component]
fn IconGlyph(path: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
