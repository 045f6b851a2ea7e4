mod contact_form;
mod motion;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use portfolio::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans text-primary">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Mira Khlein - {title}") />

        // "/" is the live page; earlier shipped versions stay reachable
        <Router>
            <main class="w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=path!("/")
                        view=|| view! { <PortfolioPage content=&content::CURRENT /> }
                    />
                    <Route
                        path=path!("/v1")
                        view=|| view! { <PortfolioPage content=&content::FIRST_DRAFT /> }
                    />
                    <Route
                        path=path!("/v2")
                        view=|| view! { <PortfolioPage content=&content::REDESIGN /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
