mod about;
mod browser;
mod contact;
mod experience;
mod heading;
mod hero;
mod homepage;
mod hooks;
mod loader;
mod navigation;
mod not_found;
mod skills;
mod theme;

use homepage::IndexPage;
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use not_found::NotFound;
use theme::provide_theme;

use crate::config::FAVICON_PATH;
use crate::content::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_PATH />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let portfolio = match Portfolio::embedded() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            log::error!("portfolio content unavailable: {err}");
            return Either::Left(view! { <ContentUnavailable /> });
        }
    };
    provide_context(portfolio);
    provide_context(portfolio.site.clone());
    provide_theme();

    let owner = portfolio.profile.name.clone();

    Either::Right(view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=IndexPage />
            </Routes>
        </Router>
    })
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center bg-background text-foreground">
            <p class="text-muted-foreground">"This page couldn't load its content."</p>
        </div>
    }
}
