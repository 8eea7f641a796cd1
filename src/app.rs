mod about;
mod contact;
mod dom;
mod footer;
mod header;
mod hero;
mod projects;
mod settings_panel;
mod skills;
mod testimonials;
mod theme;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, use_window_scroll, UseTimeoutFnReturn};

use crate::{content::SITE_NAME, scroll::show_back_to_top};
use about::About;
use contact::Contact;
use footer::{BackToTop, Footer, LoadingScreen};
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;
pub use theme::{provide_settings_context, use_settings, SettingsContext};

/// How long the splash screen covers the page after mount.
const SPLASH_DELAY: Duration = Duration::from_millis(2000);

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
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
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
    provide_settings_context();

    view! {
        <Title formatter=|title| format!("{SITE_NAME} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Every section of the site, in page order.
#[component]
fn PortfolioPage() -> impl IntoView {
    let settings = use_settings();
    let (loading, set_loading) = signal(true);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| set_loading.set(false),
        SPLASH_DELAY.as_millis() as f64,
    );
    start(());

    let (_, scroll_y) = use_window_scroll();
    let back_to_top = Memo::new(move |_| show_back_to_top(scroll_y.get()));

    view! {
        <Title text="Home" />
        <Show when=move || loading.get()>
            <LoadingScreen />
        </Show>
        <div class=move || settings.with(|s| s.root_class()) style=move || settings.with(|s| s.style_attr())>
            <Header />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
            <Show when=move || back_to_top.get()>
                <BackToTop />
            </Show>
        </div>
    }
}
