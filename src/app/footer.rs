use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::{dom, use_settings};
use crate::content::{OWNER_NAME, SECTIONS, SITE_NAME};
use crate::scroll::section_label;

/// Year of the build, so the copyright line needs no clock at render time.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>{format!("© {} {OWNER_NAME}. All rights reserved.", copyright_year())}</p>
                <nav class="footer-links">
                    {SECTIONS
                        .iter()
                        .skip(1)
                        .map(|id| {
                            let id = *id;
                            view! {
                                <button class="footer-link" on:click=move |_| dom::scroll_to_section(id)>
                                    {section_label(id)}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <p class="footer-tagline">"Built with ❤️ using Rust and Leptos"</p>
            </div>
        </footer>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let settings = use_settings();

    view! {
        <button
            class="back-to-top"
            aria-label="Back to top"
            style:background=move || settings.primary_color()
            on:click=move |_| dom::scroll_to_top()
        >
            "↑"
        </button>
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let settings = use_settings();

    view! {
        <div class="loading-screen">
            <div class="loading-content">
                <div class="loading-logo" style:color=move || settings.primary_color()>
                    {SITE_NAME}
                </div>
                <div class="loading-spinner"></div>
                <p>"Loading amazing experiences..."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        let year = copyright_year();
        assert!(year >= 2024, "{year}");
    }
}
