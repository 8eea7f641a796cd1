use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::{dom, use_settings};
use crate::{
    content::{OWNER_NAME, SUBTITLES},
    typewriter::{Typewriter, CURSOR_BLINK, TYPING_TICK},
};

const PARTICLE_COUNT: usize = 20;

/// Offsets for a decorative particle, spread by index so server and browser agree.
fn particle_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let delay = (i * 7) % 10;
    let duration = 5 + (i * 3) % 10;
    format!("left: {left}%; animation-delay: {delay}s; animation-duration: {duration}s;")
}

#[component]
pub fn Hero() -> impl IntoView {
    let settings = use_settings();
    let typewriter = RwSignal::new(Typewriter::new(&SUBTITLES));
    let (cursor_visible, set_cursor_visible) = signal(true);

    // both intervals stop when the component's owner is disposed
    use_interval_fn(
        move || typewriter.update(Typewriter::tick),
        TYPING_TICK.as_millis() as u64,
    );
    use_interval_fn(
        move || set_cursor_visible.update(|v| *v = !*v),
        CURSOR_BLINK.as_millis() as u64,
    );

    view! {
        <section id="hero" class="hero">
            <div class="hero-background">
                <div class="hero-wave wave-1"></div>
                <div class="hero-wave wave-2"></div>
                <div class="hero-wave wave-3"></div>
                <div class="hero-particles">
                    {(0..PARTICLE_COUNT)
                        .map(|i| {
                            view! {
                                <div
                                    class="particle"
                                    style=move || {
                                        format!(
                                            "{} --particle-color: {};",
                                            particle_style(i),
                                            settings.primary_color(),
                                        )
                                    }
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero-content">
                <div class="hero-main">
                    <h1 class="hero-title">
                        "Hi, I'm " <span class="highlight">{OWNER_NAME}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {move || typewriter.with(|t| t.text())}
                        <span class="cursor" class:visible=move || cursor_visible.get()>
                            "|"
                        </span>
                    </p>
                    <div class="hero-buttons">
                        <button
                            class="cta-btn primary"
                            on:click=move |_| dom::scroll_to_section("about")
                        >
                            "Explore My Work"
                        </button>
                        <button
                            class="cta-btn secondary"
                            on:click=move |_| dom::scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="hero-stats">
                        <span>"3+ Years Experience"</span>
                        <span>"•"</span>
                        <span>"20+ Projects"</span>
                        <span>"•"</span>
                        <span>"5+ Technologies"</span>
                    </div>
                </div>
                <div class="hero-cta">
                    <div class="cta-highlight">
                        "Ready to build something extraordinary? Let's collaborate!"
                    </div>
                </div>
            </div>
            <div class="scroll-indicator" on:click=move |_| dom::scroll_to_section("about")>
                <div class="scroll-line"></div>
                <span>"Scroll Down"</span>
            </div>
        </section>
    }
}
