use leptos::prelude::*;
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

use super::use_settings;
use crate::{
    carousel::{Carousel, AUTO_ADVANCE},
    content::TESTIMONIALS,
};

#[component]
pub fn Testimonials() -> impl IntoView {
    let settings = use_settings();
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            let animation = settings.with_untracked(|s| s.animation_enabled);
            carousel.update(|c| {
                c.tick(animation);
            });
        },
        AUTO_ADVANCE.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );

    // index changes must not reach the watcher below
    let flags = Memo::new(move |_| {
        let animation = settings.animation_enabled();
        carousel.with(|c| c.timer_flags(animation))
    });

    // any change to either flag restarts the interval from zero
    Effect::watch(
        move || flags.get(),
        move |flags, _, _| {
            pause();
            if carousel.with_untracked(|c| c.is_running(flags.animation_enabled)) {
                resume();
            }
        },
        true,
    );

    let current = move || &TESTIMONIALS[carousel.with(Carousel::index)];

    view! {
        <section id="testimonials" class="testimonials">
            <h2 class="section-title">"What People Say"</h2>
            <div class="carousel">
                {move || {
                    let t = current();
                    view! {
                        <div class="testimonial-card interactive-box">
                            <img src=t.avatar alt=t.name class="avatar" />
                            <blockquote>"\u{201C}" {t.quote} "\u{201D}"</blockquote>
                            <h4>{t.name}</h4>
                            <p class="testimonial-role">{format!("{}, {}", t.role, t.company)}</p>
                        </div>
                    }
                }}
            </div>
            <div class="carousel-controls">
                <div class="carousel-dots">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(idx, t)| {
                            view! {
                                <button
                                    class="dot"
                                    class:active=move || carousel.with(Carousel::index) == idx
                                    aria-label=format!("Show testimonial from {}", t.name)
                                    on:click=move |_| carousel.update(|c| c.jump(idx))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="auto-play-btn"
                    aria-label="Toggle auto-play"
                    on:click=move |_| carousel.update(Carousel::toggle_auto_play)
                >
                    {move || if carousel.with(Carousel::auto_play) { "⏸️" } else { "▶️" }}
                </button>
            </div>
        </section>
    }
}
