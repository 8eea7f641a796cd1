use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_timeout_fn, UseIntersectionObserverOptions,
    UseTimeoutFnReturn,
};

use super::dom;
use crate::{
    content::{Highlight, Milestone, HOBBIES, MILESTONES, STATS, VALUES},
    reveal::{stagger_delay, RevealSet, TIMELINE_THRESHOLD},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Journey,
    Values,
    Hobbies,
}

impl AboutTab {
    const ALL: [AboutTab; 3] = [AboutTab::Journey, AboutTab::Values, AboutTab::Hobbies];

    fn label(&self) -> &'static str {
        match self {
            AboutTab::Journey => "My Journey",
            AboutTab::Values => "Core Values",
            AboutTab::Hobbies => "Personal Life",
        }
    }
}

#[component]
pub fn About() -> impl IntoView {
    let (tab, set_tab) = signal(AboutTab::Journey);

    view! {
        <section id="about" class="about">
            <div class="about-hero">
                <h2 class="section-title animated-text">"About Me"</h2>
                <p class="intro-text">
                    "I'm a passionate full-stack developer with a creative edge, dedicated to crafting exceptional digital experiences. "
                    "From innovative web apps to seamless user interfaces, I blend technical expertise with artistic vision to solve real-world problems."
                </p>
                <Stats />
            </div>
            <div class="about-tabs" role="tablist">
                {AboutTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab-btn"
                                class:active=move || tab.get() == t
                                role="tab"
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="about-content">
                {move || match tab.get() {
                    AboutTab::Journey => view! { <Timeline /> }.into_any(),
                    AboutTab::Values => {
                        view! { <HighlightGrid items=&VALUES grid_class="values-grid" kind=CardKind::Glow /> }
                            .into_any()
                    }
                    AboutTab::Hobbies => {
                        view! { <HighlightGrid items=&HOBBIES grid_class="hobbies-grid" kind=CardKind::Overlay /> }
                            .into_any()
                    }
                }}
            </div>
            <div class="about-footer">
                <p>
                    "Ready to bring your ideas to life? Let's connect and start collaborating on something extraordinary."
                </p>
                <button class="cta-btn" on:click=move |_| dom::scroll_to_section("contact")>
                    "Get In Touch"
                </button>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <div class="stats-circle">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat-item">
                            <div class="stat-number">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                            <div class="stat-ring">
                                <div
                                    class="ring-fill"
                                    style=format!("--progress: {};", stat.progress)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    // one active entry at a time; clicking it again keeps it open
    let (active, set_active) = signal(None::<usize>);
    let animated = RwSignal::new(RevealSet::<usize>::new());

    view! {
        <div class="journey-timeline">
            <div class="timeline-line"></div>
            {MILESTONES
                .iter()
                .enumerate()
                .map(|(index, milestone)| {
                    view! {
                        <MilestoneItem
                            index
                            milestone
                            active=active
                            on_select=move || set_active.set(Some(index))
                            animated
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MilestoneItem<F>(
    index: usize,
    milestone: &'static Milestone,
    active: ReadSignal<Option<usize>>,
    on_select: F,
    animated: RwSignal<RevealSet<usize>>,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let item_ref = NodeRef::<html::Div>::new();
    let is_active = move || active.get() == Some(index);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            animated.update(|set| {
                set.reveal(index);
            })
        },
        stagger_delay(index).as_millis() as f64,
    );

    use_intersection_observer_with_options(
        item_ref,
        move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            if visible && !animated.with_untracked(|set| set.is_revealed(&index)) {
                start(());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![TIMELINE_THRESHOLD]),
    );

    view! {
        <div
            node_ref=item_ref
            class="milestone-item"
            class:animated=move || animated.with(|set| set.is_revealed(&index))
            class:active=is_active
            on:click=move |_| on_select()
        >
            <div class="milestone-marker">
                <span class="marker-icon">{milestone.icon}</span>
                <span class="marker-year">{milestone.year}</span>
            </div>
            <div class="milestone-content">
                <h3>{milestone.title}</h3>
                <p>{milestone.description}</p>
                {move || {
                    let details = milestone.details.filter(|_| is_active())?;
                    Some(
                        view! {
                            <div class="milestone-details">
                                {details}
                                {milestone
                                    .image
                                    .map(|src| {
                                        view! {
                                            <img src=src alt=milestone.title class="milestone-image" />
                                        }
                                    })}
                            </div>
                        },
                    )
                }}
            </div>
            <div class=format!("milestone-category {}", milestone.category.as_str())></div>
        </div>
    }
    .into_any()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    Glow,
    Overlay,
}

/// Hoverable cards for the values and hobbies tabs.
#[component]
fn HighlightGrid(
    items: &'static [Highlight],
    grid_class: &'static str,
    kind: CardKind,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);
    let card_class = match kind {
        CardKind::Glow => "value-card interactive-box",
        CardKind::Overlay => "hobby-card interactive-box",
    };
    let icon_class = match kind {
        CardKind::Glow => "value-icon",
        CardKind::Overlay => "hobby-icon",
    };

    view! {
        <div class=grid_class>
            {items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let is_hovered = move || hovered.get() == Some(idx);
                    view! {
                        <div
                            class=card_class
                            on:mouseenter=move |_| set_hovered.set(Some(idx))
                            on:mouseleave=move |_| set_hovered.set(None)
                        >
                            <div class=icon_class>{item.icon}</div>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            {move || {
                                is_hovered()
                                    .then(|| match kind {
                                        CardKind::Glow => view! { <div class="value-glow"></div> }.into_any(),
                                        CardKind::Overlay => {
                                            view! {
                                                <div class="hobby-overlay">
                                                    <p>"Passions that fuel my creativity and balance in life."</p>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
