use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::{use_settings, SettingsContext};
use crate::{
    content::{capitalize, Skill, SKILLS, SKILL_CATEGORIES},
    filter::{filter_skills, ALL_CATEGORY},
    reveal::{RevealSet, SKILL_THRESHOLD},
};

#[component]
pub fn Skills() -> impl IntoView {
    let settings = use_settings();
    let (category, set_category) = signal(ALL_CATEGORY);
    // keyed by name so a filtered-out card keeps its bar filled when it comes back
    let revealed = RwSignal::new(RevealSet::<&'static str>::new());

    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"My Skills"</h2>
            <div class="skill-filters">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|cat| {
                        let cat = *cat;
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || category.get() == cat
                                on:click=move |_| set_category.set(cat)
                            >
                                {cat}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="skills-grid">
                {move || {
                    filter_skills(&SKILLS, category.get())
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill revealed settings /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    skill: &'static Skill,
    revealed: RwSignal<RevealSet<&'static str>>,
    settings: SettingsContext,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let is_revealed = move || revealed.with(|set| set.is_revealed(&skill.name));

    use_intersection_observer_with_options(
        card_ref,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                revealed.update(|set| {
                    if set.reveal(skill.name) {
                        log::debug!("revealed skill {}", skill.name);
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![SKILL_THRESHOLD]),
    );

    let bar_style = move || {
        let width = if is_revealed() { skill.level } else { 0 };
        format!(
            "width: {width}%; background: linear-gradient(90deg, {}, {});",
            settings.primary_color(),
            settings.secondary_color(),
        )
    };

    view! {
        <div node_ref=card_ref class="skill-card interactive-box" class:animated=is_revealed>
            <div class="skill-header">
                <span class="skill-icon">{skill.icon}</span>
                <h3>{skill.name}</h3>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style=bar_style></div>
            </div>
            <span class="skill-level">{format!("{}%", skill.level)}</span>
            <div class="skill-tooltip">
                {format!("{} proficiency in {}", capitalize(skill.proficiency()), skill.name)}
            </div>
        </div>
    }
}
