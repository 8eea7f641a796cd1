use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS, PROJECT_CATEGORIES},
    filter::{filter_projects, toggle_expanded, ALL_CATEGORY},
};

#[component]
pub fn Projects() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORY);
    let (expanded, set_expanded) = signal(None::<u32>);
    let (hovered, set_hovered) = signal(None::<u32>);

    let visible = move || {
        search.with(|term| filter_projects(&PROJECTS, category.get(), term))
    };

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"My Projects"</h2>
            <div class="projects-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search projects..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="category-filters">
                    {PROJECT_CATEGORIES
                        .iter()
                        .map(|cat| {
                            let cat = *cat;
                            view! {
                                <button
                                    class="category-btn"
                                    class:active=move || category.get() == cat
                                    on:click=move |_| set_category.set(cat)
                                >
                                    {cat}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="projects-grid">
                {move || {
                    let projects = visible();
                    if projects.is_empty() {
                        return view! {
                            <p class="no-projects">"No projects found matching your search."</p>
                        }
                            .into_any();
                    }
                    projects
                        .into_iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project
                                    expanded
                                    hovered
                                    on_toggle=move || set_expanded.update(|cur| *cur = toggle_expanded(*cur, project.id))
                                    on_hover=move |over: bool| set_hovered.set(over.then_some(project.id))
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard<T, H>(
    project: &'static Project,
    expanded: ReadSignal<Option<u32>>,
    hovered: ReadSignal<Option<u32>>,
    on_toggle: T,
    on_hover: H,
) -> impl IntoView
where
    T: Fn() + 'static,
    H: Fn(bool) + Copy + 'static,
{
    let is_expanded = move || expanded.get() == Some(project.id);
    let is_hovered = move || hovered.get() == Some(project.id);

    view! {
        <div
            class="project-card"
            class:expanded=is_expanded
            on:click=move |_| on_toggle()
            on:mouseenter=move |_| on_hover(true)
            on:mouseleave=move |_| on_hover(false)
        >
            <div class="project-image">
                <img src=project.image alt=project.title />
                <Show when=is_hovered>
                    <div class="project-overlay">
                        <span>"Click for Details"</span>
                    </div>
                </Show>
            </div>
            <div class="project-content">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tech-tags">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
                <Show when=is_expanded>
                    <div class="project-details">
                        <p class="long-description">{project.long_description}</p>
                        <h4>"Key Features:"</h4>
                        <ul class="features-list">
                            {project
                                .features
                                .iter()
                                .map(|feature| view! { <li>"✅ " {*feature}</li> })
                                .collect_view()}
                        </ul>
                        <a
                            href=project.link
                            class="project-link"
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=|ev| ev.stop_propagation()
                        >
                            "View Project"
                        </a>
                    </div>
                </Show>
            </div>
            <div class="expand-indicator">{move || if is_expanded() { "−" } else { "+" }}</div>
        </div>
    }
}
