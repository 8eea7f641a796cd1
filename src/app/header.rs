use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{dom, settings_panel::SettingsPanel, use_settings};
use crate::{
    content::{SECTIONS, SITE_NAME},
    scroll::{active_section, section_label},
};

#[component]
pub fn Header() -> impl IntoView {
    let settings = use_settings();
    let (menu_open, set_menu_open) = signal(false);
    let (panel_open, set_panel_open) = signal(false);
    let (active, set_active) = signal(SECTIONS[0]);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = dom::section_bounds(&SECTIONS);
        set_active.set(active_section(&bounds, y, active.get_untracked()));
    });

    let scroll_to = move |id: &'static str| {
        dom::scroll_to_section(id);
        set_menu_open.set(false);
    };

    view! {
        <header class="header">
            <nav class="nav">
                <div class="logo" style:font-size=move || format!("{}px", settings.font_size())>
                    {SITE_NAME}
                </div>
                <ul class="nav-links" class:mobile-open=move || menu_open.get()>
                    {SECTIONS
                        .iter()
                        .map(|id| {
                            let id = *id;
                            view! {
                                <li>
                                    <button
                                        class="nav-link"
                                        class:active=move || active.get() == id
                                        on:click=move |_| scroll_to(id)
                                    >
                                        {section_label(id)}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="settings-btn"
                    aria-label="Display settings"
                    on:click=move |_| set_panel_open.update(|open| *open = !*open)
                >
                    "⚙"
                </button>
                <button
                    class="mobile-menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </nav>
            <SettingsPanel open=panel_open set_open=set_panel_open />
        </header>
    }
}
