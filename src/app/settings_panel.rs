use leptos::prelude::*;

use super::use_settings;
use crate::settings::{SettingsPatch, Theme, FONT_SIZE_RANGE};

/// Display settings controls. Every control goes through the settings store.
#[component]
pub fn SettingsPanel(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let settings = use_settings();

    view! {
        <Show when=move || open.get()>
            <aside class="settings-panel interactive-box" aria-label="Display settings">
                <div class="settings-header">
                    <h3>"Display Settings"</h3>
                    <button class="settings-close" on:click=move |_| set_open.set(false)>
                        "✕"
                    </button>
                </div>
                <div class="settings-row">
                    <span>"Theme"</span>
                    <button
                        class="theme-toggle"
                        on:click=move |_| {
                            let theme = settings.theme().toggled();
                            settings.update(SettingsPatch::default().theme(theme));
                        }
                    >
                        {move || match settings.theme() {
                            Theme::Light => "☀️ Light",
                            Theme::Dark => "🌙 Dark",
                        }}
                    </button>
                </div>
                <label class="settings-row">
                    <span>"Primary color"</span>
                    <input
                        type="color"
                        prop:value=move || settings.primary_color()
                        on:input=move |ev| {
                            settings.update(SettingsPatch::default().primary_color(event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="settings-row">
                    <span>"Secondary color"</span>
                    <input
                        type="color"
                        prop:value=move || settings.secondary_color()
                        on:input=move |ev| {
                            settings.update(SettingsPatch::default().secondary_color(event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="settings-row">
                    <span>{move || format!("Font size ({}px)", settings.font_size())}</span>
                    <input
                        type="range"
                        min=*FONT_SIZE_RANGE.start()
                        max=*FONT_SIZE_RANGE.end()
                        prop:value=move || settings.font_size().to_string()
                        on:input=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                settings.update(SettingsPatch::default().font_size(size));
                            }
                        }
                    />
                </label>
                <label class="settings-row">
                    <span>"Animations"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.animation_enabled()
                        on:change=move |ev| {
                            settings.update(SettingsPatch::default().animation_enabled(event_target_checked(&ev)));
                        }
                    />
                </label>
                <button class="settings-reset" on:click=move |_| {
                    settings.reset();
                }>
                    "Reset to defaults"
                </button>
            </aside>
        </Show>
    }
}
