//! The settings store as seen by the views.
//!
//! Holds the single in-memory [`Settings`] copy, restores it from storage once on
//! hydration, and writes changed fields back after every update.

use leptos::{prelude::*, task::spawn_local};

use super::dom;
use crate::settings::{load_settings, platform_storage, PendingWrite, Settings, SettingsPatch, Theme};

#[derive(Clone, Copy)]
pub struct SettingsContext {
    settings: RwSignal<Settings>,
}

impl SettingsContext {
    pub fn get(&self) -> Settings {
        self.settings.get()
    }

    pub fn with<U>(&self, f: impl FnOnce(&Settings) -> U) -> U {
        self.settings.with(f)
    }

    pub fn with_untracked<U>(&self, f: impl FnOnce(&Settings) -> U) -> U {
        self.settings.with_untracked(f)
    }

    pub fn theme(&self) -> Theme {
        self.settings.with(|s| s.theme)
    }

    pub fn primary_color(&self) -> String {
        self.settings.with(|s| s.primary_color.clone())
    }

    pub fn secondary_color(&self) -> String {
        self.settings.with(|s| s.secondary_color.clone())
    }

    pub fn font_size(&self) -> u32 {
        self.settings.with(|s| s.font_size)
    }

    pub fn animation_enabled(&self) -> bool {
        self.settings.with(|s| s.animation_enabled)
    }

    /// Merge `patch` into the current settings. The new value is visible at once;
    /// storage catches up in the background.
    pub fn update(&self, patch: SettingsPatch) -> Settings {
        let mut pending = None;
        self.settings.update(|s| pending = Some(s.update(patch)));
        if let Some(pending) = pending {
            persist(pending);
        }
        self.settings.get_untracked()
    }

    pub fn reset(&self) -> Settings {
        let mut pending = None;
        self.settings.update(|s| pending = Some(s.reset()));
        if let Some(pending) = pending {
            persist(pending);
        }
        self.settings.get_untracked()
    }
}

fn persist(pending: PendingWrite) {
    if pending.is_empty() {
        return;
    }
    spawn_local(async move {
        let keys = pending.keys();
        match pending.commit(&platform_storage()).await {
            Ok(()) => log::debug!("persisted settings {keys:?}"),
            Err(e) => log::warn!("settings not fully persisted: {e}"),
        }
    });
}

pub fn provide_settings_context() -> SettingsContext {
    let ctx = SettingsContext {
        settings: RwSignal::new(Settings::default()),
    };

    // effects only run in the browser, so this restores once after hydration
    Effect::watch(
        || (),
        move |_, _, _| {
            spawn_local(async move {
                let loaded = load_settings(&platform_storage()).await;
                ctx.settings.set(loaded);
            });
        },
        true,
    );

    Effect::new(move |_| ctx.settings.with(dom::apply_style_vars));

    provide_context(ctx);
    ctx
}

pub fn use_settings() -> SettingsContext {
    expect_context::<SettingsContext>()
}
