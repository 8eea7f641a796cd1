mod storage;

pub use storage::*;

use std::{fmt, ops::RangeInclusive, str::FromStr};

use thiserror::Error;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1E40AF";
pub const DEFAULT_SECONDARY_COLOR: &str = "#3B82F6";
pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=24;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid font size: {0:?}")]
    InvalidFontSize(String),
    #[error("invalid boolean flag: {0:?}")]
    InvalidFlag(String),
    #[error("empty color value")]
    EmptyColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

struct Palette {
    background: &'static str,
    text: &'static str,
    card: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#FFFFFF",
                text: "#333333",
                card: "#F9FAFB",
            },
            Theme::Dark => Palette {
                background: "#0F172A",
                text: "#F1F5F9",
                card: "#1E293B",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(SettingsError::InvalidTheme(s.to_string())),
        }
    }
}

/// Display configuration shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_size: u32,
    pub animation_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            animation_enabled: true,
        }
    }
}

/// A partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_size: Option<u32>,
    pub animation_enabled: Option<bool>,
}

impl SettingsPatch {
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    pub fn secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn animation_enabled(mut self, enabled: bool) -> Self {
        self.animation_enabled = Some(enabled);
        self
    }
}

/// Storage key of each persisted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Theme,
    PrimaryColor,
    SecondaryColor,
    FontSize,
    AnimationEnabled,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::Theme,
        SettingKey::PrimaryColor,
        SettingKey::SecondaryColor,
        SettingKey::FontSize,
        SettingKey::AnimationEnabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Theme => "theme",
            SettingKey::PrimaryColor => "primaryColor",
            SettingKey::SecondaryColor => "secondaryColor",
            SettingKey::FontSize => "fontSize",
            SettingKey::AnimationEnabled => "animationEnabled",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_color(raw: &str) -> Result<String, SettingsError> {
    let color = raw.trim();
    if color.is_empty() {
        Err(SettingsError::EmptyColor)
    } else {
        Ok(color.to_string())
    }
}

impl Settings {
    /// Merges `patch` in place and returns the keys whose value actually changed.
    pub fn merge(&mut self, patch: SettingsPatch) -> Vec<SettingKey> {
        let mut changed = Vec::new();
        if let Some(theme) = patch.theme.filter(|t| *t != self.theme) {
            self.theme = theme;
            changed.push(SettingKey::Theme);
        }
        if let Some(color) = patch.primary_color.filter(|c| *c != self.primary_color) {
            self.primary_color = color;
            changed.push(SettingKey::PrimaryColor);
        }
        if let Some(color) = patch
            .secondary_color
            .filter(|c| *c != self.secondary_color)
        {
            self.secondary_color = color;
            changed.push(SettingKey::SecondaryColor);
        }
        if let Some(size) = patch.font_size.filter(|s| *s != self.font_size) {
            self.font_size = size;
            changed.push(SettingKey::FontSize);
        }
        if let Some(enabled) = patch
            .animation_enabled
            .filter(|e| *e != self.animation_enabled)
        {
            self.animation_enabled = enabled;
            changed.push(SettingKey::AnimationEnabled);
        }
        changed
    }

    /// Applies `patch` immediately; the returned write persists the changed fields.
    pub fn update(&mut self, patch: SettingsPatch) -> PendingWrite {
        let changed = self.merge(patch);
        PendingWrite::for_keys(self, &changed)
    }

    /// Restores the defaults; the returned write persists every field.
    pub fn reset(&mut self) -> PendingWrite {
        *self = Settings::default();
        PendingWrite::for_keys(self, &SettingKey::ALL)
    }

    pub fn encode(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Theme => self.theme.to_string(),
            SettingKey::PrimaryColor => self.primary_color.clone(),
            SettingKey::SecondaryColor => self.secondary_color.clone(),
            SettingKey::FontSize => self.font_size.to_string(),
            SettingKey::AnimationEnabled => self.animation_enabled.to_string(),
        }
    }

    /// Overwrites the field behind `key` with a stored value. On error the field is unchanged.
    pub fn decode(&mut self, key: SettingKey, raw: &str) -> Result<(), SettingsError> {
        match key {
            SettingKey::Theme => self.theme = raw.trim().parse()?,
            SettingKey::PrimaryColor => self.primary_color = parse_color(raw)?,
            SettingKey::SecondaryColor => self.secondary_color = parse_color(raw)?,
            SettingKey::FontSize => {
                self.font_size = raw
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(|| SettingsError::InvalidFontSize(raw.to_string()))?
            }
            SettingKey::AnimationEnabled => {
                self.animation_enabled = raw
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| SettingsError::InvalidFlag(raw.to_string()))?
            }
        }
        Ok(())
    }

    /// CSS custom properties derived from the current settings.
    pub fn style_vars(&self) -> Vec<(&'static str, String)> {
        let palette = self.theme.palette();
        let mut vars = vec![
            ("--primary-color", self.primary_color.clone()),
            ("--secondary-color", self.secondary_color.clone()),
            ("--bg-color", palette.background.to_string()),
            ("--text-color", palette.text.to_string()),
            ("--card-bg", palette.card.to_string()),
            ("--font-size-base", format!("{}px", self.font_size)),
        ];
        if !self.animation_enabled {
            vars.push(("--animation-duration", "0s".to_string()));
        }
        vars
    }

    /// `style_vars` rendered as an inline `style` attribute.
    pub fn style_attr(&self) -> String {
        self.style_vars()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn root_class(&self) -> String {
        if self.animation_enabled {
            format!("app {} animated", self.theme)
        } else {
            format!("app {}", self.theme)
        }
    }
}

/// Field values captured by an update, waiting to be written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    entries: Vec<(SettingKey, String)>,
}

impl PendingWrite {
    pub fn for_keys(settings: &Settings, keys: &[SettingKey]) -> Self {
        Self {
            entries: keys.iter().map(|k| (*k, settings.encode(*k))).collect(),
        }
    }

    pub fn keys(&self) -> Vec<SettingKey> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry, continuing past failures. Returns the first failure.
    pub async fn commit<S: KeyValueStore>(self, storage: &S) -> Result<(), StorageError> {
        let mut first_err = None;
        for (key, value) in self.entries {
            if let Err(e) = storage.set_item(key.as_str(), &value).await {
                log::warn!("failed to persist {key}: {e}");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Reads every key from `storage`. Each missing, unreadable or malformed value
/// falls back to its default on its own.
pub async fn load_settings<S: KeyValueStore>(storage: &S) -> Settings {
    let mut settings = Settings::default();
    for key in SettingKey::ALL {
        match storage.get_item(key.as_str()).await {
            Ok(Some(raw)) => {
                if let Err(e) = settings.decode(key, &raw) {
                    log::warn!("ignoring stored {key}: {e}");
                }
            }
            Ok(None) => log::debug!("no stored {key}, using default"),
            Err(e) => log::warn!("{e}, using default {key}"),
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }

        async fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.primary_color, "#1E40AF");
        assert_eq!(settings.secondary_color, "#3B82F6");
        assert_eq!(settings.font_size, 16);
        assert!(settings.animation_enabled);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(SettingsError::InvalidTheme("Dark".to_string()))
        );
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_merge_reports_only_changed_keys() {
        let mut settings = Settings::default();
        let changed = settings.merge(
            SettingsPatch::default()
                .theme(Theme::Dark) // already dark
                .primary_color("#FF0000")
                .font_size(20),
        );
        assert_eq!(changed, vec![SettingKey::PrimaryColor, SettingKey::FontSize]);
        assert_eq!(settings.primary_color, "#FF0000");
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.secondary_color, DEFAULT_SECONDARY_COLOR);

        assert!(settings.merge(SettingsPatch::default()).is_empty());
    }

    #[test]
    fn test_update_and_reset_pending_writes() {
        let mut settings = Settings::default();
        let pending = settings.update(SettingsPatch::default().animation_enabled(false));
        assert_eq!(pending.keys(), vec![SettingKey::AnimationEnabled]);

        let pending = settings.reset();
        assert_eq!(settings, Settings::default());
        assert_eq!(pending.keys(), SettingKey::ALL.to_vec());
    }

    #[test]
    fn test_decode_rejects_malformed_values() {
        let mut settings = Settings::default();
        assert!(settings.decode(SettingKey::Theme, "purple").is_err());
        assert!(settings.decode(SettingKey::FontSize, "big").is_err());
        assert!(settings.decode(SettingKey::FontSize, "0").is_err());
        assert!(settings.decode(SettingKey::AnimationEnabled, "yes").is_err());
        assert_eq!(
            settings.decode(SettingKey::PrimaryColor, "  "),
            Err(SettingsError::EmptyColor)
        );
        // Failed decodes leave the defaults in place
        assert_eq!(settings, Settings::default());

        settings.decode(SettingKey::FontSize, "18").unwrap();
        settings.decode(SettingKey::AnimationEnabled, "false").unwrap();
        assert_eq!(settings.font_size, 18);
        assert!(!settings.animation_enabled);
    }

    #[test]
    fn test_style_vars() {
        let mut settings = Settings::default();
        let vars = settings.style_vars();
        assert!(vars.contains(&("--bg-color", "#0F172A".to_string())));
        assert!(vars.contains(&("--font-size-base", "16px".to_string())));
        assert!(!vars.iter().any(|(name, _)| *name == "--animation-duration"));

        settings.merge(
            SettingsPatch::default()
                .theme(Theme::Light)
                .animation_enabled(false),
        );
        let vars = settings.style_vars();
        assert!(vars.contains(&("--bg-color", "#FFFFFF".to_string())));
        assert!(vars.contains(&("--text-color", "#333333".to_string())));
        assert!(vars.contains(&("--card-bg", "#F9FAFB".to_string())));
        assert!(vars.contains(&("--animation-duration", "0s".to_string())));
        assert!(settings.style_attr().starts_with("--primary-color: #1E40AF;"));
    }

    #[test]
    fn test_root_class() {
        let mut settings = Settings::default();
        assert_eq!(settings.root_class(), "app dark animated");
        settings.merge(
            SettingsPatch::default()
                .theme(Theme::Light)
                .animation_enabled(false),
        );
        assert_eq!(settings.root_class(), "app light");
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let store = MemoryStore::new();
        let mut settings = load_settings(&store).await;
        assert_eq!(settings, Settings::default());

        let pending = settings.update(
            SettingsPatch::default()
                .theme(Theme::Light)
                .secondary_color("#00FF00")
                .font_size(22)
                .animation_enabled(false),
        );
        // The in-memory copy reflects the merge before anything is written
        assert_eq!(settings.theme, Theme::Light);
        assert!(store.is_empty());

        pending.commit(&store).await.unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(load_settings(&store).await, settings);
    }

    #[tokio::test]
    async fn test_reset_persists_defaults() {
        let store = MemoryStore::new();
        let mut settings = Settings::default();
        settings
            .update(SettingsPatch::default().theme(Theme::Light).font_size(12))
            .commit(&store)
            .await
            .unwrap();
        assert_eq!(load_settings(&store).await.font_size, 12);

        settings.reset().commit(&store).await.unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(load_settings(&store).await, Settings::default());
    }

    #[tokio::test]
    async fn test_load_falls_back_per_field() {
        let store = MemoryStore::new();
        store.set_item("theme", "light").await.unwrap();
        store.set_item("fontSize", "not-a-number").await.unwrap();
        store.set_item("animationEnabled", "false").await.unwrap();

        let settings = load_settings(&store).await;
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, DEFAULT_FONT_SIZE);
        assert!(!settings.animation_enabled);
        assert_eq!(settings.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[tokio::test]
    async fn test_failing_storage() {
        assert_eq!(load_settings(&FailingStore).await, Settings::default());

        let mut settings = Settings::default();
        let res = settings
            .update(SettingsPatch::default().font_size(14))
            .commit(&FailingStore)
            .await;
        assert!(matches!(res, Err(StorageError::Write { .. })));
        // In-memory value survives the failed write
        assert_eq!(settings.font_size, 14);
    }
}
