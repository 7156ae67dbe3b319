#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

/// Light/dark display mode. Provided from the app root as a
/// `Signal<ThemeMode>` through context; views read it, the navbar toggle is
/// the single mutation point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class hung on the root element; Tailwind's `dark:` variants key off it.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Mode for a fresh session: stored preference first, then the platform
/// color-scheme hint, then light.
pub fn initial() -> ThemeMode {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(stored) = stored_preference() {
            return stored;
        }
        if prefers_dark() {
            return ThemeMode::Dark;
        }
    }
    ThemeMode::default()
}

/// Persists the mode for future sessions. Storage failures (quota, privacy
/// mode) are swallowed; the in-memory mode has already changed.
pub fn persist(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                log::debug!("could not persist theme preference");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mode;
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn stored_preference() -> Option<ThemeMode> {
    let value = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    ThemeMode::parse(&value)
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
