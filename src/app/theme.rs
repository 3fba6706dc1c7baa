use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeHandle {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeHandle {
    pub fn class(&self) -> &'static str {
        self.theme.get().class()
    }

    pub fn is_dark(&self) -> bool {
        matches!(self.theme.get(), Theme::Dark)
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
    }
}

pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}

/// Theme preference persists across visits in local storage.
pub fn provide_theme() -> ThemeHandle {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let theme = RwSignal::new(Theme::default());
        (Signal::from(theme.read_only()), theme.write_only())
    };
    let handle = ThemeHandle { theme, set_theme };
    provide_context(handle);
    handle
}
