use vitrina::translation::DEFAULT_SOURCE_LANG;

/// Language the interface is currently displayed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiLanguage {
    /// Listings are authored in Romanian, so it needs no translation
    #[default]
    Romanian,
    English,
}

impl UiLanguage {
    pub fn code(self) -> &'static str {
        match self {
            Self::Romanian => DEFAULT_SOURCE_LANG,
            Self::English => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Romanian => "RO",
            Self::English => "EN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Romanian => Self::English,
            Self::English => Self::Romanian,
        }
    }
}
