//! The two views and their paths.

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Calculator,
    History,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            Self::Calculator => "/",
            Self::History => "/history",
        }
    }

    /// Resolve a route path. Unknown paths have no view.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Calculator),
            "/history" => Some(Self::History),
            _ => None,
        }
    }
}

/// Basic keypad only, or keypad plus the scientific and memory panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Scientific,
            Self::Scientific => Self::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Scientific => "Scientific",
        }
    }
}
