/// Log source areas, one per subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    Main,
    Filters,
    Query,
    Catalog,
    Cache,
    Events,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::Main => "main",
            LogTag::Filters => "filters",
            LogTag::Query => "query",
            LogTag::Catalog => "catalog",
            LogTag::Cache => "cache",
            LogTag::Events => "events",
        }
    }

    /// Resolve an area name from the CLI into a tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "main" => Some(LogTag::Main),
            "filters" => Some(LogTag::Filters),
            "query" => Some(LogTag::Query),
            "catalog" => Some(LogTag::Catalog),
            "cache" => Some(LogTag::Cache),
            "events" => Some(LogTag::Events),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
