#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

/// State for the study-guide side panel: the configuration form and the
/// slide-in history drawer.
#[derive(Clone, Debug)]
pub struct GuideState {
    pub config: GuideConfig,
    pub history_open: bool,
    pub history: Vec<GuideEntry>,
}

impl Default for GuideState {
    fn default() -> Self {
        Self {
            config: GuideConfig::default(),
            history_open: false,
            history: sample_history(),
        }
    }
}

/// Options chosen in the guide configuration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideConfig {
    pub topic: String,
    pub level: GuideLevel,
    pub format: GuideFormat,
    pub language: GuideLanguage,
}

/// Difficulty level for a generated guide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl GuideLevel {
    pub const ALL: [GuideLevel; 3] =
        [GuideLevel::Beginner, GuideLevel::Intermediate, GuideLevel::Advanced];

    pub fn value(self) -> &'static str {
        match self {
            GuideLevel::Beginner => "beginner",
            GuideLevel::Intermediate => "intermediate",
            GuideLevel::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuideLevel::Beginner => "Beginner",
            GuideLevel::Intermediate => "Intermediate",
            GuideLevel::Advanced => "Advanced",
        }
    }

    /// Parse a `<select>` value; unknown values keep the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "beginner" => GuideLevel::Beginner,
            "advanced" => GuideLevel::Advanced,
            _ => GuideLevel::Intermediate,
        }
    }
}

/// Output format for a generated guide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideFormat {
    #[default]
    Detailed,
    Summary,
    Practice,
}

impl GuideFormat {
    pub const ALL: [GuideFormat; 3] =
        [GuideFormat::Detailed, GuideFormat::Summary, GuideFormat::Practice];

    pub fn value(self) -> &'static str {
        match self {
            GuideFormat::Detailed => "detailed",
            GuideFormat::Summary => "summary",
            GuideFormat::Practice => "practice",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuideFormat::Detailed => "Detailed",
            GuideFormat::Summary => "Summary",
            GuideFormat::Practice => "Practice exercises",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "summary" => GuideFormat::Summary,
            "practice" => GuideFormat::Practice,
            _ => GuideFormat::Detailed,
        }
    }
}

/// Guide language. Spanish is the default, matching the backend's audience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideLanguage {
    #[default]
    Spanish,
    English,
}

impl GuideLanguage {
    pub const ALL: [GuideLanguage; 2] = [GuideLanguage::Spanish, GuideLanguage::English];

    pub fn value(self) -> &'static str {
        match self {
            GuideLanguage::Spanish => "es",
            GuideLanguage::English => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuideLanguage::Spanish => "Español",
            GuideLanguage::English => "English",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "en" => GuideLanguage::English,
            _ => GuideLanguage::Spanish,
        }
    }
}

/// A previously generated guide shown in the history drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideEntry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub kind: String,
}

/// Placeholder history shown until guide generation persists real entries.
fn sample_history() -> Vec<GuideEntry> {
    vec![
        GuideEntry {
            id: "1".to_owned(),
            title: "Guía de Matemáticas".to_owned(),
            date: "2023-05-15".to_owned(),
            kind: "PDF".to_owned(),
        },
        GuideEntry {
            id: "2".to_owned(),
            title: "Resumen de Historia".to_owned(),
            date: "2023-05-20".to_owned(),
            kind: "Texto".to_owned(),
        },
        GuideEntry {
            id: "3".to_owned(),
            title: "Cuestionario de Ciencias".to_owned(),
            date: "2023-05-25".to_owned(),
            kind: "Presentación".to_owned(),
        },
    ]
}
