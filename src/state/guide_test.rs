use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn guide_config_defaults_match_form() {
    let config = GuideConfig::default();
    assert_eq!(config.topic, "");
    assert_eq!(config.level, GuideLevel::Intermediate);
    assert_eq!(config.format, GuideFormat::Detailed);
    assert_eq!(config.language, GuideLanguage::Spanish);
}

#[test]
fn guide_state_starts_with_closed_drawer_and_sample_history() {
    let state = GuideState::default();
    assert!(!state.history_open);
    assert_eq!(state.history.len(), 3);
}

// =============================================================
// Select value round-trips
// =============================================================

#[test]
fn level_value_round_trips() {
    for level in GuideLevel::ALL {
        assert_eq!(GuideLevel::from_value(level.value()), level);
    }
}

#[test]
fn format_value_round_trips() {
    for format in GuideFormat::ALL {
        assert_eq!(GuideFormat::from_value(format.value()), format);
    }
}

#[test]
fn language_value_round_trips() {
    for language in GuideLanguage::ALL {
        assert_eq!(GuideLanguage::from_value(language.value()), language);
    }
}

#[test]
fn unknown_select_values_fall_back_to_defaults() {
    assert_eq!(GuideLevel::from_value("expert"), GuideLevel::Intermediate);
    assert_eq!(GuideFormat::from_value(""), GuideFormat::Detailed);
    assert_eq!(GuideLanguage::from_value("fr"), GuideLanguage::Spanish);
}
