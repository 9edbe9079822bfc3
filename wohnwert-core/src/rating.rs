//! Interpretation bands for presenting 0–100 scores.

/// Qualitative band for a normalised or overall score.
///
/// # Examples
/// ```
/// use wohnwert_core::Rating;
///
/// assert_eq!(Rating::for_score(92), Rating::Excellent);
/// assert_eq!(Rating::for_score(55).label(), "Befriedigend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Rating {
    /// Scores of 90 and above.
    Excellent,
    /// Scores from 75 to 89.
    VeryGood,
    /// Scores from 60 to 74.
    Good,
    /// Scores from 40 to 59.
    Satisfactory,
    /// Scores below 40.
    NeedsImprovement,
}

impl Rating {
    /// Classify a score into its band.
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::VeryGood,
            60..=74 => Self::Good,
            40..=59 => Self::Satisfactory,
            _ => Self::NeedsImprovement,
        }
    }

    /// German label shown in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Ausgezeichnet",
            Self::VeryGood => "Sehr gut",
            Self::Good => "Gut",
            Self::Satisfactory => "Befriedigend",
            Self::NeedsImprovement => "Verbesserungsbedürftig",
        }
    }

    /// Presentation colour name.
    #[must_use]
    pub const fn colour(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::VeryGood => "lime",
            Self::Good => "yellow",
            Self::Satisfactory => "orange",
            Self::NeedsImprovement => "red",
        }
    }

    /// Presentation emoji.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Excellent => "🌟",
            Self::VeryGood => "✅",
            Self::Good => "👍",
            Self::Satisfactory | Self::NeedsImprovement => "⚠️",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
