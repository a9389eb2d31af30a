//! Star records for system generation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What is known about a star in a system.
///
/// Every field starts out empty; fill in the known ones with the `with_*`
/// setters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Orbit position code of the star within its system.
    pub position_code: i32,
    /// Luminosity class, e.g. `V` or `III`.
    pub size: String,
    /// Spectral type, e.g. `G` or `M`.
    pub spectral_type: String,
    /// Spectral subtype, e.g. `2`.
    pub sub_type: String,
    /// Whether the star has been charted.
    pub is_mapped: bool,
    /// Age in billions of years, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_gyr: Option<f64>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Star {
    /// Set the orbit position code.
    pub fn with_position_code(mut self, code: i32) -> Self {
        self.position_code = code;
        self
    }

    /// Set the luminosity class.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the spectral type.
    pub fn with_spectral_type(mut self, spectral_type: impl Into<String>) -> Self {
        self.spectral_type = spectral_type.into();
        self
    }

    /// Set the spectral subtype.
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }

    /// Mark the star as charted or not.
    pub fn with_mapped(mut self, mapped: bool) -> Self {
        self.is_mapped = mapped;
        self
    }

    /// Set the age in billions of years.
    pub fn with_age_gyr(mut self, age: f64) -> Self {
        self.age_gyr = Some(age);
        self
    }

    /// Attach a note.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Stellar classification such as `G2 V`, built from whichever parts are known.
    pub fn classification(&self) -> String {
        let spectrum = format!("{}{}", self.spectral_type, self.sub_type);
        [spectrum.as_str(), self.size.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.classification();
        if class.is_empty() {
            write!(f, "unclassified star")?;
        } else {
            write!(f, "{class}")?;
        }
        if let Some(age) = self.age_gyr {
            write!(f, ", {age} Gyr")?;
        }
        Ok(())
    }
}
