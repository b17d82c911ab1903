use crate::constants::DEFAULT_GROMMET_OFFSET_IN;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grommet marking configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrommetOptions {
    /// Requested distance between grommets, in inches. `<= 0` disables marking.
    pub spacing_in: f32,
    /// Inset of the grommet line from the trim edge, in inches
    #[cfg_attr(feature = "serde", serde(default = "default_grommet_offset"))]
    pub offset_in: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: GrommetSpacingPolicy,
}

#[cfg(feature = "serde")]
fn default_grommet_offset() -> f32 {
    DEFAULT_GROMMET_OFFSET_IN
}

impl GrommetOptions {
    /// Grommets every `spacing_in` inches with the default inset and policy
    pub fn every(spacing_in: f32) -> Self {
        Self {
            spacing_in,
            offset_in: DEFAULT_GROMMET_OFFSET_IN,
            policy: GrommetSpacingPolicy::default(),
        }
    }
}

/// Finishing configuration, passed explicitly to the engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinishingOptions {
    // Bleed, in page units
    pub margins: BleedMargins,

    // Boxes tried for the content area, most specific first
    pub box_precedence: Vec<BoxKind>,

    // Fill the bleed with mirrored content
    pub mirror_bleed: bool,

    // Corner crop marks
    pub crop_marks: bool,

    // Grommet marks along the perimeter
    pub grommets: Option<GrommetOptions>,
}

impl Default for FinishingOptions {
    fn default() -> Self {
        Self {
            margins: BleedMargins::default(),
            box_precedence: BoxKind::PRECEDENCE.to_vec(),
            mirror_bleed: true,
            crop_marks: true,
            grommets: None,
        }
    }
}

impl FinishingOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| FinishError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FinishError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Non-positive bleed and spacing are accepted: they switch the
    /// corresponding feature off rather than fail.
    pub fn validate(&self) -> Result<()> {
        if !self.margins.is_finite() {
            return Err(FinishError::Config(
                "Bleed margins must be finite numbers".to_string(),
            ));
        }

        if self.box_precedence.is_empty() {
            return Err(FinishError::Config(
                "At least one page box must be listed in the box precedence".to_string(),
            ));
        }

        if let Some(grommets) = &self.grommets {
            if !grommets.spacing_in.is_finite() {
                return Err(FinishError::Config(
                    "Grommet spacing must be a finite number".to_string(),
                ));
            }
            if !grommets.offset_in.is_finite() || grommets.offset_in < 0.0 {
                return Err(FinishError::Config(format!(
                    "Grommet offset must be a non-negative number, got {}",
                    grommets.offset_in
                )));
            }
        }

        Ok(())
    }
}
