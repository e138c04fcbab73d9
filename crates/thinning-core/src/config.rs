use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BINARIZE_THRESHOLD;
use crate::thinning::Algorithm;

/// Settings for turning an 8-bit image into a skeleton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinningConfig {
    /// Thinning algorithm.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Pixels brighter than this are foreground.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Treat dark pixels as foreground instead.
    #[serde(default)]
    pub invert: bool,
}

fn default_threshold() -> u8 {
    DEFAULT_BINARIZE_THRESHOLD
}

impl Default for ThinningConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            threshold: DEFAULT_BINARIZE_THRESHOLD,
            invert: false,
        }
    }
}
