use serde::{Deserialize, Serialize};
use sheetnest::util::NestConfig;

/// Configuration for the bssf CLI
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BssfConfig {
    /// Cutting process parameters handed to the engine
    #[serde(default)]
    pub nest_config: NestConfig,
    /// Pack independent jobs across worker threads
    #[serde(default)]
    pub parallel: bool,
}

impl Default for BssfConfig {
    fn default() -> Self {
        Self {
            nest_config: NestConfig::default(),
            parallel: false,
        }
    }
}
