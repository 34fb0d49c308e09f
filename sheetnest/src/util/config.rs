use serde::{Deserialize, Serialize};

///Parameters of the cutting process, uniform across all jobs of a batch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NestConfig {
    ///Material width consumed by the saw blade per cut, reserved along both axes of every piece (inches)
    pub kerf: f32,
    ///Unusable margin along each edge of the sheet (inches)
    pub edge_margin: f32,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            kerf: 0.625,
            edge_margin: 0.5,
        }
    }
}
