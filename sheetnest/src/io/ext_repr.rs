use serde::{Deserialize, Serialize};

/// External representation of a [`PackingJob`](crate::entities::PackingJob).
/// All lengths are in inches.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtPackingJob {
    pub material_id: usize,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sheet_width: f32,
    pub sheet_height: f32,
    #[serde(default)]
    pub waste_percent: f32,
    #[serde(default = "default_allow_rotate")]
    pub allow_rotate: bool,
    pub parts: Vec<ExtPartDemand>,
}

fn default_allow_rotate() -> bool {
    true
}

/// External representation of a [`PartDemand`](crate::entities::PartDemand).
/// Raw data sources may carry negative quantities; they clamp to 0 on import.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtPartDemand {
    pub id: usize,
    #[serde(default)]
    pub label: String,
    pub width: f32,
    pub height: f32,
    pub quantity: i64,
}

/// External representation of a [`PackOutcome`](crate::entities::PackOutcome).
/// Areas are in ft², rounded the way the upstream reports expect them
/// (total to 2 decimals, sheet to 3).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExtPackingResult {
    pub material_id: usize,
    pub name: String,
    pub description: String,
    pub sheets_used: usize,
    pub total_ft2: f32,
    pub sheet_ft2: f32,
    pub utilization: f32,
    pub fully_packed: bool,
    #[serde(default)]
    pub unplaced: Vec<ExtUnplacedDemand>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExtUnplacedDemand {
    pub part_id: usize,
    pub label: String,
    pub quantity: usize,
}
