use crate::entities::PackOutcome;
use crate::io::ext_repr::{ExtPackingResult, ExtUnplacedDemand};
use itertools::Itertools;

/// Converts a [`PackOutcome`] into its external representation, applying the
/// presentation rounding the upstream reports expect.
pub fn export(outcome: &PackOutcome) -> ExtPackingResult {
    let result = outcome.result();
    ExtPackingResult {
        material_id: result.material_id,
        name: result.name.clone(),
        description: result.description.clone(),
        sheets_used: result.sheets_used,
        total_ft2: round_to(result.total_ft2, 2),
        sheet_ft2: round_to(result.sheet_ft2, 3),
        utilization: result.utilization,
        fully_packed: outcome.is_fully_packed(),
        unplaced: outcome
            .unplaced()
            .iter()
            .map(|u| ExtUnplacedDemand {
                part_id: u.part_id,
                label: u.label.clone(),
                quantity: u.quantity,
            })
            .collect_vec(),
    }
}

fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (value * factor).round() / factor
}
