use crate::entities::PartDemand;

/// Static description of one material's nesting job: the sheet stocked for it,
/// the parts to cut from it and the per-job packing options.
///
/// The engine never mutates a job; outstanding quantities are tracked on
/// working copies owned by the allocator.
#[derive(Debug, Clone)]
pub struct PackingJob {
    pub material_id: usize,
    pub name: String,
    pub description: String,
    /// Sheet width in inches
    pub sheet_width: f32,
    /// Sheet height in inches
    pub sheet_height: f32,
    pub parts: Vec<PartDemand>,
    /// Waste allowance applied by upstream collaborators when building the
    /// part list; carried through for reporting, not consumed by the engine.
    pub waste_percent: f32,
    /// Whether pieces may be placed rotated by 90°
    pub allow_rotate: bool,
}

impl PackingJob {
    /// A job with a non-positive sheet dimension short-circuits to an all-zero
    /// result without ever invoking the packer.
    pub fn is_degenerate(&self) -> bool {
        self.sheet_width <= 0.0 || self.sheet_height <= 0.0
    }

    /// Parts eligible for packing: positive dimensions and positive quantity.
    pub fn packable_parts(&self) -> impl Iterator<Item = &PartDemand> {
        self.parts.iter().filter(|p| p.is_packable())
    }

    /// Total demanded area in in², over packable parts only.
    pub fn total_part_area(&self) -> f32 {
        self.packable_parts()
            .map(|p| p.piece_area() * p.quantity as f32)
            .sum()
    }

    pub fn total_part_qty(&self) -> usize {
        self.packable_parts().map(|p| p.quantity).sum()
    }

    /// Area of one sheet in in²
    pub fn sheet_area(&self) -> f32 {
        self.sheet_width * self.sheet_height
    }
}
