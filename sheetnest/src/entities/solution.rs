use crate::entities::PackingJob;

pub const IN2_PER_FT2: f32 = 144.0;

/// Aggregate metrics of one packed [`PackingJob`]. Created once per job,
/// immutable, carries no reference back to the job.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingResult {
    pub material_id: usize,
    pub name: String,
    pub description: String,
    /// Number of sheets that received at least one piece
    pub sheets_used: usize,
    /// Total demanded part area in ft², from pre-allocation quantities
    pub total_ft2: f32,
    /// Area of a single sheet in ft²
    pub sheet_ft2: f32,
    /// Fraction of purchased sheet area consumed by demand, in [0, 1]
    pub utilization: f32,
}

impl PackingResult {
    /// Builds the metrics for a job packed onto `sheets_used` sheets.
    ///
    /// Totals are computed from the job's own (never decremented) quantities,
    /// so they reflect true material demand even if some pieces could not be
    /// placed.
    pub fn new(job: &PackingJob, sheets_used: usize) -> Self {
        let total_in2 = job.total_part_area();
        let sheet_in2 = job.sheet_area();

        let utilization = if sheets_used > 0 && sheet_in2 > 0.0 {
            f32::min(1.0, total_in2 / (sheets_used as f32 * sheet_in2))
        } else {
            0.0
        };

        Self {
            material_id: job.material_id,
            name: job.name.clone(),
            description: job.description.clone(),
            sheets_used,
            total_ft2: total_in2 / IN2_PER_FT2,
            sheet_ft2: sheet_in2 / IN2_PER_FT2,
            utilization,
        }
    }

    /// The defined all-zero result for jobs with a non-positive sheet dimension.
    pub fn degenerate(job: &PackingJob) -> Self {
        Self {
            material_id: job.material_id,
            name: job.name.clone(),
            description: job.description.clone(),
            sheets_used: 0,
            total_ft2: 0.0,
            sheet_ft2: 0.0,
            utilization: 0.0,
        }
    }
}

/// Demand of one part type that could not be placed on any sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplacedDemand {
    pub part_id: usize,
    pub label: String,
    pub quantity: usize,
}

/// Outcome of packing one job.
#[derive(Debug, Clone, PartialEq)]
pub enum PackOutcome {
    /// Every demanded piece was placed.
    FullyPacked(PackingResult),
    /// Allocation terminated with outstanding demand: pieces that exceed the
    /// usable sheet area in every allowed orientation, a degenerate sheet, or
    /// a cancelled run. `unplaced` lists exactly what remains.
    PartiallyPacked {
        result: PackingResult,
        unplaced: Vec<UnplacedDemand>,
    },
}

impl PackOutcome {
    pub fn result(&self) -> &PackingResult {
        match self {
            PackOutcome::FullyPacked(result) => result,
            PackOutcome::PartiallyPacked { result, .. } => result,
        }
    }

    pub fn is_fully_packed(&self) -> bool {
        matches!(self, PackOutcome::FullyPacked(_))
    }

    pub fn unplaced(&self) -> &[UnplacedDemand] {
        match self {
            PackOutcome::FullyPacked(_) => &[],
            PackOutcome::PartiallyPacked { unplaced, .. } => unplaced,
        }
    }
}
