use crate::entities::{PackOutcome, PackingJob};
use crate::packing::SheetAllocator;
use crate::util::NestConfig;
use rayon::prelude::*;

/// Packs each job independently and lazily, preserving input order.
pub fn pack_all<'a>(
    jobs: &'a [PackingJob],
    config: NestConfig,
) -> impl Iterator<Item = PackOutcome> + 'a {
    jobs.iter()
        .map(move |job| SheetAllocator::new(job.clone(), config).solve())
}

/// Packs jobs across worker threads. Each job owns its own allocator and
/// free-rectangle arena, so no locking is involved; results come back in
/// input order.
pub fn pack_all_parallel(jobs: &[PackingJob], config: NestConfig) -> Vec<PackOutcome> {
    jobs.par_iter()
        .map(|job| SheetAllocator::new(job.clone(), config).solve())
        .collect()
}
