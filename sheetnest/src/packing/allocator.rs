use std::cmp::Reverse;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::entities::{PackOutcome, PackingJob, PackingResult, PartDemand, UnplacedDemand};
use crate::packing::SheetPacker;
use crate::util::NestConfig;
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;

/// Satisfies all outstanding demand of a [`PackingJob`] by opening successive
/// sheets and driving a [`SheetPacker`] over each, largest parts first.
///
/// The allocator owns a working copy of the packable part quantities; the
/// caller's job is never mutated. A single job is inherently sequential (each
/// sheet's outcome depends on the prior sheet's leftover demand), but distinct
/// jobs are fully independent.
pub struct SheetAllocator {
    pub job: PackingJob,
    pub config: NestConfig,
    /// Working copy of the packable parts; quantities decrement as pieces land
    parts: Vec<PartDemand>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl SheetAllocator {
    pub fn new(job: PackingJob, config: NestConfig) -> Self {
        let parts = job.packable_parts().cloned().collect_vec();
        Self {
            job,
            config,
            parts,
            cancel_flag: None,
        }
    }

    /// Registers a flag polled once per sheet-open; raising it makes the
    /// allocator return the partial outcome accumulated so far.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn solve(mut self) -> PackOutcome {
        if self.job.is_degenerate() {
            debug!(
                "[ALLOC] job '{}' has a degenerate sheet ({} x {}), returning zero result",
                self.job.name, self.job.sheet_width, self.job.sheet_height
            );
            let result = PackingResult::degenerate(&self.job);
            return self.finish(result);
        }

        let usable_w = f32::max(0.0, self.job.sheet_width - 2.0 * self.config.edge_margin);
        let usable_h = f32::max(0.0, self.job.sheet_height - 2.0 * self.config.edge_margin);

        let mut sheets_used = 0;

        while self.remaining_qty() > 0 {
            if self.is_cancelled() {
                warn!(
                    "[ALLOC] job '{}' cancelled after {} sheet(s)",
                    self.job.name, sheets_used
                );
                break;
            }

            let mut packer = SheetPacker::new(usable_w, usable_h);
            let placed = self.fill_sheet(&mut packer);

            if placed == 0 {
                // a full pass placed nothing: the remaining pieces can never
                // fit on a fresh sheet either
                break;
            }

            sheets_used += 1;
            let reserved: f32 = packer.placed().iter().map(|r| r.area()).sum();
            debug!(
                "[ALLOC] job '{}': sheet {} closed with {} piece(s) covering {:.1}% of the usable area, {} piece(s) outstanding",
                self.job.name,
                sheets_used,
                placed,
                100.0 * reserved / (usable_w * usable_h),
                self.remaining_qty()
            );
        }

        info!(
            "[ALLOC] job '{}': {} of {} piece(s) placed on {} sheet(s)",
            self.job.name,
            self.job.total_part_qty() - self.remaining_qty(),
            self.job.total_part_qty(),
            sheets_used
        );

        let result = PackingResult::new(&self.job, sheets_used);
        self.finish(result)
    }

    /// Runs one largest-first pass over the outstanding part types, placing
    /// pieces of each type until its first failure on this sheet. Returns the
    /// number of pieces placed.
    fn fill_sheet(&mut self, packer: &mut SheetPacker) -> usize {
        let allow_rotate = self.job.allow_rotate;
        let kerf = self.config.kerf;
        let mut placed = 0;

        for idx in self.placement_order() {
            let part = &mut self.parts[idx];
            while part.quantity > 0 {
                match packer.try_insert(part.width, part.height, allow_rotate, kerf) {
                    Some(_) => {
                        part.quantity -= 1;
                        placed += 1;
                    }
                    // this part type may still succeed on the next sheet
                    None => break,
                }
            }
        }
        placed
    }

    /// Outstanding part types ordered by descending max(width, height), then
    /// descending remaining quantity: large pieces are hardest to place later
    /// and should claim space first.
    fn placement_order(&self) -> Vec<usize> {
        (0..self.parts.len())
            .filter(|&i| self.parts[i].quantity > 0)
            .sorted_by_cached_key(|&i| {
                let p = &self.parts[i];
                Reverse((OrderedFloat(p.max_dim()), p.quantity))
            })
            .collect_vec()
    }

    fn remaining_qty(&self) -> usize {
        self.parts.iter().map(|p| p.quantity).sum()
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::Relaxed))
    }

    fn finish(self, result: PackingResult) -> PackOutcome {
        let unplaced = self
            .parts
            .iter()
            .filter(|p| p.quantity > 0)
            .map(|p| UnplacedDemand {
                part_id: p.id,
                label: p.label.clone(),
                quantity: p.quantity,
            })
            .collect_vec();

        match unplaced.is_empty() {
            true => PackOutcome::FullyPacked(result),
            false => {
                warn!(
                    "[ALLOC] job '{}': {} piece(s) across {} part type(s) could not be placed",
                    self.job.name,
                    unplaced.iter().map(|u| u.quantity).sum::<usize>(),
                    unplaced.len()
                );
                PackOutcome::PartiallyPacked { result, unplaced }
            }
        }
    }
}
