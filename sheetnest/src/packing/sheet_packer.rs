use crate::geometry::Rect;
use crate::util::assertions;
use log::trace;
use ordered_float::OrderedFloat;

/// Places pieces into a single sheet's usable area with a MaxRects
/// Best-Short-Side-Fit heuristic: of all (free rectangle, orientation) pairs
/// that can hold the piece, the one leaving the smallest short leftover side
/// wins, with the smaller long leftover side breaking ties. This favors the
/// most "squarish" usable leftover space, which empirically reduces later
/// fragmentation.
///
/// The free-rectangle arena is owned exclusively by this packer and discarded
/// with it; it is never shared across sheets or jobs.
pub struct SheetPacker {
    bin_width: f32,
    bin_height: f32,
    free: Vec<Rect>,
    placed: Vec<Rect>,
}

/// A feasible (free rectangle, orientation) pair with its leftover dimensions.
#[derive(Clone, Copy, Debug)]
struct PlacementOption {
    free_idx: usize,
    rotated: bool,
    short_side: f32,
    long_side: f32,
}

impl SheetPacker {
    /// Creates a packer over a sheet's usable area. A non-positive dimension
    /// yields a packer with no free space, on which every insert fails.
    pub fn new(bin_width: f32, bin_height: f32) -> Self {
        let free = match Rect::try_new(0.0, 0.0, bin_width, bin_height) {
            Ok(bin) => vec![bin],
            Err(_) => vec![],
        };
        Self {
            bin_width,
            bin_height,
            free,
            placed: vec![],
        }
    }

    /// Attempts to place one `piece_w` × `piece_h` piece, reserving `kerf`
    /// along both axes for the blade. Returns the reserved rectangle on
    /// success; on failure the packer is left untouched.
    pub fn try_insert(
        &mut self,
        piece_w: f32,
        piece_h: f32,
        allow_rotate: bool,
        kerf: f32,
    ) -> Option<Rect> {
        let req_w = piece_w + kerf;
        let req_h = piece_h + kerf;

        let best = self
            .free
            .iter()
            .enumerate()
            .flat_map(|(free_idx, fr)| Self::placement_options(free_idx, fr, req_w, req_h, allow_rotate))
            .min_by_key(|o| (OrderedFloat(o.short_side), OrderedFloat(o.long_side)))?;

        let origin = self.free[best.free_idx];
        let (used_w, used_h) = match best.rotated {
            false => (req_w, req_h),
            true => (req_h, req_w),
        };
        let used = Rect {
            x_min: origin.x_min,
            y_min: origin.y_min,
            x_max: origin.x_min + used_w,
            y_max: origin.y_min + used_h,
        };

        // carve the placed rectangle out of every free rectangle it overlaps
        let mut remaining = Vec::with_capacity(self.free.len() + 4);
        for fr in self.free.drain(..) {
            if fr.overlaps(&used) {
                split_free_rect(fr, &used, &mut remaining);
            } else {
                remaining.push(fr);
            }
        }
        self.free = remaining;
        self.prune_free_list();

        trace!(
            "[PACK] piece {piece_w}x{piece_h} (rot: {}) at ({}, {})",
            best.rotated, used.x_min, used.y_min
        );

        debug_assert!(assertions::free_rects_within_bin(
            &self.free,
            self.bin_width,
            self.bin_height
        ));
        debug_assert!(assertions::free_rects_disjoint_from(&self.free, &used));
        debug_assert!(assertions::no_contained_free_rects(&self.free));

        self.placed.push(used);
        Some(used)
    }

    /// Rectangles reserved so far on this sheet (piece plus kerf).
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    pub fn n_placed(&self) -> usize {
        self.placed.len()
    }

    fn placement_options(
        free_idx: usize,
        fr: &Rect,
        req_w: f32,
        req_h: f32,
        allow_rotate: bool,
    ) -> impl Iterator<Item = PlacementOption> {
        let fit = |w: f32, h: f32, rotated: bool| {
            (fr.width() >= w && fr.height() >= h).then(|| {
                let leftover_w = fr.width() - w;
                let leftover_h = fr.height() - h;
                PlacementOption {
                    free_idx,
                    rotated,
                    short_side: f32::min(leftover_w, leftover_h),
                    long_side: f32::max(leftover_w, leftover_h),
                }
            })
        };

        // normal orientation is evaluated first, so it wins exact score ties
        let normal = fit(req_w, req_h, false);
        let rotated = allow_rotate.then(|| fit(req_h, req_w, true)).flatten();
        [normal, rotated].into_iter().flatten()
    }

    /// Removes every free rectangle fully contained in another. Partial
    /// overlaps are kept: the over-approximation is safe and merely costs
    /// search time.
    fn prune_free_list(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let mut removed_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                if self.free[i].contains(&self.free[j]) {
                    self.free.remove(j);
                } else if self.free[j].contains(&self.free[i]) {
                    self.free.remove(i);
                    removed_i = true;
                    break;
                } else {
                    j += 1;
                }
            }
            if !removed_i {
                i += 1;
            }
        }
    }

    #[cfg(test)]
    fn free_rects(&self) -> &[Rect] {
        &self.free
    }
}

/// Replaces `free` by the maximal sub-rectangles of it that are not covered by
/// `used`: the full-width slabs below and above, and the full-height slabs
/// left and right of the placed rectangle. Only called for overlapping pairs,
/// so every emitted slab has strictly positive area.
fn split_free_rect(free: Rect, used: &Rect, out: &mut Vec<Rect>) {
    if used.y_min > free.y_min {
        out.push(Rect {
            y_max: used.y_min,
            ..free
        });
    }
    if used.y_max < free.y_max {
        out.push(Rect {
            y_min: used.y_max,
            ..free
        });
    }
    if used.x_min > free.x_min {
        out.push(Rect {
            x_max: used.x_min,
            ..free
        });
    }
    if used.x_max < free.x_max {
        out.push(Rect {
            x_min: used.x_max,
            ..free
        });
    }
}
