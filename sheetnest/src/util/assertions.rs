use crate::geometry::Rect;
use float_cmp::approx_eq;

//Various checks to verify correctness of the state of the packer
//Used in debug_assert!() blocks

pub fn free_rects_within_bin(free: &[Rect], bin_width: f32, bin_height: f32) -> bool {
    free.iter().all(|r| {
        gte(r.x_min, 0.0)
            && gte(r.y_min, 0.0)
            && lte(r.x_max, bin_width)
            && lte(r.y_max, bin_height)
    })
}

pub fn free_rects_disjoint_from(free: &[Rect], used: &Rect) -> bool {
    free.iter().all(|r| !r.overlaps(used))
}

pub fn no_contained_free_rects(free: &[Rect]) -> bool {
    free.iter().enumerate().all(|(i, a)| {
        free.iter()
            .enumerate()
            .all(|(j, b)| i == j || !a.contains(b))
    })
}

//f32 comparisons with a tolerance for accumulated rounding
fn lte(a: f32, b: f32) -> bool {
    a <= b || approx_eq!(f32, a, b, ulps = 4)
}

fn gte(a: f32, b: f32) -> bool {
    a >= b || approx_eq!(f32, a, b, ulps = 4)
}
