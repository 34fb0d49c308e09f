use crate::entities::{PackingJob, PartDemand};
use crate::io::ext_repr::ExtPackingJob;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::warn;

/// Builds a [`PackingJob`] from its external representation.
///
/// Non-finite dimensions are rejected. Negative quantities clamp to 0 and
/// parts with non-positive dimensions are kept but flagged; the engine skips
/// them during packing and excludes them from area totals.
pub fn import(ext: &ExtPackingJob) -> Result<PackingJob> {
    ensure!(
        ext.sheet_width.is_finite() && ext.sheet_height.is_finite(),
        "job '{}' has non-finite sheet dimensions: {} x {}",
        ext.name,
        ext.sheet_width,
        ext.sheet_height
    );

    let parts = ext
        .parts
        .iter()
        .map(|p| {
            ensure!(
                p.width.is_finite() && p.height.is_finite(),
                "part {} of job '{}' has non-finite dimensions: {} x {}",
                p.id,
                ext.name,
                p.width,
                p.height
            );
            if p.quantity > 0 && (p.width <= 0.0 || p.height <= 0.0) {
                warn!(
                    "[IMPORT] part {} of job '{}' has non-positive dimensions ({} x {}), it will not be packed",
                    p.id, ext.name, p.width, p.height
                );
            }
            Ok(PartDemand {
                id: p.id,
                label: p.label.clone(),
                width: p.width,
                height: p.height,
                quantity: usize::try_from(p.quantity).unwrap_or(0),
            })
        })
        .try_collect()?;

    Ok(PackingJob {
        material_id: ext.material_id,
        name: ext.name.clone(),
        description: ext.description.clone(),
        sheet_width: ext.sheet_width,
        sheet_height: ext.sheet_height,
        parts,
        waste_percent: ext.waste_percent,
        allow_rotate: ext.allow_rotate,
    })
}
