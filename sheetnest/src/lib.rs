//! `sheetnest` is a heuristic engine for 2D rectangular cutting stock problems:
//! given a sheet size and a list of rectangular parts with required quantities,
//! it computes how many sheets are needed to cut all parts and reports material
//! utilization.
//!
//! Single-sheet placement uses a MaxRects free-rectangle arena with the
//! Best-Short-Side-Fit heuristic ([`packing::SheetPacker`]); multi-sheet
//! allocation opens sheets until all demand is satisfied or no further progress
//! is possible ([`packing::SheetAllocator`]). The solver is greedy and
//! order-dependent; it does not guarantee a minimum-sheet solution.
//!
//! Jobs are fully independent of each other and can be packed in parallel, see
//! [`packing::batch`].

/// Data model: parts, jobs and packing outcomes
pub mod entities;

/// Geometric primitive used by the packer
pub mod geometry;

/// External (JSON-friendly) representations and import/export
pub mod io;

/// The algorithmic core: single-sheet packer, sheet allocator, batch runner
pub mod packing;

/// Engine configuration and debug assertions
pub mod util;
