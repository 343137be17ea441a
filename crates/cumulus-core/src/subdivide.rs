//! Recursive-division noise, after the IMSMap xscreensaver technique:
//! derive midpoint values as corner averages plus a random offset, then
//! descend into four overlapping quadrants of the same backing buffer.
//!
//! Three variants of the split are implemented, warts included:
//!
//! * [`subdivide_naive`] stops early (base case at max dimension 2) and has
//!   no recursion guard, so many cells are never touched. The result looks
//!   like ordered dithering.
//! * [`subdivide_guarded`] descends all the way down (base case 1) and
//!   skips any quadrant identical to the region it came from.
//! * [`subdivide_edge_midpoints`] additionally fills the four edge
//!   midpoints of every region, not just the center.
//!
//! Quadrants overlap on the shared midpoint row/column, so sibling calls
//! recompute boundary cells and a later sibling's write wins. The fixed
//! enumeration order below (top-left, bottom-left, top-right, bottom-right)
//! and the fixed draw order within a region are therefore part of the
//! output contract, not an implementation detail.

use crate::grid::{GridError, GridView};
use crate::offset::OffsetSource;

/// The three subdivision algorithms, enumerable for driver-side sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Naive,
    Guarded,
    EdgeMidpoints,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Naive, Variant::Guarded, Variant::EdgeMidpoints];

    /// Run this variant over the view, drawing perturbations from `source`.
    pub fn subdivide(
        self,
        view: &mut GridView<'_>,
        source: &mut impl OffsetSource,
    ) -> Result<(), GridError> {
        match self {
            Variant::Naive => subdivide_naive(view, source),
            Variant::Guarded => subdivide_guarded(view, source),
            Variant::EdgeMidpoints => subdivide_edge_midpoints(view, source),
        }
    }
}

/// Half-open quadrant rectangles ((r0, r1), (c0, c1)) for a tx x ty region,
/// in canonical order: top-left, bottom-left, top-right, bottom-right.
/// Each includes the midpoint row and/or column, so siblings overlap.
fn quadrant_cuts(tx: usize, ty: usize) -> [((usize, usize), (usize, usize)); 4] {
    let (mx, my) = (tx / 2, ty / 2);
    [
        ((0, mx + 1), (0, my + 1)),
        ((mx, tx), (0, my + 1)),
        ((0, mx + 1), (my, ty)),
        ((mx, tx), (my, ty)),
    ]
}

#[inline]
fn corner_mean(view: &GridView<'_>) -> f32 {
    let (lr, lc) = (view.last_row(), view.last_col());
    (view.get(0, 0) + view.get(0, lc) + view.get(lr, 0) + view.get(lr, lc)) / 4.0
}

fn require_non_empty(view: &GridView<'_>) -> Result<(), GridError> {
    if view.rows() == 0 || view.cols() == 0 {
        return Err(GridError::EmptyRegion {
            r0: 0,
            r1: view.rows(),
            c0: 0,
            c1: view.cols(),
        });
    }
    Ok(())
}

/// Naive quadrant split.
///
/// Base case at max dimension <= 2, center = corner mean + one draw, then
/// unconditional descent into all four quadrants. There is deliberately no
/// guard against a quadrant collapsing onto the full region; that gap is
/// what makes this variant stop early and leave most cells untouched.
pub fn subdivide_naive(
    view: &mut GridView<'_>,
    source: &mut impl OffsetSource,
) -> Result<(), GridError> {
    require_non_empty(view)?;
    naive_inner(view, source)
}

fn naive_inner<S: OffsetSource>(view: &mut GridView<'_>, source: &mut S) -> Result<(), GridError> {
    let (tx, ty) = (view.rows(), view.cols());
    if tx.max(ty) <= 2 {
        return Ok(());
    }
    let (mx, my) = (tx / 2, ty / 2);
    let center = corner_mean(view) + source.next_offset();
    view.set(mx, my, center);
    for ((r0, r1), (c0, c1)) in quadrant_cuts(tx, ty) {
        let mut quad = view.sub_region(r0, r1, c0, c1)?;
        naive_inner(&mut quad, source)?;
    }
    Ok(())
}

/// Corner-midpoint subdivision with a recursion guard.
///
/// Base case at max dimension <= 1; a quadrant is entered only when it is
/// non-empty and not identical to the current region. Cells no deeper call
/// ever targets keep their previous value.
pub fn subdivide_guarded(
    view: &mut GridView<'_>,
    source: &mut impl OffsetSource,
) -> Result<(), GridError> {
    require_non_empty(view)?;
    guarded_inner(view, source)
}

fn guarded_inner<S: OffsetSource>(view: &mut GridView<'_>, source: &mut S) -> Result<(), GridError> {
    let (tx, ty) = (view.rows(), view.cols());
    if tx.max(ty) <= 1 {
        return Ok(());
    }
    let (mx, my) = (tx / 2, ty / 2);
    let center = corner_mean(view) + source.next_offset();
    view.set(mx, my, center);
    for ((r0, r1), (c0, c1)) in quadrant_cuts(tx, ty) {
        if r0 < r1 && c0 < c1 && !(r0 == 0 && r1 == tx && c0 == 0 && c1 == ty) {
            let mut quad = view.sub_region(r0, r1, c0, c1)?;
            guarded_inner(&mut quad, source)?;
        }
    }
    Ok(())
}

/// Corner and edge midpoint subdivision.
///
/// Five values per region, each from the region's corner values as read
/// before any write, each with an independent draw, in this fixed order:
/// center, top edge, bottom edge, left edge, right edge. In degenerate
/// regions (a dimension of 1 or 2) some of the five target cells coincide;
/// the later write wins, which the fixed order makes reproducible.
/// Base case and guard as in [`subdivide_guarded`], except the base case
/// threshold is 2.
pub fn subdivide_edge_midpoints(
    view: &mut GridView<'_>,
    source: &mut impl OffsetSource,
) -> Result<(), GridError> {
    require_non_empty(view)?;
    edge_midpoints_inner(view, source)
}

fn edge_midpoints_inner<S: OffsetSource>(
    view: &mut GridView<'_>,
    source: &mut S,
) -> Result<(), GridError> {
    let (tx, ty) = (view.rows(), view.cols());
    if tx.max(ty) <= 2 {
        return Ok(());
    }
    let (mx, my) = (tx / 2, ty / 2);
    let (lr, lc) = (view.last_row(), view.last_col());
    let tl = view.get(0, 0);
    let tr = view.get(0, lc);
    let bl = view.get(lr, 0);
    let br = view.get(lr, lc);

    view.set(mx, my, (tl + tr + bl + br) / 4.0 + source.next_offset());
    view.set(0, my, (tl + tr) / 2.0 + source.next_offset());
    view.set(lr, my, (bl + br) / 2.0 + source.next_offset());
    view.set(mx, 0, (tl + bl) / 2.0 + source.next_offset());
    view.set(mx, lc, (tr + br) / 2.0 + source.next_offset());

    for ((r0, r1), (c0, c1)) in quadrant_cuts(tx, ty) {
        if r0 < r1 && c0 < c1 && !(r0 == 0 && r1 == tx && c0 == 0 && c1 == ty) {
            let mut quad = view.sub_region(r0, r1, c0, c1)?;
            edge_midpoints_inner(&mut quad, source)?;
        }
    }
    Ok(())
}
