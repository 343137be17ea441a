//! Cloud-like 2D noise by recursive spatial subdivision, after the IMSMap
//! xscreensaver: seed corner elevations, give each midpoint the average of
//! its reference corners plus a small random offset, and subdivide until
//! regions are too small to split.
//!
//! The library is the algorithm only: an owned [`Grid`] with aliasing
//! sub-region views, an injected [`OffsetSource`] perturbation capability,
//! and the three subdivision variants in [`subdivide`]. Colormapping and
//! image output live in the `render` tool.

pub mod grid;
pub mod offset;
pub mod subdivide;

pub use grid::{Grid, GridError, GridView};
pub use offset::{OffsetDistribution, OffsetSource, RandomOffsets};
pub use subdivide::{
    subdivide_edge_midpoints, subdivide_guarded, subdivide_naive, Variant,
};
