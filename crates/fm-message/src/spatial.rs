//! Write-many channel with radius-bounded range queries.
//!
//! # Data layout
//!
//! The domain `[min, max)` is cut into a uniform grid of square cells whose
//! edge is at least the query radius.  On [`seal`](SpatialChannel::seal) the
//! pending records are sorted by cell into one contiguous `entries` array
//! and indexed **CSR**-style: the records of cell `c` occupy
//!
//! ```text
//! entries[ cell_start[c] .. cell_start[c + 1] ]
//! ```
//!
//! A range query visits only the cells overlapping the `2·radius` box around
//! the query point (at most 3 × 3 when `radius <= cell_size`) and filters by
//! exact distance, so its cost depends on local density, not population.
//! Within a cell, records keep their publish order.

use std::ops::Range;

use fm_core::{GridPoint, SpatialConfig};

use crate::{MessageError, MessageResult};

/// A spatially indexed message channel.
pub struct SpatialChannel<M> {
    config:     SpatialConfig,
    cell_size:  f32,
    cols:       usize,
    rows:       usize,

    /// Records published during the current layer.
    pending:    Vec<(GridPoint, M)>,

    // ── Sealed snapshot ───────────────────────────────────────────────────
    /// CSR row pointer, length `cols * rows + 1`.
    cell_start: Vec<u32>,
    /// Sealed records sorted by cell.
    entries:    Vec<(GridPoint, M)>,
    generation: u64,
}

impl<M> SpatialChannel<M> {
    /// Create a channel over `config`'s domain.
    ///
    /// Fails whenever [`SpatialConfig::validate`] does, including grids too
    /// fine to allocate.
    pub fn new(config: SpatialConfig) -> MessageResult<Self> {
        config.validate()?;
        let cell_size = config.effective_cell_size();
        let (cols, rows) = config.grid_dims()?;

        Ok(Self {
            config,
            cell_size,
            cols,
            rows,
            pending:    Vec::new(),
            cell_start: vec![0; cols * rows + 1],
            entries:    Vec::new(),
            generation: 0,
        })
    }

    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }

    /// Grid dimensions as `(cols, rows)`.
    pub fn grid_dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// `true` if `(x, y)` lies in `[min, max)` on both axes.
    #[inline]
    pub fn in_domain(&self, x: f32, y: f32) -> bool {
        let SpatialConfig { min, max, .. } = self.config;
        x >= min[0] && x < max[0] && y >= min[1] && y < max[1]
    }

    /// Append a record located at `(x, y)` to the current layer's buffer.
    ///
    /// Out-of-domain (or non-finite) coordinates are rejected and the record
    /// is dropped; nothing is clamped into an edge cell.
    pub fn publish(&mut self, msg: M, x: f32, y: f32) -> MessageResult<()> {
        if !self.in_domain(x, y) {
            return Err(MessageError::OutOfDomain { x, y });
        }
        self.pending.push((GridPoint::new(x, y), msg));
        Ok(())
    }

    /// Bucket the pending records and freeze them as the readable snapshot.
    ///
    /// The previous snapshot is discarded.  Returns the number of records
    /// sealed.
    pub fn seal(&mut self) -> usize {
        let mut keyed: Vec<(usize, GridPoint, M)> = std::mem::take(&mut self.pending)
            .into_iter()
            .map(|(p, m)| (self.cell_of(p), p, m))
            .collect();
        // Stable: publish order survives within a cell.
        keyed.sort_by_key(|(cell, _, _)| *cell);

        self.cell_start.fill(0);
        for (cell, _, _) in &keyed {
            self.cell_start[cell + 1] += 1;
        }
        for c in 1..self.cell_start.len() {
            self.cell_start[c] += self.cell_start[c - 1];
        }

        self.entries = keyed.into_iter().map(|(_, p, m)| (p, m)).collect();
        self.generation += 1;
        self.entries.len()
    }

    /// Every sealed record within `radius` (inclusive) of `(x, y)`.
    pub fn query(&self, x: f32, y: f32, radius: f32) -> impl Iterator<Item = &M> + '_ {
        self.query_located(x, y, radius).map(|(_, m)| m)
    }

    /// Like [`query`](Self::query) but also yields each record's position.
    ///
    /// A query point outside the domain yields nothing, mirroring
    /// [`publish`](Self::publish), even if sealed records lie within `radius`.
    pub fn query_located(
        &self,
        x:      f32,
        y:      f32,
        radius: f32,
    ) -> impl Iterator<Item = (GridPoint, &M)> + '_ {
        let center = GridPoint::new(x, y);
        let r2 = radius * radius;
        let (xs, ys) = self.cell_span(center, radius);
        let cols = self.cols;

        ys.flat_map(move |cy| xs.clone().map(move |cx| cy * cols + cx))
            .flat_map(move |cell| self.bucket(cell).iter())
            .filter(move |(p, _)| p.distance_sq(center) <= r2)
            .map(|(p, m)| (*p, m))
    }

    /// Query with the channel's configured radius.
    pub fn query_radius(&self, x: f32, y: f32) -> impl Iterator<Item = &M> + '_ {
        self.query(x, y, self.config.radius)
    }

    /// How many cells a query at `(x, y)` with `radius` inspects.
    pub fn cells_visited(&self, x: f32, y: f32, radius: f32) -> usize {
        let (xs, ys) = self.cell_span(GridPoint::new(x, y), radius);
        xs.len() * ys.len()
    }

    /// Number of readable records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records published since the last seal.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop both buffers.  Called between steps so nothing leaks across them.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.entries.clear();
        self.cell_start.fill(0);
    }

    /// Number of seals performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Grid helpers ──────────────────────────────────────────────────────

    #[inline]
    fn bucket(&self, cell: usize) -> &[(GridPoint, M)] {
        let start = self.cell_start[cell] as usize;
        let end = self.cell_start[cell + 1] as usize;
        &self.entries[start..end]
    }

    /// Cell of an in-domain point.
    #[inline]
    fn cell_of(&self, p: GridPoint) -> usize {
        let cx = axis_cell(p.x, self.config.min[0], self.cell_size).min(self.cols as i64 - 1);
        let cy = axis_cell(p.y, self.config.min[1], self.cell_size).min(self.rows as i64 - 1);
        cy.max(0) as usize * self.cols + cx.max(0) as usize
    }

    /// Column and row ranges overlapping the box of half-width `radius`.
    /// Empty for an out-of-domain center.
    fn cell_span(&self, center: GridPoint, radius: f32) -> (Range<usize>, Range<usize>) {
        if !self.in_domain(center.x, center.y) {
            return (0..0, 0..0);
        }
        let xs = axis_span(center.x, radius, self.config.min[0], self.cell_size, self.cols);
        let ys = axis_span(center.y, radius, self.config.min[1], self.cell_size, self.rows);
        if xs.is_empty() || ys.is_empty() {
            return (0..0, 0..0);
        }
        (xs, ys)
    }
}

#[inline]
fn axis_cell(v: f32, min: f32, cell: f32) -> i64 {
    ((v - min) / cell).floor() as i64
}

fn axis_span(center: f32, radius: f32, min: f32, cell: f32, n: usize) -> Range<usize> {
    if !(center.is_finite() && radius.is_finite()) || radius < 0.0 {
        return 0..0;
    }
    let lo = axis_cell(center - radius, min, cell);
    let hi = axis_cell(center + radius, min, cell);
    if hi < 0 || lo >= n as i64 {
        return 0..0;
    }
    lo.max(0) as usize..(hi.min(n as i64 - 1) + 1) as usize
}
