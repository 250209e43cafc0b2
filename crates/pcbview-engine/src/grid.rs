// Imports
use pcbview_compose::ext::AabbExt;
use pcbview_compose::shapes::{Capsule, Shapeable};
use slotmap::SlotMap;
use tracing::trace;

/// The id of the owner of capsules inserted into the grid, usually a shape.
pub type OwnerId = u32;

slotmap::new_key_type! {
    /// The key of a record in the grid's record store.
    pub struct RecordKey;
}

#[derive(Debug, Clone)]
struct Record {
    owner: OwnerId,
    capsule: Capsule,
    /// The stamp of the last query that evaluated this record. Zero if none did.
    stamp: u64,
    /// The number of buckets holding the key of this record.
    n_buckets: usize,
}

/// A range of cells. The maxs are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRange {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl CellRange {
    fn len(&self) -> usize {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// The bucket indices in row-major order.
    fn buckets(self, cols: usize) -> impl Iterator<Item = usize> {
        (self.min_y..self.max_y)
            .flat_map(move |y| (self.min_x..self.max_x).map(move |x| y * cols + x))
    }
}

/// A uniform grid of buckets holding capsules, used for finding the owner of a capsule colliding with a query.
///
/// Each capsule is stored once as a record, the buckets of all cells its bounds overlap hold the record key.
/// Coordinates outside of the grid are clamped to the border cells.
#[derive(Debug)]
pub struct SpatialGrid {
    cols: usize,
    rows: usize,
    /// Converts canvas coordinates to cell coordinates.
    scale: na::Vector2<f64>,
    records: SlotMap<RecordKey, Record>,
    /// Row-major.
    buckets: Vec<Vec<RecordKey>>,
    /// Incremented for every query.
    stamp: u64,
}

impl SpatialGrid {
    /// A new empty grid with `cols` x `rows` cells.
    ///
    /// The cell of a coordinate is `floor(coord * scale)`. Grids have at least one cell.
    pub fn new(cols: usize, rows: usize, scale_x: f64, scale_y: f64) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);

        Self {
            cols,
            rows,
            scale: na::vector![scale_x, scale_y],
            records: SlotMap::with_key(),
            buckets: vec![Vec::new(); cols * rows],
            stamp: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scale(&self) -> na::Vector2<f64> {
        self.scale
    }

    /// The number of stored capsules.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes all capsules.
    pub fn clear(&mut self) {
        self.records.clear();
        self.buckets.iter_mut().for_each(|bucket| bucket.clear());
    }

    /// Inserts the capsule for the owner into all buckets its bounds overlap.
    ///
    /// Capsules with non-finite coordinates, radius or gap are not inserted.
    pub fn insert(&mut self, capsule: Capsule, owner: OwnerId) {
        if !capsule.is_finite() {
            trace!(owner, ?capsule, "Not inserting non-finite capsule into grid");
            return;
        }
        let range = self.cell_range(&capsule);
        let key = self.records.insert(Record {
            owner,
            capsule,
            stamp: 0,
            n_buckets: range.len(),
        });

        for i in range.buckets(self.cols) {
            self.buckets[i].push(key);
        }
        trace!(owner, ?range, "Inserted capsule into grid");
    }

    /// Removes the capsule that was inserted with the same owner and the exact same geometry.
    ///
    /// Buckets that don't hold a matching capsule are left untouched, removing a capsule that isn't stored is a no-op.
    pub fn remove(&mut self, capsule: &Capsule, owner: OwnerId) {
        let range = self.cell_range(capsule);
        let mut n_removed = 0;

        for i in range.buckets(self.cols) {
            let bucket = &mut self.buckets[i];
            let Some(pos) = bucket.iter().position(|key| {
                self.records
                    .get(*key)
                    .is_some_and(|record| record.owner == owner && record.capsule == *capsule)
            }) else {
                continue;
            };
            let key = bucket.remove(pos);
            n_removed += 1;

            if let Some(record) = self.records.get_mut(key) {
                record.n_buckets -= 1;
                if record.n_buckets == 0 {
                    self.records.remove(key);
                }
            }
        }

        if n_removed == 0 {
            trace!(owner, ?range, "No capsule to remove from grid");
        } else {
            trace!(owner, n_removed, "Removed capsule from grid");
        }
    }

    /// Returns the owner of the first stored capsule that collides with the given capsule.
    ///
    /// Cells are visited in row-major order and the records of a bucket in insertion order,
    /// the first collision wins.
    pub fn query(&mut self, capsule: &Capsule) -> Option<OwnerId> {
        self.advance_stamp();
        let stamp = self.stamp;
        let range = self.cell_range(capsule);

        for i in range.buckets(self.cols) {
            for key in self.buckets[i].iter() {
                let Some(record) = self.records.get_mut(*key) else {
                    continue;
                };
                // records spanning multiple cells are only evaluated once
                if record.stamp == stamp {
                    continue;
                }
                record.stamp = stamp;

                if capsule.collides_w(&record.capsule) {
                    return Some(record.owner);
                }
            }
        }

        None
    }

    fn advance_stamp(&mut self) {
        if self.stamp == u64::MAX {
            for (_, record) in self.records.iter_mut() {
                record.stamp = 0;
            }
            self.stamp = 0;
        }
        self.stamp += 1;
    }

    /// The cells overlapped by the capsule bounds, clamped to the grid.
    ///
    /// Always contains at least one cell.
    fn cell_range(&self, capsule: &Capsule) -> CellRange {
        let bounds = capsule.bounds().scale_non_uniform(self.scale);
        let (min_x, max_x) = axis_cells(bounds.mins[0], bounds.maxs[0], self.cols);
        let (min_y, max_y) = axis_cells(bounds.mins[1], bounds.maxs[1], self.rows);

        CellRange {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

/// The clamped cell span of the interval on an axis with `n_cells` cells.
fn axis_cells(min: f64, max: f64, n_cells: usize) -> (usize, usize) {
    let n_cells = n_cells as i64;
    let lower = (min.floor() as i64).clamp(0, n_cells - 1);
    let upper = (max.ceil() as i64).clamp(lower + 1, n_cells);
    (lower as usize, upper as usize)
}
