use super::error::TableError;
use super::table::WeightedTable;
use log::trace;
use rand::Rng;

impl<T> WeightedTable<T> {
    ///
    /// Rolls against the table with the caller's generator and returns the
    /// index of the winning entry.
    ///
    /// Walks the entries in order, keeping a running sum of the weights; the
    /// first entry whose cumulative weight exceeds the draw wins, so each
    /// entry wins with probability weight / total. If floating point
    /// rounding pushes the draw past every partial sum, the last entry wins.
    pub fn roll_index_with<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total_weight = self.total_weight();
        let roll = rng.gen_range(0.0..total_weight);
        trace!("Rolled {} of total weight {}", roll, total_weight);
        let mut progress = 0.0;
        for (index, (_, weight)) in self.entries().iter().enumerate() {
            if progress + weight > roll {
                return index;
            }
            progress += weight;
        }
        self.entries().len() - 1
    }

    /// Rolls with the caller's generator and returns the winning label.
    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let (label, _) = &self.entries()[self.roll_index_with(rng)];
        label
    }

    /// Rolls with the thread local generator.
    pub fn roll(&self) -> &T {
        self.roll_with(&mut rand::thread_rng())
    }
}

/// Validates `entries` and rolls once. Every call pays for validation again,
/// so callers rolling the same table repeatedly should build a
/// [`WeightedTable`] once instead.
pub fn roll_die<T: Clone, R: Rng + ?Sized>(
    entries: Vec<(T, f64)>,
    rng: &mut R,
) -> Result<T, TableError> {
    let table = WeightedTable::new(entries)?;
    Ok(table.roll_with(rng).clone())
}
