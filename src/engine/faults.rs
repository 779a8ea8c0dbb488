use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Running count of recovered bounds faults in the neighbor scan.
///
/// A fault means a checked cell access missed even though the coordinate
/// passed the bounds pre-check, which requires the grid's dimensions to
/// disagree with its storage. The counter exists so a regression here is
/// observable instead of silently swallowed.
#[derive(Debug, Default)]
pub struct FaultLog {
    faults: Cell<u32>,
}

impl FaultLog {
    /// Records one fault and emits the diagnostic for it
    pub fn record(&self, row: i32, col: i32, max_row: i32, max_col: i32) {
        let count = self.faults.get() + 1;
        self.faults.set(count);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        eprintln!("WARNING: neighbor scan was out of bounds, fault #{count}");
        eprintln!("\trow: {row}, col: {col}");
        eprintln!("\tmax valid index: ({max_row}, {max_col})");
        eprintln!("\tcurrent time in milliseconds: {millis}");
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.faults.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_counter() {
        let log = FaultLog::default();
        assert_eq!(log.count(), 0);

        log.record(3, 40, 22, 22);
        log.record(-1, 0, 22, 22);
        assert_eq!(log.count(), 2);
    }
}
