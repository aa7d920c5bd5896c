//! Column edge events
//!
//! On the board the EXTI handlers call the scanner directly. For host
//! simulation, and for boards that would rather defer the scan, edges can
//! be posted to an [`EdgeQueue`] and dispatched to the scanner later from a
//! single context.

use embedded_hal::delay::DelayNs;
use heapless::spsc::Queue;
use keycalc_hal::RegisterBank;

use super::scan::{KeypadScanner, ScanOutcome};
use super::COLUMNS;

/// A rising edge on one keypad column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnEdge {
    column: u8,
}

impl ColumnEdge {
    /// Edge on `column`, or `None` if there is no such column
    pub const fn new(column: u8) -> Option<Self> {
        if column < COLUMNS {
            Some(Self { column })
        } else {
            None
        }
    }

    /// Column index (0-3)
    pub const fn column(self) -> u8 {
        self.column
    }
}

/// Fixed-capacity FIFO of pending column edges
///
/// Holds up to `N - 1` edges.
pub struct EdgeQueue<const N: usize> {
    queue: Queue<ColumnEdge, N>,
}

impl<const N: usize> Default for EdgeQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EdgeQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// Post an edge; gives it back if the queue is full
    pub fn post(&mut self, edge: ColumnEdge) -> Result<(), ColumnEdge> {
        self.queue.enqueue(edge)
    }

    /// Number of pending edges
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no edges are pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Run one scan per pending edge, oldest first
    ///
    /// `on_outcome` sees every scan result. Returns the number of edges
    /// handled.
    pub fn dispatch<R, D, F>(
        &mut self,
        scanner: &mut KeypadScanner<'_, R, D>,
        mut on_outcome: F,
    ) -> usize
    where
        R: RegisterBank,
        D: DelayNs,
        F: FnMut(ColumnEdge, ScanOutcome),
    {
        let mut handled = 0;
        while let Some(edge) = self.queue.dequeue() {
            let outcome = scanner.on_column_edge(edge.column);
            on_outcome(edge, outcome);
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::{Keypad, KeySlot};
    use crate::testing::{FakeDelay, FakeRegisters};
    use keycalc_core::config::KeypadConfig;
    use keycalc_core::traits::KeyCode;
    use keycalc_hal::Register;

    #[test]
    fn test_column_edge_range() {
        assert_eq!(ColumnEdge::new(3).map(ColumnEdge::column), Some(3));
        assert_eq!(ColumnEdge::new(4), None);
    }

    #[test]
    fn test_queue_capacity() {
        let mut queue: EdgeQueue<4> = EdgeQueue::new();
        let edge = ColumnEdge::new(0).unwrap();
        assert!(queue.post(edge).is_ok());
        assert!(queue.post(edge).is_ok());
        assert!(queue.post(edge).is_ok());
        assert_eq!(queue.post(edge), Err(edge));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_dispatch_in_order_last_key_wins() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        regs.set_idr(0x0F | (1 << 4));
        let mut scanner =
            KeypadScanner::new(&mut regs, FakeDelay::new(), &slot, KeypadConfig::default());
        scanner.initialize();

        let mut queue: EdgeQueue<8> = EdgeQueue::new();
        for column in [0, 3, 1] {
            queue.post(ColumnEdge::new(column).unwrap()).unwrap();
        }

        let mut seen = Vec::new();
        let handled = queue.dispatch(&mut scanner, |edge, outcome| {
            seen.push((edge.column(), outcome));
        });

        assert_eq!(handled, 3);
        assert!(queue.is_empty());
        let key = |raw| ScanOutcome::Key(KeyCode::new(raw).unwrap());
        assert_eq!(seen, vec![(0, key(1)), (3, key(4)), (1, key(2))]);

        let keypad = Keypad::new(&slot);
        assert_eq!(keypad.get().value(), 2);
        assert_eq!(keypad.get_char(), '2');

        // Each scan cleared only its own pending bit
        let (regs, _) = scanner.release();
        assert_eq!(regs.writes_to(Register::ExtiPr), vec![1, 1 << 3, 1 << 1]);
    }
}
