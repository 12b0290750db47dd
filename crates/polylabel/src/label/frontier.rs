//! Best-first frontier over probe cells.
//!
//! `BinaryHeap` is a max-heap, so entries order by `max` directly. Equal
//! `max` values fall back to the insertion sequence with the comparison
//! reversed: the earlier push wins, which keeps every run reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::Cell;

#[derive(Clone, Copy, Debug)]
struct Entry {
    cell: Cell,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cell
            .max
            .total_cmp(&other.cell.max)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of cells, highest upper bound first, FIFO among ties.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cell, seq });
    }

    pub fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|e| e.cell)
    }
}
