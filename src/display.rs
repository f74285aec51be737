//! Debug rendering of heap contents
//!
//! Pure formatters for inspecting a [`PriorityHeap`] while debugging. Both
//! return a `String` and never mutate the queue; they are diagnostic aids,
//! not part of the queue's contract, and their exact layout may change.

use std::fmt::{Display, Write};

use crate::heap::PriorityHeap;

const EMPTY_MARKER: &str = "(EMPTY)";

impl<T: Display, P: Ord + Display> PriorityHeap<T, P> {
    /// Renders the data of every live entry in storage order, separated by
    /// single spaces, or `(EMPTY)` when the queue holds nothing.
    pub fn array_dump(&self) -> String {
        if self.is_empty() {
            return EMPTY_MARKER.to_string();
        }
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", entry.data);
        }
        out
    }

    /// Renders the heap as an indented tree, one `data(priority)` node per
    /// line, right subtree above the node and left subtree below it.
    /// Indentation is three spaces per level of depth. Returns `(EMPTY)`
    /// when the queue holds nothing.
    ///
    /// Read sideways: the root sits at the left margin, its right subtree
    /// above it and its left subtree below it.
    pub fn tree_dump(&self) -> String {
        if self.is_empty() {
            return EMPTY_MARKER.to_string();
        }
        let mut out = String::new();
        self.dump_subtree(0, &mut out);
        out
    }

    fn dump_subtree(&self, index: usize, out: &mut String) {
        let left = 2 * index + 1;
        let right = 2 * index + 2;

        if right < self.len() {
            self.dump_subtree(right, out);
        }

        // depth of a complete-tree index is floor(log2(index + 1))
        let indent = ((index + 1).ilog2() as usize) * 3;
        let entry = &self.entries[index];
        let _ = writeln!(out, "{:indent$}{}({})", "", entry.data, entry.priority);

        if left < self.len() {
            self.dump_subtree(left, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::PriorityHeap;

    #[test]
    fn empty_dumps_use_marker() {
        let heap: PriorityHeap<u8, u8> = PriorityHeap::new();
        assert_eq!(heap.array_dump(), "(EMPTY)");
        assert_eq!(heap.tree_dump(), "(EMPTY)");
    }

    #[test]
    fn array_dump_lists_data_in_storage_order() {
        let mut heap = PriorityHeap::new();
        heap.push(3, "c");
        heap.push(1, "a");
        heap.push(2, "b");

        assert_eq!(heap.array_dump(), "c a b");
    }

    #[test]
    fn tree_dump_single_node() {
        let mut heap = PriorityHeap::new();
        heap.push(1, "a");

        assert_eq!(heap.tree_dump(), "a(1)\n");
    }

    #[test]
    fn tree_dump_renders_right_subtree_first() {
        let mut heap = PriorityHeap::new();
        heap.push(3, "c");
        heap.push(1, "a");
        heap.push(2, "b");

        assert_eq!(heap.tree_dump(), "   b(2)\nc(3)\n   a(1)\n");
    }

    #[test]
    fn tree_dump_indents_by_depth() {
        let mut heap = PriorityHeap::new();
        for (priority, data) in [(7, "a"), (6, "b"), (5, "c"), (4, "d"), (3, "e"), (2, "f"), (1, "g")] {
            heap.push(priority, data);
        }

        let expected = "      g(1)\n   c(5)\n      f(2)\na(7)\n      e(3)\n   b(6)\n      d(4)\n";
        assert_eq!(heap.tree_dump(), expected);
    }

    #[test]
    fn dumps_do_not_mutate() {
        let mut heap = PriorityHeap::new();
        heap.push(5, "x");
        heap.push(8, "y");

        let before: Vec<(i32, &str)> = heap.iter().map(|(p, d)| (*p, *d)).collect();
        let _ = heap.array_dump();
        let _ = heap.tree_dump();
        let after: Vec<(i32, &str)> = heap.iter().map(|(p, d)| (*p, *d)).collect();

        assert_eq!(before, after);
    }
}
