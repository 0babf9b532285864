use core::fmt;
use std::cmp::Ordering;

/// A binary min-heap ordered by a custom comparator.
pub struct Heap<T, F> {
    data: Vec<T>,
    cmp: F,
}
impl<T, F: Fn(&T, &T) -> Ordering> Heap<T, F> {
    pub fn new(cmp: F) -> Self {
        Heap {
            data: Vec::new(),
            cmp,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let ret = self.data.swap_remove(0);
        self.sift_down(0);
        Some(ret)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i], &self.data[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            if l >= len {
                break;
            }
            let child = if r < len && self.less(r, l) { r } else { l };
            if !self.less(child, i) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pops_in_order() {
        let mut heap = Heap::new(|a: &f64, b: &f64| a.total_cmp(b));
        assert_eq!(heap.pop(), None);
        for x in [3.5, -2.0, 1.0, 4.0, 1.0] {
            heap.push(x);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&-2.0));
        assert_eq!(heap.pop(), Some(-2.0));
        assert_eq!(heap.pop(), Some(1.0));
        assert_eq!(heap.pop(), Some(1.0));
        assert_eq!(heap.pop(), Some(3.5));
        assert_eq!(heap.pop(), Some(4.0));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    proptest! {
        #[test]
        fn always_sort(mut items: Vec<(i16, u16)>) {
            let mut heap = Heap::new(<(i16, u16)>::cmp);

            for item in items.iter().copied() {
                heap.push(item);
            }

            let mut heap_order = vec![];
            while let Some(item) = heap.pop() {
                heap_order.push(item);
            }

            items.sort();

            prop_assert_eq!(items, heap_order);
        }
    }
}
