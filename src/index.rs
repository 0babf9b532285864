//! Typed handles into the arenas that back the sweep.
//!
//! Arcs, segments and events refer to each other a lot (an arc knows its neighbors, its bounding
//! segments and its pending circle event). They all live in append-only vectors and point at each
//! other through these handles, so nothing is ever freed while something may still refer to it.

macro_rules! impl_arena {
    ($vec_name:ident, $idx_name:ident, $dbg_prefix:expr) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $idx_name(u32);

        impl $idx_name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Debug for $idx_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_{}", $dbg_prefix, self.0)
            }
        }

        #[derive(Clone)]
        pub struct $vec_name<T> {
            inner: Vec<T>,
        }

        #[allow(dead_code)]
        impl<T> $vec_name<T> {
            pub fn new() -> Self {
                Self { inner: Vec::new() }
            }

            pub fn len(&self) -> usize {
                self.inner.len()
            }

            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// Adds a new element, returning its handle.
            pub fn push(&mut self, elt: T) -> $idx_name {
                self.inner.push(elt);
                $idx_name((self.inner.len() - 1) as u32)
            }

            /// Iterates in insertion order.
            pub fn iter(&self) -> impl Iterator<Item = ($idx_name, &T)> + '_ {
                self.inner
                    .iter()
                    .enumerate()
                    .map(|(idx, t)| ($idx_name(idx as u32), t))
            }

            pub fn values(&self) -> std::slice::Iter<'_, T> {
                self.inner.iter()
            }
        }

        impl<T> Default for $vec_name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> std::ops::Index<$idx_name> for $vec_name<T> {
            type Output = T;

            fn index(&self, index: $idx_name) -> &Self::Output {
                &self.inner[index.index()]
            }
        }

        impl<T> std::ops::IndexMut<$idx_name> for $vec_name<T> {
            fn index_mut(&mut self, index: $idx_name) -> &mut T {
                &mut self.inner[index.index()]
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $vec_name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }
    };
}

impl_arena!(ArcVec, ArcId, "arc");
impl_arena!(SegmentVec, SegmentId, "seg");
impl_arena!(EventVec, EventId, "ev");
