// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

/// Represents a grapheme segment index (offset) inside of [`super::GraphemeText`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegIndex(pub usize);

pub fn seg_index(arg_seg_index: impl Into<SegIndex>) -> SegIndex { arg_seg_index.into() }

mod seg_index_impl_block {
    use super::{Deref, DerefMut, SegIndex, SegWidth, seg_width};

    impl SegIndex {
        /// Converts the segment index to a width, by adding 1.
        #[must_use]
        pub fn convert_to_seg_width(&self) -> SegWidth { seg_width(self.0 + 1) }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for SegIndex {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for SegIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<usize> for SegIndex {
        fn from(it: usize) -> Self { Self(it) }
    }
}

/// Represents a count of the number of grapheme segments inside of
/// [`super::GraphemeText`]. The width is max index (zero based) + 1.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegWidth(pub usize);

pub fn seg_width(arg_seg_width: impl Into<SegWidth>) -> SegWidth { arg_seg_width.into() }

mod seg_width_impl_block {
    use super::{Deref, DerefMut, SegIndex, SegWidth, seg_index};

    impl SegWidth {
        /// Converts the width to a segment index, by subtracting 1. Returns [None] for a
        /// width of 0, since an empty text has no valid segment index.
        #[must_use]
        pub fn convert_to_seg_index(&self) -> Option<SegIndex> {
            self.0.checked_sub(1).map(seg_index)
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for SegWidth {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for SegWidth {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<usize> for SegWidth {
        fn from(it: usize) -> Self { Self(it) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seg_index_conversions() {
        let index = seg_index(0);
        let width = index.convert_to_seg_width();
        assert_eq!(width, seg_width(1));
        assert_eq!(width.convert_to_seg_index(), Some(seg_index(0)));
    }

    #[test]
    fn seg_width_zero_has_no_index() {
        assert_eq!(seg_width(0).convert_to_seg_index(), None);
    }

    #[test]
    fn seg_index_as_usize() {
        assert_eq!(seg_index(7).as_usize(), 7);
        assert_eq!(*seg_width(3), 3);
    }
}
