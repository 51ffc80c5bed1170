//! Strongly typed positions in the node and link lists.
//!
//! The target document identifies nodes and fibres only by their position in
//! the extracted lists.  Internally positions are 0-based (`.index()`); the
//! document uses 1-based ids (`.ordinal()`).

use std::fmt;

/// Generate a typed position wrapper around a primitive integer.
macro_rules! typed_index {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// 1-based id as written into the MatPlanWDM document.
            #[inline(always)]
            pub fn ordinal(self) -> u64 {
                self.0 as u64 + 1
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_index! {
    /// Position of a node in the extracted node list.
    pub struct NodeIndex(u32);
}

typed_index! {
    /// Position of a link in the extracted link list.
    pub struct LinkIndex(u32);
}
