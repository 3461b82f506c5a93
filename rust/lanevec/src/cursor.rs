//! Operations shared by [`ElementIter`](crate::ElementIter) and
//! [`LaneIter`](crate::LaneIter).
//!
//! Both cursors are a `(base, offset)` pair over storage they do not own. The
//! position arithmetic and comparisons are always safe; dereferencing is
//! `unsafe` because the cursors carry no bounds.

/// Implements the random-access cursor surface for `$cursor<'a, T, L>`,
/// whose `base` field points at values of type `$item` (either `T` or `L`).
macro_rules! impl_cursor {
    ($cursor:ident, $item:ident) => {
        impl<'a, T, L> $cursor<'a, T, L> {
            #[inline(always)]
            pub(crate) fn from_raw(base: *mut $item, offset: Offset) -> Self {
                $cursor {
                    base,
                    offset,
                    _marker: PhantomData,
                }
            }

            /// Position of the cursor relative to the start of the storage.
            #[inline(always)]
            pub fn offset(&self) -> Offset {
                self.offset
            }

            /// Returns `true` for a default-constructed cursor.
            #[inline(always)]
            pub fn is_null(&self) -> bool {
                self.base.is_null()
            }

            /// Address of the current position.
            ///
            /// Computing the address is always safe; dereferencing it carries the
            /// same obligations as [`read`](Self::read) and [`write`](Self::write).
            #[inline(always)]
            pub fn as_ptr(&self) -> *mut $item {
                self.base.wrapping_offset(self.offset)
            }

            /// Moves to the next position and returns the advanced cursor.
            #[inline(always)]
            pub fn inc(&mut self) -> &mut Self {
                self.offset += 1;
                self
            }

            /// Moves to the next position and returns the cursor as it was
            /// before the move.
            #[inline(always)]
            pub fn post_inc(&mut self) -> Self {
                let prev = *self;
                self.offset += 1;
                prev
            }

            /// Moves to the previous position and returns the moved cursor.
            #[inline(always)]
            pub fn dec(&mut self) -> &mut Self {
                self.offset -= 1;
                self
            }

            /// Moves to the previous position and returns the cursor as it was
            /// before the move.
            #[inline(always)]
            pub fn post_dec(&mut self) -> Self {
                let prev = *self;
                self.offset -= 1;
                prev
            }

            /// Reads the value at the current position.
            ///
            /// # Safety
            ///
            /// The cursor must have been obtained from a container that is still
            /// alive, and the position must lie within that container's storage.
            #[inline(always)]
            pub unsafe fn read(&self) -> $item
            where
                $item: Copy,
            {
                unsafe { self.base.offset(self.offset).read() }
            }

            /// Writes `value` at the current position.
            ///
            /// # Safety
            ///
            /// Same as [`read`](Self::read).
            #[inline(always)]
            pub unsafe fn write(&self, value: $item)
            where
                $item: Copy,
            {
                unsafe { self.base.offset(self.offset).write(value) }
            }

            /// Reads the value `n` positions away from the cursor.
            ///
            /// # Safety
            ///
            /// Same as [`read`](Self::read), for the position `offset() + n`.
            #[inline(always)]
            pub unsafe fn read_at(&self, n: Offset) -> $item
            where
                $item: Copy,
            {
                unsafe { self.base.offset(self.offset + n).read() }
            }

            /// Writes `value` `n` positions away from the cursor.
            ///
            /// # Safety
            ///
            /// Same as [`read`](Self::read), for the position `offset() + n`.
            #[inline(always)]
            pub unsafe fn write_at(&self, n: Offset, value: $item)
            where
                $item: Copy,
            {
                unsafe { self.base.offset(self.offset + n).write(value) }
            }
        }

        impl<'a, T, L> Clone for $cursor<'a, T, L> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<'a, T, L> Copy for $cursor<'a, T, L> {}

        impl<'a, T, L> Default for $cursor<'a, T, L> {
            fn default() -> Self {
                Self::from_raw(std::ptr::null_mut(), 0)
            }
        }

        impl<'a, T, L> PartialEq for $cursor<'a, T, L> {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                self.base == other.base && self.offset == other.offset
            }
        }

        impl<'a, T, L> Eq for $cursor<'a, T, L> {}

        impl<'a, T, L> PartialOrd for $cursor<'a, T, L> {
            #[inline(always)]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        /// Cursors order by the address they point at. The comparison is only
        /// meaningful between cursors over the same storage.
        impl<'a, T, L> Ord for $cursor<'a, T, L> {
            #[inline(always)]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                (self.as_ptr() as usize, self.base as usize)
                    .cmp(&(other.as_ptr() as usize, other.base as usize))
            }
        }

        impl<'a, T, L> std::ops::AddAssign<Offset> for $cursor<'a, T, L> {
            #[inline(always)]
            fn add_assign(&mut self, n: Offset) {
                self.offset += n;
            }
        }

        impl<'a, T, L> std::ops::SubAssign<Offset> for $cursor<'a, T, L> {
            #[inline(always)]
            fn sub_assign(&mut self, n: Offset) {
                self.offset -= n;
            }
        }

        impl<'a, T, L> std::ops::Add<Offset> for $cursor<'a, T, L> {
            type Output = Self;

            #[inline(always)]
            fn add(mut self, n: Offset) -> Self {
                self += n;
                self
            }
        }

        impl<'a, T, L> std::ops::Add<$cursor<'a, T, L>> for Offset {
            type Output = $cursor<'a, T, L>;

            #[inline(always)]
            fn add(self, cursor: $cursor<'a, T, L>) -> $cursor<'a, T, L> {
                cursor + self
            }
        }

        impl<'a, T, L> std::ops::Sub<Offset> for $cursor<'a, T, L> {
            type Output = Self;

            #[inline(always)]
            fn sub(mut self, n: Offset) -> Self {
                self -= n;
                self
            }
        }

        /// Distance between two cursors over the same storage.
        impl<'a, T, L> std::ops::Sub for $cursor<'a, T, L> {
            type Output = Offset;

            #[inline(always)]
            fn sub(self, other: Self) -> Offset {
                self.offset - other.offset
            }
        }

        impl<'a, T, L> std::fmt::Debug for $cursor<'a, T, L> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("base", &self.base)
                    .field("offset", &self.offset)
                    .finish()
            }
        }
    };
}

pub(crate) use impl_cursor;
