use crate::internal::{define_capacity_variants, define_variants};
use crate::storage::Slots;
use crate::Error;

use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem,
    ops::{Bound, Deref, DerefMut, Index, IndexMut, RangeBounds},
    slice::{self, SliceIndex},
};

/// A vector with a fixed capacity whose elements are stored inline.
///
/// `CAP` is part of the type: the storage for `CAP` elements is embedded in
/// the value itself, so no heap allocation ever happens, and two vectors of
/// different capacities are different types. Comparing or assigning them is
/// rejected at compile time:
///
/// ```compile_fail
/// use inplace_vec::InplaceVec;
///
/// let a = InplaceVec::<i32, 4>::new();
/// let b = InplaceVec::<i32, 5>::new();
/// let _ = a == b;
/// ```
///
/// Slots `[0, len)` always hold initialized elements and slots `[len, CAP)`
/// never do. The vector dereferences to `[T]`, so every slice method is
/// available on the live elements.
pub struct InplaceVec<T, const CAP: usize> {
    /// Inline storage for up to `CAP` elements.
    slots: Slots<T, CAP>,

    /// The number of live elements at the front of `slots`.
    len: usize,
}

impl<T, const CAP: usize> InplaceVec<T, CAP> {
    /// The fixed capacity of this vector type.
    pub const CAPACITY: usize = CAP;

    /// Creates a new, empty [`InplaceVec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let vec = InplaceVec::<i32, 8>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 8);
    /// assert!(vec.is_empty());
    /// assert!(!vec.is_full());
    /// assert_eq!(vec.as_slice(), &[]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Slots::vacant(),
            len: 0,
        }
    }

    /// Creates a vector holding `len` default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `len > CAP`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let vec = InplaceVec::<i32, 4>::with_default(3)?;
    /// assert_eq!(vec.as_slice(), &[0, 0, 0]);
    ///
    /// assert_eq!(InplaceVec::<i32, 2>::with_default(3), Err(Error::CapacityExceeded));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn with_default(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut vec = Self::new();
        vec.resize_default(len)?;
        Ok(vec)
    }

    /// Creates a vector holding `len` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `len > CAP`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let vec = InplaceVec::<i32, 4>::from_elem(3, 42).unwrap();
    /// assert_eq!(vec.as_slice(), &[42, 42, 42]);
    /// ```
    #[inline]
    pub fn from_elem(len: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut vec = Self::new();
        vec.resize(len, value)?;
        Ok(vec)
    }

    /// Creates a vector from the elements of `iter`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `iter` yields more than `CAP`
    /// elements. No partially filled vector escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let vec = InplaceVec::<i32, 4>::from_range([1, 2, 3])?;
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    ///
    /// assert_eq!(InplaceVec::<i32, 2>::from_range([1, 2, 3]), Err(Error::CapacityExceeded));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn from_range<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut vec = Self::new();
        vec.append_range(iter)?;
        Ok(vec)
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is valid for reads of `self.len()` elements and stays
    /// valid until the vector is moved or mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let vec = InplaceVec::<i32, 4>::from_range([1, 2, 3]).unwrap();
    /// let ptr = vec.as_ptr();
    ///
    /// // SAFETY: index 2 is within the live range (len = 3)
    /// let third = unsafe { ptr.add(2).read() };
    /// assert_eq!(third, 3);
    /// ```
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Returns a mutable raw pointer to the vector's buffer.
    ///
    /// Writing past `len()` without a matching [`Self::set_len`], reading
    /// slots at or past `len()`, or overwriting a live element without
    /// dropping it are all the caller's responsibility. Prefer
    /// [`Self::as_mut_slice`].
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr()
    }

    /// Forces the length of the vector.
    ///
    /// # Safety
    ///
    /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
    /// - `new_len > CAP`
    /// - slots `[0, new_len)` are not all initialized.
    ///
    /// Elements in `[new_len, len)` are not dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut vec = InplaceVec::<i32, 8>::new();
    /// let ptr = vec.as_mut_ptr();
    ///
    /// // SAFETY: slot 0 is in bounds (capacity = 8)
    /// unsafe { ptr.write(10) };
    /// // SAFETY: slot 1 is in bounds (capacity = 8)
    /// unsafe { ptr.add(1).write(20) };
    ///
    /// // SAFETY: the first two slots are initialized
    /// unsafe { vec.set_len(2) };
    /// assert_eq!(vec.as_slice(), &[10, 20]);
    /// ```
    #[inline]
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= CAP, "buffer capacity exceeded");
        self.len = new_len;
    }

    // push_back
    define_capacity_variants! {
        fn push(self: &mut Self, value: T) -> &mut T,

        checked_brief: "Appends a value to the back of the vector and returns a reference to it",
        try_brief: "Attempts to append a value to the back of the vector and returns a reference to it; the value is dropped if there is no room",
        unchecked_brief_suffix: "without capacity checking",
        preconditions: {},
        capacity_exceeded: self.is_full(),
        unchecked_fn: push_unchecked,
        try_fn: try_push,
        body: {
            let index = self.len;
            // SAFETY: caller guarantees index < CAP; slots at or past `len` are vacant
            let slot = unsafe { self.slots.construct_at(index, value) };
            self.len = index + 1;
            slot
        },
        examples: {
            checked: {
                /// ```
                /// use inplace_vec::{Error, InplaceVec};
                ///
                /// let mut vec = InplaceVec::<char, 2>::new();
                /// assert_eq!(*vec.push('a')?, 'a');
                /// *vec.push('b')? = 'c';
                ///
                /// assert_eq!(vec.push('d'), Err(Error::CapacityExceeded));
                /// assert_eq!(vec.as_slice(), &['a', 'c']);
                /// # Ok::<(), Error>(())
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 2>::new();
                /// assert_eq!(vec.try_push(1), Some(&mut 1));
                /// assert!(vec.try_push(2).is_some());
                /// assert!(vec.try_push(3).is_none());
                ///
                /// assert_eq!(vec.as_slice(), &[1, 2]);
                /// ```
            }
        }
    }

    // emplace_back
    define_capacity_variants! {
        fn push_with<F>(self: &mut Self, f: F) -> &mut T,
        where_clause: { F: FnOnce() -> T }

        checked_brief: "Constructs a value with `f` at the back of the vector and returns a reference to it; `f` only runs once room is confirmed",
        try_brief: "Attempts to construct a value with `f` at the back of the vector; `f` only runs once room is confirmed",
        unchecked_brief_suffix: "without capacity checking",
        preconditions: {},
        capacity_exceeded: self.is_full(),
        unchecked_fn: push_with_unchecked,
        try_fn: try_push_with,
        body: {
            let value = f();
            // SAFETY: forwarded caller guarantee that the vector is not full
            unsafe { self.push_unchecked(value) }
        },
        examples: {
            checked: {
                /// ```
                /// use inplace_vec::{Error, InplaceVec};
                ///
                /// let mut vec = InplaceVec::<String, 1>::new();
                /// vec.push_with(|| "built in place".to_owned())?;
                ///
                /// let mut called = false;
                /// assert_eq!(
                ///     vec.push_with(|| { called = true; String::new() }),
                ///     Err(Error::CapacityExceeded),
                /// );
                /// assert!(!called);
                /// # Ok::<(), Error>(())
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<char, 1>::new();
                /// assert_eq!(vec.try_push_with(|| 'a'), Some(&mut 'a'));
                /// assert_eq!(vec.try_push_with(|| 'b'), None);
                /// ```
            }
        }
    }

    // insert
    define_capacity_variants! {
        fn insert(self: &mut Self, index: usize, value: T) -> &mut T,

        checked_brief: "Inserts a value at position `index`, shifting all elements after it towards the back, and returns a reference to it",
        try_brief: "Attempts to insert a value at position `index`, shifting all elements after it towards the back",
        unchecked_brief_suffix: "without bound or capacity checking",
        preconditions: {
            index > self.len => "insertion index out of bounds",
        },
        capacity_exceeded: self.is_full(),
        unchecked_fn: insert_unchecked,
        try_fn: try_insert,
        body: {
            let len = self.len;
            // SAFETY: caller guarantees index <= len < CAP, so the shifted run ends at len + 1 <= CAP
            unsafe { self.slots.relocate(index, index + 1, len - index) };
            // SAFETY: the shift above vacated slot `index`
            let slot = unsafe { self.slots.construct_at(index, value) };
            self.len = len + 1;
            slot
        },
        examples: {
            checked: {
                /// ```
                /// use inplace_vec::{Error, InplaceVec};
                ///
                /// let mut vec = InplaceVec::<char, 3>::new();
                /// vec.insert(0, 'a')?;
                /// vec.insert(0, 'b')?;
                /// vec.insert(1, 'c')?;
                /// assert_eq!(vec.as_slice(), &['b', 'c', 'a']);
                ///
                /// assert_eq!(vec.insert(0, 'd'), Err(Error::CapacityExceeded));
                /// assert_eq!(vec.as_slice(), &['b', 'c', 'a']);
                /// # Ok::<(), Error>(())
                /// ```
                ///
                /// A panic if the index is out of bounds:
                ///
                /// ```should_panic
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 8>::new();
                /// vec.push(40).unwrap();
                ///
                /// // this will panic at runtime
                /// let _ = vec.insert(2, 10);
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 3>::from_range([10, 20]).unwrap();
                /// assert!(vec.try_insert(1, 15).is_some());
                /// assert!(vec.try_insert(3, 30).is_none());
                /// assert_eq!(vec.as_slice(), &[10, 15, 20]);
                /// ```
            }
        }
    }

    // emplace
    define_capacity_variants! {
        fn insert_with<F>(self: &mut Self, index: usize, f: F) -> &mut T,
        where_clause: { F: FnOnce() -> T }

        checked_brief: "Constructs a value with `f` at position `index`, shifting all elements after it towards the back; `f` only runs once room is confirmed",
        try_brief: "Attempts to construct a value with `f` at position `index`, shifting all elements after it towards the back",
        unchecked_brief_suffix: "without bound or capacity checking",
        preconditions: {
            index > self.len => "insertion index out of bounds",
        },
        capacity_exceeded: self.is_full(),
        unchecked_fn: insert_with_unchecked,
        try_fn: try_insert_with,
        body: {
            let value = f();
            // SAFETY: forwarded caller guarantees
            unsafe { self.insert_unchecked(index, value) }
        },
    }

    define_capacity_variants! {
        fn extend_from_slice(self: &mut Self, other: &[T]) -> (),
        where_clause: { T: Clone }

        checked_brief: "Clones and appends every element of `other`",
        try_brief: "Attempts to clone and append every element of `other`; nothing is appended if they do not all fit",
        unchecked_brief_suffix: "without capacity checking",
        preconditions: {},
        capacity_exceeded: other.len() > self.remaining_capacity(),
        unchecked_fn: extend_from_slice_unchecked,
        try_fn: try_extend_from_slice,
        body: {
            for item in other {
                // SAFETY: caller guarantees room for every element of `other`
                unsafe { self.push_unchecked(item.clone()) };
            }
        },
        examples: {
            checked: {
                /// ```
                /// use inplace_vec::{Error, InplaceVec};
                ///
                /// let mut vec = InplaceVec::<i32, 4>::new();
                /// vec.extend_from_slice(&[1, 2, 3])?;
                /// assert_eq!(vec.extend_from_slice(&[4, 5]), Err(Error::CapacityExceeded));
                /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
                /// # Ok::<(), Error>(())
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::new();
                /// assert!(vec.try_extend_from_slice(&[1, 2, 3]).is_some());
                /// assert!(vec.try_extend_from_slice(&[4, 5]).is_none());
                /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
                /// ```
            }
        }
    }

    // pop_back
    define_variants! {
        fn pop(self: &mut Self) -> T,

        normal_brief: "Removes and returns the last element",
        try_brief: "Attempts to remove and return the last element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => "vector is empty",
        },
        unchecked_fn: pop_unchecked,
        try_fn: try_pop,
        body: {
            self.len -= 1;
            // SAFETY: slot `self.len` was the last live slot and is no longer counted
            unsafe { self.slots.take_at(self.len) }
        },
        examples: {
            normal: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::from_range([1, 2]).unwrap();
                /// assert_eq!(vec.pop(), 2);
                /// assert_eq!(vec.as_slice(), &[1]);
                /// ```
                ///
                /// A panic if the vector is empty:
                ///
                /// ```should_panic
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::new();
                /// vec.pop();
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::from_range([1]).unwrap();
                /// assert_eq!(vec.try_pop(), Some(1));
                /// assert_eq!(vec.try_pop(), None);
                /// ```
                ///
                /// The result must be used:
                ///
                /// ```compile_fail
                /// #![deny(unused_must_use)]
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::from_range([1]).unwrap();
                /// vec.try_pop();
                /// ```
            }
        }
    }

    define_variants! {
        fn remove(self: &mut Self, index: usize) -> T,

        normal_brief: "Removes and returns the element at `index`, shifting all elements after it towards the front",
        try_brief: "Attempts to remove and return the element at `index`, shifting all elements after it towards the front",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => "index out of bounds",
        },
        unchecked_fn: remove_unchecked,
        try_fn: try_remove,
        body: {
            let len = self.len;
            // SAFETY: caller guarantees index < len
            let value = unsafe { self.slots.take_at(index) };
            // SAFETY: slots (index, len) are live and move down into the vacated slot
            unsafe { self.slots.relocate(index + 1, index, len - index - 1) };
            self.len = len - 1;
            value
        },
        examples: {
            normal: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::from_range([1, 2, 3]).unwrap();
                /// assert_eq!(vec.remove(0), 1);
                /// assert_eq!(vec.as_slice(), &[2, 3]);
                /// ```
            }
            try: {
                /// ```
                /// use inplace_vec::InplaceVec;
                ///
                /// let mut vec = InplaceVec::<i32, 4>::from_range([1, 2, 3]).unwrap();
                /// assert_eq!(vec.try_remove(3), None);
                /// assert_eq!(vec.try_remove(1), Some(2));
                /// ```
            }
        }
    }

    define_variants! {
        fn swap_remove(self: &mut Self, index: usize) -> T,

        normal_brief: "Removes and returns the element at `index` **without** shifting, replacing it with the last element",
        try_brief: "Attempts to remove and return the element at `index` **without** shifting, replacing it with the last element",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => "index out of bounds",
        },
        unchecked_fn: swap_remove_unchecked,
        try_fn: try_swap_remove,
        body: {
            let last = self.len - 1;
            // SAFETY: caller guarantees index < len
            let value = unsafe { self.slots.take_at(index) };
            if index != last {
                // SAFETY: slot `last` is live and slot `index` was just vacated
                unsafe { self.slots.relocate(last, index, 1) };
            }
            self.len = last;
            value
        },
    }

    // index
    define_variants! {
        fn index(self: &Self, index: usize) -> &T,

        normal_brief: "Returns a reference to the element at `index`",
        try_brief: "Attempts to return a reference to the element at `index`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => "index out of bounds",
        },
        unchecked_fn: get_unchecked,
        try_fn: get,
        body: {
            // SAFETY: caller guarantees index < len
            unsafe { self.as_slice().get_unchecked(index) }
        },
    }

    // index_mut
    define_variants! {
        fn index_mut(self: &mut Self, index: usize) -> &mut T,

        normal_brief: "Returns a mutable reference to the element at `index`",
        try_brief: "Attempts to return a mutable reference to the element at `index`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => "index out of bounds",
        },
        unchecked_fn: get_unchecked_mut,
        try_fn: get_mut,
        body: {
            // SAFETY: caller guarantees index < len
            unsafe { self.as_mut_slice().get_unchecked_mut(index) }
        },
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfRange`] if `index >= len()`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] carrying the requested index and the current length.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let vec = InplaceVec::<i32, 5>::from_range([1, 2, 3]).unwrap();
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert_eq!(vec.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable counterpart of [`Self::at`].
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] carrying the requested index and the current length.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// - "vector is empty" if `self.is_empty()`
    #[must_use]
    #[inline]
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "vector is empty");
        // SAFETY: the vector is non-empty
        unsafe { self.get_unchecked(0) }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// - "vector is empty" if `self.is_empty()`
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "vector is empty");
        // SAFETY: the vector is non-empty
        unsafe { self.get_unchecked_mut(0) }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// - "vector is empty" if `self.is_empty()`
    #[must_use]
    #[inline]
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "vector is empty");
        // SAFETY: the vector is non-empty, so len - 1 is live
        unsafe { self.get_unchecked(self.len - 1) }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// - "vector is empty" if `self.is_empty()`
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "vector is empty");
        let last = self.len - 1;
        // SAFETY: the vector is non-empty, so `last` is live
        unsafe { self.get_unchecked_mut(last) }
    }

    /// Appends every element of `iter` to the back of the vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `iter` yields more elements than
    /// [`Self::remaining_capacity`]. Elements appended before the overflow was
    /// detected are dropped again, so the vector is left as it was.
    ///
    /// When the iterator's lower size bound does not reveal the overflow, it is
    /// found by pulling one element past the vector's room; that element is
    /// dropped too. A caller passing `&mut iter` therefore loses everything up
    /// to and including it.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut vec = InplaceVec::<i32, 4>::new();
    /// vec.append_range([1, 2, 3])?;
    /// assert_eq!(vec.append_range([4, 5]), Err(Error::CapacityExceeded));
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn append_range<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        if iter.size_hint().0 > self.remaining_capacity() {
            return Err(Error::CapacityExceeded);
        }

        let len = self.len;
        let mut rest = self.try_append_range(iter);
        if rest.size_hint().0 > 0 || rest.next().is_some() {
            self.truncate(len);
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }

    /// Appends elements of `iter` until the vector is full or `iter` runs out,
    /// and returns what is left of `iter`.
    ///
    /// No element is pulled from `iter` unless there is room for it, so the
    /// returned iterator starts exactly at the first element that was not
    /// appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut vec = InplaceVec::<i32, 4>::from_range([1, 2, 3]).unwrap();
    /// let mut rest = vec.try_append_range([4, 5, 6]);
    ///
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(rest.next(), Some(5));
    /// ```
    #[must_use = "the returned iterator holds the elements that did not fit"]
    #[inline]
    pub fn try_append_range<I>(&mut self, iter: I) -> I::IntoIter
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        while !self.is_full() {
            let Some(value) = iter.next() else {
                break;
            };
            // SAFETY: the loop condition guarantees a vacant slot
            unsafe { self.push_unchecked(value) };
        }
        iter
    }

    /// Inserts every element of `iter` at position `index`, keeping their
    /// order, and returns the inserted elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the elements do not all fit; the
    /// vector is left as it was.
    ///
    /// # Panics
    ///
    /// - "insertion index out of bounds" if `index > self.len()`
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut vec = InplaceVec::<i32, 6>::from_range([1, 2, 3]).unwrap();
    /// let inserted = vec.insert_range(1, [7, 8]).unwrap();
    /// assert_eq!(inserted, &[7, 8]);
    /// assert_eq!(vec.as_slice(), &[1, 7, 8, 2, 3]);
    /// ```
    #[inline]
    pub fn insert_range<I>(&mut self, index: usize, iter: I) -> Result<&mut [T], Error>
    where
        I: IntoIterator<Item = T>,
    {
        assert!(index <= self.len, "insertion index out of bounds");
        let len = self.len;
        self.append_range(iter)?;
        Ok(self.rotate_appended_to(index, len))
    }

    /// Inserts clones of every element of `other` at position `index` and
    /// returns the inserted elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `other` does not fit; the vector
    /// is left as it was.
    ///
    /// # Panics
    ///
    /// - "insertion index out of bounds" if `index > self.len()`
    #[inline]
    pub fn insert_from_slice(&mut self, index: usize, other: &[T]) -> Result<&mut [T], Error>
    where
        T: Clone,
    {
        assert!(index <= self.len, "insertion index out of bounds");
        let len = self.len;
        self.extend_from_slice(other)?;
        Ok(self.rotate_appended_to(index, len))
    }

    /// Inserts `count` clones of `value` at position `index` and returns the
    /// inserted elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > self.remaining_capacity()`;
    /// the vector is left as it was.
    ///
    /// # Panics
    ///
    /// - "insertion index out of bounds" if `index > self.len()`
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut vec = InplaceVec::<char, 4>::from_range(['a', 'b']).unwrap();
    /// vec.insert_elem(1, 2, 'x')?;
    /// assert_eq!(vec.as_slice(), &['a', 'x', 'x', 'b']);
    /// assert_eq!(vec.insert_elem(0, 1, 'y'), Err(Error::CapacityExceeded));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn insert_elem(&mut self, index: usize, count: usize, value: T) -> Result<&mut [T], Error>
    where
        T: Clone,
    {
        assert!(index <= self.len, "insertion index out of bounds");
        if count > self.remaining_capacity() {
            return Err(Error::CapacityExceeded);
        }
        let len = self.len;
        // SAFETY: checked above that `count` elements fit
        unsafe { self.extend_with_unchecked(count, value) };
        Ok(self.rotate_appended_to(index, len))
    }

    /// Moves the elements appended after `old_len` so that they start at
    /// `index`, and returns them.
    fn rotate_appended_to(&mut self, index: usize, old_len: usize) -> &mut [T] {
        let inserted = self.len - old_len;
        let tail = &mut self.as_mut_slice()[index..];
        tail.rotate_left(old_len - index);
        &mut tail[..inserted]
    }

    /// Appends `n` clones of `value`, moving `value` itself into the last slot.
    ///
    /// # Safety
    ///
    /// `n <= self.remaining_capacity()`
    unsafe fn extend_with_unchecked(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        if n == 0 {
            return;
        }
        for _ in 1..n {
            // SAFETY: caller guarantees room for `n` elements
            unsafe { self.push_unchecked(value.clone()) };
        }
        // SAFETY: caller guarantees room for `n` elements
        unsafe { self.push_unchecked(value) };
    }

    /// Replaces the contents of the vector with the elements of `iter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `iter` yields more than `CAP`
    /// elements; the vector keeps its previous contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut vec = InplaceVec::<i32, 3>::from_range([9]).unwrap();
    /// vec.assign([1, 2, 3])?;
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    ///
    /// assert_eq!(vec.assign([1, 2, 3, 4]), Err(Error::CapacityExceeded));
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn assign<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        *self = Self::from_range(iter)?;
        Ok(())
    }

    /// Replaces the contents of the vector with `count` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > CAP`; the vector keeps
    /// its previous contents.
    #[inline]
    pub fn assign_elem(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > CAP {
            return Err(Error::CapacityExceeded);
        }
        self.clear();
        // SAFETY: the vector is empty and count <= CAP
        unsafe { self.extend_with_unchecked(count, value) };
        Ok(())
    }

    /// Resizes the vector to `new_len`, appending clones of `value` or
    /// dropping elements from the back as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > CAP`; the vector is
    /// left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut vec = InplaceVec::<i32, 4>::from_range([1]).unwrap();
    /// vec.resize(3, 7)?;
    /// assert_eq!(vec.as_slice(), &[1, 7, 7]);
    /// vec.resize(1, 0)?;
    /// assert_eq!(vec.as_slice(), &[1]);
    /// assert_eq!(vec.resize(5, 0), Err(Error::CapacityExceeded));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > CAP {
            return Err(Error::CapacityExceeded);
        }
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            let extra = new_len - self.len;
            // SAFETY: new_len <= CAP, so `extra` elements fit
            unsafe { self.extend_with_unchecked(extra, value) };
        }
        Ok(())
    }

    /// Resizes the vector to `new_len`, appending values produced by `f` or
    /// dropping elements from the back as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > CAP`; the vector is
    /// left as it was and `f` is never called.
    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len > CAP {
            return Err(Error::CapacityExceeded);
        }
        if new_len <= self.len {
            self.truncate(new_len);
        }
        while self.len < new_len {
            let value = f();
            // SAFETY: len < new_len <= CAP
            unsafe { self.push_unchecked(value) };
        }
        Ok(())
    }

    /// Resizes the vector to `new_len`, appending default values or dropping
    /// elements from the back as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > CAP`; the vector is
    /// left as it was.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Removes the elements in `range`, shifting the elements after it towards
    /// the front, and returns the index now occupied by the first element that
    /// followed the range (`len()` if the range reached the end).
    ///
    /// An empty range removes nothing and returns its start.
    ///
    /// # Panics
    ///
    /// If the range starts after it ends or ends after `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut vec = InplaceVec::<char, 5>::from_range(['a', 'b', 'c', 'd', 'e']).unwrap();
    /// let next = vec.erase(1..3);
    /// assert_eq!(vec.as_slice(), &['a', 'd', 'e']);
    /// assert_eq!(vec[next], 'd');
    ///
    /// assert_eq!(vec.erase(2..), vec.len());
    /// assert_eq!(vec.as_slice(), &['a', 'd']);
    /// ```
    #[inline]
    pub fn erase<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };
        assert!(start <= end, "erase range starts after it ends");
        assert!(end <= len, "erase range out of bounds");

        // A panicking destructor leaks the tail instead of exposing dropped slots.
        self.len = start;
        // SAFETY: slots [start, end) are live and no longer counted
        unsafe { self.slots.destroy_range(start..end) };
        // SAFETY: slots [end, len) are live and move down over the destroyed run
        unsafe { self.slots.relocate(end, start, len - end) };
        self.len = len - (end - start);
        start
    }

    /// Retains only the elements for which `f` returns `true`, preserving
    /// their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut vec = InplaceVec::<i32, 8>::from_range(1..=6).unwrap();
    /// vec.retain(|x| *x % 2 == 0);
    /// assert_eq!(vec.as_slice(), &[2, 4, 6]);
    /// ```
    #[inline]
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let len = self.len;
        // Everything is leaked rather than double-dropped if `f` or a destructor panics.
        self.len = 0;

        let mut kept = 0;
        for i in 0..len {
            // SAFETY: i < len <= CAP
            let ptr = unsafe { self.slots.as_mut_ptr().add(i) };
            // SAFETY: slot i is live and has not been touched yet
            let elem = unsafe { &mut *ptr };
            if f(elem) {
                if kept != i {
                    // SAFETY: slot i is live; slot `kept` < i was vacated earlier
                    unsafe { self.slots.relocate(i, kept, 1) };
                }
                kept += 1;
            } else {
                // SAFETY: slot i is live and is not kept
                unsafe { self.slots.destroy_at(i) };
            }
        }

        self.len = kept;
    }

    /// Shortens the vector to `len` elements, dropping the rest in order.
    /// Does nothing if `len >= self.len()`.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }
        self.len = len;
        // SAFETY: slots [len, old_len) are live and no longer counted
        unsafe { self.slots.destroy_range(len..old_len) };
    }

    /// Drops every element. The capacity is unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    ///
    /// let mut a = InplaceVec::<i32, 3>::from_range([1, 2, 3]).unwrap();
    /// let mut b = InplaceVec::<i32, 3>::from_range([9]).unwrap();
    /// a.swap_with(&mut b);
    /// assert_eq!(a.as_slice(), &[9]);
    /// assert_eq!(b.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Checks that the vector could hold `n` elements in total.
    ///
    /// Storage is fixed, so this never changes the capacity and never fails
    /// while `n <= CAP`, whatever the current length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `n > CAP`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace_vec::{Error, InplaceVec};
    ///
    /// let mut vec = InplaceVec::<i32, 10>::from_range(0..4).unwrap();
    /// assert_eq!(vec.reserve(10), Ok(()));
    /// assert_eq!(vec.reserve(11), Err(Error::CapacityExceeded));
    /// ```
    #[allow(
        clippy::needless_pass_by_ref_mut,
        reason = "mirrors the signature of `Vec::reserve`"
    )]
    #[inline]
    pub const fn reserve(&mut self, n: usize) -> Result<(), Error> {
        if n > CAP {
            Err(Error::CapacityExceeded)
        } else {
            Ok(())
        }
    }

    /// Does nothing; storage is fixed.
    #[allow(
        clippy::needless_pass_by_ref_mut,
        reason = "mirrors the signature of `Vec::shrink_to_fit`"
    )]
    #[inline]
    pub const fn shrink_to_fit(&mut self) {}

    /// Returns the live elements as a slice.
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are live
        unsafe { self.slots.live(self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are live
        unsafe { self.slots.live_mut(self.len) }
    }

    /// Returns an iterator over the live elements; `.rev()` walks them back
    /// to front.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity, `CAP`.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Returns the largest length the vector can reach, `CAP`.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        CAP
    }

    /// Returns how many more elements fit.
    #[must_use]
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        CAP - self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the vector holds `CAP` elements.
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len >= CAP
    }
}

/// Removes every element equal to `value`, preserving the order of the rest,
/// and returns how many were removed.
///
/// # Examples
///
/// ```
/// use inplace_vec::InplaceVec;
///
/// let mut vec = InplaceVec::<i32, 5>::from_range([1, 3, 2, 3, 4]).unwrap();
/// assert_eq!(inplace_vec::erase(&mut vec, &3), 2);
/// assert_eq!(vec.as_slice(), &[1, 2, 4]);
/// ```
#[inline]
pub fn erase<T, const CAP: usize>(vec: &mut InplaceVec<T, CAP>, value: &T) -> usize
where
    T: PartialEq,
{
    erase_if(vec, |elem| elem == value)
}

/// Removes every element for which `pred` returns `true`, preserving the
/// order of the rest, and returns how many were removed.
///
/// # Examples
///
/// ```
/// use inplace_vec::InplaceVec;
///
/// let mut vec = InplaceVec::<i32, 10>::from_range(0..10).unwrap();
/// assert_eq!(inplace_vec::erase_if(&mut vec, |x| x % 2 == 0), 5);
/// assert_eq!(vec.as_slice(), &[1, 3, 5, 7, 9]);
/// ```
#[inline]
pub fn erase_if<T, const CAP: usize, F>(vec: &mut InplaceVec<T, CAP>, mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let before = vec.len();
    vec.retain(|elem| !pred(&*elem));
    before - vec.len()
}

impl<T, const CAP: usize> Default for InplaceVec<T, CAP> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAP: usize> Drop for InplaceVec<T, CAP> {
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'vec, T, const CAP: usize> IntoIterator for &'vec InplaceVec<T, CAP> {
    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, T, const CAP: usize> IntoIterator for &'vec mut InplaceVec<T, CAP> {
    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator that moves elements out of an [`InplaceVec`].
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T, const CAP: usize> {
    /// Index of the next element to yield from the front.
    start: usize,

    /// One past the index of the next element to yield from the back.
    end: usize,

    /// The vector being drained, with its length zeroed so that it never
    /// drops anything itself.
    v: InplaceVec<T, CAP>,
}

impl<T, const CAP: usize> IntoIter<T, CAP> {
    /// Returns the elements not yet yielded.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: start <= end <= CAP
        let first = unsafe { self.v.as_ptr().add(self.start) };
        // SAFETY: slots [start, end) are live
        unsafe { slice::from_raw_parts(first, self.end - self.start) }
    }
}

impl<T, const CAP: usize> Iterator for IntoIter<T, CAP> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.start < self.end).then(|| {
            let index = self.start;
            self.start += 1;
            // SAFETY: index was in [start, end), which are live slots
            unsafe { self.v.slots.take_at(index) }
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, const CAP: usize> DoubleEndedIterator for IntoIter<T, CAP> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        (self.start < self.end).then(|| {
            self.end -= 1;
            // SAFETY: end was in [start, end), which are live slots
            unsafe { self.v.slots.take_at(self.end) }
        })
    }
}

impl<T, const CAP: usize> ExactSizeIterator for IntoIter<T, CAP> {}

impl<T, const CAP: usize> FusedIterator for IntoIter<T, CAP> {}

impl<T, const CAP: usize> Drop for IntoIter<T, CAP> {
    #[inline]
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        // SAFETY: slots [start, end) were never yielded and are still live
        unsafe { self.v.slots.destroy_range(start..end) };
    }
}

impl<T: fmt::Debug, const CAP: usize> fmt::Debug for IntoIter<T, CAP> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const CAP: usize> IntoIterator for InplaceVec<T, CAP> {
    type Item = T;
    type IntoIter = IntoIter<T, CAP>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        self.len = 0;
        IntoIter {
            start: 0,
            end: len,
            v: self,
        }
    }
}

impl<T, const CAP: usize> Deref for InplaceVec<T, CAP> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const CAP: usize> DerefMut for InplaceVec<T, CAP> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const CAP: usize> AsRef<[T]> for InplaceVec<T, CAP> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const CAP: usize> AsMut<[T]> for InplaceVec<T, CAP> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const CAP: usize> Borrow<[T]> for InplaceVec<T, CAP> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const CAP: usize> BorrowMut<[T]> for InplaceVec<T, CAP> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: fmt::Debug, const CAP: usize> fmt::Debug for InplaceVec<T, CAP> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: PartialEq, const CAP: usize> PartialEq for InplaceVec<T, CAP> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, const CAP: usize> Eq for InplaceVec<T, CAP> {}

impl<T: PartialOrd, const CAP: usize> PartialOrd for InplaceVec<T, CAP> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord, const CAP: usize> Ord for InplaceVec<T, CAP> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash, const CAP: usize> Hash for InplaceVec<T, CAP> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Clone, const CAP: usize> Clone for InplaceVec<T, CAP> {
    #[inline]
    fn clone(&self) -> Self {
        let mut out = Self::new();
        // SAFETY: self.len <= CAP, so every clone fits
        unsafe { out.extend_from_slice_unchecked(self.as_slice()) };
        out
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.truncate(source.len);
        let common = self.len;
        self.as_mut_slice().clone_from_slice(&source.as_slice()[..common]);
        // SAFETY: source.len <= CAP, so the remaining clones fit
        unsafe { self.extend_from_slice_unchecked(&source.as_slice()[common..]) };
    }
}

impl<T: Clone, const CAP: usize> TryFrom<&[T]> for InplaceVec<T, CAP> {
    type Error = Error;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let mut vec = Self::new();
        vec.extend_from_slice(slice)?;
        Ok(vec)
    }
}

impl<T, const CAP: usize> From<[T; CAP]> for InplaceVec<T, CAP> {
    #[inline]
    fn from(array: [T; CAP]) -> Self {
        let mut vec = Self::new();
        for value in array {
            // SAFETY: the array holds exactly CAP elements
            unsafe { vec.push_unchecked(value) };
        }
        vec
    }
}

/// Collects at most `CAP` elements.
///
/// # Panics
///
/// If the iterator yields more than `CAP` elements. Use
/// [`InplaceVec::from_range`] to get an error instead.
impl<T, const CAP: usize> FromIterator<T> for InplaceVec<T, CAP> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

/// # Panics
///
/// If the vector fills up before the iterator is exhausted. Use
/// [`InplaceVec::append_range`] to get an error instead.
impl<T, const CAP: usize> Extend<T> for InplaceVec<T, CAP> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            assert!(!self.is_full(), "buffer capacity exceeded in extend");
            // SAFETY: just checked there is a vacant slot
            unsafe { self.push_unchecked(value) };
        }
    }
}

impl<T, I: SliceIndex<[T]>, const CAP: usize> Index<I> for InplaceVec<T, CAP> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, const CAP: usize> IndexMut<I> for InplaceVec<T, CAP> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T, const CAP: usize> From<InplaceVec<T, CAP>> for alloc::vec::Vec<T> {
    #[inline]
    fn from(vec: InplaceVec<T, CAP>) -> Self {
        vec.into_iter().collect()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T, const CAP: usize> TryFrom<alloc::vec::Vec<T>> for InplaceVec<T, CAP> {
    type Error = Error;

    #[inline]
    fn try_from(vec: alloc::vec::Vec<T>) -> Result<Self, Self::Error> {
        Self::from_range(vec)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<const CAP: usize> std::io::Write for InplaceVec<u8, CAP> {
    /// Appends as many bytes of `buf` as fit and returns how many that was.
    ///
    /// Returns `Ok(0)` once the vector is full, per the [`Write`](std::io::Write)
    /// contract.
    ///
    /// ```
    /// use inplace_vec::InplaceVec;
    /// use std::io::Write;
    ///
    /// let mut vec = InplaceVec::<u8, 4>::new();
    /// assert_eq!(vec.write(b"abcdef").unwrap(), 4);
    /// assert_eq!(vec.write(b"g").unwrap(), 0);
    /// assert_eq!(vec.as_slice(), b"abcd");
    /// ```
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let to_write = buf.len().min(self.remaining_capacity());
        // SAFETY: to_write <= remaining capacity
        unsafe { self.extend_from_slice_unchecked(&buf[..to_write]) };
        Ok(to_write)
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
