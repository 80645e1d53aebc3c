//! [`Slots`] owns `CAP` possibly-uninitialized element slots and nothing else.
//!
//! It does not know which slots are live; the owning
//! [`InplaceVec`](crate::InplaceVec) tracks that with its length. Every
//! method that reads, writes or drops a slot lists in `# Safety` which slots
//! the caller vouches for.

use core::{
    mem::{self, MaybeUninit},
    ops::Range,
    ptr, slice,
};

/// Inline storage for up to `CAP` values of `T`.
pub(crate) struct Slots<T, const CAP: usize> {
    buf: [MaybeUninit<T>; CAP],
}

impl<T, const CAP: usize> Slots<T, CAP> {
    /// Creates storage with every slot vacant.
    #[inline]
    pub(crate) const fn vacant() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; CAP],
        }
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    #[inline]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    /// Views slots `[0, len)` as a slice.
    ///
    /// # Safety
    ///
    /// `len <= CAP` and slots `[0, len)` are live.
    #[inline]
    pub(crate) const unsafe fn live(&self, len: usize) -> &[T] {
        // SAFETY: caller guarantees the first `len` slots are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// Views slots `[0, len)` as a mutable slice.
    ///
    /// # Safety
    ///
    /// `len <= CAP` and slots `[0, len)` are live.
    #[inline]
    pub(crate) const unsafe fn live_mut(&mut self, len: usize) -> &mut [T] {
        // SAFETY: caller guarantees the first `len` slots are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Constructs `value` in slot `index` and returns a reference to it.
    ///
    /// # Safety
    ///
    /// `index < CAP` and slot `index` is vacant. A live value in the slot
    /// would be overwritten without being dropped.
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index < CAP, "slot index out of bounds");
        // SAFETY: caller guarantees index < CAP
        let slot = unsafe { self.buf.get_unchecked_mut(index) };
        slot.write(value)
    }

    /// Moves the value out of slot `index`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// `index < CAP` and slot `index` is live.
    #[inline]
    pub(crate) unsafe fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < CAP, "slot index out of bounds");
        // SAFETY: caller guarantees index < CAP
        let slot = unsafe { self.buf.get_unchecked(index) };
        // SAFETY: caller guarantees the slot is live; ownership moves to the caller
        unsafe { slot.assume_init_read() }
    }

    /// Drops the value in slot `index` in place.
    ///
    /// # Safety
    ///
    /// `index < CAP` and slot `index` is live. The slot is vacant afterwards.
    #[inline]
    pub(crate) unsafe fn destroy_at(&mut self, index: usize) {
        // SAFETY: forwarded caller guarantees
        unsafe { self.destroy_range(index..index + 1) };
    }

    /// Drops the values in `range` in increasing index order.
    ///
    /// Element types without drop glue skip the work entirely. If one
    /// destructor panics the remaining ones still run.
    ///
    /// # Safety
    ///
    /// `range.start <= range.end <= CAP` and every slot in `range` is live.
    /// All of them are vacant afterwards.
    #[inline]
    pub(crate) unsafe fn destroy_range(&mut self, range: Range<usize>) {
        debug_assert!(
            range.start <= range.end && range.end <= CAP,
            "slot range out of bounds"
        );
        if !mem::needs_drop::<T>() {
            return;
        }
        // SAFETY: caller guarantees range.start <= CAP
        let first = unsafe { self.as_mut_ptr().add(range.start) };
        let live = ptr::slice_from_raw_parts_mut(first, range.end - range.start);
        // SAFETY: caller guarantees every slot in the range is initialized
        unsafe { ptr::drop_in_place(live) };
    }

    /// Bitwise-moves `count` live slots starting at `src` so they start at
    /// `dst`. The ranges may overlap.
    ///
    /// # Safety
    ///
    /// `src + count <= CAP`, `dst + count <= CAP` and slots
    /// `[src, src + count)` are live. Afterwards `[dst, dst + count)` holds
    /// those values and the part of the source range outside of it is vacant.
    #[inline]
    pub(crate) unsafe fn relocate(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(
            src + count <= CAP && dst + count <= CAP,
            "slot range out of bounds"
        );
        let base = self.as_mut_ptr();
        // SAFETY: caller guarantees src + count <= CAP
        let from = unsafe { base.add(src) };
        // SAFETY: caller guarantees dst + count <= CAP
        let to = unsafe { base.add(dst) };
        // SAFETY: both ranges lie inside `buf`; `ptr::copy` allows overlap
        unsafe { ptr::copy(from, to, count) };
    }
}

#[cfg(test)]
mod tests {
    use super::Slots;
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};

    struct DropCounter(Arc<AtomicUsize>);
    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn construct_take_and_destroy() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut slots = Slots::<DropCounter, 4>::vacant();

        // SAFETY: slots 0..3 are vacant and in bounds
        unsafe {
            slots.construct_at(0, DropCounter(Arc::clone(&counter)));
            slots.construct_at(1, DropCounter(Arc::clone(&counter)));
            slots.construct_at(2, DropCounter(Arc::clone(&counter)));
        }

        // SAFETY: slot 1 is live
        let taken = unsafe { slots.take_at(1) };
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        drop(taken);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // SAFETY: slot 0 is live
        unsafe { slots.destroy_at(0) };
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        // SAFETY: slot 2 is live
        unsafe { slots.destroy_range(2..3) };
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn relocate_overlapping_runs() {
        let mut slots = Slots::<u32, 6>::vacant();
        for i in 0..4 {
            // SAFETY: slots 0..4 are vacant and in bounds
            unsafe { slots.construct_at(i, u32::try_from(i).unwrap() + 10) };
        }

        // shift [1, 4) up by two: [10, _, _, 11, 12, 13]
        // SAFETY: 1 + 3 <= 6 and 3 + 3 <= 6; slots 1..4 are live
        unsafe { slots.relocate(1, 3, 3) };
        // SAFETY: slots 1 and 2 are vacant now
        unsafe {
            slots.construct_at(1, 1);
            slots.construct_at(2, 2);
        }
        // SAFETY: slots 0..6 are live
        assert_eq!(unsafe { slots.live(6) }, &[10, 1, 2, 11, 12, 13]);

        // shift [3, 6) down by two over the slots taken out
        // SAFETY: slots 1 and 2 are live
        let (a, b) = unsafe { (slots.take_at(1), slots.take_at(2)) };
        assert_eq!((a, b), (1, 2));
        // SAFETY: 3 + 3 <= 6 and 1 + 3 <= 6; slots 3..6 are live
        unsafe { slots.relocate(3, 1, 3) };
        // SAFETY: slots 0..4 are live
        assert_eq!(unsafe { slots.live(4) }, &[10, 11, 12, 13]);
    }
}
