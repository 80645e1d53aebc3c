//! `inplace_vec`: a fixed-capacity vector with inline storage
//!
//! Provides [`InplaceVec`], a `Vec`-like sequence whose capacity is part of its
//! type and whose elements live directly inside the value. No heap allocation
//! ever happens, which makes it suitable for `no_std` environments, hot loops
//! and anywhere predictable memory usage matters.
//!
//! Every operation that can grow the vector comes in three tiers:
//!
//! - **checked** (`push`, `insert`, `append_range`, ...) returns
//!   [`Error::CapacityExceeded`] and leaves the vector untouched when there is
//!   no room;
//! - **fallible** (`try_push`, `try_insert`, `try_append_range`, ...) reports
//!   the lack of room through its return value;
//! - **unchecked** (`push_unchecked`, `insert_unchecked`, ...) is `unsafe` and
//!   assumes the caller already checked.
//!
//! ```
//! use inplace_vec::{Error, InplaceVec};
//!
//! let mut v = InplaceVec::<char, 3>::new();
//! v.push('a')?;
//! v.push('b')?;
//! assert!(v.try_push('c').is_some());
//!
//! assert_eq!(v.push('d'), Err(Error::CapacityExceeded));
//! assert_eq!(v.as_slice(), &['a', 'b', 'c']);
//! # Ok::<(), Error>(())
//! ```
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::multiple_unsafe_ops_per_block)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::std_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]
#![deny(clippy::missing_inline_in_public_items)]
#![deny(clippy::return_self_not_must_use)]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

/// Internal module that are not meant for users to use.
mod internal {
    /// Defines the panicking, `Option` returning and unchecked variants of an
    /// operation whose only failure modes are caller preconditions.
    macro_rules! define_variants {
    (
        $(#[$meta:meta])*
        fn $name:ident($self:ident : $self_ty:ty $(, $param:ident: $param_ty:ty)*) -> $ret:ty,

        normal_brief: $normal_brief:literal,
        try_brief: $try_brief:literal,
        unchecked_brief_suffix: $unchecked_brief_suffix:literal,
        ub_conditions: {
            $($ub_condition:expr => $error:literal),+ $(,)?
        },
        unchecked_fn: $unchecked_fn:ident,
        try_fn: $try_fn:ident,
        body: $body:tt,
        $(examples: {
            normal: { $($ex_normal:tt)* }
            try: { $($ex_try:tt)* }
        })?
    ) => {
        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ", ", $unchecked_brief_suffix, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the panicking version and [`Self::", stringify!($try_fn), "`] for the [`Option`] returning version.")]
        ///
        /// # Safety
        ///
        /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
        $( #[doc = concat!(" - `", stringify!($ub_condition), "`")] )+
        #[inline]
        pub unsafe fn $unchecked_fn($self: $self_ty $(, $param: $param_ty)*) -> $ret {
            $( debug_assert!(!($ub_condition), $error); )+
            $body
        }

        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($unchecked_fn), "`] for the unchecked version and [`Self::", stringify!($try_fn), "`] for the [`Option`] returning version.")]
        ///
        /// # Panics
        ///
        $( #[doc = concat!(" - \"", $error, "\" if `", stringify!($ub_condition), "`")] )+
        $(
            ///
            /// # Examples
            ///
            $($ex_normal)*
        )?
        #[inline]
        pub fn $name($self: $self_ty $(, $param: $param_ty)*) -> $ret {
            $( assert!(!($ub_condition), $error); )+
            // SAFETY: passed all undefined behaviour conditions above
            unsafe { $self.$unchecked_fn($($param),*) }
        }

        $(#[$meta])*
        #[doc = concat!(" ", $try_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the panicking version and [`Self::", stringify!($unchecked_fn), "`] for the unchecked version.")]
        ///
        /// Returns [`None`] if any of these conditions are **`true`**:
        $( #[doc = concat!(" - `", stringify!($ub_condition), "`")] )+
        $(
            ///
            /// # Examples
            ///
            $($ex_try)*
        )?
        #[must_use]
        #[inline]
        pub fn $try_fn($self: $self_ty $(, $param: $param_ty)*) -> Option<$ret> {
            $( if $ub_condition { return None; } )+
            // SAFETY: passed all undefined behaviour conditions above
            let result = unsafe { $self.$unchecked_fn($($param),*) };
            Some(result)
        }
    };
}

    /// Defines the checked, fallible and unchecked tiers of an operation that
    /// can run out of capacity.
    ///
    /// - checked: preconditions panic, lack of room returns
    ///   [`Error::CapacityExceeded`](crate::Error::CapacityExceeded);
    /// - fallible (`try_`): preconditions panic, lack of room returns [`None`];
    /// - unchecked: everything is the caller's responsibility and only
    ///   `debug_assert!`ed.
    ///
    /// The capacity condition is evaluated before `body` runs, so a failed
    /// call never modifies the vector.
    macro_rules! define_capacity_variants {
    (
        $(#[$meta:meta])*
        fn $name:ident $(<$($generic:ident),+>)? ($self:ident : $self_ty:ty $(, $param:ident: $param_ty:ty)*) -> $ret:ty,
        $(where_clause: { $($where_clause:tt)* } )?

        checked_brief: $checked_brief:literal,
        try_brief: $try_brief:literal,
        unchecked_brief_suffix: $unchecked_brief_suffix:literal,
        preconditions: {
            $($precondition:expr => $pre_error:literal),* $(,)?
        },
        capacity_exceeded: $capacity_exceeded:expr,
        unchecked_fn: $unchecked_fn:ident,
        try_fn: $try_fn:ident,
        body: $body:tt,
        $(examples: {
            checked: { $($ex_checked:tt)* }
            try: { $($ex_try:tt)* }
        })?
    ) => {
        $(#[$meta])*
        #[doc = concat!(" ", $checked_brief, ", ", $unchecked_brief_suffix, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the checked version and [`Self::", stringify!($try_fn), "`] for the [`Option`] returning version.")]
        ///
        /// # Safety
        ///
        /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
        $( #[doc = concat!(" - `", stringify!($precondition), "`")] )*
        #[doc = concat!(" - `", stringify!($capacity_exceeded), "`")]
        #[inline]
        pub unsafe fn $unchecked_fn $(<$($generic),+>)? ($self: $self_ty $(, $param: $param_ty)*) -> $ret
        $(where $($where_clause)*)?
        {
            $( debug_assert!(!($precondition), $pre_error); )*
            debug_assert!(!($capacity_exceeded), "capacity exceeded");
            $body
        }

        $(#[$meta])*
        #[doc = concat!(" ", $checked_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($unchecked_fn), "`] for the unchecked version and [`Self::", stringify!($try_fn), "`] for the [`Option`] returning version.")]
        ///
        /// # Errors
        ///
        #[doc = concat!(" Returns [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) without modifying the vector if `", stringify!($capacity_exceeded), "`.")]
        $(
            ///
            /// # Panics
            ///
            #[doc = concat!(" - \"", $pre_error, "\" if `", stringify!($precondition), "`")]
        )*
        $(
            ///
            /// # Examples
            ///
            $($ex_checked)*
        )?
        #[inline]
        pub fn $name $(<$($generic),+>)? ($self: $self_ty $(, $param: $param_ty)*) -> Result<$ret, $crate::Error>
        $(where $($where_clause)*)?
        {
            $( assert!(!($precondition), $pre_error); )*
            if $capacity_exceeded {
                return Err($crate::Error::CapacityExceeded);
            }
            // SAFETY: passed all undefined behaviour conditions above
            let result = unsafe { $self.$unchecked_fn($($param),*) };
            Ok(result)
        }

        $(#[$meta])*
        #[doc = concat!(" ", $try_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the checked version and [`Self::", stringify!($unchecked_fn), "`] for the unchecked version.")]
        ///
        #[doc = concat!(" Returns [`None`] without modifying the vector if `", stringify!($capacity_exceeded), "`.")]
        $(
            ///
            /// # Panics
            ///
            #[doc = concat!(" - \"", $pre_error, "\" if `", stringify!($precondition), "`")]
        )*
        $(
            ///
            /// # Examples
            ///
            $($ex_try)*
        )?
        #[inline]
        pub fn $try_fn $(<$($generic),+>)? ($self: $self_ty $(, $param: $param_ty)*) -> Option<$ret>
        $(where $($where_clause)*)?
        {
            $( assert!(!($precondition), $pre_error); )*
            if $capacity_exceeded {
                return None;
            }
            // SAFETY: passed all undefined behaviour conditions above
            let result = unsafe { $self.$unchecked_fn($($param),*) };
            Some(result)
        }
    };
}

    pub(crate) use define_capacity_variants;
    pub(crate) use define_variants;
}

/// Error type shared by the checked operations.
pub mod error;

/// A fixed-capacity vector with inline storage.
pub mod inplace_vec;

/// Inline slot storage and the in-place construct/destroy primitives.
mod storage;

pub use crate::error::Error;
pub use crate::inplace_vec::{erase, erase_if, InplaceVec, IntoIter};
