//! Combinators on [`Optional`] that apply an operation to the held value (if any) without the caller checking for
//! presence.
//!
//! Each combinator comes in three families, one per access mode. The receiver decides which value-category the
//! operation gets:
//!
//! | Combinator      | `&self` (gets `&T`) | `&mut self` (gets `&mut T`) | `self` (gets `T`)    |
//! |-----------------|---------------------|-----------------------------|----------------------|
//! | transform       | [`transform`]       | [`transform_mut`]           | [`into_transform`]   |
//! | transform_opt   | [`transform_opt`]   | [`transform_opt_mut`]       | [`into_transform_opt`] |
//! | execute         | [`execute`]         | [`execute_mut`]             | [`into_execute`]     |
//!
//! An operation requiring a stronger access mode than the receiver provides does not type-check. Taking ownership of
//! the value through a shared reference:
//!
//! ```compile_fail
//! # use optional_ext_core::Optional;
//! let o = Optional::new(String::from("moved"));
//! let p = o.transform(|s: String| s.len());
//! ```
//!
//! Mutating the value through a shared reference:
//!
//! ```compile_fail
//! # use optional_ext_core::Optional;
//! let o = Optional::new(2);
//! o.execute(|v: &mut i32| *v = 0);
//! ```
//!
//! A container consumed by an ownership-transfer combinator cannot be used afterwards; use
//! [`take`](Optional::take) to move the value out while keeping the container queryable:
//!
//! ```compile_fail
//! # use optional_ext_core::Optional;
//! let o = Optional::new(String::from("moved"));
//! let p = o.into_transform(|s| s.len());
//! assert!(!o.has_value());
//! ```
//!
//! [`transform`]: Optional::transform
//! [`transform_mut`]: Optional::transform_mut
//! [`into_transform`]: Optional::into_transform
//! [`transform_opt`]: Optional::transform_opt
//! [`transform_opt_mut`]: Optional::transform_opt_mut
//! [`into_transform_opt`]: Optional::into_transform_opt
//! [`execute`]: Optional::execute
//! [`execute_mut`]: Optional::execute_mut
//! [`into_execute`]: Optional::into_execute

use crate::Optional;

/// Transform: wraps the result of the operation in a new [`Optional`].
impl<T> Optional<T> {
  /// Apply `op` to a shared reference of the held value and return its result in a new container, or return an empty
  /// container without calling `op` if this container is empty.
  #[inline]
  pub fn transform<U>(&self, op: impl FnOnce(&T) -> U) -> Optional<U> {
    match self.get() {
      Some(value) => Optional::new(op(value)),
      None => Optional::empty(),
    }
  }

  /// Apply `op` to an exclusive reference of the held value and return its result in a new container, or return an
  /// empty container without calling `op` if this container is empty. Changes made by `op` stay in this container.
  #[inline]
  pub fn transform_mut<U>(&mut self, op: impl FnOnce(&mut T) -> U) -> Optional<U> {
    match self.get_mut() {
      Some(value) => Optional::new(op(value)),
      None => Optional::empty(),
    }
  }

  /// Move the held value into `op` and return its result in a new container, or return an empty container without
  /// calling `op` if this container is empty.
  #[inline]
  pub fn into_transform<U>(self, op: impl FnOnce(T) -> U) -> Optional<U> {
    match self.into_option() {
      Some(value) => Optional::new(op(value)),
      None => Optional::empty(),
    }
  }
}

/// Transform-optional: the operation returns an [`Optional`] itself, which becomes the result without wrapping it
/// again. Chains of these flatten instead of nesting.
impl<T> Optional<T> {
  #[inline]
  pub fn transform_opt<U>(&self, op: impl FnOnce(&T) -> Optional<U>) -> Optional<U> {
    match self.get() {
      Some(value) => op(value),
      None => Optional::empty(),
    }
  }

  #[inline]
  pub fn transform_opt_mut<U>(&mut self, op: impl FnOnce(&mut T) -> Optional<U>) -> Optional<U> {
    match self.get_mut() {
      Some(value) => op(value),
      None => Optional::empty(),
    }
  }

  #[inline]
  pub fn into_transform_opt<U>(self, op: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self.into_option() {
      Some(value) => op(value),
      None => Optional::empty(),
    }
  }
}

/// Execute: call the operation for its side effect only.
impl<T> Optional<T> {
  /// Call `op` once with a shared reference to the held value, or do nothing if this container is empty.
  #[inline]
  pub fn execute<U>(&self, op: impl FnOnce(&T) -> U) {
    if let Some(value) = self.get() {
      op(value);
    }
  }

  /// Call `op` once with an exclusive reference to the held value, or do nothing if this container is empty.
  #[inline]
  pub fn execute_mut<U>(&mut self, op: impl FnOnce(&mut T) -> U) {
    if let Some(value) = self.get_mut() {
      op(value);
    }
  }

  /// Move the held value into `op`, or do nothing if this container is empty.
  #[inline]
  pub fn into_execute<U>(self, op: impl FnOnce(T) -> U) {
    if let Some(value) = self.into_option() {
      op(value);
    }
  }
}
