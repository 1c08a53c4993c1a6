use crate::error::EmptyAccess;

/// Container holding either no value or exactly one value of type `T`.
///
/// The container exclusively owns its value. The value is reached in one of three access modes, which are chosen by
/// how the container itself is accessed:
///
/// - through a shared reference (`&self`), the value is handed out as `&T`;
/// - through an exclusive reference (`&mut self`), the value is handed out as `&mut T`;
/// - by consuming the container (`self`), the value is moved out as `T`.
///
/// Accessing the value of an empty container fails with [`EmptyAccess`]. The [combinators](crate::combinator) check
/// for presence themselves and never fail.
#[repr(transparent)]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[must_use]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
  /// Create a container holding `value`.
  #[inline]
  pub const fn new(value: T) -> Self { Self(Some(value)) }

  /// Create an empty container.
  #[inline]
  pub const fn empty() -> Self { Self(None) }


  #[inline]
  pub const fn has_value(&self) -> bool { self.0.is_some() }

  #[inline]
  pub const fn is_empty(&self) -> bool { self.0.is_none() }


  /// Returns a shared reference to the held value, or [`EmptyAccess`] if this container is empty.
  #[inline]
  pub fn value(&self) -> Result<&T, EmptyAccess> {
    self.0.as_ref().ok_or_else(EmptyAccess::for_type::<T>)
  }

  /// Returns an exclusive reference to the held value, or [`EmptyAccess`] if this container is empty.
  #[inline]
  pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
    self.0.as_mut().ok_or_else(EmptyAccess::for_type::<T>)
  }

  /// Moves the held value out of this container, or returns [`EmptyAccess`] if this container is empty.
  #[inline]
  pub fn into_value(self) -> Result<T, EmptyAccess> {
    self.0.ok_or_else(EmptyAccess::for_type::<T>)
  }

  #[inline]
  pub fn value_or(self, default: T) -> T { self.0.unwrap_or(default) }

  #[inline]
  pub fn value_or_else(self, default_fn: impl FnOnce() -> T) -> T { self.0.unwrap_or_else(default_fn) }


  #[inline]
  pub const fn get(&self) -> Option<&T> { self.0.as_ref() }

  #[inline]
  pub fn get_mut(&mut self) -> Option<&mut T> { self.0.as_mut() }

  #[inline]
  pub fn into_option(self) -> Option<T> { self.0 }


  /// Returns a container holding a shared reference to the held value, or an empty container.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> { Optional(self.0.as_ref()) }

  /// Returns a container holding an exclusive reference to the held value, or an empty container.
  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> { Optional(self.0.as_mut()) }


  /// Moves the held value out into a new container, leaving this container empty.
  ///
  /// Unlike consuming this container, `self` stays usable afterwards and reads as empty.
  #[inline]
  pub fn take(&mut self) -> Optional<T> { Optional(self.0.take()) }

  /// Replaces the held value with `value`, returning the previously held value (if any).
  #[inline]
  pub fn replace(&mut self, value: T) -> Optional<T> { Optional(self.0.replace(value)) }

  /// Drops the held value (if any), leaving this container empty.
  #[inline]
  pub fn reset(&mut self) { self.0 = None; }

  /// Stores `value` in this container, dropping the previously held value (if any), and returns an exclusive
  /// reference to it.
  #[inline]
  pub fn insert(&mut self, value: T) -> &mut T { self.0.insert(value) }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::empty() }
}

impl<T> From<T> for Optional<T> {
  #[inline]
  fn from(value: T) -> Self { Self::new(value) }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { Self(option) }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.0 }
}
