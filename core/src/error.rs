/// Error returned when accessing the value of an empty [`Optional`](crate::Optional).
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("attempted to access the value of an empty optional")]
pub struct EmptyAccess;

impl EmptyAccess {
  #[inline]
  pub(crate) fn for_type<T: ?Sized>() -> Self {
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = std::any::type_name::<T>(), "attempted to access the value of an empty optional");
    Self
  }
}
