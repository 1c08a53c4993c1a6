//! Operations tagged with the access mode they require, dispatched at compile time.
//!
//! Where the [combinators](crate::combinator) pick the access mode from the receiver, the functions in this module
//! take an [`Op`] that declares its access mode up front. [`Dispatch`] is only implemented for receiver/operation pairs
//! where the receiver can provide the declared access mode:
//!
//! | Receiver             | [`Shared`] | [`Exclusive`] | [`Owned`] |
//! |----------------------|------------|---------------|-----------|
//! | `&Optional<T>`       | yes        | no            | no        |
//! | `&mut Optional<T>`   | yes        | yes           | no        |
//! | `Optional<T>`        | yes        | yes           | yes       |
//!
//! Any other combination is rejected by the type checker:
//!
//! ```compile_fail
//! # use optional_ext_core::Optional;
//! # use optional_ext_core::access::{self, Op};
//! let o = Optional::new(3);
//! let p = access::transform(&o, Op::owned(|v: i32| v * 2));
//! ```
//!
//! References handed to an operation only live for the duration of the call, even when the receiver is consumed.
//!
//! The table lives in one place: [`Permits`]. Each receiver lends its value in one access mode ([`Shared`] for
//! `&Optional<T>`, [`Exclusive`] for `&mut Optional<T>`, [`Owned`] for `Optional<T>`), and [`Dispatch`] is implemented
//! for a receiver exactly when that mode permits the mode of the operation.
//!
//! When the receiver is consumed, an [`Exclusive`] operation mutates the moved-out value, which is dropped after the
//! call. For `T: Copy` the receiver is copied into the call, so the original container is left unchanged:
//!
//! ```
//! # use optional_ext_core::Optional;
//! # use optional_ext_core::access::{self, Op};
//! let o = Optional::new(3);
//! access::execute(o, Op::exclusive(|v: &mut i32| *v = 10));
//! assert_eq!(o, Optional::new(3));
//! ```
//!
//! Pass `&mut o` to mutate the held value in place.

use std::marker::PhantomData;

use crate::Optional;

/// Access through an unmodifiable reference: operations get `&T`.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Shared;

/// Access through a modifiable reference: operations get `&mut T`.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Exclusive;

/// Access by ownership transfer: operations get `T`.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Owned;

mod sealed {
  pub trait Sealed {}

  impl Sealed for super::Shared {}
  impl Sealed for super::Exclusive {}
  impl Sealed for super::Owned {}
}

/// Access mode tag.
pub trait Mode: sealed::Sealed + Copy + Default {
  /// Name of this mode in trace events.
  const NAME: &'static str;

  /// How a value of type `T` is handed out in this mode.
  type Held<'a, T: 'a>;
}

impl Mode for Shared {
  const NAME: &'static str = "shared";
  type Held<'a, T: 'a> = &'a T;
}

impl Mode for Exclusive {
  const NAME: &'static str = "exclusive";
  type Held<'a, T: 'a> = &'a mut T;
}

impl Mode for Owned {
  const NAME: &'static str = "owned";
  type Held<'a, T: 'a> = T;
}


/// Operation that can be called with a value handed out in access mode [`Operation::Mode`].
pub trait Operation<T> {
  type Mode: Mode;
  type Output;

  fn call<'a>(self, value: <Self::Mode as Mode>::Held<'a, T>) -> Self::Output where T: 'a;
}

/// Access mode `Self` can provide access mode `M`: a value held in mode `Self` can be lent out in mode `M`.
pub trait Permits<M: Mode>: Mode {
  /// Lend `held` to `op` in the access mode `op` requires.
  fn lend<'a, T: 'a, O>(held: Self::Held<'a, T>, op: O) -> O::Output where O: Operation<T, Mode=M>;
}

impl Permits<Shared> for Shared {
  #[inline]
  fn lend<'a, T: 'a, O>(held: &'a T, op: O) -> O::Output where O: Operation<T, Mode=Shared> {
    op.call(held)
  }
}

impl Permits<Shared> for Exclusive {
  #[inline]
  fn lend<'a, T: 'a, O>(held: &'a mut T, op: O) -> O::Output where O: Operation<T, Mode=Shared> {
    op.call(&*held)
  }
}

impl Permits<Exclusive> for Exclusive {
  #[inline]
  fn lend<'a, T: 'a, O>(held: &'a mut T, op: O) -> O::Output where O: Operation<T, Mode=Exclusive> {
    op.call(held)
  }
}

impl Permits<Shared> for Owned {
  #[inline]
  fn lend<'a, T: 'a, O>(held: T, op: O) -> O::Output where O: Operation<T, Mode=Shared> {
    op.call(&held)
  }
}

/// The moved value is mutated and dropped after the call; see the [module documentation](crate::access).
impl Permits<Exclusive> for Owned {
  #[inline]
  fn lend<'a, T: 'a, O>(mut held: T, op: O) -> O::Output where O: Operation<T, Mode=Exclusive> {
    op.call(&mut held)
  }
}

impl Permits<Owned> for Owned {
  #[inline]
  fn lend<'a, T: 'a, O>(held: T, op: O) -> O::Output where O: Operation<T, Mode=Owned> {
    op.call(held)
  }
}


/// Operation `F` tagged with the access mode `M` it requires.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Op<M, F> {
  op: F,
  _mode: PhantomData<M>,
}

impl<M: Mode, F> Op<M, F> {
  #[inline]
  fn new(op: F) -> Self { Self { op, _mode: PhantomData } }
}

impl<F> Op<Shared, F> {
  /// Tag `op` as requiring shared access.
  #[inline]
  pub fn shared<T, U>(op: F) -> Self where F: FnOnce(&T) -> U { Self::new(op) }
}

impl<F> Op<Exclusive, F> {
  /// Tag `op` as requiring exclusive access.
  #[inline]
  pub fn exclusive<T, U>(op: F) -> Self where F: FnOnce(&mut T) -> U { Self::new(op) }
}

impl<F> Op<Owned, F> {
  /// Tag `op` as requiring ownership of the value.
  #[inline]
  pub fn owned<T, U>(op: F) -> Self where F: FnOnce(T) -> U { Self::new(op) }
}

impl<T, U, F: FnOnce(&T) -> U> Operation<T> for Op<Shared, F> {
  type Mode = Shared;
  type Output = U;

  #[inline]
  fn call<'a>(self, value: &'a T) -> U where T: 'a { (self.op)(value) }
}

impl<T, U, F: FnOnce(&mut T) -> U> Operation<T> for Op<Exclusive, F> {
  type Mode = Exclusive;
  type Output = U;

  #[inline]
  fn call<'a>(self, value: &'a mut T) -> U where T: 'a { (self.op)(value) }
}

impl<T, U, F: FnOnce(T) -> U> Operation<T> for Op<Owned, F> {
  type Mode = Owned;
  type Output = U;

  #[inline]
  fn call<'a>(self, value: T) -> U where T: 'a { (self.op)(value) }
}


/// Receiver that can run tagged operation `O` on its held value.
///
/// Implemented for `&Optional<T>`, `&mut Optional<T>` and `Optional<T>` whenever the access mode the receiver lends
/// its value in [`Permits`] the mode of `O`.
pub trait Dispatch<O> {
  type Output;

  /// Run `op` on the held value and return its result, or return `None` without calling `op` if empty.
  fn dispatch(self, op: O) -> Option<Self::Output>;
}

#[inline]
fn trace_dispatch<R: Mode, M: Mode>(_has_value: bool) {
  #[cfg(feature = "tracing")]
  tracing::trace!(receiver = R::NAME, operation = M::NAME, has_value = _has_value, "dispatching tagged operation");
}

impl<T, O: Operation<T>> Dispatch<O> for &Optional<T> where Shared: Permits<O::Mode> {
  type Output = O::Output;

  #[inline]
  fn dispatch(self, op: O) -> Option<O::Output> {
    trace_dispatch::<Shared, O::Mode>(self.has_value());
    self.get().map(|held| <Shared as Permits<O::Mode>>::lend(held, op))
  }
}

impl<T, O: Operation<T>> Dispatch<O> for &mut Optional<T> where Exclusive: Permits<O::Mode> {
  type Output = O::Output;

  #[inline]
  fn dispatch(self, op: O) -> Option<O::Output> {
    trace_dispatch::<Exclusive, O::Mode>(self.has_value());
    self.get_mut().map(|held| <Exclusive as Permits<O::Mode>>::lend(held, op))
  }
}

impl<T, O: Operation<T>> Dispatch<O> for Optional<T> where Owned: Permits<O::Mode> {
  type Output = O::Output;

  #[inline]
  fn dispatch(self, op: O) -> Option<O::Output> {
    trace_dispatch::<Owned, O::Mode>(self.has_value());
    self.into_option().map(|held| <Owned as Permits<O::Mode>>::lend(held, op))
  }
}


/// Apply tagged operation `op` through `receiver` and wrap its result in a new [`Optional`], or return an empty
/// container without calling `op` if `receiver` is empty.
#[inline]
pub fn transform<R: Dispatch<O>, O>(receiver: R, op: O) -> Optional<R::Output> {
  receiver.dispatch(op).into()
}

/// Apply tagged operation `op`, which returns an [`Optional`] itself, through `receiver` and return its result as is,
/// or return an empty container without calling `op` if `receiver` is empty.
#[inline]
pub fn transform_opt<R, O, U>(receiver: R, op: O) -> Optional<U> where
  R: Dispatch<O, Output=Optional<U>>
{
  receiver.dispatch(op).unwrap_or_default()
}

/// Call tagged operation `op` through `receiver` for its side effect only, or do nothing if `receiver` is empty.
#[inline]
pub fn execute<R: Dispatch<O>, O>(receiver: R, op: O) {
  receiver.dispatch(op);
}




#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use static_assertions::{assert_impl_all, assert_not_impl_any};

  use super::*;

  type SharedOp = Op<Shared, fn(&i32) -> i32>;
  type ExclusiveOp = Op<Exclusive, fn(&mut i32) -> i32>;
  type OwnedOp = Op<Owned, fn(i32) -> i32>;

  assert_impl_all!(SharedOp: Operation<i32>);
  assert_impl_all!(ExclusiveOp: Operation<i32>);
  assert_impl_all!(OwnedOp: Operation<i32>);
  assert_not_impl_any!(SharedOp: Operation<u8>);

  assert_impl_all!(Shared: Permits<Shared>);
  assert_not_impl_any!(Shared: Permits<Exclusive>, Permits<Owned>);
  assert_impl_all!(Exclusive: Permits<Shared>, Permits<Exclusive>);
  assert_not_impl_any!(Exclusive: Permits<Owned>);
  assert_impl_all!(Owned: Permits<Shared>, Permits<Exclusive>, Permits<Owned>);

  assert_impl_all!(&'static Optional<i32>: Dispatch<SharedOp>);
  assert_not_impl_any!(&'static Optional<i32>: Dispatch<ExclusiveOp>, Dispatch<OwnedOp>);
  assert_impl_all!(&'static mut Optional<i32>: Dispatch<SharedOp>, Dispatch<ExclusiveOp>);
  assert_not_impl_any!(&'static mut Optional<i32>: Dispatch<OwnedOp>);
  assert_impl_all!(Optional<i32>: Dispatch<SharedOp>, Dispatch<ExclusiveOp>, Dispatch<OwnedOp>);

  #[test]
  fn permits_lends_in_requested_mode() {
    let mut value = String::from("@knatten");
    assert_eq!(<Shared as Permits<Shared>>::lend(&value, Op::shared(|s: &String| s.len())), 8);
    <Exclusive as Permits<Exclusive>>::lend(&mut value, Op::exclusive(|s: &mut String| s.push('!')));
    assert_eq!(<Exclusive as Permits<Shared>>::lend(&mut value, Op::shared(|s: &String| s.clone())), "@knatten!");
    let bytes = <Owned as Permits<Owned>>::lend(value, Op::owned(String::into_bytes));
    assert_eq!(bytes.len(), 9);
  }

  #[test]
  fn shared_op_on_every_receiver() {
    let mut o = Optional::new(String::from("ab"));
    assert_eq!(transform(&o, Op::shared(|s: &String| s.len())), Optional::new(2));
    assert_eq!(transform(&mut o, Op::shared(|s: &String| s.len() + 1)), Optional::new(3));
    assert_eq!(transform(o, Op::shared(|s: &String| s.len() - 1)), Optional::new(1));
  }

  #[test]
  fn exclusive_op_mutates_through_reference() {
    let mut o = Optional::new(vec![1]);
    execute(&mut o, Op::exclusive(|v: &mut Vec<i32>| v.push(10)));
    assert_eq!(o, Optional::new(vec![1, 10]));
  }

  #[test]
  fn exclusive_op_on_consumed_receiver() {
    let o = Optional::new(vec![1]);
    let p = transform(o, Op::exclusive(|v: &mut Vec<i32>| {
      v.push(2);
      v.len()
    }));
    assert_eq!(p, Optional::new(2));
  }

  #[test]
  fn exclusive_op_on_copied_receiver_leaves_source_unchanged() {
    let o = Optional::new(3);
    let seen = transform(o, Op::exclusive(|v: &mut i32| {
      *v = 10;
      *v
    }));
    assert_eq!(seen, Optional::new(10));
    assert_eq!(o, Optional::new(3));
  }

  #[test]
  fn owned_op_moves_value() {
    let o = Optional::new(String::from("@knatten"));
    let p = transform(o, Op::owned(|s: String| s.into_bytes()));
    assert_eq!(p.into_value().map(|b| b.len()), Ok(8));
  }

  #[test]
  fn transform_opt_flattens() {
    let o = Optional::new(String::from("abc"));
    let p = transform_opt(&o, Op::shared(|s: &String| Optional::new(s.len() * 2)));
    assert_eq!(p, Optional::new(6));
    let q = transform_opt(&o, Op::shared(|_: &String| Optional::<usize>::empty()));
    assert!(q.is_empty());
  }

  #[test]
  fn empty_receiver_never_calls() {
    let calls = Cell::new(0);
    let mut o = Optional::<String>::empty();
    assert!(transform(&o, Op::shared(|_: &String| calls.set(calls.get() + 1))).is_empty());
    execute(&mut o, Op::exclusive(|_: &mut String| calls.set(calls.get() + 1)));
    let p = transform_opt(o, Op::owned(|s: String| {
      calls.set(calls.get() + 1);
      Optional::new(s)
    }));
    assert!(p.is_empty());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn mode_names() {
    assert_eq!(Shared::NAME, "shared");
    assert_eq!(Exclusive::NAME, "exclusive");
    assert_eq!(Owned::NAME, "owned");
  }
}
