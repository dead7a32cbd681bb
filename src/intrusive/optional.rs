// https://en.cppreference.com/w/cpp/utility/optional.html
// Like Option<T> in Rust, except that "no value" is one reserved value of T itself. There is no
// separate flag: the optional is empty exactly when the stored value equals N::NULL.

use crate::intrusive::{
    error::BadOptionalAccess,
    mode::{ SafetyMode, Safe, Unsafe },
    null::{ Empty, Int, Max, NullValue }
};
use static_assertions::{ assert_eq_size, assert_impl_all, assert_not_impl_any, const_assert };
use std::{
    fmt::{ Debug, Display },
    marker::PhantomData,
    mem,
    ops::{ Deref, DerefMut }
};

/// Construction from a list of `T` followed by extra arguments, the counterpart of a
/// constructor taking an initializer list.
pub trait FromList<T, A = ()> {
    fn from_list(list: &[T], args: A) -> Self;
}

/// An optional `V` that spends no storage on a "has value" flag.
///
/// `N` supplies the sentinel of `V` that represents "empty", `M` selects the
/// [`SafetyMode`]. The wrapper is `Copy` and free of drop glue whenever `V` is.
#[repr(transparent)]
pub struct Optional<V, N, M = Unsafe>
where N: NullValue<V>,
      M: SafetyMode
{
    value: V,
    _policy: PhantomData<fn() -> (N, M)>
}

assert_eq_size!(Optional<u32, Int<0>>, u32);
assert_eq_size!(Optional<String, Empty, Safe>, String);
assert_impl_all!(Optional<u32, Int<0>>: Copy, Send, Sync);
assert_not_impl_any!(Optional<String, Empty>: Copy);
assert_not_impl_any!(Optional<u32, Int<0>, Safe>: DerefMut);
const_assert!(!mem::needs_drop::<Optional<u64, Max>>());
const_assert!(mem::needs_drop::<Optional<String, Empty>>());

impl<V, N, M> Optional<V, N, M>
where N: NullValue<V>,
      M: SafetyMode
{
    pub const NULL_VALUE: V = N::NULL;
    pub const NONE: Self = Self::none();

    #[inline]
    pub const fn none() -> Self { Self::new_inner(N::NULL) }

    const fn new_inner(value: V) -> Self {
        Self { value, _policy: PhantomData }
    }
}

impl<V, N, M> Optional<V, N, M>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    /// Stores `value`. Fails in [`Safe`] mode if the converted value is the null value.
    pub fn new<U>(value: U) -> M::Checked<Self>
    where U: Into<V>
    {
        Self::new_inner(value.into()).checked()
    }

    /// Builds the stored value in place.
    pub fn new_with<F>(f: F) -> M::Checked<Self>
    where F: FnOnce() -> V
    {
        Self::new_inner(f()).checked()
    }

    pub fn from_list<T, A>(list: &[T], args: A) -> M::Checked<Self>
    where V: FromList<T, A>
    {
        Self::new_inner(V::from_list(list, args)).checked()
    }

    /// `None` and `Some(N::NULL)` both produce an empty optional. Never fails.
    pub fn from_option(value: Option<V>) -> Self { value.into() }

    /// Converts from an optional with another value type or null value. An empty `other`
    /// produces an empty optional, a value converting to our null value does too.
    pub fn convert_from<U, N2, M2>(other: Optional<U, N2, M2>) -> Self
    where V: From<U>,
          U: PartialEq,
          N2: NullValue<U>,
          M2: SafetyMode
    {
        match other.into_option() {
            Some(v) => Self::new_inner(V::from(v)),
            None => Self::none()
        }
    }

    pub fn convert_from_ref<U, N2, M2>(other: &Optional<U, N2, M2>) -> Self
    where V: From<U>,
          U: PartialEq + Clone,
          N2: NullValue<U>,
          M2: SafetyMode
    {
        match other.as_option() {
            Some(v) => Self::new_inner(V::from(v.clone())),
            None => Self::none()
        }
    }

    fn checked(self) -> M::Checked<Self> {
        let is_null = !self.has_value();
        M::check(self, is_null)
    }

    fn check_not_null(&self) -> M::Checked<()> {
        M::check((), !self.has_value())
    }

    // Observers

    #[inline]
    pub fn has_value(&self) -> bool { self.value != N::NULL }
    #[inline]
    pub fn is_some(&self) -> bool { self.has_value() }
    #[inline]
    pub fn is_none(&self) -> bool { !self.has_value() }

    pub fn value(&self) -> Result<&V, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(&self.value),
            false => Err(BadOptionalAccess)
        }
    }

    pub fn value_or<U>(&self, default: U) -> V
    where V: Clone,
          U: Into<V>
    {
        match self.has_value() {
            true => self.value.clone(),
            false => default.into()
        }
    }

    pub fn into_value_or<U>(self, default: U) -> V
    where U: Into<V>
    {
        match self.has_value() {
            true => self.value,
            false => default.into()
        }
    }

    pub fn as_option(&self) -> Option<&V> {
        self.has_value().then_some(&self.value)
    }

    // get_std
    pub fn to_option(&self) -> Option<V>
    where V: Clone
    {
        self.as_option().cloned()
    }

    pub fn into_option(self) -> Option<V> {
        match self.has_value() {
            true => Some(self.value),
            false => None
        }
    }

    // Assignment

    /// Stores `value`. In [`Safe`] mode a null value fails the call and leaves the optional empty.
    pub fn assign<U>(&mut self, value: U) -> M::Checked<()>
    where U: Into<V>
    {
        self.value = value.into();
        self.check_not_null()
    }

    pub fn assign_from<U, N2, M2>(&mut self, other: Optional<U, N2, M2>)
    where V: From<U>,
          U: PartialEq,
          N2: NullValue<U>,
          M2: SafetyMode
    {
        match (self.has_value(), other.has_value()) {
            (false, false) => {},
            (true, false) => self.reset(),
            (_, true) => self.value = V::from(other.value)
        }
    }

    pub fn assign_from_ref<U, N2, M2>(&mut self, other: &Optional<U, N2, M2>)
    where V: From<U>,
          U: PartialEq + Clone,
          N2: NullValue<U>,
          M2: SafetyMode
    {
        match (self.has_value(), other.has_value()) {
            (false, false) => {},
            (true, false) => self.reset(),
            (_, true) => self.value = V::from(other.value.clone())
        }
    }

    pub fn assign_option(&mut self, value: Option<V>) {
        match value {
            Some(v) => self.value = v,
            None => self.reset()
        }
    }

    // Modifiers

    pub fn reset(&mut self) {
        if self.has_value() {
            self.value = N::NULL;
        }
    }

    pub fn emplace<U>(&mut self, value: U) -> M::Checked<()>
    where U: Into<V>
    {
        self.reset();
        self.value = value.into();
        self.check_not_null()
    }

    pub fn emplace_with<F>(&mut self, f: F) -> M::Checked<()>
    where F: FnOnce() -> V
    {
        self.reset();
        self.value = f();
        self.check_not_null()
    }

    pub fn emplace_list<T, A>(&mut self, list: &[T], args: A) -> M::Checked<()>
    where V: FromList<T, A>
    {
        self.reset();
        self.value = V::from_list(list, args);
        self.check_not_null()
    }

    /// Moves the value out, leaving the optional empty.
    pub fn take(&mut self) -> Option<V> {
        mem::replace(self, Self::none()).into_option()
    }

    pub fn swap(&mut self, other: &mut Self) {
        match (self.has_value(), other.has_value()) {
            (false, false) => {},
            (true, true) => mem::swap(&mut self.value, &mut other.value),
            (true, false) => other.value = mem::replace(&mut self.value, N::NULL),
            (false, true) => self.value = mem::replace(&mut other.value, N::NULL)
        }
    }
}

// Mutable access to a possibly-null value only exists in unsafe mode
impl<V, N> Optional<V, N, Unsafe>
where V: PartialEq,
      N: NullValue<V>
{
    pub fn value_mut(&mut self) -> Result<&mut V, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(&mut self.value),
            false => Err(BadOptionalAccess)
        }
    }

    pub fn into_value(self) -> Result<V, BadOptionalAccess> {
        self.into_option().ok_or(BadOptionalAccess)
    }
}

impl<V, N, M> Deref for Optional<V, N, M>
where N: NullValue<V>,
      M: SafetyMode
{
    type Target = V;
    // unchecked, like dereferencing a pointer
    fn deref(&self) -> &Self::Target { &self.value }
}

impl<V, N> DerefMut for Optional<V, N, Unsafe>
where N: NullValue<V>
{
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.value }
}

impl<V, N, M> Clone for Optional<V, N, M>
where V: Clone,
      N: NullValue<V>,
      M: SafetyMode
{
    fn clone(&self) -> Self { Self::new_inner(self.value.clone()) }

    // An empty source holds a valid V too, so clone-assigning the payload covers every
    // combination of empty and present
    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value)
    }
}

impl<V, N, M> Copy for Optional<V, N, M>
where V: Copy,
      N: NullValue<V>,
      M: SafetyMode
{}

impl<V, N, M> Default for Optional<V, N, M>
where N: NullValue<V>,
      M: SafetyMode
{
    fn default() -> Self { Self::none() }
}

impl<V, N> From<V> for Optional<V, N, Unsafe>
where N: NullValue<V>
{
    fn from(value: V) -> Self { Self::new_inner(value) }
}

impl<V, N, M> From<Option<V>> for Optional<V, N, M>
where N: NullValue<V>,
      M: SafetyMode
{
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => Self::new_inner(v),
            None => Self::none()
        }
    }
}

impl<V, N, M> From<Optional<V, N, M>> for Option<V>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    fn from(value: Optional<V, N, M>) -> Self { value.into_option() }
}

impl<V, N, M> Debug for Optional<V, N, M>
where V: PartialEq + Debug,
      N: NullValue<V>,
      M: SafetyMode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.has_value() {
            true => write!(f, "Some({:?})", self.value),
            false => write!(f, "None"),
        }
    }
}

impl<V, N, M> Display for Optional<V, N, M>
where V: PartialEq + Display,
      N: NullValue<V>,
      M: SafetyMode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.has_value() {
            true => write!(f, "Some({})", self.value),
            false => write!(f, "None"),
        }
    }
}

pub fn swap<V, N, M>(x: &mut Optional<V, N, M>, y: &mut Optional<V, N, M>)
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    x.swap(y)
}

// The value-deduced make_optional doesn't exist: the null value is part of the type and can't
// be deduced from the argument.
pub fn make_optional<V, N, M>(value: impl Into<V>) -> M::Checked<Optional<V, N, M>>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    Optional::<V, N, M>::new(value)
}

pub fn make_optional_with<V, N, M>(f: impl FnOnce() -> V) -> M::Checked<Optional<V, N, M>>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    Optional::<V, N, M>::new_with(f)
}

pub fn make_optional_list<V, N, M, T, A>(list: &[T], args: A) -> M::Checked<Optional<V, N, M>>
where V: PartialEq + FromList<T, A>,
      N: NullValue<V>,
      M: SafetyMode
{
    Optional::<V, N, M>::from_list(list, args)
}
