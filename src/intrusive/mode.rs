use crate::intrusive::error::UnintentionallyNull;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Unsafe {}
    impl Sealed for super::Safe {}
}

/// Type-level switch selecting how much of the [`Optional`](super::optional::Optional)
/// interface is available.
///
/// Operations that directly store a value report through [`SafetyMode::Checked`], which is the
/// plain result for [`Unsafe`] and a `Result` for [`Safe`].
pub trait SafetyMode: sealed::Sealed {
    type Checked<T>;
    const CHECKED: bool;

    fn check<T>(value: T, is_null: bool) -> Self::Checked<T>;
}

/// Mutable access to the stored value is always available, and storing the null value through
/// a value-establishing operation silently yields an empty optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unsafe;

/// Mutable access is removed from the interface, and storing the null value through a
/// value-establishing operation fails with [`UnintentionallyNull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Safe;

impl SafetyMode for Unsafe {
    type Checked<T> = T;
    const CHECKED: bool = false;

    #[inline(always)]
    fn check<T>(value: T, _: bool) -> T { value }
}

impl SafetyMode for Safe {
    type Checked<T> = Result<T, UnintentionallyNull>;
    const CHECKED: bool = true;

    #[inline]
    fn check<T>(value: T, is_null: bool) -> Self::Checked<T> {
        match is_null {
            true => Err(UnintentionallyNull),
            false => Ok(value)
        }
    }
}
