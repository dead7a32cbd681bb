// Null-value policies. A policy names the value of V that an Optional<V, _> treats as "empty".
// The sentinel is part of the type, so every policy is a zero-sized marker carrying it as an
// associated constant.

/// Supplies the compile-time sentinel of `V`.
pub trait NullValue<V> {
    const NULL: V;
}

/// Integer literal sentinel, usable for every primitive integer and float type.
///
/// Using a literal that doesn't fit into the integer type is rejected during const evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Int<const N: i128>;

/// `V::MAX` as the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max;

/// `V::MIN` as the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Char<const C: char>;

/// The empty collection as the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Empty;

macro_rules! primitive_impls {
    ( $( $t:ty, )* ) => {
        $(
            impl<const N: i128> NullValue<$t> for Int<N> {
                const NULL: $t = {
                    assert!(N >= <$t>::MIN as i128 && N <= <$t>::MAX as i128, "Null value is out of range");
                    N as $t
                };
            }
            impl NullValue<$t> for Max { const NULL: $t = <$t>::MAX; }
            impl NullValue<$t> for Min { const NULL: $t = <$t>::MIN; }
        )*
    }
}

primitive_impls! {
    u8, u16, u32, u64, usize,
    i8, i16, i32, i64, isize,
}

// the range check above can't express the bounds of the 128-bit types
impl<const N: i128> NullValue<i128> for Int<N> { const NULL: i128 = N; }
impl NullValue<i128> for Max { const NULL: i128 = i128::MAX; }
impl NullValue<i128> for Min { const NULL: i128 = i128::MIN; }

impl<const N: i128> NullValue<u128> for Int<N> {
    const NULL: u128 = {
        assert!(N >= 0, "Null value is out of range");
        N as u128
    };
}
impl NullValue<u128> for Max { const NULL: u128 = u128::MAX; }
impl NullValue<u128> for Min { const NULL: u128 = u128::MIN; }

impl<const N: i128> NullValue<f32> for Int<N> { const NULL: f32 = N as f32; }
impl<const N: i128> NullValue<f64> for Int<N> { const NULL: f64 = N as f64; }

impl<const C: char> NullValue<char> for Char<C> { const NULL: char = C; }

impl NullValue<String> for Empty { const NULL: String = String::new(); }
impl<T> NullValue<Vec<T>> for Empty { const NULL: Vec<T> = Vec::new(); }

/// Declares a unit policy type whose sentinel is a const expression of the value type.
///
/// ```
/// use intrusive_optional::{ null_value, intrusive::optional::Optional };
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Point { x: i32, y: i32 }
///
/// null_value! {
///     pub struct Origin: Point = Point { x: 0, y: 0 };
/// }
///
/// let p: Optional<Point, Origin> = Optional::none();
/// assert!(!p.has_value());
/// ```
#[macro_export]
macro_rules! null_value {
    ( $( $(#[$meta:meta])* $vis:vis struct $name:ident : $t:ty = $value:expr ; )+ ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            $vis struct $name;

            impl $crate::intrusive::null::NullValue<$t> for $name {
                const NULL: $t = $value;
            }
        )+
    }
}
