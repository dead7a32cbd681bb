// Value types shared by the unit tests. Neither is Copy, so every optional built over them goes
// through Clone.

use crate::intrusive::{
    mode::Safe,
    optional::{ FromList, Optional }
};

#[derive(Debug, Clone, PartialEq)]
pub struct OneValue {
    pub a: i32
}

impl OneValue {
    pub const fn new(a: i32) -> Self { Self { a } }
}

impl From<i32> for OneValue {
    fn from(a: i32) -> Self { Self::new(a) }
}

impl FromList<i32> for OneValue {
    fn from_list(list: &[i32], _: ()) -> Self {
        Self::new(list.first().copied().unwrap_or_default())
    }
}

// Ordering only looks at the first field, equality at both
#[derive(Debug, Clone, PartialEq)]
pub struct TwoValues {
    pub a: i32,
    pub b: i32
}

impl TwoValues {
    pub const fn new(a: i32, b: i32) -> Self { Self { a, b } }
}

impl PartialOrd for TwoValues {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.a.partial_cmp(&other.a)
    }
}

impl From<(i32, i32)> for TwoValues {
    fn from((a, b): (i32, i32)) -> Self { Self::new(a, b) }
}

impl FromList<i32, i32> for TwoValues {
    fn from_list(list: &[i32], b: i32) -> Self {
        Self::new(list.first().copied().unwrap_or_default(), b)
    }
}

crate::null_value! {
    pub struct OneValueZero: OneValue = OneValue::new(0);
    pub struct OneValueMinusOne: OneValue = OneValue::new(-1);
    pub struct TwoValuesZero: TwoValues = TwoValues::new(0, 0);
}

pub type TwoValuesOptional = Optional<TwoValues, TwoValuesZero>;
pub type TwoValuesOptionalSafe = Optional<TwoValues, TwoValuesZero, Safe>;
