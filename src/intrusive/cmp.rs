// Comparisons. Between two optionals, an empty one is smaller than any value and two empty ones
// are equal, whatever their null values are. Against a bare value every comparison with an empty
// optional is false, "not equal" included. That breaks `ne == !eq`, so those comparisons are
// named methods and functions instead of operator impls.

use crate::intrusive::{
    mode::SafetyMode,
    null::NullValue,
    optional::Optional
};
use std::cmp::Ordering;

/// The empty marker, `std::nullopt`. Equal to every empty optional and less than every
/// present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nullopt;

impl<V, N, M, U, N2, M2> PartialEq<Optional<U, N2, M2>> for Optional<V, N, M>
where V: PartialEq + PartialEq<U>,
      U: PartialEq,
      N: NullValue<V>,
      N2: NullValue<U>,
      M: SafetyMode,
      M2: SafetyMode
{
    fn eq(&self, other: &Optional<U, N2, M2>) -> bool {
        if self.has_value() != other.has_value() { return false; }
        if !self.has_value() { return true; }
        **self == **other
    }

    fn ne(&self, other: &Optional<U, N2, M2>) -> bool {
        if self.has_value() != other.has_value() { return true; }
        if !self.has_value() { return false; }
        **self != **other
    }
}

impl<V, N, M> Eq for Optional<V, N, M>
where V: Eq,
      N: NullValue<V>,
      M: SafetyMode
{}

impl<V, N, M, U, N2, M2> PartialOrd<Optional<U, N2, M2>> for Optional<V, N, M>
where V: PartialOrd<U> + PartialEq,
      U: PartialEq,
      N: NullValue<V>,
      N2: NullValue<U>,
      M: SafetyMode,
      M2: SafetyMode
{
    fn partial_cmp(&self, other: &Optional<U, N2, M2>) -> Option<Ordering> {
        match (self.has_value(), other.has_value()) {
            (true, true) => (**self).partial_cmp(&**other),
            (lhs, rhs) => Some(lhs.cmp(&rhs))
        }
    }

    fn lt(&self, other: &Optional<U, N2, M2>) -> bool {
        if !other.has_value() { return false; }
        if !self.has_value() { return true; }
        **self < **other
    }

    fn le(&self, other: &Optional<U, N2, M2>) -> bool {
        if !self.has_value() { return true; }
        if !other.has_value() { return false; }
        **self <= **other
    }

    fn gt(&self, other: &Optional<U, N2, M2>) -> bool {
        if !self.has_value() { return false; }
        if !other.has_value() { return true; }
        **self > **other
    }

    // empty >= empty holds, matching partial_cmp returning Equal
    fn ge(&self, other: &Optional<U, N2, M2>) -> bool {
        if !other.has_value() { return true; }
        if !self.has_value() { return false; }
        **self >= **other
    }
}

impl<V, N, M> Ord for Optional<V, N, M>
where V: Ord,
      N: NullValue<V>,
      M: SafetyMode
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.has_value(), other.has_value()) {
            (true, true) => (**self).cmp(&**other),
            (lhs, rhs) => lhs.cmp(&rhs)
        }
    }
}

impl<V, N, M> PartialEq<Nullopt> for Optional<V, N, M>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    fn eq(&self, _: &Nullopt) -> bool { !self.has_value() }
}

impl<V, N, M> PartialEq<Optional<V, N, M>> for Nullopt
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    fn eq(&self, other: &Optional<V, N, M>) -> bool { !other.has_value() }
}

impl<V, N, M> PartialOrd<Nullopt> for Optional<V, N, M>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<V, N, M> PartialOrd<Optional<V, N, M>> for Nullopt
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    fn partial_cmp(&self, other: &Optional<V, N, M>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

// optional on the left
impl<V, N, M> Optional<V, N, M>
where V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    pub fn eq_value<U>(&self, value: &U) -> bool
    where V: PartialEq<U>, U: ?Sized
    {
        self.has_value() && **self == *value
    }

    pub fn ne_value<U>(&self, value: &U) -> bool
    where V: PartialEq<U>, U: ?Sized
    {
        self.has_value() && **self != *value
    }

    pub fn lt_value<U>(&self, value: &U) -> bool
    where V: PartialOrd<U>, U: ?Sized
    {
        self.has_value() && **self < *value
    }

    pub fn le_value<U>(&self, value: &U) -> bool
    where V: PartialOrd<U>, U: ?Sized
    {
        self.has_value() && **self <= *value
    }

    pub fn gt_value<U>(&self, value: &U) -> bool
    where V: PartialOrd<U>, U: ?Sized
    {
        self.has_value() && **self > *value
    }

    pub fn ge_value<U>(&self, value: &U) -> bool
    where V: PartialOrd<U>, U: ?Sized
    {
        self.has_value() && **self >= *value
    }
}

// value on the left
pub fn value_eq<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialEq<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value == **opt
}

pub fn value_ne<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialEq<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value != **opt
}

pub fn value_lt<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialOrd<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value < **opt
}

pub fn value_le<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialOrd<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value <= **opt
}

pub fn value_gt<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialOrd<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value > **opt
}

pub fn value_ge<T, V, N, M>(value: &T, opt: &Optional<V, N, M>) -> bool
where T: PartialOrd<V> + ?Sized,
      V: PartialEq,
      N: NullValue<V>,
      M: SafetyMode
{
    opt.has_value() && *value >= **opt
}

#[cfg(test)]
pub mod tests {
    use super::{ value_eq, value_ge, value_gt, value_le, value_lt, value_ne, Nullopt };
    use crate::intrusive::{
        fixtures::{ TwoValues, TwoValuesOptional },
        null::{ Empty, Int },
        optional::Optional
    };
    use std::{
        cmp::Ordering,
        error::Error
    };

    type TestReturn = Result<(), Box<dyn Error>>;

    #[test]
    pub fn equality() -> TestReturn {
        let first = TwoValuesOptional::new((2, 5));
        let second = TwoValuesOptional::new((2, 5));
        let third = TwoValuesOptional::new((3, 5));
        assert!(first == first, "Optional should equal itself");
        assert!(first == second, "(2, 5) should equal (2, 5)");
        assert!(first != third, "(2, 5) should not equal (3, 5)");
        assert!(TwoValuesOptional::none() == TwoValuesOptional::none(), "Two empty optionals should be equal");
        assert!(TwoValuesOptional::none() != first, "Empty and present optionals should differ");
        assert!(!(TwoValuesOptional::none() != TwoValuesOptional::none()), "Two empty optionals aren't unequal");
        Ok(())
    }

    #[test]
    pub fn relational() -> TestReturn {
        let first = TwoValuesOptional::new((2, 5));
        let second = TwoValuesOptional::new((3, 5));
        assert!(first < second, "(2, 5) should be less than (3, 5)");
        assert!(!(first < first), "Optional shouldn't be less than itself");
        assert!(first <= first, "Optional should be less or equal to itself");
        assert!(second > first, "(3, 5) should be greater than (2, 5)");
        assert!(!(second > second), "Optional shouldn't be greater than itself");
        assert!(second >= second, "Optional should be greater or equal to itself");

        let empty = TwoValuesOptional::none();
        assert!(empty < first, "Empty should be less than any value");
        assert!(empty <= first && !(empty >= first), "Empty should be less than any value");
        assert!(first > empty && first >= empty, "Any value should be greater than empty");
        assert!(empty <= empty && empty >= empty, "Empty should be less and greater or equal to empty");
        assert!(!(empty < empty) && !(empty > empty), "Empty shouldn't be strictly ordered against empty");
        // ordering of TwoValues only looks at the first field
        let same_first = TwoValuesOptional::from_list(&[2], 9);
        assert!(first <= same_first && first >= same_first, "(2, 5) and (2, 9) should order as equal");
        assert!(first != same_first, "(2, 5) and (2, 9) should still be unequal");
        Ok(())
    }

    #[test]
    pub fn three_way_across_null_values() -> TestReturn {
        let mut a: Optional<i32, Int<-1>> = Optional::none();
        let mut b: Optional<i32, Int<0>> = Optional::none();
        assert!(a.partial_cmp(&b) == Some(Ordering::Equal), "Two empty optionals should be equal");
        b.emplace(2);
        assert!(a.partial_cmp(&b) == Some(Ordering::Less), "Empty should be less than 2");
        a.emplace(3);
        assert!(a.partial_cmp(&b) == Some(Ordering::Greater), "3 should be greater than 2");

        let x = Optional::<f64, Int<-1>>::new(2.5);
        let y = Optional::<f64, Int<0>>::new(2.5);
        assert!(x == y, "Same values behind different null values should be equal");
        assert!(x.partial_cmp(&Optional::<f64, Int<0>>::new(f64::NAN)) == None, "NaN should be unordered");
        Ok(())
    }

    #[test]
    pub fn total_order() -> TestReturn {
        type OptType = Optional<i32, Int<-1>>;
        let mut values = vec![OptType::new(3), OptType::none(), OptType::new(-7), OptType::new(1)];
        values.sort();
        let expected = [OptType::none(), OptType::new(-7), OptType::new(1), OptType::new(3)];
        assert!(values == expected, "Sorted optionals should put empty first");
        assert!(OptType::none().cmp(&OptType::none()) == Ordering::Equal, "Two empty optionals should be equal");
        Ok(())
    }

    #[test]
    pub fn against_nullopt() -> TestReturn {
        let empty = TwoValuesOptional::default();
        let present = TwoValuesOptional::new((1, 1));
        assert!(empty == Nullopt && Nullopt == empty, "Empty optional should equal Nullopt");
        assert!(present != Nullopt && Nullopt != present, "Present optional shouldn't equal Nullopt");
        assert!(empty.partial_cmp(&Nullopt) == Some(Ordering::Equal), "Empty should order equal to Nullopt");
        assert!(present > Nullopt && Nullopt < present, "Present should be greater than Nullopt");
        assert!(!(empty < Nullopt) && empty <= Nullopt, "Empty shouldn't be less than Nullopt");
        Ok(())
    }

    #[test]
    pub fn against_values() -> TestReturn {
        let empty: Optional<i32, Int<-1>> = Optional::none();
        let three = Optional::<i32, Int<-1>>::new(3);
        // every comparison against an empty optional is false, "not equal" included
        for v in [-1, 0, 3, 9] {
            assert!(!empty.eq_value(&v) && !empty.ne_value(&v), "Empty shouldn't compare to {}", v);
            assert!(!empty.lt_value(&v) && !empty.le_value(&v), "Empty shouldn't compare to {}", v);
            assert!(!empty.gt_value(&v) && !empty.ge_value(&v), "Empty shouldn't compare to {}", v);
            assert!(!value_eq(&v, &empty) && !value_ne(&v, &empty), "{} shouldn't compare to empty", v);
            assert!(!value_lt(&v, &empty) && !value_le(&v, &empty), "{} shouldn't compare to empty", v);
            assert!(!value_gt(&v, &empty) && !value_ge(&v, &empty), "{} shouldn't compare to empty", v);
        }
        assert!(three.eq_value(&3) && !three.ne_value(&3), "3 should equal 3");
        assert!(three.ne_value(&4) && three.lt_value(&4) && three.le_value(&3), "3 should be less than 4");
        assert!(three.gt_value(&2) && three.ge_value(&3), "3 should be greater than 2");
        assert!(value_eq(&3, &three) && value_ne(&4, &three), "3 should equal 3 from the left");
        assert!(value_lt(&2, &three) && value_le(&3, &three), "2 should be less than 3 from the left");
        assert!(value_gt(&4, &three) && value_ge(&3, &three), "4 should be greater than 3 from the left");

        let name = Optional::<String, Empty>::new("abc");
        assert!(name.eq_value("abc") && !name.ne_value("abc"), "String should compare against str");
        assert!(name.lt_value(&"abd".to_string()), "\"abc\" should be less than \"abd\"");
        assert!(value_eq("abc", &name), "str should compare against String");
        let pair = TwoValuesOptional::new((1, 2));
        assert!(pair.eq_value(&TwoValues::new(1, 2)), "(1, 2) should equal (1, 2)");
        Ok(())
    }
}
