use std::{
    error::Error,
    fmt::Display
};

// std::bad_optional_access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadOptionalAccess;

impl Display for BadOptionalAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to access the value of an empty Optional")
    }
}

impl Error for BadOptionalAccess {}

/// Returned by [`Safe`](super::mode::Safe) optionals when an operation that is meant to store a
/// value stored the null value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnintentionallyNull;

impl Display for UnintentionallyNull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The value of this Optional was set to the declared null value unintentionally")
    }
}

impl Error for UnintentionallyNull {}
