// Hashing. An empty optional hashes to 0 no matter which null value it carries, a present one
// hashes like its value.

use crate::intrusive::{
    mode::SafetyMode,
    null::NullValue,
    optional::Optional
};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{ Hash, Hasher }
};

const FNV_OFFSET_BASIS: u64 = 0xCBF29CE484222325;
const FNV_PRIME: u64 = 0x100000001b3;

pub struct FNV1A(u64);

pub trait HasherInit {
    fn new() -> Self where Self: Sized;
    fn get_hash<H>(value: &H) -> u64 where H: Hash + ?Sized;
}

impl HasherInit for FNV1A {
    fn new() -> Self { Self(FNV_OFFSET_BASIS) }
    fn get_hash<H>(value: &H) -> u64 where H: Hash + ?Sized {
        let mut fnv1a = Self::new();
        value.hash(&mut fnv1a);
        fnv1a.finish()
    }
}

impl Hasher for FNV1A {
    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 = (self.0 ^ *b as u64).overflowing_mul(FNV_PRIME).0
        }
    }
    fn finish(&self) -> u64 { self.0 }
}

impl HasherInit for DefaultHasher {
    fn new() -> Self { DefaultHasher::new() }
    fn get_hash<H>(value: &H) -> u64 where H: Hash + ?Sized {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

impl<V, N, M> Hash for Optional<V, N, M>
where V: PartialEq + Hash,
      N: NullValue<V>,
      M: SafetyMode
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.has_value() {
            true => (**self).hash(state),
            false => state.write_u64(0)
        }
    }
}

impl<V, N, M> Optional<V, N, M>
where V: PartialEq + Hash,
      N: NullValue<V>,
      M: SafetyMode
{
    /// The `std::hash<optional>` value: 0 when empty, otherwise the hash of the value.
    pub fn hash_code<H>(&self) -> u64
    where H: HasherInit
    {
        match self.has_value() {
            true => H::get_hash(&**self),
            false => 0
        }
    }
}
