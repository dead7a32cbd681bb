pub mod intrusive {
    pub mod cmp;
    pub mod error;
    #[cfg(test)]
    pub mod fixtures;
    pub mod hash;
    pub mod mode;
    pub mod null;
    pub mod optional;
}
