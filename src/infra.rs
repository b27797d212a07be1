#[cfg(feature = "arbitrary")]
pub mod arbitrary;
pub mod export;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
