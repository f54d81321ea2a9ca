pub mod alphabet;
pub mod convert;

pub use alphabet::Alphabet;
