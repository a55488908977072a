//! Password composition and output.

pub mod charset;
mod form;
mod generate;
mod identity;
pub mod output;
mod strength;

pub use form::{FormInput, MAX_LENGTH, MIN_LENGTH};
pub use generate::{
    Composition, GeneratorConfig, PREFIX_LEN, compose, fragments, generate, generate_batch,
    natural_length, normalize_length,
};
pub use identity::{BirthDate, IdentityInfo};
pub use strength::Strength;
