//! Password generation from personal details.
//!
//! A password is assembled from short identity fragments (name prefixes,
//! birth date parts, a lucky number) plus a run of random digits and a run of
//! random symbols. The fragments are shuffled as whole units and the result is
//! cut or digit-padded to the requested length.
//!
//! ```
//! use persopass::pass::{BirthDate, GeneratorConfig, IdentityInfo, Strength, generate};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let identity = IdentityInfo::default()
//!     .with_first_name("Ann")
//!     .with_last_name("Lee")
//!     .with_birth_date(BirthDate::new("1990", "05", "02"))
//!     .with_lucky_number("7");
//! let config = GeneratorConfig::new(12, Strength::Normal, identity).unwrap();
//! let password = generate(&config, &mut StdRng::seed_from_u64(1));
//! assert_eq!(password.chars().count(), 12);
//! ```

pub mod entropy;
pub mod error;
pub mod pass;
pub mod settings;

pub use error::{Error, Result};
