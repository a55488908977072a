//! Interactive password form.

mod form;
mod input;
mod text;

pub use form::run;
