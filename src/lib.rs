//! Coverage-guaranteed password generation.
//!
//! [`pass::charset::build`] turns class flags into a [`pass::ClassSet`] and
//! [`pass::Pool`]; [`pass::generate`] draws a password that contains at least one
//! character from every enabled class, using only the OS CSPRNG from [`rand`].

pub mod pass;
pub mod rand;
