//! Password generation with guaranteed class coverage.

use zeroize::Zeroize;

use super::charset::{ClassSet, Pool};
use super::{GenerateError, Password};
use crate::rand::{EntropySource, SecureRng};

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 65_536;

/// Generate one password of exactly `length` characters containing at least
/// one character from every class in `classes`.
///
/// Fails with [`GenerateError::EmptyPool`] before anything else is checked,
/// then with [`GenerateError::InsufficientLength`] if the mandatory characters
/// cannot fit, and with [`GenerateError::TooLong`] above [`MAX_LENGTH`].
pub fn generate(length: usize, classes: &ClassSet, pool: &Pool) -> Result<Password, GenerateError> {
    let mut rng = SecureRng::new();
    generate_with(&mut rng, length, classes, pool)
}

/// Same as [`generate`], drawing from a caller-owned generator.
pub fn generate_with<S: EntropySource>(
    rng: &mut SecureRng<S>,
    length: usize,
    classes: &ClassSet,
    pool: &Pool,
) -> Result<Password, GenerateError> {
    check(length, classes, pool)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(length)
        .map_err(|_| GenerateError::TooLong {
            length,
            max: MAX_LENGTH,
        })?;
    let result = fill(rng, length, classes, pool, &mut buf);
    let password = result.map(|()| Password::from_ascii(&buf));
    buf.zeroize();
    password
}

/// Generate `count` passwords sharing one generator. Stops at the first error.
pub fn generate_batch(
    count: usize,
    length: usize,
    classes: &ClassSet,
    pool: &Pool,
) -> Result<Vec<Password>, GenerateError> {
    check(length, classes, pool)?;

    let mut rng = SecureRng::new();
    let passwords = (0..count)
        .map(|_| generate_with(&mut rng, length, classes, pool))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("generated {} password(s) of length {length}", passwords.len());
    Ok(passwords)
}

fn check(length: usize, classes: &ClassSet, pool: &Pool) -> Result<(), GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }
    if length < classes.len() {
        return Err(GenerateError::InsufficientLength {
            length,
            required: classes.len(),
        });
    }
    if length > MAX_LENGTH {
        return Err(GenerateError::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

fn fill<S: EntropySource>(
    rng: &mut SecureRng<S>,
    length: usize,
    classes: &ClassSet,
    pool: &Pool,
    buf: &mut Vec<u8>,
) -> Result<(), GenerateError> {
    // One mandatory character per class, in class order
    for class in classes {
        buf.push(rng.choose(class.chars())?);
    }

    let remaining = length - classes.len();
    for _ in 0..remaining {
        buf.push(rng.choose(pool.as_bytes())?);
    }

    // Mandatory characters must not sit predictably at the front
    rng.shuffle(buf.as_mut_slice())?;
    Ok(())
}
