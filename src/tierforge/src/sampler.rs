//! Weighted sampling
//!
//! Randomness is always injected as a `FnMut() -> f64` yielding values in
//! `[0, 1)`. Nothing in this crate reaches for a global RNG.

use crate::catalog::Trait;
use crate::error::RarityError;
use rand::Rng;

/// Anything carrying a relative weight
pub trait Weighted {
    fn weight(&self) -> f64;
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

impl Weighted for Trait {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Adapt a `rand` generator into a unit-interval source
pub fn unit_source<R: Rng>(rng: &mut R) -> impl FnMut() -> f64 + '_ {
    move || rng.gen::<f64>()
}

/// Draw one index from `options`, proportional to weight.
///
/// Walks the list subtracting weights from `rng() * total` and returns the
/// first option that brings the remainder to zero or below. If float drift
/// exhausts the list without a hit, the last option is returned.
pub fn sample<W, F>(options: &[W], rng: &mut F) -> Result<usize, RarityError>
where
    W: Weighted,
    F: FnMut() -> f64 + ?Sized,
{
    if options.is_empty() {
        return Err(RarityError::EmptyOptions);
    }

    let total: f64 = options.iter().map(Weighted::weight).sum();
    if total.is_nan() || total <= 0.0 {
        return Err(RarityError::ZeroWeight { total });
    }

    let mut remainder = rng() * total;
    for (i, option) in options.iter().enumerate() {
        remainder -= option.weight();
        if remainder <= 0.0 {
            return Ok(i);
        }
    }

    tracing::debug!(remainder, total, "sampler exhausted options; using last");
    Ok(options.len() - 1)
}

/// Convenience wrapper returning the chosen option itself
pub fn sample_ref<'a, W, F>(options: &'a [W], rng: &mut F) -> Result<&'a W, RarityError>
where
    W: Weighted,
    F: FnMut() -> f64 + ?Sized,
{
    sample(options, rng).map(|i| &options[i])
}
