//! Seeds and the text-parsing fallback.
//!
//! A seed is any integer from `i64::MIN` up to `u64::MAX`.  Each generator decides which state a seed starts from:
//! the modular ones take its residue ([`Seed::rem_euclid`]) and the bitwise ones its low 64 bits in two's complement
//! ([`Seed::initial_state`]), so for those `-1` starts from `0xFFFF_FFFF_FFFF_FFFF`.  Text that doesn't parse as such an integer isn't an
//! error: [`Seed::resolve`] draws a random replacement instead and says so, so the caller can show the seed that was
//! actually used.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{GridError, Result};

/// Inclusive bounds for randomly drawn seeds.
pub const RANDOM_SEED_MIN: i128 = 1;
pub const RANDOM_SEED_MAX: i128 = 999_999;

const SEED_MIN: i128 = i64::MIN as i128;
const SEED_MAX: i128 = u64::MAX as i128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(i128);

impl Seed {
    /// Draws a fresh seed in `1..=999999`.
    pub fn random() -> Seed {
        Seed::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Seed {
        Seed(rng.gen_range(RANDOM_SEED_MIN..=RANDOM_SEED_MAX))
    }

    /// Parses `text`, falling back to a random seed if it isn't a valid integer.
    pub fn resolve(text: &str) -> ResolvedSeed {
        Seed::resolve_with(text, &mut rand::thread_rng())
    }

    pub fn resolve_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> ResolvedSeed {
        match text.parse::<Seed>() {
            Ok(seed) => ResolvedSeed { seed, substituted: false },
            Err(err) => {
                let seed = Seed::random_with(rng);
                debug!(%err, %seed, "substituting random seed");
                ResolvedSeed { seed, substituted: true }
            },
        }
    }

    pub fn value(self) -> i128 {
        self.0
    }

    /// The seed's low 64 bits in two's complement.
    pub fn initial_state(self) -> u64 {
        // truncation keeps the low 64 bits, which is the two's complement form for negative seeds
        self.0 as u64
    }

    /// The seed's non-negative residue modulo `modulus`, taken on the full signed value.
    pub fn rem_euclid(self, modulus: u64) -> u64 {
        debug_assert!(modulus > 0);
        // the residue is below `modulus`, so it fits back into a `u64`
        self.0.rem_euclid(i128::from(modulus)) as u64
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Seed {
        Seed(i128::from(value))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Seed {
        Seed(i128::from(value))
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Seed {
        Seed(i128::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Seed {
        Seed(i128::from(value))
    }
}

impl TryFrom<i128> for Seed {
    type Error = GridError;

    fn try_from(value: i128) -> Result<Seed> {
        if (SEED_MIN..=SEED_MAX).contains(&value) {
            Ok(Seed(value))
        } else {
            Err(GridError::InvalidSeed(value.to_string()))
        }
    }
}

impl From<Seed> for i128 {
    fn from(seed: Seed) -> i128 {
        seed.0
    }
}

impl FromStr for Seed {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Seed> {
        let trimmed = s.trim();
        let value: i128 = trimmed.parse().map_err(|_| GridError::InvalidSeed(s.to_owned()))?;
        Seed::try_from(value).map_err(|_| GridError::InvalidSeed(s.to_owned()))
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match i64::try_from(self.0) {
            Ok(signed) => serializer.serialize_i64(signed),
            // anything above `i64::MAX` is still within `u64`
            Err(_) => serializer.serialize_u64(self.0 as u64),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The seed a run actually used, and whether it had to be drawn at random because the input didn't parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedSeed {
    pub seed: Seed,
    pub substituted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_signed_and_unsigned() {
        assert_eq!("42".parse::<Seed>().unwrap(), Seed::from(42u64));
        assert_eq!(" -7 ".parse::<Seed>().unwrap(), Seed::from(-7i64));
        assert_eq!("0".parse::<Seed>().unwrap().initial_state(), 0);
        assert_eq!("18446744073709551615".parse::<Seed>().unwrap().initial_state(), u64::MAX);
        assert_eq!("-9223372036854775808".parse::<Seed>().unwrap().initial_state(), 1 << 63);
    }

    #[test]
    fn negative_seeds_use_twos_complement() {
        assert_eq!(Seed::from(-1i64).initial_state(), u64::MAX);
        assert_eq!(Seed::from(-2i32).initial_state(), u64::MAX - 1);
    }

    #[test]
    fn residue_is_taken_on_the_signed_value() {
        assert_eq!(Seed::from(-1i64).rem_euclid(233_280), 233_279);
        assert_eq!(Seed::from(-233_280i64).rem_euclid(233_280), 0);
        assert_eq!(Seed::from(7u64).rem_euclid(5), 2);
        assert_eq!(Seed::from(u64::MAX).rem_euclid(2_147_483_647), u64::MAX % 2_147_483_647);
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert!(matches!("abc".parse::<Seed>(), Err(GridError::InvalidSeed(_))));
        assert!(matches!("".parse::<Seed>(), Err(GridError::InvalidSeed(_))));
        assert!(matches!("1.5".parse::<Seed>(), Err(GridError::InvalidSeed(_))));
        assert!("18446744073709551616".parse::<Seed>().is_err());
        assert!("-9223372036854775809".parse::<Seed>().is_err());
    }

    #[test]
    fn random_seeds_stay_in_range() {
        for _ in 0..100 {
            let seed = Seed::random();
            assert!((RANDOM_SEED_MIN..=RANDOM_SEED_MAX).contains(&seed.value()));
            assert_eq!(seed.initial_state(), seed.value() as u64);
        }
    }

    #[test]
    fn resolve_keeps_valid_seed() {
        let resolved = Seed::resolve("1234");
        assert_eq!(resolved, ResolvedSeed { seed: Seed::from(1234u64), substituted: false });
    }

    #[test]
    fn resolve_substitutes_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let resolved = Seed::resolve_with("not a number", &mut rng);
            assert!(resolved.substituted);
            assert!((RANDOM_SEED_MIN..=RANDOM_SEED_MAX).contains(&resolved.seed.value()));
        }
    }

    #[test]
    fn resolve_substitution_is_reproducible_with_a_seeded_rng() {
        let a = Seed::resolve_with("?", &mut StdRng::seed_from_u64(99));
        let b = Seed::resolve_with("?", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_a_plain_integer() {
        assert_eq!(serde_json::to_string(&Seed::from(-3i64)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Seed::from(u64::MAX)).unwrap(), "18446744073709551615");
    }
}
