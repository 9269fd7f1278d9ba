//! The registry of recurrence algorithms that drive the grid.  Every algorithm is a pure function from the current
//! state to the next one paired with the range that state should be normalized against.  Nothing in here holds
//! mutable data; the registry itself is a static table built at compile time and shared by every caller.
//!
//! The algorithms deliberately work at different bit widths (an LCG over a tiny modulus, a 31-bit Lehmer generator,
//! a 32-bit xorshift and a 64-bit multiply-with-carry) and that difference is what makes their grids look different,
//! so each one does its own fixed-width arithmetic rather than sharing a common integer type.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::seed::Seed;
use crate::util::{hex_string, Color};

pub const LCG_MULTIPLIER: u64 = 9301;
pub const LCG_INCREMENT: u64 = 49297;
pub const LCG_MODULUS: u64 = 233_280;

pub const PARK_MILLER_MULTIPLIER: u64 = 16807;
/// 2^31 - 1
pub const PARK_MILLER_MODULUS: u64 = 2_147_483_647;

pub const XORSHIFT_MASK: u64 = 0xFFFF_FFFF;

pub const MWC_MULTIPLIER: u64 = 4_294_957_665;
pub const MWC_MASK: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Anything that can advance a generator state by one step.
pub trait Generator {
    /// Returns `(next_state, range)`.  Must be total: every `u64` is a valid input.
    fn step(&self, state: u64) -> (u64, u64);

    /// The state a run starts from.  Defaults to the seed's low 64 bits in two's complement.
    fn initial_state(&self, seed: Seed) -> u64 {
        seed.initial_state()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    LinearCongruential,
    ParkMiller,
    Xorshift,
    MultiplyWithCarry,
}

static REGISTRY: [Algorithm; 4] = [
    Algorithm::LinearCongruential,
    Algorithm::ParkMiller,
    Algorithm::Xorshift,
    Algorithm::MultiplyWithCarry,
];

/// Returns every registered algorithm in declaration order.
pub fn list_algorithms() -> &'static [Algorithm] {
    &REGISTRY
}

/// Looks up an algorithm by its display name, its short key or one of its aliases.  Case and surrounding whitespace
/// are ignored.
pub fn get_algorithm(name: &str) -> Result<Algorithm> {
    let needle = name.trim();
    REGISTRY
        .iter()
        .copied()
        .find(|algo| {
            algo.name().eq_ignore_ascii_case(needle)
                || algo.key().eq_ignore_ascii_case(needle)
                || algo.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(needle))
        })
        .ok_or_else(|| GridError::NotFound(name.to_owned()))
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LinearCongruential => "Linear Congruential (LCG)",
            Algorithm::ParkMiller => "Park-Miller",
            Algorithm::Xorshift => "Xorshift",
            Algorithm::MultiplyWithCarry => "Multiply-with-Carry",
        }
    }

    /// Short identifier used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::LinearCongruential => "lcg",
            Algorithm::ParkMiller => "park-miller",
            Algorithm::Xorshift => "xorshift",
            Algorithm::MultiplyWithCarry => "mwc",
        }
    }

    /// Other names the algorithm is looked up by.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Algorithm::LinearCongruential => &["Linear Congruential"],
            _ => &[],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::LinearCongruential => "Classic PRNG used in many systems",
            Algorithm::ParkMiller => "Minimal standard, good statistical properties",
            Algorithm::Xorshift => "Fast bitwise operation-based generator",
            Algorithm::MultiplyWithCarry => "High-quality long-period generator",
        }
    }

    /// Accent color blended into the grayscale of every cell this algorithm produces.
    pub fn tint(self) -> Color {
        match self {
            Algorithm::LinearCongruential => Color::new(0x00, 0xd4, 0xff),
            Algorithm::ParkMiller => Color::new(0x00, 0xff, 0x88),
            Algorithm::Xorshift => Color::new(0xff, 0xaa, 0x00),
            Algorithm::MultiplyWithCarry => Color::new(0xff, 0x44, 0x66),
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: self.key(),
            name: self.name(),
            description: self.description(),
            tint: hex_string(self.tint()),
        }
    }
}

impl Generator for Algorithm {
    fn step(&self, state: u64) -> (u64, u64) {
        match *self {
            Algorithm::LinearCongruential => (lcg(state), LCG_MODULUS),
            Algorithm::ParkMiller => (park_miller(state), PARK_MILLER_MODULUS),
            Algorithm::Xorshift => (xorshift(state), XORSHIFT_MASK),
            Algorithm::MultiplyWithCarry => (multiply_with_carry(state), MWC_MASK),
        }
    }

    /// The modular generators start from the seed's residue, so a negative seed lands where it would if the
    /// recurrence were run on the signed integer itself.  The bitwise generators start from its two's complement.
    fn initial_state(&self, seed: Seed) -> u64 {
        match *self {
            Algorithm::LinearCongruential => seed.rem_euclid(LCG_MODULUS),
            Algorithm::ParkMiller => seed.rem_euclid(PARK_MILLER_MODULUS),
            Algorithm::Xorshift | Algorithm::MultiplyWithCarry => seed.initial_state(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        get_algorithm(s)
    }
}

/// Presentation-facing view of an algorithm, as handed to whatever lists the choices to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `#rrggbb`
    pub tint: String,
}

/// `s' = (s * 9301 + 49297) mod 233280`
///
/// The state is reduced before multiplying.  That gives the same residue as the unreduced product would and keeps
/// every intermediate below 2^32, so seeds anywhere in the `u64` range are fine.
pub fn lcg(state: u64) -> u64 {
    ((state % LCG_MODULUS) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS
}

/// Lehmer "minimal standard" generator: `s' = (s * 16807) mod (2^31 - 1)`.
///
/// Reduced first for the same reason as `lcg`; `(2^31 - 2) * 16807` fits comfortably in a `u64`.
pub fn park_miller(state: u64) -> u64 {
    ((state % PARK_MILLER_MODULUS) * PARK_MILLER_MULTIPLIER) % PARK_MILLER_MODULUS
}

/// 32-bit xorshift with the (13, 17, 5) triple.
///
/// Only the left shifts are masked to 32 bits, so on the first step of a state wider than that the right shift
/// still folds bits 32..49 down into the result.  The output is always masked to 32 bits.
///
/// Zero is a fixed point: a zero seed produces zero forever.  That's kept as-is since it's a property of the
/// algorithm rather than something the registry should paper over.
pub fn xorshift(state: u64) -> u64 {
    let mut s = state;
    s ^= (s << 13) & XORSHIFT_MASK;
    s ^= s >> 17;
    s ^= (s << 5) & XORSHIFT_MASK;
    s & XORSHIFT_MASK
}

/// Multiply-with-carry with lag 1.  The high half of the state is the carry and the low half is the previous value.
pub fn multiply_with_carry(state: u64) -> u64 {
    let carry = state >> 32;
    let x = state & 0xFFFF_FFFF;
    MWC_MULTIPLIER.wrapping_mul(x).wrapping_add(carry)
}
