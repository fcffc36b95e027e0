//! The fixed hashing contract for probe-table keys.
//!
//! Hashability is a capability, not an inheritance relationship: any type
//! that can produce a `u64` digest and compare for equality can be a key.
//! The digests are fixed by contract so that test vectors are portable:
//!
//! - byte and character sequences: polynomial rolling hash with multiplier
//!   1_313_131, seeded at 0, accumulated left to right over raw bytes;
//! - integers: the value itself (two's complement for signed types);
//! - floats: the IEEE-754 bit pattern;
//! - `char`: the scalar value.

/// Multiplier for the polynomial rolling hash over byte sequences.
const SEQUENCE_SEED: u64 = 1_313_131;

/// A key digest for the probe tables.
pub trait ProbeHash {
    /// Produces the digest for this value.
    fn probe_hash(&self) -> u64;
}

/// Folds raw bytes left to right: `hash = hash * seed + byte`.
fn hash_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |hash, &byte| {
        hash.wrapping_mul(SEQUENCE_SEED).wrapping_add(u64::from(byte))
    })
}

impl ProbeHash for str {
    fn probe_hash(&self) -> u64 {
        hash_bytes(self.as_bytes())
    }
}

impl ProbeHash for String {
    fn probe_hash(&self) -> u64 {
        hash_bytes(self.as_bytes())
    }
}

impl ProbeHash for [u8] {
    fn probe_hash(&self) -> u64 {
        hash_bytes(self)
    }
}

impl<T: ProbeHash + ?Sized> ProbeHash for &T {
    fn probe_hash(&self) -> u64 {
        (**self).probe_hash()
    }
}

macro_rules! identity_hash {
    ($($ty:ty),*) => {
        $(
            impl ProbeHash for $ty {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                fn probe_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

identity_hash!(u8, u16, u32, u128, usize, i8, i16, i32, i64, i128, isize);

impl ProbeHash for u64 {
    fn probe_hash(&self) -> u64 {
        *self
    }
}

impl ProbeHash for char {
    fn probe_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl ProbeHash for f32 {
    fn probe_hash(&self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl ProbeHash for f64 {
    fn probe_hash(&self) -> u64 {
        self.to_bits()
    }
}
