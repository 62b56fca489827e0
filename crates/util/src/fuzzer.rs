use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex};

use crate::value::{Keyed, Sequence, Value};

const NAME_CHARS: &str = "abcxyzABC_-.0123456789";

/// A fuzzer for generating random property collections.
///
/// Uses the xoshiro256** PRNG for reproducible sequences when seeded.
/// Generated collections mix index keys and named keys, sparse gaps and
/// `undefined` entries, which are the shapes the traversal order rules care
/// about.
///
/// # Examples
///
/// ```
/// use obj_each_util::fuzzer::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
/// let value = fuzzer.random_collection(2);
/// assert!(value.is_collection());
/// ```
pub struct Fuzzer {
    /// Seed of this run; print it to replay a failing case.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Seeded fuzzer, or one seeded from the OS when `seed` is `None`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = match seed {
            Some(seed) => seed,
            None => {
                let mut fresh = [0u8; 32];
                OsRng.fill_bytes(&mut fresh);
                fresh
            }
        };
        Self {
            rng: Arc::new(Mutex::new(Xoshiro256StarStar::from_seed(seed))),
            seed,
        }
    }

    fn with_rng<R>(&self, f: impl FnOnce(&mut Xoshiro256StarStar) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    /// Integer in `min..=max`.
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    /// `true` with the given probability.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability))
    }

    /// One element of a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let at = self.with_rng(|rng| rng.gen_range(0..elements.len()));
        &elements[at]
    }

    /// `len` characters drawn from `alphabet`.
    pub fn random_string(&self, len: usize, alphabet: &str) -> String {
        let alphabet: Vec<char> = alphabet.chars().collect();
        self.with_rng(|rng| {
            std::iter::repeat_with(|| alphabet[rng.gen_range(0..alphabet.len())])
                .take(len)
                .collect()
        })
    }

    /// A random key that is never a canonical array index.
    ///
    /// Digits may appear, but a leading `_` or `-` keeps numeric-looking
    /// names (such as `-1`) out of the index range.
    pub fn random_named_key(&self) -> String {
        let len = self.random_int(0, 4) as usize;
        let prefix = *self.pick(&["_", "-", "k", "Z", ""]);
        let mut key = String::from(prefix);
        key.push_str(&self.random_string(len, NAME_CHARS));
        if crate::coerce::is_array_index(&key) {
            key.insert(0, '_');
        }
        key
    }

    /// A random scalar, `undefined` included.
    pub fn random_scalar(&self) -> Value {
        match self.random_int(0, 5) {
            0 => Value::Undefined,
            1 => Value::Null,
            2 => Value::Bool(self.random_bool(0.5)),
            3 => Value::from(self.random_int(-100, 100)),
            4 => Value::from(self.random_int(-1000, 1000) as f64 / 8.0),
            _ => Value::String(self.random_string(3, NAME_CHARS)),
        }
    }

    /// A random value that nests collections up to `depth` levels.
    pub fn random_value(&self, depth: usize) -> Value {
        if depth > 0 && self.random_bool(0.25) {
            self.random_collection(depth - 1)
        } else {
            self.random_scalar()
        }
    }

    /// A random sequence with gaps and named properties.
    pub fn random_sequence(&self, depth: usize) -> Sequence {
        let len = self.random_int(0, 8) as usize;
        let mut seq = Sequence::new();
        for _ in 0..len {
            if self.random_bool(0.15) {
                seq.push_hole();
            } else {
                seq.push(self.random_value(depth));
            }
        }
        for _ in 0..self.random_int(0, 3) {
            let key = self.random_named_key();
            seq.set_named(key, self.random_value(depth));
        }
        seq
    }

    /// A random keyed map mixing index keys and named keys.
    pub fn random_keyed(&self, depth: usize) -> Keyed {
        let mut map = Keyed::new();
        for _ in 0..self.random_int(0, 8) {
            let key = if self.random_bool(0.5) {
                self.random_int(0, 20).to_string()
            } else {
                self.random_named_key()
            };
            map.insert(key, self.random_value(depth));
        }
        map
    }

    /// A random sequence or keyed map.
    pub fn random_collection(&self, depth: usize) -> Value {
        if self.random_bool(0.5) {
            Value::Sequence(self.random_sequence(depth))
        } else {
            Value::Keyed(self.random_keyed(depth))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    #[test]
    fn test_random_int_stays_in_range() {
        let fuzzer = Fuzzer::new(None);
        assert!((0..200).map(|_| fuzzer.random_int(-3, 3)).all(|n| (-3..=3).contains(&n)));
    }

    #[test]
    fn test_same_seed_same_collections() {
        let left = Fuzzer::new(Some([9u8; 32]));
        let right = Fuzzer::new(Some(left.seed));
        for _ in 0..20 {
            assert_eq!(left.random_collection(2), right.random_collection(2));
        }
    }

    #[test]
    fn test_named_keys_are_never_indices() {
        let fuzzer = Fuzzer::new(None);
        for _ in 0..500 {
            let key = fuzzer.random_named_key();
            assert!(!Key::parse(&key).is_index(), "{key:?} parsed as an index");
        }
    }

    #[test]
    fn test_random_sequence_keeps_named_out_of_slots() {
        let fuzzer = Fuzzer::new(Some([3u8; 32]));
        for _ in 0..100 {
            let seq = fuzzer.random_sequence(1);
            assert!(seq.named().keys().all(|k| !Key::parse(k).is_index()));
            assert!(seq.own_len() <= seq.len() + seq.named().len());
        }
    }
}
