use crate::error::{TpResult, TypePassError};
use crate::keyboard::DistanceMatrix;
use tracing::debug;

/// Letters are addressed by their offset from `'a'`, padded to 32 slots per row.
pub const ALPHABET_STRIDE: usize = 32;
pub const TABLE_SIZE: usize = ALPHABET_STRIDE * ALPHABET_STRIDE;

/// Marks a pair involving a letter the keyboard graph never registered.
pub const UNREGISTERED: u32 = u32::MAX;

/// Flat index of a letter pair: `(a << 5) + b` over offsets from `'a'`.
///
/// Returns `None` for bytes outside the 32-slot window (digits, space, upper case).
#[inline(always)]
pub fn bigram_index(a: u8, b: u8) -> Option<usize> {
    let a = a.wrapping_sub(b'a') as usize;
    let b = b.wrapping_sub(b'a') as usize;
    if a < ALPHABET_STRIDE && b < ALPHABET_STRIDE {
        Some((a << 5) + b)
    } else {
        None
    }
}

/// Dense letter-pair travel costs, flattened from a [`DistanceMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigramCostTable {
    costs: Vec<u32>,
}

impl BigramCostTable {
    pub fn from_distances(matrix: &DistanceMatrix) -> TpResult<Self> {
        let mut costs = vec![UNREGISTERED; TABLE_SIZE];

        for (a, b, dist) in matrix.iter() {
            if !a.is_ascii_lowercase() || !b.is_ascii_lowercase() {
                return Err(TypePassError::Validation(format!(
                    "Key '{}' is not a lowercase letter",
                    if a.is_ascii_lowercase() { b } else { a }
                )));
            }
            if dist == UNREGISTERED {
                return Err(TypePassError::Validation(format!(
                    "Distance {}->{} collides with the unregistered marker",
                    a, b
                )));
            }
            if let Some(idx) = bigram_index(a as u8, b as u8) {
                costs[idx] = dist;
            }
        }

        debug!("Flattened {} letters into bigram table", matrix.len());
        Ok(Self { costs })
    }

    /// Rebuilds a table from its flat form (see [`BigramCostTable::as_slice`]).
    ///
    /// The result must be a table a keyboard graph could have produced: a
    /// letter is registered when its diagonal entry is set, every pair of
    /// registered letters has a symmetric cost, diagonals are 0, and pairs with
    /// an unregistered letter hold [`UNREGISTERED`].
    pub fn from_flat(costs: Vec<u32>) -> TpResult<Self> {
        if costs.len() != TABLE_SIZE {
            return Err(TypePassError::Validation(format!(
                "Bigram table must hold {} entries, found {}",
                TABLE_SIZE,
                costs.len()
            )));
        }
        let table = Self { costs };
        table.check_consistency()?;
        Ok(table)
    }

    fn check_consistency(&self) -> TpResult<()> {
        let slots = || (0..ALPHABET_STRIDE as u8).map(|offset| b'a' + offset);

        if let Some(stray) = slots().find(|&b| !b.is_ascii_lowercase() && self.is_registered(b)) {
            return Err(TypePassError::Validation(format!(
                "Bigram table registers slot {}, which is not a letter",
                stray - b'a'
            )));
        }

        for a in slots() {
            for b in slots() {
                let forward = self.cost(a, b);
                let registered = self.is_registered(a) && self.is_registered(b);
                let problem = match forward {
                    None if registered => "has no cost",
                    Some(_) if !registered => "involves an unregistered letter",
                    Some(c) if a == b && c != 0 => "must cost 0",
                    Some(_) if forward != self.cost(b, a) => "is not symmetric",
                    _ => continue,
                };
                return Err(TypePassError::Validation(format!(
                    "Bigram {}->{} {}",
                    char::from(a),
                    char::from(b),
                    problem
                )));
            }
        }
        Ok(())
    }

    /// Travel cost from `a` to `b`, or `None` when either is not a registered letter.
    #[inline(always)]
    pub fn cost(&self, a: u8, b: u8) -> Option<u32> {
        let c = self.costs[bigram_index(a, b)?];
        (c != UNREGISTERED).then_some(c)
    }

    pub fn cost_chars(&self, a: char, b: char) -> Option<u32> {
        if !a.is_ascii() || !b.is_ascii() {
            return None;
        }
        self.cost(a as u8, b as u8)
    }

    pub fn is_registered(&self, letter: u8) -> bool {
        self.cost(letter, letter).is_some()
    }

    pub fn letters(&self) -> Vec<char> {
        (0..ALPHABET_STRIDE as u8)
            .map(|offset| b'a' + offset)
            .filter(|&b| self.is_registered(b))
            .map(char::from)
            .collect()
    }

    pub fn max_cost(&self) -> u32 {
        self.costs
            .iter()
            .copied()
            .filter(|&c| c != UNREGISTERED)
            .max()
            .unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.costs
    }
}
