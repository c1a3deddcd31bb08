use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::matrices::{Matrix, TransitionKind};

/// Rolls a turn can still have left in the standard game.
pub const DEFAULT_MAX_ROLLS: u32 = 3;

static SHARED: Lazy<MatrixPowerCache> = Lazy::new(MatrixPowerCache::default);

/// Powers of the transition matrices, filled once at construction.
///
/// The table is never written after `new`, so one instance can be shared freely.
/// Exponents past `max_rolls` are still answered, just computed on each call.
#[derive(Clone, Debug)]
pub struct MatrixPowerCache {
    powers: FxHashMap<(TransitionKind, u32), Matrix>,
}

impl MatrixPowerCache {
    pub fn new(max_rolls: u32) -> Self {
        let mut powers = FxHashMap::default();
        for kind in TransitionKind::ALL {
            let base = kind.matrix();
            let mut acc = Matrix::identity(base.dim());
            for n in 0..=max_rolls {
                powers.insert((kind, n), acc);
                acc = acc * base;
            }
        }
        debug!(max_rolls, entries = powers.len(), "precomputed transition matrix powers");
        MatrixPowerCache { powers }
    }

    /// Process-wide instance covering the standard three rolls.
    pub fn shared() -> &'static MatrixPowerCache {
        &SHARED
    }

    /// `kind`'s matrix raised to `n`; `n == 0` gives the identity.
    pub fn power(&self, kind: TransitionKind, n: u32) -> Matrix {
        match self.powers.get(&(kind, n)) {
            Some(m) => *m,
            None => {
                debug!(?kind, n, "matrix power outside cached range");
                kind.matrix().pow(n)
            }
        }
    }
}

impl Default for MatrixPowerCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROLLS)
    }
}
