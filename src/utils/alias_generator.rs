//! Alias generation and validation utilities.
//!
//! Provides uniform random alias generation over the 62-symbol alphanumeric
//! alphabet and validation for caller-supplied aliases.

use crate::domain::StoreError;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;

/// Default length of generated aliases (62^6, about 56.8 billion values).
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Maximum length accepted for caller-supplied aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow service routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Random alias generator backed by an injected random source.
///
/// The generator never consults storage. Collisions are reported by the
/// store's uniqueness check, not prevented here.
///
/// The source sits behind a mutex so one generator can be shared across
/// request tasks. It is statistically uniform, not cryptographically secure.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::AliasGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let generator = AliasGenerator::with_rng(StdRng::seed_from_u64(7));
/// let alias = generator.generate(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub struct AliasGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl AliasGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: RngCore> AliasGenerator<R> {
    /// Creates a generator over the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Produces exactly `length` characters from `[a-zA-Z0-9]`.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }
}

impl Default for AliasGenerator<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// Aliases are case-sensitive: `Promo` and `promo` are different aliases.
///
/// # Errors
///
/// Returns [`StoreError::InvalidInput`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), StoreError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(StoreError::InvalidInput(format!(
            "alias must be 1-{MAX_ALIAS_LENGTH} characters"
        )));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::InvalidInput(
            "alias can only contain letters, digits, hyphens and underscores".to_string(),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(StoreError::InvalidInput(format!(
            "alias '{alias}' is reserved"
        )));
    }

    Ok(())
}
