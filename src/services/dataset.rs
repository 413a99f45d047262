//! Synthetic dataset generation.
//!
//! Wraps the `fake` crate behind a seeded RNG so repeated runs against an
//! empty environment produce identical records.

use fake::faker::boolean::en::Boolean;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Password};
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::config::{
    CHANCE_DISABLED, CHANCE_EMAIL_VERIFIED, DEFAULT_RNG_SEED, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH, PHONE_FORMAT, XP_CEILING,
};
use crate::domain::AuthUserRecord;
use crate::errors::{SeedError, SeedResult};

/// E.164: a plus sign, a non-zero lead digit, 8 to 15 digits total.
static E164: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("valid E.164 pattern"));

/// Produces auth users, company names and experience points from one
/// reproducible RNG stream.
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_RNG_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce `quantity` auth users with independently faked fields.
    pub fn generate_auth_users(&mut self, quantity: usize) -> SeedResult<Vec<AuthUserRecord>> {
        (0..quantity).map(|_| self.auth_user()).collect()
    }

    /// Produce `quantity` plausible company names.
    pub fn generate_company_names(&mut self, quantity: usize) -> Vec<String> {
        (0..quantity)
            .map(|_| CompanyName().fake_with_rng(&mut self.rng))
            .collect()
    }

    /// Non-negative starting experience points for a store user.
    pub fn random_xp(&mut self) -> u32 {
        self.rng.gen_range(0..XP_CEILING)
    }

    fn auth_user(&mut self) -> SeedResult<AuthUserRecord> {
        let email: String = FreeEmail().fake_with_rng(&mut self.rng);
        let email_verified: bool = Boolean(CHANCE_EMAIL_VERIFIED).fake_with_rng(&mut self.rng);
        let phone_number = self.phone_number()?;
        let password: String =
            Password(MIN_PASSWORD_LENGTH..MAX_PASSWORD_LENGTH).fake_with_rng(&mut self.rng);
        let display_name: String = Name().fake_with_rng(&mut self.rng);
        let photo_url = format!("https://picsum.photos/seed/{}/640/480", self.rng.gen::<u32>());
        let disabled: bool = Boolean(CHANCE_DISABLED).fake_with_rng(&mut self.rng);

        Ok(AuthUserRecord {
            email,
            email_verified,
            phone_number,
            password,
            display_name,
            photo_url,
            disabled,
        })
    }

    /// A phone number in E.164 form; a value the faker cannot fit to the
    /// locale format is fatal, not retried.
    fn phone_number(&mut self) -> SeedResult<String> {
        let number: String = NumberWithFormat(PHONE_FORMAT).fake_with_rng(&mut self.rng);
        if !E164.is_match(&number) {
            return Err(SeedError::generation(format!(
                "phone number {number} is not E.164"
            )));
        }
        Ok(number)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
