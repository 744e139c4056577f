//! Argon2id password hashing.
//!
//! Stored hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so a hash made under older cost settings still verifies after the cost
//! is raised.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use quill_core::ports::{AuthError, PasswordService};

pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    /// Argon2id with the crate's recommended costs (19 MiB, 2 passes, 1 lane).
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }

    /// Argon2id with explicit costs. `memory_kib` must be at least `8 * lanes`.
    pub fn with_cost(memory_kib: u32, passes: u32, lanes: u32) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, passes, lanes, None)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    /// `Ok(false)` only for a wrong password. A stored hash that can't be read is an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Argon2PasswordService {
        Argon2PasswordService::with_cost(64, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("rainbows").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$"));
        assert!(service.verify("rainbows", &hash).unwrap());
        assert!(!service.verify("kittens", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let service = cheap();
        assert_ne!(service.hash("kittens").unwrap(), service.hash("kittens").unwrap());
    }

    #[test]
    fn test_hash_from_other_cost_still_verifies() {
        let old = cheap().hash("kittens").unwrap();
        assert!(old.contains("m=64,t=1,p=1"));
        assert!(Argon2PasswordService::new().verify("kittens", &old).unwrap());
    }

    #[test]
    fn test_rejects_impossible_cost() {
        assert!(matches!(
            Argon2PasswordService::with_cost(1, 1, 1),
            Err(AuthError::HashingError(_))
        ));
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = cheap();
        assert!(matches!(
            service.verify("kittens", "not-a-phc-string"),
            Err(AuthError::HashingError(_))
        ));
    }
}
