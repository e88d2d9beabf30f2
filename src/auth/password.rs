use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

pub fn verify_password(password: &str, hashed: &str) -> Result<(), argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed)?;

    argon2.verify_password(password.as_bytes(), &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert_ne!(first, second);
        assert!(!first.contains("hunter2"));
        assert!(verify_password("hunter2", &first).is_ok());
        assert!(verify_password("hunter3", &first).is_err());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("hunter2", "not-a-phc-string").is_err());
    }
}
