//! User registration and lookup

use crate::Library;
use melody_core::{
    error::{MelodyError, Result},
    types::{RegisterUser, SecretCode, User, UserId},
};

/// Give up after this many secret-code collisions in a row
const MAX_SECRET_CODE_ATTEMPTS: usize = 32;

/// Register a user, generating a secret code no other user holds
///
/// # Errors
///
/// `InvalidInput` when name or email is empty, `Other` when no unique
/// secret code could be generated.
pub fn register(library: &mut Library, input: RegisterUser, code_length: usize) -> Result<User> {
    if input.name.is_empty() || input.email.is_empty() {
        return Err(MelodyError::invalid_input("Name and email are required"));
    }

    let secret_code = unique_secret_code(library, code_length)?;
    let user = User::with_secret_code(input.name, input.email, secret_code);

    library
        .secret_codes
        .insert(user.secret_code.clone(), user.id.clone());
    library.users.insert(user.id.clone(), user.clone());

    Ok(user)
}

/// Get user by ID
pub fn get_by_id<'a>(library: &'a Library, id: &UserId) -> Option<&'a User> {
    library.users.get(id)
}

/// Get user by secret code
pub fn get_by_secret_code<'a>(library: &'a Library, secret_code: &str) -> Option<&'a User> {
    library
        .secret_codes
        .get(&SecretCode::new(secret_code))
        .and_then(|id| library.users.get(id))
}

/// Get user for mutation, or `UserNotFound`
pub(crate) fn get_mut<'a>(library: &'a mut Library, id: &UserId) -> Result<&'a mut User> {
    library
        .users
        .get_mut(id)
        .ok_or_else(|| MelodyError::UserNotFound(id.clone()))
}

fn unique_secret_code(library: &Library, code_length: usize) -> Result<SecretCode> {
    for _ in 0..MAX_SECRET_CODE_ATTEMPTS {
        let code = SecretCode::generate_with_length(code_length);
        if !library.secret_codes.contains_key(&code) {
            return Ok(code);
        }
        tracing::debug!("Secret code collision, retrying");
    }

    Err(MelodyError::Other(format!(
        "Could not generate a unique secret code of length {}",
        code_length
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> RegisterUser {
        RegisterUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn register_indexes_secret_code() {
        let mut library = Library::new();
        let user = register(&mut library, input("Alice", "a@example.com"), 8).unwrap();

        let found = get_by_secret_code(&library, user.secret_code.as_str()).unwrap();
        assert_eq!(found.id, user.id);
        assert!(library.is_consistent());
    }

    #[test]
    fn register_rejects_empty_fields() {
        let mut library = Library::new();
        assert!(matches!(
            register(&mut library, input("", "a@example.com"), 8),
            Err(MelodyError::InvalidInput(_))
        ));
        assert!(matches!(
            register(&mut library, input("Alice", ""), 8),
            Err(MelodyError::InvalidInput(_))
        ));
        assert_eq!(library.user_count(), 0);
    }

    #[test]
    fn duplicate_emails_are_allowed() {
        let mut library = Library::new();
        let a = register(&mut library, input("A", "same@example.com"), 8).unwrap();
        let b = register(&mut library, input("B", "same@example.com"), 8).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(library.user_count(), 2);
    }

    #[test]
    fn exhausted_code_space_is_an_error() {
        let mut library = Library::new();
        // Only one code of length zero exists
        register(&mut library, input("A", "a@example.com"), 0).unwrap();
        let err = register(&mut library, input("B", "b@example.com"), 0).unwrap_err();
        assert!(matches!(err, MelodyError::Other(_)));
    }

    #[test]
    fn unknown_secret_code_misses() {
        let library = Library::new();
        assert!(get_by_secret_code(&library, "nope1234").is_none());
        assert!(get_by_id(&library, &UserId::new("nope")).is_none());
    }
}
