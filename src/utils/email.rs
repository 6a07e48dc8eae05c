use crate::error::{AppError, AppResult};
use regex::Regex;

/// Valida el formato del correo antes de buscarlo en la base
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Ingrese un correo válido.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("ana.perez@mail.example.org").is_ok());
        assert!(validate_email("sin-arroba.com").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("con espacios@example.com").is_err());
    }
}
