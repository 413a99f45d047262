//! Auth user value object consumed by the identity service.

/// Synthetic authentication principal.
///
/// Created by the dataset generator and consumed exactly once by the
/// identity seeder; the identity service owns the durable record afterwards.
/// The plaintext password exists only for that create call and is redacted
/// from debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthUserRecord {
    pub email: String,
    pub email_verified: bool,
    pub phone_number: String,
    pub password: String,
    pub display_name: String,
    pub photo_url: String,
    pub disabled: bool,
}

impl std::fmt::Debug for AuthUserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthUserRecord")
            .field("email", &self.email)
            .field("email_verified", &self.email_verified)
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .field("photo_url", &self.photo_url)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let user = AuthUserRecord {
            email: "jane@example.com".to_string(),
            email_verified: true,
            phone_number: "+15145550199".to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: "Jane Tremblay".to_string(),
            photo_url: "https://picsum.photos/seed/1/640/480".to_string(),
            disabled: false,
        };
        let rendered = format!("{user:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
