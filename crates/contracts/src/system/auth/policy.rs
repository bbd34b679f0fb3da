use super::Identity;

/// Decides whether a verified identity may enter the admin shell.
pub trait AuthorizationPolicy {
    fn is_authorized(&self, identity: &Identity) -> bool;
}

impl<F> AuthorizationPolicy for F
where
    F: Fn(&Identity) -> bool,
{
    fn is_authorized(&self, identity: &Identity) -> bool {
        self(identity)
    }
}

/// Admits exactly one configured administrator account.
///
/// Emails are compared ASCII case-insensitively; an empty configured email
/// admits nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    admin_email: String,
}

impl AdminPolicy {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into().trim().to_ascii_lowercase(),
        }
    }
}

impl AuthorizationPolicy for AdminPolicy {
    fn is_authorized(&self, identity: &Identity) -> bool {
        !self.admin_email.is_empty()
            && identity
                .unique_identifier()
                .trim()
                .eq_ignore_ascii_case(&self.admin_email)
    }
}
