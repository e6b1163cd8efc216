//! Entity/DTO translation. Pure and total; no hashing happens here — the
//! service hashes on the register path before the entity reaches the store.

use crate::accounts::dto::AccountView;
use crate::accounts::model::Account;

/// Converts a persisted account into its external representation, dropping
/// the password.
pub fn to_view(account: &Account) -> AccountView {
    AccountView {
        id: account.id,
        email: account.email.clone(),
        password: None,
        full_name: account.full_name.clone(),
        phone_number: account.phone_number.clone(),
        date_of_birth: account.date_of_birth,
        gender: account.gender,
    }
}

/// Converts an external representation into an account entity, copying all
/// fields including the identifier. The password is taken as-is; a view
/// without one yields an empty password field.
pub fn to_account(view: &AccountView) -> Account {
    Account {
        id: view.id,
        email: view.email.clone(),
        password: view.password.clone().unwrap_or_default(),
        full_name: view.full_name.clone(),
        phone_number: view.phone_number.clone(),
        date_of_birth: view.date_of_birth,
        gender: view.gender,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn account() -> Account {
        Account {
            id: Some(7),
            email: "a@x.com".into(),
            password: "$argon2id$opaque".into(),
            full_name: "A Person".into(),
            phone_number: "555-0100".into(),
            date_of_birth: date!(1988 - 12 - 31),
            gender: true,
        }
    }

    #[test]
    fn to_view_drops_password_and_keeps_everything_else() {
        let view = to_view(&account());
        assert_eq!(view.password, None);
        assert_eq!(view.id, Some(7));
        assert_eq!(view.email, "a@x.com");
        assert_eq!(view.full_name, "A Person");
        assert_eq!(view.phone_number, "555-0100");
        assert_eq!(view.date_of_birth, date!(1988 - 12 - 31));
        assert!(view.gender);
    }

    #[test]
    fn to_account_copies_password_verbatim() {
        let mut view = to_view(&account());
        view.password = Some("plaintext-pw".into());
        let mapped = to_account(&view);
        assert_eq!(mapped.password, "plaintext-pw");
        assert_eq!(mapped.id, Some(7));
    }

    #[test]
    fn to_account_without_password_yields_empty_field() {
        let view = to_view(&account());
        assert_eq!(to_account(&view).password, "");
    }
}
