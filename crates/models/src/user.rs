use serde::{Deserialize, Serialize};

use crate::entity::Entity;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Create payload: the record minus the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Partial update; absent fields leave the record untouched.
///
/// `null` deserializes to `None` and reads as absent too, so `email` can be
/// set or replaced through a patch but not cleared.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Entity for User {
    type Input = NewUser;
    type Patch = UserPatch;

    const NAME: &'static str = "User";

    fn from_input(id: u64, input: NewUser) -> Self {
        Self { id, name: input.name, email: input.email }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_merges_present_fields_only() {
        let mut user = User::from_input(
            1,
            NewUser { name: "John Doe".into(), email: Some("john@example.com".into()) },
        );
        user.apply(UserPatch { name: Some("Johnny Doe".into()), email: None });
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Johnny Doe");
        assert_eq!(user.email.as_deref(), Some("john@example.com"));
    }

    #[test]
    fn null_email_in_patch_reads_as_absent() {
        let patch: UserPatch =
            serde_json::from_value(json!({ "email": null })).expect("deserialize");
        assert_eq!(patch, UserPatch::default());

        let mut user = User::from_input(
            1,
            NewUser { name: "John Doe".into(), email: Some("john@example.com".into()) },
        );
        user.apply(patch);
        assert_eq!(user.email.as_deref(), Some("john@example.com"));
    }

    #[test]
    fn stray_id_in_create_body_is_ignored() {
        let input: NewUser =
            serde_json::from_value(json!({ "id": 999, "name": "John Doe" })).expect("deserialize");
        assert_eq!(input, NewUser { name: "John Doe".into(), email: None });
    }

    #[test]
    fn create_body_without_name_is_rejected() {
        let res = serde_json::from_value::<NewUser>(json!({ "email": "x@example.com" }));
        assert!(res.is_err());
    }

    #[test]
    fn absent_email_is_omitted_from_json() {
        let user = User { id: 1, name: "John Doe".into(), email: None };
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(json, json!({ "id": 1, "name": "John Doe" }));
    }
}
