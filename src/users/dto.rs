use serde::Serialize;

use crate::users::repo::User;

/// Success envelope wrapping a single user record.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub data: User,
}

/// Success envelope for registration: a token is issued alongside the record.
#[derive(Debug, Serialize)]
pub struct RegisteredEnvelope {
    pub success: bool,
    pub token: String,
    pub data: User,
}

/// Success envelope for deletion: the number of rows removed.
#[derive(Debug, Serialize)]
pub struct DeletedEnvelope {
    pub success: bool,
    pub data: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn user_envelope_shape() {
        let now = OffsetDateTime::now_utc();
        let envelope = UserEnvelope {
            success: true,
            data: User {
                id: 1,
                first_name: Some("Jane".into()),
                last_name: None,
                email: "jane@example.com".into(),
                password: "Abcdef1!".into(),
                created_at: now,
                updated_at: now,
            },
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["firstName"], "Jane");
        assert_eq!(json["data"]["email"], "jane@example.com");
    }

    #[test]
    fn deleted_envelope_shape() {
        let json = serde_json::to_value(DeletedEnvelope {
            success: true,
            data: 1,
        })
        .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 1);
    }
}
