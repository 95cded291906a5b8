use serde::{Deserialize, Serialize};

/// Wrapper used by single-resource responses: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Unwraps the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserId, UserRecord};

    #[test]
    fn test_user_envelope_unwraps_record() {
        let body = r#"{"data":{"id":3,"name":"Grace","email":"grace@x.com"}}"#;
        let envelope: DataEnvelope<UserRecord> = serde_json::from_str(body).expect("parse");
        let record = envelope.into_inner();

        assert_eq!(record.id, Some(UserId(3)));
        assert_eq!(record.name, "Grace");
        assert_eq!(record.email, "grace@x.com");
    }
}
