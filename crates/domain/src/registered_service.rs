use crate::shared::entity::Entity;
use serde::{Deserialize, Serialize};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Id of a `RegisteredService` that has not been assigned an id yet
pub const INITIAL_IDENTIFIER_VALUE: i64 = i64::MAX;

/// A client application that is allowed to authenticate through the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredService {
    /// Numeric id. Equals `INITIAL_IDENTIFIER_VALUE` until the registry
    /// assigns one on the first save.
    pub id: i64,
    /// Url or url pattern identifying the application, e.g.
    /// `https://app.example.com/.*`
    pub service_id: String,
    pub name: String,
    pub description: String,
    /// Order in which services are evaluated when several patterns match
    /// the same url. Lower comes first.
    pub evaluation_order: i32,
    pub theme: Option<String>,
    pub logout_url: Option<String>,
}

impl RegisteredService {
    pub fn new(service_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: INITIAL_IDENTIFIER_VALUE,
            service_id: service_id.into(),
            name: name.into(),
            description: String::new(),
            evaluation_order: 0,
            theme: None,
            logout_url: None,
        }
    }

    pub fn has_assigned_id(&self) -> bool {
        self.id != INITIAL_IDENTIFIER_VALUE
    }

    /// Derives an id from the content of this service. Equal services
    /// give equal ids, so two distinct services may still collide.
    /// The result is never negative and never `INITIAL_IDENTIFIER_VALUE`.
    pub fn content_hash_id(&self) -> i64 {
        let mut hasher = DefaultHasher::new();
        self.service_id.hash(&mut hasher);
        self.name.hash(&mut hasher);
        self.description.hash(&mut hasher);
        self.evaluation_order.hash(&mut hasher);
        self.theme.hash(&mut hasher);
        self.logout_url.hash(&mut hasher);

        let id = (hasher.finish() & INITIAL_IDENTIFIER_VALUE as u64) as i64;
        if id == INITIAL_IDENTIFIER_VALUE {
            id - 1
        } else {
            id
        }
    }
}

impl Entity<i64> for RegisteredService {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_service_without_id() {
        let service = RegisteredService::new("https://app.example.com", "App");
        assert_eq!(service.id, INITIAL_IDENTIFIER_VALUE);
        assert!(!service.has_assigned_id());
        assert!(service.theme.is_none());
    }

    #[test]
    fn content_hash_id_is_deterministic() {
        let service = RegisteredService::new("https://app.example.com", "App");
        let copy = service.clone();
        assert_eq!(service.content_hash_id(), copy.content_hash_id());

        let id = service.content_hash_id();
        assert!(id >= 0);
        assert_ne!(id, INITIAL_IDENTIFIER_VALUE);
    }

    #[test]
    fn content_hash_id_ignores_current_id() {
        let mut service = RegisteredService::new("https://app.example.com", "App");
        let before = service.content_hash_id();
        service.id = 10;
        assert_eq!(before, service.content_hash_id());
    }

    #[test]
    fn content_hash_id_differs_for_different_content() {
        let s1 = RegisteredService::new("https://app.example.com", "App");
        let mut s2 = s1.clone();
        s2.description = "Another app".into();
        assert_ne!(s1.content_hash_id(), s2.content_hash_id());
    }

    #[test]
    fn same_entity_compares_ids_only() {
        let mut s1 = RegisteredService::new("https://a.example.com", "A");
        let mut s2 = RegisteredService::new("https://b.example.com", "B");
        s1.id = 1;
        s2.id = 1;
        assert!(s1.same_entity(&s2));
        assert_ne!(s1, s2);
    }

    #[test]
    fn it_serializes_with_camel_case_fields() {
        let mut service = RegisteredService::new("https://app.example.com", "App");
        service.id = 5;
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["serviceId"], "https://app.example.com");
        assert_eq!(json["evaluationOrder"], 0);
        let back: RegisteredService = serde_json::from_value(json).unwrap();
        assert_eq!(back, service);
    }
}
