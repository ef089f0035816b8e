use super::IServiceRegistryRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use cas_registry_domain::{RegisteredService, ServicePattern};
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoServiceRegistryRepo {
    db: Database,
    collection_name: String,
    collection: Collection<Document>,
}

impl MongoServiceRegistryRepo {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection_name: collection_name.to_string(),
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRegistryRepo for MongoServiceRegistryRepo {
    fn collection_name(&self) -> &str {
        &self.collection_name
    }

    async fn ensure_collection(&self, drop_collection: bool) -> anyhow::Result<()> {
        mongo_repo::ensure_collection(&self.db, &self.collection_name, drop_collection).await
    }

    async fn save(&self, service: &RegisteredService) -> anyhow::Result<()> {
        mongo_repo::save::<_, RegisteredServiceMongo>(&self.collection, service).await
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<RegisteredService>> {
        mongo_repo::find::<_, RegisteredServiceMongo>(&self.collection, id).await
    }

    async fn find_by_service_id(
        &self,
        service_id: &str,
    ) -> anyhow::Result<Option<RegisteredService>> {
        let filter = doc! {
            "service_id": service_id
        };
        mongo_repo::find_one_by::<_, RegisteredServiceMongo>(&self.collection, filter).await
    }

    async fn find_by_pattern(
        &self,
        pattern: &ServicePattern,
    ) -> anyhow::Result<Option<RegisteredService>> {
        let filter = pattern_filter(pattern);
        mongo_repo::find_one_by::<_, RegisteredServiceMongo>(&self.collection, filter).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<RegisteredService>> {
        mongo_repo::find_many_by::<_, RegisteredServiceMongo>(&self.collection, doc! {}).await
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        mongo_repo::delete(&self.collection, id).await
    }

    async fn count(&self) -> anyhow::Result<u64> {
        mongo_repo::count(&self.collection).await
    }
}

/// Case insensitive `$regex` on `service_id`
fn pattern_filter(pattern: &ServicePattern) -> Document {
    doc! {
        "service_id": {
            "$regex": pattern.as_str(),
            "$options": "i"
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RegisteredServiceMongo {
    _id: i64,
    service_id: String,
    name: String,
    description: String,
    evaluation_order: i32,
    theme: Option<String>,
    logout_url: Option<String>,
}

impl MongoDocument<RegisteredService> for RegisteredServiceMongo {
    fn to_domain(self) -> RegisteredService {
        RegisteredService {
            id: self._id,
            service_id: self.service_id,
            name: self.name,
            description: self.description,
            evaluation_order: self.evaluation_order,
            theme: self.theme,
            logout_url: self.logout_url,
        }
    }

    fn from_domain(service: &RegisteredService) -> Self {
        Self {
            _id: service.id,
            service_id: service.service_id.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            evaluation_order: service.evaluation_order,
            theme: service.theme.clone(),
            logout_url: service.logout_url.clone(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
