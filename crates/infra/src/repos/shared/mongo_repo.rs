use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::ReplaceOptions,
    Collection, Cursor, Database,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

fn get_id_filter(id: i64) -> Document {
    doc! {
        "_id": id
    }
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    Ok(raw.to_domain())
}

fn doc_to_persistence<E, D: MongoDocument<E>>(raw: &D) -> Result<Document> {
    Ok(bson::to_document(raw)?)
}

/// Drops the collection when asked to and creates it if it does not exist.
/// Dropping a collection that does not exist is not an error.
pub async fn ensure_collection(db: &Database, name: &str, drop_collection: bool) -> Result<()> {
    anyhow::ensure!(!name.is_empty(), "Collection name must not be empty");

    if drop_collection {
        debug!("Dropping database collection: [{}]", name);
        db.collection::<Document>(name).drop(None).await?;
    }

    let existing = db.list_collection_names(doc! { "name": name }).await?;
    if !existing.iter().any(|existing| existing == name) {
        debug!("Creating database collection: [{}]", name);
        db.create_collection(name, None).await?;
    }
    Ok(())
}

/// Inserts the entity or replaces the document with the same id
pub async fn save<E, D: MongoDocument<E>>(collection: &Collection<Document>, entity: &E) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = doc_to_persistence(&raw)?;
    let options = ReplaceOptions::builder().upsert(true).build();
    collection.replace_one(filter, doc, options).await?;
    Ok(())
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: i64,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Option<E>> {
    match collection.find_one(filter, None).await? {
        Some(doc) => Ok(Some(persistence_to_entity::<E, D>(doc)?)),
        None => Ok(None),
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    consume_cursor::<E, D>(cursor).await
}

/// Removes the document with the given id in a single operation and reports
/// whether anything was removed
pub async fn delete(collection: &Collection<Document>, id: i64) -> Result<bool> {
    let filter = get_id_filter(id);
    let res = collection.delete_one(filter, None).await?;
    Ok(res.deleted_count > 0)
}

pub async fn count(collection: &Collection<Document>) -> Result<u64> {
    Ok(collection.count_documents(doc! {}, None).await?)
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Result<Vec<E>> {
    let mut documents = vec![];
    while let Some(result) = cursor.next().await {
        documents.push(persistence_to_entity::<E, D>(result?)?);
    }

    Ok(documents)
}
