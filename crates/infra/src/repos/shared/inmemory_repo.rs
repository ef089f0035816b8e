use cas_registry_domain::Entity;
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

/// Replaces the value with the same id or appends it
pub fn save<T: Clone + Entity<i64>>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    match collection.iter().position(|item| item.same_entity(val)) {
        Some(index) => collection[index] = val.clone(),
        None => collection.push(val.clone()),
    }
}

pub fn find<T: Clone + Entity<i64>>(val_id: i64, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn find_one_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| compare(item)).cloned()
}

pub fn delete<T: Clone + Entity<i64>>(val_id: i64, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn clear<T>(collection: &Mutex<Vec<T>>) {
    collection.lock().unwrap().clear();
}

pub fn count<T>(collection: &Mutex<Vec<T>>) -> u64 {
    collection.lock().unwrap().len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use cas_registry_domain::RegisteredService;

    fn service(service_id: &str, id: i64) -> RegisteredService {
        let mut service = RegisteredService::new(service_id, "App");
        service.id = id;
        service
    }

    #[test]
    fn save_replaces_the_same_entity() {
        let collection = Mutex::new(vec![]);
        save(&service("https://a.example.com", 1), &collection);
        save(&service("https://b.example.com", 2), &collection);

        let replacement = service("https://c.example.com", 1);
        save(&replacement, &collection);

        assert_eq!(count(&collection), 2);
        assert_eq!(find(1, &collection), Some(replacement));
    }

    #[test]
    fn delete_removes_only_the_given_id() {
        let collection = Mutex::new(vec![service("https://a.example.com", 1)]);
        assert!(delete(2, &collection).is_none());
        assert_eq!(count(&collection), 1);
        assert!(delete(1, &collection).is_some());
        assert_eq!(count(&collection), 0);
    }
}
