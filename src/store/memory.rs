use crate::{
    common::{Item, customer::Customer, error::StoreError, key},
    store,
};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use std::collections;
use tokio::sync::RwLock;

/// Customer records held in process memory.
///
/// Mirrors DynamoDB single-item semantics: put overwrites, update merges
/// into the existing record (creating it when absent), delete is idempotent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<collections::HashMap<String, Item>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no record.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl store::CustomerStore for MemoryStore {
    async fn put_item(&self, customer: Customer) -> Result<(), StoreError> {
        let customer_id = customer.customer_id.clone();
        let item = Item::try_from(customer)?;
        self.items.write().await.insert(customer_id, item);
        Ok(())
    }

    async fn get_item(&self, customer_id: &key::CustomerId) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(customer_id.as_str()).cloned())
    }

    async fn update_item(
        &self,
        customer_id: &key::CustomerId,
        assignments: IndexMap<String, types::AttributeValue>,
    ) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        let item = items
            .entry(customer_id.as_str().to_string())
            .or_insert_with(|| customer_id.into());
        item.extend(assignments);
        Ok(Some(item.clone()))
    }

    async fn delete_item(&self, customer_id: &key::CustomerId) -> Result<(), StoreError> {
        self.items.write().await.remove(customer_id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::customer::ContactInfo, store::CustomerStore};

    fn customer_id(value: &str) -> key::CustomerId {
        key::CustomerId::parse(Some(value)).unwrap()
    }

    fn customer() -> Customer {
        Customer {
            customer_id: "1".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            active: true,
            birthdate: None,
            address_list: vec!["addr".to_string()],
            contact_info_list: vec![ContactInfo {
                email: "c@x.com".to_string(),
                phone: "555".to_string(),
                is_primary: true,
            }],
        }
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put_item(customer()).await.unwrap();
        let mut renamed = customer();
        renamed.name = "B".to_string();
        store.put_item(renamed).await.unwrap();
        assert_eq!(store.len().await, 1);
        let item = store.get_item(&customer_id("1")).await.unwrap().unwrap();
        assert_eq!(item["name"], types::AttributeValue::S("B".to_string()));
    }

    #[tokio::test]
    async fn test_update_merges() {
        let store = MemoryStore::new();
        store.put_item(customer()).await.unwrap();
        let assignments = IndexMap::from([("active".to_string(), types::AttributeValue::Bool(false))]);
        let item = store
            .update_item(&customer_id("1"), assignments)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item["active"], types::AttributeValue::Bool(false));
        assert_eq!(item["name"], types::AttributeValue::S("A".to_string()));
        assert!(item.contains_key("addressList"));
        assert!(item.contains_key("contactInfoList"));
    }

    #[tokio::test]
    async fn test_update_missing_creates_partial_record() {
        let store = MemoryStore::new();
        let assignments = IndexMap::from([("name".to_string(), types::AttributeValue::S("C".to_string()))]);
        let item = store
            .update_item(&customer_id("9"), assignments)
            .await
            .unwrap()
            .unwrap();
        let expected = Item::from([
            ("customerId".to_string(), types::AttributeValue::S("9".to_string())),
            ("name".to_string(), types::AttributeValue::S("C".to_string())),
        ]);
        assert_eq!(item, expected);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.put_item(customer()).await.unwrap();
        store.delete_item(&customer_id("1")).await.unwrap();
        store.delete_item(&customer_id("1")).await.unwrap();
        assert!(store.is_empty().await);
        assert_eq!(store.get_item(&customer_id("1")).await.unwrap(), None);
    }
}
