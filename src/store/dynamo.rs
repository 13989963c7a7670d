use crate::{
    common::{Item, customer::Customer, error::StoreError, key::CustomerId},
    read, store, write,
};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types};
use indexmap::IndexMap;

/// Customer records in a DynamoDB table whose partition key is `customerId`.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Wrap a configured client and the table it should use.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn write_args(&self, return_values: Option<types::ReturnValue>) -> write::common::WriteArgs {
        write::common::WriteArgs {
            return_values,
            table_name: self.table_name.clone(),
        }
    }
}

#[async_trait]
impl store::CustomerStore for DynamoStore {
    #[tracing::instrument(
        name = "customer_crud.put_item",
        skip_all,
        fields(customer_id = %customer.customer_id, table = %self.table_name),
        err
    )]
    async fn put_item(&self, customer: Customer) -> Result<(), StoreError> {
        let put_item = write::put_item::PutItem {
            item: customer,
            write_args: self.write_args(None),
        };
        put_item.send(&self.client).await?;
        Ok(())
    }

    #[tracing::instrument(
        name = "customer_crud.get_item",
        skip_all,
        fields(customer_id = %customer_id, table = %self.table_name),
        err
    )]
    async fn get_item(&self, customer_id: &CustomerId) -> Result<Option<Item>, StoreError> {
        let get_item = read::get_item::GetItem {
            customer_id: customer_id.clone(),
            consistent_read: None,
            table_name: self.table_name.clone(),
        };
        let output = get_item.send(&self.client).await?;
        Ok(output.item)
    }

    #[tracing::instrument(
        name = "customer_crud.update_item",
        skip_all,
        fields(customer_id = %customer_id, table = %self.table_name),
        err
    )]
    async fn update_item(
        &self,
        customer_id: &CustomerId,
        assignments: IndexMap<String, types::AttributeValue>,
    ) -> Result<Option<Item>, StoreError> {
        let update_item = write::update_item::UpdateItem {
            customer_id: customer_id.clone(),
            assignments,
            write_args: self.write_args(Some(types::ReturnValue::AllNew)),
        };
        let output = update_item.send(&self.client).await?;
        Ok(output.attributes)
    }

    #[tracing::instrument(
        name = "customer_crud.delete_item",
        skip_all,
        fields(customer_id = %customer_id, table = %self.table_name),
        err
    )]
    async fn delete_item(&self, customer_id: &CustomerId) -> Result<(), StoreError> {
        let delete_item = write::delete_item::DeleteItem {
            customer_id: customer_id.clone(),
            write_args: self.write_args(None),
        };
        delete_item.send(&self.client).await?;
        Ok(())
    }
}
