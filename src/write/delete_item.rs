use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation};

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    keys: common::Item,
    write_operation: write::common::WriteInput,
}

/// Delete item operation. Deleting a key that does not exist succeeds.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use customer_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let customer_id = common::key::CustomerId::parse(Some("1"))?;
/// let delete_item = write::delete_item::DeleteItem {
///     customer_id,
///     write_args: write::common::WriteArgs {
///         table_name: "customers".to_string(),
///         ..Default::default()
///     },
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct DeleteItem {
    /// The key of the record to delete.
    pub customer_id: common::key::CustomerId,
    /// Table name and return values.
    pub write_args: write::common::WriteArgs,
}

impl From<DeleteItem> for DeleteItemInput {
    fn from(delete_item: DeleteItem) -> Self {
        Self {
            keys: (&delete_item.customer_id).into(),
            write_operation: delete_item.write_args.into(),
        }
    }
}

impl DeleteItem {
    /// Execute the delete item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        let delete_item: DeleteItemInput = self.into();
        let builder = client.delete_item().set_key(Some(delete_item.keys));
        crate::apply_write_operation!(builder, delete_item.write_operation)
            .send()
            .await
    }
}
