use crate::common;

use aws_sdk_dynamodb::{Client, error, operation};

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    consistent_read: Option<bool>,
    keys: common::Item,
    table_name: String,
}

/// Get item operation: fetch one record by exact key match.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use customer_crud::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_item = read::get_item::GetItem {
///     customer_id: common::key::CustomerId::parse(Some("1"))?,
///     consistent_read: None,
///     table_name: "customers".to_string(),
/// };
/// let output = get_item.send(client).await?;
/// println!("{:?}", output.item);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GetItem {
    /// The key of the record to retrieve.
    pub customer_id: common::key::CustomerId,
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<GetItem> for GetItemInput {
    fn from(get_item: GetItem) -> Self {
        Self {
            consistent_read: get_item.consistent_read,
            keys: (&get_item.customer_id).into(),
            table_name: get_item.table_name,
        }
    }
}

impl GetItem {
    /// Execute the get item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        let get_item: GetItemInput = self.into();
        client
            .get_item()
            .set_key(Some(get_item.keys))
            .set_consistent_read(get_item.consistent_read)
            .table_name(get_item.table_name)
            .send()
            .await
    }
}
