use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: common::Item,
    write_operation: write::common::WriteInput,
}

/// Put item operation: insert a record, overwriting any record with the same key.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use customer_crud::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"customerId": "1", "name": "John"}),
///     write_args: write::common::WriteArgs {
///         table_name: "customers".to_string(),
///         ..Default::default()
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Table name and return values.
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let operation = Self {
            item,
            write_operation: put_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Execute the put item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections;

    #[rstest]
    #[case::customer(
        PutItem {
            item: json!(
                {
                    "customerId": "1",
                    "active": true,
                    "addressList": ["addr"],
                }
            ),
            write_args: write::common::WriteArgs {
                table_name: "customers".to_string(),
                ..Default::default()
            },
        },
        PutItemInput {
            item: collections::HashMap::from(
                [
                    (
                        "customerId".to_string(),
                        types::AttributeValue::S(
                            "1".to_string()
                        ),
                    ),
                    (
                        "active".to_string(),
                        types::AttributeValue::Bool(
                            true
                        ),
                    ),
                    (
                        "addressList".to_string(),
                        types::AttributeValue::L(
                            vec![
                                types::AttributeValue::S(
                                    "addr".to_string()
                                ),
                            ]
                        ),
                    ),
                ]
            ),
            write_operation: write::common::WriteInput {
                table_name: "customers".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::return_values(
        PutItem {
            item: json!(
                {
                    "customerId": "2"
                }
            ),
            write_args: write::common::WriteArgs {
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "customers".to_string(),
            },
        },
        PutItemInput {
            item: collections::HashMap::from(
                [(
                    "customerId".to_string(),
                    types::AttributeValue::S(
                        "2".to_string()
                    ),
                )]
            ),
            write_operation: write::common::WriteInput {
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "customers".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem<Value>, #[case] expected: PutItemInput) {
        let actual: PutItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_put_item_rejects_non_map() {
        let args = PutItem {
            item: json!("not a record"),
            write_args: write::common::WriteArgs::default(),
        };
        let actual: Result<PutItemInput> = args.try_into();
        assert!(actual.is_err());
    }
}
