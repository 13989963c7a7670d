use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use indexmap::IndexMap;
use std::collections;

/// Builds `SET #a = :set0, #b = :set1` from ordered attribute assignments.
///
/// Every attribute name goes through a placeholder, as some customer
/// attributes (`name`) are reserved words.
fn get_set_expression(assignments: IndexMap<String, types::AttributeValue>) -> common::ExpressionInput {
    let mut operations = Vec::with_capacity(assignments.len());
    for (index, (key, value)) in assignments.into_iter().enumerate() {
        let placeholder = common::add_placeholder(&key);
        let value_placeholder = format!(":set{index}");
        let expression = format!("{placeholder} = {value_placeholder}");
        let operation = common::ExpressionInput {
            expression,
            expression_attribute_names: collections::HashMap::from([(placeholder, key)]),
            expression_attribute_values: collections::HashMap::from([(value_placeholder, value)]),
        };
        operations.push(operation);
    }
    let mut operation = common::ExpressionInput::merge(", ", operations);
    if !operation.expression.is_empty() {
        operation.expression = format!("SET {}", operation.expression);
    }
    operation
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    keys: common::Item,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation: assign the given attributes, leaving every other attribute as is.
///
/// When no record exists for the key, the store creates one holding the key
/// and the assigned attributes.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types};
/// use customer_crud::{common, write};
/// use indexmap::IndexMap;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     customer_id: common::key::CustomerId::parse(Some("1"))?,
///     assignments: IndexMap::from([
///         ("active".to_string(), types::AttributeValue::Bool(false)),
///     ]),
///     write_args: write::common::WriteArgs {
///         return_values: Some(types::ReturnValue::AllNew),
///         table_name: "customers".to_string(),
///     },
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem {
    /// The key of the record to update.
    pub customer_id: common::key::CustomerId,
    /// Attribute values to set, in expression order.
    pub assignments: IndexMap<String, types::AttributeValue>,
    /// Table name and return values.
    pub write_args: write::common::WriteArgs,
}

impl From<UpdateItem> for UpdateItemInput {
    fn from(update_item: UpdateItem) -> Self {
        let keys = (&update_item.customer_id).into();
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let operation = get_set_expression(update_item.assignments);
        let update_expression = write_operation.merge_expression(operation);
        Self {
            keys,
            update_expression,
            write_operation,
        }
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.into();
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
