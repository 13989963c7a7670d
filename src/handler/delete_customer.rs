use crate::{
    common::{error::Error, key::CustomerId},
    handler::Reply,
    store::CustomerStore,
};

use lambda_http::http::StatusCode;

/// Remove the customer named by the `customerId` path parameter.
///
/// Deleting an unknown customer succeeds.
pub async fn delete_customer<S: CustomerStore + ?Sized>(
    store: &S,
    customer_id: Option<&str>,
) -> Result<Reply, Error> {
    let customer_id = CustomerId::parse(customer_id)?;
    store
        .delete_item(&customer_id)
        .await
        .map_err(Error::store("Error deleting customer"))?;
    tracing::info!(%customer_id, "customer deleted");
    Ok(Reply::message(StatusCode::OK, "Customer deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handler::{
            create_customer, read_customer,
            testing::{FailingStore, customer_body},
        },
        store::MemoryStore,
    };

    use serde_json::json;

    #[tokio::test]
    async fn test_delete_customer_twice() {
        let store = MemoryStore::new();
        let body = customer_body().to_string();
        create_customer(&store, body.as_bytes()).await.unwrap();
        for _ in 0..2 {
            let reply = delete_customer(&store, Some("1")).await.unwrap();
            assert_eq!(
                reply,
                Reply::json(
                    StatusCode::OK,
                    json!({"message": "Customer deleted successfully"})
                )
            );
        }
        let reply = read_customer(&store, Some("1")).await.unwrap();
        assert_eq!(reply.body, None);
    }

    #[tokio::test]
    async fn test_delete_customer_missing_id() {
        let store = MemoryStore::new();
        let error = delete_customer(&store, None).await.unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body(), json!({"message": "CustomerId is required"}));
    }

    #[tokio::test]
    async fn test_delete_customer_store_failure() {
        let error = delete_customer(&FailingStore, Some("1")).await.unwrap_err();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body()["message"], "Error deleting customer");
    }
}
