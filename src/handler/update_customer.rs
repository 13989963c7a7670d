use crate::{
    common::{customer::CustomerPatch, error::Error, key::CustomerId},
    handler::{self, Reply},
    store::CustomerStore,
};

use lambda_http::http::StatusCode;
use serde_json::json;

const STORE_FAILURE: &str = "Error updating customer";

/// Apply the fields present in `body` to the customer named by the path.
///
/// Untouched attributes keep their stored values. The reply echoes the
/// record as it stands after the update under `updatedCustomer`.
pub async fn update_customer<S: CustomerStore + ?Sized>(
    store: &S,
    customer_id: Option<&str>,
    body: &[u8],
) -> Result<Reply, Error> {
    let customer_id = CustomerId::parse(customer_id)?;
    let patch: CustomerPatch = handler::parse_body(body)?;
    patch.validate()?;
    let assignments = patch
        .into_assignments()
        .map_err(|err| Error::store(STORE_FAILURE)(err.into()))?;
    let fields: Vec<&str> = assignments.keys().map(String::as_str).collect();
    tracing::debug!(%customer_id, ?fields, "updating customer");
    let updated = store
        .update_item(&customer_id, assignments)
        .await
        .map_err(Error::store(STORE_FAILURE))?;
    let updated_customer = match updated {
        Some(item) => {
            handler::untag(item).map_err(|err| Error::store(STORE_FAILURE)(err.into()))?
        }
        None => json!({}),
    };
    tracing::info!(%customer_id, "customer updated");
    Ok(Reply::json(
        StatusCode::OK,
        json!({
            "message": "Customer updated successfully",
            "updatedCustomer": updated_customer,
        }),
    ))
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

    use rstest::rstest;
    use serde_json::Value;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        let body = customer_body().to_string();
        create_customer(&store, body.as_bytes()).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_update_customer_inactive() {
        let store = seeded_store().await;
        let reply = update_customer(&store, Some("1"), br#"{"active":false}"#)
            .await
            .unwrap();
        let mut expected = customer_body();
        expected["active"] = json!(false);
        assert_eq!(
            reply,
            Reply::json(
                StatusCode::OK,
                json!({
                    "message": "Customer updated successfully",
                    "updatedCustomer": expected,
                })
            )
        );
    }

    #[tokio::test]
    async fn test_update_customer_preserves_untouched_fields() {
        let store = seeded_store().await;
        update_customer(&store, Some("1"), br#"{"name":"B"}"#)
            .await
            .unwrap();
        let reply = read_customer(&store, Some("1")).await.unwrap();
        let mut expected = customer_body();
        expected["name"] = json!("B");
        assert_eq!(reply.body, Some(expected));
    }

    #[tokio::test]
    async fn test_update_customer_ignores_body_customer_id() {
        let store = seeded_store().await;
        update_customer(&store, Some("1"), br#"{"customerId":"2","email":"b@x.com"}"#)
            .await
            .unwrap();
        let reply = read_customer(&store, Some("1")).await.unwrap();
        assert_eq!(reply.body.unwrap()["email"], "b@x.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_customer_missing_record() {
        let store = MemoryStore::new();
        let reply = update_customer(&store, Some("7"), br#"{"name":"C"}"#)
            .await
            .unwrap();
        assert_eq!(
            reply.body.unwrap()["updatedCustomer"],
            json!({"customerId": "7", "name": "C"})
        );
    }

    #[rstest]
    #[case::missing_id(None, br#"{"name":"B"}"#.as_slice(), "CustomerId is required")]
    #[case::missing_id_and_malformed(None, b"{invalid json}".as_slice(), "CustomerId is required")]
    #[case::malformed(Some("1"), b"{invalid json}".as_slice(), "Invalid request body")]
    #[case::no_fields(Some("1"), br#"{"customerId":"1"}"#.as_slice(), "No update fields provided")]
    #[case::empty_body(Some("1"), b"".as_slice(), "No update fields provided")]
    #[case::empty_contact_list(
        Some("1"),
        br#"{"contactInfoList":[]}"#.as_slice(),
        "Contact list cannot be empty."
    )]
    #[case::no_primary_contact(
        Some("1"),
        br#"{"contactInfoList":[{"email":"c@x.com","phone":"555"}]}"#.as_slice(),
        "At least one contact must be marked as primary."
    )]
    #[tokio::test]
    async fn test_update_customer_rejected(
        #[case] customer_id: Option<&str>,
        #[case] body: &[u8],
        #[case] expected: &str,
    ) {
        let store = seeded_store().await;
        let error = update_customer(&store, customer_id, body)
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.body()["message"], Value::from(expected));
        let reply = read_customer(&store, Some("1")).await.unwrap();
        assert_eq!(reply.body, Some(customer_body()));
    }

    #[tokio::test]
    async fn test_update_customer_store_failure() {
        let error = update_customer(&FailingStore, Some("1"), br#"{"name":"B"}"#)
            .await
            .unwrap_err();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body()["message"], "Error updating customer");
        assert_eq!(error.body()["error"]["message"], "rate exceeded");
    }
}
