use crate::{
    common::{error::Error, key::CustomerId},
    handler::{self, Reply},
    store::CustomerStore,
};

use lambda_http::http::StatusCode;

const STORE_FAILURE: &str = "Error retrieving customer";

/// Fetch one customer by the `customerId` path parameter.
///
/// A missing record still replies `200` with an empty body.
pub async fn read_customer<S: CustomerStore + ?Sized>(
    store: &S,
    customer_id: Option<&str>,
) -> Result<Reply, Error> {
    let customer_id = CustomerId::parse(customer_id)?;
    let item = store
        .get_item(&customer_id)
        .await
        .map_err(Error::store(STORE_FAILURE))?;
    match item {
        Some(item) => {
            let customer = handler::untag(item)
                .map_err(|err| Error::store(STORE_FAILURE)(err.into()))?;
            Ok(Reply::json(StatusCode::OK, customer))
        }
        None => {
            // TODO: answer 404 once API consumers stop relying on the empty 200.
            tracing::warn!(%customer_id, "customer not found");
            Ok(Reply {
                status: StatusCode::OK,
                body: None,
            })
        }
    }
}
