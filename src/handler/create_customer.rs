use crate::{
    common::{
        customer::{Customer, NewCustomer},
        error::Error,
    },
    handler::{self, Reply},
    store::CustomerStore,
};

use lambda_http::http::StatusCode;

/// Validate a full customer record and store it under its `customerId`.
///
/// An existing record with the same identifier is overwritten. The reply
/// carries a confirmation message only.
pub async fn create_customer<S: CustomerStore + ?Sized>(
    store: &S,
    body: &[u8],
) -> Result<Reply, Error> {
    let new_customer: NewCustomer = handler::parse_body(body)?;
    let customer = Customer::try_from(new_customer)?;
    let customer_id = customer.customer_id.clone();
    store
        .put_item(customer)
        .await
        .map_err(Error::store("Error creating customer"))?;
    tracing::info!(%customer_id, "customer created");
    Ok(Reply::message(
        StatusCode::CREATED,
        "Customer created successfully",
    ))
}
