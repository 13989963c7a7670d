//! API Gateway adapter.
//!
//! Routes a proxied request to the matching customer operation and renders
//! the outcome as a JSON response:
//!
//! | Method | Path                     | Operation         |
//! |--------|--------------------------|-------------------|
//! | POST   | /customer                | create_customer   |
//! | GET    | /customer/{customerId}   | read_customer     |
//! | PUT    | /customer/{customerId}   | update_customer   |
//! | DELETE | /customer/{customerId}   | delete_customer   |

use crate::{
    handler::{self, Reply},
    store::CustomerStore,
};

use lambda_http::{
    Body, Error, Request, RequestExt, Response,
    http::{Method, StatusCode, header},
};

/// Name of the path parameter carrying the customer identifier.
pub const CUSTOMER_ID_PARAMETER: &str = "customerId";

/// Dispatch a request on its method and render the operation outcome.
pub async fn route<S: CustomerStore + ?Sized>(
    store: &S,
    request: Request,
) -> Result<Response<Body>, Error> {
    let path_parameters = request.path_parameters();
    let customer_id = path_parameters.first(CUSTOMER_ID_PARAMETER);
    let body = request.body().as_ref();
    let outcome = match *request.method() {
        Method::POST => handler::create_customer(store, body).await,
        Method::GET => handler::read_customer(store, customer_id).await,
        Method::PUT => handler::update_customer(store, customer_id, body).await,
        Method::DELETE => handler::delete_customer(store, customer_id).await,
        _ => Ok(Reply::message(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
        )),
    };
    let reply = match outcome {
        Ok(reply) => reply,
        Err(err) => {
            if err.status().is_server_error() {
                tracing::error!(error = ?err, "request failed");
            } else {
                tracing::info!(error = %err, "request rejected");
            }
            Reply::from(err)
        }
    };
    render(reply)
}

fn render(reply: Reply) -> Result<Response<Body>, Error> {
    let body = match reply.body {
        Some(body) => Body::Text(body.to_string()),
        None => Body::Empty,
    };
    let response = Response::builder()
        .status(reply.status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)?;
    Ok(response)
}
