//! Lambda quote endpoint
//!
//! Accepts a JSON `QuoteRequest` body and returns the JSON `Quote`.
//! Invalid figures come back as 400 with the validation message.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;

use mortgage_engine::{QuoteEngine, QuoteRequest};

async fn function_handler(
    engine: &QuoteEngine,
    event: Request,
) -> Result<Response<Body>, Error> {
    let request: QuoteRequest = match serde_json::from_slice(event.body().as_ref()) {
        Ok(request) => request,
        Err(e) => return error_response(400, &format!("invalid request body: {}", e)),
    };

    match engine.quote(&request) {
        Ok(quote) => {
            let body = serde_json::to_string(&quote)?;
            Ok(Response::builder()
                .status(200)
                .header("content-type", "application/json")
                .body(Body::from(body))?)
        }
        Err(e) => error_response(400, &e.to_string()),
    }
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let engine = QuoteEngine::default();
    let engine_ref = &engine;

    run(service_fn(move |event| async move {
        function_handler(engine_ref, event).await
    }))
    .await
}
