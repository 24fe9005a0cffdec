use reqwest::StatusCode;

use crate::checker::printer::Printer;
use crate::checker::service::{Method, Outcome, Service};

/// Checks that the base page of the service loads.
///
/// This check is the precondition for the whole run: callers abort when it
/// fails.
pub async fn run<P: Printer>(service: &mut Service<P>) -> Outcome {
    service
        .run_check("Base page load", Method::Get, "v0", StatusCode::OK, None, None)
        .await
}
