use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use thiserror::Error;

use super::checks::{generate, page};
use super::config::Configuration;
use super::printer::Printer;

/// Timeout applied to every GET request.
pub const GET_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout applied to every POST request. Generation endpoints call a
/// downstream provider, so they are allowed to be slower.
pub const POST_TIMEOUT: Duration = Duration::from_secs(30);

const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        match self {
            Method::Get => GET_TIMEOUT,
            Method::Post => POST_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build an HTTP client: {err:?}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
    #[error("Request failed to get a response: {err:?}")]
    ResponseError { err: Arc<reqwest::Error> },
    #[error("Invalid check endpoint: {err:?}")]
    InvalidEndpoint { err: url::ParseError },
}

/// The result of one check, consumed immediately by the caller.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub passed: bool,
    pub body: Option<serde_json::Value>,
}

impl Outcome {
    fn failed() -> Self {
        Self { passed: false, body: None }
    }
}

/// Aggregated counters for a whole run. Drives the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub tests_run: usize,
    pub tests_passed: usize,
    pub aborted: bool,
}

impl RunReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.aborted && self.tests_passed == self.tests_run
    }
}

pub struct Service<P: Printer> {
    config: Arc<Configuration>,
    console: P,
    tests_run: usize,
    tests_passed: usize,
}

impl<P: Printer> Service<P> {
    pub fn new(config: Arc<Configuration>, console: P) -> Self {
        Self {
            config,
            console,
            tests_run: 0,
            tests_passed: 0,
        }
    }

    #[must_use]
    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    #[must_use]
    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    /// Runs the whole check sequence against the configured base URL.
    ///
    /// The base-page check is a precondition: when it fails, the remaining
    /// checks are skipped and the run is reported as aborted.
    pub async fn run_checks(mut self) -> RunReport {
        tracing::info!("Running smoke checks against {} ...", self.config.base_url);
        self.console.println(&format!("Running smoke checks against {} ...", self.config.base_url));

        if !page::run(&mut self).await.passed {
            self.console.eprintln("Base page failed to load, aborting remaining checks");
            return self.finish(true);
        }

        generate::run(&mut self).await;

        self.finish(false)
    }

    fn finish(self, aborted: bool) -> RunReport {
        let report = RunReport {
            tests_run: self.tests_run,
            tests_passed: self.tests_passed,
            aborted,
        };

        self.console
            .println(&format!("Checks summary: {}/{} passed", report.tests_passed, report.tests_run));

        if report.all_passed() {
            self.console.println("All checks passed");
        } else {
            self.console.eprintln("Some checks failed");
        }

        report
    }

    /// Runs one named check: issues the request and compares the response
    /// status code against `expected_status`.
    ///
    /// The run counter is incremented unconditionally; the pass counter only
    /// on a status match. Transport errors are recorded as a failed check,
    /// never propagated.
    pub async fn run_check(
        &mut self,
        name: &str,
        method: Method,
        endpoint: &str,
        expected_status: StatusCode,
        data: Option<serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> Outcome {
        self.tests_run += 1;

        tracing::debug!(name, ?method, endpoint, "running check");
        self.console.println(&format!("Checking {name} ..."));

        let response = match self.send_request(method, endpoint, data, headers).await {
            Ok(response) => response,
            Err(err) => {
                self.console.eprintln(&format!("✗ - {name} failed: {err}"));
                return Outcome::failed();
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status == expected_status {
            self.tests_passed += 1;
            self.console.println(&format!("✓ - {name}: status {status}"));

            // Best effort: response bodies that are not JSON are simply not
            // previewed.
            let body = serde_json::from_str::<serde_json::Value>(&text).ok();
            if let Some(pretty) = body.as_ref().and_then(|json| serde_json::to_string_pretty(json).ok()) {
                self.console.println(&format!("    Response: {}", preview(&pretty)));
            }

            Outcome { passed: true, body }
        } else {
            self.console
                .eprintln(&format!("✗ - {name}: expected status {expected_status}, got {status}"));
            if !text.is_empty() {
                self.console.eprintln(&format!("    Response: {}", preview(&text)));
            }

            Outcome::failed()
        }
    }

    async fn send_request(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> Result<Response, Error> {
        let url: Url = self
            .config
            .base_url
            .join(endpoint)
            .map_err(|err| Error::InvalidEndpoint { err })?;

        let client = HttpClient::builder()
            .timeout(method.timeout())
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        let request = match method {
            Method::Get => client.get(url),
            Method::Post => match data {
                Some(body) => client.post(url).json(&body),
                None => client.post(url),
            },
        };

        request
            .headers(headers.unwrap_or_else(default_headers))
            .send()
            .await
            .map_err(|e| Error::ResponseError { err: e.into() })
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();

    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}
