// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobtrack_app::{
    Application, ApplicationFormInput, ApplicationId, Stats, UserProfile, format_iso_date,
};
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking client for the job-tracker REST API. Session establishment is
/// the server's concern; every call here is plain request/response.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("server.base_url must not be empty");
        }
        let parsed = url::Url::parse(&base_url)
            .with_context(|| format!("server.base_url {base_url:?} is not a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "server.base_url {base_url:?} must use http or https, got {:?}",
                parsed.scheme()
            );
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fetch_user(&self) -> Result<UserProfile> {
        let response = self
            .http
            .get(format!("{}/api/user", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let response = check_status(response)?;
        response.json().context("decode user response")
    }

    /// Full collection, in server-defined order (newest first).
    pub fn list_applications(&self) -> Result<Vec<Application>> {
        let response = self
            .http
            .get(format!("{}/api/applications", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let response = check_status(response)?;
        response.json().context("decode application list")
    }

    pub fn create_application(&self, input: &ApplicationFormInput) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/api/applications", self.base_url))
            .json(&ApplicationBody::new(input))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        check_status(response)?;
        Ok(())
    }

    pub fn update_application(&self, id: &ApplicationId, input: &ApplicationFormInput) -> Result<()> {
        let response = self
            .http
            .put(format!("{}/api/applications/{}", self.base_url, id))
            .json(&ApplicationBody::new(input))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        check_status(response)?;
        Ok(())
    }

    pub fn delete_application(&self, id: &ApplicationId) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/api/applications/{}", self.base_url, id))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        check_status(response)?;
        Ok(())
    }

    pub fn fetch_stats(&self) -> Result<Stats> {
        let response = self
            .http
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let response = check_status(response)?;
        response.json().context("decode stats response")
    }

    pub fn logout(&self) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/api/logout", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(clean_error_response(status, &body))
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check [server].base_url and that the tracker server is running ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

/// Wire body for create and update. Every writable field is a string; a
/// missing date goes over as "" to match what the browser form sends.
#[derive(Debug, Serialize)]
struct ApplicationBody<'a> {
    company: &'a str,
    position: &'a str,
    status: &'a str,
    date_applied: String,
    location: &'a str,
    salary: &'a str,
    job_url: &'a str,
    notes: &'a str,
}

impl<'a> ApplicationBody<'a> {
    fn new(input: &'a ApplicationFormInput) -> Self {
        Self {
            company: &input.company,
            position: &input.position,
            status: input.status.as_str(),
            date_applied: input.date_applied.map(format_iso_date).unwrap_or_default(),
            location: &input.location,
            salary: &input.salary,
            job_url: &input.job_url,
            notes: &input.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{ApplicationBody, Client, clean_error_response};
    use anyhow::Result;
    use jobtrack_app::{ApplicationFormInput, ApplicationStatus};
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn new_rejects_empty_and_non_http_urls() {
        assert!(Client::new("", Duration::from_secs(1)).is_err());
        assert!(Client::new("ftp://tracker.example", Duration::from_secs(1)).is_err());
        assert!(Client::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn new_trims_trailing_slashes() -> Result<()> {
        let client = Client::new("http://localhost:5000///", Duration::from_secs(1))?;
        assert_eq!(client.base_url(), "http://localhost:5000");
        Ok(())
    }

    #[test]
    fn body_serializes_missing_date_as_empty_string() -> Result<()> {
        let mut input = ApplicationFormInput::blank(
            time::Date::from_calendar_date(2024, time::Month::January, 5)?,
        );
        input.company = "Acme".to_owned();
        input.status = ApplicationStatus::Interview;
        input.date_applied = None;

        let encoded = serde_json::to_string(&ApplicationBody::new(&input))?;
        assert!(encoded.contains("\"company\":\"Acme\""));
        assert!(encoded.contains("\"status\":\"Interview\""));
        assert!(encoded.contains("\"date_applied\":\"\""));
        Ok(())
    }

    #[test]
    fn body_serializes_date_in_iso_form() -> Result<()> {
        let input = ApplicationFormInput::blank(
            time::Date::from_calendar_date(2024, time::Month::January, 5)?,
        );
        let encoded = serde_json::to_string(&ApplicationBody::new(&input))?;
        assert!(encoded.contains("\"date_applied\":\"2024-01-05\""));
        Ok(())
    }

    #[test]
    fn error_responses_surface_the_server_message() {
        let error = clean_error_response(StatusCode::NOT_FOUND, r#"{"error":"Application not found"}"#);
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Application not found"));
    }

    #[test]
    fn error_responses_fall_back_to_the_status_code() {
        let error = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"weird":true}"#);
        assert_eq!(error.to_string(), "server returned 500");
    }

    #[test]
    fn short_plain_error_bodies_are_passed_through() {
        let error = clean_error_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(error.to_string().contains("upstream down"));
    }
}
