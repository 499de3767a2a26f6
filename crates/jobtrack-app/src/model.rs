// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use time::format_description::BorrowedFormatItem;

use crate::ids::ApplicationId;

pub const ISO_DATE: &[BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

const HUMAN_DATE: &[BorrowedFormatItem<'_>] =
    time::macros::format_description!("[month repr:short] [day padding:none], [year]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::Applied,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
        Self::Withdrawn,
    ];

    /// Wire form, matching the server's stored values.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Lower-cased name, used to key the status badge styling.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Applied" => Some(Self::Applied),
            "Interview" => Some(Self::Interview),
            "Offer" => Some(Self::Offer),
            "Rejected" => Some(Self::Rejected),
            "Withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }
}

/// One tracked job application, as the server reports it. The client never
/// constructs these except by decoding a server response; all local edits go
/// through [`crate::forms::ApplicationFormInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: ApplicationId,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    #[serde(with = "iso_date", default)]
    pub date_applied: Option<Date>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub notes: String,
}

/// Aggregate counts from `/api/stats`. Statuses absent from `by_status`
/// count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total: usize,
    #[serde(default)]
    pub by_status: BTreeMap<String, usize>,
}

impl Stats {
    pub fn count_for(&self, status: ApplicationStatus) -> usize {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), ISO_DATE).ok()
}

/// Display-only short form, e.g. "Jan 5, 2024". The unformatted ISO value is
/// what the form and the wire carry.
pub fn format_human_date(date: Option<Date>) -> String {
    match date {
        Some(date) => date.format(HUMAN_DATE).unwrap_or_else(|_| date.to_string()),
        None => "-".to_owned(),
    }
}

/// The server stores `date_applied` as an ISO string and may send it empty;
/// both missing and unparseable values land as `None`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&super::format_iso_date(*date)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_iso_date))
    }
}

#[cfg(test)]
mod tests {
    use super::{Application, ApplicationStatus, Stats, format_human_date, parse_iso_date};
    use time::{Date, Month};

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse("Ghosted"), None);
    }

    #[test]
    fn record_decodes_with_optional_fields_missing() {
        let decoded: Application = serde_json::from_str(
            r#"{"_id":"a1","company":"Acme","position":"Engineer","status":"Applied"}"#,
        )
        .expect("decode minimal record");
        assert_eq!(decoded.id.as_str(), "a1");
        assert_eq!(decoded.date_applied, None);
        assert!(decoded.location.is_empty());
        assert!(decoded.job_url.is_empty());
    }

    #[test]
    fn record_decodes_iso_date_and_ignores_empty_string() {
        let decoded: Application = serde_json::from_str(
            r#"{"_id":"a1","company":"Acme","position":"Engineer","status":"Offer","date_applied":"2024-01-05"}"#,
        )
        .expect("decode dated record");
        assert_eq!(
            decoded.date_applied,
            Some(Date::from_calendar_date(2024, Month::January, 5).expect("valid date")),
        );

        let blank: Application = serde_json::from_str(
            r#"{"_id":"a2","company":"Acme","position":"Engineer","status":"Applied","date_applied":""}"#,
        )
        .expect("decode record with empty date");
        assert_eq!(blank.date_applied, None);
    }

    #[test]
    fn human_date_uses_short_month_form() {
        let date = Date::from_calendar_date(2024, Month::January, 5).expect("valid date");
        assert_eq!(format_human_date(Some(date)), "Jan 5, 2024");
        assert_eq!(format_human_date(None), "-");
    }

    #[test]
    fn iso_date_parse_rejects_garbage() {
        assert!(parse_iso_date("2024-01-05").is_some());
        assert!(parse_iso_date("01/05/2024").is_none());
        assert!(parse_iso_date("").is_none());
    }

    #[test]
    fn stats_default_missing_status_keys_to_zero() {
        let stats: Stats =
            serde_json::from_str(r#"{"total":3,"by_status":{"Applied":2,"Offer":1}}"#)
                .expect("decode stats");
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count_for(ApplicationStatus::Applied), 2);
        assert_eq!(stats.count_for(ApplicationStatus::Interview), 0);
        assert_eq!(stats.count_for(ApplicationStatus::Offer), 1);
    }

    #[test]
    fn stats_decode_without_by_status_map() {
        let stats: Stats = serde_json::from_str(r#"{"total":0}"#).expect("decode bare stats");
        assert_eq!(stats.count_for(ApplicationStatus::Rejected), 0);
    }
}
