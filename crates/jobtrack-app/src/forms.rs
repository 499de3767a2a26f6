// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::model::{Application, ApplicationStatus};

/// Editable field values for one form session. Required-field enforcement is
/// the server's job; the client only shuttles the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFormInput {
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub date_applied: Option<Date>,
    pub location: String,
    pub salary: String,
    pub job_url: String,
    pub notes: String,
}

impl ApplicationFormInput {
    /// Blank payload for a create session; the date field defaults to today.
    pub fn blank(today: Date) -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            status: ApplicationStatus::Applied,
            date_applied: Some(today),
            location: String::new(),
            salary: String::new(),
            job_url: String::new(),
            notes: String::new(),
        }
    }

    /// Snapshot of a fetched record, taken when an edit session opens.
    pub fn from_record(record: &Application) -> Self {
        Self {
            company: record.company.clone(),
            position: record.position.clone(),
            status: record.status,
            date_applied: record.date_applied,
            location: record.location.clone(),
            salary: record.salary.clone(),
            job_url: record.job_url.clone(),
            notes: record.notes.clone(),
        }
    }
}
