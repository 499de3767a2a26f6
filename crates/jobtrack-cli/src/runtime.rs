// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use jobtrack_api::Client;
use jobtrack_app::{
    Application, ApplicationFormInput, ApplicationId, ApplicationStatus, Stats, UserProfile,
};
use std::collections::BTreeMap;
use time::{Date, Month};

pub struct ApiRuntime {
    client: Client,
}

impl ApiRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl jobtrack_tui::AppRuntime for ApiRuntime {
    fn load_user(&mut self) -> Result<UserProfile> {
        self.client.fetch_user()
    }

    fn load_applications(&mut self) -> Result<Vec<Application>> {
        self.client.list_applications()
    }

    fn load_stats(&mut self) -> Result<Stats> {
        self.client.fetch_stats()
    }

    fn create_application(&mut self, input: &ApplicationFormInput) -> Result<()> {
        self.client.create_application(input)
    }

    fn update_application(&mut self, id: &ApplicationId, input: &ApplicationFormInput) -> Result<()> {
        self.client.update_application(id, input)
    }

    fn delete_application(&mut self, id: &ApplicationId) -> Result<()> {
        self.client.delete_application(id)
    }

    fn logout(&mut self) -> Result<()> {
        self.client.logout()
    }
}

/// Server-free runtime backing `--demo`. Records live in memory and stats are
/// recomputed on each fetch.
pub struct DemoRuntime {
    records: Vec<Application>,
    next_id: u64,
}

impl DemoRuntime {
    pub fn seeded() -> Self {
        let records = vec![
            demo_record(
                "demo-1",
                "Acme Robotics",
                "Backend Engineer",
                ApplicationStatus::Interview,
                Date::from_calendar_date(2026, Month::July, 14).ok(),
                "Remote",
                "https://jobs.acme.example/backend",
            ),
            demo_record(
                "demo-2",
                "Nimbus Cloud",
                "Platform Engineer",
                ApplicationStatus::Applied,
                Date::from_calendar_date(2026, Month::August, 2).ok(),
                "Berlin",
                "",
            ),
            demo_record(
                "demo-3",
                "Harbor Labs",
                "Systems Programmer",
                ApplicationStatus::Rejected,
                None,
                "",
                "https://harbor.example/careers/42",
            ),
        ];
        Self {
            next_id: records.len() as u64 + 1,
            records,
        }
    }

    fn apply_input(record: &mut Application, input: &ApplicationFormInput) {
        record.company = input.company.clone();
        record.position = input.position.clone();
        record.status = input.status;
        record.date_applied = input.date_applied;
        record.location = input.location.clone();
        record.salary = input.salary.clone();
        record.job_url = input.job_url.clone();
        record.notes = input.notes.clone();
    }
}

fn demo_record(
    id: &str,
    company: &str,
    position: &str,
    status: ApplicationStatus,
    date_applied: Option<Date>,
    location: &str,
    job_url: &str,
) -> Application {
    Application {
        id: ApplicationId::new(id),
        company: company.to_owned(),
        position: position.to_owned(),
        status,
        date_applied,
        location: location.to_owned(),
        salary: String::new(),
        job_url: job_url.to_owned(),
        notes: String::new(),
    }
}

impl jobtrack_tui::AppRuntime for DemoRuntime {
    fn load_user(&mut self) -> Result<UserProfile> {
        Ok(UserProfile {
            name: "Demo User".to_owned(),
        })
    }

    fn load_applications(&mut self) -> Result<Vec<Application>> {
        Ok(self.records.clone())
    }

    fn load_stats(&mut self) -> Result<Stats> {
        let mut by_status = BTreeMap::new();
        for record in &self.records {
            *by_status
                .entry(record.status.as_str().to_owned())
                .or_insert(0) += 1;
        }
        Ok(Stats {
            total: self.records.len(),
            by_status,
        })
    }

    fn create_application(&mut self, input: &ApplicationFormInput) -> Result<()> {
        let mut record = demo_record(
            &format!("demo-{}", self.next_id),
            "",
            "",
            input.status,
            None,
            "",
            "",
        );
        self.next_id += 1;
        Self::apply_input(&mut record, input);
        self.records.push(record);
        Ok(())
    }

    fn update_application(&mut self, id: &ApplicationId, input: &ApplicationFormInput) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or_else(|| anyhow!("Application not found"))?;
        Self::apply_input(record, input);
        Ok(())
    }

    fn delete_application(&mut self, id: &ApplicationId) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|record| record.id != *id);
        if self.records.len() == before {
            return Err(anyhow!("Application not found"));
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        Ok(())
    }
}
