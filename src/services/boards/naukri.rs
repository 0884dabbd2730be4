//! Naukri job search mapping.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{BoardSchema, Sample};
use crate::models::{ListingDetails, Provider, SearchParams, non_blank};
use crate::utils::record::{self, owned, text, text_or};
use crate::utils::time::posted_label;

/// Naukri `GET /jobs`, records under `jobs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naukri;

impl BoardSchema for Naukri {
    fn provider(&self) -> Provider {
        Provider::Naukri
    }

    fn resource_path(&self) -> &'static str {
        "jobs"
    }

    fn records_key(&self) -> &'static str {
        "jobs"
    }

    fn query(&self, params: &SearchParams, limit: usize) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(q) = non_blank(&params.query) {
            query.push(("q", q.to_string()));
        }
        if let Some(location) = non_blank(&params.location) {
            query.push(("l", location.to_string()));
        }
        if let Some(experience) = non_blank(&params.experience) {
            query.push(("exp", experience.to_string()));
        }
        query.push(("limit", limit.to_string()));
        query
    }

    fn raw_skills(&self, record: &Value) -> Vec<String> {
        record::skills(record, "keySkills").unwrap_or_default()
    }

    fn details(&self, record: &Value, local_id: &str, now: DateTime<Utc>) -> ListingDetails {
        ListingDetails {
            title: text_or(record, "jobTitle", "Frontend Developer"),
            organization: text_or(record, "companyName", "Startup Inc"),
            location: text_or(record, "jobLocation", "Mumbai, India"),
            compensation: text_or(record, "packageOffered", "₹8-15 LPA"),
            employment_type: text_or(record, "jobType", "Full-time"),
            experience_level: text_or(record, "experience", "2-4 years"),
            required_skills: record::skills(record, "keySkills")
                .unwrap_or_else(|| owned(&["React", "JavaScript", "CSS"])),
            description: text_or(record, "jobDescription", "Join our dynamic team..."),
            posted_at: posted_label(record.get("createdDate"), now)
                .unwrap_or_else(|| "2 days ago".to_string()),
            application_url: text(record, "jdURL")
                .unwrap_or_else(|| format!("https://naukri.com/job/{local_id}")),
            logo_url: text(record, "logoPath"),
        }
    }

    fn samples(&self) -> Vec<Sample> {
        vec![Sample {
            local_id: "1",
            score: 88,
            details: ListingDetails {
                title: "Frontend Developer".to_string(),
                organization: "StartupXYZ".to_string(),
                location: "Mumbai, India".to_string(),
                compensation: "₹8-15 LPA".to_string(),
                employment_type: "Full-time".to_string(),
                experience_level: "2-4 years".to_string(),
                required_skills: owned(&["React", "JavaScript", "CSS", "Redux"]),
                description: "Join our dynamic team as a frontend developer...".to_string(),
                posted_at: "1 day ago".to_string(),
                application_url: "https://naukri.com/job/456".to_string(),
                logo_url: None,
            },
        }]
    }
}
