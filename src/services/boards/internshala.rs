//! Internshala internship search mapping.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{BoardSchema, Sample};
use crate::models::{ListingDetails, Provider, SearchParams, non_blank};
use crate::utils::record::{self, owned, text, text_or};
use crate::utils::time::posted_label;

/// Internshala `GET /internships`, records under `internships`.
///
/// Every record is an internship, so type and experience are fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Internshala;

impl BoardSchema for Internshala {
    fn provider(&self) -> Provider {
        Provider::Internshala
    }

    fn resource_path(&self) -> &'static str {
        "internships"
    }

    fn records_key(&self) -> &'static str {
        "internships"
    }

    fn query(&self, params: &SearchParams, limit: usize) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(q) = non_blank(&params.query) {
            query.push(("search", q.to_string()));
        }
        if let Some(location) = non_blank(&params.location) {
            query.push(("location", location.to_string()));
        }
        if let Some(job_type) = non_blank(&params.job_type) {
            query.push(("type", job_type.to_string()));
        }
        query.push(("per_page", limit.to_string()));
        query
    }

    fn raw_skills(&self, record: &Value) -> Vec<String> {
        record::skills(record, "skills").unwrap_or_default()
    }

    fn details(&self, record: &Value, local_id: &str, now: DateTime<Utc>) -> ListingDetails {
        ListingDetails {
            title: text_or(record, "title", "Data Science Intern"),
            organization: text_or(record, "company", "AI Solutions"),
            location: text_or(record, "location", "Delhi, India"),
            compensation: text_or(record, "stipend", "₹20,000/month"),
            employment_type: "Internship".to_string(),
            experience_level: "0-1 years".to_string(),
            required_skills: record::skills(record, "skills")
                .unwrap_or_else(|| owned(&["Python", "Machine Learning", "SQL"])),
            description: text_or(record, "description", "Exciting internship opportunity..."),
            posted_at: posted_label(record.get("start_date"), now)
                .unwrap_or_else(|| "3 days ago".to_string()),
            application_url: text(record, "url")
                .unwrap_or_else(|| format!("https://internshala.com/internship/{local_id}")),
            logo_url: text(record, "company_logo"),
        }
    }

    fn samples(&self) -> Vec<Sample> {
        vec![Sample {
            local_id: "1",
            score: 85,
            details: ListingDetails {
                title: "Data Science Intern".to_string(),
                organization: "AI Solutions".to_string(),
                location: "Delhi, India".to_string(),
                compensation: "₹20,000/month".to_string(),
                employment_type: "Internship".to_string(),
                experience_level: "0-1 years".to_string(),
                required_skills: owned(&["Python", "Machine Learning", "SQL", "Pandas"]),
                description: "Exciting internship opportunity in data science...".to_string(),
                posted_at: "3 days ago".to_string(),
                application_url: "https://internshala.com/internship/789".to_string(),
                logo_url: None,
            },
        }]
    }
}
