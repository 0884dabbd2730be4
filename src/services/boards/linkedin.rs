//! LinkedIn job search mapping.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{BoardSchema, Sample};
use crate::models::{ListingDetails, Provider, SearchParams, non_blank};
use crate::utils::record::{self, owned, text, text_or};
use crate::utils::time::posted_label;

/// LinkedIn `GET /jobSearch`, records under `elements`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedIn;

impl BoardSchema for LinkedIn {
    fn provider(&self) -> Provider {
        Provider::LinkedIn
    }

    fn resource_path(&self) -> &'static str {
        "jobSearch"
    }

    fn records_key(&self) -> &'static str {
        "elements"
    }

    fn query(&self, params: &SearchParams, limit: usize) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(q) = non_blank(&params.query) {
            query.push(("keywords", q.to_string()));
        }
        if let Some(location) = non_blank(&params.location) {
            query.push(("location", location.to_string()));
        }
        query.push(("count", limit.to_string()));
        query
    }

    fn extra_headers(&self) -> Vec<(&'static str, String)> {
        vec![("X-Restli-Protocol-Version", "2.0.0".to_string())]
    }

    fn raw_skills(&self, record: &Value) -> Vec<String> {
        record::skills(record, "skills").unwrap_or_default()
    }

    fn details(&self, record: &Value, local_id: &str, now: DateTime<Utc>) -> ListingDetails {
        ListingDetails {
            title: text_or(record, "title", "Software Engineer"),
            organization: text_or(record, "companyName", "Tech Company"),
            location: text_or(record, "location", "Remote"),
            compensation: text_or(record, "salary", "Competitive"),
            employment_type: text_or(record, "jobType", "Full-time"),
            experience_level: text_or(record, "experienceLevel", "2-5 years"),
            required_skills: record::skills(record, "skills")
                .unwrap_or_else(|| owned(&["JavaScript", "React", "Node.js"])),
            description: text_or(
                record,
                "description",
                "Exciting opportunity to join our team...",
            ),
            posted_at: posted_label(record.get("postedAt"), now)
                .unwrap_or_else(|| "1 day ago".to_string()),
            application_url: text(record, "applyUrl")
                .unwrap_or_else(|| format!("https://linkedin.com/jobs/{local_id}")),
            logo_url: text(record, "companyLogo"),
        }
    }

    fn samples(&self) -> Vec<Sample> {
        vec![Sample {
            local_id: "1",
            score: 92,
            details: ListingDetails {
                title: "Senior Software Engineer".to_string(),
                organization: "Tech Corp".to_string(),
                location: "Bangalore, India".to_string(),
                compensation: "₹15-25 LPA".to_string(),
                employment_type: "Full-time".to_string(),
                experience_level: "3-5 years".to_string(),
                required_skills: owned(&["React", "Node.js", "TypeScript", "AWS"]),
                description:
                    "We are looking for a senior software engineer to join our growing team..."
                        .to_string(),
                posted_at: "2 days ago".to_string(),
                application_url: "https://linkedin.com/jobs/123".to_string(),
                logo_url: Some("/placeholder.svg".to_string()),
            },
        }]
    }
}
