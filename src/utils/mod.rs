//! Utility functions and helpers.

pub mod http;
pub mod record;
pub mod time;

use url::Url;

/// Join an API base URL and a resource path, then append query pairs.
///
/// The base may or may not end in a slash; its existing path is kept.
pub fn build_endpoint(base: &str, path: &str, query: &[(&str, String)]) -> Result<Url, url::ParseError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if query.is_empty() {
        Url::parse(&joined)
    } else {
        Url::parse_with_params(&joined, query.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_endpoint_keeps_base_path() {
        let url = build_endpoint("https://api.linkedin.com/v2", "/jobSearch", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.linkedin.com/v2/jobSearch");

        let url = build_endpoint("https://api.linkedin.com/v2/", "jobSearch", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.linkedin.com/v2/jobSearch");
    }

    #[test]
    fn test_build_endpoint_encodes_query() {
        let url = build_endpoint(
            "https://www.naukri.com/jobapi",
            "jobs",
            &[("q", "node js".to_string()), ("limit", "5".to_string())],
        )
        .unwrap();
        assert_eq!(url.path(), "/jobapi/jobs");
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "node js".to_string()),
                ("limit".to_string(), "5".to_string())
            ]
        );
    }

    #[test]
    fn test_build_endpoint_rejects_garbage() {
        assert!(build_endpoint("not a url", "jobs", &[]).is_err());
    }
}
