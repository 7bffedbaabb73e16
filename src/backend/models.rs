//! NexusLink backend data models.
//!
//! The backend stores each collection as a mapping from generated id to
//! record fields; these structures deserialize that wire shape and convert
//! it into the ordered lists the application works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate profile submitted through the talent form.
///
/// Immutable after fetch; the view only ever replaces the whole list or
/// derives filtered copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Storage-assigned id (the mapping key)
    pub id: String,
    /// Candidate's full name
    pub full_name: String,
    /// Postal address text
    pub address: String,
    /// Academic degree
    pub degree: String,
    /// Contact phone number
    pub phone_no: String,
    /// LinkedIn profile URL, if provided
    pub linkedin: Option<String>,
    /// Skill tags in submission order (may be empty)
    pub skills: Vec<String>,
    /// Submission timestamp
    pub posted_at: DateTime<Utc>,
}

impl CandidateRecord {
    /// Format the submission date as a readable string.
    pub fn format_posted(&self) -> String {
        self.posted_at.format("%d.%m.%Y").to_string()
    }
}

/// A startup idea submitted through the founder form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaRecord {
    /// Storage-assigned id (the mapping key)
    pub id: String,
    /// Founder's name
    pub founder_name: String,
    /// Founder's degree, if provided
    pub founder_degree: Option<String>,
    /// Company name (existing or proposed)
    pub company_name: String,
    /// Project or idea name
    pub project_name: String,
    /// Free-text idea description
    pub idea_description: String,
    /// "Planning" or "Existing"
    pub startup_status: Option<String>,
    /// Roles or help the founder is looking for
    pub needs: Vec<String>,
    /// Founder's own skill tags
    pub founder_skills: Vec<String>,
    /// Submission timestamp
    pub posted_at: DateTime<Utc>,
}

/// Candidate fields as stored by the backend (wire form, without the id).
#[derive(Debug, Deserialize)]
pub struct ApiCandidateFields {
    /// Full name
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Postal address
    #[serde(default)]
    pub address: String,
    /// Academic degree
    #[serde(default)]
    pub degree: String,
    /// Phone number
    #[serde(rename = "phoneNo", default)]
    pub phone_no: String,
    /// LinkedIn URL
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Skill tags
    #[serde(default)]
    pub skills: Vec<String>,
    /// Submission time in RFC 3339
    #[serde(rename = "postedAt")]
    pub posted_at: String,
}

/// Idea fields as stored by the backend (wire form, without the id).
#[derive(Debug, Deserialize)]
pub struct ApiIdeaFields {
    /// Founder's name
    #[serde(rename = "founderName")]
    pub founder_name: String,
    /// Founder's degree
    #[serde(rename = "founderDegree", default)]
    pub founder_degree: Option<String>,
    /// Company name
    #[serde(rename = "companyName", default)]
    pub company_name: String,
    /// Project name
    #[serde(rename = "projectName", default)]
    pub project_name: String,
    /// Idea description
    #[serde(rename = "ideaDescription", default)]
    pub idea_description: String,
    /// Startup status
    #[serde(rename = "startupStatus", default)]
    pub startup_status: Option<String>,
    /// Needs list
    #[serde(default)]
    pub needs: Vec<String>,
    /// Founder's skills
    #[serde(rename = "founderSkills", default)]
    pub founder_skills: Vec<String>,
    /// Submission time in RFC 3339
    #[serde(rename = "postedAt")]
    pub posted_at: String,
}

impl ApiCandidateFields {
    /// Attach the storage id and parse wire fields into a `CandidateRecord`.
    fn into_record(self, id: String) -> anyhow::Result<CandidateRecord> {
        let posted_at = parse_posted_at(&self.posted_at)?;
        Ok(CandidateRecord {
            id,
            full_name: self.full_name,
            address: self.address,
            degree: self.degree,
            phone_no: self.phone_no,
            linkedin: self.linkedin.filter(|l| !l.is_empty()),
            skills: self.skills,
            posted_at,
        })
    }
}

impl ApiIdeaFields {
    /// Attach the storage id and parse wire fields into an `IdeaRecord`.
    fn into_record(self, id: String) -> anyhow::Result<IdeaRecord> {
        let posted_at = parse_posted_at(&self.posted_at)?;
        Ok(IdeaRecord {
            id,
            founder_name: self.founder_name,
            founder_degree: self.founder_degree.filter(|d| !d.is_empty()),
            company_name: self.company_name,
            project_name: self.project_name,
            idea_description: self.idea_description,
            startup_status: self.startup_status.filter(|s| !s.is_empty()),
            needs: self.needs,
            founder_skills: self.founder_skills,
            posted_at,
        })
    }
}

/// Parse a submission timestamp (RFC 3339, as written by the forms).
fn parse_posted_at(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse postedAt '{}': {}", raw, e))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Turn the backend's id-to-fields mapping into the master candidate list.
///
/// # Details
/// Attaches each mapping key as the record id, drops records whose
/// timestamp cannot be parsed, and sorts by submission time descending.
/// That fetch-time order is the default display order.
pub fn candidates_from_mapping(
    mapping: HashMap<String, ApiCandidateFields>,
) -> Vec<CandidateRecord> {
    let mut records = Vec::with_capacity(mapping.len());
    for (id, fields) in mapping {
        match fields.into_record(id) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("Skipping malformed candidate record: {}", e),
        }
    }
    records.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    records
}

/// Turn the backend's id-to-fields mapping into the idea list.
///
/// # Details
/// Same shape as `candidates_from_mapping`; newest ideas first, since the
/// mapping itself carries no order.
pub fn ideas_from_mapping(mapping: HashMap<String, ApiIdeaFields>) -> Vec<IdeaRecord> {
    let mut records = Vec::with_capacity(mapping.len());
    for (id, fields) in mapping {
        match fields.into_record(id) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("Skipping malformed idea record: {}", e),
        }
    }
    records.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_json(name: &str, posted_at: &str) -> String {
        format!(
            r#"{{
                "fullName": "{}",
                "address": "Kandy",
                "degree": "BSc in Computer Science",
                "phoneNo": "0771234567",
                "linkedin": "https://linkedin.com/in/test",
                "skills": ["SQL", "Go"],
                "postedAt": "{}"
            }}"#,
            name, posted_at
        )
    }

    #[test]
    fn test_candidates_sorted_newest_first_with_ids_attached() {
        let json = format!(
            r#"{{ "-Na1": {}, "-Nb2": {} }}"#,
            candidate_json("Bea", "2024-01-01T10:00:00Z"),
            candidate_json("Al", "2024-02-01T10:00:00Z")
        );
        let mapping: HashMap<String, ApiCandidateFields> = serde_json::from_str(&json).unwrap();
        let records = candidates_from_mapping(mapping);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].full_name, "Al");
        assert_eq!(records[0].id, "-Nb2");
        assert_eq!(records[1].full_name, "Bea");
        assert_eq!(records[1].id, "-Na1");
    }

    #[test]
    fn test_candidate_optional_fields_default() {
        let json = r#"{
            "fullName": "Cy",
            "postedAt": "2024-03-01T08:30:00Z"
        }"#;
        let fields: ApiCandidateFields = serde_json::from_str(json).unwrap();
        let record = fields.into_record("-Nc3".to_string()).unwrap();
        assert_eq!(record.full_name, "Cy");
        assert!(record.address.is_empty());
        assert!(record.linkedin.is_none());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_malformed_timestamp_is_skipped() {
        let json = format!(
            r#"{{ "-Na1": {}, "-Nb2": {} }}"#,
            candidate_json("Bea", "not-a-date"),
            candidate_json("Al", "2024-02-01T10:00:00Z")
        );
        let mapping: HashMap<String, ApiCandidateFields> = serde_json::from_str(&json).unwrap();
        let records = candidates_from_mapping(mapping);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "Al");
    }

    #[test]
    fn test_idea_from_mapping() {
        let json = r#"{
            "-Ni1": {
                "founderName": "Dana",
                "companyName": "Nexus Labs",
                "projectName": "CampusCart",
                "ideaDescription": "Grocery delivery for universities",
                "startupStatus": "Planning",
                "needs": ["CTO"],
                "founderSkills": ["Marketing"],
                "postedAt": "2024-04-01T12:00:00Z"
            }
        }"#;
        let mapping: HashMap<String, ApiIdeaFields> = serde_json::from_str(json).unwrap();
        let records = ideas_from_mapping(mapping);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "-Ni1");
        assert_eq!(records[0].project_name, "CampusCart");
        assert_eq!(records[0].needs, ["CTO"]);
        assert!(records[0].founder_degree.is_none());
    }

    #[test]
    fn test_empty_linkedin_treated_as_absent() {
        let json = r#"{
            "fullName": "Eve",
            "linkedin": "",
            "postedAt": "2024-03-01T08:30:00Z"
        }"#;
        let fields: ApiCandidateFields = serde_json::from_str(json).unwrap();
        let record = fields.into_record("-Ne5".to_string()).unwrap();
        assert!(record.linkedin.is_none());
    }

    #[test]
    fn test_format_posted() {
        let fields: ApiCandidateFields = serde_json::from_str(
            r#"{ "fullName": "Al", "postedAt": "2024-02-01T10:00:00Z" }"#,
        )
        .unwrap();
        let record = fields.into_record("x".to_string()).unwrap();
        assert_eq!(record.format_posted(), "01.02.2024");
    }
}
