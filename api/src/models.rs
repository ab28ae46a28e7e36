//! # Wire models for the matcher backend
//!
//! Request and response bodies exchanged with the backend's REST API. The
//! shapes are dictated by the service; everything here is `Serialize +
//! Deserialize` and otherwise plain data.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Profile`] | `POST /profiles` request body |
//! | [`CreatedProfile`] | `POST /profiles` response |
//! | [`MatchResponse`] / [`MatchResult`] | `GET /match/{id}` response |
//! | [`ProfileList`] | `GET /profiles` response |
//! | [`DeletedProfile`] | `DELETE /profiles/{id}` response |
//! | [`ApiStatus`] | `GET /` health-check response |

use serde::{Deserialize, Serialize};

/// A student's self-reported learning attributes.
///
/// `strengths`, `weaknesses` and `preferences` are comma-and-space separated
/// tag lists; `preferences` and `description` may be empty. Built from form
/// state at submit time and sent once — never mutated locally afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub strengths: String,
    pub weaknesses: String,
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub description: String,
}

/// Echo returned after a profile is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedProfile {
    pub message: String,
    pub student_id: String,
    pub name: String,
}

/// One candidate peer, scored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub student_id: String,
    pub name: String,
    /// Compatibility score in `[0, 1]`.
    pub score: f64,
    pub strengths: String,
    pub weaknesses: String,
}

/// Ranked match list for one student. `matches` keeps the backend's order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub student_id: String,
    pub student_name: String,
    pub total_matches: u32,
    pub matches: Vec<MatchResult>,
}

/// All stored profiles, without embeddings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileList {
    pub total: u32,
    pub profiles: Vec<Profile>,
}

/// Confirmation returned after deleting a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedProfile {
    pub message: String,
    pub student_id: String,
}

/// Health-check body served at the backend root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_profiles: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_response_parses_the_backend_shape() {
        let raw = r#"{
            "student_id": "s1",
            "student_name": "Ann",
            "total_matches": 1,
            "matches": [
                {
                    "student_id": "s2",
                    "name": "Ben",
                    "score": 0.82,
                    "strengths": "Writing, History",
                    "weaknesses": "Math"
                }
            ]
        }"#;

        let resp: MatchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.student_name, "Ann");
        assert_eq!(resp.total_matches, 1);
        assert_eq!(resp.matches[0].student_id, "s2");
        assert!((resp.matches[0].score - 0.82).abs() < f64::EPSILON);
    }

    #[test]
    fn optional_profile_fields_default_to_empty() {
        let raw = r#"{"id":"s1","name":"Ann","strengths":"Math","weaknesses":"Writing"}"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert!(profile.preferences.is_empty());
        assert!(profile.description.is_empty());
    }
}
