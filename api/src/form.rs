//! Profile assembly from form input.
//!
//! The create screen collects each tag category from two sources: a fixed
//! checkbox group and a free-text "other" field with comma-separated custom
//! entries. [`TagSelection`] merges the two; [`ProfileDraft`] holds the whole
//! form and validates it into a [`Profile`] before anything touches the
//! network.

use thiserror::Error;

use crate::models::Profile;

/// Validation failures raised before submission. Display strings are shown
/// to the user as-is.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields (marked with *)")]
    MissingRequired,

    #[error("Please select or add at least one strength")]
    NoStrengths,

    #[error("Please select or add at least one weakness")]
    NoWeaknesses,
}

/// One tag category: checked options plus a free-text "other" field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagSelection {
    pub checked: Vec<String>,
    pub other: String,
}

impl TagSelection {
    /// Merge both sources into the comma-and-space separated string the
    /// backend expects. Checked options come first, then the custom tokens;
    /// empty tokens from the free-text field are dropped.
    pub fn joined(&self) -> String {
        let mut tags: Vec<&str> = self
            .checked
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        tags.extend(self.other.split(',').map(str::trim).filter(|t| !t.is_empty()));
        tags.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.joined().is_empty()
    }
}

/// Raw form state for the create screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDraft {
    pub id: String,
    pub name: String,
    pub strengths: TagSelection,
    pub weaknesses: TagSelection,
    pub preferences: TagSelection,
    pub description: String,
}

impl ProfileDraft {
    /// Validate and normalize the draft into a sendable [`Profile`].
    ///
    /// `id` and `name` are required; at least one strength and one weakness
    /// must be present from either source. Preferences and description are
    /// optional.
    pub fn into_profile(self) -> Result<Profile, FormError> {
        let id = self.id.trim().to_string();
        let name = self.name.trim().to_string();
        if id.is_empty() || name.is_empty() {
            return Err(FormError::MissingRequired);
        }

        let strengths = self.strengths.joined();
        if strengths.is_empty() {
            return Err(FormError::NoStrengths);
        }
        let weaknesses = self.weaknesses.joined();
        if weaknesses.is_empty() {
            return Err(FormError::NoWeaknesses);
        }

        Ok(Profile {
            id,
            name,
            strengths,
            weaknesses,
            preferences: self.preferences.joined(),
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(checked: &[&str], other: &str) -> TagSelection {
        TagSelection {
            checked: checked.iter().map(|s| s.to_string()).collect(),
            other: other.to_string(),
        }
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            id: "s1".to_string(),
            name: "Ann".to_string(),
            strengths: selection(&["Math"], ""),
            weaknesses: selection(&["Writing"], ""),
            ..Default::default()
        }
    }

    #[test]
    fn custom_tokens_are_split_trimmed_and_merged_after_checked() {
        let sel = selection(&["Math"], "Physics,  , Chemistry ");
        assert_eq!(sel.joined(), "Math, Physics, Chemistry");
    }

    #[test]
    fn empty_custom_entries_are_dropped() {
        let sel = selection(&[], "Math, , Science");
        assert_eq!(sel.joined(), "Math, Science");
    }

    #[test]
    fn a_valid_draft_produces_a_trimmed_profile() {
        let mut draft = valid_draft();
        draft.id = "  s1 ".to_string();
        draft.description = "  evening learner ".to_string();

        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.id, "s1");
        assert_eq!(profile.strengths, "Math");
        assert_eq!(profile.description, "evening learner");
        assert!(profile.preferences.is_empty());
    }

    #[test]
    fn missing_id_or_name_is_rejected() {
        let mut draft = valid_draft();
        draft.id = "   ".to_string();
        assert_eq!(draft.into_profile(), Err(FormError::MissingRequired));

        let mut draft = valid_draft();
        draft.name = String::new();
        assert_eq!(draft.into_profile(), Err(FormError::MissingRequired));
    }

    #[test]
    fn at_least_one_strength_and_weakness_is_required() {
        let mut draft = valid_draft();
        draft.strengths = TagSelection::default();
        assert_eq!(draft.into_profile(), Err(FormError::NoStrengths));

        let mut draft = valid_draft();
        draft.weaknesses = selection(&[], "  ,  ");
        assert_eq!(draft.into_profile(), Err(FormError::NoWeaknesses));
    }

    #[test]
    fn a_custom_token_alone_satisfies_the_requirement() {
        let mut draft = valid_draft();
        draft.strengths = selection(&[], "Robotics");
        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.strengths, "Robotics");
    }
}
