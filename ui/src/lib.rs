//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{use_backend, BackendProvider, BackendStatus, BackendWarning};

mod banner;
pub use banner::ErrorBanner;

mod loading;
pub use loading::LoadingOverlay;

mod navbar;
pub use navbar::Navbar;

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod profile_form;
pub use profile_form::{ProfileForm, TagGroup, PREFERENCE_OPTIONS, SUBJECT_OPTIONS};

mod match_card;
pub use match_card::{match_subtitle, score_percentage, MatchCard, ScoreTier};
