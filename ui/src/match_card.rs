//! Match rendering: score banding and the result card.

use api::MatchResult;
use dioxus::prelude::*;

/// Color band for a match score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Success,
    Warning,
    Error,
}

impl ScoreTier {
    /// Success above 0.7, warning above 0.4, error otherwise.
    pub fn for_score(score: f64) -> Self {
        if score > 0.7 {
            Self::Success
        } else if score > 0.4 {
            Self::Warning
        } else {
            Self::Error
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "score-success",
            Self::Warning => "score-warning",
            Self::Error => "score-error",
        }
    }
}

/// Score as the rounded percentage shown on a card.
pub fn score_percentage(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Subtitle above the result list, pluralized on the match count.
pub fn match_subtitle(total_matches: u32, student_name: &str) -> String {
    let plural = if total_matches == 1 { "" } else { "es" };
    format!("Found {total_matches} perfect match{plural} for {student_name}")
}

/// One result card, in the order the backend ranked it. `index` staggers the
/// entry animation.
#[component]
pub fn MatchCard(result: MatchResult, index: usize) -> Element {
    let percentage = score_percentage(result.score);
    let tier_class = ScoreTier::for_score(result.score).css_class();
    let delay = index as f64 * 0.1;

    rsx! {
        div { class: "match-card", style: "animation-delay: {delay}s",
            div { class: "match-header",
                div { class: "match-info",
                    h3 { "{result.name}" }
                    p { class: "match-id", "ID: {result.student_id}" }
                }
                div { class: "match-score",
                    div { class: "score-label", "Match Score" }
                    div { class: "score-value {tier_class}", "{percentage}%" }
                }
            }
            div { class: "match-details",
                div { class: "detail-item",
                    div { class: "detail-label", "Their strengths (can help you with)" }
                    div { class: "detail-value", "{result.strengths}" }
                }
                div { class: "detail-item",
                    div { class: "detail-label", "They need help with (you can help them)" }
                    div { class: "detail-value", "{result.weaknesses}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exact() {
        // 0.70 is not "success", 0.40 is not "warning"
        assert_eq!(ScoreTier::for_score(0.70), ScoreTier::Warning);
        assert_eq!(ScoreTier::for_score(0.40), ScoreTier::Error);

        assert_eq!(ScoreTier::for_score(0.71), ScoreTier::Success);
        assert_eq!(ScoreTier::for_score(0.41), ScoreTier::Warning);
        assert_eq!(ScoreTier::for_score(0.0), ScoreTier::Error);
        assert_eq!(ScoreTier::for_score(1.0), ScoreTier::Success);
    }

    #[test]
    fn percentages_are_rounded_not_truncated() {
        assert_eq!(score_percentage(0.666), 67);
        assert_eq!(score_percentage(0.82), 82);
        assert_eq!(score_percentage(0.004), 0);
        assert_eq!(score_percentage(1.0), 100);
    }

    #[test]
    fn subtitle_pluralizes_on_the_match_count() {
        assert_eq!(match_subtitle(1, "Ann"), "Found 1 perfect match for Ann");
        assert_eq!(match_subtitle(2, "Ann"), "Found 2 perfect matches for Ann");
        assert_eq!(match_subtitle(0, "Ann"), "Found 0 perfect matches for Ann");
    }
}
