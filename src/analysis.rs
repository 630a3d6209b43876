//! Marker-based parsing of the model's analysis text.
//!
//! The edit instruction asks the model to answer with `직업명:` (job title)
//! and `이유:` (reason) markers, but the reply format is not contractually
//! guaranteed. Parsing is therefore lenient: an absent marker falls back to
//! treating the remaining text as the description instead of failing.

use crate::models::CareerAnalysis;
use regex::Regex;
use std::sync::OnceLock;

/// Fallback title when no career was given and the reply has no title marker.
pub const FALLBACK_TITLE: &str = "분석 결과";

fn title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Capture runs to the end of the marker's own line only.
    RE.get_or_init(|| Regex::new(r"(?i)(?:직업명|job[ \t]?title)[ \t]*:[ \t]*([^\n]*)").unwrap())
}

fn reason_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (?s) lets the capture span newlines to the end of the text.
    RE.get_or_init(|| Regex::new(r"(?is)(?:이유|reason)[ \t]*:[ \t]*(.*)").unwrap())
}

/// Parse the model's reply into a `{title, description}` pair.
///
/// When `career` is given the title is the career verbatim and the job-title
/// marker is ignored entirely; only the reason marker is consulted for the
/// description. Without a career, the title comes from the job-title marker's
/// line (or [`FALLBACK_TITLE`]) and the description from the reason marker,
/// with the documented fallbacks when either marker is missing.
pub fn parse_analysis_text(text: &str, career: Option<&str>) -> CareerAnalysis {
    if let Some(career) = career {
        let description = match reason_regex().captures(text) {
            Some(caps) => caps[1].trim().to_string(),
            None => text.trim().to_string(),
        };
        return CareerAnalysis {
            title: career.to_string(),
            description,
        };
    }

    let title_match = title_regex().captures(text);
    let title = title_match
        .as_ref()
        .map(|caps| caps[1].trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string();

    let description = match reason_regex().captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => match title_match.as_ref().and_then(|caps| caps.get(0)) {
            // Title marker found but no reason marker: drop the title line
            // and treat the rest as the description.
            Some(matched) => {
                let mut rest = String::with_capacity(text.len());
                rest.push_str(&text[..matched.start()]);
                rest.push_str(&text[matched.end()..]);
                rest.trim().to_string()
            }
            None => text.trim().to_string(),
        },
    };

    CareerAnalysis { title, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_path_parses_both_markers() {
        let analysis = parse_analysis_text("직업명: Chef\n이유: Added an apron.", None);
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "Added an apron.");
    }

    #[test]
    fn test_auto_path_without_markers_falls_back() {
        let analysis = parse_analysis_text("some free text with no markers", None);
        assert_eq!(analysis.title, FALLBACK_TITLE);
        assert_eq!(analysis.description, "some free text with no markers");
    }

    #[test]
    fn test_career_path_uses_career_verbatim() {
        let analysis = parse_analysis_text("이유: because space.", Some("Astronaut"));
        assert_eq!(analysis.title, "Astronaut");
        assert_eq!(analysis.description, "because space.");
    }

    #[test]
    fn test_career_path_ignores_job_title_marker() {
        let analysis = parse_analysis_text("직업명: Pilot\n이유: flight suit.", Some("Astronaut"));
        assert_eq!(analysis.title, "Astronaut");
        assert_eq!(analysis.description, "flight suit.");
    }

    #[test]
    fn test_career_path_without_reason_keeps_whole_text() {
        let analysis = parse_analysis_text("  I changed the outfit.  ", Some("Chef"));
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "I changed the outfit.");
    }

    #[test]
    fn test_markers_are_case_insensitive_in_english() {
        let analysis = parse_analysis_text("JOB TITLE: Chef\nREASON: Added an apron.", None);
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "Added an apron.");
    }

    #[test]
    fn test_description_spans_newlines() {
        let analysis =
            parse_analysis_text("직업명: Chef\n이유: Added an apron.\nAnd a hat.", None);
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "Added an apron.\nAnd a hat.");
    }

    #[test]
    fn test_title_capture_stops_at_line_break() {
        let analysis = parse_analysis_text("직업명: Chef\nextra prose here", None);
        assert_eq!(analysis.title, "Chef");
    }

    #[test]
    fn test_title_without_reason_removes_title_line() {
        let analysis = parse_analysis_text("Intro.\n직업명: Chef\nThe rest of it.", None);
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "Intro.\n\nThe rest of it.");
    }

    #[test]
    fn test_blank_title_line_falls_back() {
        let analysis = parse_analysis_text("직업명:\n이유: something.", None);
        assert_eq!(analysis.title, FALLBACK_TITLE);
        assert_eq!(analysis.description, "something.");
    }

    #[test]
    fn test_results_are_trimmed() {
        let analysis = parse_analysis_text("직업명:   Chef  \n이유:   spaced out.  ", None);
        assert_eq!(analysis.title, "Chef");
        assert_eq!(analysis.description, "spaced out.");
    }
}
