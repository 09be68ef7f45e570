//! Pure text projections of a [`BriefRecord`].
//!
//! [`format_concise`] renders the one-line GET / WHO / TO / BY sentence and
//! [`format_full`] renders the sectioned plain-text document. Both are total
//! functions of the record; callers re-run them after every edit.

use crate::record::{BriefRecord, Field};

/// Rendered in place of an empty field in the full brief.
pub const PLACEHOLDER: &str = "\u{2014}";

pub const FALLBACK_WHO: &str = "the target audience";
pub const FALLBACK_INSIGHT: &str = "we know share this insight";
pub const FALLBACK_TO: &str = "drive action";
pub const FALLBACK_BY: &str = "showing how we solve their problem";

/// Trim, then uppercase only the first character.
///
/// ```
/// assert_eq!(brief_rs::format::tidy("  new parents "), "New parents");
/// assert_eq!(brief_rs::format::tidy(""), "");
/// ```
pub fn tidy(s: &str) -> String {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First non-empty candidate, else `fallback`. Whitespace counts as content.
fn first_present<'a>(candidates: &[&'a str], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
}

// ── Concise ───────────────────────────────────────────────────────────

/// `Get {WHO} who {INSIGHT} to {TO} by {BY}.`
///
/// WHO, TO and BY are tidied; INSIGHT is only trimmed. TO prefers the
/// desired behaviour over the comms objective.
pub fn format_concise(record: &BriefRecord) -> String {
    let who = first_present(&[record.audience.as_str()], FALLBACK_WHO);
    let insight = first_present(&[record.audience_insight.as_str()], FALLBACK_INSIGHT);
    let to = first_present(
        &[record.desired_behaviour.as_str(), record.comms_objective.as_str()],
        FALLBACK_TO,
    );
    let by = first_present(
        &[record.single_minded_prop.as_str(), record.reason_to_believe.as_str()],
        FALLBACK_BY,
    );

    format!(
        "Get {} who {} to {} by {}.",
        tidy(who),
        insight.trim(),
        tidy(to),
        tidy(by)
    )
}

// ── Full ──────────────────────────────────────────────────────────────

/// One block of the full document. Blocks are separated by a blank line.
enum Block {
    /// `LABEL: value` rows under an optional heading line.
    Rows {
        heading: Option<&'static str>,
        rows: &'static [(&'static str, Field)],
    },
    /// A heading line followed by the bare value.
    Prose { heading: &'static str, field: Field },
}

const LAYOUT: &[Block] = &[
    Block::Rows {
        heading: None,
        rows: &[
            ("PROJECT", Field::ProjectTitle),
            ("BRAND", Field::Brand),
            ("TYPE", Field::ProjectType),
            ("REQUESTER", Field::Requester),
            ("DUE", Field::DateDue),
            ("BUDGET", Field::Budget),
        ],
    },
    Block::Prose {
        heading: "BACKGROUND",
        field: Field::Background,
    },
    Block::Prose {
        heading: "CURRENT SITUATION",
        field: Field::CurrentSituation,
    },
    Block::Prose {
        heading: "KEY CHALLENGE",
        field: Field::KeyChallenge,
    },
    Block::Rows {
        heading: Some("AUDIENCE"),
        rows: &[
            ("Primary", Field::Audience),
            ("Secondary", Field::AudienceSecondary),
            ("Insight (WHO)", Field::AudienceInsight),
            ("Barriers", Field::AudienceBarriers),
        ],
    },
    Block::Rows {
        heading: Some("OBJECTIVES"),
        rows: &[
            ("Commercial", Field::CommercialObjective),
            ("Comms", Field::CommsObjective),
            ("Desired behaviour (GET/TO)", Field::DesiredBehaviour),
        ],
    },
    Block::Rows {
        heading: Some("PROPOSITION"),
        rows: &[
            ("Single\u{2011}minded proposition (BY)", Field::SingleMindedProp),
            ("Reasons to believe", Field::ReasonToBelieve),
            ("Tone of voice", Field::ToneOfVoice),
            ("Mandatories", Field::Mandatories),
        ],
    },
    Block::Rows {
        heading: Some("CHANNELS & DELIVERABLES"),
        rows: &[
            ("Primary channels", Field::PrimaryChannels),
            ("Deliverables", Field::Deliverables),
            ("Timings & milestones", Field::Timings),
        ],
    },
    Block::Rows {
        heading: Some("PRACTICALS"),
        rows: &[
            ("Brand/assets", Field::BrandAssets),
            ("Approvals", Field::Approvals),
            ("Measurement (success)", Field::Measurement),
            ("Legal/compliance", Field::Legal),
        ],
    },
];

fn slot(record: &BriefRecord, field: Field) -> &str {
    let value = record.get(field);
    if value.is_empty() { PLACEHOLDER } else { value }
}

/// The sectioned plain-text brief. Values are inserted verbatim; empty ones
/// become [`PLACEHOLDER`].
pub fn format_full(record: &BriefRecord) -> String {
    let mut out = String::with_capacity(1024);

    for (i, block) in LAYOUT.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Rows { heading, rows } => {
                if let Some(heading) = heading {
                    out.push_str(heading);
                    out.push('\n');
                }
                for (label, field) in rows.iter() {
                    out.push_str(label);
                    out.push_str(": ");
                    out.push_str(slot(record, *field));
                    out.push('\n');
                }
            }
            Block::Prose { heading, field } => {
                out.push_str(heading);
                out.push('\n');
                out.push_str(slot(record, *field));
                out.push('\n');
            }
        }
    }

    out
}

/// Heading lines of the full brief, in document order.
pub fn full_headings() -> impl Iterator<Item = &'static str> {
    LAYOUT.iter().filter_map(|block| match block {
        Block::Rows { heading, .. } => *heading,
        Block::Prose { heading, .. } => Some(*heading),
    })
}

/// Number of value slots in the full brief.
pub fn full_slot_count() -> usize {
    LAYOUT
        .iter()
        .map(|block| match block {
            Block::Rows { rows, .. } => rows.len(),
            Block::Prose { .. } => 1,
        })
        .sum()
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BriefRecord {
        BriefRecord::default()
            .updated("audience", "new parents")
            .updated("audienceInsight", "feel overwhelmed by choice")
            .updated("desiredBehaviour", "try the starter bundle")
            .updated("singleMindedProp", "one box, everything sorted")
    }

    #[test]
    fn tidy_capitalizes_first_char_only() {
        assert_eq!(tidy("drive action"), "Drive action");
        assert_eq!(tidy("  iPhone users  "), "IPhone users");
        assert_eq!(tidy("ALREADY"), "ALREADY");
        assert_eq!(tidy("\u{e9}lite"), "\u{c9}lite");
        assert_eq!(tidy("   "), "");
        assert_eq!(tidy(""), "");
    }

    #[test]
    fn concise_example() {
        assert_eq!(
            format_concise(&sample()),
            "Get New parents who feel overwhelmed by choice to Try the starter bundle by One box, everything sorted."
        );
    }

    #[test]
    fn concise_all_empty() {
        assert_eq!(
            format_concise(&BriefRecord::default()),
            "Get The target audience who we know share this insight to Drive action by Showing how we solve their problem."
        );
    }

    #[test]
    fn concise_to_prefers_desired_behaviour() {
        let both = BriefRecord::default()
            .updated("desiredBehaviour", "switch banks")
            .updated("commsObjective", "feel reassured");
        assert!(format_concise(&both).contains(" to Switch banks by "));

        let comms_only = BriefRecord::default().updated("commsObjective", "feel reassured");
        assert!(format_concise(&comms_only).contains(" to Feel reassured by "));
    }

    #[test]
    fn concise_by_falls_back_to_reason_to_believe() {
        let record = BriefRecord::default().updated("reasonToBelieve", "rated 5 stars");
        assert!(format_concise(&record).ends_with(" by Rated 5 stars."));
    }

    #[test]
    fn concise_never_capitalizes_insight() {
        let record = BriefRecord::default().updated("audienceInsight", "  hate queuing ");
        assert!(format_concise(&record).contains(" who hate queuing to "));
    }

    #[test]
    fn full_empty_record_uses_placeholders() {
        let full = format_full(&BriefRecord::default());
        assert!(full.starts_with("PROJECT: \u{2014}\nBRAND: \u{2014}\nTYPE: Campaign\n"));
        assert!(full.contains("\nBACKGROUND\n\u{2014}\n\nCURRENT SITUATION\n"));
        assert!(full.contains("Tone of voice: Confident and friendly\n"));
        assert!(full.ends_with("Legal/compliance: \u{2014}\n"));
        assert!(!full.contains("undefined"));
    }

    #[test]
    fn full_inserts_values_verbatim() {
        let record = BriefRecord::default()
            .updated("background", "  lower case, padded  ")
            .updated("legal", "ASA");
        let full = format_full(&record);
        assert!(full.contains("BACKGROUND\n  lower case, padded  \n"));
        assert!(full.contains("Legal/compliance: ASA\n"));
    }

    #[test]
    fn full_every_slot_is_value_or_placeholder() {
        let record = sample();
        let full = format_full(&record);
        let filled = record.entries().filter(|(_, v)| !v.is_empty()).count();
        let placeholders = full.matches(PLACEHOLDER).count();
        assert_eq!(filled + placeholders, full_slot_count());
        assert_eq!(full_slot_count(), Field::ALL.len());
    }

    #[test]
    fn full_proposition_label_uses_non_breaking_hyphen() {
        let full = format_full(&BriefRecord::default());
        assert!(
            full.lines()
                .any(|line| line == "Single\u{2011}minded proposition (BY): \u{2014}")
        );
        assert!(!full.contains("Single-minded"));

        let filled = format_full(&sample());
        assert!(filled.contains(
            "PROPOSITION\nSingle\u{2011}minded proposition (BY): one box, everything sorted\n"
        ));
    }

    #[test]
    fn headings_appear_as_whole_lines() {
        let headings: Vec<&str> = full_headings().collect();
        assert_eq!(
            headings,
            [
                "BACKGROUND",
                "CURRENT SITUATION",
                "KEY CHALLENGE",
                "AUDIENCE",
                "OBJECTIVES",
                "PROPOSITION",
                "CHANNELS & DELIVERABLES",
                "PRACTICALS",
            ]
        );
        let full = format_full(&sample());
        for heading in headings {
            assert!(full.lines().any(|line| line == heading), "missing {heading}");
        }
    }

    #[test]
    fn full_is_deterministic() {
        let record = sample();
        assert_eq!(format_full(&record), format_full(&record));
    }

    #[test]
    fn full_section_order() {
        let full = format_full(&sample());
        let headings = [
            "PROJECT:",
            "BACKGROUND\n",
            "CURRENT SITUATION\n",
            "KEY CHALLENGE\n",
            "AUDIENCE\n",
            "OBJECTIVES\n",
            "PROPOSITION\n",
            "CHANNELS & DELIVERABLES\n",
            "PRACTICALS\n",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| full.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
