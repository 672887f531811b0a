//! Output formatting for the CLI.

use colored::*;
use faircheck_domain::MatchResult;
use faircheck_engine::ReviewOutcome;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Render the local grounding that a query matched.
    pub fn format_matches(&self, matches: &MatchResult) -> String {
        let mut out = String::new();

        out.push_str(&self.colorize("관련 법령", "bold"));
        out.push('\n');
        if matches.statutes.is_empty() {
            out.push_str("  (일치하는 법령 없음)\n");
        } else {
            for law in &matches.statutes {
                out.push_str(&format!("  - {}: {}\n", law.title, law.text));
            }
        }

        out.push_str(&self.colorize("유사 판례", "bold"));
        out.push('\n');
        if matches.cases.is_empty() {
            out.push_str("  (일치하는 판례 없음)\n");
        } else {
            for case in &matches.cases {
                out.push_str(&format!(
                    "  - {}: {} (결과: {})\n",
                    case.title, case.summary, case.outcome
                ));
            }
        }

        out
    }

    /// Render a full review outcome: the grounding summary followed by the
    /// answer text verbatim.
    pub fn format_outcome(&self, outcome: &ReviewOutcome) -> String {
        let mut out = String::new();

        if outcome.matches.is_empty() {
            out.push_str(&self.info(
                "로컬 코퍼스에서 일치하는 법령/판례를 찾지 못했습니다. 원격 검색 근거만 사용합니다.",
            ));
            out.push('\n');
        } else {
            out.push_str(&self.format_matches(&outcome.matches));
        }

        out.push('\n');
        out.push_str(&self.colorize("심의 결과", "bold"));
        out.push('\n');
        out.push_str(&outcome.answer);
        out.push('\n');

        out
    }

    fn colorize(&self, text: &str, style: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match style {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faircheck_domain::{CaseRecord, StatuteRecord};

    fn plain() -> Formatter {
        Formatter::new(false)
    }

    #[test]
    fn test_empty_matches_render_placeholders() {
        let rendered = plain().format_matches(&MatchResult::default());
        assert!(rendered.contains("일치하는 법령 없음"));
        assert!(rendered.contains("일치하는 판례 없음"));
    }

    #[test]
    fn test_matches_render_records() {
        let matches = MatchResult {
            statutes: vec![StatuteRecord {
                title: "독점규제법 제3조".to_string(),
                text: "시장지배적 지위의 남용을 금지한다".to_string(),
                extra: serde_json::Map::new(),
            }],
            cases: vec![CaseRecord {
                title: "사례 1".to_string(),
                summary: "요금 인상 건".to_string(),
                outcome: "시정명령".to_string(),
                tags: Vec::new(),
            }],
        };

        let rendered = plain().format_matches(&matches);
        assert!(rendered.contains("- 독점규제법 제3조: 시장지배적 지위의 남용을 금지한다"));
        assert!(rendered.contains("- 사례 1: 요금 인상 건 (결과: 시정명령)"));
    }

    #[test]
    fn test_outcome_prints_answer_verbatim() {
        let outcome = ReviewOutcome {
            answer: "**심의 결과**: 보완 후 재심의".to_string(),
            matches: MatchResult::default(),
        };

        let rendered = plain().format_outcome(&outcome);
        assert!(rendered.contains("**심의 결과**: 보완 후 재심의"));
        // Zero matches is reported as information, not as an error
        assert!(rendered.contains("찾지 못했습니다"));
        assert!(!rendered.contains("✗"));
    }
}
