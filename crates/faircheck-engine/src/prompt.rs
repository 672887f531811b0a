//! Grounded prompt assembly
//!
//! Renders the retrieval matches into context blocks and builds the fixed
//! two-message sequence sent to the completion service: a system message
//! declaring the examiner persona, and a user message embedding the
//! submission text plus the rendered statute and case blocks.

use faircheck_domain::{CaseRecord, ChatMessage, MatchResult, StatuteRecord};

/// Literal placeholder used when a context block has no matches.
///
/// The model is told explicitly that no grounding material was found,
/// rather than being shown a blank section it might hallucinate around.
pub const NO_MATCH_PLACEHOLDER: &str = "없음";

/// Fixed examiner persona for the system message.
pub const SYSTEM_PERSONA: &str =
    "공정경쟁 시스템 사전심의 심사자로, 관련 법령과 유사 사례를 바탕으로 심의처리";

/// Render matched statutes as a bullet block, one `- 제목: 본문` line each.
///
/// Empty input renders as [`NO_MATCH_PLACEHOLDER`], never an empty string.
pub fn render_statutes(statutes: &[StatuteRecord]) -> String {
    if statutes.is_empty() {
        return NO_MATCH_PLACEHOLDER.to_string();
    }
    statutes
        .iter()
        .map(|law| format!("- {}: {}", law.title, law.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render matched cases as a bullet block, one
/// `- 제목: 요약 (결과: 처리결과)` line each.
///
/// Empty input renders as [`NO_MATCH_PLACEHOLDER`], never an empty string.
pub fn render_cases(cases: &[CaseRecord]) -> String {
    if cases.is_empty() {
        return NO_MATCH_PLACEHOLDER.to_string();
    }
    cases
        .iter()
        .map(|case| format!("- {}: {} (결과: {})", case.title, case.summary, case.outcome))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the two-message sequence for one review request.
pub fn build_messages(text: &str, matches: &MatchResult) -> Vec<ChatMessage> {
    let law_block = render_statutes(&matches.statutes);
    let case_block = render_cases(&matches.cases);

    let request = format!(
        "다음은 공정경쟁 사전심의 요청입니다.\n\
         심의 내용: {text}\n\n\
         관련 법령:\n{law_block}\n\n\
         유사 판례:\n{case_block}\n\n\
         위 정보를 바탕으로 구체적인 법령을 명시해서 심사 결과를 알려주세요."
    );

    vec![ChatMessage::system(SYSTEM_PERSONA), ChatMessage::user(request)]
}
