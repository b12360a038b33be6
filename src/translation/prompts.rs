/*!
 * Prompt construction for passage translation.
 */

/// Placeholder replaced by the passage text
pub const PASSAGE_PLACEHOLDER: &str = "{passage}";

/// Default prompt asking for a sentence-aligned Korean translation
pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "다음 영어 지문을 한국어로 번역해주세요. 각 문장을 정확하게 번역하되, 문장 구분을 유지해주세요:\n\n{passage}";

/// Fill the template with the passage; templates without the placeholder get the passage appended
pub fn build_translation_prompt(template: &str, passage: &str) -> String {
    if template.contains(PASSAGE_PLACEHOLDER) {
        template.replace(PASSAGE_PLACEHOLDER, passage)
    } else {
        format!("{}\n\n{}", template.trim_end(), passage)
    }
}
