/*!
 * HTML rendering of an assembled worksheet.
 *
 * Produces a self-contained page sized for one A4 sheet with a two-column
 * content area. Block bodies are taken from the already-escaped block
 * content; title, subtitle and reference text are escaped here.
 */

use std::fmt::Write;

use super::escape::escape_html;
use super::model::{ExerciseBlock, ExerciseVariant, WorksheetDocument};

/// Print stylesheet embedded in every page
const STYLESHEET: &str = r#"
:root { --a4-width: 210mm; --a4-height: 297mm; --margin-size: 15mm; --primary-color: #007bff; }
body { margin: 0; background: #f1f3f5; font-family: sans-serif; }
.worksheet { width: var(--a4-width); min-height: var(--a4-height); background: white; margin: 0 auto; padding: var(--margin-size); box-sizing: border-box; font-size: 10pt; line-height: 1.5; }
.worksheet-header { text-align: center; margin-bottom: 10mm; padding-bottom: 5mm; border-bottom: 1px solid #333; }
.worksheet-title { font-size: 16pt; font-weight: bold; margin-bottom: 3mm; }
.worksheet-subtitle { font-size: 9pt; color: #555; margin-bottom: 1mm; }
.worksheet-content { column-count: 2; column-gap: 10mm; max-height: calc(var(--a4-height) - 2 * var(--margin-size) - 20mm); overflow: hidden; }
.sentence-block { break-inside: avoid-column; page-break-inside: avoid; margin-bottom: 10mm; padding-bottom: 3mm; border-bottom: 1px dashed #eee; }
.sentence-number { font-size: 9pt; font-weight: bold; color: var(--primary-color); margin-bottom: 2mm; }
.english-text { color: #000; margin-bottom: 3mm; }
.template-analysis .english-text { font-weight: bold; line-height: 1.6; }
.template-fill-in .english-text { line-height: 2; }
.template-fill-in span.blank { border-bottom: 2px solid #000; padding: 0 5mm; color: transparent; }
.analysis-label { font-size: 9pt; color: #555; margin-bottom: 1mm; }
.korean-space, .reorder-space { border-bottom: 1px solid #999; min-height: 15mm; margin-bottom: 2mm; }
.analysis-space { border: 1px solid #ddd; min-height: 20mm; padding: 3mm; background: #fcfcfc; margin-bottom: 2mm; }
.word-list { font-size: 8pt; color: #888; margin-top: 2mm; padding: 3mm; border: 1px dashed #ccc; }
.scrambled-text { color: #555; background: #f9f9f9; padding: 5mm; border: 1px solid #eee; margin-bottom: 3mm; line-height: 1.8; }
.korean-text { margin-bottom: 8mm; padding: 5mm; border-left: 3px solid var(--primary-color); line-height: 1.6; }
.english-composition-container { background: #f9f9f9; border: 1px solid #ddd; border-radius: 3px; padding: 5mm; margin-bottom: 2mm; }
.english-composition-space { border-bottom: 1px solid #999; min-height: 35mm; }
.korean-reference { font-size: 8pt; color: #666; background: #f0f0f0; padding: 3mm; border-left: 3px solid #ccc; margin-top: 2mm; line-height: 1.4; }
@media print {
  body { background: white; }
  @page { size: A4; margin: 5mm; }
  .worksheet { width: 100%; padding: 10mm; }
  .worksheet-content { column-gap: 8mm; max-height: none; overflow: visible; }
}
"#;

const ANALYSIS_LABEL: &str = "문장 구조 분석 (SVOC, 구문 등)";
const FILL_IN_LABEL: &str = "빈칸 채우기";
const HINT_LABEL: &str = "힌트 단어:";
const SCRAMBLE_LABEL: &str = "순서 배열";
const COMPOSITION_LABEL: &str = "영작하기";
const REFERENCE_LABEL: &str = "참고 해석:";

/// Render the whole worksheet as an HTML page
pub fn render_document(document: &WorksheetDocument) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&document.title));
    let _ = writeln!(html, "<style>{}</style>", STYLESHEET);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<div class=\"worksheet template-{}\">", document.variant.id());
    html.push_str(&render_header(document));
    html.push_str("<div class=\"worksheet-content\">\n");
    for block in &document.blocks {
        html.push_str(&render_block(block));
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Render the header: title, variant label and optional subtitle
pub fn render_header(document: &WorksheetDocument) -> String {
    let mut header = String::from("<div class=\"worksheet-header\">\n");
    let _ = writeln!(header, "<div class=\"worksheet-title\">{}</div>", escape_html(&document.title));
    let _ = writeln!(header, "<div class=\"worksheet-subtitle\">{}</div>", escape_html(&document.label));
    if let Some(subtitle) = &document.subtitle {
        let _ = writeln!(header, "<div class=\"worksheet-subtitle\">{}</div>", escape_html(subtitle));
    }
    header.push_str("</div>\n");
    header
}

/// Render one numbered sentence block, including its reference footer when enabled
pub fn render_block(block: &ExerciseBlock) -> String {
    let mut html = String::from("<div class=\"sentence-block\">\n");
    let _ = writeln!(html, "<div class=\"sentence-number\">{}.</div>", block.index);

    match block.variant {
        ExerciseVariant::Translation => {
            let _ = writeln!(html, "<div class=\"english-text\">{}</div>", block.primary_content);
            html.push_str("<div class=\"korean-space\"></div>\n");
        }
        ExerciseVariant::Analysis => {
            let _ = writeln!(html, "<div class=\"english-text\">{}</div>", block.primary_content);
            let _ = writeln!(html, "<div class=\"analysis-label\">{}</div>", ANALYSIS_LABEL);
            html.push_str("<div class=\"analysis-space\"></div>\n");
        }
        ExerciseVariant::FillIn => {
            let _ = writeln!(html, "<div class=\"english-text\">{}</div>", block.primary_content);
            let _ = writeln!(html, "<div class=\"analysis-label\">{}</div>", FILL_IN_LABEL);
            html.push_str("<div class=\"korean-space\"></div>\n");
            let _ = writeln!(
                html,
                "<div class=\"word-list\"><strong>{}</strong> {}</div>",
                HINT_LABEL,
                block.auxiliary_content.as_deref().unwrap_or_default()
            );
        }
        ExerciseVariant::Scramble => {
            let _ = writeln!(html, "<div class=\"scrambled-text\">{}</div>", block.primary_content);
            let _ = writeln!(html, "<div class=\"analysis-label\">{}</div>", SCRAMBLE_LABEL);
            html.push_str("<div class=\"reorder-space\"></div>\n");
        }
        ExerciseVariant::KoreanOnly => {
            let _ = writeln!(html, "<div class=\"korean-text\">{}</div>", block.primary_content);
            let _ = writeln!(html, "<div class=\"analysis-label\">{}</div>", COMPOSITION_LABEL);
            html.push_str("<div class=\"english-composition-container\"><div class=\"english-composition-space\"></div></div>\n");
        }
    }

    if let Some(reference) = block.reference_footer() {
        let _ = writeln!(
            html,
            "<div class=\"korean-reference\"><strong>{}</strong> {}</div>",
            REFERENCE_LABEL,
            escape_html(reference)
        );
    }

    html.push_str("</div>\n");
    html
}
