/*!
 * Catalog of selectable AI provider entries.
 */

use serde::Serialize;
use std::fmt;

/// Id of the catalog entry meaning "do not use AI"
pub const NO_PROVIDER_ID: &str = "none";

/// API family a provider entry talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    // @kind: OpenAI chat completions
    OpenAI,
    // @kind: Google Gemini generateContent
    Gemini,
}

impl ProviderKind {
    // @returns: Capitalized family name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One selectable model entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ProviderKind,
    pub endpoint: &'static str,
    pub model: &'static str,
}

const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const fn openai(id: &'static str, name: &'static str, description: &'static str, model: &'static str) -> ProviderInfo {
    ProviderInfo { id, name, description, kind: ProviderKind::OpenAI, endpoint: OPENAI_CHAT_ENDPOINT, model }
}

const fn gemini(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    endpoint: &'static str,
    model: &'static str,
) -> ProviderInfo {
    ProviderInfo { id, name, description, kind: ProviderKind::Gemini, endpoint, model }
}

/// All provider entries, in menu order
pub const PROVIDERS: &[ProviderInfo] = &[
    openai("openai-gpt5", "OpenAI GPT-5", "Best performance", "gpt-5"),
    openai("openai-gpt5-mini", "OpenAI GPT-5 mini", "Fast and efficient", "gpt-5-mini"),
    openai("openai-gpt5-nano", "OpenAI GPT-5 nano", "Fastest", "gpt-5-nano"),
    openai("openai-gpt5-pro", "OpenAI GPT-5 pro", "Most accurate", "gpt-5-pro"),
    openai("openai-gpt4.1", "OpenAI GPT-4.1", "Best non-reasoning model", "gpt-4.1"),
    gemini(
        "gemini-2.5-pro",
        "Google Gemini 2.5 Pro",
        "Best performance",
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent",
        "gemini-2.5-pro",
    ),
    gemini(
        "gemini-2.5-flash",
        "Google Gemini 2.5 Flash",
        "Balanced performance",
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
        "gemini-2.5-flash",
    ),
    gemini(
        "gemini-2.5-flash-lite",
        "Google Gemini 2.5 Flash Lite",
        "Fastest",
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent",
        "gemini-2.5-flash-lite",
    ),
    gemini(
        "gemini-2.0-flash",
        "Google Gemini 2.0 Flash",
        "Second-generation model",
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
        "gemini-2.0-flash",
    ),
    openai("openai-gpt4o", "OpenAI GPT-4o", "Best fourth-generation model", "gpt-4o"),
    openai("openai-gpt4o-mini", "OpenAI GPT-4o-mini", "Lightweight fourth-generation model", "gpt-4o-mini"),
];

/// Whether the id means "no provider selected"
pub fn is_none_id(id: &str) -> bool {
    let id = id.trim();
    id.is_empty() || id.eq_ignore_ascii_case(NO_PROVIDER_ID)
}

/// Look up a provider entry by id
pub fn find(id: &str) -> Option<&'static ProviderInfo> {
    let id = id.trim();
    PROVIDERS.iter().find(|p| p.id == id)
}
