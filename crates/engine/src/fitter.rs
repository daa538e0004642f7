//! Paragraph-granular content truncation against per-provider budgets.

use skimmer_core::{ProviderKind, estimate_tokens};

/// Marker appended when paragraphs were dropped to fit the budget.
pub const TRUNCATION_MARKER: &str = "[Content truncated due to length limitations...]";

/// Approximate context budget (in estimated tokens) for a provider and
/// its selected model. Larger models get the larger tier.
pub fn token_budget(kind: ProviderKind, model: &str) -> usize {
    match kind {
        ProviderKind::Local => 8000,
        ProviderKind::Groq => {
            if model.contains("70b") {
                12000
            } else {
                8000
            }
        }
        ProviderKind::OpenAi => {
            if model.contains("gpt-4") {
                12000
            } else {
                4000
            }
        }
        ProviderKind::DeepSeek => 8000,
        ProviderKind::Custom => 4000,
    }
}

/// Content after fitting, with a flag reported back to the UI.
#[derive(Debug, Clone)]
pub struct Fitted {
    /// The content to send, possibly truncated.
    pub content: String,
    /// Whether the original exceeded the budget.
    pub truncated: bool,
}

/// Fit `content` under the budget for `kind`/`model`.
///
/// Under-budget content passes through untouched. Over-budget content is
/// rebuilt paragraph by paragraph: the first paragraph is always kept in
/// full (even if it alone exceeds the budget), then paragraphs are
/// appended greedily while the running estimate stays within a 10%
/// safety margin of the budget. When a paragraph is dropped, the
/// [`TRUNCATION_MARKER`] is appended.
pub fn fit(title: &str, content: &str, kind: ProviderKind, model: &str) -> Fitted {
    let budget = token_budget(kind, model);
    if estimate_tokens(title, content) <= budget {
        return Fitted {
            content: content.to_owned(),
            truncated: false,
        };
    }

    let margin = budget * 9 / 10;
    let mut paragraphs = content.split("\n\n");
    let mut fitted = String::new();
    if let Some(first) = paragraphs.next() {
        fitted.push_str(first);
        fitted.push_str("\n\n");
    }
    let mut current = estimate_tokens(title, &fitted);

    for paragraph in paragraphs {
        let paragraph_tokens = estimate_tokens("", paragraph);
        if current + paragraph_tokens > margin {
            fitted.push_str(TRUNCATION_MARKER);
            return Fitted {
                content: fitted,
                truncated: true,
            };
        }
        fitted.push_str(paragraph);
        fitted.push_str("\n\n");
        current += paragraph_tokens;
    }

    Fitted {
        content: fitted,
        truncated: true,
    }
}
