use skimmer_core::{ProviderKind, estimate_tokens};
use skimmer_engine::{TRUNCATION_MARKER, fit, token_budget};

#[test]
fn budgets_scale_with_model_tier() {
    assert_eq!(token_budget(ProviderKind::Local, ""), 8000);
    assert_eq!(token_budget(ProviderKind::Groq, "llama3-8b-8192"), 8000);
    assert_eq!(token_budget(ProviderKind::Groq, "llama3-70b-8192"), 12000);
    assert_eq!(token_budget(ProviderKind::OpenAi, "gpt-3.5-turbo"), 4000);
    assert_eq!(token_budget(ProviderKind::OpenAi, "gpt-4o"), 12000);
    assert_eq!(token_budget(ProviderKind::DeepSeek, "deepseek-chat"), 8000);
    assert_eq!(token_budget(ProviderKind::Custom, "anything"), 4000);
}

#[test]
fn under_budget_content_passes_through() {
    let content = "Short intro.\n\nAnd a second paragraph.";
    let fitted = fit("Title", content, ProviderKind::Custom, "");
    assert!(!fitted.truncated);
    assert_eq!(fitted.content, content);
}

#[test]
fn over_budget_content_is_truncated_with_marker() {
    // Custom budget is 4000 tokens (16000 chars); many mid-size
    // paragraphs guarantee at least one is dropped.
    let paragraph = "word ".repeat(400);
    let content = vec![paragraph.as_str(); 20].join("\n\n");
    assert!(estimate_tokens("Title", &content) > 4000);

    let fitted = fit("Title", &content, ProviderKind::Custom, "");
    assert!(fitted.truncated);
    assert!(fitted.content.ends_with(TRUNCATION_MARKER));
    assert!(fitted.content.len() < content.len());
    // Whatever was kept fits the budget.
    assert!(estimate_tokens("Title", &fitted.content) <= 4000);
}

#[test]
fn first_paragraph_always_survives() {
    let first = "The lede paragraph that must be kept.";
    let filler = "x".repeat(30000);
    let content = format!("{first}\n\n{filler}");

    let fitted = fit("", &content, ProviderKind::Custom, "");
    assert!(fitted.truncated);
    assert!(fitted.content.starts_with(first));
    assert!(!fitted.content.contains(&filler));
}

#[test]
fn oversized_first_paragraph_is_kept_in_full() {
    // A single paragraph over budget is sent whole, flagged truncated.
    let only = "y".repeat(30000);
    let fitted = fit("", &only, ProviderKind::Custom, "");
    assert!(fitted.truncated);
    assert!(fitted.content.contains(&only));
}

#[test]
fn long_article_for_small_openai_model() {
    // 50k chars against gpt-3.5-turbo's 4000-token budget.
    let paragraph = "a".repeat(2000);
    let content = vec![paragraph.as_str(); 25].join("\n\n");
    assert!(content.len() >= 50000);

    let fitted = fit("Article", &content, ProviderKind::OpenAi, "gpt-3.5-turbo");
    assert!(fitted.truncated);
    // Greedy fill stays within the 10% safety margin.
    let kept = estimate_tokens("Article", &fitted.content);
    assert!(kept <= 4000, "kept {kept} tokens");
    assert!(fitted.content.ends_with(TRUNCATION_MARKER));
}
