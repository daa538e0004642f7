use skimmer_core::{Message, Role};
use skimmer_engine::{ChatContext, build_exchange, grounding_message};

fn context() -> ChatContext {
    ChatContext {
        title: "Rust in Production".into(),
        url: "https://example.com/rust".into(),
        summary: "An article about shipping Rust services.".into(),
        history: Vec::new(),
    }
}

#[test]
fn system_message_lands_at_position_zero() {
    let messages = build_exchange(&context(), &[], "What does it cover?");
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages.last().unwrap().role, Role::User);
    assert_eq!(messages.last().unwrap().content, "What does it cover?");
}

#[test]
fn existing_system_message_is_replaced_not_duplicated() {
    let mut ctx = context();
    ctx.history = vec![
        Message::system("stale grounding from a previous turn"),
        Message::user("earlier question"),
        Message::assistant("earlier answer"),
    ];
    let messages = build_exchange(&ctx, &[], "follow-up?");

    let system_count = messages.iter().filter(|m| m.role == Role::System).count();
    assert_eq!(system_count, 1);
    assert!(messages[0].content.contains("Rust in Production"));
    assert_eq!(messages[1].content, "earlier question");
    assert_eq!(messages.len(), 4);
}

#[test]
fn history_without_system_is_preserved_behind_grounding() {
    let mut ctx = context();
    ctx.history = vec![Message::user("first question"), Message::assistant("reply")];
    let messages = build_exchange(&ctx, &[], "second question");

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].content, "first question");
    assert_eq!(messages[2].content, "reply");
}

#[test]
fn grounding_includes_page_and_excerpts() {
    let excerpts = vec!["excerpt one".to_string(), "excerpt two".to_string()];
    let text = grounding_message(&context(), &excerpts);
    assert!(text.contains("Rust in Production"));
    assert!(text.contains("https://example.com/rust"));
    assert!(text.contains("shipping Rust services"));
    assert!(text.contains("Relevant excerpts from the page:"));
    assert!(text.contains("- excerpt one"));
    assert!(text.contains("- excerpt two"));
}

#[test]
fn grounding_omits_excerpt_section_when_empty() {
    let text = grounding_message(&context(), &[]);
    assert!(!text.contains("Relevant excerpts"));
}
