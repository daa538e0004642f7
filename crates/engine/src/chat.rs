//! Chat exchange assembly: grounding system message, prior turns, and
//! the new question.

use skimmer_core::{Message, Role};

/// Page context a chat question is grounded in.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// Title of the summarized page.
    pub title: String,
    /// URL of the summarized page.
    pub url: String,
    /// The summary previously produced for the page.
    pub summary: String,
    /// Prior conversation turns, oldest first.
    pub history: Vec<Message>,
}

/// Render the grounding system message for a page and any retrieved
/// excerpts.
pub fn grounding_message(context: &ChatContext, excerpts: &[String]) -> String {
    let mut text = format!(
        "You are answering questions about a webpage with the title \"{}\" and URL {}. \
         Here is a summary of the content: {}\n\
         The user wants to know more about this content. Answer based on the summary. \
         If you can't answer based on the summary, say so and suggest what information \
         might be needed.",
        context.title, context.url, context.summary
    );
    if !excerpts.is_empty() {
        text.push_str("\n\nRelevant excerpts from the page:");
        for excerpt in excerpts {
            text.push_str("\n- ");
            text.push_str(excerpt);
        }
    }
    text
}

/// Assemble the full exchange for one chat question.
///
/// The grounding system message always lands at position 0: an existing
/// leading system message is replaced, any other history is preserved
/// behind it. The question is appended as the final user turn.
pub fn build_exchange(context: &ChatContext, excerpts: &[String], question: &str) -> Vec<Message> {
    let system = Message::system(grounding_message(context, excerpts));
    let mut messages = context.history.clone();
    match messages.first() {
        Some(first) if first.role == Role::System => messages[0] = system,
        _ => messages.insert(0, system),
    }
    messages.push(Message::user(question));
    messages
}
