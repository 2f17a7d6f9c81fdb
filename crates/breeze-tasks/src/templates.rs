use breeze_types::{BlogCategory, PageMeta};

/// Instruction used when page summarization falls back to plain prompting
pub const SUMMARIZE_INSTRUCTION: &str =
    "Summarize the web page into concise key points. Output markdown bullets only.";

pub const BLOG_INSTRUCTION: &str = "You are a blog writing assistant. 
Write a complete SEO-optimized markdown article with the following structure:
- H1: Compelling, keyword-rich title
- Meta description as an HTML comment (<!-- ... -->) right after the title
- Engaging intro summarizing the topic and reader benefit.
- Use clear H2 and H3 headings.
- Explain key points naturally using keywords from context.
- Summarize and end with a short call to action (CTA).
Rules:
- Output markdown only (no explanations or comments)
- Be factual; use only info from summary
- Keep sentences short and natural
- Avoid repetition or generic filler
- Maintain coherent flow";

pub const KEYWORDS_INSTRUCTION: &str =
    "Extract 15-25 SEO keywords/keyphrases. Return comma-separated list only.";

pub const SOCIAL_POST_INSTRUCTION: &str = "
You are writing a Reddit post for a relevant subreddit.
Write in a natural, human tone, with no marketing or promotional language.
Be curious, authentic, and informal, like a real Redditor sharing insights or asking for feedback.

Rules:
- Keep it under 300 words.
- Start with a relatable hook or question.
- Use short paragraphs for readability.
- Avoid hashtags, emojis, or marketing tone.
- Optionally end with an open-ended question to invite discussion.

Use only the facts or ideas from the provided content summary.
Output plain text only (no markdown or HTML).
";

/// Fallback summarization prompt over already-windowed page text
pub fn summarize_prompt(windowed_text: &str, meta: &PageMeta) -> String {
    let title = meta
        .title()
        .map(|t| format!("Title: {}", t))
        .unwrap_or_default();
    format!(
        "{}\n{}\n\nContent:\n{}",
        SUMMARIZE_INSTRUCTION, title, windowed_text
    )
}

pub fn blog_prompt(windowed_summary: &str, category: BlogCategory, meta: &PageMeta) -> String {
    let source = meta
        .title()
        .map(|t| format!("Source: {}", t))
        .unwrap_or_default();
    format!(
        "{}\n\nCategory: {}\n{}\n\nSummary:\n{}\n\nWrite the complete markdown article:",
        BLOG_INSTRUCTION,
        category.label(),
        source,
        windowed_summary
    )
}

pub fn keywords_prompt(windowed_summary: &str) -> String {
    format!("{}\n\n{}", KEYWORDS_INSTRUCTION, windowed_summary)
}

pub fn social_post_prompt(windowed_summary: &str, meta: &PageMeta) -> String {
    let source = meta
        .title()
        .map(|t| format!("Source: {}\n", t))
        .unwrap_or_default();
    format!(
        "{}\n\n{}Summary:\n{}",
        SOCIAL_POST_INSTRUCTION, source, windowed_summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_prompt_layout() {
        let meta = PageMeta::new().with_title("Rust Book");
        let prompt = blog_prompt("- point", BlogCategory::ProblemSolution, &meta);

        assert!(prompt.starts_with(BLOG_INSTRUCTION));
        assert!(prompt.contains("Category: Problem-Solution Articles\nSource: Rust Book\n"));
        assert!(prompt.contains("Summary:\n- point\n\nWrite the complete markdown article:"));
    }

    #[test]
    fn test_prompts_without_title() {
        let prompt = social_post_prompt("- point", &PageMeta::new());
        assert!(!prompt.contains("Source:"));
        assert!(prompt.ends_with("Summary:\n- point"));

        let prompt = summarize_prompt("body", &PageMeta::new());
        assert_eq!(prompt, format!("{}\n\n\nContent:\nbody", SUMMARIZE_INSTRUCTION));
    }

    #[test]
    fn test_keywords_prompt() {
        assert_eq!(
            keywords_prompt("a, b"),
            format!("{}\n\na, b", KEYWORDS_INSTRUCTION)
        );
    }
}
