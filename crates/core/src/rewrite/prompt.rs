//! Prompt template for chat-model text cleanup.

/// Placeholder replaced with the chunk text.
const CONTENT_PLACEHOLDER: &str = "{content}";

/// Instructions sent with every chunk.
///
/// The model is asked to keep the article body verbatim and to drop
/// everything else a scraper picks up from the page.
pub const CLEANING_PROMPT: &str = r#"You extract readable article text from scraped web pages. Return only the main body of the content below, exactly as written.

Remove:
- navigation menus, headers, footers and other site chrome
- advertisements, promotions, newsletter and subscription prompts
- share buttons, social media widgets, comment sections
- author bios, related article lists, tags, timestamps
- cookie and privacy notices
- code snippets, HTML tags and markdown formatting
- image captions that are not needed to follow the text

Remove every link and URL:
- for markdown links like [text](url) keep only the text
- for HTML anchors like <a href="url">text</a> keep only the text
- drop bare URLs (http://, https://, www.); if a sentence depends on one, refer to "the website" instead

Example:
Input: "After the [fall of France](https://example.com/france) in June 1940, read more at https://example.com."
Output: "After the fall of France in June 1940, read more at the website."

Do not summarize, paraphrase, or comment. Output the cleaned text and nothing else.

<content>

{content}

</content>
CLEANED CONTENT:"#;

/// Render the cleaning prompt around a chunk of text.
pub fn render_prompt(content: &str) -> String {
    CLEANING_PROMPT.replacen(CONTENT_PLACEHOLDER, content, 1)
}
