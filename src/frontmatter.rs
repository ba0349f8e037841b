//! YAML frontmatter handling for markdown definition files.

/// Split content into frontmatter and body.
///
/// If the content starts with `---`, extracts the YAML frontmatter between
/// the opening delimiter and the next line that starts with `---`, and returns
/// the body after it. Otherwise returns None for frontmatter and the entire
/// content as body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start_matches('-').trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
