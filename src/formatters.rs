//! Wrappers for embedding a rendered diagram in Markdown or a standalone page

const MERMAID_ESM: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";

/// Fenced ```` ```mermaid ```` block
pub fn markdown(diagram: &str) -> String {
    format!("```mermaid\n{}\n```", diagram)
}

/// Minimal HTML page that renders the diagram in the browser
pub fn html(diagram: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <pre class="mermaid">
{diagram}
  </pre>
  <script type="module">
    import mermaid from '{MERMAID_ESM}';
    mermaid.initialize({{ startOnLoad: true }});
  </script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_fence() {
        assert_eq!(markdown("graph LR\na(A)"), "```mermaid\ngraph LR\na(A)\n```");
    }

    #[test]
    fn test_html_page() {
        let page = html("graph LR\na(A)", "Demo");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Demo</title>"));
        assert!(page.contains("<pre class=\"mermaid\">\ngraph LR\na(A)\n  </pre>"));
        assert!(page.contains(MERMAID_ESM));
        assert!(page.contains("mermaid.initialize({ startOnLoad: true });"));
    }
}
