//! Server-side views: `<views_dir>/<name>.html` with `{{ key }}` placeholders.

use crate::error::RenderError;
use axum::response::Html;
use std::collections::HashMap;
use std::path::PathBuf;

/// Values substituted into a view. Rendered HTML-escaped.
pub type ViewContext = HashMap<&'static str, String>;

#[derive(Clone, Debug)]
pub struct ViewRenderer {
    dir: PathBuf,
}

impl ViewRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ViewRenderer { dir: dir.into() }
    }

    /// Loads and renders a view. Unknown placeholders render as empty text.
    pub async fn render(&self, name: &str, context: &ViewContext) -> Result<Html<String>, RenderError> {
        if !is_view_name(name) {
            return Err(RenderError::NotFound(name.to_string()));
        }
        let path = self.dir.join(format!("{}.html", name));
        let source = match tokio::fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::NotFound(name.to_string()));
            }
            Err(e) => return Err(RenderError::Io(e)),
        };
        tracing::debug!(view = %name, path = %path.display(), "render");
        Ok(Html(substitute(&source, context)))
    }
}

fn is_view_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn substitute(source: &str, context: &ViewContext) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if let Some(value) = context.get(key) {
                    out.push_str(&escape_html(value));
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(title: &str) -> ViewContext {
        let mut c = ViewContext::new();
        c.insert("title", title.to_string());
        c
    }

    #[test]
    fn substitutes_and_escapes() {
        let out = substitute("<h1>{{ title }}</h1>{{missing}}", &ctx("A & <B>"));
        assert_eq!(out, "<h1>A &amp; &lt;B&gt;</h1>");
    }

    #[test]
    fn unterminated_placeholder_is_left_alone() {
        assert_eq!(substitute("a {{ title", &ctx("x")), "a {{ title");
    }

    #[tokio::test]
    async fn renders_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>{{ title }}</title>").unwrap();
        let views = ViewRenderer::new(dir.path());
        let Html(body) = views.render("index", &ctx("Home")).await.unwrap();
        assert_eq!(body, "<title>Home</title>");
    }

    #[tokio::test]
    async fn missing_or_suspicious_view_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let views = ViewRenderer::new(dir.path());
        assert!(matches!(
            views.render("nope", &ViewContext::new()).await,
            Err(RenderError::NotFound(_))
        ));
        assert!(matches!(
            views.render("../secret", &ViewContext::new()).await,
            Err(RenderError::NotFound(_))
        ));
    }
}
