use regex::Regex;

use coursedeck_common::CourseDeckError;

use crate::fetch::Fetcher;

/// Fetch a template's entry document and prepare it for the editor canvas:
/// extract the body markup and rewrite its relative asset references so
/// they resolve against the template's asset root.
pub async fn load_template_markup(
    fetcher: &dyn Fetcher,
    base_url: &str,
    asset_root_path: &str,
    entry_file: &str,
) -> Result<String, CourseDeckError> {
    let url = format!("{base_url}{asset_root_path}{entry_file}");
    let document = fetcher.fetch_text(&url).await?;
    let body = extract_body(&document);
    Ok(rewrite_asset_refs(body, asset_root_path))
}

/// The markup between the first `<body...>` tag and the last `</body>` tag,
/// case-insensitive. A document with no body tag is used whole.
pub fn extract_body(document: &str) -> &str {
    let lower = document.to_ascii_lowercase();

    let Some(open) = lower.find("<body") else {
        return document;
    };
    let Some(open_end) = lower[open..].find('>') else {
        return document;
    };
    let start = open + open_end + 1;

    let end = lower
        .rfind("</body>")
        .filter(|&close| close >= start)
        .unwrap_or(document.len());

    &document[start..end]
}

/// Prefix relative asset references with the template's asset root. Four
/// categories are rewritten independently, in order: `src="..."`,
/// `href="..."`, `url("...")`, `url('...')`. Values already starting with
/// `http://`, `https://`, or the asset root itself pass through unchanged,
/// which keeps the rewrite idempotent.
///
/// This is a textual pass, not a DOM parse: it does not resolve `../`
/// segments and makes no attempt to skip script bodies.
pub fn rewrite_asset_refs(markup: &str, asset_root: &str) -> String {
    let src = Regex::new(r#"src="([^"]*)""#).expect("valid regex");
    let href = Regex::new(r#"href="([^"]*)""#).expect("valid regex");
    let url_double = Regex::new(r#"url\("([^"]*)"\)"#).expect("valid regex");
    let url_single = Regex::new(r#"url\('([^']*)'\)"#).expect("valid regex");

    let rewritten = src.replace_all(markup, |caps: &regex::Captures| {
        rebuild(&caps[1], asset_root, |v| format!(r#"src="{v}""#))
    });
    let rewritten = href.replace_all(&rewritten, |caps: &regex::Captures| {
        rebuild(&caps[1], asset_root, |v| format!(r#"href="{v}""#))
    });
    let rewritten = url_double.replace_all(&rewritten, |caps: &regex::Captures| {
        rebuild(&caps[1], asset_root, |v| format!(r#"url("{v}")"#))
    });
    let rewritten = url_single.replace_all(&rewritten, |caps: &regex::Captures| {
        rebuild(&caps[1], asset_root, |v| format!("url('{v}')"))
    });

    rewritten.into_owned()
}

fn rebuild(value: &str, asset_root: &str, render: impl Fn(&str) -> String) -> String {
    if is_absolute(value, asset_root) {
        render(value)
    } else {
        render(&format!("{asset_root}{value}"))
    }
}

fn is_absolute(value: &str, asset_root: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.starts_with(asset_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubFetcher {
        body: Result<String, String>,
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch_text(&self, _url: &str) -> Result<String, CourseDeckError> {
            self.body
                .clone()
                .map_err(CourseDeckError::Fetch)
        }
    }

    #[test]
    fn extract_body_between_first_open_and_last_close() {
        let doc = "<html><head><title>x</title></head>\
                   <BODY class=\"page\"><p>one</p><p>two</p></BODY></html>";
        assert_eq!(extract_body(doc), "<p>one</p><p>two</p>");
    }

    #[test]
    fn extract_body_uses_last_close_tag() {
        let doc = "<body><div></body><span></body></html>";
        assert_eq!(extract_body(doc), "<div></body><span>");
    }

    #[test]
    fn extract_body_without_body_tag_returns_whole_document() {
        let doc = "<div>no body here</div>";
        assert_eq!(extract_body(doc), doc);
    }

    #[test]
    fn extract_body_with_unclosed_body_runs_to_end() {
        let doc = "<body><p>dangling</p>";
        assert_eq!(extract_body(doc), "<p>dangling</p>");
    }

    #[test]
    fn rewrite_prefixes_relative_and_skips_absolute() {
        let markup = r#"<img src="img/a.png"><link href="https://cdn.example.com/b.css">
            <div style="background: url('css/c.png')"></div>"#;
        let out = rewrite_asset_refs(markup, "/templates/x/");

        assert!(out.contains(r#"src="/templates/x/img/a.png""#));
        assert!(out.contains(r#"href="https://cdn.example.com/b.css""#));
        assert!(out.contains("url('/templates/x/css/c.png')"));
    }

    #[test]
    fn rewrite_handles_double_quoted_url() {
        let markup = r#"<div style='background: url("img/bg.jpg")'></div>"#;
        let out = rewrite_asset_refs(markup, "/tpl/");
        assert!(out.contains(r#"url("/tpl/img/bg.jpg")"#));
    }

    #[test]
    fn rewrite_is_idempotent() {
        let markup = r#"<img src="img/a.png"><a href="page.html">x</a>
            <div style="background: url('css/c.png')"></div>
            <script src="https://code.jquery.com/jquery.min.js"></script>"#;
        let once = rewrite_asset_refs(markup, "/templates/x/");
        let twice = rewrite_asset_refs(&once, "/templates/x/");
        assert_eq!(once, twice);
    }

    #[test]
    fn rewrite_leaves_http_untouched() {
        let markup = r#"<img src="http://example.com/a.png">"#;
        let out = rewrite_asset_refs(markup, "/tpl/");
        assert_eq!(out, markup);
    }

    #[tokio::test]
    async fn load_extracts_and_rewrites() {
        let fetcher = StubFetcher {
            body: Ok("<html><body><img src=\"img/a.png\"></body></html>".to_string()),
        };
        let markup = load_template_markup(&fetcher, "http://127.0.0.1:8080", "/tpl/", "index.html")
            .await
            .unwrap();
        assert_eq!(markup, r#"<img src="/tpl/img/a.png">"#);
    }

    #[tokio::test]
    async fn load_propagates_fetch_errors() {
        let fetcher = StubFetcher {
            body: Err("status 404 Not Found".to_string()),
        };
        let err = load_template_markup(&fetcher, "http://127.0.0.1:8080", "/tpl/", "index.html")
            .await
            .unwrap_err();
        assert!(matches!(err, CourseDeckError::Fetch(_)));
    }
}
