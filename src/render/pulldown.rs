use pulldown_cmark::{html, Options, Parser};

use crate::common::Render;

/// Converts raw Markdown source into an HTML fragment, ready for embedding
/// into a shell.
pub fn to_html(source: &str, config: &Render) -> String {
    let parser = init(source, config);
    write(parser)
}

/// Initializes a [`Parser`] instance with the given Markdown input and the
/// extensions enabled by the render configuration.
fn init<'a>(input: &'a str, config: &Render) -> Parser<'a, 'a> {
    let mut options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    if config.footnotes {
        options.insert(Options::ENABLE_FOOTNOTES);
    }

    if config.tasklists {
        options.insert(Options::ENABLE_TASKLISTS);
    }

    if config.smart_punctuation {
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
    }

    Parser::new_ext(input, options)
}

/// Consume a [`Parser`] instance, buffering the HTML output into a final [`String`].
fn write(parser: Parser) -> String {
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Render {
        Render::default()
    }

    #[test]
    fn headings() {
        let html = to_html("# Test", &config());
        assert!(html.contains("<h1>Test</h1>"));
    }

    #[test]
    fn tables() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |", &config());
        assert!(html.contains("<table>"));
    }

    #[test]
    fn fenced_code() {
        let html = to_html("```\nlet x = 1;\n```", &config());
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(to_html("", &config()).is_empty());
    }

    #[test]
    fn smart_punctuation_follows_config() {
        let mut config = config();
        assert!(to_html("\"quoted\"", &config).contains('\u{201c}'));

        config.smart_punctuation = false;
        assert!(to_html("\"quoted\"", &config).contains("&quot;"));
    }
}
