use pulldown_cmark::{Options, Parser, html};

/// Markdown to HTML. Implementations cannot fail.
pub trait Render {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by pulldown-cmark, with the usual GitHub
/// extensions switched on.
#[derive(Debug, Clone, Copy)]
pub struct Markdown {
    options: Options,
}

impl Default for Markdown {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Render for Markdown {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl<F> Render for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, markdown: &str) -> String {
        self(markdown)
    }
}
