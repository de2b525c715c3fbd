use html5ever::buffer_queue::BufferQueue;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts};

use crate::node::{MarkupChild, MarkupNode};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img", "input",
    "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

const FORM_TAGS: &[&str] = &[
    "input", "option", "optgroup", "select", "button", "datalist", "textarea",
];

/// Open elements that are closed implicitly when `tag` starts while one of
/// them is the current element.
fn implied_closes(tag: &str) -> &'static [&'static str] {
    match tag {
        "tr" => &["tr", "th", "td"],
        "th" => &["th"],
        "td" => &["thead", "th", "td"],
        "body" => &["head", "link", "script"],
        "li" => &["li"],
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => &["p"],
        "select" | "input" | "output" | "button" | "datalist" | "textarea" => FORM_TAGS,
        "option" => &["option"],
        "optgroup" => &["optgroup"],
        _ => &[],
    }
}

fn raw_kind(tag: &str) -> Option<RawKind> {
    match tag {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "textarea" | "title" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Builds the node tree from the token stream without the document
/// insertion rules, so any element can be a root and nothing is reparented.
#[derive(Debug, Default)]
struct NodeCollector {
    roots: Vec<MarkupChild>,
    open: Vec<MarkupNode>,
}

impl NodeCollector {
    fn children_mut(&mut self) -> &mut Vec<MarkupChild> {
        match self.open.last_mut() {
            Some(node) => &mut node.children,
            None => &mut self.roots,
        }
    }

    fn push_text(&mut self, text: &str) {
        let children = self.children_mut();
        match children.last_mut() {
            Some(MarkupChild::Text(previous)) => previous.push_str(text),
            _ => children.push(MarkupChild::Text(text.to_string())),
        }
    }

    fn close_current(&mut self) {
        if let Some(node) = self.open.pop() {
            self.children_mut().push(MarkupChild::Element(node));
        }
    }

    fn start_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();

        let closes = implied_closes(&name);
        while self
            .open
            .last()
            .is_some_and(|current| closes.contains(&current.tag.as_str()))
        {
            self.close_current();
        }

        let node = MarkupNode {
            tag: name,
            attributes: tag
                .attrs
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            children: Vec::new(),
        };

        if tag.self_closing || VOID_ELEMENTS.contains(&node.tag.as_str()) {
            self.children_mut().push(MarkupChild::Element(node));
            return TokenSinkResult::Continue;
        }

        let raw = raw_kind(&node.tag);
        self.open.push(node);

        match raw {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&mut self, tag: Tag) {
        // End tags without a matching open element are ignored.
        if let Some(index) = self.open.iter().rposition(|node| node.tag.as_str() == &*tag.name) {
            while self.open.len() > index {
                self.close_current();
            }
        }
    }

    fn finish(mut self) -> Vec<MarkupChild> {
        while !self.open.is_empty() {
            self.close_current();
        }
        self.roots
    }
}

impl TokenSink for NodeCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(tag),
                TagKind::EndTag => self.end_tag(tag),
            },
            Token::CharacterTokens(text) => self.push_text(&text),
            Token::ParseError(message) => log::trace!("markup parse error: {}", message),
            Token::DoctypeToken(_)
            | Token::CommentToken(_)
            | Token::NullCharacterToken
            | Token::EOFToken => {}
        }

        TokenSinkResult::Continue
    }
}

/// Parses `input` into its top-level nodes in source order.
///
/// Elements are nested as written: end tags close the nearest matching open
/// element, void and self-closing elements have no children, and elements
/// still open at the end of the input are closed there. A small set of tags
/// closes its predecessor implicitly (`<li>` after `<li>`, `<p>` after `<p>`).
pub fn parse_markup(input: &str) -> Vec<MarkupChild> {
    let mut queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(input));

    let mut tokenizer = Tokenizer::new(NodeCollector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();

    tokenizer.sink.finish()
}
