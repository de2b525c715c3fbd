use itertools::Itertools;

use crate::{
    ast::{Expr, Function},
    error::FormatError,
    lexer::tokenize,
    parser::Parser,
};

#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: FormatterConfig,
    output: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatterConfig {
    pub indent_width: usize,
    pub print_width: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            print_width: 80,
        }
    }
}

/// One `.name(...)(...)` step of a member chain. The leading calls of a chain
/// whose head is called directly have no name.
struct Link<'e, 'a> {
    name: Option<&'a str>,
    calls: Vec<&'e [Expr<'a>]>,
}

enum Postfix<'e, 'a> {
    Member(&'a str),
    Call(&'e [Expr<'a>]),
}

impl Formatter {
    pub fn new(config: Option<FormatterConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
            output: String::new(),
        }
    }

    pub fn format(&mut self, code: &str) -> Result<String, FormatError> {
        if code.trim().is_empty() {
            return Ok(String::new());
        }

        let tokens = tokenize(code)?;
        let function = Parser::new(&tokens).parse_function()?;

        self.output.clear();
        self.format_function(&function);

        Ok(std::mem::take(&mut self.output))
    }

    fn format_function(&mut self, function: &Function<'_>) {
        let indent = self.indent(1);
        let body = self.format_expr(
            &function.body,
            1,
            self.config.indent_width + "return ".len(),
            1,
        );

        self.output.push_str("function ");
        self.output.push_str(function.name);
        self.output.push_str("() {\n");
        self.output.push_str(&indent);
        self.output.push_str("return ");
        self.output.push_str(&body);
        self.output.push_str(";\n}\n");
    }

    /// Lays out `expr` starting at `column`, keeping `suffix` columns free for
    /// the punctuation that follows it.
    fn format_expr(&self, expr: &Expr<'_>, indent_level: usize, column: usize, suffix: usize) -> String {
        let flat = Self::flat(expr);
        if self.fits(column, &flat, suffix) {
            return flat;
        }

        match expr {
            Expr::Object(entries) if !entries.is_empty() => self.format_object(entries, indent_level),
            Expr::Member(..) | Expr::Call(..) => self.format_chain(expr, indent_level, column, suffix),
            _ => flat,
        }
    }

    fn format_chain(&self, expr: &Expr<'_>, indent_level: usize, column: usize, suffix: usize) -> String {
        let (head, links) = Self::flatten_chain(expr);
        let mut output = self.format_expr(head, indent_level, column, 0);
        let mut column = end_column(column, &output);

        let split_at = links
            .iter()
            .position(|link| link.name.is_some())
            .map(|first_method| first_method + 1)
            .unwrap_or(links.len());
        // Chains with up to two method calls stay on one line and break their arguments instead.
        let broken = links.iter().filter(|link| link.name.is_some()).count() > 2;

        for (i, link) in links.iter().enumerate() {
            let link_suffix = if i + 1 == links.len() { suffix } else { 0 };

            if broken && i >= split_at {
                output.push('\n');
                output.push_str(&self.indent(indent_level + 1));
                column = (indent_level + 1) * self.config.indent_width;
                let link_output = self.format_link(link, indent_level + 1, column, link_suffix);
                column = end_column(column, &link_output);
                output.push_str(&link_output);
            } else {
                let link_output = self.format_link(link, indent_level, column, link_suffix);
                column = end_column(column, &link_output);
                output.push_str(&link_output);
            }
        }

        output
    }

    fn format_link(&self, link: &Link<'_, '_>, indent_level: usize, column: usize, suffix: usize) -> String {
        let mut output = String::new();

        if let Some(name) = link.name {
            output.push('.');
            output.push_str(name);
        }

        for (i, args) in link.calls.iter().enumerate() {
            let args_suffix = if i + 1 == link.calls.len() { suffix } else { 0 };
            let args_output = self.format_args(
                args,
                indent_level,
                end_column(column, &output),
                args_suffix,
            );
            output.push_str(&args_output);
        }

        output
    }

    fn format_args(&self, args: &[Expr<'_>], indent_level: usize, column: usize, suffix: usize) -> String {
        let flat = format!("({})", args.iter().map(Self::flat).join(", "));
        if args.is_empty() || self.fits(column, &flat, suffix) {
            return flat;
        }

        if let [Expr::Object(entries)] = args {
            if !entries.is_empty() {
                return format!("({})", self.format_object(entries, indent_level));
            }
        }

        let inner_column = (indent_level + 1) * self.config.indent_width;
        let mut output = String::from("(\n");

        for arg in args {
            output.push_str(&self.indent(indent_level + 1));
            output.push_str(&self.format_expr(arg, indent_level + 1, inner_column, 1));
            output.push_str(",\n");
        }

        output.push_str(&self.indent(indent_level));
        output.push(')');
        output
    }

    fn format_object(&self, entries: &[(&str, Expr<'_>)], indent_level: usize) -> String {
        let inner_column = (indent_level + 1) * self.config.indent_width;
        let mut output = String::from("{\n");

        for (key, value) in entries {
            output.push_str(&self.indent(indent_level + 1));
            output.push_str(key);
            output.push_str(": ");
            output.push_str(&self.format_expr(
                value,
                indent_level + 1,
                inner_column + width(key) + 2,
                1,
            ));
            output.push_str(",\n");
        }

        output.push_str(&self.indent(indent_level));
        output.push('}');
        output
    }

    fn flatten_chain<'e, 'a>(expr: &'e Expr<'a>) -> (&'e Expr<'a>, Vec<Link<'e, 'a>>) {
        let mut postfixes = Vec::new();
        let mut current = expr;

        loop {
            match current {
                Expr::Member(object, name) => {
                    postfixes.push(Postfix::Member(*name));
                    current = object.as_ref();
                }
                Expr::Call(callee, args) => {
                    postfixes.push(Postfix::Call(args.as_slice()));
                    current = callee.as_ref();
                }
                _ => break,
            }
        }

        let mut links: Vec<Link<'e, 'a>> = Vec::new();
        for postfix in postfixes.into_iter().rev() {
            match postfix {
                Postfix::Member(name) => links.push(Link {
                    name: Some(name),
                    calls: Vec::new(),
                }),
                Postfix::Call(args) => match links.last_mut() {
                    Some(link) => link.calls.push(args),
                    None => links.push(Link {
                        name: None,
                        calls: vec![args],
                    }),
                },
            }
        }

        (current, links)
    }

    fn flat(expr: &Expr<'_>) -> String {
        match expr {
            Expr::Ident(ident) => ident.to_string(),
            Expr::Literal(literal) => literal.to_string(),
            Expr::Object(entries) if entries.is_empty() => "{}".to_string(),
            Expr::Object(entries) => format!(
                "{{ {} }}",
                entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, Self::flat(value)))
                    .join(", ")
            ),
            Expr::Member(object, name) => format!("{}.{}", Self::flat(object), name),
            Expr::Call(callee, args) => format!(
                "{}({})",
                Self::flat(callee),
                args.iter().map(Self::flat).join(", ")
            ),
        }
    }

    fn fits(&self, column: usize, flat: &str, suffix: usize) -> bool {
        column + width(flat) + suffix <= self.config.print_width
    }

    fn indent(&self, indent_level: usize) -> String {
        " ".repeat(indent_level * self.config.indent_width)
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn end_column(start: usize, s: &str) -> usize {
    match s.rfind('\n') {
        Some(i) => width(&s[i + 1..]),
        None => start + width(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("  \n ", "")]
    #[case(
        "function Component() { return h.div(); }",
        "function Component() {\n  return h.div();\n}\n"
    )]
    #[case(
        "function   Component(){return h.div(\"a\").style({\"color\":\"red\",})}",
        "function Component() {\n  return h.div(\"a\").style({ \"color\": \"red\" });\n}\n"
    )]
    #[case(
        r#"function Component() { return h.div("a").children(h.span().children("1"),"text",h.span().children("2")); }"#,
        r#"function Component() {
  return h.div("a").children(
    h.span().children("1"),
    "text",
    h.span().children("2"),
  );
}
"#
    )]
    #[case(
        r#"function Form() { return h.div("form-group").style({"display":"flex","flex-direction":"column","margin":"0 auto",}).props({"id":"signup",}); }"#,
        r#"function Form() {
  return h.div("form-group")
    .style({
      "display": "flex",
      "flex-direction": "column",
      "margin": "0 auto",
    })
    .props({ "id": "signup" });
}
"#
    )]
    #[case(
        r#"function Form() { return h.div().style({"display":"flex","flex-direction":"column","margin":"0 auto","padding":"10px",}); }"#,
        r#"function Form() {
  return h.div().style({
    "display": "flex",
    "flex-direction": "column",
    "margin": "0 auto",
    "padding": "10px",
  });
}
"#
    )]
    #[case(
        r#"function List() { return h.ul("list").children(h.li().children("first item in the list"),h.li().children("second item in the list"),); }"#,
        r#"function List() {
  return h.ul("list").children(
    h.li().children("first item in the list"),
    h.li().children("second item in the list"),
  );
}
"#
    )]
    #[case(
        r#"function C() { return h.inputCheckbox("toggle").checked(true).props({"disabled":true,}); }"#,
        "function C() {\n  return h.inputCheckbox(\"toggle\").checked(true).props({ \"disabled\": true });\n}\n"
    )]
    fn test_format(#[case] code: &str, #[case] expected: &str) {
        let mut formatter = Formatter::new(None);
        assert_eq!(formatter.format(code).unwrap(), expected);
    }

    #[test]
    fn test_format_with_config() {
        let mut formatter = Formatter::new(Some(FormatterConfig {
            indent_width: 4,
            print_width: 40,
        }));

        assert_eq!(
            formatter
                .format(r#"function C() { return h.div("a").props({"id":"x",}).children("text"); }"#)
                .unwrap(),
            r#"function C() {
    return h.div("a")
        .props({ "id": "x" })
        .children("text");
}
"#
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let mut formatter = Formatter::new(None);
        let code = r#"function List() { return h.ul("list").children(h.li().children("first item in the list"),h.li().children("second item in the list"),); }"#;
        let once = formatter.format(code).unwrap();
        let twice = formatter.format(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_error() {
        let mut formatter = Formatter::new(None);
        assert!(matches!(
            formatter.format("function C() { return h.div(@); }"),
            Err(FormatError::UnexpectedCharacter { found: '@', .. })
        ));
    }
}
