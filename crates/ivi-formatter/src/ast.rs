/// A component function as emitted by the transformer: `function NAME() { return BODY; }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function<'a> {
    pub name: &'a str,
    pub body: Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Ident(&'a str),
    /// Raw string literal, quotes included.
    Literal(&'a str),
    /// Raw keys (quoted or bare) paired with their values.
    Object(Vec<(&'a str, Expr<'a>)>),
    Member(Box<Expr<'a>>, &'a str),
    Call(Box<Expr<'a>>, Vec<Expr<'a>>),
}
