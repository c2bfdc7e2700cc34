use logos::Logos;

/// Represents a lexical token of interest when scanning program source.
///
/// The scanner only cares about the call shapes `read(identifier)` and
/// `write(expression)`; every other character of the program is either
/// whitespace or an [`Other`] token that merely breaks adjacency.
///
/// [`Other`]: SourceToken::Other
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum SourceToken {
    /// The `read` keyword.
    #[token("read")]
    Read,
    /// The `write` keyword.
    #[token("write")]
    Write,
    /// Identifier tokens. Digits may lead, matching the permissive shape
    /// accepted inside `read(...)`.
    #[regex(r"[a-zA-Z0-9_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
    /// Any other character: operators, braces, string quotes. Carries no
    /// call-shape information but keeps token adjacency honest, so
    /// `read(x!)` is not mistaken for `read(x)`.
    #[regex(r".", priority = 0)]
    Other,
}

/// Removes line and block comments from raw source text.
///
/// Everything from `//` to the end of the line is removed, and everything
/// between `/*` and the nearest following `*/` is removed, possibly spanning
/// lines. An unterminated block comment consumes to the end of the text
/// silently. Whitespace and structure are otherwise preserved, so line
/// breaks outside comments survive.
///
/// Stripping is idempotent: running it on comment-free text is a no-op.
///
/// # Example
/// ```
/// use minirun::engine::source::strip_comments;
///
/// let source = "read(x); // the value\n/* echo\n   it */ write(x);";
/// assert_eq!(strip_comments(source), "read(x); \n write(x);");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let mut stripped = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '/' {
            stripped.push(c);
            continue;
        }

        match chars.peek() {
            Some('/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            },
            Some('*') => {
                chars.next();
                let mut starred = false;
                for next in chars.by_ref() {
                    if starred && next == '/' {
                        break;
                    }
                    starred = next == '*';
                }
            },
            _ => stripped.push(c),
        }
    }

    stripped
}

/// Extracts every `read(identifier)` call shape from the source, in source
/// order.
///
/// The same identifier may appear more than once; each occurrence is
/// reported, since each consumes one input value.
///
/// # Parameters
/// - `source`: Comment-stripped program text.
///
/// # Returns
/// The identifier of each read-statement, in order of appearance.
#[must_use]
pub fn read_variables(source: &str) -> Vec<String> {
    let tokens = scan(source);
    let mut variables = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        if let (SourceToken::Read, _) = &tokens[index]
           && let Some((SourceToken::LParen, _)) = tokens.get(index + 1)
           && let Some((SourceToken::Identifier(name), _)) = tokens.get(index + 2)
           && let Some((SourceToken::RParen, _)) = tokens.get(index + 3)
        {
            variables.push(name.clone());
            index += 4;
            continue;
        }
        index += 1;
    }

    variables
}

/// Extracts every `write(expression)` call shape from the source, in source
/// order.
///
/// The expression is the raw text between the opening parenthesis and the
/// first closing parenthesis, trimmed but not parsed. A call with nothing at
/// all between the parentheses is skipped; whitespace-only text still counts
/// as an (empty) expression.
///
/// # Parameters
/// - `source`: Comment-stripped program text.
///
/// # Returns
/// The expression text of each write-statement, in order of appearance.
#[must_use]
pub fn write_expressions(source: &str) -> Vec<String> {
    let tokens = scan(source);
    let mut expressions = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        if let (SourceToken::Write, _) = &tokens[index]
           && let Some((SourceToken::LParen, open)) = tokens.get(index + 1)
           && let Some(close) = tokens[index + 2..].iter()
                                                   .position(|(t, _)| *t == SourceToken::RParen)
        {
            let close = index + 2 + close;
            let raw = &source[open.end..tokens[close].1.start];
            if !raw.is_empty() {
                expressions.push(raw.trim().to_string());
            }
            index = close + 1;
            continue;
        }
        index += 1;
    }

    expressions
}

/// Tokenizes the source, keeping byte spans.
///
/// Characters with no dedicated pattern still lex (as [`SourceToken::Other`]
/// or, for anything the catch-all cannot cover, a lexer error that is
/// dropped); only whitespace is skipped.
fn scan(source: &str) -> Vec<(SourceToken, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = SourceToken::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        }
    }

    tokens
}
