//! Tokenizer for `%` directives.

/// Width or precision of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Literal count written in the template
    Fixed(usize),
    /// `*`: taken from the next value
    FromArg,
}

/// One parsed `%[pos$][flags][width][.precision]spec` directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
    /// One-based explicit value position (`%2$s`)
    pub position: Option<usize>,
    /// `-` flag
    pub left_align: bool,
    /// `0` flag
    pub zero_pad: bool,
    /// `+` flag
    pub plus_sign: bool,
    /// ` ` flag
    pub space_sign: bool,
    /// `#` flag
    pub alternate: bool,
    pub width: Option<Count>,
    /// `None` when no period was written
    pub precision: Option<Count>,
    pub specifier: char,
}

impl Directive {
    /// Sign prefix requested for non-negative numbers.
    pub fn sign(&self) -> &'static str {
        if self.plus_sign {
            "+"
        } else if self.space_sign {
            " "
        } else {
            ""
        }
    }
}

/// Template piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Directive(Directive),
}

/// Split a template into literal text and directives.
///
/// `%%` becomes a literal `%`. A `%` that does not start a well-formed
/// directive is kept as literal text.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find('%') {
        let start = cursor + found;
        match parse_directive(&template[start + 1..]) {
            Some((directive, consumed)) => {
                if literal_start < start {
                    tokens.push(Token::Literal(&template[literal_start..start]));
                }
                if directive.specifier == '%' {
                    tokens.push(Token::Literal("%"));
                } else {
                    tokens.push(Token::Directive(directive));
                }
                cursor = start + 1 + consumed;
                literal_start = cursor;
            }
            None => cursor = start + 1,
        }
    }
    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// Parse the text following a `%`, returning the directive and the number
/// of bytes it spans.
fn parse_directive(input: &str) -> Option<(Directive, usize)> {
    let bytes = input.as_bytes();
    let mut i = 0;
    let mut directive = Directive::default();

    let digits = count_digits(&bytes[i..]);
    if digits > 0 && bytes[0] != b'0' && bytes.get(digits) == Some(&b'$') {
        directive.position = input[..digits].parse().ok();
        i = digits + 1;
    }

    while let Some(&b) = bytes.get(i) {
        match b {
            b'-' => directive.left_align = true,
            b'0' => directive.zero_pad = true,
            b'+' => directive.plus_sign = true,
            b' ' => directive.space_sign = true,
            b'#' => directive.alternate = true,
            _ => break,
        }
        i += 1;
    }

    let (width, used) = parse_count(input, i);
    directive.width = width;
    i += used;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let (precision, used) = parse_count(input, i);
        directive.precision = Some(precision.unwrap_or(Count::Fixed(0)));
        i += used;
    }

    // Length modifiers are accepted and ignored.
    if matches!(bytes.get(i), Some(b'h' | b'l' | b'L')) {
        i += 1;
    }

    match bytes.get(i) {
        Some(&b) if b == b'%' || b.is_ascii_alphabetic() => {
            directive.specifier = char::from(b);
            Some((directive, i + 1))
        }
        _ => None,
    }
}

fn parse_count(input: &str, at: usize) -> (Option<Count>, usize) {
    let bytes = &input.as_bytes()[at..];
    if bytes.first() == Some(&b'*') {
        return (Some(Count::FromArg), 1);
    }
    let digits = count_digits(bytes);
    if digits == 0 {
        return (None, 0);
    }
    let count = input[at..at + digits].parse().ok().map(Count::Fixed);
    (count, digits)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
