#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Clone, Copy)]
pub struct TokenParser<'a>(&'a [u8]);

impl<'a> TokenParser<'a> {
    /// Create a new TokenParser over the bytes of a command-line token
    pub fn new(token: &'a str) -> Self {
        Self(token.as_bytes())
    }

    /// Return the next byte without consuming it
    /// # Example
    /// ```
    /// # use hufftree_lib::parsing::TokenParser;
    /// let mut parser = TokenParser::new("42");
    /// assert_eq!(parser.peek(), Some(b'4'));
    /// assert_eq!(parser.peek(), Some(b'4'));
    /// ```
    pub fn peek(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// Consume and return the next byte, or `None` once the token is exhausted
    /// # Example
    /// ```
    /// # use hufftree_lib::parsing::TokenParser;
    /// let mut parser = TokenParser::new("ab");
    /// assert_eq!(parser.u8(), Some(b'a'));
    /// assert_eq!(parser.u8(), Some(b'b'));
    /// assert_eq!(parser.u8(), None);
    /// ```
    pub fn u8(&mut self) -> Option<u8> {
        let (first, rest) = self.0.split_first()?;
        self.0 = rest;
        Some(*first)
    }

    /// Return the number of bytes still unparsed
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the token is exhausted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the longest prefix whose bytes satisfy `predicate` and
    /// return it as a sub slice (possibly empty).
    /// # Example
    /// ```
    /// # use hufftree_lib::parsing::TokenParser;
    /// let mut parser = TokenParser::new("123abc");
    /// assert_eq!(parser.take_while(|b| b.is_ascii_digit()), b"123");
    /// assert_eq!(parser.len(), 3);
    /// ```
    pub fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a [u8] {
        let len = self.0.iter().take_while(|b| predicate(**b)).count();
        let (taken, rest) = self.0.split_at(len);
        self.0 = rest;
        taken
    }

    /// Skip leading ASCII whitespace, the way `isspace` does in C
    pub fn skip_whitespace(&mut self) {
        // \x0b (vertical tab) is whitespace for C but not for `is_ascii_whitespace`
        self.take_while(|b| b.is_ascii_whitespace() || b == 0x0b);
    }

    /// Consume an optional leading `+` or `-`
    /// # Example
    /// ```
    /// # use hufftree_lib::parsing::{Sign, TokenParser};
    /// let mut parser = TokenParser::new("-7");
    /// assert_eq!(parser.sign(), Some(Sign::Minus));
    /// assert_eq!(parser.sign(), None);
    /// assert_eq!(parser.len(), 1);
    /// ```
    pub fn sign(&mut self) -> Option<Sign> {
        let sign = match self.peek()? {
            b'+' => Sign::Plus,
            b'-' => Sign::Minus,
            _ => return None,
        };
        self.u8();
        Some(sign)
    }

    /// Consume the longest run of ASCII digits
    pub fn digits(&mut self) -> &'a [u8] {
        self.take_while(|b| b.is_ascii_digit())
    }
}

impl<'a> From<TokenParser<'a>> for &'a [u8] {
    fn from(parser: TokenParser<'a>) -> Self {
        parser.0
    }
}
