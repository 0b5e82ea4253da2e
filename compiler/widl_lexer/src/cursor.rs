//! Byte cursor over source text.
//!
//! The cursor is [`Copy`]: a rule that needs to look ahead copies it, probes,
//! and only writes the copy back when the probe succeeded.

/// Read position into a byte buffer. Reading past the end yields `0`,
/// which no token rule accepts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize) -> Self {
        Cursor { buf, pos }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek(0)
    }

    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> u8 {
        self.buf.get(self.pos + offset).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or(&[])
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_by(1);
    }

    #[inline]
    pub(crate) fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Consume `byte` if it is next.
    #[inline]
    pub(crate) fn eat_if(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds; returns how many were consumed.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `[Ee][-+]?[0-9]+`, all or nothing.
    pub(crate) fn eat_exponent(&mut self) -> bool {
        if !matches!(self.current(), b'e' | b'E') {
            return false;
        }
        let mut probe = *self;
        probe.advance();
        if matches!(probe.current(), b'+' | b'-') {
            probe.advance();
        }
        if probe.eat_while(is_digit) == 0 {
            return false;
        }
        *self = probe;
        true
    }

    /// `//` up to, not including, the next line break or the end.
    pub(crate) fn eat_line_comment(&mut self) {
        debug_assert!(self.rest().starts_with(b"//"));
        let rest = self.rest();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.advance_by(len);
    }

    /// `/* ... */`. Leaves the cursor untouched when the comment is unterminated.
    pub(crate) fn eat_block_comment(&mut self) -> bool {
        debug_assert!(self.rest().starts_with(b"/*"));
        let body = self.rest().get(2..).unwrap_or(&[]);
        match memchr::memmem::find(body, b"*/") {
            Some(end) => {
                self.advance_by(2 + end + 2);
                true
            }
            None => false,
        }
    }
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub(crate) fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// `[\t\n\r ]`
#[inline]
pub(crate) fn is_blank(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
