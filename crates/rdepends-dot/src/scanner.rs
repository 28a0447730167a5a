//! Single-pass state machine over a Graphviz dependency dump.
//!
//! The scanner recognizes just enough of the dot language to find edge
//! statements of the form `"left" -> "right"`. It does not decide what an
//! edge means; it reports identifier boundaries and statement structure to a
//! [`ScanEvents`] implementation and leaves the rest to the caller.
//!
//! # Grammar
//!
//! ```text
//! statement  := ws* operand ws* "->" ws* operand terminator
//! operand    := '"' quoted '"' | bare
//! quoted     := (ident-byte | '""')+
//! bare       := bare-start ident-byte*          (after "->" a leading '-' is allowed)
//! ident-byte := [A-Za-z0-9] | '-' | '.' | '_' | '+'
//! terminator := ws | '\n' | ';' | '[' ... | end-of-input
//! ```
//!
//! `_` and `+` in identifiers are an extension over plain dot IDs, so that
//! BitBake names such as `gtk+3` and `gcc-cross-x86_64` are recognized.
//!
//! Anything else on a line (the `digraph` header, braces, node statements,
//! comments, a dangling `"nope"`) is malformed. The scanner then skips to the
//! next newline and carries on. The byte that broke the statement is looked
//! at again in the skipping state, so a statement that breaks on its own
//! newline never swallows the following line.
//!
//! An edge followed by an attribute list (`"a" -> "b" [style=dashed]`) is
//! committed before the rest of the line is skipped.

use tracing::trace;

/// Callbacks driven by [`scan`].
///
/// Offsets are byte offsets into the scanned input. Quotes are never part of
/// an identifier span. Escaped quotes (`""`) are left in the span as they
/// appear in the input; unescaping is up to the implementation.
pub trait ScanEvents {
    /// An identifier begins at `offset`.
    fn identifier_start(&mut self, offset: usize);

    /// The identifier begun by the last `identifier_start` ends at `offset`
    /// (exclusive).
    fn identifier_end(&mut self, offset: usize);

    /// The last completed identifier is the left operand of an arrow.
    fn push_left(&mut self);

    /// The last completed identifier is the right operand of an arrow.
    fn push_right(&mut self);

    /// Both operands are known; the statement is a complete edge.
    fn commit(&mut self);

    /// A malformed statement on `line` (1-based) is being skipped.
    fn skip_line(&mut self, _line: usize) {}
}

/// Counters gathered during a [`scan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of lines in the input.
    pub lines: usize,
    /// Number of malformed statements that were skipped.
    pub skipped: usize,
    /// Number of committed edge statements, self-references included.
    pub committed: usize,
}

/// Scan `input` from start to end, reporting events to `events`.
///
/// Never fails: malformed statements are skipped and reported through
/// [`ScanEvents::skip_line`] only.
pub fn scan<E: ScanEvents + ?Sized>(input: &str, events: &mut E) -> ScanSummary {
    let mut scanner = Scanner {
        input: input.as_bytes(),
        pos: 0,
        line: 1,
        state: State::Between,
        events,
        summary: ScanSummary::default(),
    };
    scanner.run();
    scanner.summary
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between statements, skipping whitespace.
    Between,
    /// Inside a quoted identifier whose first byte is at `start`.
    Quoted { operand: Operand, start: usize },
    /// Inside an unquoted identifier.
    Bare(Operand),
    /// After a complete left operand, expecting `->`.
    AfterLeft,
    /// Seen the `-` of `->`.
    ArrowDash,
    /// After `->`, expecting the right operand.
    AfterArrow,
    /// After a complete right operand, expecting a terminator.
    AfterRight,
    /// Discarding input up to and including the next newline.
    SkipLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Space,
    Newline,
    Quote,
    Hyphen,
    Greater,
    Semicolon,
    Bracket,
    Ident,
    Other,
}

fn classify(byte: u8) -> Class {
    match byte {
        b' ' | b'\t' | b'\r' | 0x0b | 0x0c => Class::Space,
        b'\n' => Class::Newline,
        b'"' => Class::Quote,
        b'-' => Class::Hyphen,
        b'>' => Class::Greater,
        b';' => Class::Semicolon,
        b'[' => Class::Bracket,
        b if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'+') => Class::Ident,
        _ => Class::Other,
    }
}

/// Bytes that may open an unquoted identifier before the arrow.
fn is_bare_start(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

struct Scanner<'a, E: ?Sized> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    state: State,
    events: &'a mut E,
    summary: ScanSummary,
}

impl<E: ScanEvents + ?Sized> Scanner<'_, E> {
    fn run(&mut self) {
        while let Some(&byte) = self.input.get(self.pos) {
            let next = self.input.get(self.pos + 1).copied();
            let consumed = self.step(byte, next);
            if consumed > 0 && byte == b'\n' {
                self.line += 1;
            }
            self.pos += consumed;
        }
        self.finish();
        self.summary.lines = if self.input.last() == Some(&b'\n') || self.input.is_empty() {
            self.line - 1
        } else {
            self.line
        };
    }

    /// Apply one transition and return how many bytes it consumed.
    ///
    /// Zero means the byte is examined again in the new state.
    fn step(&mut self, byte: u8, next: Option<u8>) -> usize {
        let class = classify(byte);
        match self.state {
            State::Between => match class {
                Class::Space | Class::Newline | Class::Semicolon => 1,
                Class::Quote => {
                    self.open(Operand::Left, self.pos + 1, true);
                    1
                }
                Class::Ident if is_bare_start(byte) => {
                    self.open(Operand::Left, self.pos, false);
                    1
                }
                _ => self.malformed(),
            },
            State::Quoted { operand, start } => match class {
                Class::Quote if next == Some(b'"') => 2,
                Class::Quote if self.pos == start => self.malformed(),
                Class::Quote => {
                    self.events.identifier_end(self.pos);
                    self.state = after(operand);
                    1
                }
                Class::Ident | Class::Hyphen => 1,
                _ => self.malformed(),
            },
            State::Bare(operand) => match class {
                Class::Hyphen if next == Some(b'>') => match operand {
                    Operand::Left => {
                        self.events.identifier_end(self.pos);
                        self.state = State::AfterLeft;
                        0
                    }
                    // Edge chains are not supported.
                    Operand::Right => self.malformed(),
                },
                Class::Ident | Class::Hyphen => 1,
                _ => {
                    self.events.identifier_end(self.pos);
                    self.state = after(operand);
                    0
                }
            },
            State::AfterLeft => match class {
                Class::Space => 1,
                Class::Hyphen => {
                    self.events.push_left();
                    self.state = State::ArrowDash;
                    1
                }
                _ => self.malformed(),
            },
            State::ArrowDash => match class {
                Class::Greater => {
                    self.state = State::AfterArrow;
                    1
                }
                _ => self.malformed(),
            },
            State::AfterArrow => match class {
                Class::Space => 1,
                Class::Quote => {
                    self.open(Operand::Right, self.pos + 1, true);
                    1
                }
                // A leading '-' must be followed by an identifier byte.
                Class::Hyphen if next.is_some_and(|b| classify(b) == Class::Ident) => {
                    self.open(Operand::Right, self.pos, false);
                    1
                }
                Class::Ident if is_bare_start(byte) => {
                    self.open(Operand::Right, self.pos, false);
                    1
                }
                _ => self.malformed(),
            },
            State::AfterRight => match class {
                Class::Space | Class::Newline | Class::Semicolon => {
                    self.commit();
                    self.state = State::Between;
                    1
                }
                Class::Bracket => {
                    self.commit();
                    self.state = State::SkipLine;
                    1
                }
                _ => self.malformed(),
            },
            State::SkipLine => {
                if class == Class::Newline {
                    self.state = State::Between;
                }
                1
            }
        }
    }

    fn open(&mut self, operand: Operand, start: usize, quoted: bool) {
        self.events.identifier_start(start);
        self.state = if quoted {
            State::Quoted { operand, start }
        } else {
            State::Bare(operand)
        };
    }

    fn commit(&mut self) {
        self.events.push_right();
        self.events.commit();
        self.summary.committed += 1;
    }

    fn malformed(&mut self) -> usize {
        trace!(line = self.line, state = ?self.state, "skipping malformed statement");
        self.events.skip_line(self.line);
        self.summary.skipped += 1;
        self.state = State::SkipLine;
        0
    }

    /// End-of-input: flush an unterminated bare identifier and commit a
    /// pending right operand. Anything cut off mid-token is dropped.
    fn finish(&mut self) {
        match self.state {
            State::Bare(operand) => {
                self.events.identifier_end(self.pos);
                if operand == Operand::Right {
                    self.commit();
                }
            }
            State::AfterRight => self.commit(),
            State::Quoted { .. } | State::ArrowDash | State::AfterArrow => {
                trace!(line = self.line, "input ends inside a statement");
            }
            State::Between | State::AfterLeft | State::SkipLine => {}
        }
        self.state = State::Between;
    }
}

fn after(operand: Operand) -> State {
    match operand {
        Operand::Left => State::AfterLeft,
        Operand::Right => State::AfterRight,
    }
}
