use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Ident(Rc<str>),
    Number(i64),
    Word(Word),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Period,
    Becomes,
    Eof,
}

impl Token {
    pub fn kind(&self) -> Kind {
        use Token::*;
        match self {
            Ident(_) => Kind::Ident,
            Number(_) => Kind::Number,
            Word(w) => w.kind(),
            Operator(op) => op.kind(),
            LParen => Kind::LParen,
            RParen => Kind::RParen,
            Comma => Kind::Comma,
            Semicolon => Kind::Semicolon,
            Period => Kind::Period,
            Becomes => Kind::Becomes,
            Eof => Kind::Eof,
        }
    }

    pub fn from_word(s: &str) -> Option<Token> {
        RESERVED_WORDS
            .binary_search_by(|(w, _)| w.cmp(&s))
            .ok()
            .map(|index| Token::Word(RESERVED_WORDS[index].1.clone()))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Ident(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", n),
            Word(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Period => write!(f, "."),
            Becomes => write!(f, ":="),
            Eof => Ok(()),
        }
    }
}

/// Sorted for binary search. Matching is case-sensitive.
const RESERVED_WORDS: [(&str, Word); 16] = [
    ("begin", Word::Begin),
    ("call", Word::Call),
    ("const", Word::Const),
    ("do", Word::Do),
    ("else", Word::Else),
    ("end", Word::End),
    ("if", Word::If),
    ("odd", Word::Odd),
    ("procedure", Word::Procedure),
    ("read", Word::Read),
    ("repeat", Word::Repeat),
    ("then", Word::Then),
    ("until", Word::Until),
    ("var", Word::Var),
    ("while", Word::While),
    ("write", Word::Write),
];

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Begin,
    Call,
    Const,
    Do,
    Else,
    End,
    If,
    Odd,
    Procedure,
    Read,
    Repeat,
    Then,
    Until,
    Var,
    While,
    Write,
}

impl Word {
    fn kind(&self) -> Kind {
        use Word::*;
        match self {
            Begin => Kind::Begin,
            Call => Kind::Call,
            Const => Kind::Const,
            Do => Kind::Do,
            Else => Kind::Else,
            End => Kind::End,
            If => Kind::If,
            Odd => Kind::Odd,
            Procedure => Kind::Procedure,
            Read => Kind::Read,
            Repeat => Kind::Repeat,
            Then => Kind::Then,
            Until => Kind::Until,
            Var => Kind::Var,
            While => Kind::While,
            Write => Kind::Write,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match RESERVED_WORDS.iter().find(|(_, w)| w == self) {
            Some((s, _)) => write!(f, "{}", s),
            None => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    fn kind(&self) -> Kind {
        use Operator::*;
        match self {
            Plus => Kind::Plus,
            Minus => Kind::Minus,
            Multiply => Kind::Multiply,
            Divide => Kind::Divide,
            Equal => Kind::Equal,
            NotEqual => Kind::NotEqual,
            Less => Kind::Less,
            LessEqual => Kind::LessEqual,
            Greater => Kind::Greater,
            GreaterEqual => Kind::GreaterEqual,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

/// Fieldless token classification used for FIRST, FOLLOW and STOP sets.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Ident,
    Number,
    Begin,
    Call,
    Const,
    Do,
    Else,
    End,
    If,
    Odd,
    Procedure,
    Read,
    Repeat,
    Then,
    Until,
    Var,
    While,
    Write,
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Period,
    Becomes,
    Eof,
}

/// ## Set of token kinds
///
/// One bit per `Kind`. Sets are small `Copy` values so every
/// nonterminal can extend its caller's FOLLOW set without allocating.

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct KindSet(u64);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    pub const fn new(kinds: &[Kind]) -> KindSet {
        let mut bits: u64 = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u64 << kinds[i] as u64;
            i += 1;
        }
        KindSet(bits)
    }

    pub fn contains(self, kind: Kind) -> bool {
        self.0 & (1u64 << kind as u64) != 0
    }

    pub const fn with(self, kind: Kind) -> KindSet {
        KindSet(self.0 | 1u64 << kind as u64)
    }
}

impl std::ops::BitOr for KindSet {
    type Output = KindSet;
    fn bitor(self, rhs: KindSet) -> KindSet {
        KindSet(self.0 | rhs.0)
    }
}

impl std::fmt::Debug for KindSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<u64> = (0..64).filter(|bit| self.0 & (1u64 << *bit) != 0).collect();
        write!(f, "KindSet{:?}", kinds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word() {
        assert_eq!(Token::from_word("while"), Some(Token::Word(Word::While)));
        assert_eq!(Token::from_word("begin"), Some(Token::Word(Word::Begin)));
        assert_eq!(Token::from_word("write"), Some(Token::Word(Word::Write)));
        assert_eq!(Token::from_word("While"), None);
        assert_eq!(Token::from_word("pickles"), None);
    }

    #[test]
    fn test_reserved_words_sorted() {
        for pair in RESERVED_WORDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_kind_set() {
        let set = KindSet::new(&[Kind::Ident, Kind::Eof]);
        assert!(set.contains(Kind::Ident));
        assert!(set.contains(Kind::Eof));
        assert!(!set.contains(Kind::Period));
        let set = set.with(Kind::Period) | KindSet::new(&[Kind::Comma]);
        assert!(set.contains(Kind::Period));
        assert!(set.contains(Kind::Comma));
        assert!(!KindSet::EMPTY.contains(Kind::Eof));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Word(Word::Procedure).to_string(), "procedure");
        assert_eq!(Token::Operator(Operator::NotEqual).to_string(), "<>");
        assert_eq!(Token::Becomes.to_string(), ":=");
    }
}
