use super::LineNumber;
use crate::mach::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    address: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, @$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident, @$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            address: None,
            message: String::new(),
        }
    }

    pub fn in_line_number(self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UseEqualNotBecomes = 1,
    NumberExpected = 2,
    EqualExpected = 3,
    DeclarationIdentExpected = 4,
    SemicolonOrCommaMissing = 5,
    BadSymbolAfterProcedure = 6,
    StatementExpected = 7,
    BadSymbolAfterBlock = 8,
    PeriodExpected = 9,
    SemicolonMissing = 10,
    UndeclaredIdentifier = 11,
    AssignmentToNonVariable = 12,
    BecomesExpected = 13,
    CallIdentExpected = 14,
    CallOfNonProcedure = 15,
    ThenExpected = 16,
    SemicolonOrEndExpected = 17,
    DoExpected = 18,
    BadSymbolAfterStatement = 19,
    RelationExpected = 20,
    ProcedureInExpression = 21,
    RightParenMissing = 22,
    BadSymbolAfterFactor = 23,
    BadExpressionStart = 24,
    NumberTooLarge = 25,
    InvalidCharacter = 26,
    ColonWithoutEqual = 27,
    UntilExpected = 28,
    ReadOfNonVariable = 29,
    ReadIdentExpected = 30,
    NumberOutOfRange = 31,
    NestingTooDeep = 32,
    ListRightParenExpected = 33,
    ListLeftParenExpected = 34,
    ReadOfUndeclared = 35,

    Overflow = 50,
    DivisionByZero = 51,
    StackOverflow = 52,
    StackUnderflow = 53,
    IllegalStackAddress = 54,
    AddressOutOfRange = 55,
    MalformedInput = 56,
    InputPastEnd = 57,
    ProgramHasErrors = 58,
    Break = 59,
    FileNotFound = 60,
    IoError = 61,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {}: {} }}", self.code, self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "USE = INSTEAD OF :=",
            2 => "= MUST BE FOLLOWED BY A NUMBER",
            3 => "IDENTIFIER MUST BE FOLLOWED BY =",
            4 => "CONST, VAR, PROCEDURE MUST BE FOLLOWED BY AN IDENTIFIER",
            5 => "SEMICOLON OR COMMA MISSING",
            6 => "INCORRECT SYMBOL AFTER PROCEDURE DECLARATION",
            7 => "STATEMENT EXPECTED",
            8 => "INCORRECT SYMBOL AFTER STATEMENT PART IN BLOCK",
            9 => "PERIOD EXPECTED",
            10 => "SEMICOLON BETWEEN STATEMENTS MISSING",
            11 => "UNDECLARED IDENTIFIER",
            12 => "ASSIGNMENT TO CONSTANT OR PROCEDURE NOT ALLOWED",
            13 => "ASSIGNMENT OPERATOR := EXPECTED",
            14 => "CALL MUST BE FOLLOWED BY AN IDENTIFIER",
            15 => "CALL OF A CONSTANT OR VARIABLE IS MEANINGLESS",
            16 => "THEN EXPECTED",
            17 => "SEMICOLON OR END EXPECTED",
            18 => "DO EXPECTED",
            19 => "INCORRECT SYMBOL FOLLOWING STATEMENT",
            20 => "RELATIONAL OPERATOR EXPECTED",
            21 => "EXPRESSION MUST NOT CONTAIN A PROCEDURE IDENTIFIER",
            22 => "RIGHT PARENTHESIS MISSING",
            23 => "THE PRECEDING FACTOR CANNOT BE FOLLOWED BY THIS SYMBOL",
            24 => "AN EXPRESSION CANNOT BEGIN WITH THIS SYMBOL",
            25 => "THIS NUMBER IS TOO LARGE",
            26 => "INVALID CHARACTER",
            27 => "COLON MUST BE FOLLOWED BY =",
            28 => "UNTIL EXPECTED",
            29 => "READ TARGET MUST BE A VARIABLE",
            30 => "READ LIST MUST CONTAIN IDENTIFIERS",
            31 => "NUMBER OUT OF RANGE",
            32 => "NESTING TOO DEEP",
            33 => "RIGHT PARENTHESIS EXPECTED",
            34 => "LEFT PARENTHESIS EXPECTED",
            35 => "UNDECLARED VARIABLE IN READ",
            50 => "OVERFLOW",
            51 => "DIVISION BY ZERO",
            52 => "STACK OVERFLOW",
            53 => "STACK UNDERFLOW",
            54 => "ILLEGAL STACK ADDRESS",
            55 => "ADDRESS OUT OF RANGE",
            56 => "MALFORMED INPUT",
            57 => "INPUT PAST END",
            58 => "PROGRAM HAS ERRORS",
            59 => "BREAK",
            60 => "FILE NOT FOUND",
            61 => "I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" LINE {}", line_number));
        }
        if let Some(address) = self.address {
            suffix.push_str(&format!(" ADDRESS {}", address));
        }
        let mut s = if code_str.is_empty() {
            format!("ERROR {}", self.code)
        } else {
            code_str.to_string()
        };
        if !suffix.is_empty() {
            s.push_str(" IN");
            s.push_str(&suffix);
        }
        if !self.message.is_empty() {
            s.push_str("; ");
            s.push_str(&self.message);
        }
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display() {
        let e = error!(UndeclaredIdentifier, 3);
        assert_eq!(e.to_string(), "UNDECLARED IDENTIFIER IN LINE 3");
        let e = error!(InvalidCharacter, 1; "'?'");
        assert_eq!(e.to_string(), "INVALID CHARACTER IN LINE 1; '?'");
        let e = error!(DivisionByZero, @17);
        assert_eq!(e.to_string(), "DIVISION BY ZERO IN ADDRESS 17");
        assert_eq!(error!(Break).to_string(), "BREAK");
    }

    #[test]
    fn test_taxonomy() {
        assert_eq!(error!(NestingTooDeep, 1).line_number(), Some(1));
        assert_eq!(error!(StackOverflow, @0).address(), Some(0));
        assert_eq!(error!(NestingTooDeep).code(), 32);
    }
}
