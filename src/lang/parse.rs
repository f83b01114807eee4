use super::{
    token::*, Entry, Error, ErrorCode, Scanner, SymbolTable, MAX_DEPTH, MAX_LEVEL, MAX_NUMBER,
};
use crate::mach::{Address, Opcode, Opr, Program, Val, FRAME_HEADER};

const DECLARATION: KindSet = KindSet::new(&[Kind::Const, Kind::Var, Kind::Procedure]);

const STATEMENT: KindSet = KindSet::new(&[
    Kind::Begin,
    Kind::Call,
    Kind::If,
    Kind::While,
    Kind::Repeat,
    Kind::Read,
    Kind::Write,
]);

const FACTOR: KindSet = KindSet::new(&[Kind::Ident, Kind::Number, Kind::LParen]);

const RELATION: KindSet = KindSet::new(&[
    Kind::Equal,
    Kind::NotEqual,
    Kind::Less,
    Kind::LessEqual,
    Kind::Greater,
    Kind::GreaterEqual,
]);

/// Tokens that continue a `;` separated statement list. An identifier
/// here means the separator was forgotten.
const CONTINUATION: KindSet = STATEMENT.with(Kind::Ident).with(Kind::Semicolon);

/// Everything a compile produces, successful or not.
///
/// The program of a compilation with errors is still complete enough
/// to list, but the `Runtime` refuses to load it.
#[derive(Debug)]
pub struct Compilation {
    program: Program,
    table: SymbolTable,
    errors: Vec<Error>,
    entry: Address,
    frame_size: usize,
}

impl Compilation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
    pub fn program(&self) -> &Program {
        &self.program
    }
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }
    /// Address of the main block's `INT`.
    pub fn entry(&self) -> Address {
        self.entry
    }
    /// Slots the main block allocates, frame header included.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }
    pub fn into_program(self) -> Program {
        self.program
    }
}

pub fn compile(source: &str) -> Compilation {
    Parser::new(source.chars()).parse()
}

/// ## Single pass compiler
///
/// Recursive descent with one token of lookahead. Code is emitted as
/// each construct is recognized. Every nonterminal receives the set of
/// tokens that may legally follow it; on a syntax error tokens are
/// skipped until something in that set (or a stop set) turns up, so
/// one compile reports every error it can reach.

pub struct Parser<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    token: Token,
    line: usize,
    table: SymbolTable,
    program: Program,
    errors: Vec<Error>,
    alloc: usize,
    depth: usize,
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(source: I) -> Parser<I> {
        Parser {
            scanner: Scanner::new(source),
            token: Token::Eof,
            line: 1,
            table: SymbolTable::new(),
            program: Program::new(),
            errors: vec![],
            alloc: 0,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Compilation {
        self.next();
        let (entry, frame_size) = self.block(0, None, DECLARATION | STATEMENT.with(Kind::Period));
        if self.kind() != Kind::Period {
            self.report(error!(PeriodExpected, self.line));
        }
        Compilation {
            program: self.program,
            table: self.table,
            errors: self.errors,
            entry,
            frame_size,
        }
    }

    fn next(&mut self) {
        loop {
            match self.scanner.next_token() {
                Ok(token) => {
                    self.token = token;
                    self.line = self.scanner.line();
                    return;
                }
                Err(error) => self.errors.push(error),
            }
        }
    }

    fn kind(&self) -> Kind {
        self.token.kind()
    }

    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    fn test(&mut self, follows: KindSet, stops: KindSet, code: ErrorCode) {
        if follows.contains(self.kind()) {
            return;
        }
        self.report(Error::new(code).in_line_number(self.line));
        let sync = follows | stops;
        while !sync.contains(self.kind()) && self.token != Token::Eof {
            self.next();
        }
    }

    /// Run `f` one level deeper. Past `MAX_DEPTH` the rest of the
    /// source is skipped so recursion cannot exhaust the native stack.
    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        if self.depth >= MAX_DEPTH {
            self.report(error!(NestingTooDeep, self.line; "SOURCE NESTED TOO DEEPLY"));
            while self.token != Token::Eof {
                self.next();
            }
            return;
        }
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn number(&mut self, value: Val) -> Val {
        if value > MAX_NUMBER {
            self.report(error!(NumberOutOfRange, self.line));
            return 0;
        }
        value
    }

    /// Returns the address of the block's `INT` and its frame size.
    fn block(&mut self, level: usize, owner: Option<usize>, follows: KindSet) -> (Address, usize) {
        let saved_alloc = self.alloc;
        self.alloc = FRAME_HEADER;
        let snapshot = self.table.mark();
        let jmp = self.program.emit(Opcode::Jmp(0));
        self.set_entry_point(owner, jmp, 0);
        if level > MAX_LEVEL {
            self.report(error!(NestingTooDeep, self.line));
        }
        loop {
            if self.kind() == Kind::Const {
                self.next();
                self.const_declaration();
                while self.kind() == Kind::Comma {
                    self.next();
                    self.const_declaration();
                }
                self.expect_semicolon();
            }
            if self.kind() == Kind::Var {
                self.next();
                self.var_declaration(level);
                while self.kind() == Kind::Comma {
                    self.next();
                    self.var_declaration(level);
                }
                self.expect_semicolon();
            }
            while self.kind() == Kind::Procedure {
                self.next();
                let index = match &self.token {
                    Token::Ident(name) => {
                        let index = self.table.enter_procedure(name.clone(), level);
                        self.next();
                        Some(index)
                    }
                    _ => {
                        self.report(error!(DeclarationIdentExpected, self.line));
                        None
                    }
                };
                self.expect_semicolon();
                self.nested(|p| {
                    p.block(level + 1, index, follows.with(Kind::Semicolon));
                });
                if self.kind() == Kind::Semicolon {
                    self.next();
                    self.test(
                        STATEMENT.with(Kind::Ident).with(Kind::Procedure) | follows,
                        follows,
                        ErrorCode::BadSymbolAfterProcedure,
                    );
                } else {
                    self.report(error!(SemicolonOrCommaMissing, self.line));
                }
            }
            self.test(
                STATEMENT.with(Kind::Ident) | follows,
                DECLARATION,
                ErrorCode::StatementExpected,
            );
            if !DECLARATION.contains(self.kind()) {
                break;
            }
        }
        let start = self.program.next_address();
        let frame_size = self.alloc;
        self.program.patch(jmp, start);
        self.set_entry_point(owner, start, frame_size);
        self.program.emit(Opcode::Int(self.alloc));
        self.statement(level, follows.with(Kind::Semicolon).with(Kind::End));
        self.program.emit(Opcode::Opr(Opr::Return));
        self.test(follows, KindSet::EMPTY, ErrorCode::BadSymbolAfterBlock);
        self.table.restore(snapshot);
        self.alloc = saved_alloc;
        (start, frame_size)
    }

    fn set_entry_point(&mut self, owner: Option<usize>, start: usize, frame_size: usize) {
        if let Some(index) = owner {
            if let Some(Entry::Procedure { address, size, .. }) = self.table.entry_at_mut(index) {
                *address = start;
                *size = frame_size;
            }
        }
    }

    fn expect_semicolon(&mut self) {
        if self.kind() == Kind::Semicolon {
            self.next();
        } else {
            self.report(error!(SemicolonOrCommaMissing, self.line));
        }
    }

    fn const_declaration(&mut self) {
        let name = match &self.token {
            Token::Ident(name) => name.clone(),
            _ => {
                self.report(error!(DeclarationIdentExpected, self.line));
                return;
            }
        };
        self.next();
        match self.kind() {
            Kind::Equal | Kind::Becomes => {
                if self.kind() == Kind::Becomes {
                    self.report(error!(UseEqualNotBecomes, self.line));
                }
                self.next();
                if let Token::Number(value) = self.token {
                    let value = self.number(value);
                    self.table.enter_constant(name, value);
                    self.next();
                } else {
                    self.report(error!(NumberExpected, self.line));
                }
            }
            _ => self.report(error!(EqualExpected, self.line)),
        }
    }

    fn var_declaration(&mut self, level: usize) {
        if let Token::Ident(name) = &self.token {
            self.table.enter_variable(name.clone(), level, self.alloc);
            self.alloc += 1;
            self.next();
        } else {
            self.report(error!(DeclarationIdentExpected, self.line));
        }
    }

    /// Resolve `name` to the (level difference, offset) of a variable.
    fn variable(&mut self, name: &str, level: usize, code: ErrorCode) -> Option<(usize, usize)> {
        match self.table.position(name).and_then(|i| self.table.entry_at(i)) {
            Some(Entry::Variable {
                level: declared,
                offset,
                ..
            }) => Some((level - declared, *offset)),
            Some(_) => {
                self.report(Error::new(code).in_line_number(self.line));
                None
            }
            None => None,
        }
    }

    fn statement(&mut self, level: usize, follows: KindSet) {
        match self.kind() {
            Kind::Ident => self.assignment(level, follows),
            Kind::Call => self.call(level),
            Kind::If => self.nested(|p| p.if_then_else(level, follows)),
            Kind::Begin => self.nested(|p| p.begin_end(level, follows)),
            Kind::While => self.nested(|p| p.while_do(level, follows)),
            Kind::Repeat => self.nested(|p| p.repeat_until(level, follows)),
            Kind::Read => self.read(level),
            Kind::Write => self.write(level, follows),
            _ => {}
        }
        self.test(follows, KindSet::EMPTY, ErrorCode::BadSymbolAfterStatement);
    }

    fn assignment(&mut self, level: usize, follows: KindSet) {
        let name = match &self.token {
            Token::Ident(name) => name.clone(),
            _ => return,
        };
        let target = if self.table.position(&name).is_none() {
            self.report(error!(UndeclaredIdentifier, self.line; &name));
            None
        } else {
            self.variable(&name, level, ErrorCode::AssignmentToNonVariable)
        };
        self.next();
        if self.kind() == Kind::Becomes {
            self.next();
        } else {
            self.report(error!(BecomesExpected, self.line));
        }
        self.expression(level, follows);
        if let Some((level, offset)) = target {
            self.program.emit(Opcode::Sto(level, offset));
        }
    }

    fn call(&mut self, level: usize) {
        self.next();
        let name = match &self.token {
            Token::Ident(name) => name.clone(),
            _ => {
                self.report(error!(CallIdentExpected, self.line));
                return;
            }
        };
        match self.table.position(&name).and_then(|i| self.table.entry_at(i)) {
            Some(Entry::Procedure {
                level: declared,
                address,
                ..
            }) => {
                let op = Opcode::Cal(level - declared, *address);
                self.program.emit(op);
            }
            Some(_) => self.report(error!(CallOfNonProcedure, self.line)),
            None => self.report(error!(UndeclaredIdentifier, self.line; &name)),
        }
        self.next();
    }

    fn if_then_else(&mut self, level: usize, follows: KindSet) {
        self.next();
        self.condition(level, follows.with(Kind::Then).with(Kind::Do));
        if self.kind() == Kind::Then {
            self.next();
        } else {
            self.report(error!(ThenExpected, self.line));
        }
        let jpc = self.program.emit(Opcode::Jpc(0));
        self.statement(level, follows.with(Kind::Else));
        if self.kind() == Kind::Else {
            self.next();
            let jmp = self.program.emit(Opcode::Jmp(0));
            self.program.patch(jpc, self.program.next_address());
            self.statement(level, follows);
            self.program.patch(jmp, self.program.next_address());
        } else {
            self.program.patch(jpc, self.program.next_address());
        }
    }

    fn begin_end(&mut self, level: usize, follows: KindSet) {
        self.next();
        let inner = follows.with(Kind::Semicolon).with(Kind::End);
        self.statement(level, inner);
        while CONTINUATION.contains(self.kind()) {
            if self.kind() == Kind::Semicolon {
                self.next();
            } else {
                self.report(error!(SemicolonMissing, self.line));
            }
            self.statement(level, inner);
        }
        if self.kind() == Kind::End {
            self.next();
        } else {
            self.report(error!(SemicolonOrEndExpected, self.line));
        }
    }

    fn while_do(&mut self, level: usize, follows: KindSet) {
        let start = self.program.next_address();
        self.next();
        self.condition(level, follows.with(Kind::Do));
        let jpc = self.program.emit(Opcode::Jpc(0));
        if self.kind() == Kind::Do {
            self.next();
        } else {
            self.report(error!(DoExpected, self.line));
        }
        self.statement(level, follows);
        self.program.emit(Opcode::Jmp(start));
        self.program.patch(jpc, self.program.next_address());
    }

    fn repeat_until(&mut self, level: usize, follows: KindSet) {
        let start = self.program.next_address();
        self.next();
        let inner = follows.with(Kind::Semicolon).with(Kind::Until);
        self.statement(level, inner);
        while CONTINUATION.contains(self.kind()) {
            if self.kind() == Kind::Semicolon {
                self.next();
            } else {
                self.report(error!(SemicolonMissing, self.line));
            }
            self.statement(level, inner);
        }
        if self.kind() == Kind::Until {
            self.next();
            self.condition(level, follows);
            self.program.emit(Opcode::Jpc(start));
        } else {
            self.report(error!(UntilExpected, self.line));
        }
    }

    fn read(&mut self, level: usize) {
        self.next();
        if self.kind() != Kind::LParen {
            self.report(error!(ListLeftParenExpected, self.line));
            return;
        }
        loop {
            self.next();
            if let Token::Ident(name) = &self.token {
                let name = name.clone();
                if self.table.position(&name).is_none() {
                    self.report(error!(ReadOfUndeclared, self.line; &name));
                } else if let Some((level, offset)) =
                    self.variable(&name, level, ErrorCode::ReadOfNonVariable)
                {
                    self.program.emit(Opcode::Opr(Opr::Read));
                    self.program.emit(Opcode::Sto(level, offset));
                }
                self.next();
            } else {
                self.report(error!(ReadIdentExpected, self.line));
            }
            if self.kind() != Kind::Comma {
                break;
            }
        }
        if self.kind() == Kind::RParen {
            self.next();
        } else {
            self.report(error!(ListRightParenExpected, self.line));
        }
    }

    fn write(&mut self, level: usize, follows: KindSet) {
        self.next();
        if self.kind() != Kind::LParen {
            self.report(error!(ListLeftParenExpected, self.line));
            return;
        }
        let inner = follows.with(Kind::RParen).with(Kind::Comma);
        loop {
            self.next();
            self.expression(level, inner);
            self.program.emit(Opcode::Opr(Opr::Write));
            if self.kind() != Kind::Comma {
                break;
            }
        }
        if self.kind() == Kind::RParen {
            self.next();
        } else {
            self.report(error!(ListRightParenExpected, self.line));
        }
        self.program.emit(Opcode::Opr(Opr::WriteLn));
    }

    fn condition(&mut self, level: usize, follows: KindSet) {
        if self.kind() == Kind::Odd {
            self.next();
            self.expression(level, follows);
            self.program.emit(Opcode::Opr(Opr::Odd));
            return;
        }
        self.expression(level, follows | RELATION);
        let opr = match &self.token {
            Token::Operator(Operator::Equal) => Opr::Eq,
            Token::Operator(Operator::NotEqual) => Opr::NotEq,
            Token::Operator(Operator::Less) => Opr::Lt,
            Token::Operator(Operator::LessEqual) => Opr::LtEq,
            Token::Operator(Operator::Greater) => Opr::Gt,
            Token::Operator(Operator::GreaterEqual) => Opr::GtEq,
            _ => {
                self.report(error!(RelationExpected, self.line));
                return;
            }
        };
        self.next();
        self.expression(level, follows);
        self.program.emit(Opcode::Opr(opr));
    }

    fn expression(&mut self, level: usize, follows: KindSet) {
        let inner = follows.with(Kind::Plus).with(Kind::Minus);
        let negate = match self.kind() {
            Kind::Plus => {
                self.next();
                false
            }
            Kind::Minus => {
                self.next();
                true
            }
            _ => false,
        };
        self.term(level, inner);
        if negate {
            self.program.emit(Opcode::Opr(Opr::Neg));
        }
        loop {
            let opr = match self.kind() {
                Kind::Plus => Opr::Add,
                Kind::Minus => Opr::Sub,
                _ => break,
            };
            self.next();
            self.term(level, inner);
            self.program.emit(Opcode::Opr(opr));
        }
    }

    fn term(&mut self, level: usize, follows: KindSet) {
        let inner = follows.with(Kind::Multiply).with(Kind::Divide);
        self.factor(level, inner);
        loop {
            let opr = match self.kind() {
                Kind::Multiply => Opr::Mul,
                Kind::Divide => Opr::Div,
                _ => break,
            };
            self.next();
            self.factor(level, inner);
            self.program.emit(Opcode::Opr(opr));
        }
    }

    fn factor(&mut self, level: usize, follows: KindSet) {
        self.test(FACTOR, follows, ErrorCode::BadExpressionStart);
        while FACTOR.contains(self.kind()) {
            match self.token.clone() {
                Token::Ident(name) => {
                    let op = match self.table.position(&name).and_then(|i| self.table.entry_at(i)) {
                        Some(Entry::Constant { value, .. }) => Some(Opcode::Lit(*value)),
                        Some(Entry::Variable {
                            level: declared,
                            offset,
                            ..
                        }) => Some(Opcode::Lod(level - declared, *offset)),
                        Some(Entry::Procedure { .. }) => {
                            self.report(error!(ProcedureInExpression, self.line));
                            None
                        }
                        None => {
                            self.report(error!(UndeclaredIdentifier, self.line; &name));
                            None
                        }
                    };
                    if let Some(op) = op {
                        self.program.emit(op);
                    }
                    self.next();
                }
                Token::Number(value) => {
                    let value = self.number(value);
                    self.program.emit(Opcode::Lit(value));
                    self.next();
                }
                Token::LParen => {
                    self.next();
                    self.nested(|p| p.expression(level, follows.with(Kind::RParen)));
                    if self.kind() == Kind::RParen {
                        self.next();
                    } else {
                        self.report(error!(RightParenMissing, self.line));
                    }
                }
                _ => {}
            }
            self.test(
                follows,
                KindSet::new(&[Kind::LParen]),
                ErrorCode::BadSymbolAfterFactor,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(s: &str) -> Vec<u16> {
        compile(s).errors().iter().map(|e| e.code()).collect()
    }

    fn ops(s: &str) -> Vec<Opcode> {
        let compilation = compile(s);
        assert!(compilation.is_ok(), "{:?}", compilation.errors());
        compilation.program().iter().cloned().collect()
    }

    #[test]
    fn test_write_sum() {
        use Opcode::*;
        assert_eq!(
            ops("write(1+2)."),
            vec![
                Jmp(1),
                Int(3),
                Lit(1),
                Lit(2),
                Opr(super::Opr::Add),
                Opr(super::Opr::Write),
                Opr(super::Opr::WriteLn),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_procedure_layout() {
        use Opcode::*;
        let compilation = compile("var x;\nprocedure p;\n  x := 1;\nbegin call p end.");
        assert!(compilation.is_ok());
        assert_eq!(
            compilation.program().iter().cloned().collect::<Vec<_>>(),
            vec![
                Jmp(6),
                Jmp(2),
                Int(3),
                Lit(1),
                Sto(1, 3),
                Opr(super::Opr::Return),
                Int(4),
                Cal(0, 2),
                Opr(super::Opr::Return),
            ]
        );
        assert_eq!(
            compilation.table().entries()[1],
            Entry::Procedure {
                name: "p".into(),
                level: 0,
                address: 2,
                size: 3
            }
        );
        assert_eq!(compilation.entry(), 6);
        assert_eq!(compilation.frame_size(), 4);
    }

    #[test]
    fn test_main_frame() {
        let compilation = compile("var a, b; write(a).");
        assert_eq!(compilation.entry(), 1);
        assert_eq!(compilation.frame_size(), 5);
    }

    #[test]
    fn test_if_else_patching() {
        use Opcode::*;
        assert_eq!(
            ops("var a; if a = 0 then a := 1 else a := 2."),
            vec![
                Jmp(1),
                Int(4),
                Lod(0, 3),
                Lit(0),
                Opr(super::Opr::Eq),
                Jpc(9),
                Lit(1),
                Sto(0, 3),
                Jmp(11),
                Lit(2),
                Sto(0, 3),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_while_patching() {
        use Opcode::*;
        assert_eq!(
            ops("var i; while i < 3 do i := i + 1."),
            vec![
                Jmp(1),
                Int(4),
                Lod(0, 3),
                Lit(3),
                Opr(super::Opr::Lt),
                Jpc(11),
                Lod(0, 3),
                Lit(1),
                Opr(super::Opr::Add),
                Sto(0, 3),
                Jmp(2),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_repeat_jumps_back() {
        use Opcode::*;
        assert_eq!(
            ops("var i; repeat i := i + 1 until odd i."),
            vec![
                Jmp(1),
                Int(4),
                Lod(0, 3),
                Lit(1),
                Opr(super::Opr::Add),
                Sto(0, 3),
                Lod(0, 3),
                Opr(super::Opr::Odd),
                Jpc(2),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_read_list() {
        use Opcode::*;
        assert_eq!(
            ops("var a, b; read(a, b)."),
            vec![
                Jmp(1),
                Int(5),
                Opr(super::Opr::Read),
                Sto(0, 3),
                Opr(super::Opr::Read),
                Sto(0, 4),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_unary_minus() {
        use Opcode::*;
        assert_eq!(
            ops("write(-2*3)."),
            vec![
                Jmp(1),
                Int(3),
                Lit(2),
                Lit(3),
                Opr(super::Opr::Mul),
                Opr(super::Opr::Neg),
                Opr(super::Opr::Write),
                Opr(super::Opr::WriteLn),
                Opr(super::Opr::Return),
            ]
        );
    }

    #[test]
    fn test_semantic_errors() {
        assert_eq!(codes("x := 1."), vec![11]);
        assert_eq!(codes("const c = 1; c := 2."), vec![12]);
        assert_eq!(codes("var v; call v."), vec![15]);
        assert_eq!(codes("procedure p; ; write(p)."), vec![21]);
        assert_eq!(codes("const c = 1; read(c)."), vec![29]);
        assert_eq!(codes("read(z)."), vec![35]);
        assert_eq!(codes("var v; v := 99999999999."), vec![31]);
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(codes("write(1)"), vec![19, 8, 9]);
        assert_eq!(codes("const c := 3; write(c)."), vec![1]);
        assert_eq!(codes("var a; if a = 1 begin end."), vec![16]);
        assert_eq!(codes("var a; while a < 1 begin a := 2 end."), vec![18]);
        assert_eq!(codes("var a; repeat a := 1 ."), vec![28]);
        assert_eq!(codes("var a; begin read(a) read(a) end."), vec![10]);
        assert_eq!(codes("var a; a := (1 + 2."), vec![22]);
        assert_eq!(codes("var a; if a then a := 1."), vec![20]);
        assert_eq!(codes("var a; begin write; a := 1 end."), vec![34]);
    }

    #[test]
    fn test_line_numbers() {
        let compilation = compile("var a;\nbegin\n  a := b\nend.");
        assert_eq!(compilation.errors().len(), 1);
        assert_eq!(compilation.errors()[0].code(), 11);
        assert_eq!(compilation.errors()[0].line_number(), Some(3));
    }

    #[test]
    fn test_nesting_too_deep() {
        let source = "procedure a;\
                      procedure b;\
                      procedure c;\
                      procedure d;\
                      ;;;;.";
        assert_eq!(codes(source), vec![32]);
        let source = "procedure a; procedure b; procedure c; ;;;.";
        assert!(compile(source).is_ok());
    }

    #[test]
    fn test_empty_statement_after_procedures() {
        assert!(compile("procedure a; procedure b; ; ; .").is_ok());
        assert!(compile("procedure a; procedure b; ;;.").is_ok());
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("write({}1).", "(".repeat(100_000));
        assert_eq!(codes(&deep).iter().filter(|&&c| c == 32).count(), 1);
        let procedures = "procedure p;".repeat(100_000);
        assert!(codes(&procedures).contains(&32));
        let shallow = format!("write({}1{}).", "(".repeat(50), ")".repeat(50));
        assert!(compile(&shallow).is_ok());
    }

    #[test]
    fn test_garbage_terminates() {
        let garbage = ")) := begin ; ; 17 := = procedure ( end end until ? :";
        let compilation = compile(garbage);
        assert!(!compilation.is_ok());
        assert!(compilation.program().len() < 32);
    }
}
