use super::{Address, Val};

/// ## Virtual machine instruction set
///
/// The P-code machine has three registers: the program counter, the
/// base of the current frame, and the top of the stack. Every
/// computation is performed on the stack.
///
/// For example: `x := x + 1` in the outermost block compiles to
/// `[Lod(0, 3), Lit(1), Opr(Add), Sto(0, 3)]`
///
/// Level arguments are level differences between the use and the
/// declaration. The machine follows that many static links to reach
/// the frame that owns the variable or procedure.

#[derive(Clone, PartialEq, Eq)]
pub enum Opcode {
    /// Push literal value on to the stack.
    Lit(Val),
    /// Arithmetic, relational, I/O, and return.
    Opr(Opr),
    /// Push the variable at (level difference, offset).
    Lod(usize, usize),
    /// Pop into the variable at (level difference, offset).
    Sto(usize, usize),
    /// Push a frame header and branch.
    Cal(usize, Address),
    /// Reserve stack slots for a frame.
    Int(usize),
    Jmp(Address),
    /// Pop stack and branch to Address if zero.
    Jpc(Address),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opr {
    Return = 0,
    Neg = 1,
    Add = 2,
    Sub = 3,
    Mul = 4,
    Div = 5,
    Odd = 6,
    Mod = 7,
    Eq = 8,
    NotEq = 9,
    Lt = 10,
    GtEq = 11,
    Gt = 12,
    LtEq = 13,
    Write = 14,
    WriteLn = 15,
    Read = 16,
}

impl Opcode {
    pub fn mnemonic(&self) -> &'static str {
        use Opcode::*;
        match self {
            Lit(_) => "LIT",
            Opr(_) => "OPR",
            Lod(..) => "LOD",
            Sto(..) => "STO",
            Cal(..) => "CAL",
            Int(_) => "INT",
            Jmp(_) => "JMP",
            Jpc(_) => "JPC",
        }
    }

    pub fn level(&self) -> usize {
        use Opcode::*;
        match self {
            Lod(level, _) | Sto(level, _) | Cal(level, _) => *level,
            Lit(_) | Opr(_) | Int(_) | Jmp(_) | Jpc(_) => 0,
        }
    }

    pub fn argument(&self) -> Val {
        use Opcode::*;
        match self {
            Lit(val) => *val,
            Opr(opr) => *opr as Val,
            Lod(_, offset) | Sto(_, offset) => *offset as Val,
            Cal(_, addr) | Jmp(addr) | Jpc(addr) => *addr as Val,
            Int(size) => *size as Val,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.mnemonic(), self.level(), self.argument())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_triple() {
        assert_eq!(Opcode::Lit(42).to_string(), "LIT 0 42");
        assert_eq!(Opcode::Opr(Opr::Read).to_string(), "OPR 0 16");
        assert_eq!(Opcode::Lod(2, 5).to_string(), "LOD 2 5");
        assert_eq!(Opcode::Cal(1, 7).to_string(), "CAL 1 7");
        assert_eq!(Opcode::Jpc(30).to_string(), "JPC 0 30");
    }

    #[test]
    fn test_opr_codes() {
        assert_eq!(Opr::Return as u8, 0);
        assert_eq!(Opr::Mod as u8, 7);
        assert_eq!(Opr::LtEq as u8, 13);
        assert_eq!(Opr::WriteLn as u8, 15);
    }
}
