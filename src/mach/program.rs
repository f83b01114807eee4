use super::{Address, Opcode};

/// ## Instruction store
///
/// Instructions are addressed by their dense index. Forward jumps are
/// emitted with a placeholder target and patched once the target is known.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    ops: Vec<Opcode>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn emit(&mut self, op: Opcode) -> Address {
        self.ops.push(op);
        self.ops.len() - 1
    }

    /// Retarget the `JMP`, `JPC` or `CAL` at `addr`. Other instructions
    /// are left untouched.
    pub fn patch(&mut self, addr: Address, target: Address) {
        if let Some(op) = self.ops.get_mut(addr) {
            *op = match op {
                Opcode::Jmp(_) => Opcode::Jmp(target),
                Opcode::Jpc(_) => Opcode::Jpc(target),
                Opcode::Cal(level, _) => Opcode::Cal(*level, target),
                _ => return,
            };
        }
    }

    /// Address the next emitted instruction will occupy.
    pub fn next_address(&self) -> Address {
        self.ops.len()
    }

    pub fn get(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opcode> {
        self.ops.iter()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, op) in self.ops.iter().enumerate() {
            writeln!(f, "{:>5} {}", addr, op)?;
        }
        Ok(())
    }
}
