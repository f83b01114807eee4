use super::{Address, Opcode, Opr, Program, Stack, Val, CYCLES};
use crate::error;
use crate::lang::{Compilation, Error};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

type Result<T> = std::result::Result<T, Error>;

/// ## Events for the user interface
///
/// `execute` returns one of these after every slice. `Print` text must
/// be shown before calling `execute` again. After `Input` the host
/// supplies values with `enter` or ends the stream with `close_input`.

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input,
    Fault(Error),
}

enum Step {
    Continue,
    Newline,
    Input,
    Halt,
}

/// ## Stack machine
///
/// Registers are the program counter, the base of the current frame and
/// the stack top. A return that restores a program counter of 0 halts.

pub struct Runtime {
    program: Program,
    stack: Stack,
    pc: Address,
    base: Address,
    running: bool,
    fault: Option<Error>,
    input: VecDeque<Val>,
    input_closed: bool,
    output: String,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            stack: Stack::default(),
            pc: 0,
            base: 0,
            running: true,
            fault: None,
            input: VecDeque::new(),
            input_closed: false,
            output: String::new(),
        }
    }

    /// Refuses a compilation that reported errors.
    pub fn load(compilation: &Compilation) -> Result<Runtime> {
        if !compilation.is_ok() {
            return Err(error!(ProgramHasErrors));
        }
        Ok(Runtime::new(compilation.program().clone()))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue whitespace separated integers for `read`.
    pub fn enter(&mut self, text: &str) {
        for word in text.split_whitespace() {
            match word.parse::<Val>() {
                Ok(val) => self.input.push_back(val),
                Err(_) => {
                    self.stop(Some(error!(MalformedInput, @self.pc; word)));
                    return;
                }
            }
        }
    }

    /// A `read` with nothing queued now faults instead of asking.
    pub fn close_input(&mut self) {
        self.input_closed = true;
    }

    pub fn interrupt(&mut self) {
        if self.running {
            self.stop(Some(error!(Break, @self.pc)));
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.running {
            return self.drain();
        }
        for _ in 0..cycles {
            let addr = self.pc;
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Newline) => return Event::Print(self.output.split_off(0)),
                Ok(Step::Input) => {
                    if self.output.is_empty() {
                        return Event::Input;
                    }
                    return Event::Print(self.output.split_off(0));
                }
                Ok(Step::Halt) => {
                    self.stop(None);
                    return self.drain();
                }
                Err(error) => {
                    let error = match error.address() {
                        Some(_) => error,
                        None => error.at_address(addr),
                    };
                    self.stop(Some(error));
                    return self.drain();
                }
            }
        }
        Event::Running
    }

    /// Run to completion reading integers from `input`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.run_until_break(input, output, &AtomicBool::new(false))
    }

    /// Like `run`, but checks `interrupted` between slices and faults
    /// with BREAK when it has been set.
    pub fn run_until_break<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        loop {
            if interrupted.swap(false, Ordering::SeqCst) {
                self.interrupt();
            }
            match self.execute(CYCLES) {
                Event::Running => {}
                Event::Print(s) => {
                    output
                        .write_all(s.as_bytes())
                        .and_then(|_| output.flush())
                        .map_err(|e| error!(IoError; &e.to_string()))?;
                }
                Event::Input => {
                    let mut line = String::new();
                    match input.read_line(&mut line) {
                        Ok(0) => self.close_input(),
                        Ok(_) => self.enter(&line),
                        Err(e) => return Err(error!(IoError; &e.to_string())),
                    }
                }
                Event::Fault(error) => return Err(error),
                Event::Stopped => return Ok(()),
            }
        }
    }

    fn stop(&mut self, fault: Option<Error>) {
        self.running = false;
        if self.fault.is_none() {
            self.fault = fault;
        }
    }

    fn drain(&mut self) -> Event {
        if !self.output.is_empty() {
            return Event::Print(self.output.split_off(0));
        }
        match self.fault.take() {
            Some(error) => Event::Fault(error),
            None => Event::Stopped,
        }
    }

    fn frame(&self, level: usize) -> Result<Address> {
        let mut base = self.base;
        for _ in 0..level {
            base = address(self.stack.load(base)?)?;
        }
        Ok(base)
    }

    fn step(&mut self) -> Result<Step> {
        let op = match self.program.get(self.pc) {
            Some(op) => op.clone(),
            None => return Err(error!(AddressOutOfRange)),
        };
        self.pc += 1;
        match op {
            Opcode::Lit(val) => self.stack.push(val)?,
            Opcode::Opr(opr) => return self.operate(opr),
            Opcode::Lod(level, offset) => {
                let base = self.frame(level)?;
                let val = self.stack.load(base + offset)?;
                self.stack.push(val)?;
            }
            Opcode::Sto(level, offset) => {
                let val = self.stack.pop()?;
                let base = self.frame(level)?;
                self.stack.store(base + offset, val)?;
            }
            Opcode::Cal(level, target) => {
                // Header goes above the top; the callee's INT claims it.
                let link = self.frame(level)?;
                let top = self.stack.len();
                self.stack.push(link as Val)?;
                self.stack.push(self.base as Val)?;
                self.stack.push(self.pc as Val)?;
                self.stack.truncate(top);
                self.base = top;
                self.pc = target;
            }
            Opcode::Int(size) => self.stack.alloc(size)?,
            Opcode::Jmp(target) => self.pc = target,
            Opcode::Jpc(target) => {
                if self.stack.pop()? == 0 {
                    self.pc = target;
                }
            }
        }
        Ok(Step::Continue)
    }

    fn operate(&mut self, opr: Opr) -> Result<Step> {
        match opr {
            Opr::Return => {
                let base = self.base;
                self.stack.truncate(base);
                self.pc = address(self.stack.load(base + 2)?)?;
                self.base = address(self.stack.load(base + 1)?)?;
                if self.pc == 0 {
                    return Ok(Step::Halt);
                }
            }
            Opr::Neg => {
                let val = self.stack.pop()?;
                self.stack.push(checked(val.checked_neg())?)?;
            }
            Opr::Add => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(checked(lhs.checked_add(rhs))?)?;
            }
            Opr::Sub => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(checked(lhs.checked_sub(rhs))?)?;
            }
            Opr::Mul => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(checked(lhs.checked_mul(rhs))?)?;
            }
            Opr::Div => {
                let (lhs, rhs) = self.stack.pop_2()?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                self.stack.push(checked(lhs.checked_div(rhs))?)?;
            }
            Opr::Mod => {
                let (lhs, rhs) = self.stack.pop_2()?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                self.stack.push(checked(lhs.checked_rem(rhs))?)?;
            }
            Opr::Odd => {
                let val = self.stack.pop()?;
                self.stack.push((val % 2 != 0) as Val)?;
            }
            Opr::Eq => self.compare(|lhs, rhs| lhs == rhs)?,
            Opr::NotEq => self.compare(|lhs, rhs| lhs != rhs)?,
            Opr::Lt => self.compare(|lhs, rhs| lhs < rhs)?,
            Opr::GtEq => self.compare(|lhs, rhs| lhs >= rhs)?,
            Opr::Gt => self.compare(|lhs, rhs| lhs > rhs)?,
            Opr::LtEq => self.compare(|lhs, rhs| lhs <= rhs)?,
            Opr::Write => {
                let val = self.stack.pop()?;
                self.output.push_str(&format!(" {} ", val));
            }
            Opr::WriteLn => {
                self.output.push('\n');
                return Ok(Step::Newline);
            }
            Opr::Read => match self.input.pop_front() {
                Some(val) => self.stack.push(val)?,
                None if self.input_closed => return Err(error!(InputPastEnd)),
                None => {
                    self.pc -= 1;
                    return Ok(Step::Input);
                }
            },
        }
        Ok(Step::Continue)
    }

    fn compare(&mut self, f: fn(Val, Val) -> bool) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(f(lhs, rhs) as Val)
    }
}

fn checked(val: Option<Val>) -> Result<Val> {
    match val {
        Some(val) => Ok(val),
        None => Err(error!(Overflow)),
    }
}

fn address(val: Val) -> Result<Address> {
    match Address::try_from(val) {
        Ok(addr) => Ok(addr),
        Err(_) => Err(error!(IllegalStackAddress; &val.to_string())),
    }
}
