use super::{Address, Val, STACK_SIZE};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited memory
///
/// Frames and expression temporaries share one zeroed vector. `top`
/// is the number of slots in use; slots above it keep stale values.

pub struct Stack {
    vec: Vec<Val>,
    top: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &self.vec[..self.top])
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new(STACK_SIZE)
    }
}

impl Stack {
    pub fn new(capacity: usize) -> Stack {
        Stack {
            vec: vec![0; capacity],
            top: 0,
        }
    }
    pub fn len(&self) -> usize {
        self.top
    }
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }
    pub fn push(&mut self, val: Val) -> Result<()> {
        if self.top >= self.vec.len() {
            return Err(error!(StackOverflow));
        }
        self.vec[self.top] = val;
        self.top += 1;
        Ok(())
    }
    pub fn pop(&mut self) -> Result<Val> {
        if self.top == 0 {
            return Err(error!(StackUnderflow));
        }
        self.top -= 1;
        Ok(self.vec[self.top])
    }
    pub fn pop_2(&mut self) -> Result<(Val, Val)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Grow the stack by `size` slots without clearing them.
    pub fn alloc(&mut self, size: usize) -> Result<()> {
        if size > self.vec.len() - self.top {
            return Err(error!(StackOverflow));
        }
        self.top += size;
        Ok(())
    }
    /// Shrink the stack so the next push lands at `top`.
    pub fn truncate(&mut self, top: usize) {
        if top < self.top {
            self.top = top;
        }
    }
    pub fn load(&self, addr: Address) -> Result<Val> {
        match self.vec.get(addr) {
            Some(val) => Ok(*val),
            None => Err(error!(IllegalStackAddress; &addr.to_string())),
        }
    }
    pub fn store(&mut self, addr: Address, val: Val) -> Result<()> {
        match self.vec.get_mut(addr) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(error!(IllegalStackAddress; &addr.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new(4);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.pop_2(), Ok((1, 2)));
        assert_eq!(stack.pop().unwrap_err().code(), 53);
    }

    #[test]
    fn test_overflow() {
        let mut stack = Stack::new(4);
        stack.alloc(3).unwrap();
        stack.push(9).unwrap();
        assert_eq!(stack.push(10).unwrap_err().code(), 52);
        assert_eq!(stack.alloc(1).unwrap_err().code(), 52);
    }

    #[test]
    fn test_load_store() {
        let mut stack = Stack::new(4);
        stack.alloc(3).unwrap();
        assert_eq!(stack.load(2), Ok(0));
        stack.store(2, -5).unwrap();
        assert_eq!(stack.load(2), Ok(-5));
        assert_eq!(stack.load(4).unwrap_err().code(), 54);
        assert_eq!(stack.store(99, 0).unwrap_err().code(), 54);
    }

    #[test]
    fn test_truncate() {
        let mut stack = Stack::new(8);
        stack.alloc(6).unwrap();
        stack.truncate(2);
        assert_eq!(stack.len(), 2);
        stack.truncate(5);
        assert_eq!(stack.len(), 2);
    }
}
