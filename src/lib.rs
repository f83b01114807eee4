//! # PL/0
//!
//! Niklaus Wirth's teaching language: a single pass compiler to P-code
//! and the stack machine that runs it.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! PL/0
//! READY.
//! █
//! ```
//!
//! Programs can also be compiled and run from Rust.
//! ```
//! let compilation = pl0::lang::compile("write(6*7).");
//! assert!(compilation.is_ok());
//! let mut runtime = pl0::mach::Runtime::load(&compilation).unwrap();
//! let mut output = vec![];
//! runtime.run(&b""[..], &mut output).unwrap();
//! assert_eq!(output, b" 42 \n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
