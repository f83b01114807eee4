mod common;
use common::*;
use pl0::lang::compile;

#[test]
fn test_reports_every_error() {
    let source = "
        var a;
        begin
          a := b;
          c := 1;
          call a
        end.";
    assert_eq!(errors(source), vec![11, 11, 15]);
}

#[test]
fn test_error_lines() {
    let compilation = compile("var a;\nbegin\n  a := ?1;\n  a := 2 +\nend.");
    let lines: Vec<Option<usize>> = compilation
        .errors()
        .iter()
        .map(|e| e.line_number())
        .collect();
    assert_eq!(compilation.errors()[0].code(), 26);
    assert_eq!(lines[0], Some(3));
    assert_eq!(*lines.last().unwrap(), Some(5));
}

#[test]
fn test_lexical_errors() {
    assert_eq!(errors("var a; a : 1."), vec![27, 13]);
    assert_eq!(errors("var a; a := 123456789012345."), vec![25, 31]);
}

#[test]
fn test_declaration_errors() {
    assert_eq!(errors("const a; ."), vec![3]);
    assert_eq!(errors("const a = ; ."), vec![2]);
    assert_eq!(errors("var ; ."), vec![4]);
    assert_eq!(errors("var a 1; ."), vec![5, 7]);
}

#[test]
fn test_recovery_terminates() {
    let inputs = [
        "",
        "begin",
        "begin begin begin",
        "(((((((((",
        "end end end .",
        "procedure ; procedure ; procedure",
        "var a; a := a a a a a a.",
        "if then else while do repeat until read write call",
        ":= := := ; ; ; ) ) ) , , ,",
        "const = 1, = 2; var , ; procedure ( ; .",
        "? ! @ # $ % ^ & ~",
    ];
    for input in inputs.iter() {
        let tokens = input.split_whitespace().count() + 1;
        let compilation = compile(input);
        assert!(!compilation.is_ok(), "{}", input);
        assert!(compilation.program().len() <= 8 * tokens + 8, "{}", input);
    }
}

#[test]
fn test_deep_nesting_is_cut_off() {
    let inputs = [
        format!("write({}1).", "(".repeat(100_000)),
        "begin ".repeat(100_000),
        "while 1 = 1 do ".repeat(100_000),
        "procedure p;".repeat(100_000),
    ];
    for input in inputs.iter() {
        let compilation = compile(input);
        assert!(!compilation.is_ok());
        assert!(compilation.errors().iter().any(|e| e.code() == 32));
    }
}

#[test]
fn test_listing_after_errors() {
    let compilation = compile("var a; procedure p; a := x; call p.");
    assert!(!compilation.is_ok());
    let names: Vec<&str> = compilation.table().entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["a", "p"]);
    assert!(compilation.program().len() > 0);
}
