mod common;
use common::*;

#[test]
fn test_static_link() {
    let source = "
        var x;
        procedure outer;
          var y;
          procedure inner;
            begin write(x + y) end;
          begin y := 10; call inner end;
        begin
          x := 1; call outer;
          x := 5; call outer
        end.";
    assert_eq!(errors(source), Vec::<u16>::new());
    assert_eq!(exec(source, ""), " 11 \n 15 \n");
}

#[test]
fn test_static_link_differs_from_caller() {
    let source = "
        var x;
        procedure show;
          begin write(x) end;
        procedure other;
          var x;
          begin x := 99; call show end;
        begin x := 7; call other end.";
    assert_eq!(exec(source, ""), " 7 \n");
}

#[test]
fn test_recursion() {
    let source = "
        var n, f;
        procedure fact;
          begin
            if n > 1 then
            begin
              f := f * n;
              n := n - 1;
              call fact
            end
          end;
        begin n := 6; f := 1; call fact; write(f) end.";
    assert_eq!(exec(source, ""), " 720 \n");
}

#[test]
fn test_locals_per_activation() {
    let source = "
        var depth;
        procedure p;
          var mine;
          begin
            mine := depth;
            depth := depth + 1;
            if depth < 3 then call p;
            write(mine)
          end;
        begin depth := 0; call p end.";
    assert_eq!(exec(source, ""), " 2 \n 1 \n 0 \n");
}

#[test]
fn test_nested_procedure_calls_outer() {
    let source = "
        var n;
        procedure a;
          procedure b;
            begin n := n - 1; call a end;
          begin
            write(n);
            if n > 0 then call b
          end;
        begin n := 2; call a end.";
    assert_eq!(exec(source, ""), " 2 \n 1 \n 0 \n");
}

#[test]
fn test_nesting_too_deep() {
    let source = "
        procedure a;
          procedure b;
            procedure c;
              procedure d;
                procedure e;
                ;
              ;
            ;
          ;
        ;
        .";
    assert_eq!(errors(source), vec![32, 32]);
    let source = "
        procedure a;
          procedure b;
            procedure c;
              var deep;
              deep := 1;
            ;
          ;
        call a.";
    assert_eq!(errors(source), Vec::<u16>::new());
}

#[test]
fn test_empty_main_after_procedures() {
    assert_eq!(errors("procedure a; procedure b; ; ; ."), Vec::<u16>::new());
    let source = "
        var x;
        procedure a;
          procedure b;
            x := 7;
          ;
        ;
        .";
    assert_eq!(errors(source), Vec::<u16>::new());
    assert_eq!(exec(source, ""), "");
}

#[test]
fn test_runaway_recursion() {
    let source = "procedure p; call p; call p.";
    assert!(exec(source, "").starts_with("STACK OVERFLOW IN ADDRESS "));
}
