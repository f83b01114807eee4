/*!
# Language Reference

```text
program    = block "." .
block      = [ "const" ident "=" number { "," ident "=" number } ";" ]
             [ "var" ident { "," ident } ";" ]
             { "procedure" ident ";" block ";" }
             statement .
statement  = [ ident ":=" expression
             | "call" ident
             | "read" "(" ident { "," ident } ")"
             | "write" "(" expression { "," expression } ")"
             | "begin" statement { ";" statement } "end"
             | "if" condition "then" statement [ "else" statement ]
             | "while" condition "do" statement
             | "repeat" statement { ";" statement } "until" condition ] .
condition  = "odd" expression
           | expression ( "=" | "<>" | "<" | "<=" | ">" | ">=" ) expression .
expression = [ "+" | "-" ] term { ( "+" | "-" ) term } .
term       = factor { ( "*" | "/" ) factor } .
factor     = ident | number | "(" expression ")" .
```

Reserved words are lower case. `Begin` is an identifier, not `begin`.
Identifiers are letters followed by letters or digits.

Numbers are unsigned decimal literals up to 2147483647. Arithmetic runs on
64-bit integers; a result that does not fit stops the program with
`OVERFLOW`. Division truncates toward zero.

`repeat` runs its statements until the condition becomes true. `while`
checks its condition before each pass.

`read` stores one integer per listed variable. `write` prints each
expression followed by a newline after the whole list.

## P-code

`CODE` lists the compiled program one instruction per line as
address, mnemonic, level difference and argument.

```text
LIT 0 a   push a
OPR 0 a   operation a, see below
LOD l a   push the variable at offset a, l frames out
STO l a   pop into the variable at offset a, l frames out
CAL l a   call the procedure at address a
INT 0 a   reserve a stack slots
JMP 0 a   jump to a
JPC 0 a   pop, jump to a if zero
```

```text
0 return       5 divide      10 <        15 write newline
1 negate       6 odd         11 >=       16 read
2 add          7 modulo      12 >
3 subtract     8 =           13 <=
4 multiply     9 <>          14 write
```

Every frame starts with three slots: the base of the frame the procedure
was declared in, the base of the caller's frame, and the return address.
Variables are numbered from offset 3.

*/
