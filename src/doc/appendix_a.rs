/*!
# Error Messages

## Compile errors

```text
 1  USE = INSTEAD OF :=
 2  = MUST BE FOLLOWED BY A NUMBER
 3  IDENTIFIER MUST BE FOLLOWED BY =
 4  CONST, VAR, PROCEDURE MUST BE FOLLOWED BY AN IDENTIFIER
 5  SEMICOLON OR COMMA MISSING
 6  INCORRECT SYMBOL AFTER PROCEDURE DECLARATION
 7  STATEMENT EXPECTED
 8  INCORRECT SYMBOL AFTER STATEMENT PART IN BLOCK
 9  PERIOD EXPECTED
10  SEMICOLON BETWEEN STATEMENTS MISSING
11  UNDECLARED IDENTIFIER
12  ASSIGNMENT TO CONSTANT OR PROCEDURE NOT ALLOWED
13  ASSIGNMENT OPERATOR := EXPECTED
14  CALL MUST BE FOLLOWED BY AN IDENTIFIER
15  CALL OF A CONSTANT OR VARIABLE IS MEANINGLESS
16  THEN EXPECTED
17  SEMICOLON OR END EXPECTED
18  DO EXPECTED
19  INCORRECT SYMBOL FOLLOWING STATEMENT
20  RELATIONAL OPERATOR EXPECTED
21  EXPRESSION MUST NOT CONTAIN A PROCEDURE IDENTIFIER
22  RIGHT PARENTHESIS MISSING
23  THE PRECEDING FACTOR CANNOT BE FOLLOWED BY THIS SYMBOL
24  AN EXPRESSION CANNOT BEGIN WITH THIS SYMBOL
25  THIS NUMBER IS TOO LARGE
26  INVALID CHARACTER
27  COLON MUST BE FOLLOWED BY =
28  UNTIL EXPECTED
29  READ TARGET MUST BE A VARIABLE
30  READ LIST MUST CONTAIN IDENTIFIERS
31  NUMBER OUT OF RANGE
32  NESTING TOO DEEP
33  RIGHT PARENTHESIS EXPECTED
34  LEFT PARENTHESIS EXPECTED
35  UNDECLARED VARIABLE IN READ
```

Error 32 is also reported, once, when blocks, compound statements or
parentheses nest more than 100 deep. The rest of the source is then
skipped.

A number with more than 14 digits reports error 25 and then error 31.
Out of range numbers compile as 0.

## Run-time errors

Run-time errors stop the program and name the instruction address.

```text
50  OVERFLOW
51  DIVISION BY ZERO
52  STACK OVERFLOW
53  STACK UNDERFLOW
54  ILLEGAL STACK ADDRESS
55  ADDRESS OUT OF RANGE
56  MALFORMED INPUT
57  INPUT PAST END
58  PROGRAM HAS ERRORS
59  BREAK
60  FILE NOT FOUND
61  I/O ERROR
```

*/
