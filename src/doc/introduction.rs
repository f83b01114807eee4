/*!
# Introductory Tutorial for PL/0

Begin by opening a terminal and running the executable without arguments.
If you get the following, you are ready for this tutorial.
Type CTRL-D to exit.
<pre><code>&nbsp;  PL/0
&nbsp;  READY.
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C.

PL/0 is not typed in line by line. Write a program into a file with any
editor, then load it. Save the following as `hello.pl0`.

```text
write(1+2).
```

Every program is a block followed by a period. This block has no
declarations and a single statement.

<pre><code>&nbsp;> load hello.pl0
&nbsp;  0 ERRORS
&nbsp;> run
&nbsp;   3
</code></pre>

Each value written is padded with a space on both sides and every
`write` statement ends its line.

## Variables and loops

Variables hold integers and must be declared before the statement part
of a block. This program writes the factorial of 5.

```text
var n, r;
begin
  n := 5;
  r := 1;
  while n > 0 do
  begin
    r := r * n;
    n := n - 1
  end;
  write(r)
end.
```

Names declared with `const` are fixed when compiled. Assigning to one
is an error.

## Procedures

Procedures take no arguments and return no value. They share data through
variables of the blocks around them. A procedure may declare its own
constants, variables and procedures, nested up to three levels deep.

```text
var x, y, z;
procedure multiply;
  var a, b;
begin
  a := x; b := y; z := 0;
  while b > 0 do
  begin
    if odd b then z := z + a;
    a := 2 * a; b := b / 2
  end
end;
begin
  read(x, y);
  call multiply;
  write(z)
end.
```

When a program uses `read`, RUN prompts with `?` and accepts integers
separated by spaces or entered one per line.

<pre><code>&nbsp;> run
&nbsp;  ? 6 7
&nbsp;   42
</code></pre>

## Errors

A compile reports every error it can find rather than stopping at the
first. `LIST` underlines each line with an error and `ERRORS` shows the
messages again. A program with errors will not run.

<pre><code>&nbsp;> load broken.pl0
&nbsp;  UNDECLARED IDENTIFIER IN LINE 3; b
&nbsp;  1 ERRORS
</code></pre>

From the command line, `pl0 FILE` compiles and runs a program with input
from the terminal and `pl0 FILE INPUT` takes its input from a second file.

*/
