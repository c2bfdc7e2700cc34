use minirun::{engine::source::strip_comments, execute};

fn assert_output(source: &str, input: &str, expected: &[&str]) {
    match execute(source, input) {
        Ok(output) => assert_eq!(output, expected.join("\n")),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn assert_failure(source: &str, input: &str, message: &str) {
    match execute(source, input) {
        Ok(output) => panic!("Program succeeded but was expected to fail:\n{output}"),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

const FACTORIAL: &str = "\
int factorial(int n) {
    if (n <= 1) { return 1; }
    return n * factorial(n - 1);
}

int main() {
    int n;
    read(n);
    write(n);
    write(factorial(n));
    return 0;
}";

const FIBONACCI: &str = "\
int fib(int n) {
    if (n <= 0) { return 0; }
    if (n == 1) { return 1; }
    return fib(n - 1) + fib(n - 2);
}

int main() {
    int n;
    int i;
    read(n);
    i = 1;
    while (i <= n) {
        write(fib(i));
        i = i + 1;
    }
    return 0;
}";

const BUBBLE_SORT: &str = "\
int main() {
    int values[100];
    int count;
    int i;
    count = 0;
    read(values[count]);
    while (values[count] != 0) {
        count = count + 1;
        read(values[count]);
    }
    bubble_sort(values, count);
    i = 0;
    while (i < count) {
        write(values[i]);
        i = i + 1;
    }
    return 0;
}";

const PALINDROME: &str = "\
int main() {
    int n;
    int original;
    int reversed;
    int digit;
    read(n);
    original = n;
    reversed = 0;
    while (n > 0) {
        digit = n % 10;
        reversed = reversed * 10 + digit;
        n = n / 10;
    }
    if (original == reversed) { write(1); } else { write(0); }
    return 0;
}";

const ARITHMETIC: &str = "\
int main() {
    float num1;
    float num2;
    float sum;
    read(num1);
    read(num2);
    sum = num1 + num2;
    write(sum);
    write(num1 - num2);
    write(num1 * num2);
    write(num1 / num2);
    return 0;
}";

#[test]
fn factorial_of_five() {
    assert_output(FACTORIAL, "5", &["5", "120"]);
}

#[test]
fn factorial_of_zero() {
    assert_output(FACTORIAL, "0", &["0", "1"]);
}

#[test]
fn factorial_of_negative_is_one() {
    assert_output(FACTORIAL, "-3", &["-3", "1"]);
}

#[test]
fn factorial_rejects_non_integer() {
    assert_failure(FACTORIAL,
                   "abc",
                   "Invalid input for factorial program. Need an integer value.");
}

#[test]
fn factorial_reports_overflow() {
    assert_output(FACTORIAL, "20", &["20", "2432902008176640000"]);
    assert_failure(FACTORIAL, "21", "Integer overflow while running the factorial program.");
}

#[test]
fn fibonacci_first_six() {
    assert_output(FIBONACCI, "6", &["1", "1", "2", "3", "5", "8"]);
}

#[test]
fn fibonacci_of_zero_emits_nothing() {
    assert_output(FIBONACCI, "0", &[]);
}

#[test]
fn fibonacci_rejects_non_integer() {
    assert_failure(FIBONACCI,
                   "x",
                   "Invalid input for fibonacci program. Need an integer value.");
}

#[test]
fn bubble_sort_sorts_zero_terminated_prefix() {
    assert_output(BUBBLE_SORT, "5\n3\n8\n0", &["3", "5", "8"]);
}

#[test]
fn bubble_sort_without_terminator_sorts_everything() {
    assert_output(BUBBLE_SORT, "4\n2", &["2", "4"]);
}

#[test]
fn bubble_sort_output_resorts_to_itself() {
    assert_output(BUBBLE_SORT, "3\n5\n8", &["3", "5", "8"]);
}

#[test]
fn bubble_sort_rejects_non_integer() {
    assert_failure(BUBBLE_SORT,
                   "5\nx\n0",
                   "Invalid input for bubble sort. Need integers ending with 0.");
}

#[test]
fn palindrome_accepts_121() {
    assert_output(PALINDROME, "121", &["1"]);
}

#[test]
fn palindrome_rejects_123() {
    assert_output(PALINDROME, "123", &["0"]);
}

#[test]
fn palindrome_negative_is_never_palindromic() {
    assert_output(PALINDROME, "-121", &["0"]);
}

#[test]
fn palindrome_trailing_zero_compares_reversed_digits() {
    assert_output(PALINDROME, "10", &["0"]);
}

#[test]
fn arithmetic_six_and_three() {
    assert_output(ARITHMETIC, "6\n3", &["9", "3", "18", "2"]);
}

#[test]
fn arithmetic_division_by_zero_line() {
    assert_output(ARITHMETIC, "6\n0", &["6", "6", "0", "Division by zero error"]);
}

#[test]
fn arithmetic_fractional_results() {
    assert_output(ARITHMETIC, "2.5\n0.5", &["3", "2", "1.25", "5"]);
}

#[test]
fn arithmetic_rejects_non_numeric() {
    assert_failure(ARITHMETIC, "a\n3", "Invalid input for arithmetic. Need numeric values.");
}

#[test]
fn arithmetic_with_one_token_falls_through_to_generic() {
    // The marker needs two input values; with one, the generic path runs
    // and reports the missing read.
    assert_failure(ARITHMETIC, "6", "Not enough input values. Expected 2, got 1.");
}

#[test]
fn generic_echoes_read_value() {
    assert_output("int main() { int x; read(x); write(x); return 0; }", "7", &["7"]);
}

#[test]
fn generic_evaluates_simple_expression() {
    assert_output("int main() { int x; read(x); write(x + 1); return 0; }", "4", &["5"]);
}

#[test]
fn generic_binds_floats_and_normalizes_whole_results() {
    assert_output("int main() { float p; read(p); write(p * 2); return 0; }", "1.5", &["3"]);
}

#[test]
fn generic_applies_operator_precedence() {
    assert_output("int main() { write(2 + 3 * 4); return 0; }", "", &["14"]);
}

#[test]
fn generic_division_is_real() {
    assert_output("int main() { int a; int b; read(a); read(b); write(a / b); return 0; }",
                  "7\n2",
                  &["3.5"]);
}

#[test]
fn generic_emits_integer_literal_verbatim() {
    assert_output("int main() { write(42); write(-7); return 0; }", "", &["42", "-7"]);
}

#[test]
fn generic_unknown_value_line() {
    assert_output("int main() { int total; write(total); return 0; }",
                  "",
                  &["Unknown value: total"]);
}

#[test]
fn generic_expression_failure_degrades_to_inline_error() {
    assert_output("int main() { int a; read(a); write(a / 0); write(a); return 0; }",
                  "5",
                  &["Error: division by zero", "5"]);
}

#[test]
fn generic_unbound_name_in_expression_is_inline_error() {
    assert_output("int main() { write(y + 1); return 0; }",
                  "",
                  &["Error: name 'y' is not defined"]);
}

#[test]
fn generic_insufficient_input() {
    assert_failure("int main() { int x; int y; read(x); read(y); write(x); return 0; }",
                   "1",
                   "Not enough input values. Expected 2, got 1.");
}

#[test]
fn generic_without_writes_fails() {
    assert_failure("int main() { int x; read(x); return 0; }",
                   "1",
                   "No output generated. Check your program logic.");
}

#[test]
fn marker_inside_comment_does_not_classify() {
    // Stripping runs before classification, so the factorial reference in
    // the comment never reaches the marker tests.
    assert_output("// a factorial would recurse here\nint main() { read(x); write(x); }",
                  "9",
                  &["9"]);
}

#[test]
fn marker_inside_string_literal_still_classifies() {
    // Classification is purely lexical; the engine computes 3! instead of
    // printing the string.
    assert_output("int main() { write(\"factorial\"); return 0; }", "3", &["3", "6"]);
}

#[test]
fn bubble_marker_without_brackets_stays_generic() {
    assert_output("int main() { int bubble; read(bubble); write(bubble); }", "2", &["2"]);
}

#[test]
fn input_lines_are_trimmed_and_blank_lines_dropped() {
    assert_output("int main() { int x; int y; read(x); read(y); write(x); write(y); }",
                  "  7  \n\n   3\n",
                  &["7", "3"]);
}

#[test]
fn stripping_is_idempotent() {
    let source = "int main() { // trailing\n    /* block\n       comment */ read(x);\n}";
    let once = strip_comments(source);
    assert_eq!(strip_comments(&once), once);
}

#[test]
fn unterminated_block_comment_consumes_to_end() {
    let source = "read(x); /* never closed\nwrite(x);";
    assert_eq!(strip_comments(source), "read(x); ");
}
