mod cases;
use cases::*;

test_case!(
    name: no_selector,
    input: "[ ]",
    fault: StackUnderflow,
    span: (0..3),
);

test_case!(
    name: negative_selector,
    input: " -1 [ ]",
    fault: SelectorOutOfRange,
);

test_case!(
    name: selector_past_end,
    input: " 1 [ ]",
    fault: SelectorOutOfRange,
);

test_case!(
    name: negative_selector_two_alternatives,
    input: " -1 [ ; ]",
    fault: SelectorOutOfRange,
);

test_case!(
    name: selector_past_end_two_alternatives,
    input: " 2 [ ; ]",
    fault: SelectorOutOfRange,
    span: (3..8),
);

test_case!(
    name: float_selector,
    input: "1.0 [ a ; b ]",
    fault: SelectorNotInteger,
);

test_case!(
    name: text_selector,
    input: "'1 [ a ; b ]",
    fault: SelectorNotInteger,
);

test_case!(
    name: fault_in_alternative,
    input: " 0 [ 1 0 / ]",
    fault: DivisionByZero,
    span: (9..10),
);

test_case!(
    name: fault_in_nested_alternative,
    input: " 0 [ 0 [ 1 0 / ] ]",
    fault: DivisionByZero,
);

test_case!(
    name: empty_alternative,
    input: "0 [ ]",
    all: [],
);

test_case!(
    name: first_of_two_empty,
    input: "0 [ ; ]",
    all: [],
);

test_case!(
    name: second_of_two_empty,
    input: "1 [ ; ]",
    all: [],
);

test_case!(
    name: first_non_empty,
    input: "0 [ 7 ; ]",
    all: [int(7)],
);

test_case!(
    name: second_empty,
    input: "1 [ 7 ; ]",
    all: [],
);

test_case!(
    name: first_empty,
    input: "0 [ ; 7 ]",
    all: [],
);

test_case!(
    name: second_non_empty,
    input: "1 [ ; 7 ]",
    all: [int(7)],
);

test_case!(
    name: computed_first,
    input: "0 [ 1 2 + ; 4 5 * ]",
    all: [int(3)],
);

test_case!(
    name: computed_second,
    input: "1 [ 1 2 + ; 4 5 * ]",
    all: [int(20)],
);

test_case!(
    name: sequential_blocks,
    input: "0 [ 101 ; 102 ; 103 ] 1 [ 201 ; 202 ; 203 ] 2 [ 301 ; 302 ; 303 ]",
    all: [int(101), int(202), int(303)],
);

test_case!(
    name: nested_first,
    input: "0 [ 1 2 + [ 21 ; 22 ; 23 ; 24 ] ; 3 2 - [ 31 ; 32 ; 33 ; 34 ] ]",
    all: [int(24)],
);

test_case!(
    name: nested_second,
    input: "1 [ 1 2 + [ 21 ; 22 ; 23 ; 24 ] ; 3 2 - [ 31 ; 32 ; 33 ; 34 ] ]",
    all: [int(32)],
);

test_case!(
    name: alternative_sees_outer_stack,
    input: "10 20 1 [ + ; - ]",
    all: [int(-10)],
);

test_case!(
    name: comparison_as_selector,
    input: "n @ 0 < [ 'non-negative ; 'negative ]",
    params: { scalc::Parameters::new().with("n", -3) },
    result: (text("negative")),
);

test_case!(
    name: execution_continues_after_block,
    input: "0 [ 1 ; 2 ] 3 +",
    all: [int(4)],
);
