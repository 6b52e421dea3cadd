mod cases;
use cases::*;

test_case!(
    name: int_equal,
    input: " 1 2 = 2 1 = 2 2 = ",
    all: [int(0), int(0), int(1)],
);

test_case!(
    name: int_not_equal,
    input: " 1 2 != 2 1 != 2 2 != ",
    all: [int(1), int(1), int(0)],
);

test_case!(
    name: int_not_equal_hash,
    input: " 1 2 # 2 2 # ",
    all: [int(1), int(0)],
);

test_case!(
    name: int_greater,
    input: " 1 2 > 2 1 > 2 2 > ",
    all: [int(0), int(1), int(0)],
);

test_case!(
    name: int_less,
    input: " 1 2 < 2 1 < 2 2 < ",
    all: [int(1), int(0), int(0)],
);

test_case!(
    name: int_greater_equal,
    input: " 1 2 >= 2 1 >= 2 2 >= ",
    all: [int(0), int(1), int(1)],
);

test_case!(
    name: int_less_equal,
    input: " 1 2 <= 2 1 <= 2 2 <= ",
    all: [int(1), int(0), int(1)],
);

test_case!(
    name: float_equal,
    input: " 1.2 2.1 = 2.3 1.4 = 2.5 2.5 = ",
    all: [int(0), int(0), int(1)],
);

test_case!(
    name: float_greater,
    input: " 1.2 2.1 > 2.3 1.4 > 2.5 2.5 > ",
    all: [int(0), int(1), int(0)],
);

test_case!(
    name: float_less_equal,
    input: " 1.2 2.1 <= 2.3 1.4 <= 2.5 2.5 <= ",
    all: [int(1), int(0), int(1)],
);

test_case!(
    name: nan_is_unequal,
    input: "-1.0 sqrt dup = -1.0 sqrt dup !=",
    all: [int(0), int(1)],
);

test_case!(
    name: text_equal,
    input: " aaa bbb = ddd ccc = eee eee = ",
    all: [int(0), int(0), int(1)],
);

test_case!(
    name: text_less,
    input: " aaa bbb < ddd ccc < eee eee < ",
    all: [int(1), int(0), int(0)],
);

test_case!(
    name: text_greater_equal,
    input: " aaa bbb >= ddd ccc >= eee eee >= ",
    all: [int(0), int(1), int(1)],
);

test_case!(
    name: mixed_kinds,
    input: "1 1.0 =",
    fault: TypeMismatch,
    span: (6..7),
);

test_case!(
    name: number_and_text,
    input: "1 '1 <",
    fault: TypeMismatch,
);
