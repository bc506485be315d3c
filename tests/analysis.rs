//! End-to-end tests for the public API.
//!
//! Tests cover table validation, the formula builders and the predicates on
//! the sample function and a few well-known functions.

use boolfn::analysis::{
    build_dnf, build_knf, classify, find_dual_function, generate_zhegalkin_polynomial, is_constant_one,
    is_constant_zero, is_linear, is_monotonic,
};
use boolfn::assignment::decimal_to_binary;
use boolfn::error::Error;
use boolfn::report::{Language, Report};
use boolfn::table::{extract_output_column, OutputVector, TruthTable, SAMPLE_ROWS};

fn vector(bits: &[u8]) -> OutputVector {
    OutputVector::from_bits(bits).unwrap()
}

// ─── Truth Tables ──────────────────────────────────────────────────────────────

#[test]
fn output_column_is_last_column() {
    let table = TruthTable::sample().unwrap();
    let f = extract_output_column(&table);
    assert_eq!(f.len(), 8);
    for (i, row) in SAMPLE_ROWS.iter().enumerate() {
        assert_eq!(f.get(i).map(u8::from), Some(row[3]));
    }
}

#[test]
fn malformed_tables_are_rejected() {
    let too_few: Vec<[u8; 4]> = SAMPLE_ROWS[1..].to_vec();
    assert!(matches!(
        TruthTable::from_rows(3, &too_few),
        Err(Error::InvalidShape { expected: 8, actual: 7 })
    ));

    let mut swapped = SAMPLE_ROWS;
    swapped.swap(2, 3);
    assert!(matches!(TruthTable::from_rows(3, &swapped), Err(Error::RowOrder { row: 2 })));

    let narrow: Vec<Vec<u8>> = SAMPLE_ROWS.iter().map(|r| r[1..].to_vec()).collect();
    assert!(matches!(
        TruthTable::from_rows(3, &narrow),
        Err(Error::InvalidRowWidth { row: 0, .. })
    ));

    assert!(matches!(
        TruthTable::from_rows(17, &SAMPLE_ROWS),
        Err(Error::TooManyVariables { num_vars: 17, .. })
    ));
}

#[test]
fn binary_representation() {
    assert_eq!(decimal_to_binary(5, 3).unwrap(), "101");
    assert_eq!(decimal_to_binary(0, 3).unwrap(), "000");
    assert_eq!(decimal_to_binary(7, 3).unwrap(), "111");
    assert!(decimal_to_binary(8, 3).is_err());
}

// ─── Formulas ──────────────────────────────────────────────────────────────────

#[test]
fn sample_formulas() {
    let table = TruthTable::sample().unwrap();
    let f = extract_output_column(&table);

    let dnf = build_dnf(&f, 3).unwrap();
    assert_eq!(dnf.len(), 2);
    assert_eq!(dnf.to_string(), "(!x1 v x2 v !x3) ^ (x1 v !x2 v x3)");

    let knf = build_knf(&f, 3).unwrap();
    assert_eq!(knf.len(), 6);
    assert!(knf.to_string().starts_with("(!x1 ^ !x2 ^ !x3) v "));

    let dual = find_dual_function(&table, &f).unwrap();
    assert_eq!(dual.len(), 6);
    assert!(dual.to_string().starts_with("(x1 + x2 + x3) * "));

    let poly = generate_zhegalkin_polynomial(&f);
    assert_eq!(poly.to_string(), "(x1 * !x2 * x3) + (!x1 * x2 * !x3)");
}

#[test]
fn constant_functions_give_empty_formulas() {
    let zero = vector(&[0; 8]);
    let one = vector(&[1; 8]);

    assert!(build_dnf(&zero, 3).unwrap().is_empty());
    assert!(generate_zhegalkin_polynomial(&zero).is_empty());
    assert!(build_knf(&one, 3).unwrap().is_empty());

    let table = TruthTable::from_outputs(&one);
    assert_eq!(find_dual_function(&table, &one).unwrap().to_string(), "");
}

// ─── Predicates ────────────────────────────────────────────────────────────────

#[test]
fn constants() {
    let sample = vector(&[0, 0, 1, 0, 0, 1, 0, 0]);
    assert!(!is_constant_zero(&sample));
    assert!(!is_constant_one(&sample));

    let zero = vector(&[0; 8]);
    assert!(is_constant_zero(&zero));
    assert!(!is_constant_one(&zero));
    assert!(is_constant_one(&zero.complement()));
}

#[test]
fn monotonicity() {
    assert!(is_monotonic(&vector(&[0; 8]), 3).unwrap());
    assert!(!is_monotonic(&vector(&[1, 0, 1, 1, 1, 1, 1, 1]), 3).unwrap());

    let majority = OutputVector::from_fn(3, |a| a.bits().filter(|&b| b).count() >= 2).unwrap();
    assert!(is_monotonic(&majority, 3).unwrap());
    assert!(!is_monotonic(&majority.complement(), 3).unwrap());
}

#[test]
fn pairwise_linearity() {
    // Only functions whose value changes across adjacent inputs pass.
    assert!(is_linear(&vector(&[0; 8]), 3).unwrap());
    assert!(is_linear(&vector(&[0, 1, 1, 0]), 2).unwrap());
    // Three-bit parity has F(000) != F(111) at distance 3.
    assert!(!is_linear(&vector(&[0, 1, 1, 0, 1, 0, 0, 1]), 3).unwrap());
}

#[test]
fn arity_is_checked() {
    let f = vector(&[0, 1, 1, 0]);
    assert!(matches!(
        is_linear(&f, 3),
        Err(Error::ArityMismatch { expected: 3, actual: 2 })
    ));
    assert!(is_monotonic(&f, 3).is_err());
    assert!(build_dnf(&f, 1).is_err());
}

#[test]
fn analysis_is_pure() {
    let f = vector(&[0, 0, 1, 0, 0, 1, 0, 0]);
    let first = (build_dnf(&f, 3).unwrap(), build_knf(&f, 3).unwrap(), classify(&f));
    let second = (build_dnf(&f, 3).unwrap(), build_knf(&f, 3).unwrap(), classify(&f));
    assert_eq!(first, second);
}

// ─── Report ────────────────────────────────────────────────────────────────────

#[test]
fn sample_report() {
    let report = Report::analyze(&TruthTable::sample().unwrap()).unwrap();
    let text = report.render(Language::Ukrainian).unwrap();

    let expected_tail = "\
Is Zero Constant: Ні
Is One Constant: Ні
Is Monotonic: Ні
Is Linear: Ні
";
    assert!(text.starts_with("Таблиця істинності:\nx  y  z  F\n0  0  0  0\n"));
    assert!(text.contains("\nДНФ: (!x1 v x2 v !x3) ^ (x1 v !x2 v x3)\n"));
    assert!(text.contains("\nПоліном Жегалкіна: (x1 * !x2 * x3) + (!x1 * x2 * !x3)\n"));
    assert!(text.ends_with(expected_tail));
}
