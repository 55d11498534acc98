//! Property tests for row validation and document building.

use gridform::layout::repeat_row;
use gridform::{build_document, compose_row, CellSpec, ContentMap, Error, RowSpec, SectionSpec};
use proptest::prelude::*;

const COLUMNS: usize = 9;

/// Spans that add up to exactly `total`.
fn exact_spans(total: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1usize..=total, 1..=total).prop_map(move |raw| {
        let mut spans = Vec::new();
        let mut left = total;
        for span in raw {
            if left == 0 {
                break;
            }
            let span = span.min(left);
            spans.push(span as i32);
            left -= span;
        }
        if left > 0 {
            spans.push(left as i32);
        }
        spans
    })
}

fn row(spans: &[i32]) -> RowSpec {
    RowSpec::new(spans.iter().map(|&s| CellSpec::blank().cols(s)).collect())
}

proptest! {
    #[test]
    fn exact_rows_always_compose(spans in exact_spans(COLUMNS)) {
        let composed = compose_row(&row(&spans), COLUMNS, &ContentMap::new()).unwrap();
        prop_assert_eq!(composed.covered_width(), COLUMNS);
        prop_assert_eq!(composed.cell_count(), spans.len());
    }

    #[test]
    fn mismatched_rows_report_signed_delta(spans in prop::collection::vec(1i32..=5, 1..8)) {
        let sum: i64 = spans.iter().map(|&s| s as i64).sum();
        let result = compose_row(&row(&spans), COLUMNS, &ContentMap::new());
        if sum == COLUMNS as i64 {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(Error::Layout(layout)) => {
                    prop_assert_eq!(layout.delta(), Some(sum - COLUMNS as i64));
                    prop_assert_eq!(layout.row(), 0);
                }
                other => prop_assert!(false, "expected layout error, got {:?}", other),
            }
        }
    }

    #[test]
    fn spacers_accept_any_underfill(width in 1i32..=COLUMNS as i32) {
        let composed = compose_row(&RowSpec::spacer_width(width), COLUMNS, &ContentMap::new());
        prop_assert!(composed.is_ok());
    }

    #[test]
    fn non_positive_spans_are_rejected(span in -100i32..=0) {
        let spec = RowSpec::new(vec![CellSpec::blank().cols(span), CellSpec::blank().cols(9)]);
        let result = compose_row(&spec, COLUMNS, &ContentMap::new());
        prop_assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn repeat_yields_exactly_k_rows(spans in exact_spans(COLUMNS), k in 0usize..20) {
        let template = row(&spans);
        let rows = repeat_row(&template, k);
        prop_assert_eq!(rows.len(), k);
        prop_assert!(rows.iter().all(|r| *r == template));

        let doc = build_document(&[SectionSpec::untitled().repeat(template, k)], COLUMNS).unwrap();
        prop_assert_eq!(doc.row_count(), k);
    }

    #[test]
    fn build_is_deterministic(rows in prop::collection::vec(exact_spans(COLUMNS), 0..6)) {
        let section = rows
            .iter()
            .fold(SectionSpec::titled("Sección"), |s, spans| s.row(row(spans)));
        let sections = vec![section];
        let first = build_document(&sections, COLUMNS).unwrap();
        let second = build_document(&sections, COLUMNS).unwrap();
        prop_assert_eq!(first, second);
    }
}
