//! Integration tests for document building.

use gridform::layout::{expand_rows, repeat_row, RowComposer};
use gridform::{
    build_document, build_document_with_content, compose_row, CellSpec, ConfigurationError,
    ContentMap, DocumentBuilder, DocumentSpec, Error, LayoutError, RowKind, RowSpec, SectionSpec,
    SpanAxis, TextSource,
};

fn spans(spans: &[i32]) -> RowSpec {
    RowSpec::new(spans.iter().map(|&s| CellSpec::blank().cols(s)).collect())
}

fn evidence_row() -> RowSpec {
    spans(&[2, 2, 2, 2, 1])
}

#[test]
fn test_deficit_scenario() {
    let section = SectionSpec::titled("Datos").row(spans(&[1, 2, 1, 1, 1, 2]));
    let err = build_document(&[section], 9).unwrap_err();

    match err {
        Error::Layout(layout) => {
            assert_eq!(layout.row(), 0);
            assert_eq!(layout.deficit(), Some(1));
        }
        other => panic!("expected layout error, got {other:?}"),
    }
}

#[test]
fn test_exact_fill_scenario() {
    let section = SectionSpec::titled("Datos").row(spans(&[2, 2, 2, 3]));
    let doc = build_document(&[section], 9).unwrap();

    assert_eq!(doc.sections[0].rows.len(), 1);
    assert_eq!(doc.sections[0].rows[0].cells.len(), 4);
}

#[test]
fn test_zero_col_span_scenario() {
    let section = SectionSpec::untitled().row(RowSpec::new(vec![
        CellSpec::plain("x").cols(0),
        CellSpec::blank().cols(9),
    ]));
    let err = build_document(&[section], 9).unwrap_err();

    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::InvalidSpan {
            axis: SpanAxis::Column,
            value: 0,
            ..
        })
    ));
}

#[test]
fn test_spacer_scenario() {
    let section = SectionSpec::untitled().row(RowSpec::spacer(vec![
        CellSpec::blank().cols(2),
        CellSpec::blank().cols(2),
    ]));
    let doc = build_document(&[section], 9).unwrap();

    let row = &doc.sections[0].rows[0];
    assert_eq!(row.kind, RowKind::Spacer);
    assert_eq!(row.covered_width(), 4);
}

#[test]
fn test_spacer_cell_cannot_span_rows() {
    let section = SectionSpec::untitled()
        .row(RowSpec::spacer(vec![
            CellSpec::blank(),
            CellSpec::blank().cols(2).rows(3),
        ]))
        .row(spans(&[3]));
    let err = build_document(&[section], 3).unwrap_err();

    assert!(matches!(
        err,
        Error::Layout(LayoutError::SpacerRowSpan {
            section: 0,
            row: 0,
            column: 1,
        })
    ));
}

#[test]
fn test_json_layout_goes_through_validation() {
    let json = r#"{
        "column_count": 9,
        "sections": [
            { "rows": [
                { "row": { "cells": [
                    { "content": { "text": { "literal": "x" } }, "col_span": 0, "row_span": 0 }
                ] } }
            ] }
        ]
    }"#;
    let spec = DocumentSpec::from_json(json).unwrap();
    let err = spec.build(&ContentMap::new()).unwrap_err();

    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::InvalidSpan {
            axis: SpanAxis::Column,
            value: 0,
            position: Some(_),
        })
    ));
}

#[test]
fn test_surplus_reports_amount() {
    let section = SectionSpec::untitled().row(spans(&[3, 3, 4]));
    let err = build_document(&[section], 9).unwrap_err();

    match err {
        Error::Layout(layout) => {
            assert_eq!(layout.surplus(), Some(1));
            assert_eq!(layout.delta(), Some(1));
        }
        other => panic!("expected layout error, got {other:?}"),
    }
}

#[test]
fn test_repeat_rows() {
    let rows = repeat_row(&evidence_row(), 3);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r == &evidence_row()));

    let section = SectionSpec::titled("II. PROPÓSITOS").repeat(evidence_row(), 0);
    let doc = build_document(&[section], 9).unwrap();
    assert!(doc.sections[0].is_empty());
}

#[test]
fn test_expand_preserves_order() {
    let section = SectionSpec::untitled()
        .row(spans(&[9]))
        .repeat(evidence_row(), 2)
        .row(RowSpec::spacer_width(9));
    let rows = expand_rows(&section.rows);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], spans(&[9]));
    assert_eq!(rows[1], evidence_row());
    assert!(rows[3].is_spacer());
}

#[test]
fn test_merged_rows_like_session_moments() {
    let moment = |label: &str| {
        RowSpec::new(vec![
            CellSpec::header(label).rows(2),
            CellSpec::blank().cols(2),
            CellSpec::blank().cols(4),
            CellSpec::blank(),
            CellSpec::blank().centered(),
        ])
    };
    let continuation = spans(&[2, 4, 1, 1]);
    let section = SectionSpec::titled("III. MOMENTOS DE LA SESIÓN")
        .row(moment("INICIO"))
        .row(continuation.clone())
        .row(moment("DESARROLLO"))
        .row(continuation)
        .row(spans(&[1, 2, 4, 1, 1]));

    let doc = build_document(&[section], 9).unwrap();
    let rows = &doc.sections[0].rows;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1].carried, 1);
    assert_eq!(rows[3].carried, 1);
    assert_eq!(rows[4].carried, 0);
}

#[test]
fn test_spacer_below_row_span() {
    let section = SectionSpec::untitled()
        .row(RowSpec::new(vec![
            CellSpec::header("Duración").rows(2),
            CellSpec::plain("1 Hora Pedagógica").cols(2),
            CellSpec::header("Unidad de Proyecto").cols(2),
            CellSpec::plain("2"),
            CellSpec::header("Nro de Sesión"),
            CellSpec::plain("6").cols(2),
        ]))
        .row(RowSpec::spacer_width(8));

    let doc = build_document(&[section], 9).unwrap();
    assert_eq!(doc.sections[0].rows[1].carried, 1);
    assert_eq!(doc.sections[0].rows[1].covered_width(), 9);
}

#[test]
fn test_redeclaring_merged_position_fails() {
    let section = SectionSpec::untitled()
        .row(RowSpec::new(vec![
            CellSpec::header("INICIO").rows(2),
            CellSpec::blank().cols(8),
        ]))
        .row(spans(&[1, 8]));
    let err = build_document(&[section], 9).unwrap_err();

    // The extra cell pushes the row past the grid.
    assert!(matches!(
        err,
        Error::Layout(LayoutError::Surplus {
            row: 1,
            actual: 10,
            ..
        })
    ));
}

#[test]
fn test_row_span_cannot_cross_sections() {
    let first = SectionSpec::untitled().row(RowSpec::new(vec![
        CellSpec::header("CIERRE").rows(2),
        CellSpec::blank().cols(8),
    ]));
    let second = SectionSpec::titled("Siguiente").row(spans(&[8]));
    let err = build_document(&[first, second], 9).unwrap_err();

    assert!(matches!(
        err,
        Error::Layout(LayoutError::RowSpanOverflow {
            section: 0,
            row: 0,
            column: 0,
        })
    ));
}

#[test]
fn test_content_keys_resolve() {
    let content = ContentMap::new()
        .with("title", "I. TÍTULO DE LA SESIÓN")
        .with("placeholder", "[Espacio para ingresar el título de la sesión]");
    let section = SectionSpec::titled(TextSource::key("title")).row(RowSpec::new(vec![
        CellSpec::plain(TextSource::key("placeholder")).cols(9),
    ]));
    let doc = build_document_with_content(&[section], 9, &content).unwrap();

    assert_eq!(doc.sections[0].title.as_deref(), Some("I. TÍTULO DE LA SESIÓN"));
    assert!(doc.plain_text().contains("[Espacio para ingresar"));
}

#[test]
fn test_build_is_deterministic() {
    let builder = DocumentBuilder::new(9)
        .banner("SESIÓN DE APRENDIZAJE")
        .section(SectionSpec::titled("II").repeat(evidence_row(), 3));

    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

#[test]
fn test_compose_row_standalone() {
    let row = compose_row(&spans(&[4, 5]), 9, &ContentMap::new()).unwrap();
    assert_eq!(row.covered_width(), 9);

    let mut composer = RowComposer::new(9).unwrap();
    assert_eq!(composer.column_count(), 9);
    assert!(composer
        .compose(&spans(&[4, 4]), 0, 0, &ContentMap::new())
        .is_err());
}
