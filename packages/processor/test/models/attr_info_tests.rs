//! Extractor behavior, one annotated method at a time.

use style_annotations::{AnnotationRecord, AnnotationValue};
use style_processor::abstractions::{Element, MethodElement, Modifiers, TreeElement, TypeDescriptor};
use style_processor::diagnostics::{DiagnosticLevel, DiagnosticSink};
use style_processor::format::Format;
use style_processor::models::{AttrInfoExtractor, ExtractorOptions};
use style_processor::resources::{AndroidResourceId, ResourceKind, ResourceSymbolTable};

const ATTR: &str = "com.airbnb.paris.annotations.Attr";
const REQUIRES_API: &str = "androidx.annotation.RequiresApi";
const STYLEABLE_TITLE: i64 = 0x0000_0003;
const DIMEN_DEFAULT: i64 = 0x7f07_0001;

fn table() -> ResourceSymbolTable {
    [
        AndroidResourceId::new(
            ResourceKind::Styleable,
            STYLEABLE_TITLE,
            "R.styleable.MyRow_titleText",
        ),
        AndroidResourceId::new(
            ResourceKind::from_namespace("dimen"),
            DIMEN_DEFAULT,
            "R.dimen.row_padding",
        ),
    ]
    .into_iter()
    .collect()
}

fn attr_annotation(value: i64) -> AnnotationRecord {
    AnnotationRecord::new(ATTR).with_value("value", AnnotationValue::Int(value))
}

fn method(
    name: &str,
    modifiers: Modifiers,
    annotations: Vec<AnnotationRecord>,
    parameters: Vec<&str>,
) -> MethodElement {
    MethodElement::new(
        Element::Tree(TreeElement {
            name: name.into(),
            enclosing_type: "com.example.RowStyleApplier$Style".into(),
            modifiers,
            annotations,
        }),
        parameters.into_iter().map(TypeDescriptor::new),
        TypeDescriptor::new("void"),
    )
}

fn valid_method() -> MethodElement {
    method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)],
        vec!["java.lang.String"],
    )
}

#[test]
fn valid_method_extracts_one_fully_populated_attr_info() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);

    let info = extractor.extract(&valid_method()).unwrap().unwrap();
    assert_eq!(info.target_type, TypeDescriptor::new("java.lang.String"));
    assert_eq!(info.target_format, Format::String);
    assert_eq!(info.styleable_res_id.code, "R.styleable.MyRow_titleText");
    assert_eq!(info.default_value_res_id, None);
    assert_eq!(info.requires_api, 1);
    assert_eq!(
        info.element.to_string(),
        "com.example.RowStyleApplier$Style#titleText"
    );
    assert!(sink.is_empty());
}

#[test]
fn private_and_protected_methods_yield_one_diagnostic_each() {
    let table = table();
    for modifiers in [Modifiers::PRIVATE, Modifiers::PROTECTED] {
        let sink = DiagnosticSink::new();
        let extractor = AttrInfoExtractor::new(&table, &sink);
        let m = method(
            "titleText",
            modifiers,
            vec![attr_annotation(STYLEABLE_TITLE)],
            vec!["java.lang.String"],
        );

        assert!(extractor.extract(&m).unwrap().is_none());
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location.name, "titleText");
        assert_eq!(
            entries[0].message,
            "Methods annotated with @Attr can't be private or protected."
        );
    }
}

#[test]
fn wrong_parameter_arity_yields_one_diagnostic() {
    let table = table();
    for parameters in [vec![], vec!["int", "int"]] {
        let sink = DiagnosticSink::new();
        let extractor = AttrInfoExtractor::new(&table, &sink);
        let m = method(
            "titleText",
            Modifiers::PUBLIC,
            vec![attr_annotation(STYLEABLE_TITLE)],
            parameters,
        );

        assert!(extractor.extract(&m).unwrap().is_none());
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.entries()[0].message,
            "Methods annotated with @Attr must declare a single parameter."
        );
    }
}

#[test]
fn missing_attr_annotation_is_an_internal_error() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method("titleText", Modifiers::PUBLIC, vec![], vec!["int"]);

    let err = extractor.extract(&m).unwrap_err();
    assert!(err.to_string().contains("@Attr annotation not found"));
    // Internal errors never leave user-facing diagnostics behind.
    assert!(sink.is_empty());
}

#[test]
fn unresolvable_styleable_value_yields_a_diagnostic_with_cause() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(0xdead)],
        vec!["java.lang.String"],
    );

    assert!(extractor.extract(&m).unwrap().is_none());
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0]
        .message
        .starts_with("Incorrectly typed @Attr value parameter."));
    assert!(entries[0].message.contains("does not exist"));
}

#[test]
fn non_styleable_value_reports_the_kind_found() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(DIMEN_DEFAULT)],
        vec!["java.lang.String"],
    );

    assert!(extractor.extract(&m).unwrap().is_none());
    assert!(sink.entries()[0].message.contains("R.dimen.row_padding"));
}

#[test]
fn default_value_sentinel_means_absent() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)
            .with_value("defaultValue", AnnotationValue::Int(-1))],
        vec!["java.lang.String"],
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(info.default_value_res_id, None);
    assert!(sink.is_empty());
}

#[test]
fn explicit_default_value_resolves_to_any_resource_kind() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)
            .with_value("defaultValue", AnnotationValue::Int(DIMEN_DEFAULT))],
        vec!["java.lang.String"],
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    let default = info.default_value_res_id.unwrap();
    assert_eq!(default.code, "R.dimen.row_padding");
    assert_eq!(default.kind, ResourceKind::Other("dimen".into()));
}

#[test]
fn missing_default_value_constant_yields_the_r_value_diagnostic() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)
            .with_value("defaultValue", AnnotationValue::Int(0xbeef))],
        vec!["java.lang.String"],
    );

    assert!(extractor.extract(&m).unwrap().is_none());
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0]
        .message
        .starts_with("Incorrectly typed @Attr defaultValue parameter."));
    assert!(entries[0]
        .message
        .contains("This usually happens when an R value doesn't exist."));
}

#[test]
fn requires_api_precedence_follows_the_alias_rule() {
    let table = table();
    let cases = [
        // (api, value, expected): api wins only above the floor of 1.
        (Some(5), Some(3), 5),
        (Some(1), Some(7), 7),
        (None, Some(7), 7),
        (Some(9), None, 9),
        (None, None, 1),
    ];
    for (api, value, expected) in cases {
        let sink = DiagnosticSink::new();
        let extractor = AttrInfoExtractor::new(&table, &sink);
        let mut gate = AnnotationRecord::new(REQUIRES_API);
        if let Some(api) = api {
            gate = gate.with_value("api", AnnotationValue::Int(api));
        }
        if let Some(value) = value {
            gate = gate.with_value("value", AnnotationValue::Int(value));
        }
        let m = method(
            "titleText",
            Modifiers::PUBLIC,
            vec![attr_annotation(STYLEABLE_TITLE), gate],
            vec!["java.lang.String"],
        );

        let info = extractor.extract(&m).unwrap().unwrap();
        assert_eq!(
            info.requires_api, expected,
            "api={:?} value={:?}",
            api, value
        );
        assert!(sink.is_empty());
    }
}

#[test]
fn requires_api_absent_yields_the_configured_floor() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::with_options(
        &table,
        &sink,
        ExtractorOptions { api_floor: 14 },
    );

    let info = extractor.extract(&valid_method()).unwrap().unwrap();
    assert_eq!(info.requires_api, 14);
}

#[test]
fn unsupported_target_type_yields_a_classification_diagnostic() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "widget",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)],
        vec!["com.example.Widget"],
    );

    assert!(extractor.extract(&m).unwrap().is_none());
    assert_eq!(
        sink.entries()[0].message,
        "unsupported attribute target type `com.example.Widget`"
    );
}

#[test]
fn layout_dimension_marker_overrides_the_int_format() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "rowWidth",
        Modifiers::PUBLIC,
        vec![
            attr_annotation(STYLEABLE_TITLE),
            AnnotationRecord::new("com.airbnb.paris.annotations.LayoutDimension"),
        ],
        vec!["int"],
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(info.target_format, Format::LayoutDimension);
}

#[test]
fn string_array_parameters_classify_without_a_hint() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "entries",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)],
        vec!["java.lang.String[]"],
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(info.target_format, Format::StringArray);
    assert!(sink.is_empty());
}

#[test]
fn int_def_marker_classifies_the_int_as_an_enum() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "ellipsize",
        Modifiers::PUBLIC,
        vec![
            attr_annotation(STYLEABLE_TITLE),
            AnnotationRecord::new("androidx.annotation.IntDef"),
        ],
        vec!["int"],
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(info.target_format, Format::Enum);
    assert!(sink.is_empty());
}

#[test]
fn malformed_attr_annotation_yields_a_diagnostic_with_cause() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    // `value` carries the wrong value kind.
    let m = method(
        "titleText",
        Modifiers::PUBLIC,
        vec![AnnotationRecord::new(ATTR).with_value("value", AnnotationValue::Bool(true))],
        vec!["java.lang.String"],
    );

    assert!(extractor.extract(&m).unwrap().is_none());
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].message.starts_with("Malformed @Attr annotation."));
    assert!(entries[0].message.contains("wrong value kind"));
}

#[test]
fn doc_references_are_byte_identical_across_runs() {
    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    let m = method(
        "titleText$module",
        Modifiers::PUBLIC,
        vec![attr_annotation(STYLEABLE_TITLE)],
        vec!["java.lang.String"],
    );

    let first = extractor.extract(&m).unwrap().unwrap();
    let second = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(first.javadoc, second.javadoc);
    assert_eq!(first.kdoc, second.kdoc);
    // The Java form keeps the mangled name, the Kotlin form strips it.
    assert_eq!(
        first.javadoc.as_str(),
        "@see com.example.RowStyleApplier$Style#titleText$module(java.lang.String)\n"
    );
    assert_eq!(
        first.kdoc.as_str(),
        "@see com.example.RowStyleApplier$Style.titleText\n"
    );
}

#[test]
fn unresolvable_gate_warns_and_falls_back_to_the_floor() {
    use style_processor::abstractions::{SymbolAnnotation, SymbolElement};

    let table = table();
    let sink = DiagnosticSink::new();
    let extractor = AttrInfoExtractor::new(&table, &sink);
    // Symbol backend sees @RequiresApi by short name only.
    let m = MethodElement::new(
        Element::Symbol(SymbolElement {
            name: "titleText".into(),
            enclosing_type: "com.example.RowStyleApplier$Style".into(),
            modifiers: Modifiers::PUBLIC,
            annotations: vec![
                SymbolAnnotation::resolved(attr_annotation(STYLEABLE_TITLE)),
                SymbolAnnotation::unresolved("RequiresApi"),
            ],
        }),
        [TypeDescriptor::new("java.lang.String")],
        TypeDescriptor::new("void"),
    );

    let info = extractor.extract(&m).unwrap().unwrap();
    assert_eq!(info.requires_api, 1);
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, DiagnosticLevel::Warning);
    assert!(entries[0].message.contains("@RequiresApi could not be resolved"));
}
