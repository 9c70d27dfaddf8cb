//! Binding and substitution properties, checked through the public API.

use directives::{
    ArgumentSplitter, BindMode, BoundArguments, NamedBindings, ParameterDescriptor, Parameters,
    ParsedArgument, Splitter, Syntax, associate, bind_named, compile,
};

fn split(source: &str) -> Vec<ParsedArgument> {
    ArgumentSplitter::new().split(source).expect("valid argument list")
}

fn required(names: &[&str]) -> Parameters {
    Parameters::new(names.iter().map(|n| ParameterDescriptor::required(*n))).unwrap()
}

#[test]
fn positional_arguments_fill_in_order_then_null() {
    let syntax = Syntax::default();
    let declared = required(&["a", "b", "c", "d"]);

    for supplied in 0..=declared.len() {
        let values: Vec<String> = (0..supplied).map(|i| format!("$v{}", i)).collect();
        let parsed: Vec<_> = values.iter().map(ParsedArgument::positional).collect();
        let bound = bind_named(&declared, &parsed, &syntax);

        assert_eq!(bound.len(), declared.len());
        for (i, name) in declared.names().enumerate() {
            let expected = values.get(i).map(String::as_str).unwrap_or("null");
            assert_eq!(bound.get(name), Some(expected), "parameter {}", name);
        }
    }
}

#[test]
fn missing_defaulted_argument_coalesces_null_with_default() {
    let syntax = Syntax::default();
    let declared = Parameters::new([
        ParameterDescriptor::optional("flag", false),
        ParameterDescriptor::optional("limit", 10),
        ParameterDescriptor::optional("label", "none"),
    ])
    .unwrap();

    let bound = bind_named(&declared, &[], &syntax);
    assert_eq!(bound.get("flag"), Some("((null) ?? (false))"));
    assert_eq!(bound.get("limit"), Some("((null) ?? (10))"));
    assert_eq!(bound.get("label"), Some("((null) ?? ('none'))"));
}

#[test]
fn named_tail_binds_only_by_name() {
    let syntax = Syntax::default();
    let declared = required(&["a", "b", "c", "d"]);
    let parsed = split("1, 2, d => 4, zzz => 9");

    let bound = bind_named(&declared, &parsed, &syntax);
    let pairs: Vec<_> = bound.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "null"), ("d", "4")]);
}

#[test]
fn positional_mode_keeps_the_callers_list() {
    let syntax = Syntax::default();
    let declared = required(&["expression"]);
    let parsed = split("'a', [1, 2], fn($x) => $x");

    assert_eq!(
        associate(&declared, &parsed, BindMode::Positional, &syntax),
        BoundArguments::Positional(vec![
            "'a'".to_string(),
            "[1, 2]".to_string(),
            "fn($x) => $x".to_string(),
        ])
    );
}

#[test]
fn end_to_end_default_scenarios() {
    let syntax = Syntax::default();
    let declared = Parameters::new([
        ParameterDescriptor::required("name"),
        ParameterDescriptor::optional("default", "1234"),
    ])
    .unwrap();

    let bound = bind_named(&declared, &split("$varName"), &syntax);
    assert_eq!(bound.get("name"), Some("$varName"));
    assert_eq!(bound.get("default"), Some("((null) ?? ('1234'))"));

    let bound = bind_named(&declared, &split(r#"$varName, "test""#), &syntax);
    assert_eq!(bound.get("name"), Some("$varName"));
    assert_eq!(bound.get("default"), Some(r#"(("test") ?? ('1234'))"#));
}

#[test]
fn end_to_end_foreach_template() {
    let syntax = Syntax::default();
    let declared = required(&["value"]);
    let bound = bind_named(
        &declared,
        &split("array_merge(range('a','z'), [1,2,3])"),
        &syntax,
    );

    assert_eq!(
        compile("foreach ($value as $testVar) { echo $testVar; }", &bound, &syntax),
        "foreach (array_merge(range('a','z'), [1,2,3]) as $testVar) { echo $testVar; }"
    );
}

#[test]
fn escape_round_trip_with_cross_references() {
    let syntax = Syntax::default();
    let bound: NamedBindings = [("value", "$other . '\\$value'"), ("other", "$value")]
        .into_iter()
        .collect();

    let template = r"\$value = $value; \$other = $other;";
    assert_eq!(
        compile(template, &bound, &syntax),
        r"$value = $other . '\$value'; $other = $value;"
    );
}

#[test]
fn empty_bindings_leave_template_unchanged() {
    let syntax = Syntax::default();
    let template = "<?php echo \\$value . $value; ?>";

    assert_eq!(compile(template, &NamedBindings::new(), &syntax), template);
}
