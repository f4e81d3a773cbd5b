use pretty_assertions::assert_eq;
use weft_lexer::Delimiters;
use weft_parse::Trimmer;

use super::*;
use crate::builtins;
use crate::store::{MonitorStore, SimpleStore};

fn program(template: &str) -> Program {
    let delimiters = Delimiters::new("{{", "|", "}}", '\\').unwrap();
    Program::new(&weft_parse::parse(template, &delimiters, Trimmer::Nothing).unwrap())
}

fn render(template: &str, store: &SimpleStore) -> String {
    program(template).render(store)
}

#[test]
fn test_if_else() {
    let template = "{{ if x > 0 }}pos{{ | }}nonpos{{ end }}";
    assert_eq!(render(template, &SimpleStore::new().with("x", 5)), "pos");
    assert_eq!(render(template, &SimpleStore::new().with("x", -1)), "nonpos");
}

#[test]
fn test_for_over_dictionary() {
    let m = Value::dictionary([
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
    ]);
    let store = SimpleStore::new().with("m", m);
    assert_eq!(
        render("{{ for k, v in m }}{{ k }}={{ v }};{{ end }}", &store),
        "a=1;b=2;"
    );
}

#[test]
fn test_missing_key() {
    let store = SimpleStore::new().with("y", Value::empty_map());
    assert_eq!(render("{{ y.missing }}", &store), "");
    assert_eq!(render("[{{ nothing.at.all(1)[2] }}]", &SimpleStore::new()), "[]");
}

#[test]
fn test_function() {
    assert_eq!(
        render(
            "{{ define f(n) }}{{ return n * 2 }}{{ end }}{{ f(21) }}",
            &SimpleStore::new()
        ),
        "42"
    );
}

#[test]
fn test_recursive_function() {
    let template = "{{ define fact(n) }}{{ if n <= 1 }}{{ return 1 }}{{ end }}\
                    {{ return n * fact(n - 1) }}{{ end }}{{ fact(10) }}";
    assert_eq!(render(template, &SimpleStore::new()), "3628800");
}

#[test]
fn test_function_output_goes_to_caller() {
    let template = "{{ define greet(who) }}<{{ who }}>{{ end }}{{ greet('a') }}{{ greet('b') }}";
    assert_eq!(render(template, &SimpleStore::new()), "<a><b>");
}

#[test]
fn test_top_level_return() {
    let program = program("a{{ return 7 }}b");
    let mut output = String::new();
    let result = program.execute(&SimpleStore::new(), &mut output);
    assert_eq!(output, "a");
    assert_eq!(result, Value::from(7));
}

#[test]
fn test_assignments_do_not_reach_store() {
    let store = SimpleStore::new().with("x", 1);
    let program = program("{{ x }}{{ set x to x + 1 }}{{ x }}");
    assert_eq!(program.render(&store), "12");
    assert_eq!(program.render(&store), "12");
    assert_eq!(store.get("x"), Value::from(1));
}

#[test]
fn test_loop_locals_do_not_leak_between_iterations() {
    let template = "{{ for v in [1, 2, 3] }}\
                    {{ if v = 2 }}{{ set local seen to 'x' }}{{ end }}\
                    [{{ seen }}]{{ end }}";
    assert_eq!(render(template, &SimpleStore::new()), "[][][]");

    let template = "{{ for v in [1, 2, 3] }}[{{ mark }}]{{ set local mark to v }}{{ end }}";
    assert_eq!(render(template, &SimpleStore::new()), "[][][]");
}

#[test]
fn test_global_assignment_in_loop_persists() {
    let template = "{{ set total to 0 }}{{ for v in [1, 2, 3] }}{{ set total to total + v }}{{ end }}{{ total }}";
    assert_eq!(render(template, &SimpleStore::new()), "6");
}

#[test]
fn test_while_loop() {
    let template = "{{ set local i to 0 }}{{ while i < 3 }}{{ i }}{{ set i to i + 1 }}{{ end }}";
    assert_eq!(render(template, &SimpleStore::new()), "012");
}

#[test]
fn test_capture() {
    let template = "{{ capture c }}<{{ 1 + 1 }}>{{ end }}[{{ c }}{{ c }}]";
    assert_eq!(render(template, &SimpleStore::new()), "[<2><2>]");
}

#[test]
fn test_wrap_with_builtin() {
    let mut store = SimpleStore::new().with("s", "<b>");
    builtins::register(&mut store);
    let template = "{{ wrap html }}{{ s }}{{ unwrap }}{{ s }}{{ end }}{{ end }}";
    assert_eq!(render(template, &store), "&lt;b&gt;<b>");
}

#[test]
fn test_builtins_in_templates() {
    let mut store = SimpleStore::new();
    builtins::register(&mut store);
    let template = "{{ join(range(1, 4), ',') }}|{{ len('abc') }}|{{ type(void) }}|{{ upper(cat('a', 1)) }}";
    assert_eq!(render(template, &store), "1,2,3|3|void|A1");
}

#[test]
fn test_nan_and_division() {
    let store = SimpleStore::new();
    assert_eq!(render("{{ 0 / 0 }}", &store), "NaN");
    assert_eq!(render("{{ 1 / 0 }}|{{ -1 / 0 }}", &store), "Infinity|-Infinity");
    assert_eq!(render("{{ if 0 / 0 = 0 / 0 }}eq{{ | }}ne{{ end }}", &store), "ne");
}

#[test]
fn test_globals_are_listed() {
    let program = program("{{ b }}{{ set local l to 1 }}{{ a }}");
    assert_eq!(program.globals(), ["b", "a"]);
    assert_eq!(program.local_count(), 1);
}

#[test]
fn test_monitor_sees_each_global_once() {
    let store = MonitorStore::new(SimpleStore::new().with("a", 1));
    let program = program("{{ a }}{{ b }}{{ a }}");
    assert_eq!(program.render(&store), "1");
    assert_eq!(store.read_names(), ["a", "b"]);
    assert_eq!(store.accesses().len(), 2);
}

#[test]
fn test_lazy_globals_resolve_on_use() {
    let store = SimpleStore::new().with("l", Value::lazy(|| Value::from("late")));
    assert_eq!(render("{{ l }}", &store), "late");
}
