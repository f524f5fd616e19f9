#[test]
fn glossa_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/glossa_error_pass.rs");
    t.pass("tests/ui/glossa_error_context.rs");
}
