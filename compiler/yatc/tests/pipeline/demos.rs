use pretty_assertions::assert_eq;
use yat_eval::{buffer_handler, EvalError, Value};
use yat_fmt::StringEmitter;
use yatc::commands::{fold_demo, format_demo, list_demos, run_demo, CliError, RunOptions};
use yatc::demos;

fn run_output(name: &str, options: RunOptions) -> (Result<Value, CliError>, String) {
    let print = buffer_handler();
    let result = run_demo(name, options, print.clone());
    (result, print.get_output())
}

#[test]
fn every_demo_runs() {
    let expected = [
        ("example", "2\n"),
        ("cond", "12\n10\n10\n8\n"),
        ("binary", "37\n0\n1\n1\n0\n"),
        ("unary", "0\n1\n-3\n0\n"),
        ("hard", "8\n9\n-3\n7\n"),
        ("folding", "42\n"),
    ];
    assert_eq!(demos::all().len(), expected.len());
    for (name, output) in expected {
        let (result, printed) = run_output(name, RunOptions::default());
        assert!(result.is_ok(), "{name}: {result:?}");
        assert_eq!(printed, output, "{name}");
    }
}

#[test]
fn folded_demos_print_the_same() {
    for demo in demos::all() {
        let (plain, plain_out) = run_output(demo.name, RunOptions::default());
        let folded_options = RunOptions {
            fold: true,
            ..RunOptions::default()
        };
        let (folded, folded_out) = run_output(demo.name, folded_options);
        assert_eq!(plain.ok(), folded.ok(), "{}", demo.name);
        assert_eq!(plain_out, folded_out, "{}", demo.name);
    }
}

#[test]
fn unknown_demo() {
    let (result, _) = run_output("nope", RunOptions::default());
    assert!(matches!(result, Err(CliError::UnknownDemo { name }) if name == "nope"));
}

#[test]
fn call_depth_override() {
    let options = RunOptions {
        max_call_depth: Some(1),
        ..RunOptions::default()
    };
    let (result, _) = run_output("hard", options);
    assert!(matches!(
        result,
        Err(CliError::Eval(EvalError::RecursionLimit { depth: 1 }))
    ));
}

#[test]
fn run_options_parse() {
    let options = RunOptions::parse(["--fold", "--max-depth=32"]).unwrap();
    assert!(options.fold);
    assert!(!options.stdin);
    assert_eq!(options.max_call_depth, Some(32));
    assert_eq!(
        RunOptions::parse(["--fast"]).err(),
        Some("--fast".to_string())
    );
    assert_eq!(
        RunOptions::parse(["--max-depth=lots"]).err(),
        Some("--max-depth=lots".to_string())
    );
}

#[test]
fn list_names_every_demo() {
    let mut out = StringEmitter::new();
    list_demos(&mut out);
    let listing = out.output();
    assert_eq!(listing.lines().count(), demos::all().len());
    for demo in demos::all() {
        assert!(listing.contains(demo.name));
    }
}

#[test]
fn fmt_example() {
    let mut out = StringEmitter::new();
    format_demo("example", &mut out).unwrap();
    assert_eq!(
        out.output(),
        "(def foo(hello, world) { print hello + world; })(5, -3);\n"
    );
}

#[test]
fn fold_folding_demo() {
    let mut out = StringEmitter::new();
    let stats = fold_demo("folding", &mut out).unwrap();
    assert_eq!(
        out.output(),
        [
            "if (42) {",
            "};",
            "def foo() {",
            "};",
            "print 42;",
            "read x;",
            "10;",
            "x;",
            "5;",
            "-42;",
            "0;",
            "foo(1, 2, 3);",
            "",
        ]
        .join("\n")
    );
    assert_eq!(stats.folded, 4);
}
