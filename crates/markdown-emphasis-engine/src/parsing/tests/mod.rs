//! Parser invariant and snapshot tests.


use rstest::rstest;

use crate::parsing::inline::{InlineNode, InlineParser, parse};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[rstest]
#[case("")]
#[case("plain text")]
#[case("*")]
#[case("**")]
#[case("***")]
#[case("****")]
#[case("*****")]
#[case("******")]
#[case("a *b")]
#[case("a **b")]
#[case("**a*")]
#[case("*a**")]
#[case("*a*b*")]
#[case("*a *b* c*")]
#[case("*a **b** c*")]
#[case("**a *b* c**")]
#[case("**a *b** c*")]
#[case("*a **b* c**")]
#[case("***x***")]
#[case("***x**")]
#[case("***x*")]
#[case("**x***")]
#[case("*x***")]
#[case("Hi, I am a **bold and *italic*** piece of text")]
#[case("Hi I am a **bold ~~or~~ and *italic*** piece of text")]
#[case("~~a ||b|| c~~")]
#[case("~~a ||b~~ c||")]
#[case("~ | ~~~ |||")]
#[case("||~~**a *b***~~||")]
#[case("*héllo* **wörld** ~~ünïcode~~")]
#[case("**日本*語***")]
fn parse_preserves_invariants(#[case] input: &str) {
    init_logging();
    let nodes = parse(input);
    invariants::check(input, &nodes);
}

#[rstest]
#[case("no markup here")]
#[case("tilde ~ and pipe | alone")]
#[case("emoji 🎉 and accents é")]
fn input_without_delimiters_is_one_text_node(#[case] input: &str) {
    assert_eq!(parse(input), vec![InlineNode::Text(input.to_string())]);
}

#[rstest]
#[case(1, "**a** and *b*", true)]
#[case(1, "**a *b***", false)]
#[case(2, "**a *b***", true)]
#[case(2, "||a **b *c***||", false)]
#[case(3, "||a **b *c***||", true)]
fn nesting_cap(#[case] limit: usize, #[case] input: &str, #[case] ok: bool) {
    init_logging();
    let result = InlineParser::with_max_nesting_depth(limit).parse(input);
    assert_eq!(result.is_ok(), ok, "{result:?}");
    if let Ok(nodes) = result {
        invariants::check(input, &nodes);
    }
}

#[test]
fn snapshot_bold_and_italic() {
    insta::assert_debug_snapshot!(parse("Hi, I am a **bold and *italic*** piece of text"), @r#"
    [
        Text(
            "Hi, I am a ",
        ),
        Emphasis {
            kind: Bold,
            length: 21,
            children: [
                Text(
                    "bold and ",
                ),
                Emphasis {
                    kind: Italic,
                    length: 8,
                    children: [
                        Text(
                            "italic",
                        ),
                    ],
                },
            ],
        },
        Text(
            " piece of text",
        ),
    ]
    "#);
}

#[test]
fn snapshot_unclosed_constructs() {
    insta::assert_debug_snapshot!(parse("Some *half done **emphasis ~~and ||more"), @r#"
    [
        Text(
            "Some *half done **emphasis ~~and ||more",
        ),
    ]
    "#);
}
