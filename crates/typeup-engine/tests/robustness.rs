//! Randomized inputs built from construct fragments. Parsing must finish,
//! consume everything and never panic, whatever the mix.

use rstest::rstest;
use typeup_engine::{Parser, parse_document};

/// Small deterministic linear congruential generator.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let i = (self.next() % items.len() as u64) as usize;
        items[i]
    }
}

const FRAGMENTS: &[&str] = &[
    "\n", "\n\n", " ", "text", "[", "]", "{", "}", "#", "# ", "=#", "=# ", "===", "```",
    "\"\"\"", "@{", "k=v", "|", "---", "![", "image[", "video[", "ignore {", "\\", "*", "_",
    "__", "//", "`", "''", "[a|b]", "é", "\r\n",
];

fn random_doc(rng: &mut Lcg) -> String {
    let len = 1 + rng.next() % 40;
    (0..len).map(|_| rng.pick(FRAGMENTS)).collect()
}

#[test]
fn random_documents_terminate() {
    let mut rng = Lcg(0x7e57_ab1e);
    for _ in 0..2_000 {
        let src = random_doc(&mut rng);
        let chars: Vec<char> = src.replace("\r\n", "\n").chars().collect();
        let mut parser = Parser::new(&chars);
        let count = parser.by_ref().count();
        assert!(parser.cursor().eof(), "not fully consumed: {src:?}");
        assert!(count <= chars.len(), "more nodes than characters: {src:?}");

        let html = parse_document(&src).document.to_html();
        assert!(html.ends_with("</body>\n</html>\n"));
    }
}

#[test]
fn deep_list_nesting() {
    let depth = 200;
    let src = format!("{}x\n{}", "[\n".repeat(depth), "]\n".repeat(depth));
    let parsed = parse_document(&src);
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.document.nodes.len(), 1);
    assert_eq!(parsed.document.to_html().matches("<ul>").count(), depth);
}

#[rstest]
#[case("[\n")]
#[case("[\n{\n")]
#[case("{\n x\n")]
fn long_runs_of_unclosed_lists(#[case] unit: &str) {
    let src = unit.repeat(100_000 / unit.lines().count());
    let parsed = parse_document(&src);
    assert_eq!(parsed.document.nodes.len(), 1);
    assert!(!parsed.diagnostics.is_empty());
}
