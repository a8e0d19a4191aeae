use criterion::{Criterion, criterion_group, criterion_main};
use typeup_engine::parse_document;

fn generate_document(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("# Section {i}\n\n"));
        content.push_str("Some *bold* and _italic_ text with a [link|http://example.com]\n");
        content.push_str("and `inline code` spread over //two// lines.\n\n");
        content.push_str("[\nfirst\n{\nnested one\nnested two\n}\nsecond\n]\n\n");
        content.push_str("#,{\nname, value\nalpha, 1\nbeta, 2\n}\n\n");
        content.push_str("```\nfn main() {}\n```\n\n");
        content.push_str("| a quoted line\n---\n\n");
    }
    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_document(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let parsed = parse_document(std::hint::black_box(&content));
            std::hint::black_box(parsed);
        });
    });

    let parsed = parse_document(&content);
    group.bench_function("to_html", |b| {
        b.iter(|| std::hint::black_box(parsed.document.to_html()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
