//! Prose templates for the pseudo-text generator.
//!
//! The tables below are cosmetic filler — the word lists can change freely
//! as long as [`build_paragraph`] keeps producing non-empty, single-spaced
//! sentences and [`code_block`] keeps emitting one fenced block per call.

use rand::Rng;
use rand::rngs::StdRng;

/// Probability that a freshly started paragraph queues a code block.
pub(crate) const CODE_BLOCK_PROBABILITY: f64 = 0.3;

/// Probability that a paragraph ends with a bullet list item.
pub(crate) const LIST_PROBABILITY: f64 = 0.25;

const TOPICS: &[&str] = &[
    "async runtimes",
    "error handling",
    "the borrow checker",
    "trait objects",
    "serialization",
    "REST APIs",
    "caching",
    "message queues",
    "frontend state",
    "database indexing",
];

const VERBS: &[&str] = &[
    "simplifies",
    "coordinates",
    "optimizes",
    "isolates",
    "drives",
    "validates",
    "streams",
];

const NOUNS: &[&str] = &[
    "data flow",
    "component boundaries",
    "request handling",
    "shared state",
    "the public interface",
    "module structure",
    "background work",
    "configuration",
];

const INTROS: &[&str] = &[
    "Consider an example:",
    "In this section we look at how",
    "To make it concrete, imagine that",
    "It is worth keeping in mind that",
    "Note along the way that",
];

const DETAILS: &[&str] = &[
    "Code should stay easy to read and extend.",
    "Avoid tight coupling between modules.",
    "Reading code matters more than writing it.",
    "Caching strategy has a direct effect on latency.",
    "Strict typing keeps production incidents rare.",
];

const EMPHASIS: &[&str] = &[
    "**document the decisions as you go**",
    "_agree on API contracts early_",
    "***architecture lives or dies by clear interfaces***",
    "**strong types save reviewer time**",
    "_streaming should never freeze the UI_",
];

const LIST_ITEMS: &[&str] = &[
    "- settle the function contract up front;",
    "- avoid stray side effects;",
    "- keep domain and infrastructure logic apart;",
    "- cover the critical paths with tests;",
    "- log only what helps debugging.",
];

const CODE_SNIPPETS: &[&str] = &[
    "fn sum(a: i32, b: i32) -> i32 {\n    a + b\n}",
    "let user = User { name: \"Alice\".into(), age: 25 };\nprintln!(\"{user:?}\");",
    "struct Storage {\n    items: Vec<Item>,\n}\n\nimpl Storage {\n    fn add(&mut self, item: Item) {\n        self.items.push(item);\n    }\n}",
    "async fn fetch_data(url: &str) -> Result<Data, Error> {\n    let body = client.get(url).send().await?;\n    Ok(body.json().await?)\n}",
    "tokio::spawn(async move {\n    tracing::info!(\"worker started\");\n});",
];

fn pick<'a>(rng: &mut StdRng, table: &[&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

/// Synthesize one paragraph of dev-flavored prose.
///
/// Single-spaced sentences; occasionally ends with a bullet item so the
/// output looks like a real assistant answer rather than uniform filler.
pub(crate) fn build_paragraph(rng: &mut StdRng) -> String {
    let topic = pick(rng, TOPICS);

    let mut paragraph = format!(
        "{intro} {topic} {verb} {noun}. \
         Teams usually reach for patterns that keep the architecture predictable. \
         For instance, when working with {topic} it pays to separate layers and keep a single entry point. \
         {detail} {emphasis}.",
        intro = pick(rng, INTROS),
        topic = topic,
        verb = pick(rng, VERBS),
        noun = pick(rng, NOUNS),
        detail = pick(rng, DETAILS),
        emphasis = pick(rng, EMPHASIS),
    );

    if rng.gen_bool(LIST_PROBABILITY) {
        paragraph.push_str("\n\n");
        paragraph.push_str(pick(rng, LIST_ITEMS));
    }

    paragraph
}

/// Synthesize one fenced code block, surrounded by blank lines so it stays
/// a standalone markdown block when concatenated into a reply.
pub(crate) fn code_block(rng: &mut StdRng) -> String {
    format!("\n```rust\n{}\n```\n", pick(rng, CODE_SNIPPETS))
}
