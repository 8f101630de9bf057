// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("==========\nSection {section}\n==========\n\n"));
        content.push_str("Some paragraph content with multiple sentences.\n");
        content.push_str("It wraps onto a second line.\n\n");
        content.push_str("1. First item\n   with a hanging indent\n");
        content.push_str("2. Second item\n#. Auto item\n\n");
        content.push_str("----------\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_nested_lists(depth: usize, width: usize) -> String {
    let mut content = String::new();
    push_nested(&mut content, depth, width, 0);
    content
}

#[allow(dead_code)]
fn push_nested(content: &mut String, remaining: usize, width: usize, indent: usize) {
    if remaining == 0 {
        return;
    }
    let pad = " ".repeat(indent);
    for i in 1..=width {
        content.push_str(&format!("{pad}{i}. Item {i} at indent {indent}\n\n"));
        push_nested(content, remaining - 1, width, indent + 3);
    }
}

#[allow(dead_code)]
pub fn generate_roman_list(items: u32) -> String {
    (1..=items)
        .map(|n| {
            let numeral = restblocks_engine::parsing::text::roman::to_roman(n)
                .unwrap_or_default()
                .to_lowercase();
            format!("{numeral}. Item {n}\n")
        })
        .collect()
}
