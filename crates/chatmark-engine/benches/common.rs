// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_reply(size: usize) -> String {
    let base = "Use `Vec::with_capacity` when the size is known:\n\n```rust\nlet mut v = Vec::with_capacity(16);\nv.push(`x`);\n```\n\nThen call `v.len()`.\n\n";
    base.repeat(size)
}

/// Many lone and paired backticks with no closing fences, the worst case
/// for a backtracking matcher.
#[allow(dead_code)]
pub fn generate_backtick_storm(size: usize) -> String {
    "` `` ``` a`b ".repeat(size)
}
