/// Soft step-4 background colours used for tag pills.
pub const TAG_COLORS: [&str; 14] = [
    "#ffdbdc", // red
    "#d6f1df", // green
    "#f2e2fc", // purple
    "#ffdcc3", // orange
    "#d5efff", // blue
    "#fcdce5", // crimson
    "#ccf3ea", // teal
    "#fbdcef", // pink
    "#e1e9ff", // indigo
    "#ffee9c", // amber
    "#ebe4ff", // violet
    "#caf1f6", // cyan
    "#f0e4d9", // brown
    "#e2f0bd", // lime
];

/// djb2 over the UTF-16 code units of `name`, on doubles. The hash is never
/// wrapped, so long names lose precision and eventually overflow to infinity.
pub fn hash_tag(name: &str) -> f64 {
    name.encode_utf16()
        .fold(5381.0, |hash, unit| hash * 33.0 + unit as f64)
}

/// Palette slot for `name`; names whose hash overflowed fall back to the first colour.
fn base_index(name: &str) -> usize {
    let hash = hash_tag(name);

    if hash.is_finite() {
        (hash.abs() % TAG_COLORS.len() as f64) as usize
    } else {
        0
    }
}

pub fn tag_color(name: &str) -> &'static str {
    TAG_COLORS[base_index(name)]
}

/// Colour for the `tag_index`-th tag of a post. The index offsets the hashed
/// colour so neighbouring tags on one post land on different colours.
pub fn tag_color_for_post(name: &str, tag_index: usize) -> &'static str {
    TAG_COLORS[(base_index(name) + tag_index) % TAG_COLORS.len()]
}
