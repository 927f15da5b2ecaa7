use tracing_subscriber::EnvFilter;

/// Routes library tracing to the test output; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Splits a CSS value on commas that sit outside parentheses
pub fn split_layers(css: &str) -> Vec<&str> {
    let mut layers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in css.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                layers.push(css[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    layers.push(css[start..].trim());
    layers
}

/// Every `#xxxxxx` token in `css`
pub fn hex_tokens(css: &str) -> Vec<&str> {
    css.match_indices('#').map(|(i, _)| css.get(i..i + 7).unwrap_or(&css[i..])).collect()
}
