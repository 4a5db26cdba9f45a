use std::collections::HashMap;
use std::sync::LazyLock;

/// USD per million tokens.
#[derive(Debug, Clone, Copy)]
pub struct PriceEntry {
    pub input: f64,
    pub output: f64,
}

pub static PRICING: LazyLock<HashMap<&'static str, PriceEntry>> = LazyLock::new(|| {
    HashMap::from([
        (
            "gpt-4-1106-preview",
            PriceEntry {
                input: 10.0,
                output: 30.0,
            },
        ),
        (
            "gpt-4-turbo",
            PriceEntry {
                input: 10.0,
                output: 30.0,
            },
        ),
        (
            "gpt-4o",
            PriceEntry {
                input: 2.5,
                output: 10.0,
            },
        ),
        (
            "gpt-4.1",
            PriceEntry {
                input: 2.0,
                output: 8.0,
            },
        ),
    ])
});

pub fn calculate_cost(model: &str, input_tokens: u32, output_tokens: u32) -> f64 {
    match PRICING.get(model) {
        Some(entry) => {
            (f64::from(input_tokens) * entry.input / 1_000_000.0)
                + (f64::from(output_tokens) * entry.output / 1_000_000.0)
        }
        None => 0.0,
    }
}
