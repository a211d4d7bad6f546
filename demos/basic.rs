use text_rules::{RuleError, TextRulesExt};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    for input in ["Budi Santoso", " ab ", ""] {
        let mut name = input
            .text_rules()
            .hint("Nama")
            .min_len(3, false)
            .alpha_or_numeric(true);

        println!("{name}");
        match name.value() {
            Ok(value) => println!("  accepted: {value:?}"),
            Err(RuleError::Unmet { message, .. }) => println!("  rejected: {message}"),
            Err(err) => println!("  misconfigured: {err}"),
        }
    }
}
