//! Sentiment Analysis Demo
//!
//! Validates and classifies a set of financial headlines using the mock
//! backend, so no API token is needed. Swap in
//! `SentimentAnalyzer::new_huggingface()` and a real token for live calls.
//!
//! Run with: cargo run --bin sentiment_demo

use finbert_sentiment::{validate_input, Sentiment, SentimentAnalyzer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(60));
    println!("FinBERT Sentiment - Analysis Demo");
    println!("{}", "=".repeat(60));

    let analyzer = SentimentAnalyzer::new_mock();
    println!("\nBackend: {}\n", analyzer.name());

    let texts = vec![
        "Apple reports record quarterly earnings, beating analyst expectations by 15%",
        "Tesla stock plunges 8% after disappointing delivery numbers",
        "Federal Reserve maintains interest rates unchanged",
        "NVIDIA data center revenue surges 171% on AI chip demand",
        "Goldman Sachs downgrades tech sector citing valuation concerns",
        "   ",
    ];

    for text in &texts {
        if let Some(message) = validate_input(text) {
            println!("[!] rejected: {}", message);
            println!("    Text: {:?}\n", text);
            continue;
        }

        let analysis = analyzer.analyze(text, "demo-token").await?;

        let marker = match analysis.sentiment() {
            Some(Sentiment::Positive) => "[+]",
            Some(Sentiment::Negative) => "[-]",
            Some(Sentiment::Neutral) => "[ ]",
            None => "[?]",
        };

        println!("{} {} (score: {:.2})", marker, analysis.label, analysis.score);
        println!("    Text: \"{}\"\n", truncate_text(text, 50));
    }

    println!("{}", "=".repeat(60));
    println!("Demo complete!");
    println!("{}", "=".repeat(60));

    Ok(())
}

fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        text.to_string()
    } else {
        format!("{}...", &text[..max_len])
    }
}
