use scripdex_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("schema      : {}", envelope.meta.schema_version);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("catalog     : {}", envelope.meta.catalog_version);
    if let Some(market) = envelope.meta.market {
        println!("market      : {market}");
    }
    println!("latency_ms  : {}", envelope.meta.latency_ms);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    match envelope.data.get("results").and_then(Value::as_array) {
        Some(results) if results.is_empty() => println!("no matches"),
        Some(results) => {
            println!("results:");
            for item in results {
                let symbol = item.get("symbol").and_then(Value::as_str).unwrap_or("-");
                let market = item.get("market").and_then(Value::as_str).unwrap_or("-");
                let name = item.get("full_name").and_then(Value::as_str).unwrap_or("-");
                println!("  {symbol:<12} {market:<9} {name}");
            }
        }
        None => {
            println!("data:");
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            for line in pretty_data.lines() {
                println!("  {line}");
            }
        }
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }

    Ok(())
}
