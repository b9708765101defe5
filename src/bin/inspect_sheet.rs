use anyhow::Result;
use taproom_board::board::MenuPipeline;
use taproom_board::config::Config;
use taproom_board::parsers::{parse_table, LogicalField};
use taproom_board::utils::http::{create_client, fetch_table};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let client = create_client(&config.source)?;

    println!("Fetching menu sheet from {}...", config.source.url);
    let text = fetch_table(&client, &config.source).await?;

    let records = parse_table(&text);
    println!("Parsed {} data rows", records.len());

    let Some(first) = records.first() else {
        println!("No data rows; nothing to inspect");
        return Ok(());
    };

    let mut columns: Vec<&str> = first.columns().collect();
    columns.sort_unstable();
    println!("\nColumns: {}", columns.join(" | "));

    // Which column feeds each logical field, and for how many rows
    let pipeline = MenuPipeline::new(&config);
    println!("\nField resolution:");
    for field in LogicalField::ALL {
        let resolved = records
            .iter()
            .filter(|record| !pipeline.fields().resolve(record, field).is_empty())
            .count();
        let column = records
            .iter()
            .find_map(|record| pipeline.fields().matched_column(record, field))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<22} {:<20} {}/{} rows",
            field.key(),
            column,
            resolved,
            records.len()
        );
    }

    let board = pipeline.build_board(&text);
    println!(
        "\n{} items over {} pages of {}",
        board.item_count(),
        board.page_count(),
        board.page_size()
    );

    for item in board.cards().iter().filter_map(|card| card.as_item()) {
        let id = item.id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string());
        println!(
            "  {:>4} {:<32} {:<8} {:>8} {}",
            id,
            item.title,
            item.state.as_str(),
            item.price,
            item.badge.as_ref().map(|badge| badge.category.code()).unwrap_or("-")
        );
    }

    Ok(())
}
