use anyhow::Result;
use clap::Args;
use promptly_core::catalog;
use promptly_core::Category;
use strum::VariantArray;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter tools by name or description
    query: Option<String>,

    /// Only show tools in this category
    #[arg(long, value_name = "CATEGORY")]
    category: Option<Category>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let query = args.query.as_deref().unwrap_or("");
    let tools = catalog::search(query, args.category);

    if tools.is_empty() {
        println!("No tools match.");
        return Ok(());
    }

    let id_width = tools.iter().map(|tool| tool.id.len()).max().unwrap_or(0);
    let name_width = tools.iter().map(|tool| tool.name.len()).max().unwrap_or(0);
    let model_width = tools
        .iter()
        .map(|tool| tool.model.id().len())
        .max()
        .unwrap_or(0);

    for category in Category::VARIANTS {
        let in_category: Vec<_> = tools
            .iter()
            .filter(|tool| tool.category == *category)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!("{category}");
        for tool in in_category {
            println!(
                "  {} {:<id_width$}  {:<name_width$}  {:<model_width$}  {}",
                tool.icon,
                tool.id,
                tool.name,
                tool.model.id(),
                tool.description
            );
        }
        println!();
    }

    Ok(())
}
