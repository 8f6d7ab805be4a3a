use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use taskboard_core::classify;

#[derive(Tabled)]
struct ClassifyRow {
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "Priority")]
    label: String,
}

fn build_rows(texts: &[String]) -> Vec<ClassifyRow> {
    texts
        .iter()
        .map(|text| {
            let priority = classify(text);
            ClassifyRow {
                text: text.clone(),
                tier: priority.tier(),
                label: priority.label().to_string(),
            }
        })
        .collect()
}

pub fn show_classification(texts: &[String]) {
    let mut table = Table::new(build_rows(texts));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
