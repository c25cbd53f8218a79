//! `vidwall sources` handler.

use tabled::Tabled;
use vidwall_api::Client;
use vidwall_api::model::Source;

use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Size")]
    size: String,
}

impl From<&Source> for SourceRow {
    fn from(s: &Source) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            kind: describe_src_type(s.src_type),
            size: format!("{}x{}", s.h_size, s.v_size),
        }
    }
}

fn describe_src_type(src_type: i32) -> &'static str {
    match src_type {
        0 => "input",
        1 => "still",
        2 => "destination",
        _ => "unknown",
    }
}

pub async fn handle(client: &Client) -> Result<(), CliError> {
    let mut sources = client.sources().await?;
    sources.sort_by_key(|s| s.id);

    output::print_table(sources.iter().map(SourceRow::from).collect());
    Ok(())
}
