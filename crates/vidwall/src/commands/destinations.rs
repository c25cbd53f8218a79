//! `vidwall destinations` handler.

use tabled::Tabled;
use vidwall_api::model::{AuxDestination, ScreenDestination};
use vidwall_api::{Client, DestinationFilter};

use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ScreenRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Layers")]
    layers: i32,
}

impl From<&ScreenDestination> for ScreenRow {
    fn from(d: &ScreenDestination) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            size: format!("{}x{}", d.h_size, d.v_size),
            layers: d.layers,
        }
    }
}

#[derive(Tabled)]
struct AuxRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Stream mode")]
    stream_mode: i32,
}

impl From<&AuxDestination> for AuxRow {
    fn from(d: &AuxDestination) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            stream_mode: d.aux_stream_mode,
        }
    }
}

pub async fn handle(client: &Client, filter: DestinationFilter) -> Result<(), CliError> {
    let mut list = client.list_destinations(filter).await?;
    list.screen_destinations.sort_by_key(|d| d.id);
    list.aux_destinations.sort_by_key(|d| d.id);

    if !matches!(filter, DestinationFilter::Aux) {
        println!("Screen destinations:");
        output::print_table(list.screen_destinations.iter().map(ScreenRow::from).collect());
    }
    if !matches!(filter, DestinationFilter::Screen) {
        println!("Aux destinations:");
        output::print_table(list.aux_destinations.iter().map(AuxRow::from).collect());
    }
    Ok(())
}
