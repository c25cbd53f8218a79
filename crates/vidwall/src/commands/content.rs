//! `vidwall content <SCREEN_ID>` handler.

use tabled::Tabled;
use vidwall_api::Client;
use vidwall_api::model::{BgLayer, Layer};

use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct LayerRow {
    #[tabled(rename = "Layer")]
    id: i32,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Pvw")]
    pvw: i32,
    #[tabled(rename = "Pgm")]
    pgm: i32,
    #[tabled(rename = "Frozen")]
    frozen: &'static str,
}

impl From<&Layer> for LayerRow {
    fn from(l: &Layer) -> Self {
        Self {
            id: l.id,
            source: output::optional_index(l.last_src_idx),
            pvw: l.pvw_mode,
            pgm: l.pgm_mode,
            frozen: if l.freeze != 0 { "yes" } else { "no" },
        }
    }
}

#[derive(Tabled)]
struct BgLayerRow {
    #[tabled(rename = "BG layer")]
    id: i32,
    #[tabled(rename = "Source")]
    source: i32,
    #[tabled(rename = "Matte")]
    matte: &'static str,
}

impl From<&BgLayer> for BgLayerRow {
    fn from(l: &BgLayer) -> Self {
        Self {
            id: l.id,
            source: l.last_bg_source_index,
            matte: if l.bg_show_matte != 0 { "yes" } else { "no" },
        }
    }
}

pub async fn handle(client: &Client, screen_id: i32) -> Result<(), CliError> {
    let content = client.list_content(screen_id).await?;

    println!("Screen {}: {}", content.id, content.name);
    output::print_table(content.layers.iter().map(LayerRow::from).collect());
    output::print_table(content.bg_layers.iter().map(BgLayerRow::from).collect());
    Ok(())
}
