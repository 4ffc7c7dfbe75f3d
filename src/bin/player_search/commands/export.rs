use anyhow::Result;
use log::warn;
use player_search::render::raw::{render_raw, CSV_LABEL};
use player_search::{Endpoint, SearchQuery};
use crate::commands::{emit, NO_DATA};
use crate::context::Context;

/// Exécute un export CSV et affiche le résultat
///
/// Le CSV n'est lu qu'au moment du rendu ; en mode brut il est
/// recopié tel quel. Avec `with_raw`, la même réponse est aussi
/// recopiée brute après le rendu.
pub fn execute(context: &Context, query: &SearchQuery, with_raw: bool) -> Result<bool> {
    let client = context.client();
    let formatter = context.formatter();

    eprintln!("{}", formatter.format_info(&format!("Exporting CSV for: {}...", query.name)));
    if let Ok(url) = client.request_url(Endpoint::Export, query) {
        eprintln!("{}", formatter.format_info(&format!("Calling: {}", url)));
    }

    let outcome = context.runtime().block_on(async {
        client.export(query).await
    });

    match outcome {
        Ok(csv) => {
            eprintln!("{}", formatter.format_success(&format!("CSV data retrieved ({} bytes)", csv.len())));
            emit(&formatter.format_export(&csv)?);
            if with_raw {
                println!();
                emit(&render_raw(CSV_LABEL, &csv));
            }
            Ok(true)
        },
        Err(e) => {
            warn!("Export failed ({}): {}", e.kind(), e);
            eprintln!("{}", formatter.format_error(&e.to_string()));
            println!("{}", NO_DATA);
            Ok(false)
        }
    }
}
