use anyhow::Result;
use log::warn;
use player_search::{Endpoint, SearchQuery};
use crate::commands::{emit, NO_DATA};
use crate::context::Context;

/// Exécute une recherche JSON et affiche les joueurs
///
/// Renvoie `false` si la requête a échoué ; l'échec est signalé à
/// l'utilisateur mais n'interrompt pas le programme.
pub fn execute(context: &Context, query: &SearchQuery) -> Result<bool> {
    let client = context.client();
    let formatter = context.formatter();

    eprintln!("{}", formatter.format_info(&format!("Searching for: {}...", query.name)));
    if let Ok(url) = client.request_url(Endpoint::Search, query) {
        eprintln!("{}", formatter.format_info(&format!("Calling: {}", url)));
    }

    let outcome = context.runtime().block_on(async {
        client.search(query).await
    });

    match outcome {
        Ok(response) => {
            eprintln!("{}", formatter.format_success(&format!("Found {} players", response.result.count)));
            emit(&formatter.format_search(&response)?);
            Ok(true)
        },
        Err(e) => {
            warn!("Search failed ({}): {}", e.kind(), e);
            eprintln!("{}", formatter.format_error(&e.to_string()));
            println!("{}", NO_DATA);
            Ok(false)
        }
    }
}
