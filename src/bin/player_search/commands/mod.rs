pub mod search;
pub mod export;

/// Ligne affichée à la place des résultats quand la requête a échoué
pub const NO_DATA: &str = "No player data to display.";

/// Écrit un rendu sur la sortie standard sans doubler le saut de ligne final
pub fn emit(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
}
