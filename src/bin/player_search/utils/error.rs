use thiserror::Error;
use player_search::RequestError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no player name given")]
    MissingPlayerName,

    #[error("{0} request(s) failed")]
    RequestsFailed(usize),

    #[error("could not start: {0}")]
    Startup(#[from] RequestError),
}
