pub mod errors;
pub mod normalize;
pub mod query;
pub mod record;


pub use errors::{InputError, RequestError, Result};
pub use query::{Endpoint, SearchQuery, parse_max_results};
pub use record::{PlayerRecord, Ratings, SearchResult};
