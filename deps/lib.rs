/*!
This crate re-exports the third party dependencies shared by the vigil crates so they are declared and versioned in one place.
*/

pub use http;
pub use hyper;
pub use lexical;
pub use once_cell;
pub use reqwest;
pub use serde_json;
pub use tokio;
pub use url;
