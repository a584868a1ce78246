/// Request and response shapes exchanged with the DirectMail API
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
