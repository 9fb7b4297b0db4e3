pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::TokenScope;
pub use codec::TokenCodec;
pub use errors::TokenError;
