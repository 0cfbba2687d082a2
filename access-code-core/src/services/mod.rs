//! Services layer: unlock code generation, standard code derivation, and
//! access code encoding/decoding.

pub mod decoder;
pub mod deriver;
pub mod encoder;
pub mod error;
pub mod generator;

pub use decoder::decode_access_code;
pub use deriver::derive_standard_access_code;
pub use encoder::encode_data_access_code;
pub use error::CodeError;
pub use generator::UnlockCodeGenerator;
