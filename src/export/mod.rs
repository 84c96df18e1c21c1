pub mod csv;
pub mod json;
pub mod numbering;
pub mod whatsapp;

pub use crate::error::ExportError;
pub use csv::{export_csv, write_csv};
pub use json::{export_json, EstimateDocument};
pub use numbering::{DocumentCounter, DocumentNumberer, FileCounter, InMemoryCounter};
pub use whatsapp::{
    format_phone_for_whatsapp, format_rub, whatsapp_message, whatsapp_url, ClientInfo,
};
