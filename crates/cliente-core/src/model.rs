//! Cliente Models
//!
//! Data structures matching the remote API's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier, stable for the record's lifetime
pub type ClienteId = u64;

/// Customer record as returned by the list and edit endpoints
///
/// Text fields the server leaves out or sends as `null` read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cliente {
    pub id: ClienteId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre_completo: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub numero_documento: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    /// ISO-8601 timestamp of the last server-side change
    #[serde(default)]
    pub fecha_actualizado: Option<String>,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Cliente {
    /// Editable fields of this record
    pub fn draft(&self) -> ClienteDraft {
        ClienteDraft {
            nombre_completo: self.nombre_completo.clone(),
            numero_documento: self.numero_documento.clone(),
            email: self.email.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
        }
    }

    /// Copy the editable fields of a draft over this record
    pub fn apply_draft(&mut self, draft: &ClienteDraft) {
        self.nombre_completo = draft.nombre_completo.clone();
        self.numero_documento = draft.numero_documento.clone();
        self.email = draft.email.clone();
        self.fecha_nacimiento = draft.fecha_nacimiento.clone();
    }

    /// Two-letter fallback shown when there is no avatar image
    pub fn initials(&self) -> String {
        self.nombre_completo.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Editable field set, sent as the body of create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClienteDraft {
    pub nombre_completo: String,
    pub numero_documento: String,
    pub email: String,
    pub fecha_nacimiento: String,
}

/// Which draft field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    NombreCompleto,
    NumeroDocumento,
    Email,
    FechaNacimiento,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::NombreCompleto,
        DraftField::NumeroDocumento,
        DraftField::Email,
        DraftField::FechaNacimiento,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::NombreCompleto => "nombre_completo",
            DraftField::NumeroDocumento => "numero_documento",
            DraftField::Email => "email",
            DraftField::FechaNacimiento => "fecha_nacimiento",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::NombreCompleto => "Nombre completo",
            DraftField::NumeroDocumento => "Número de documento",
            DraftField::Email => "Email",
            DraftField::FechaNacimiento => "Fecha de nacimiento",
        }
    }
}

impl ClienteDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::NombreCompleto => &self.nombre_completo,
            DraftField::NumeroDocumento => &self.numero_documento,
            DraftField::Email => &self.email,
            DraftField::FechaNacimiento => &self.fecha_nacimiento,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::NombreCompleto => self.nombre_completo = value,
            DraftField::NumeroDocumento => self.numero_documento = value,
            DraftField::Email => self.email = value,
            DraftField::FechaNacimiento => self.fecha_nacimiento = value,
        }
    }
}

// The document number comes back as a JSON number from some endpoints
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
