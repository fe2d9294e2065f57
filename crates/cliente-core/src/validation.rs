//! Draft Validation
//!
//! Two rule sets: the create form checks every field's shape, the edit
//! modal only requires that nothing was blanked out.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{ClienteDraft, DraftField};

/// Shown when an edit leaves a required field empty
pub const INCOMPLETE_MESSAGE: &str = "Por favor, complete todos los campos del cliente";

/// Per-field validation messages, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn add(&mut self, field: DraftField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{}: {}", field.as_str(), msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Rules for a brand new cliente
pub fn validate_new(draft: &ClienteDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.nombre_completo.trim().is_empty() {
        errors.add(DraftField::NombreCompleto, "Nombre Completo es requerido");
    }

    let documento = draft.numero_documento.trim();
    if documento.is_empty() {
        errors.add(DraftField::NumeroDocumento, "Número de Documento es requerido");
    } else if !documento.chars().all(|c| c.is_ascii_digit()) {
        errors.add(DraftField::NumeroDocumento, "Número de Documento debe ser un número");
    }

    if draft.email.trim().is_empty() {
        errors.add(DraftField::Email, "Email es requerido");
    } else if !is_valid_email(&draft.email) {
        errors.add(DraftField::Email, "Email inválido");
    }

    if draft.fecha_nacimiento.trim().is_empty() {
        errors.add(DraftField::FechaNacimiento, "Fecha de Nacimiento es requerida");
    }

    errors.into_result()
}

/// Rules for an edited cliente: every editable field must be non-empty
pub fn validate_edit(draft: &ClienteDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in DraftField::ALL {
        if draft.get(field).trim().is_empty() {
            errors.add(field, INCOMPLETE_MESSAGE);
        }
    }
    errors.into_result()
}
