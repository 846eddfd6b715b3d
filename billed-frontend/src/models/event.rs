//! Payloads the view layer hands to the containers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A file picked by the employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Lowercased text after the last `.`, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(str::to_lowercase)
    }
}

/// A receipt held between selection and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub raw_file: SelectedFile,
    pub extension: String,
    pub accepted_for_upload: bool,
}

/// `change` event of the receipt input.
#[derive(Debug, Clone, Default)]
pub struct FileChangeEvent {
    pub files: Vec<SelectedFile>,
}

impl FileChangeEvent {
    pub fn single(file: SelectedFile) -> Self {
        Self { files: vec![file] }
    }
}

/// Raw values of the new-bill form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// `submit` event of the new-bill form.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    pub fields: BillForm,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(fields: BillForm) -> Self {
        Self {
            fields,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The eye icon of a bills-table row.
#[derive(Debug, Clone, Default)]
pub struct IconElement {
    attributes: HashMap<String, String>,
}

impl IconElement {
    pub const BILL_URL_ATTRIBUTE: &'static str = "data-bill-url";

    pub fn for_bill_url(url: impl Into<String>) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(Self::BILL_URL_ATTRIBUTE.to_string(), url.into());
        Self { attributes }
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
