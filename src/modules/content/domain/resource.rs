// src/modules/content/domain/resource.rs
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::forms::ValidationError;
use crate::shared::state::Record;

/// A collection exposed by the portfolio API under `/<PATH>`.
pub trait Resource: Record + Serialize + DeserializeOwned + Debug + Send + Sync + 'static {
    /// Body sent on create and update.
    type Draft: Serialize + Debug + Clone + Send + Sync + 'static;

    /// Raw form fields as posted by the browser.
    type Form: DeserializeOwned + Default + Clone + Send + 'static;

    const PATH: &'static str;

    /// Envelope keys tried, in order, on list responses.
    const LIST_KEYS: &'static [&'static str];

    /// Envelope keys tried, in order, on single-record responses.
    const ITEM_KEYS: &'static [&'static str];

    /// Capitalised singular, as used in notices ("Blog updated successfully").
    const LABEL: &'static str;

    const FETCH_FAILED: &'static str;

    /// Checks the form and turns it into a request body. Runs before any
    /// network call.
    fn validate(form: Self::Form) -> Result<Self::Draft, ValidationError>;

    /// Seeds the edit form with the stored values.
    fn to_form(&self) -> Self::Form;

    /// Local copy of a saved record when the server echoed nothing usable.
    fn from_draft(id: Option<i64>, draft: &Self::Draft) -> Self;

    fn label_lower() -> String {
        Self::LABEL.to_lowercase()
    }
}
