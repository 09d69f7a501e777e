//! Declarative form schemas and the values they validate.
//!
//! Every create/update dialog is one [`FormSchema`] plus a [`FormValues`] map.
//! Validation collects the first failing rule of every field, so a submit
//! reports all problems at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::services::upload_service::UploadFile;

pub mod schemas;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Email,
    Password,
    Number,
    Integer,
    /// One value out of options supplied at runtime (product, vendor, city…).
    Choice,
    /// Free-text items added one at a time.
    List,
    /// Hosted URLs and files waiting for upload.
    Images,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Email(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::Required(message));
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_)))
    }

    fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::List => FieldValue::List(Vec::new()),
            FieldKind::Images => FieldValue::Images(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Hosted(String),
    Pending(UploadFile),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Images(Vec<ImageSlot>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn with_list(mut self, name: &str, items: Vec<String>) -> Self {
        self.values.insert(name.to_string(), FieldValue::List(items));
        self
    }

    pub fn with_hosted_images(mut self, name: &str, urls: &[String]) -> Self {
        let slots = urls.iter().cloned().map(ImageSlot::Hosted).collect();
        self.values.insert(name.to_string(), FieldValue::Images(slots));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Blank items are ignored, like the chip inputs they back.
    pub fn push_item(&mut self, name: &str, item: &str) {
        let item = item.trim();
        if item.is_empty() {
            return;
        }
        match self.values.get_mut(name) {
            Some(FieldValue::List(items)) => items.push(item.to_string()),
            _ => {
                self.values
                    .insert(name.to_string(), FieldValue::List(vec![item.to_string()]));
            }
        }
    }

    pub fn remove_item(&mut self, name: &str, index: usize) {
        if let Some(FieldValue::List(items)) = self.values.get_mut(name) {
            if index < items.len() {
                items.remove(index);
            }
        }
    }

    pub fn images(&self, name: &str) -> &[ImageSlot] {
        match self.values.get(name) {
            Some(FieldValue::Images(slots)) => slots,
            _ => &[],
        }
    }

    pub fn add_image(&mut self, name: &str, file: UploadFile) {
        match self.values.get_mut(name) {
            Some(FieldValue::Images(slots)) => slots.push(ImageSlot::Pending(file)),
            _ => {
                self.values.insert(
                    name.to_string(),
                    FieldValue::Images(vec![ImageSlot::Pending(file)]),
                );
            }
        }
    }

    /// Replace every image with a single pending file (single-photo fields).
    pub fn replace_image(&mut self, name: &str, file: UploadFile) {
        self.values.insert(
            name.to_string(),
            FieldValue::Images(vec![ImageSlot::Pending(file)]),
        );
    }

    pub fn remove_image(&mut self, name: &str, index: usize) {
        if let Some(FieldValue::Images(slots)) = self.values.get_mut(name) {
            if index < slots.len() {
                slots.remove(index);
            }
        }
    }

    pub fn pending_uploads(&self) -> Vec<(String, usize, UploadFile)> {
        let mut pending = Vec::new();
        for (name, value) in &self.values {
            if let FieldValue::Images(slots) = value {
                for (index, slot) in slots.iter().enumerate() {
                    if let ImageSlot::Pending(file) = slot {
                        pending.push((name.clone(), index, file.clone()));
                    }
                }
            }
        }
        pending
    }

    /// Swap a pending slot for the URL it was uploaded to.
    pub fn mark_uploaded(&mut self, name: &str, index: usize, url: String) {
        if let Some(FieldValue::Images(slots)) = self.values.get_mut(name) {
            if let Some(slot) = slots.get_mut(index) {
                *slot = ImageSlot::Hosted(url);
            }
        }
    }

    /// Hosted URLs of an image field, in display order.
    pub fn hosted_urls(&self, name: &str) -> Vec<String> {
        self.images(name)
            .iter()
            .filter_map(|slot| match slot {
                ImageSlot::Hosted(url) => Some(url.clone()),
                ImageSlot::Pending(_) => None,
            })
            .collect()
    }

    pub fn f64(&self, name: &str) -> Option<f64> {
        self.text(name).trim().parse().ok()
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        let raw = self.text(name).trim();
        raw.parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|f| f.fract() == 0.0).map(|f| f as i64))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Options for `Choice` fields, keyed by field name as `(value, label)` pairs.
pub type ChoiceOptions = BTreeMap<String, Vec<(String, String)>>;

#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn defaults(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            values
                .values
                .insert(field.name.to_string(), field.default_value());
        }
        values
    }

    pub fn validate(&self, values: &FormValues, options: &ChoiceOptions) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Some(message) = check_field(field, values, options) {
                errors.insert(field.name, message);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn check_field(field: &FieldSpec, values: &FormValues, options: &ChoiceOptions) -> Option<String> {
    let text = values.text(field.name).trim();
    let present = match field.kind {
        FieldKind::List => !values.list(field.name).is_empty(),
        FieldKind::Images => !values.images(field.name).is_empty(),
        _ => !text.is_empty(),
    };

    for rule in &field.rules {
        match rule {
            Rule::Required(message) if !present => return Some((*message).to_string()),
            Rule::MinLength(min, message) if present && text.chars().count() < *min => {
                return Some((*message).to_string());
            }
            Rule::MaxLength(max, message) if text.chars().count() > *max => {
                return Some((*message).to_string());
            }
            Rule::Email(message) if present && !EMAIL_RE.is_match(text) => {
                return Some((*message).to_string());
            }
            _ => {}
        }
    }

    if !present {
        return None;
    }
    match field.kind {
        FieldKind::Number if text.parse::<f64>().is_err() => {
            Some(format!("{} must be a number", field.label))
        }
        FieldKind::Integer if values.i64(field.name).is_none() => {
            Some(format!("{} must be a whole number", field.label))
        }
        FieldKind::Choice => match options.get(field.name) {
            Some(choices) if !choices.is_empty() && !choices.iter().any(|(v, _)| v == text) => {
                Some(format!("Select a valid {}", field.label.to_lowercase()))
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
            FieldSpec::new("price", "Price", FieldKind::Number).required("Price is required"),
            FieldSpec::new("size", "Size", FieldKind::Text),
            FieldSpec::new("vendorId", "Vendor", FieldKind::Choice).required("Vendor is required"),
        ])
    }

    #[test]
    fn collects_every_failing_field() {
        let values = schema().defaults();
        let errors = schema().validate(&values, &ChoiceOptions::new()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("size"), None);
    }

    #[test]
    fn type_checks_run_after_required() {
        let values = schema()
            .defaults()
            .with_text("title", "Gauze")
            .with_text("price", "abc")
            .with_text("vendorId", "v1");
        let errors = schema().validate(&values, &ChoiceOptions::new()).unwrap_err();
        assert_eq!(errors.get("price"), Some("Price must be a number"));
    }

    #[test]
    fn choice_must_match_loaded_options() {
        let mut options = ChoiceOptions::new();
        options.insert("vendorId".into(), vec![("v1".into(), "Acme".into())]);
        let values = schema()
            .defaults()
            .with_text("title", "Gauze")
            .with_text("price", "4")
            .with_text("vendorId", "v2");
        let errors = schema().validate(&values, &options).unwrap_err();
        assert_eq!(errors.get("vendorId"), Some("Select a valid vendor"));
    }

    #[test]
    fn list_items_skip_blanks_and_remove_by_index() {
        let mut values = FormValues::new();
        values.push_item("doctors", "Dr. Rana");
        values.push_item("doctors", "   ");
        values.push_item("doctors", "Dr. Saleh");
        values.remove_item("doctors", 0);
        values.remove_item("doctors", 9);
        assert_eq!(values.list("doctors"), ["Dr. Saleh".to_string()]);
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        let values = FormValues::new().with_text("q", "12.0").with_text("r", "1.5");
        assert_eq!(values.i64("q"), Some(12));
        assert_eq!(values.i64("r"), None);
    }
}
