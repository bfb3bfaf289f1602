//! Form state and the `generate` request body

use serde::{Deserialize, Serialize};

/// A dietary preference checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOption {
    /// Value transmitted to the server
    pub value: String,
    /// Text shown next to the checkbox
    pub label: String,
}

impl PreferenceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Snapshot of the input form at submission time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Free-text query, untrimmed
    pub query: String,
    /// Calorie slider value exactly as the input reports it
    pub calories: String,
    /// Preference checkboxes in document order with their checked state
    pub preferences: Vec<(PreferenceOption, bool)>,
}

impl FormState {
    pub fn new(query: &str, calories: &str) -> Self {
        Self {
            query: query.to_string(),
            calories: calories.to_string(),
            preferences: Vec::new(),
        }
    }

    pub fn with_preference(mut self, option: PreferenceOption, checked: bool) -> Self {
        self.preferences.push((option, checked));
        self
    }

    /// Values of the checked preferences, in document order
    pub fn checked_preferences(&self) -> Vec<&str> {
        self.preferences
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(option, _)| option.value.as_str())
            .collect()
    }
}

/// Body of `POST /generate`
///
/// Nothing is validated: an empty query and no preferences are both legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub query: String,
    pub calories: String,
    /// Checked preference values joined with `,`
    pub prefs: String,
}

impl PlanRequest {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            query: form.query.trim().to_string(),
            calories: form.calories.clone(),
            prefs: form.checked_preferences().join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(checked: &[bool]) -> FormState {
        let options = [
            PreferenceOption::new("vegan", "Vegan"),
            PreferenceOption::new("low-carb", "Low carb"),
            PreferenceOption::new("healthy", "Healthy"),
        ];
        let mut form = FormState::new("  tofu  ", "1800");
        for (option, &on) in options.into_iter().zip(checked) {
            form = form.with_preference(option, on);
        }
        form
    }

    #[test]
    fn test_prefs_joined_in_document_order() {
        let request = PlanRequest::from_form(&form_with(&[true, true, false]));
        assert_eq!(request.prefs, "vegan,low-carb");
    }

    #[test]
    fn test_no_prefs_is_empty_string() {
        let request = PlanRequest::from_form(&form_with(&[false, false, false]));
        assert_eq!(request.prefs, "");
    }

    #[test]
    fn test_query_trimmed_calories_verbatim() {
        let request = PlanRequest::from_form(&form_with(&[false, false, true]));
        assert_eq!(request.query, "tofu");
        assert_eq!(request.calories, "1800");
        assert_eq!(request.prefs, "healthy");
    }

    #[test]
    fn test_wire_format() {
        let request = PlanRequest::from_form(&form_with(&[true, false, true]));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"query": "tofu", "calories": "1800", "prefs": "vegan,healthy"})
        );
    }

    #[test]
    fn test_empty_form_is_legal() {
        let request = PlanRequest::from_form(&FormState::default());
        assert_eq!(request.query, "");
        assert_eq!(request.calories, "");
        assert_eq!(request.prefs, "");
    }
}
